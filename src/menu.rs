//! Fixed capacity arena holding the menu tree.
//!
//! The tree is composed once at startup with `add_root` / `add_child`,
//! nodes are never removed or moved afterwards. Handles stay valid for the
//! lifetime of the `Menu`.

use core::convert::TryFrom;

use heapless::Vec;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::field::Field;
use crate::node::{Item, Mode, Node, NodeId, Visit};

pub struct Menu<M, const N: usize> {
    nodes: Vec<Node<M>, N>,
    config: Config,
}

impl<M, const N: usize> Default for Menu<M, N> {
    fn default() -> Self {
        Menu::new(Config::default())
    }
}

impl<M, const N: usize> Menu<M, N> {
    pub fn new(config: Config) -> Self {
        Menu {
            nodes: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Adds a top level node (without parent).
    pub fn add_root(&mut self, item: Item<M>) -> Result<NodeId> {
        self.insert(None, item)
    }

    /// Appends a node to the end of the parent's children.
    pub fn add_child(&mut self, parent: NodeId, item: Item<M>) -> Result<NodeId> {
        match self.nodes.get(parent.index()) {
            None => Err(Error::UnknownNode(parent)),
            Some(node) if node.children.is_full() => Err(Error::TooManyChildren(parent)),
            Some(_) => self.insert(Some(parent), item),
        }
    }

    fn insert(&mut self, parent: Option<NodeId>, item: Item<M>) -> Result<NodeId> {
        if self.nodes.is_full() {
            return Err(Error::ArenaFull);
        }
        let id = u8::try_from(self.nodes.len())
            .map(NodeId)
            .map_err(|_| Error::ArenaFull)?;

        let mode = self.config.initial_leaf_mode(item.field.is_some());
        self.nodes
            .push(Node::new(item, parent, mode))
            .map_err(|_| Error::ArenaFull)?;

        if let Some(parent) = parent {
            let node = &mut self.nodes[parent.index()];
            if node.children.is_empty() {
                //not a leaf anymore
                node.mode = Mode::SubmenuSelect;
            }
            node.children
                .push(id)
                .map_err(|_| Error::TooManyChildren(parent))?;
        }

        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<M>> {
        self.nodes.get(id.index())
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<M>> {
        self.nodes.get_mut(id.index())
    }

    pub(crate) fn visit(&mut self, id: NodeId) -> Option<Visit<'_>> {
        self.nodes.get_mut(id.index()).map(|node| node.visit(id))
    }

    pub fn mode(&self, id: NodeId) -> Option<Mode> {
        self.node(id).map(Node::mode)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    pub fn selected_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::selected_child)
    }

    pub fn field(&self, id: NodeId) -> Option<&Field> {
        self.node(id).and_then(Node::field)
    }

    pub fn name(&self, id: NodeId) -> Option<&'static str> {
        self.node(id).map(Node::name)
    }

    /// top level nodes in composition order
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(index, _)| NodeId(index as u8))
    }
}
