//! Menu nodes living in the `Menu` arena, addressed by `NodeId`

use crate::field::{Field, IntegerField, TextField};
use heapless::Vec;

/// maximum number of children of one node
pub const MAX_CHILDREN: usize = 16;

/// Stable handle of a node inside its `Menu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u8);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    ///asks the user to confirm going back to the parent
    GoBack,
    ///moves the selection between the children
    SubmenuSelect,
    ///changes the value of the node's field
    EditField,
}

/// Called with the application model and the node owning the callback,
/// returns the node which becomes the current one.
/// Usually that is `node.id()`, but e.g. a toggle action may return its parent.
pub type Callback<M> = fn(model: &mut M, node: Visit<'_>) -> NodeId;

/// Describes a node to be added to a `Menu`.
pub struct Item<M> {
    pub(crate) name: &'static str,
    pub(crate) field: Option<Field>,
    pub(crate) on_enter: Option<Callback<M>>,
    pub(crate) on_idle: Option<Callback<M>>,
}

impl<M> Item<M> {
    pub fn new(name: &'static str) -> Self {
        Item {
            name,
            field: None,
            on_enter: None,
            on_idle: None,
        }
    }

    pub fn field<F: Into<Field>>(mut self, field: F) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn on_enter(mut self, callback: Callback<M>) -> Self {
        self.on_enter = Some(callback);
        self
    }

    pub fn on_idle(mut self, callback: Callback<M>) -> Self {
        self.on_idle = Some(callback);
        self
    }
}

pub struct Node<M> {
    pub(crate) name: &'static str,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId, MAX_CHILDREN>,
    pub(crate) mode: Mode,
    pub(crate) selected: usize,
    pub(crate) field: Option<Field>,
    pub(crate) on_enter: Option<Callback<M>>,
    pub(crate) on_idle: Option<Callback<M>>,
}

impl<M> Node<M> {
    pub(crate) fn new(item: Item<M>, parent: Option<NodeId>, mode: Mode) -> Self {
        Node {
            name: item.name,
            parent,
            children: Vec::new(),
            mode,
            selected: 0,
            field: item.field,
            on_enter: item.on_enter,
            on_idle: item.on_idle,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// index of the selected child, meaningless without children
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_child(&self) -> Option<NodeId> {
        self.children.get(self.selected).copied()
    }

    pub fn field(&self) -> Option<&Field> {
        self.field.as_ref()
    }

    pub fn has_on_enter(&self) -> bool {
        self.on_enter.is_some()
    }

    pub fn has_on_idle(&self) -> bool {
        self.on_idle.is_some()
    }

    pub(crate) fn visit(&mut self, id: NodeId) -> Visit<'_> {
        let Node {
            parent,
            children,
            selected,
            field,
            ..
        } = self;

        Visit {
            id,
            parent: *parent,
            children: children.as_slice(),
            selected: *selected,
            field: field.as_mut(),
        }
    }
}

/// The view of a node handed to its callbacks.
/// The links are read only, only the field can be changed.
pub struct Visit<'a> {
    id: NodeId,
    parent: Option<NodeId>,
    children: &'a [NodeId],
    selected: usize,
    field: Option<&'a mut Field>,
}

impl<'a> Visit<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// the parent, or this node for the roots
    pub fn parent_or_self(&self) -> NodeId {
        self.parent.unwrap_or(self.id)
    }

    pub fn children(&self) -> &[NodeId] {
        self.children
    }

    pub fn selected_child(&self) -> Option<NodeId> {
        self.children.get(self.selected).copied()
    }

    pub fn field(&self) -> Option<&Field> {
        self.field.as_deref()
    }

    pub fn field_mut(&mut self) -> Option<&mut Field> {
        self.field.as_deref_mut()
    }

    pub fn integer_mut(&mut self) -> Option<&mut IntegerField> {
        match self.field_mut() {
            Some(Field::Integer(field)) => Some(field),
            _ => None,
        }
    }

    pub fn text_mut(&mut self) -> Option<&mut TextField> {
        match self.field_mut() {
            Some(Field::Text(field)) => Some(field),
            _ => None,
        }
    }
}
