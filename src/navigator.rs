//! Event driven navigation through the menu tree.
//!
//! Every node carries its own `Mode`. `Menu::service` looks at the mode of
//! the current node (and the kind of its field while editing), applies the
//! event and returns the node the caller has to service next.
//!
//! ```text
//!            Right                       Right (node has a field)
//!  GoBack  --------->  SubmenuSelect  ---------------------------->  EditField
//!          <---------                 <----------------------------
//!             Left                     Left / Enter (integer fields)
//! ```
//!
//! Text fields have no key editing yet, every event is ignored while a
//! text field is in `EditField`.

use log::{debug, trace, warn};

use crate::event::Event;
use crate::field::{Field, IntegerField};
use crate::menu::Menu;
use crate::node::{Callback, Mode, Node, NodeId};

/// Index after `index` among `count` siblings, wraps to the first one.
pub fn next_index(index: usize, count: usize) -> usize {
    debug_assert!(count > 0);
    if index + 1 >= count {
        0
    } else {
        index + 1
    }
}

/// Index before `index` among `count` siblings, wraps to the last one.
pub fn previous_index(index: usize, count: usize) -> usize {
    debug_assert!(count > 0);
    if index == 0 || index >= count {
        count.saturating_sub(1)
    } else {
        index - 1
    }
}

/// The reachable (mode, field kind) combinations.
enum Step<'a> {
    GoBack,
    SubmenuSelect,
    EditInteger(&'a mut IntegerField),
    EditText,
}

impl<M> Node<M> {
    fn step(&mut self) -> Step<'_> {
        match (self.mode, self.field.as_mut()) {
            (Mode::GoBack, _) => Step::GoBack,
            (Mode::EditField, Some(Field::Integer(field))) => Step::EditInteger(field),
            (Mode::EditField, Some(Field::Text(_))) => Step::EditText,
            //edit mode is never entered without a field
            (Mode::EditField, None) | (Mode::SubmenuSelect, _) => Step::SubmenuSelect,
        }
    }
}

impl<M, const N: usize> Menu<M, N> {
    /// Services one event on the `current` node.
    ///
    /// Returns the node which has to be serviced next, the same node when
    /// the event has no effect in the current mode. A handle outside the
    /// arena is returned unchanged. Handles are not tagged with their menu,
    /// an in-range handle of another `Menu` services this menu's node with
    /// the same index.
    pub fn service(&mut self, model: &mut M, current: NodeId, event: Event) -> NodeId {
        let node = match self.node_mut(current) {
            Some(node) => node,
            None => {
                warn!("service on unknown node {:?}", current);
                return current;
            }
        };
        trace!("{} {:?} {:?}", node.name, node.mode, event);

        match node.step() {
            Step::GoBack => self.service_go_back(model, current, event),
            Step::SubmenuSelect => self.service_submenu_select(model, current, event),
            Step::EditInteger(field) => {
                if edit_integer(field, event) {
                    self.set_mode(current, Mode::SubmenuSelect);
                }
                current
            }
            //reserved for text editing, passes every event through
            Step::EditText => current,
        }
    }

    fn service_go_back(&mut self, model: &mut M, current: NodeId, event: Event) -> NodeId {
        match event {
            Event::Right => {
                self.set_mode(current, Mode::SubmenuSelect);
                current
            }
            Event::Enter => match self.parent(current) {
                Some(parent) => self.enter(model, current, parent),
                None => current,
            },
            Event::Up | Event::Down | Event::Left | Event::Idle => current,
        }
    }

    fn service_submenu_select(&mut self, model: &mut M, current: NodeId, event: Event) -> NodeId {
        match event {
            Event::Up => {
                self.select_previous(current);
                current
            }
            Event::Down => {
                self.select_next(current);
                current
            }
            Event::Left => {
                self.set_mode(current, Mode::GoBack);
                current
            }
            Event::Right => {
                if self.field(current).is_some() {
                    self.set_mode(current, Mode::EditField);
                }
                current
            }
            Event::Enter => match self.selected_child(current) {
                Some(child) => self.enter(model, current, child),
                None => current,
            },
            Event::Idle => match self.node(current).and_then(|node| node.on_idle) {
                Some(on_idle) => self.invoke(model, current, current, on_idle),
                None => current,
            },
        }
    }

    /// Runs the `on_enter` of `target`, stays on `current` without one.
    fn enter(&mut self, model: &mut M, current: NodeId, target: NodeId) -> NodeId {
        match self.node(target).and_then(|node| node.on_enter) {
            Some(on_enter) => self.invoke(model, current, target, on_enter),
            None => current,
        }
    }

    fn invoke(
        &mut self,
        model: &mut M,
        current: NodeId,
        target: NodeId,
        callback: Callback<M>,
    ) -> NodeId {
        let next = match self.visit(target) {
            Some(visit) => callback(model, visit),
            None => return current,
        };

        if !self.contains(next) {
            warn!("callback of {:?} returned unknown node {:?}", target, next);
            return current;
        }
        if next != current {
            debug!(
                "current {} -> {}",
                self.name(current).unwrap_or("?"),
                self.name(next).unwrap_or("?")
            );
        }
        next
    }

    /// Selects the next child, wrapping to the first one.
    /// Returns the new index, `None` for nodes without children.
    pub fn select_next(&mut self, id: NodeId) -> Option<usize> {
        let node = self.node_mut(id)?;
        if node.children.is_empty() {
            return None;
        }
        node.selected = next_index(node.selected, node.children.len());
        Some(node.selected)
    }

    /// Selects the previous child, wrapping to the last one.
    /// Returns the new index, `None` for nodes without children.
    pub fn select_previous(&mut self, id: NodeId) -> Option<usize> {
        let node = self.node_mut(id)?;
        if node.children.is_empty() {
            return None;
        }
        node.selected = previous_index(node.selected, node.children.len());
        Some(node.selected)
    }

    fn set_mode(&mut self, id: NodeId, mode: Mode) {
        if let Some(node) = self.node_mut(id) {
            if node.mode != mode {
                debug!("{}: {:?} -> {:?}", node.name, node.mode, mode);
                node.mode = mode;
            }
        }
    }
}

/// Returns true when editing is finished.
fn edit_integer(field: &mut IntegerField, event: Event) -> bool {
    match event {
        Event::Up => {
            field.increment();
            false
        }
        Event::Down => {
            field.decrement();
            false
        }
        Event::Left | Event::Enter => true,
        Event::Right | Event::Idle => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::field::TextField;
    use crate::node::{Item, Visit};

    #[derive(Default)]
    struct Model {
        entered: u32,
        idles: u32,
        relay: bool,
    }

    fn stay(model: &mut Model, node: Visit<'_>) -> NodeId {
        model.entered += 1;
        node.id()
    }

    fn toggle(model: &mut Model, node: Visit<'_>) -> NodeId {
        model.relay = !model.relay;
        node.parent_or_self()
    }

    fn tick(model: &mut Model, mut node: Visit<'_>) -> NodeId {
        model.idles += 1;
        if let Some(field) = node.integer_mut() {
            field.increment();
        }
        node.id()
    }

    fn lost(_: &mut Model, _: Visit<'_>) -> NodeId {
        NodeId(200)
    }

    fn three_children() -> (Menu<Model, 8>, NodeId, [NodeId; 3]) {
        let mut menu = Menu::default();
        let root = menu.add_root(Item::new("Main")).unwrap();
        let a = menu.add_child(root, Item::new("A")).unwrap();
        let b = menu.add_child(root, Item::new("B")).unwrap();
        let c = menu.add_child(root, Item::new("C")).unwrap();
        (menu, root, [a, b, c])
    }

    #[test]
    fn cycling_is_a_bijection() {
        for count in 1..10 {
            for index in 0..count {
                assert_eq!(next_index(previous_index(index, count), count), index);
                assert_eq!(previous_index(next_index(index, count), count), index);
            }
        }
    }

    #[test]
    fn down_wraps_to_the_first_child() {
        let (mut menu, root, children) = three_children();
        let mut model = Model::default();

        assert_eq!(menu.service(&mut model, root, Event::Down), root);
        assert_eq!(menu.selected_child(root), Some(children[1]));

        menu.service(&mut model, root, Event::Down);
        menu.service(&mut model, root, Event::Down);
        assert_eq!(menu.node(root).unwrap().selected(), 0);
    }

    #[test]
    fn up_wraps_to_the_last_child() {
        let (mut menu, root, children) = three_children();
        let mut model = Model::default();

        menu.service(&mut model, root, Event::Up);
        assert_eq!(menu.selected_child(root), Some(children[2]));
        assert_eq!(menu.select_previous(root), Some(1));
        assert_eq!(menu.select_next(root), Some(2));
    }

    #[test]
    fn go_back_round_trip_is_a_fixed_point() {
        let (mut menu, root, _) = three_children();
        let mut model = Model::default();
        menu.service(&mut model, root, Event::Down);

        assert_eq!(menu.service(&mut model, root, Event::Left), root);
        assert_eq!(menu.mode(root), Some(Mode::GoBack));
        assert_eq!(menu.service(&mut model, root, Event::Right), root);
        assert_eq!(menu.mode(root), Some(Mode::SubmenuSelect));
        assert_eq!(menu.service(&mut model, root, Event::Left), root);
        assert_eq!(menu.mode(root), Some(Mode::GoBack));

        assert_eq!(menu.node(root).unwrap().selected(), 1);
        assert_eq!(model.entered, 0);
    }

    #[test]
    fn childless_node_ignores_selection() {
        let config = Config {
            leaf_mode: Mode::GoBack,
        };
        let mut menu: Menu<Model, 4> = Menu::new(config);
        let lonely = menu.add_root(Item::new("Lonely")).unwrap();
        let mut model = Model::default();

        menu.service(&mut model, lonely, Event::Right);
        assert_eq!(menu.mode(lonely), Some(Mode::SubmenuSelect));

        assert_eq!(menu.service(&mut model, lonely, Event::Up), lonely);
        assert_eq!(menu.service(&mut model, lonely, Event::Down), lonely);
        assert_eq!(menu.service(&mut model, lonely, Event::Enter), lonely);
        assert_eq!(menu.node(lonely).unwrap().selected(), 0);
        assert_eq!(menu.select_next(lonely), None);
        assert_eq!(menu.select_previous(lonely), None);
    }

    #[test]
    fn right_without_field_keeps_the_mode() {
        let (mut menu, root, children) = three_children();
        let mut model = Model::default();

        for &id in [root].iter().chain(children.iter()) {
            menu.service(&mut model, id, Event::Right);
            assert_eq!(menu.mode(id), Some(Mode::SubmenuSelect));
        }
    }

    #[test]
    fn integer_edit_is_clamped() {
        let mut menu: Menu<Model, 4> = Menu::default();
        let level = menu
            .add_root(Item::new("Level").field(IntegerField::bounded(10, 0, 10).unwrap()))
            .unwrap();
        let mut model = Model::default();

        menu.service(&mut model, level, Event::Right);
        assert_eq!(menu.mode(level), Some(Mode::EditField));

        menu.service(&mut model, level, Event::Up);
        assert_eq!(menu.field(level).and_then(Field::integer).map(|f| f.value()), Some(10));
        menu.service(&mut model, level, Event::Down);
        assert_eq!(menu.field(level).and_then(Field::integer).map(|f| f.value()), Some(9));

        for _ in 0..20 {
            menu.service(&mut model, level, Event::Down);
        }
        assert_eq!(menu.field(level).and_then(Field::integer).map(|f| f.value()), Some(0));

        //right and idle are ignored while editing
        menu.service(&mut model, level, Event::Right);
        menu.service(&mut model, level, Event::Idle);
        assert_eq!(menu.mode(level), Some(Mode::EditField));

        menu.service(&mut model, level, Event::Enter);
        assert_eq!(menu.mode(level), Some(Mode::SubmenuSelect));
        assert_eq!(menu.field(level).and_then(Field::integer).map(|f| f.value()), Some(0));
    }

    #[test]
    fn left_commits_the_integer() {
        let mut menu: Menu<Model, 4> = Menu::default();
        let level = menu
            .add_root(Item::new("Level").field(IntegerField::unbounded(-1)))
            .unwrap();
        let mut model = Model::default();

        menu.service(&mut model, level, Event::Right);
        menu.service(&mut model, level, Event::Down);
        menu.service(&mut model, level, Event::Left);
        assert_eq!(menu.mode(level), Some(Mode::SubmenuSelect));
        assert_eq!(menu.field(level).and_then(Field::integer).map(|f| f.value()), Some(-2));
    }

    #[test]
    fn text_edit_is_a_pass_through() {
        let mut menu: Menu<Model, 4> = Menu::default();
        let ssid = menu
            .add_root(Item::new("SSID").field(TextField::new("home").unwrap()))
            .unwrap();
        let mut model = Model::default();

        menu.service(&mut model, ssid, Event::Right);
        assert_eq!(menu.mode(ssid), Some(Mode::EditField));
        let events = [
            Event::Up,
            Event::Down,
            Event::Left,
            Event::Right,
            Event::Enter,
            Event::Idle,
        ];
        for &event in &events {
            assert_eq!(menu.service(&mut model, ssid, event), ssid);
            assert_eq!(menu.mode(ssid), Some(Mode::EditField));
        }
        assert_eq!(menu.field(ssid).and_then(Field::text).map(TextField::as_str), Some("home"));
    }

    #[test]
    fn enter_without_callback_stays() {
        let (mut menu, root, _) = three_children();
        let mut model = Model::default();
        assert_eq!(menu.service(&mut model, root, Event::Enter), root);
        assert_eq!(model.entered, 0);
    }

    #[test]
    fn enter_moves_to_the_selected_child() {
        let mut menu: Menu<Model, 4> = Menu::default();
        let root = menu.add_root(Item::new("Main")).unwrap();
        menu.add_child(root, Item::new("Info")).unwrap();
        let settings = menu
            .add_child(root, Item::new("Settings").on_enter(stay))
            .unwrap();
        let mut model = Model::default();

        menu.service(&mut model, root, Event::Down);
        assert_eq!(menu.service(&mut model, root, Event::Enter), settings);
        assert_eq!(model.entered, 1);
    }

    #[test]
    fn toggle_returns_to_the_parent() {
        let mut menu: Menu<Model, 4> = Menu::default();
        let root = menu.add_root(Item::new("Main")).unwrap();
        menu.add_child(root, Item::new("Pump").on_enter(toggle))
            .unwrap();
        let mut model = Model::default();

        assert_eq!(menu.service(&mut model, root, Event::Enter), root);
        assert!(model.relay);
        assert_eq!(menu.service(&mut model, root, Event::Enter), root);
        assert!(!model.relay);
    }

    #[test]
    fn go_back_enters_the_parent() {
        let mut menu: Menu<Model, 4> = Menu::default();
        let root = menu.add_root(Item::new("Main").on_enter(stay)).unwrap();
        let child = menu.add_child(root, Item::new("Child")).unwrap();
        let mut model = Model::default();

        menu.service(&mut model, child, Event::Left);
        assert_eq!(menu.mode(child), Some(Mode::GoBack));
        for &event in &[Event::Up, Event::Down, Event::Left, Event::Idle] {
            assert_eq!(menu.service(&mut model, child, event), child);
        }
        assert_eq!(menu.service(&mut model, child, Event::Enter), root);
        assert_eq!(model.entered, 1);
    }

    #[test]
    fn go_back_without_parent_callback_stays() {
        let mut menu: Menu<Model, 4> = Menu::default();
        let root = menu.add_root(Item::new("Main")).unwrap();
        let child = menu.add_child(root, Item::new("Child")).unwrap();
        let mut model = Model::default();

        menu.service(&mut model, child, Event::Left);
        assert_eq!(menu.service(&mut model, child, Event::Enter), child);
        menu.service(&mut model, root, Event::Left);
        assert_eq!(menu.service(&mut model, root, Event::Enter), root);
    }

    #[test]
    fn idle_runs_the_own_update() {
        let mut menu: Menu<Model, 4> = Menu::default();
        let counter = menu
            .add_root(Item::new("Uptime").field(IntegerField::unbounded(0)).on_idle(tick))
            .unwrap();
        let mut model = Model::default();

        for _ in 0..3 {
            assert_eq!(menu.service(&mut model, counter, Event::Idle), counter);
        }
        assert_eq!(model.idles, 3);
        assert_eq!(menu.field(counter).and_then(Field::integer).map(|f| f.value()), Some(3));
    }

    #[test]
    fn invalid_callback_result_is_ignored() {
        let mut menu: Menu<Model, 4> = Menu::default();
        let root = menu.add_root(Item::new("Main").on_idle(lost)).unwrap();
        let mut model = Model::default();

        assert_eq!(menu.service(&mut model, root, Event::Idle), root);
        assert_eq!(menu.service(&mut model, NodeId(9), Event::Down), NodeId(9));
    }

    #[test]
    fn handles_are_plain_arena_indices() {
        let mut menu: Menu<Model, 4> = Menu::default();
        let main = menu.add_root(Item::new("Main")).unwrap();
        let mut other: Menu<Model, 4> = Menu::default();
        other.add_root(Item::new("B0")).unwrap();
        let far = other.add_root(Item::new("B1")).unwrap();
        let mut model = Model::default();

        //outside of this arena: nothing happens
        assert_eq!(menu.service(&mut model, far, Event::Left), far);
        assert_eq!(menu.mode(main), Some(Mode::SubmenuSelect));

        //same index as a local node: that node is serviced
        menu.add_root(Item::new("Second")).unwrap();
        assert_eq!(menu.service(&mut model, far, Event::Left), far);
        assert_eq!(menu.mode(far), Some(Mode::GoBack));
        assert_eq!(menu.name(far), Some("Second"));
        assert_eq!(other.mode(far), Some(Mode::SubmenuSelect));
    }
}
