use crate::node::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Mode of nodes without children when the menu is composed.
    /// `EditField` only applies to leaves carrying a field,
    /// the others start in `SubmenuSelect`.
    pub leaf_mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            leaf_mode: Mode::SubmenuSelect,
        }
    }
}

impl Config {
    pub(crate) fn initial_leaf_mode(&self, has_field: bool) -> Mode {
        match self.leaf_mode {
            Mode::EditField if !has_field => Mode::SubmenuSelect,
            mode => mode,
        }
    }
}
