/// One discrete input, serviced by `Menu::service`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Up,
    Down,
    Left,
    Right,
    Enter,
    ///no key was pressed, drives the `on_idle` callbacks
    Idle,
}

impl Default for Event {
    fn default() -> Self {
        Event::Idle
    }
}
