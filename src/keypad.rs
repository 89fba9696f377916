//! Five push buttons on GPIO inputs with internal pullup, pressed = low

use embedded_hal::digital::v2::InputPin;

use crate::event::Event;

//bit order of the buttons, also the priority of simultaneous presses
const KEYS: [Event; 5] = [Event::Up, Event::Down, Event::Left, Event::Right, Event::Enter];

pub struct Keypad<UP, DOWN, LEFT, RIGHT, ENTER> {
    up: UP,
    down: DOWN,
    left: LEFT,
    right: RIGHT,
    enter: ENTER,
    pressed: u8, //one bit per button, see KEYS
}

impl<UP, DOWN, LEFT, RIGHT, ENTER, ERROR> Keypad<UP, DOWN, LEFT, RIGHT, ENTER>
where
    UP: InputPin<Error = ERROR>,
    DOWN: InputPin<Error = ERROR>,
    LEFT: InputPin<Error = ERROR>,
    RIGHT: InputPin<Error = ERROR>,
    ENTER: InputPin<Error = ERROR>,
{
    pub fn new(up: UP, down: DOWN, left: LEFT, right: RIGHT, enter: ENTER) -> Self {
        Keypad {
            up,
            down,
            left,
            right,
            enter,
            pressed: 0,
        }
    }

    fn scan(&self) -> Result<u8, ERROR> {
        let levels = [
            self.up.is_low()?,
            self.down.is_low()?,
            self.left.is_low()?,
            self.right.is_low()?,
            self.enter.is_low()?,
        ];
        Ok(levels
            .iter()
            .enumerate()
            .fold(0u8, |mask, (bit, &low)| if low { mask | (1 << bit) } else { mask }))
    }

    /// Reports a button once when it gets pressed.
    ///
    /// *Note*: holding a button does not repeat it, `WouldBlock` is returned
    /// until another button goes down.
    pub fn read(&mut self) -> nb::Result<Event, ERROR> {
        let pressed = self.scan()?;
        let fresh = pressed & !self.pressed;
        self.pressed = pressed;

        KEYS.iter()
            .enumerate()
            .find(|&(bit, _)| fresh & (1 << bit) != 0)
            .map(|(_, &event)| event)
            .ok_or(nb::Error::WouldBlock)
    }

    /// Like `read` but reports `Event::Idle` when nothing new was pressed,
    /// ready to be fed into `Menu::service` on every tick.
    pub fn poll(&mut self) -> Result<Event, ERROR> {
        match self.read() {
            Ok(event) => Ok(event),
            Err(nb::Error::WouldBlock) => Ok(Event::Idle),
            Err(nb::Error::Other(error)) => Err(error),
        }
    }

    pub fn release(self) -> (UP, DOWN, LEFT, RIGHT, ENTER) {
        (self.up, self.down, self.left, self.right, self.enter)
    }
}
