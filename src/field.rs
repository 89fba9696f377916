//! Editable values attached to menu nodes

use crate::error::{Error, Result};
use heapless::String;

/// capacity of a text field in bytes
pub const FIELD_TEXT_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Integer(IntegerField),
    Text(TextField),
}

impl Field {
    pub fn integer(&self) -> Option<&IntegerField> {
        match self {
            Field::Integer(field) => Some(field),
            Field::Text(_) => None,
        }
    }

    pub fn text(&self) -> Option<&TextField> {
        match self {
            Field::Text(field) => Some(field),
            Field::Integer(_) => None,
        }
    }
}

impl From<IntegerField> for Field {
    fn from(field: IntegerField) -> Self {
        Field::Integer(field)
    }
}

impl From<TextField> for Field {
    fn from(field: TextField) -> Self {
        Field::Text(field)
    }
}

/// Signed value with optional inclusive bounds.
/// The value is kept inside the bounds by every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerField {
    value: i32,
    min: Option<i32>,
    max: Option<i32>,
}

impl IntegerField {
    /// The initial value is clamped into the bounds.
    pub fn new(value: i32, min: Option<i32>, max: Option<i32>) -> Result<Self> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(Error::InvalidBounds { min, max });
            }
        }

        let mut field = IntegerField { value, min, max };
        field.value = field.clamp(value);
        Ok(field)
    }

    pub fn bounded(value: i32, min: i32, max: i32) -> Result<Self> {
        Self::new(value, Some(min), Some(max))
    }

    pub fn unbounded(value: i32) -> Self {
        IntegerField {
            value,
            min: None,
            max: None,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn min(&self) -> Option<i32> {
        self.min
    }

    pub fn max(&self) -> Option<i32> {
        self.max
    }

    /// Stores the value clamped into the bounds, returns what was stored.
    pub fn set(&mut self, value: i32) -> i32 {
        self.value = self.clamp(value);
        self.value
    }

    pub fn increment(&mut self) -> i32 {
        self.set(self.value.saturating_add(1))
    }

    pub fn decrement(&mut self) -> i32 {
        self.set(self.value.saturating_sub(1))
    }

    fn clamp(&self, value: i32) -> i32 {
        num_traits::clamp(
            value,
            self.min.unwrap_or(i32::MIN),
            self.max.unwrap_or(i32::MAX),
        )
    }
}

/// Bounded text buffer.
/// Editing it from the keys is not supported yet, the application may
/// rewrite it from its callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    text: String<FIELD_TEXT_LEN>,
}

impl TextField {
    pub fn new(text: &str) -> Result<Self> {
        let mut field = TextField {
            text: String::new(),
        };
        field.set(text)?;
        Ok(field)
    }

    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// On error the previous content is kept.
    pub fn set(&mut self, text: &str) -> Result<()> {
        if text.len() > FIELD_TEXT_LEN {
            return Err(Error::TextTooLong);
        }
        self.text.clear();
        self.text.push_str(text).map_err(|_| Error::TextTooLong)
    }
}
