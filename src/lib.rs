//! Menu tree navigation driven by five buttons (up, down, left, right, enter).
//!
//! The firmware composes the tree once into a `Menu`, keeps the handle of the
//! current node, and feeds every input (or `Event::Idle` on quiet ticks) into
//! `Menu::service`, which returns the node to keep servicing.
//! Display and the bodies of the node callbacks belong to the application.
#![deny(unsafe_code)]
#![deny(warnings)]
#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod ir_remote;
pub mod keypad;
pub mod menu;
pub mod navigator;
pub mod node;

pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::event::Event;
pub use crate::field::{Field, IntegerField, TextField, FIELD_TEXT_LEN};
pub use crate::keypad::Keypad;
pub use crate::menu::Menu;
pub use crate::navigator::{next_index, previous_index};
pub use crate::node::{Callback, Item, Mode, Node, NodeId, Visit, MAX_CHILDREN};
