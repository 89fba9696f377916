//! Menu composition errors
//!
//! Only building the tree can fail. Servicing events never reports errors,
//! anything without a defined transition is treated as "stay".

use crate::node::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// the node arena has no free slot left
    #[error("menu arena is full")]
    ArenaFull,

    #[error("node {0:?} has no room for more children")]
    TooManyChildren(NodeId),

    /// the handle does not belong to this menu
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),

    #[error("integer field bounds are inverted: min {min} > max {max}")]
    InvalidBounds { min: i32, max: i32 },

    #[error("text does not fit into the field buffer")]
    TextTooLong,
}

pub type Result<T> = core::result::Result<T, Error>;
