use crate::types::Id;
use thiserror::Error;

/// Why a single property assignment on an element was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("cannot assign to read only property '{0}'")]
    ReadOnly(String),
    #[error("cannot set '{0}' on an element without a parent")]
    NoParent(String),
    #[error("'{key}' does not accept the value {value}")]
    IndexSize { key: String, value: String },
    #[error("'{0}' is not an object on this element")]
    NotAnObject(String),
    #[error("'{0}' is not a valid dataset key")]
    InvalidDatasetKey(String),
    #[error("'{0}' is not a valid class token")]
    InvalidToken(String),
    #[error("properties can only be assigned on elements")]
    NotAnElement,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("no node with id {0:?}")]
    NotFound(Id),
    #[error("node {0:?} cannot hold children")]
    NotAContainer(Id),
}
