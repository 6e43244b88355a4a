pub mod debug;
pub mod fragment;
pub mod traverse;

mod class_list;
mod entities;
mod error;
mod host;
mod properties;
mod types;

pub use crate::error::{PropertyError, TreeError};
pub use crate::host::{Document, DocumentHost, NodeAllocator};
pub use crate::types::{Id, Node, NodeId, Scalar};
