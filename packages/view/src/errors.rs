//! Error types for the view tree

use crate::node::NodeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Node not found: {0}")]
    UnknownNode(NodeId),

    #[error("Node cannot hold children: {0}")]
    NotAContainer(NodeId),

    #[error("Document fragment cannot be inserted into another container: {0}")]
    FragmentNotInsertable(NodeId),

    #[error("Would create cycle")]
    CycleDetected,

    #[error("Index {index} out of bounds for {len} children")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Range of {count} at {index} out of bounds for {len} children")]
    RangeOutOfBounds { index: usize, count: usize, len: usize },

    #[error("Text proxy {offset}+{length} exceeds text of {len} characters")]
    InvalidTextProxy {
        offset: usize,
        length: usize,
        len: usize,
    },

    #[error("Node is not text: {0}")]
    NotText(NodeId),

    #[error("Node is not an element: {0}")]
    NotAnElement(NodeId),

    #[error("Node is not a document fragment: {0}")]
    NotAFragment(NodeId),

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type ViewResult<T> = Result<T, ViewError>;
