//! Typed errors for the homology network core

use thiserror::Error;

/// Errors raised by network construction and the clustering loop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The requested family count cannot partition this network: it is zero
    /// or exceeds the number of vertices.
    #[error("cluster count must be between 1 and {vertices} (requested {requested})")]
    InvalidClusterCount { requested: usize, vertices: usize },

    /// An edge index insertion named a genome that was never added.
    #[error("unknown genome `{name}` in edge index insertion")]
    UnknownVertex { name: String },

    /// The edge index emptied before the pruning loop reached its target
    /// component count.
    #[error("edge index exhausted at {reached} components (target {target})")]
    ExhaustedEdges { target: usize, reached: usize },
}
