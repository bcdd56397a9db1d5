//! Error types for the sharegen generators.
//!
//! Generation itself cannot fail once its inputs are accepted: the only
//! failures are malformed parameters, rejected before any random draw.

use std::error::Error;
use std::fmt;

use crate::id::NodeId;

/// Broad classification of a [`ConfigError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter violates a precondition of the requested build.
    InvalidArgument,
}

/// Errors detected while validating generator parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The build was asked to place zero guests.
    NoGuests,
    /// A degree or fan-out parameter is zero.
    ZeroDegree {
        /// Name of the offending parameter.
        param: &'static str,
    },
    /// A fan-out bound of 1 cannot split more than one guest, so the
    /// recursion would never reach a leaf.
    FanOutTooSmall {
        /// Name of the offending parameter.
        param: &'static str,
    },
    /// `min_node_degree` is greater than `max_node_degree`.
    DegreeRange {
        /// Configured minimum degree.
        min: u32,
        /// Configured maximum degree.
        max: u32,
    },
    /// A single node could be asked for more pages than the universe holds.
    NodePagesExceedUniverse {
        /// Configured per-node page maximum.
        max_node_page_count: u32,
        /// Configured universe size.
        instance_page_count: u32,
    },
    /// A parent id passed to a cluster build names no existing node.
    UnknownParent {
        /// The unresolved id.
        id: NodeId,
    },
}

impl ConfigError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGuests => write!(f, "guest_count must be at least 1"),
            Self::ZeroDegree { param } => write!(f, "{param} must be at least 1"),
            Self::FanOutTooSmall { param } => {
                write!(f, "{param} must be at least 2 to split more than one guest")
            }
            Self::DegreeRange { min, max } => {
                write!(
                    f,
                    "min_node_degree {min} is greater than max_node_degree {max}"
                )
            }
            Self::NodePagesExceedUniverse {
                max_node_page_count,
                instance_page_count,
            } => {
                write!(
                    f,
                    "max_node_page_count {max_node_page_count} exceeds instance_page_count {instance_page_count}"
                )
            }
            Self::UnknownParent { id } => write!(f, "parent node {id} does not exist"),
        }
    }
}

impl Error for ConfigError {}
