//! Single-parent shared-page trees.
//!
//! A tree fixture partitions a guest population recursively. At every
//! internal node the pages shared by *all* guests below it are lifted into
//! that node, so each guest's full page set is the union of the pages along
//! its root-to-leaf path.
//!
//! ```text
//! {pages: [shared by all]}
//! ├── {pages: [shared by guests 0, 2]}
//! │   ├── leaf {pages, guest_pages}   guest 0
//! │   └── leaf {pages, guest_pages}   guest 2
//! └── leaf {pages, guest_pages}       guest 1
//! ```
//!
//! [`generate_tree`] runs a whole session from a [`TreeConfig`];
//! [`TreeBuilder`] is the recursive partitioner on its own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builder;
pub mod config;
pub mod node;

pub use builder::{generate_tree, TreeBuilder};
pub use config::TreeConfig;
pub use node::{TreeInstance, TreeNode};
