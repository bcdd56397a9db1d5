//! Core types for the sharegen fixture generators.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the tree and cluster builders: page, guest and node
//! identifiers, the [`PageSet`] bitset, the [`PageUniverse`] pages are drawn
//! from, per-guest page maps, and the configuration error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod guest;
pub mod id;
pub mod page;
pub mod universe;

pub use error::{ConfigError, ErrorKind};
pub use guest::{max_page_count, random_guest_pages, GuestPages};
pub use id::{GuestId, NodeId, NodeIdAllocator, PageId};
pub use page::PageSet;
pub use universe::PageUniverse;
