//! Recursive model hierarchy handling.
//!
//! A model tree is persisted as one row whose `description`, `buttons` and `parts` are
//! JSON text columns; `parts` holds every child subtree inline. The [`codec`] converts
//! between that flat row and [`ModelDto`](crate::model::ar_model::ModelDto), and
//! [`resolve`] expands button image references into client-fetchable URLs on the way out.

pub mod codec;
pub mod resolve;

pub use codec::{decode, encode, normalize_video, MAX_TREE_DEPTH};
pub use resolve::resolve_urls;

use crate::model::ar_model::ModelDto;

/// Number of levels in a tree; a model without parts has depth 1.
pub fn depth(tree: &ModelDto) -> usize {
    1 + tree.parts.iter().map(depth).max().unwrap_or(0)
}
