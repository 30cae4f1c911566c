//! Arena-based AVL tree map.
//!
//! Nodes live in an [`Arena`] and refer to each other through `Option<u32>`
//! handles: left and right children own their subtrees, the parent handle is
//! a back-reference used only to walk upward. One generic [`TreeNode`] serves
//! both layers through its auxiliary payload (`()` unbalanced, `i8` balance
//! factor for AVL).
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] / [`KvNode`] traits, [`Side`] |
//! | [`arena`] | slot arena with free list |
//! | [`node`] | [`TreeNode`] and the [`AvlNodeLike`] balance accessors |
//! | [`util`] | `first`, `last`, `next`, `prev`, `height`, [`util::swap`] |
//! | [`ordered`] | [`OrderedTree`]: find, predecessor/successor, structural insert/remove, node swap |
//! | [`avl`] | rotations, insert/remove fixup, [`AvlMap`], [`AvlSet`] |
//! | [`iter`] | ascending [`Iter`] and [`Cursor`] |
//!
//! ```
//! use avl_forest::AvlMap;
//!
//! let mut map = AvlMap::new();
//! for k in [1, 2, 3] {
//!     map.insert(k, k * 10);
//! }
//! assert_eq!(map.root_key(), Some(&2));
//! assert_eq!(map.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert!(map.is_balanced());
//! ```

pub mod arena;
pub mod avl;
pub mod error;
pub mod iter;
pub mod node;
pub mod ordered;
pub mod types;
pub mod util;

pub use arena::Arena;
pub use avl::{AvlMap, AvlSet};
pub use error::{Error, Result};
pub use iter::{Cursor, Iter};
pub use node::{AvlNodeLike, TreeNode};
pub use ordered::{BstMap, Detachment, Insertion, OrderedTree};
pub use types::{KvNode, Node, Side};
