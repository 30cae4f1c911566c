//! AVL tree built on [`OrderedTree`](crate::ordered::OrderedTree).
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`rotate`] | `rotate_left`, `rotate_right` (topology only) |
//! | [`fixup`] | insertion and deletion balance propagation |
//! | [`validate`] | height-recomputing diagnostics |
//! | [`map`] / [`set`] | public [`AvlMap`] and [`AvlSet`] |

pub mod fixup;
pub mod map;
pub mod rotate;
pub mod set;
pub mod validate;

pub use fixup::{insert_fixup, remove_fixup};
pub use map::AvlMap;
pub use rotate::{rotate_left, rotate_right};
pub use set::AvlSet;
pub use validate::{assert_avl_tree, is_avl_balanced};
