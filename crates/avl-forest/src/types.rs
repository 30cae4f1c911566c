//! Node trait definitions.
//!
//! Every "pointer" in a tree is an `Option<u32>` handle into the tree's
//! [`Arena`](crate::arena::Arena). Child handles are owning in the sense that
//! a node is released together with the subtree it roots on `clear`; the
//! parent handle is only ever used for upward navigation.

/// Tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value node interface used by map-like structures.
///
/// The key is fixed at construction; only the value can be replaced.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V) -> V;
}

/// Which child slot of a parent a node occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}
