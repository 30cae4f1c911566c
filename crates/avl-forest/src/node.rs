use crate::types::{KvNode, Node};

/// Tree node carrying a key, a value and an auxiliary per-node payload.
///
/// The unbalanced tree uses `A = ()`; the AVL tree uses `A = i8` to hold the
/// balance factor `height(left) - height(right)`.
///
/// Links are only reachable through the [`Node`] trait; the fields stay
/// private to the crate.
///
/// ```compile_fail
/// use avl_forest::TreeNode;
///
/// let mut node: TreeNode<i32, ()> = TreeNode::new(1, ());
/// node.p = Some(7);
/// ```
#[derive(Clone, Debug)]
pub struct TreeNode<K, V, A = ()> {
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
    k: K,
    v: V,
    pub(crate) aux: A,
}

impl<K, V, A: Default> TreeNode<K, V, A> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            aux: A::default(),
        }
    }
}

impl<K, V, A> TreeNode<K, V, A> {
    pub fn into_entry(self) -> (K, V) {
        (self.k, self.v)
    }
}

impl<K, V, A> Node for TreeNode<K, V, A> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V, A> KvNode<K, V> for TreeNode<K, V, A> {
    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.v, value)
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike: Node {
    fn bf(&self) -> i8;
    fn set_bf(&mut self, bf: i8);
}

impl<K, V> AvlNodeLike for TreeNode<K, V, i8> {
    fn bf(&self) -> i8 {
        self.aux
    }

    fn set_bf(&mut self, bf: i8) {
        self.aux = bf;
    }
}
