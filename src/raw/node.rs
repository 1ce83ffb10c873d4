use super::handle::Handle;
use super::height::Height;

/// Which child link of a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// The arena owns every node; `left`/`right` are the tree edges and `top` is the back-reference
// used to walk toward the root. `top` is `None` only at the root.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    key: K,
    value: V,
    height: Height,
    left: Option<Handle>,
    right: Option<Handle>,
    top: Option<Handle>,
}

impl<K, V> Node<K, V> {
    /// Creates a new leaf hanging off `top`.
    pub(crate) const fn new(key: K, value: V, top: Option<Handle>) -> Self {
        Self {
            key,
            value,
            height: Height::LEAF,
            left: None,
            right: None,
            top,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Splits the borrow so the key stays shared while the value is handed out mutably.
    pub(crate) fn key_value_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    pub(crate) fn into_key_value(self) -> (K, V) {
        (self.key, self.value)
    }

    #[inline]
    pub(crate) fn height(&self) -> Height {
        self.height
    }

    pub(crate) fn set_height(&mut self, height: Height) {
        self.height = height;
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub(crate) fn top(&self) -> Option<Handle> {
        self.top
    }

    pub(crate) fn set_top(&mut self, top: Option<Handle>) {
        self.top = top;
    }

    /// Which side of this node `child` hangs from, if it is a direct child.
    pub(crate) fn side_of(&self, child: Handle) -> Option<Side> {
        if self.left == Some(child) {
            Some(Side::Left)
        } else if self.right == Some(child) {
            Some(Side::Right)
        } else {
            None
        }
    }
}
