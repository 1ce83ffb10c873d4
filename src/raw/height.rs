/// Height of an AVL subtree: 0 for an absent child, 1 for a leaf.
///
/// The balance condition bounds the height of a tree of `n` nodes by roughly `1.44 * log2(n)`,
/// so a byte covers any tree the arena can address.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
#[repr(transparent)]
pub(crate) struct Height(u8);

impl Height {
    pub(crate) const ZERO: Self = Self(0);
    pub(crate) const LEAF: Self = Self(1);

    /// Height of a node whose children have the given heights.
    #[inline]
    pub(crate) const fn above(left: Self, right: Self) -> Self {
        let tallest = if left.0 > right.0 { left.0 } else { right.0 };
        Self(tallest + 1)
    }

    /// `height(left) - height(right)`. Positive means left-heavy.
    #[inline]
    pub(crate) const fn balance(left: Self, right: Self) -> i16 {
        left.0 as i16 - right.0 as i16
    }

    #[inline]
    pub(crate) const fn to_usize(self) -> usize {
        self.0 as usize
    }
}
