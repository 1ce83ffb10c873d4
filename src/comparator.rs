use core::cmp::Ordering;
use core::fmt;

/// A total order over keys, chosen when a map is constructed.
///
/// Lookups may use any borrowed form `Q` of the key type, so a comparator used with borrowed
/// lookups must implement `Comparator<Q>` and order `Q` exactly as it orders the owned keys.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use avl_map::{AvlTreeMap, Comparator};
///
/// struct ByLength;
///
/// impl Comparator<str> for ByLength {
///     fn compare(&self, a: &str, b: &str) -> Ordering {
///         a.len().cmp(&b.len()).then_with(|| a.cmp(b))
///     }
/// }
///
/// impl Comparator<String> for ByLength {
///     fn compare(&self, a: &String, b: &String) -> Ordering {
///         <Self as Comparator<str>>::compare(self, a, b)
///     }
/// }
///
/// let mut map = AvlTreeMap::with_comparator(ByLength);
/// map.insert(String::from("ccc"), 3);
/// map.insert(String::from("a"), 1);
/// map.insert(String::from("bb"), 2);
///
/// assert_eq!(map.get("bb"), Some(&2));
/// assert_eq!(map.values().copied().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns the ordering of `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The key type's own [`Ord`] implementation. This is the default order of an
/// [`AvlTreeMap`](crate::AvlTreeMap).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: ?Sized + Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a closure into a [`Comparator`].
///
/// # Examples
///
/// ```
/// use avl_map::{AvlTreeMap, FnComparator};
///
/// let mut map = AvlTreeMap::with_comparator(FnComparator(|a: &i32, b: &i32| b.cmp(a)));
/// map.extend([(1, "a"), (3, "c"), (2, "b")]);
///
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnComparator<F>(pub F);

impl<T: ?Sized, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for FnComparator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparator(..)")
    }
}
