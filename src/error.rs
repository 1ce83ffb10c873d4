use thiserror::Error;

/// Errors reported by [`AvlTreeMap`](crate::AvlTreeMap).
///
/// Inserting a key that is already present is not an error: the value is replaced in place.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// A checked lookup found no entry for the key.
    #[error("no entry found for key")]
    KeyNotFound,
    /// The operation is part of the map's surface but has no implementation.
    #[error("`{operation}` is not supported by AvlTreeMap")]
    NotSupported {
        /// Name of the rejected method.
        operation: &'static str,
    },
}
