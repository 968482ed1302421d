/// Errors returned by [`TreeMap`](crate::TreeMap) and the [`OrderedMap`](crate::OrderedMap)
/// contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum MapError {
    /// A key was absent where the map requires one. The key domain is non-nullable.
    #[error("key must not be absent")]
    InvalidArgument,
    /// The operation is permanently unimplemented for this map.
    #[error("`{operation}` is not supported by this map")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}
