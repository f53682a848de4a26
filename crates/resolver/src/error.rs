use bridge_history_db::DatabaseError;

/// An error occurring at the [`crate::BatchResolver`].
///
/// A batch that has not been indexed yet is not an error: lookups surface it
/// as `Ok(None)`. This type only covers failures to reach the underlying
/// store, so callers can tell "does not exist" apart from "could not
/// determine".
#[derive(Debug, thiserror::Error)]
pub enum BatchResolverError {
    /// Database error.
    #[error(transparent)]
    Database(#[from] DatabaseError),
    /// Other error.
    #[error("{0}")]
    Other(&'static str),
}
