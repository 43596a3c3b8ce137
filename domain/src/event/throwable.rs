//! Throwable value carried alongside a log call

use std::error::Error;
use std::sync::Arc;
use thiserror::Error;

/// Plain-text error used when a caller only has a message
#[derive(Error, Debug)]
#[error("{0}")]
struct MessageError(String);

/// An error attached to a log call.
///
/// Cloning shares the underlying error, so the value an engine receives is
/// the same allocation the caller attached. Equality is identity.
#[derive(Clone)]
pub struct Throwable(Arc<dyn Error + Send + Sync + 'static>);

impl Throwable {
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Create a throwable from a bare message
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::new(MessageError(message.into()))
    }

    /// Top-level error message
    pub fn message(&self) -> String {
        self.0.to_string()
    }

    pub fn as_error(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Iterate the error and its sources, outermost first
    pub fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        let first: &(dyn Error + 'static) = self.0.as_ref();
        std::iter::successors(Some(first), |e| (*e).source())
    }

    /// Messages of the error and all its sources
    pub fn chain_messages(&self) -> Vec<String> {
        self.chain().map(|e| e.to_string()).collect()
    }

    pub fn ptr_eq(a: &Throwable, b: &Throwable) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl PartialEq for Throwable {
    fn eq(&self, other: &Self) -> bool {
        Throwable::ptr_eq(self, other)
    }
}

impl std::fmt::Debug for Throwable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Throwable").field(&self.message()).finish()
    }
}

impl std::fmt::Display for Throwable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Error, Debug)]
    #[error("query failed")]
    struct QueryError {
        #[source]
        source: std::io::Error,
    }

    #[test]
    fn test_throwable_from_message() {
        let t = Throwable::from_message("boom");
        assert_eq!(t.message(), "boom");
        assert_eq!(t.to_string(), "boom");
    }

    #[test]
    fn test_throwable_chain_includes_sources() {
        let t = Throwable::new(QueryError {
            source: std::io::Error::other("connection reset"),
        });
        assert_eq!(t.chain_messages(), vec!["query failed", "connection reset"]);
    }

    #[test]
    fn test_throwable_equality_is_identity() {
        let a = Throwable::from_message("same");
        let b = Throwable::from_message("same");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
