//! Question catalog port (read side).
//!
//! The catalog is the canonical set of questions and their domain
//! assignments, populated once at bootstrap and read-only at request time.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::screening::Question;

/// Read port for the question catalog.
///
/// Implementations must be safe for unsynchronized concurrent reads and must
/// return content in a stable order: two calls with no catalog mutation in
/// between return identical lists.
#[async_trait]
pub trait QuestionCatalog: Send + Sync {
    /// Returns every catalog question with its resolved domain.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if the underlying store cannot be reached. Fatal for
    ///   the current request; retries belong to the transport layer.
    async fn get_all_questions(&self) -> Result<Vec<Question>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_catalog_is_object_safe() {
        fn _accepts_dyn(_catalog: &dyn QuestionCatalog) {}
    }
}
