//! Catalog question entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ClinicalDomain, QuestionId, ValidationError};

/// A single screener question with its resolved clinical domain.
///
/// Immutable after catalog load; the catalog is populated once at bootstrap
/// and read-only at request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    question_id: QuestionId,
    title: String,
    domain: ClinicalDomain,
}

impl Question {
    /// Creates a question, rejecting an empty title.
    pub fn new(
        question_id: QuestionId,
        title: impl Into<String>,
        domain: ClinicalDomain,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(Self {
            question_id,
            title,
            domain,
        })
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.question_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn domain(&self) -> ClinicalDomain {
        self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(key: &str) -> QuestionId {
        QuestionId::new(key).unwrap()
    }

    #[test]
    fn question_exposes_its_fields() {
        let q = Question::new(
            qid("question_a"),
            "Little interest or pleasure in doing things?",
            ClinicalDomain::Depression,
        )
        .unwrap();

        assert_eq!(q.question_id().as_str(), "question_a");
        assert_eq!(q.title(), "Little interest or pleasure in doing things?");
        assert_eq!(q.domain(), ClinicalDomain::Depression);
    }

    #[test]
    fn question_rejects_blank_title() {
        assert!(Question::new(qid("question_a"), "   ", ClinicalDomain::Mania).is_err());
    }
}
