//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the clinical screener domain.

mod clinical_domain;
mod errors;
mod ids;
mod timestamp;

pub use clinical_domain::ClinicalDomain;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{QuestionId, SubmissionId};
pub use timestamp::Timestamp;
