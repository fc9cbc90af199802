//! Scoring - domain aggregation and assessment determination.
//!
//! Pure computation over already-validated answers. Domain resolution is the
//! caller's job (it needs a catalog read); these functions only fold the
//! resolved table into per-domain sums and apply the threshold configuration
//! on [`ClinicalDomain`].

use std::collections::{BTreeMap, HashMap};

use crate::domain::foundation::{ClinicalDomain, QuestionId};
use crate::domain::screening::NewAnswer;

/// Accumulates `sum(value)` per clinical domain.
///
/// An answer whose question id is absent from `domains` is skipped silently;
/// upstream validation should prevent that, but scoring must not fail on it.
pub fn aggregate_domain_scores(
    answers: &[NewAnswer],
    domains: &HashMap<QuestionId, ClinicalDomain>,
) -> BTreeMap<ClinicalDomain, i32> {
    let mut scores = BTreeMap::new();
    for answer in answers {
        if let Some(domain) = domains.get(answer.question_id()) {
            *scores.entry(*domain).or_insert(0) += answer.value().as_i32();
        }
    }
    scores
}

/// Maps per-domain scores to the deduplicated list of triggered assessments.
///
/// A domain whose score meets or exceeds its threshold contributes its
/// assessment name. Two domains can share an assessment (depression and
/// anxiety both trigger PHQ-9); each name appears once, in the order domains
/// first trigger it. `BTreeMap` iteration follows [`ClinicalDomain`]
/// declaration order, so the output is deterministic.
pub fn determine_assessments(scores: &BTreeMap<ClinicalDomain, i32>) -> Vec<String> {
    let mut assessments: Vec<String> = Vec::new();
    for (domain, score) in scores {
        if *score >= domain.threshold() {
            let name = domain.assessment();
            if !assessments.iter().any(|a| a == name) {
                assessments.push(name.to_string());
            }
        }
    }
    assessments
}
