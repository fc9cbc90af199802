//! Clinical Screener - mental-health screening questionnaire backend
//!
//! Serves a fixed question catalog grouped by clinical domain, accepts a
//! single completed submission per session, persists the answers atomically,
//! and computes which follow-up assessments the domain scores trigger.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
