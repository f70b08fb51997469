//! solace-core
//!
//! Pure domain types shared across the Solace services: conversation
//! messages, questionnaire kinds, risk tiers, assessment results, and the
//! crisis-resource directory. No I/O — this is the shared vocabulary of
//! the Solace system.

pub mod models;
