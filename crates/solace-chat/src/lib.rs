//! solace-chat
//!
//! The conversational core of Solace: the assessment session state
//! machine, the per-conversation controller, and the support responders
//! (local canned replies or a remote hosted model).

pub mod assessment;
pub mod controller;
pub mod error;
pub mod escalation;
pub mod remote;
pub mod responder;
