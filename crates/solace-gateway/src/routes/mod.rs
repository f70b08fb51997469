pub mod chat;
pub mod conversations;
pub mod crisis;
pub mod health;
pub mod questionnaires;
