pub mod assessment;
pub mod crisis;
pub mod message;
