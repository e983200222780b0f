pub mod assessment;
pub mod recommendation;
pub mod session;
pub mod transcript;
pub mod user;
