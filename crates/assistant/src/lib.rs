//! # Craftsman Assistant
//!
//! The session layer: holds the bounded conversation transcript, assembles
//! each completion request (system prompt + history + new question), and
//! performs exactly one provider round trip per question.

pub mod prompt;
pub mod session;

pub use prompt::system_prompt;
pub use session::Session;
