//! # Craftsman Core
//!
//! Domain types, traits, and error definitions for the Craftsman Laravel
//! development assistant. This crate has **zero framework dependencies** — it
//! defines the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every seam is defined as a trait here. Implementations live in their
//! respective crates. This enables:
//! - Swapping the LLM backend via configuration
//! - Easy testing with scripted/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod message;
pub mod provider;
pub mod sink;

// Re-export key types at crate root for ergonomics
pub use error::{Error, KnowledgeError, ProviderError, Result};
pub use message::{ConversationHistory, Message, Role};
pub use provider::{CompletionRequest, CompletionResponse, Provider, Usage};
pub use sink::{NullSink, OutputSink};
