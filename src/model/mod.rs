//! Remote model client for instruction resolution.
//!
//! ## Structure
//!
//! - `types`: failure taxonomy for the remote attempt
//! - `groq`: Groq chat-completions client (OpenAI-compatible dialect)

pub mod groq;
pub mod types;

pub use groq::GroqClient;
pub use types::RemoteFailure;
