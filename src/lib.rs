//! Natural-language calculator backend.
//!
//! Resolves arithmetic instructions written in plain English ("Add 5 and 3",
//! "What is four times five") through a remote tool-calling model, with a
//! deterministic keyword parser as the fallback, and records every computed
//! result in SQLite.
//!
//! # Architecture
//!
//! - `normalize`: word-to-digit rewriting of raw instructions
//! - `ops`: the four operations, operand binding, result sentences
//! - `fallback`: keyword-based local parser
//! - `model`: Groq chat-completions client (remote tool calling)
//! - `resolver`: the normalize, remote, local, record pipeline
//! - `db`: SQLite layer for history records and seeded user profiles
//! - `config`: environment-backed settings
//! - `jokes`: stock jokes for the `joke` command

pub mod config;
pub mod db;
pub mod fallback;
pub mod jokes;
pub mod model;
pub mod normalize;
pub mod ops;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use db::{Database, DbError};
pub use model::{GroqClient, RemoteFailure};
pub use ops::{Operation, ResolvedOperation};
pub use resolver::{CommandResolver, Resolution};

/// Install the global tracing subscriber, honoring `RUST_LOG` when set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arithmix=debug,info".parse().expect("valid env filter")),
        )
        .init();
}
