//! Cross-module tests for the resolution pipeline.

mod resolver;
