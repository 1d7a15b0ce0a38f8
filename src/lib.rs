//! LLM Chat - a minimal chat backend.
//!
//! Accepts user messages, keeps them in conversation threads, and answers
//! each one through a pluggable response generator.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
