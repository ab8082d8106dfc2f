//! Language-model plumbing for the graphling reasoning pipeline.
//!
//! This crate hosts the chat capability trait shared by every model
//! provider, the response types the pipeline consumes, and a local canned
//! provider that lets the rest of the system run without an API key.

pub mod llm;
