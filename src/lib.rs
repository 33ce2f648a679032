//! Cooking Agent — conversational cooking assistant.
//!
//! A chat model answers cooking questions by calling three deterministic
//! lookup tools (recipe search, ingredient extraction, cooking tips) backed
//! by compiled-in tables.

pub mod agent;
pub mod catalog;
pub mod config;
pub mod inference;
pub mod router;
pub mod tools;
pub mod types;
