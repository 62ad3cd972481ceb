//! Clipstash library - exposes the core modules for testing
//!
//! The main binary is in main.rs, but the history model, store,
//! filter, and controller live here so tests can run without a
//! terminal or a system clipboard attached.

// Include the log module so the log! macro works
#[macro_use]
pub mod log;

pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod history;
pub mod store;
