//! mcbe-preview — a preview client for the MCBE text render endpoint.
//!
//! Submits plain text or tellraw JSON for rendering, keeps the returned PNG
//! as a live preview, and persists a bounded, deduplicated history of past
//! renders. This library crate exposes all modules for use by the binaries
//! and integration tests.

pub mod app;
pub mod database;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
pub mod ui;
