//! Core domain + application logic for the translation/auto-reply chat bot.
//!
//! This crate is framework-agnostic. The chat platform, the translation backend
//! and the reply generator live behind ports (traits) implemented in adapter
//! crates or in [`responder`].

pub mod bot;
pub mod classify;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;
pub mod ports;
pub mod responder;

#[cfg(test)]
mod test_support;

pub use errors::{Error, Result};
