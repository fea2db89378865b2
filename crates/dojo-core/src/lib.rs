//! # dojo-core
//!
//! Core types, traits, configuration, and error handling for the dojo support bot.

pub mod config;
pub mod error;
pub mod language;
pub mod message;
pub mod traits;
