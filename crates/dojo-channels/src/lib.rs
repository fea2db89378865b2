//! # dojo-channels
//!
//! Messaging transports for the dojo support bot.

pub mod stdio;
