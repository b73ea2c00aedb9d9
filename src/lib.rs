//! Convert platform JSON caption tracks ("json3" event streams) into
//! SubRip subtitle text.
//!
//! The core is [`convert::convert`]: a pure function from a decoded
//! [`model::CaptionDocument`] and a millisecond offset to SRT text, or
//! `None` when the track carries no caption events. Everything else here
//! is the thin CLI around it.

pub mod cli;
pub mod config;
pub mod convert;
pub mod formats;
pub mod model;
pub mod pipeline;
