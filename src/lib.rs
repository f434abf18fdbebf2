//! kavya - Short-form text generation from the terminal.
//!
//! Sends a content type, keyword, tone, and length to a remote generation
//! API, then keeps the last fifty results and a small usage record on disk.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod remote;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
