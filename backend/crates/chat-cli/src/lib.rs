//! chat-cli library
//!
//! Exports the HTTP client for use in tests.

pub(crate) mod client;

#[cfg(test)]
mod tests;

pub use client::{AskOutcome, CliClientResult, Client, ClientError};
