pub(crate) mod client;
pub(crate) mod error;

pub use client::{AskOutcome, Client};
pub use error::{ClientError, Result as CliClientResult};
