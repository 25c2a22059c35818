//! Retry decision and loop.
//!
//! This module turns a [`RetryConfig`](crate::config::RetryConfig) into a
//! [`RetryPolicy`] that decides, after each attempt, whether to stop or to
//! sleep and go again, and drives the [`RetryLoop`] around an
//! [`Invoker`](crate::invoke::Invoker).

mod error;
mod policy;
mod run;

pub use error::RetryError;
pub use policy::{RetryDecision, RetryPolicy, StopReason};
pub use run::{RetryLoop, RunSummary};
