//! Hand-off of a validated registration
//!
//! No transport is defined for registrations yet; the shipped handler
//! records the redacted values through tracing and issues a receipt.

mod logging;
mod traits;

pub use logging::LoggingSubmissionHandler;
pub use traits::{SubmissionError, SubmissionHandler, SubmissionReceipt};

#[cfg(test)]
pub use traits::MockSubmissionHandler;
