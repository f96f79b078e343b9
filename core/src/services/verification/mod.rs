//! Verification flow module for email-based signup
//!
//! This module provides the signup page's verification workflow:
//! - Deferred code issuing with cancellation of superseded requests
//! - Code confirmation against the issued code
//! - Signup form submission
//! - Integration with an out-of-band code delivery channel

mod config;
mod flow;
mod traits;
mod types;


pub use config::VerificationFlowConfig;
pub use flow::VerificationFlow;
pub use traits::CodeDeliveryTrait;
pub use types::{ConfirmOutcome, RequestCodeReceipt, SignupOutcome};
