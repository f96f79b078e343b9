//! Domain entities representing core business objects.

pub mod signup_form;
pub mod verification_attempt;
pub mod verification_session;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use signup_form::SignupForm;
pub use verification_attempt::{VerificationAttempt, CODE_UPPER_BOUND};
pub use verification_session::{VerificationSession, VerificationState};
