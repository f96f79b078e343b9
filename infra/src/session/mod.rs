//! Form session storage
//!
//! Each open signup form owns one `VerificationFlow`. The registry keeps
//! those flows in memory, keyed by a session id handed to the client.

pub mod registry;

pub use registry::SessionRegistry;
