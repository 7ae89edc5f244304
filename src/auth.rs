//! Auth-domain scopes, redacted secrets, and OAuth token pairs.

pub mod scope;
pub mod secret;
pub mod token;

pub use scope::*;
pub use secret::*;
pub use token::*;
