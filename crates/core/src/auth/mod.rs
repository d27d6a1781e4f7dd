//! Authorization types for the wallet engine.
//!
//! # Modules
//!
//! - `role` - Closed role set with capability predicates
//! - `profile` - Authorization profile consumed by privileged transitions

pub mod profile;
pub mod role;

pub use profile::AuthProfile;
pub use role::Role;
