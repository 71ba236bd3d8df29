//! # Adapters
//!
//! `ClientIdentity` implementations.

pub mod serialized_identity;
pub mod static_identity;

pub use serialized_identity::SerializedIdentity;
pub use static_identity::StaticIdentity;
