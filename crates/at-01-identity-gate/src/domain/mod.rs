//! # Domain Layer
//!
//! Pure authorization logic. All contact with the identity service goes
//! through the [`ClientIdentity`](crate::ports::ClientIdentity) port.

pub mod errors;
pub mod gate;

pub use errors::*;
pub use gate::*;
