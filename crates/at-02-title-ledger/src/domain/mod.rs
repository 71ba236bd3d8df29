//! # Domain Layer
//!
//! Pure domain logic for the Title Ledger contract.
//!
//! - `entities`: `AcademicTitle`, `TitleDraft`, `IntegrityReport`
//! - `hash`: the validation hash over `studentId || degree || emissionDate`
//! - `selector`: structured query selectors
//! - `codec`: ledger value encoding and the empty-value rule
//! - `errors`: `TitleError`, `LedgerError`
//!
//! ## Hexagonal Architecture
//!
//! This module contains NO I/O dependencies. All ledger access goes through
//! the ports in the `ports` module.

pub mod codec;
pub mod entities;
pub mod errors;
pub mod hash;
pub mod selector;

pub use codec::*;
pub use entities::*;
pub use errors::*;
pub use hash::*;
pub use selector::*;
