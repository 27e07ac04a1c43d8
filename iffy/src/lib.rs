//! Either values holding exactly one of two alternatives, built through a
//! swappable provider.
mod basic;
mod branch;
pub mod either;
pub mod errors;
pub mod factory;

pub use basic::{BasicEither, BasicProvider};
pub use branch::{Branch, Side};
pub use either::{Either, EitherVariant, Payload};
pub use errors::{ConstructionError, Error, UnwrapError};
pub use factory::{reset_provider, reset_provider_for, set_provider, EitherProvider};
