//! Construction of either values.
//!
//! Every either is minted here and handed off to the active provider. The
//! active provider is process-wide state kept in a registry with at most one
//! provider per `(L, R)` payload pair; pairs without one fall back to
//! [`BasicProvider`]. The registry sits behind a read/write lock, so providers
//! can be installed or reset from any thread, though it is usually configured
//! once at startup.
//!
//! A provider implemented generically over every pair still governs only the
//! pairs it was installed for, so install it once per pair it should cover.
use std::{
    any::{type_name, Any, TypeId},
    collections::HashMap,
    sync::Arc,
};

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::{
    basic::BasicProvider,
    branch::Side,
    either::{Either, Payload},
    errors::ConstructionError,
};

/// Strategy for instantiating either values.
///
/// `left` must return a left either and `right` a right one.
pub trait EitherProvider<L, R>: Send + Sync {
    fn left(&self, value: L) -> Either<L, R>;
    fn right(&self, value: R) -> Either<L, R>;
}

// values are `Arc<dyn EitherProvider<L, R>>`, keyed by `TypeId::of::<(L, R)>()`
static PROVIDERS: Lazy<RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>> =
    Lazy::new(Default::default);

fn active<L: Payload, R: Payload>() -> Option<Arc<dyn EitherProvider<L, R>>> {
    PROVIDERS
        .read()
        .get(&TypeId::of::<(L, R)>())?
        .downcast_ref::<Arc<dyn EitherProvider<L, R>>>()
        .cloned()
}

/// Installs `provider` for the `(L, R)` pair, replacing any earlier one.
pub fn set_provider<L, R, P>(provider: P)
where
    L: Payload,
    R: Payload,
    P: EitherProvider<L, R> + 'static,
{
    let provider: Arc<dyn EitherProvider<L, R>> = Arc::new(provider);
    let replaced = PROVIDERS
        .write()
        .insert(TypeId::of::<(L, R)>(), Box::new(provider))
        .is_some();
    tracing::debug!(
        left = type_name::<L>(),
        right = type_name::<R>(),
        provider = type_name::<P>(),
        replaced,
        "either provider installed"
    );
}

/// Restores the default provider for every payload pair.
pub fn reset_provider() {
    let mut providers = PROVIDERS.write();
    let installed = providers.len();
    providers.clear();
    tracing::debug!(installed, "either providers reset");
}

/// Restores the default provider for the `(L, R)` pair only.
pub fn reset_provider_for<L: Payload, R: Payload>() {
    let removed = PROVIDERS.write().remove(&TypeId::of::<(L, R)>()).is_some();
    tracing::debug!(
        left = type_name::<L>(),
        right = type_name::<R>(),
        removed,
        "either provider reset"
    );
}

/// Builds an either from whichever candidate is present. Exactly one of them
/// must be.
pub fn either<L: Payload, R: Payload>(
    left_candidate: Option<L>,
    right_candidate: Option<R>,
) -> Result<Either<L, R>, ConstructionError> {
    match (left_candidate, right_candidate) {
        (Some(value), None) => Ok(left(value)),
        (None, Some(value)) => Ok(right(value)),
        (Some(_), Some(_)) => Err(ConstructionError::BothPresent),
        (None, None) => Err(ConstructionError::NeitherPresent),
    }
}

pub fn left<L: Payload, R: Payload>(value: L) -> Either<L, R> {
    let either = match active::<L, R>() {
        Some(provider) => provider.left(value),
        None => <BasicProvider as EitherProvider<L, R>>::left(&BasicProvider, value),
    };
    debug_assert!(either.is_left(), "provider built a right either from a left value");
    either
}

pub fn right<L: Payload, R: Payload>(value: R) -> Either<L, R> {
    let either = match active::<L, R>() {
        Some(provider) => provider.right(value),
        None => <BasicProvider as EitherProvider<L, R>>::right(&BasicProvider, value),
    };
    debug_assert!(either.is_right(), "provider built a left either from a right value");
    either
}

pub fn try_left<L: Payload, R: Payload>(
    value: Option<L>,
) -> Result<Either<L, R>, ConstructionError> {
    value.map(left).ok_or(ConstructionError::Missing(Side::Left))
}

pub fn try_right<L: Payload, R: Payload>(
    value: Option<R>,
) -> Result<Either<L, R>, ConstructionError> {
    value.map(right).ok_or(ConstructionError::Missing(Side::Right))
}
