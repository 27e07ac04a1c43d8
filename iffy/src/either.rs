//! Either
//!
//! A value holding exactly one of two alternatives. By convention left is the
//! error/alternate case and right is the primary case.
//!
//! Instances are minted by the active provider (see `factory`), including the
//! ones derived from an existing either by `map_left` / `map_right`.
use std::fmt;

use crate::{
    branch::{Branch, Side},
    errors::{ConstructionError, UnwrapError},
    factory,
};

/// Payload types an either can carry.
pub trait Payload: Send + Sync + 'static {}
impl<T: Send + Sync + 'static> Payload for T {}

/// Storage of a concrete either variant.
///
/// A variant must hold exactly one side for its whole lifetime; `as_branch`
/// and `into_branch` always report the same side.
pub trait EitherVariant<L, R>: Send + Sync {
    fn as_branch(&self) -> Branch<&L, &R>;
    fn into_branch(self: Box<Self>) -> Branch<L, R>;

    fn side(&self) -> Side {
        self.as_branch().side()
    }
    fn left<'a>(&'a self) -> Option<&'a L>
    where
        R: 'a,
    {
        match self.as_branch() {
            Branch::Left(l) => Some(l),
            Branch::Right(_) => None,
        }
    }
    fn right<'a>(&'a self) -> Option<&'a R>
    where
        L: 'a,
    {
        match self.as_branch() {
            Branch::Left(_) => None,
            Branch::Right(r) => Some(r),
        }
    }
}

pub struct Either<L, R>(Box<dyn EitherVariant<L, R>>);

impl<L, R> Either<L, R> {
    /// Wraps a variant without going through the active provider.
    ///
    /// Only for [`EitherProvider`](crate::factory::EitherProvider)
    /// implementations building their own variant; everything else goes
    /// through `of_left`, `of_right` or `of_either`.
    pub fn from_variant(variant: impl EitherVariant<L, R> + 'static) -> Self {
        Self(Box::new(variant))
    }

    pub fn discriminant(&self) -> Side {
        self.0.side()
    }
    pub fn is_left(&self) -> bool {
        self.discriminant() == Side::Left
    }
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    pub fn left(&self) -> Option<&L> {
        self.0.left()
    }
    pub fn right(&self) -> Option<&R> {
        self.0.right()
    }
    pub fn into_left(self) -> Option<L> {
        self.fold(Some, |_| None)
    }
    pub fn into_right(self) -> Option<R> {
        self.fold(|_| None, Some)
    }

    /// Applies `on_left` or `on_right`, whichever matches the held side, and
    /// returns its result. Exactly one of them runs.
    pub fn fold<X>(self, on_left: impl FnOnce(L) -> X, on_right: impl FnOnce(R) -> X) -> X {
        match self.0.into_branch() {
            Branch::Left(l) => on_left(l),
            Branch::Right(r) => on_right(r),
        }
    }

    pub fn left_or(self, default: L) -> L {
        self.fold(|l| l, |_| default)
    }
    pub fn right_or(self, default: R) -> R {
        self.fold(|_| default, |r| r)
    }

    /// Like `left_or`, but `f` only runs when this is a right either.
    pub fn left_or_else(self, f: impl FnOnce() -> L) -> L {
        self.fold(|l| l, |_| f())
    }
    /// Like `right_or`, but `f` only runs when this is a left either.
    pub fn right_or_else(self, f: impl FnOnce() -> R) -> R {
        self.fold(|_| f(), |r| r)
    }

    pub fn left_or_err(self) -> Result<L, UnwrapError> {
        self.left_or_err_with(UnwrapError::left)
    }
    pub fn right_or_err(self) -> Result<R, UnwrapError> {
        self.right_or_err_with(UnwrapError::right)
    }

    /// Returns the left value, or the error built by `f` when this is a right
    /// either. The error is passed through untouched.
    pub fn left_or_err_with<E>(self, f: impl FnOnce() -> E) -> Result<L, E> {
        self.fold(Ok, |_| Err(f()))
    }
    pub fn right_or_err_with<E>(self, f: impl FnOnce() -> E) -> Result<R, E> {
        self.fold(|_| Err(f()), Ok)
    }

    /// Right is the primary side, so it becomes `Ok`.
    pub fn into_result(self) -> Result<R, L> {
        self.fold(Err, Ok)
    }
}

impl<L: Payload, R: Payload> Either<L, R> {
    pub fn of_either(
        left_candidate: Option<L>,
        right_candidate: Option<R>,
    ) -> Result<Self, ConstructionError> {
        factory::either(left_candidate, right_candidate)
    }
    pub fn of_left(value: L) -> Self {
        factory::left(value)
    }
    pub fn of_right(value: R) -> Self {
        factory::right(value)
    }
    pub fn try_left(value: Option<L>) -> Result<Self, ConstructionError> {
        factory::try_left(value)
    }
    pub fn try_right(value: Option<R>) -> Result<Self, ConstructionError> {
        factory::try_right(value)
    }

    pub fn map_left<N: Payload>(self, f: impl FnOnce(L) -> N) -> Either<N, R> {
        self.fold(|l| factory::left(f(l)), factory::right)
    }
    pub fn map_right<N: Payload>(self, f: impl FnOnce(R) -> N) -> Either<L, N> {
        self.fold(factory::left, |r| factory::right(f(r)))
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0.as_branch(), f)
    }
}

impl<L: PartialEq, R: PartialEq> PartialEq for Either<L, R> {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_branch() == other.0.as_branch()
    }
}
impl<L: Eq, R: Eq> Eq for Either<L, R> {}

impl<L: Payload + Clone, R: Payload + Clone> Clone for Either<L, R> {
    fn clone(&self) -> Self {
        match self.0.as_branch() {
            Branch::Left(l) => factory::left(l.clone()),
            Branch::Right(r) => factory::right(r.clone()),
        }
    }
}

impl<L: Payload, R: Payload> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => factory::right(r),
            Err(l) => factory::left(l),
        }
    }
}

impl<L: Payload, R: Payload> From<Branch<L, R>> for Either<L, R> {
    fn from(branch: Branch<L, R>) -> Self {
        match branch {
            Branch::Left(l) => factory::left(l),
            Branch::Right(r) => factory::right(r),
        }
    }
}
