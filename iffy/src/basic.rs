use crate::{
    branch::Branch,
    either::{Either, EitherVariant, Payload},
    factory::EitherProvider,
};

/// Default variant. The discriminant is the tag of the stored branch, so a
/// basic either can never hold both sides or neither.
#[derive(Debug)]
pub struct BasicEither<L, R>(Branch<L, R>);
impl<L, R> BasicEither<L, R> {
    fn new(branch: Branch<L, R>) -> Self {
        Self(branch)
    }
}
impl<L: Send + Sync, R: Send + Sync> EitherVariant<L, R> for BasicEither<L, R> {
    fn as_branch(&self) -> Branch<&L, &R> {
        self.0.as_ref()
    }
    fn into_branch(self: Box<Self>) -> Branch<L, R> {
        self.0
    }
}

/// Provider active for every payload pair that has no other provider installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicProvider;
impl<L: Payload, R: Payload> EitherProvider<L, R> for BasicProvider {
    fn left(&self, value: L) -> Either<L, R> {
        Either::from_variant(BasicEither::new(Branch::Left(value)))
    }
    fn right(&self, value: R) -> Either<L, R> {
        Either::from_variant(BasicEither::new(Branch::Right(value)))
    }
}
