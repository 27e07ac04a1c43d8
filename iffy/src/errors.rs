use thiserror::Error;

use crate::branch::Side;

/// Raised when an either is built from an invalid pair of candidates.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum ConstructionError {
    #[error("of left and right, exactly one must be present, found both")]
    BothPresent,
    #[error("of left and right, exactly one must be present, found neither")]
    NeitherPresent,
    #[error("{0} value must be present")]
    Missing(Side),
}

/// Raised when an either is unwrapped on the side it does not hold.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
#[error("attempted to unwrap the {expected} value of a {found} either")]
pub struct UnwrapError {
    pub expected: Side,
    pub found: Side,
}
impl UnwrapError {
    pub fn wrong_side(expected: Side) -> Self {
        Self {
            expected,
            found: expected.opposite(),
        }
    }

    /// Left was requested from a right either.
    pub fn left() -> Self {
        Self::wrong_side(Side::Left)
    }

    /// Right was requested from a left either.
    pub fn right() -> Self {
        Self::wrong_side(Side::Right)
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error("{0}")]
    Construction(ConstructionError),
    #[error("{0}")]
    Unwrap(UnwrapError),
}
macro_rules! impl_From_for_Error {
    ($t:ty, $v:ident, $e:expr) => {
        impl From<$t> for Error {
            fn from($v: $t) -> Error {
                $e
            }
        }
    };
}
impl_From_for_Error!(ConstructionError, e, Error::Construction(e));
impl_From_for_Error!(UnwrapError, e, Error::Unwrap(e));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_messages() {
        assert_eq!(
            UnwrapError::left().to_string(),
            "attempted to unwrap the left value of a right either"
        );
        assert_eq!(
            UnwrapError::right().to_string(),
            "attempted to unwrap the right value of a left either"
        );
    }

    #[test]
    fn construction_messages() {
        assert_eq!(
            ConstructionError::Missing(Side::Right).to_string(),
            "right value must be present"
        );
        assert!(ConstructionError::BothPresent.to_string().contains("both"));
        assert!(ConstructionError::NeitherPresent
            .to_string()
            .contains("neither"));
    }

    #[test]
    fn converts_into_error() {
        let e: Error = UnwrapError::left().into();
        assert_eq!(e, Error::Unwrap(UnwrapError::left()));
        assert_eq!(e.to_string(), UnwrapError::left().to_string());

        let e: Error = ConstructionError::NeitherPresent.into();
        assert_eq!(e, Error::Construction(ConstructionError::NeitherPresent));
    }
}
