use std::fmt;

/// Tagged payload of an either: the active side together with its value.
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum Branch<L, R> {
    Left(L),
    Right(R),
}
impl<L, R> Branch<L, R> {
    pub fn side(&self) -> Side {
        match self {
            Branch::Left(_) => Side::Left,
            Branch::Right(_) => Side::Right,
        }
    }

    pub fn as_ref(&self) -> Branch<&L, &R> {
        match self {
            Branch::Left(l) => Branch::Left(l),
            Branch::Right(r) => Branch::Right(r),
        }
    }
}

/// Discriminant of an either.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}
impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}
