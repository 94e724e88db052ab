use crate::{Fixed, Int};

/// Describes a type that wraps another type.
pub trait Inner {
    type U;

    /// Returns an immutable reference to the inner value.
    fn inner(&self) -> &Self::U;

    /// Consume the wrapper, return an owned instance of the inner value.
    fn into_inner(self) -> Self::U;
}

impl<U> Inner for Int<U> {
    type U = U;

    fn inner(&self) -> &Self::U {
        &self.0
    }

    fn into_inner(self) -> Self::U {
        self.0
    }
}

impl<U, const E: i32> Inner for Fixed<U, E> {
    type U = U;

    fn inner(&self) -> &Self::U {
        self.0.inner()
    }

    fn into_inner(self) -> Self::U {
        self.0.into_inner()
    }
}
