use {
    crate::Int,
    bnum::types::{I256, I512, U256, U512},
};

/// Describes integer operations that silently wrap around on overflow.
///
/// Only plain machine and extended integers implement this. The
/// overflow-checked and width-tracking adapters do not: their whole point is
/// that no operation may wrap, so the lossy paths must not exist for them.
pub trait Wrapping: Sized {
    fn wrapping_add(self, other: Self) -> Self;

    fn wrapping_sub(self, other: Self) -> Self;

    fn wrapping_mul(self, other: Self) -> Self;
}

// ------------------------------------ int ------------------------------------

impl<U> Wrapping for Int<U>
where
    U: Wrapping,
{
    fn wrapping_add(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }

    fn wrapping_sub(self, other: Self) -> Self {
        Self(self.0.wrapping_sub(other.0))
    }

    fn wrapping_mul(self, other: Self) -> Self {
        Self(self.0.wrapping_mul(other.0))
    }
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_wrapping {
    ($t:ty) => {
        impl Wrapping for $t {
            fn wrapping_add(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            fn wrapping_sub(self, other: Self) -> Self {
                self.wrapping_sub(other)
            }

            fn wrapping_mul(self, other: Self) -> Self {
                self.wrapping_mul(other)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_wrapping!($t);
        )+
    };
}

impl_wrapping! {
    u8, u16, u32, u64, u128, U256, U512,
    i8, i16, i32, i64, i128, I256, I512,
}

// ----------------------------------- tests -----------------------------------
