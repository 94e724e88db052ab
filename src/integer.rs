use {
    crate::{Int, MathError, MathResult, Number, NumberConst},
    bnum::types::{I256, I512, U256, U512},
};

/// Describes bit-level operations that integer representations implement.
///
/// Unlike [`Wrapping`](crate::Wrapping), this trait is implemented by every
/// integer category, including the overflow-checked and width-tracking
/// adapters, which give the shifts validating semantics of their own.
pub trait Integer: Sized {
    fn checked_shl(self, other: u32) -> MathResult<Self>;

    fn checked_shr(self, other: u32) -> MathResult<Self>;

    fn checked_ilog2(self) -> MathResult<u32>;

    /// `2^exp` in this representation, failing if it does not fit.
    #[inline]
    fn checked_pow2(exp: u32) -> MathResult<Self>
    where
        Self: NumberConst,
    {
        Self::ONE.checked_shl(exp)
    }

    /// Multiply by `2^exp`, exactly.
    #[inline]
    fn checked_mul_pow2(self, exp: u32) -> MathResult<Self> {
        self.checked_shl(exp)
    }

    /// Divide by `2^exp`, truncating toward zero. A divisor too large for
    /// the representation means the quotient is zero.
    #[inline]
    fn checked_div_pow2(self, exp: u32) -> MathResult<Self>
    where
        Self: Number + NumberConst,
    {
        match Self::checked_pow2(exp) {
            Ok(divisor) => self.checked_div(divisor),
            Err(_) => Ok(Self::ZERO),
        }
    }
}

// ------------------------------------ int ------------------------------------

impl<U> Integer for Int<U>
where
    U: Integer,
{
    fn checked_shl(self, other: u32) -> MathResult<Self> {
        self.0.checked_shl(other).map(Self)
    }

    fn checked_shr(self, other: u32) -> MathResult<Self> {
        self.0.checked_shr(other).map(Self)
    }

    fn checked_ilog2(self) -> MathResult<u32> {
        self.0.checked_ilog2()
    }
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_integer {
    ($t:ty) => {
        impl Integer for $t {
            fn checked_shl(self, other: u32) -> MathResult<Self> {
                self.checked_shl(other)
                    .ok_or_else(|| MathError::overflow_shl(self, other))
            }

            fn checked_shr(self, other: u32) -> MathResult<Self> {
                self.checked_shr(other)
                    .ok_or_else(|| MathError::overflow_shr(self, other))
            }

            fn checked_ilog2(self) -> MathResult<u32> {
                self.checked_ilog2().ok_or_else(MathError::zero_log)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_integer!($t);
        )+
    };
}

impl_integer! {
    u8, u16, u32, u64, u128, U256, U512,
    i8, i16, i32, i64, i128, I256, I512,
}

// ----------------------------------- tests -----------------------------------
