use {
    crate::{Int, MathError, MathResult},
    bnum::types::{I256, I512, U256, U512},
};

/// Describes a number's relation to its sign: whether it is negative, and
/// its absolute value.
pub trait Sign: Sized {
    fn is_negative(&self) -> bool;

    fn checked_abs(self) -> MathResult<Self>;
}

// ------------------------------------ int ------------------------------------

impl<U> Sign for Int<U>
where
    U: Sign,
{
    fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    fn checked_abs(self) -> MathResult<Self> {
        self.0.checked_abs().map(Self)
    }
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_sign_unsigned {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Sign for $t {
                fn is_negative(&self) -> bool {
                    false
                }

                fn checked_abs(self) -> MathResult<Self> {
                    Ok(self)
                }
            }
        )+
    };
}

macro_rules! impl_sign_signed {
    ($($t:ty),+ $(,)?) => {
        $(
            impl Sign for $t {
                fn is_negative(&self) -> bool {
                    <$t>::is_negative(*self)
                }

                fn checked_abs(self) -> MathResult<Self> {
                    self.checked_abs()
                        .ok_or_else(|| MathError::overflow_abs(self))
                }
            }
        )+
    };
}

impl_sign_unsigned! {
    u8, u16, u32, u64, u128, U256, U512,
}

impl_sign_signed! {
    i8, i16, i32, i64, i128, I256, I512,
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use crate::{Int, MathError, NumberConst, Sign, int_test, test_utils::bt};

    int_test!( abs
        method = |_0: Int<_>| {
            let one = bt(_0, Int::ONE);
            assert!(!one.is_negative());
            assert_eq!(one.checked_abs().unwrap(), one);
        }
    );

    int_test!( abs_min_overflows
        inputs = {
            i128 = []
            i256 = []
        }
        method = |_0: Int<_>| {
            let min = bt(_0, Int::MIN);
            assert!(min.is_negative());
            assert!(matches!(min.checked_abs(), Err(MathError::OverflowAbs { .. })));
        }
    );
}
