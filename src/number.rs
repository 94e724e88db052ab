use {
    crate::{
        Fixed, Int, Integer, IsZero, MathError, MathResult, NextNumber, NumberConst, PrevNumber,
        Sign,
    },
    bnum::types::{I256, I512, U256, U512},
    std::fmt::Display,
};

/// Describes basic operations that all math types must implement.
///
/// Lossy operations (wrapping, saturating) deliberately live elsewhere, in
/// [`Wrapping`](crate::Wrapping): a representation that validates its range
/// implements `Number` but not `Wrapping`, so the silent-wraparound paths are
/// unavailable for it at the type level.
pub trait Number: Sized {
    fn checked_add(self, other: Self) -> MathResult<Self>;

    fn checked_sub(self, other: Self) -> MathResult<Self>;

    fn checked_mul(self, other: Self) -> MathResult<Self>;

    fn checked_div(self, other: Self) -> MathResult<Self>;

    fn checked_rem(self, other: Self) -> MathResult<Self>;

    fn checked_pow(self, other: u32) -> MathResult<Self>;

    fn checked_sqrt(self) -> MathResult<Self>;
}

// ------------------------------------ int ------------------------------------

impl<U> Number for Int<U>
where
    U: Number,
{
    fn checked_add(self, other: Self) -> MathResult<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(self, other: Self) -> MathResult<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    fn checked_mul(self, other: Self) -> MathResult<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    fn checked_div(self, other: Self) -> MathResult<Self> {
        self.0.checked_div(other.0).map(Self)
    }

    fn checked_rem(self, other: Self) -> MathResult<Self> {
        self.0.checked_rem(other.0).map(Self)
    }

    fn checked_pow(self, other: u32) -> MathResult<Self> {
        self.0.checked_pow(other).map(Self)
    }

    fn checked_sqrt(self) -> MathResult<Self> {
        self.0.checked_sqrt().map(Self)
    }
}

// ----------------------------------- fixed -----------------------------------

impl<U, const E: i32> Number for Fixed<U, E>
where
    U: Number + NumberConst + Integer + Sign + Copy + Display,
    Int<U>: NextNumber,
    <Int<U> as NextNumber>::Next:
        Number + Integer + NumberConst + PrevNumber<Prev = Int<U>> + Copy,
{
    fn checked_add(self, other: Self) -> MathResult<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    fn checked_sub(self, other: Self) -> MathResult<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Multiply two values of the same scale, computing the full product in
    /// the next wider representation before narrowing back. The intermediate
    /// product sits at exponent `2 * E`; rescaling it to `E` truncates toward
    /// zero.
    fn checked_mul(self, other: Self) -> MathResult<Self> {
        let product = self.0.checked_full_mul(other.0)?;

        let rescaled = if E < 0 {
            product.checked_div_pow2((-E) as u32)?
        } else if E > 0 {
            product.checked_mul_pow2(E as u32)?
        } else {
            product
        };

        rescaled.checked_into_prev().map(Self)
    }

    /// Divide two values of the same scale. The numerator is pre-shifted in
    /// the next wider representation so no fractional precision below the
    /// result's scale is lost to the intermediate quotient.
    fn checked_div(self, other: Self) -> MathResult<Self> {
        let mut numerator = self.0.into_next();
        let mut denominator = other.0.into_next();

        if E < 0 {
            numerator = numerator.checked_mul_pow2((-E) as u32)?;
        } else if E > 0 {
            denominator = denominator.checked_mul_pow2(E as u32)?;
        }

        numerator
            .checked_div(denominator)?
            .checked_into_prev()
            .map(Self)
    }

    fn checked_rem(self, other: Self) -> MathResult<Self> {
        self.0.checked_rem(other.0).map(Self)
    }

    fn checked_pow(mut self, mut exp: u32) -> MathResult<Self> {
        if exp == 0 {
            return Self::checked_from_int(Int::<U>::ONE);
        }

        let mut y = Self::checked_from_int(Int::<U>::ONE)?;

        while exp > 1 {
            if exp % 2 == 0 {
                self = self.checked_mul(self)?;
                exp /= 2;
            } else {
                y = self.checked_mul(y)?;
                self = self.checked_mul(self)?;
                exp = (exp - 1) / 2;
            }
        }

        self.checked_mul(y)
    }

    /// Floor square root, computed on the raw value shifted to twice the
    /// fractional precision so the result lands back on this type's scale.
    fn checked_sqrt(self) -> MathResult<Self> {
        if self.0.is_negative() {
            return Err(MathError::negative_sqrt(self.0));
        }

        let wide = self.0.into_next();

        let shifted = if E < 0 {
            wide.checked_mul_pow2((-E) as u32)?
        } else if E > 0 {
            wide.checked_div_pow2(E as u32)?
        } else {
            wide
        };

        shifted.checked_sqrt()?.checked_into_prev().map(Self)
    }
}

// ------------------------------ primitive types ------------------------------

macro_rules! impl_number {
    ($t:ty) => {
        impl Number for $t
        where
            $t: NumberConst + Integer + IsZero + Sign,
        {
            fn checked_add(self, other: Self) -> MathResult<Self> {
                self.checked_add(other)
                    .ok_or_else(|| MathError::overflow_add(self, other))
            }

            fn checked_sub(self, other: Self) -> MathResult<Self> {
                self.checked_sub(other)
                    .ok_or_else(|| MathError::overflow_sub(self, other))
            }

            fn checked_mul(self, other: Self) -> MathResult<Self> {
                self.checked_mul(other)
                    .ok_or_else(|| MathError::overflow_mul(self, other))
            }

            fn checked_div(self, other: Self) -> MathResult<Self> {
                self.checked_div(other)
                    .ok_or_else(|| MathError::division_by_zero(self))
            }

            fn checked_rem(self, other: Self) -> MathResult<Self> {
                self.checked_rem(other)
                    .ok_or_else(|| MathError::remainder_by_zero(self))
            }

            fn checked_pow(self, other: u32) -> MathResult<Self> {
                self.checked_pow(other)
                    .ok_or_else(|| MathError::overflow_pow(self, other))
            }

            /// Compute a _positive_ integer's _floored_ square root using the
            /// [Babylonian method](https://en.wikipedia.org/wiki/Methods_of_computing_square_roots#Heron's_method).
            fn checked_sqrt(self) -> MathResult<Self> {
                if self.is_zero() {
                    return Ok(Self::ZERO);
                }

                if self.is_negative() {
                    return Err(MathError::negative_sqrt(self));
                }

                let mut x0 = Self::ONE << ((Integer::checked_ilog2(self)? / 2) + 1);

                if x0 > Self::ZERO {
                    let mut x1 = (x0 + self / x0) >> 1;

                    while x1 < x0 {
                        x0 = x1;
                        x1 = (x0 + self / x0) >> 1;
                    }

                    return Ok(x0);
                }

                Ok(self)
            }
        }
    };
    ($($t:ty),+ $(,)?) => {
        $(
            impl_number!($t);
        )+
    };
}

impl_number! {
    u8, u16, u32, u64, u128, U256, U512,
    i8, i16, i32, i64, i128, I256, I512,
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{Int, MathError, Number, NumberConst, dts, int_test, test_utils::bt},
        bnum::types::{I256, U256},
    };

    int_test!( add
        inputs = {
            u128 = {
                passing: [
                    (0_u128, 0_u128, 0_u128),
                    (0, u128::MAX, u128::MAX),
                    (10, 20, 30),
                ],
                failing: [
                    (u128::MAX, 1_u128),
                ]
            }
            u256 = {
                passing: [
                    (U256::ZERO, U256::ZERO, U256::ZERO),
                    (U256::ZERO, U256::MAX, U256::MAX),
                    (U256::from(10_u32), U256::from(20_u32), U256::from(30_u32)),
                ],
                failing: [
                    (U256::MAX, U256::ONE),
                ]
            }
            i128 = {
                passing: [
                    (0_i128, 0_i128, 0_i128),
                    (0, i128::MAX, i128::MAX),
                    (0, i128::MIN, i128::MIN),
                    (10, 20, 30),
                    (-10, 20, 10),
                    (10, -20, -10),
                    (-10, -20, -30),
                ],
                failing: [
                    (i128::MAX, 1),
                    (i128::MIN, -1),
                ]
            }
            i256 = {
                passing: [
                    (I256::ZERO, I256::ZERO, I256::ZERO),
                    (I256::ZERO, I256::MAX, I256::MAX),
                    (I256::from(10), I256::from(20), I256::from(30)),
                    (I256::from(-10), I256::from(20), I256::from(10)),
                    (I256::from(-10), I256::from(-20), I256::from(-30)),
                ],
                failing: [
                    (I256::MAX, I256::ONE),
                    (I256::MIN, -I256::ONE),
                ]
            }
        }
        method = |_0, samples, failing_samples| {
            for (left, right, expected) in samples {
                let left = Int::new(left);
                let right = Int::new(right);
                let expected = Int::new(expected);
                dts!(_0, left, right, expected);
                assert_eq!(left + right, expected);
            }

            for (left, right) in failing_samples {
                let left = Int::new(left);
                let right = Int::new(right);
                dts!(_0, left, right);
                assert!(matches!(left.checked_add(right), Err(MathError::OverflowAdd { .. })));
            }
        }
    );

    int_test!( add_panic
        attrs = #[should_panic(expected = "addition overflow")]
        method = |_0| {
            let max = bt(_0, Int::MAX);
            let one = bt(_0, Int::ONE);
            let _ = max + one;
        }
    );

    int_test!( sub
        inputs = {
            u128 = {
                passing: [
                    (0_u128, 0_u128, 0_u128),
                    (u128::MAX, u128::MAX, 0),
                    (30, 20, 10),
                ],
                failing: [
                    (1_u128, 2_u128),
                ]
            }
            u256 = {
                passing: [
                    (U256::ZERO, U256::ZERO, U256::ZERO),
                    (U256::MAX, U256::MAX, U256::ZERO),
                    (U256::from(30_u32), U256::from(10_u32), U256::from(20_u32)),
                ],
                failing: [
                    (U256::ONE, U256::from(2_u32)),
                ]
            }
            i128 = {
                passing: [
                    (0_i128, 0_i128, 0_i128),
                    (i128::MAX, i128::MAX, 0),
                    (i128::MIN, i128::MIN, 0),
                    (30, 20, 10),
                    (-10, 20, -30),
                    (10, -20, 30),
                    (-10, -20, 10),
                ],
                failing: [
                    (i128::MIN, 1),
                    (i128::MAX, -1),
                ]
            }
            i256 = {
                passing: [
                    (I256::ZERO, I256::ZERO, I256::ZERO),
                    (I256::MAX, I256::MAX, I256::ZERO),
                    (I256::from(30), I256::from(20), I256::from(10)),
                    (I256::from(-10), I256::from(20), I256::from(-30)),
                ],
                failing: [
                    (I256::MIN, I256::ONE),
                    (I256::MAX, -I256::ONE),
                ]
            }
        }
        method = |_0, samples, failing_samples| {
            for (left, right, expected) in samples {
                let left = Int::new(left);
                let right = Int::new(right);
                let expected = Int::new(expected);
                dts!(_0, left, right, expected);
                assert_eq!(left - right, expected);
            }

            for (left, right) in failing_samples {
                let left = Int::new(left);
                let right = Int::new(right);
                dts!(_0, left, right);
                assert!(matches!(left.checked_sub(right), Err(MathError::OverflowSub { .. })));
            }
        }
    );

    int_test!( mul
        inputs = {
            u128 = {
                passing: [
                    (0_u128, 0_u128, 0_u128),
                    (u128::MAX, 0, 0),
                    (30, 20, 600),
                ],
                failing: [
                    (u128::MAX, 2_u128),
                ]
            }
            u256 = {
                passing: [
                    (U256::ZERO, U256::ZERO, U256::ZERO),
                    (U256::MAX, U256::ZERO, U256::ZERO),
                    (U256::from(30_u32), U256::from(10_u32), U256::from(300_u32)),
                ],
                failing: [
                    (U256::MAX, U256::from(2_u32)),
                ]
            }
            i128 = {
                passing: [
                    (0_i128, 0_i128, 0_i128),
                    (i128::MIN, 1, i128::MIN),
                    (i128::MIN + 1, -1, i128::MAX),
                    (30, 20, 600),
                    (-10, 20, -200),
                    (10, -20, -200),
                    (-10, -20, 200),
                ],
                failing: [
                    (i128::MIN, 2),
                    (i128::MAX, -2),
                ]
            }
            i256 = {
                passing: [
                    (I256::ZERO, I256::ZERO, I256::ZERO),
                    (I256::MIN, I256::ONE, I256::MIN),
                    (I256::from(30), I256::from(20), I256::from(600)),
                    (I256::from(-10), I256::from(20), I256::from(-200)),
                ],
                failing: [
                    (I256::MIN, I256::from(2)),
                    (I256::MAX, I256::from(-2)),
                ]
            }
        }
        method = |_0, samples, failing_samples| {
            for (left, right, expected) in samples {
                let left = Int::new(left);
                let right = Int::new(right);
                let expected = Int::new(expected);
                dts!(_0, left, right, expected);
                assert_eq!(left * right, expected);
            }

            for (left, right) in failing_samples {
                let left = Int::new(left);
                let right = Int::new(right);
                dts!(_0, left, right);
                assert!(matches!(left.checked_mul(right), Err(MathError::OverflowMul { .. })));
            }
        }
    );

    int_test!( div
        inputs = {
            u128 = {
                passing: [
                    (u128::MAX, 1_u128, u128::MAX),
                    (0, 1, 0),
                    (300, 20, 15),
                    (30, 20, 1),
                ]
            }
            u256 = {
                passing: [
                    (U256::MAX, U256::ONE, U256::MAX),
                    (U256::from(300_u32), U256::from(20_u32), U256::from(15_u32)),
                    (U256::from(30_u32), U256::from(20_u32), U256::from(1_u32)),
                ]
            }
            i128 = {
                passing: [
                    (i128::MAX, 1_i128, i128::MAX),
                    (300, 20, 15),
                    (-300, 20, -15),
                    (-30, 20, -1),
                    (300, -20, -15),
                ]
            }
            i256 = {
                passing: [
                    (I256::MAX, I256::ONE, I256::MAX),
                    (I256::from(300), I256::from(20), I256::from(15)),
                    (I256::from(-300), I256::from(20), I256::from(-15)),
                    (I256::from(-30), I256::from(20), I256::from(-1)),
                ]
            }
        }
        method = |_0, samples| {
            for (left, right, expected) in samples {
                let left = Int::new(left);
                let right = Int::new(right);
                let expected = Int::new(expected);
                dts!(_0, left, right, expected);
                assert_eq!(left / right, expected);
            }

            // Division by zero
            let zero = Int::ZERO;
            let one = Int::ONE;
            dts!(_0, one, zero);
            assert!(matches!(one.checked_div(zero), Err(MathError::DivisionByZero { .. })));
        }
    );

    int_test!( pow
        inputs = {
            u128 = {
                passing: [
                    (2_u128, 2, 4_u128),
                    (10, 3, 1_000),
                    (0, 2, 0),
                ],
                failing: [
                    (u128::MAX, 2),
                ]
            }
            u256 = {
                passing: [
                    (U256::from(2_u32), 2, U256::from(4_u32)),
                    (U256::from(10_u32), 3, U256::from(1_000_u32)),
                ],
                failing: [
                    (U256::MAX, 2),
                ]
            }
            i128 = {
                passing: [
                    (2_i128, 2, 4_i128),
                    (-10, 3, -1_000),
                    (0, 2, 0),
                ],
                failing: [
                    (i128::MAX, 2),
                    (i128::MIN, 2),
                ]
            }
            i256 = {
                passing: [
                    (I256::from(2), 2, I256::from(4)),
                    (I256::from(-10), 3, I256::from(-1_000)),
                ],
                failing: [
                    (I256::MAX, 2),
                    (I256::MIN, 2),
                ]
            }
        }
        method = |_0, samples, failing_samples| {
            for (base, exp, expected) in samples {
                let base = Int::new(base);
                let expected = Int::new(expected);
                dts!(_0, base, expected);
                assert_eq!(base.checked_pow(exp).unwrap(), expected);
            }

            for (base, exp) in failing_samples {
                let base = bt(_0, Int::new(base));
                assert!(matches!(base.checked_pow(exp), Err(MathError::OverflowPow { .. })));
            }
        }
    );

    int_test!( sqrt
        inputs = {
            u128 = {
                passing: [
                    (4_u128, 2_u128),
                    (64, 8),
                    (80, 8),
                    (81, 9),
                ]
            }
            u256 = {
                passing: [
                    (U256::from(4_u32), U256::from(2_u32)),
                    (U256::from(64_u32), U256::from(8_u32)),
                    (U256::from(80_u32), U256::from(8_u32)),
                    (U256::from(81_u32), U256::from(9_u32)),
                ]
            }
            i128 = {
                passing: [
                    (4_i128, 2_i128),
                    (81, 9),
                ]
            }
            i256 = {
                passing: [
                    (I256::from(4), I256::from(2)),
                    (I256::from(81), I256::from(9)),
                ]
            }
        }
        method = |_0, samples| {
            for (base, expected) in samples {
                let base = Int::new(base);
                let expected = Int::new(expected);
                dts!(_0, base, expected);
                assert_eq!(base.checked_sqrt().unwrap(), expected);
            }
        }
    );

    int_test!( sqrt_negative
        inputs = {
            i128 = {
                passing: [
                    -1_i128,
                    -4_i128,
                ]
            }
            i256 = {
                passing: [
                    I256::from(-1),
                    I256::from(-4),
                ]
            }
        }
        method = |_0, samples| {
            for base in samples {
                let base = bt(_0, Int::new(base));
                assert!(matches!(base.checked_sqrt(), Err(MathError::NegativeSqrt { .. })));
            }
        }
    );

    mod properties {
        use {
            crate::{NextNumber, Number, NumberConst, Uint128},
            proptest::prelude::*,
        };

        proptest! {
            /// The floored square root must satisfy `root^2 <= square` and
            /// `(root + 1)^2 > square`. The squarings are done in the next
            /// wider word so the upper bound cannot overflow.
            #[test]
            fn integer_sqrt_works_128(square in any::<u128>()) {
                let square = Uint128::new(square);
                let root = square.checked_sqrt().unwrap();
                prop_assert!(root.checked_full_mul(root).unwrap() <= square.into_next());

                let above = root + Uint128::ONE;
                prop_assert!(above.checked_full_mul(above).unwrap() > square.into_next());
            }
        }
    }
}
