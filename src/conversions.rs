use {
    crate::{Checked, Int, MathError, MathResult},
    bnum::{
        BTryFrom,
        types::{I256, I512, U256, U512},
    },
};

/// Conversion between a representation scalar and floating-point, truncating
/// toward zero on the way in. The way out may lose precision for very wide
/// scalars; the way in never does.
pub trait FloatConvert: Sized {
    fn to_f64(self) -> f64;

    /// The float's integral part as a scalar. Fails on non-finite input and
    /// on values outside the scalar's range; there is no wrapping float
    /// construction.
    fn checked_from_f64(value: f64) -> MathResult<Self>;
}

// ------------------------------ machine types --------------------------------

macro_rules! impl_float_convert {
    ($(($t:ty, $signed:expr)),+ $(,)?) => {
        $(
            impl_float_convert!($t, signed = $signed);
        )+
    };
    ($t:ty, signed = $signed:expr) => {
        impl FloatConvert for $t {
            fn to_f64(self) -> f64 {
                self as f64
            }

            fn checked_from_f64(value: f64) -> MathResult<Self> {
                if !value.is_finite() {
                    return Err(MathError::non_finite(value));
                }

                let truncated = value.trunc();

                // `MAX as f64 + 1.0` is exactly `2^digits`, so the exclusive
                // bound is lossless even where `MAX` itself rounds
                let low_ok = if $signed {
                    truncated >= <$t>::MIN as f64
                } else {
                    truncated > -1.0
                };

                if !low_ok || truncated >= <$t>::MAX as f64 + 1.0 {
                    return Err(MathError::overflow_conversion::<f64, $t>(value));
                }

                Ok(truncated as $t)
            }
        }
    };
}

impl_float_convert! {
    (u8, false), (u16, false), (u32, false), (u64, false), (u128, false),
    (i8, true), (i16, true), (i32, true), (i64, true), (i128, true),
}

// ------------------------------ extended types -------------------------------

pub(crate) fn u512_to_f64(value: U512) -> f64 {
    let mut acc = 0.0_f64;
    for digit in value.digits().iter().rev() {
        acc = acc * 18446744073709551616.0 + *digit as f64;
    }
    acc
}

/// `2^exponent` as a double, for scaling raw values in and out of floating
/// arithmetic.
pub(crate) fn pow2f(exponent: i32) -> f64 {
    f64::powi(2.0, exponent)
}

/// Exact integral value of a finite double as a 512-bit signed word, by
/// mantissa/exponent decomposition. Doubles are base-two, so a finite
/// integral double either fits exactly or exceeds the word.
fn f64_to_i512(value: f64) -> MathResult<I512> {
    if !value.is_finite() {
        return Err(MathError::non_finite(value));
    }

    let truncated = value.trunc();
    if truncated == 0.0 {
        return Ok(I512::ZERO);
    }

    let bits = truncated.abs().to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1075;
    let mantissa = (bits & ((1_u64 << 52) - 1)) | (1_u64 << 52);

    let magnitude = if exponent >= 0 {
        let mantissa_bits = 64 - mantissa.leading_zeros() as i32;
        if mantissa_bits + exponent > 511 {
            return Err(MathError::overflow_conversion::<f64, I512>(value));
        }
        U512::from(mantissa) << exponent as u32
    } else {
        // integral doubles have zero low mantissa bits below 2^-exponent
        U512::from(mantissa >> (-exponent) as u32)
    };

    if truncated < 0.0 {
        Ok(I512::from_bits(magnitude.wrapping_neg()))
    } else {
        Ok(I512::from_bits(magnitude))
    }
}

macro_rules! impl_float_convert_bnum_unsigned {
    ($($t:ty),+ $(,)?) => {
        $(
            impl FloatConvert for $t {
                fn to_f64(self) -> f64 {
                    u512_to_f64(bnum::cast::As::as_(self))
                }

                fn checked_from_f64(value: f64) -> MathResult<Self> {
                    let wide = f64_to_i512(value)?;
                    if wide.is_negative() {
                        return Err(MathError::overflow_conversion::<f64, $t>(value));
                    }

                    BTryFrom::try_from(wide.to_bits())
                        .map_err(|_| MathError::overflow_conversion::<f64, $t>(value))
                }
            }
        )+
    };
}

macro_rules! impl_float_convert_bnum_signed {
    ($($t:ty),+ $(,)?) => {
        $(
            impl FloatConvert for $t {
                fn to_f64(self) -> f64 {
                    let sign = if self.is_negative() { -1.0 } else { 1.0 };
                    sign * u512_to_f64(bnum::cast::As::as_(self.unsigned_abs()))
                }

                fn checked_from_f64(value: f64) -> MathResult<Self> {
                    let wide = f64_to_i512(value)?;
                    BTryFrom::try_from(wide)
                        .map_err(|_| MathError::overflow_conversion::<f64, $t>(value))
                }
            }
        )+
    };
}

impl_float_convert_bnum_unsigned! { U256 }
impl_float_convert_bnum_signed! { I256 }

// the widest carriers convert without narrowing
impl FloatConvert for U512 {
    fn to_f64(self) -> f64 {
        u512_to_f64(self)
    }

    fn checked_from_f64(value: f64) -> MathResult<Self> {
        let wide = f64_to_i512(value)?;
        if wide.is_negative() {
            return Err(MathError::overflow_conversion::<f64, U512>(value));
        }

        Ok(wide.to_bits())
    }
}

impl FloatConvert for I512 {
    fn to_f64(self) -> f64 {
        let sign = if self.is_negative() { -1.0 } else { 1.0 };
        sign * u512_to_f64(self.unsigned_abs())
    }

    fn checked_from_f64(value: f64) -> MathResult<Self> {
        f64_to_i512(value)
    }
}

// --------------------------------- wrappers ----------------------------------

impl<U> FloatConvert for Int<U>
where
    U: FloatConvert,
{
    fn to_f64(self) -> f64 {
        self.0.to_f64()
    }

    fn checked_from_f64(value: f64) -> MathResult<Self> {
        U::checked_from_f64(value).map(Self)
    }
}

/// Out-of-range float construction through a checked representation reports
/// the adapter's own failure kind.
impl<U> FloatConvert for Checked<U>
where
    U: FloatConvert,
{
    fn to_f64(self) -> f64 {
        self.0.to_f64()
    }

    fn checked_from_f64(value: f64) -> MathResult<Self> {
        U::checked_from_f64(value).map(Self).map_err(|err| match err {
            MathError::OverflowConversion { .. } => MathError::out_of_range::<Self>(value),
            other => other,
        })
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        super::*,
        test_case::test_case,
    };

    #[test_case(0.0 => Some(0); "zero")]
    #[test_case(1.9 => Some(1); "truncates toward zero")]
    #[test_case(-1.9 => None; "negative is out of range for unsigned")]
    #[test_case(255.0 => Some(255); "upper bound")]
    #[test_case(256.0 => None; "above upper bound")]
    fn u8_from_f64(value: f64) -> Option<u8> {
        u8::checked_from_f64(value).ok()
    }

    #[test_case(-128.0 => Some(-128); "exact minimum")]
    #[test_case(-128.9 => Some(-128); "truncates up toward zero")]
    #[test_case(-129.0 => None; "below minimum")]
    #[test_case(127.9 => Some(127); "truncates down toward zero")]
    fn i8_from_f64(value: f64) -> Option<i8> {
        i8::checked_from_f64(value).ok()
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(matches!(
            u64::checked_from_f64(f64::NAN),
            Err(MathError::NonFiniteFloat { .. })
        ));
        assert!(matches!(
            i64::checked_from_f64(f64::INFINITY),
            Err(MathError::NonFiniteFloat { .. })
        ));
    }

    #[test]
    fn extended_types_round_trip_powers_of_two() {
        // 2^100 is exactly representable both as a double and a U256
        let big = U256::checked_from_f64(2.0_f64.powi(100)).unwrap();
        assert_eq!(big, U256::ONE << 100);
        assert_eq!(big.to_f64(), 2.0_f64.powi(100));

        let neg = I256::checked_from_f64(-(2.0_f64.powi(100))).unwrap();
        assert_eq!(neg, -(I256::ONE << 100u32));
        assert_eq!(neg.to_f64(), -(2.0_f64.powi(100)));
    }

    #[test]
    fn extended_types_reject_out_of_range() {
        assert!(matches!(
            U256::checked_from_f64(2.0_f64.powi(256)),
            Err(MathError::OverflowConversion { .. })
        ));
        assert!(matches!(
            U256::checked_from_f64(-1.0),
            Err(MathError::OverflowConversion { .. })
        ));
    }

    #[test]
    fn checked_wrapper_reports_out_of_range() {
        assert!(matches!(
            Checked::<u8>::checked_from_f64(300.0),
            Err(MathError::OutOfRange { .. })
        ));
        assert_eq!(
            Checked::<u8>::checked_from_f64(30.0).unwrap(),
            Checked::new(30)
        );
    }
}
