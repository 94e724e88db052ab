use {
    crate::{
        Checked, Fixed, Inner, Int, Int8, Int16, Int32, Int64, Int128, Int256, Int512, MathError,
        MathResult, Uint8, Uint16, Uint32, Uint64, Uint128, Uint256, Uint512,
    },
    bnum::BTryFrom,
};

/// Describes a number type can be cast into another type of a smaller word
/// size, failing if the value does not fit.
pub trait PrevNumber {
    type Prev;

    fn checked_into_prev(self) -> MathResult<Self::Prev>;
}

// ------------------------------------ std ------------------------------------

macro_rules! impl_prev {
    ($this:ty => $prev:ty) => {
        impl PrevNumber for $this {
            type Prev = $prev;

            fn checked_into_prev(self) -> MathResult<Self::Prev> {
                self.0
                    .try_into()
                    .map(<$prev>::new)
                    .map_err(|_| MathError::overflow_conversion::<_, $prev>(self))
            }
        }
    };
    ($($this:ty => $prev:ty),+ $(,)?) => {
        $(
            impl_prev!($this => $prev);
        )+
    };
}

impl_prev! {
    Uint16  => Uint8,
    Uint32  => Uint16,
    Uint64  => Uint32,
    Uint128 => Uint64,
    Uint256 => Uint128,
    Int16   => Int8,
    Int32   => Int16,
    Int64   => Int32,
    Int128  => Int64,
    Int256  => Int128,
}

// ----------------------------------- bnum ------------------------------------

macro_rules! impl_prev_bnum {
    ($this:ty => $prev:ty) => {
        impl PrevNumber for $this {
            type Prev = $prev;

            fn checked_into_prev(self) -> MathResult<Self::Prev> {
                BTryFrom::try_from(self.0)
                    .map(<$prev>::new)
                    .map_err(|_| MathError::overflow_conversion::<_, $prev>(self))
            }
        }
    };
    ($($this:ty => $prev:ty),+ $(,)?) => {
        $(
            impl_prev_bnum!($this => $prev);
        )+
    };
}

impl_prev_bnum! {
    Uint512 => Uint256,
    Int512  => Int256,
}

// ---------------------------------- checked ----------------------------------

// Narrowing an overflow-checked integer that does not fit is a range
// violation, so the error kind differs from the plain conversions above.
macro_rules! impl_prev_checked {
    ($this:ty => $prev:ty) => {
        impl PrevNumber for Int<Checked<$this>> {
            type Prev = Int<Checked<$prev>>;

            fn checked_into_prev(self) -> MathResult<Self::Prev> {
                <$prev>::try_from(self.0.0)
                    .map(|value| Int::new(Checked::new(value)))
                    .map_err(|_| MathError::out_of_range::<Checked<$prev>>(self.0.0))
            }
        }
    };
    ($($this:ty => $prev:ty),+ $(,)?) => {
        $(
            impl_prev_checked!($this => $prev);
        )+
    };
}

impl_prev_checked! {
    u16  => u8,
    u32  => u16,
    u64  => u32,
    u128 => u64,
    i16  => i8,
    i32  => i16,
    i64  => i32,
    i128 => i64,
}

// ----------------------------------- fixed -----------------------------------

/// Narrowing a fixed-point value keeps its exponent; only the representation
/// shrinks, failing if the raw value does not fit.
impl<U, const E: i32> PrevNumber for Fixed<U, E>
where
    Int<U>: PrevNumber,
    <Int<U> as PrevNumber>::Prev: Inner,
{
    type Prev = Fixed<<<Int<U> as PrevNumber>::Prev as Inner>::U, E>;

    fn checked_into_prev(self) -> MathResult<Self::Prev> {
        let narrowed = self.to_bits().checked_into_prev()?;
        Ok(Fixed::from_bits(Int::new(narrowed.into_inner())))
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use crate::{
        Int128, Int256, MathError, NextNumber, NumberConst, PrevNumber, Uint128, Uint256,
    };

    #[test]
    fn prev_roundtrip() {
        let value = Uint128::MAX;
        assert_eq!(value.into_next().checked_into_prev().unwrap(), value);

        let value = Int128::MIN;
        assert_eq!(value.into_next().checked_into_prev().unwrap(), value);
    }

    #[test]
    fn prev_out_of_range() {
        let too_big = Uint128::MAX.into_next() + Uint256::ONE;
        assert!(matches!(
            too_big.checked_into_prev(),
            Err(MathError::OverflowConversion { .. })
        ));

        let too_small = Int128::MIN.into_next() - Int256::ONE;
        assert!(matches!(
            too_small.checked_into_prev(),
            Err(MathError::OverflowConversion { .. })
        ));
    }
}
