use {
    crate::{
        Integer, IsZero, MathError, MathResult, Number, NumberConst, Repr, Sign, TypeRepr,
    },
    std::fmt::{self, Display},
};

/// An overflow-checked representation: wraps a fixed machine integer and
/// validates every arithmetic result against the wrapped type's range,
/// signaling [`MathError::OutOfRange`] on violation instead of wrapping.
///
/// `Checked<U>` implements [`Number`] and [`Integer`] but deliberately not
/// [`Wrapping`](crate::Wrapping): the silent-wraparound paths do not exist
/// for it. It composes with the fixed-point type through
/// `Fixed<Checked<U>, E>`, which then propagates range failures from every
/// raw-level operation, construction and scaling included.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checked<U>(pub U);

impl<U> Checked<U> {
    pub const fn new(value: U) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> U {
        self.0
    }
}

impl<U> Display for Checked<U>
where
    U: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<U> Number for Checked<U>
where
    U: Number + IsZero + Display + Copy,
{
    fn checked_add(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .map_err(|_| MathError::out_of_range::<Self>(self.0))
    }

    fn checked_sub(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .map_err(|_| MathError::out_of_range::<Self>(self.0))
    }

    fn checked_mul(self, other: Self) -> MathResult<Self> {
        self.0
            .checked_mul(other.0)
            .map(Self)
            .map_err(|_| MathError::out_of_range::<Self>(self.0))
    }

    fn checked_div(self, other: Self) -> MathResult<Self> {
        if other.0.is_zero() {
            return Err(MathError::division_by_zero(self.0));
        }

        // the only non-zero-divisor failure is MIN / -1
        self.0
            .checked_div(other.0)
            .map(Self)
            .map_err(|_| MathError::out_of_range::<Self>(self.0))
    }

    fn checked_rem(self, other: Self) -> MathResult<Self> {
        if other.0.is_zero() {
            return Err(MathError::remainder_by_zero(self.0));
        }

        self.0
            .checked_rem(other.0)
            .map(Self)
            .map_err(|_| MathError::out_of_range::<Self>(self.0))
    }

    fn checked_pow(self, other: u32) -> MathResult<Self> {
        self.0
            .checked_pow(other)
            .map(Self)
            .map_err(|_| MathError::out_of_range::<Self>(self.0))
    }

    fn checked_sqrt(self) -> MathResult<Self> {
        // a square root cannot leave the range; only the negative-input
        // failure passes through unchanged
        self.0.checked_sqrt().map(Self)
    }
}

impl<U> Integer for Checked<U>
where
    U: Integer + PartialEq + Display + Copy,
{
    /// A left shift that would lose bits is a range violation, not a silent
    /// truncation. The plain machine shift only validates the shift amount,
    /// so the check is a shift back and compare.
    fn checked_shl(self, other: u32) -> MathResult<Self> {
        let shifted = self
            .0
            .checked_shl(other)
            .map_err(|_| MathError::out_of_range::<Self>(self.0))?;

        let back = shifted
            .checked_shr(other)
            .map_err(|_| MathError::out_of_range::<Self>(self.0))?;
        if back != self.0 {
            return Err(MathError::out_of_range::<Self>(self.0));
        }

        Ok(Self(shifted))
    }

    fn checked_shr(self, other: u32) -> MathResult<Self> {
        self.0
            .checked_shr(other)
            .map(Self)
            .map_err(|_| MathError::out_of_range::<Self>(self.0))
    }

    fn checked_ilog2(self) -> MathResult<u32> {
        self.0.checked_ilog2()
    }
}

impl<U> NumberConst for Checked<U>
where
    U: NumberConst,
{
    const MAX: Self = Self(U::MAX);
    const MIN: Self = Self(U::MIN);
    const ONE: Self = Self(U::ONE);
    const TEN: Self = Self(U::TEN);
    const ZERO: Self = Self(U::ZERO);
}

impl<U> IsZero for Checked<U>
where
    U: IsZero,
{
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<U> Sign for Checked<U>
where
    U: Sign + Display + Copy,
{
    fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    fn checked_abs(self) -> MathResult<Self> {
        self.0
            .checked_abs()
            .map(Self)
            .map_err(|_| MathError::out_of_range::<Self>(self.0))
    }
}

impl<U> TypeRepr for Checked<U>
where
    U: TypeRepr,
{
    const REPR: Repr = Repr::Checked {
        width: U::REPR.width(),
        signed: U::REPR.is_signed(),
    };
}

// ----------------------------------- tests -----------------------------------
