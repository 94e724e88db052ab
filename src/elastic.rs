use {
    crate::{
        Int, Integer, IsZero, MathError, MathResult, NextNumber, Number, NumberConst, Repr, Sign,
        TypeRepr,
    },
    std::fmt::{self, Display},
};

/// A width-tracking integer: an integer that records the exact number of
/// significant bits its value may need, growing that count per-operation
/// instead of saturating at a fixed width.
///
/// `digits` is a precise bound, not a safety margin: multiplication yields
/// exactly `digits_a + digits_b`, addition and subtraction exactly
/// `max(digits_a, digits_b) + 1`. The archetype `U` is the storage backing
/// the digits and must always be able to hold them; an operation whose exact
/// digit count outgrows the archetype fails, and [`into_next`](NextNumber)
/// moves the value to the next wider archetype.
///
/// The descriptor-level mirror of this adapter is
/// [`Repr::Elastic`](crate::Repr), whose storage re-resolution the
/// resolution engine applies automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elastic<U> {
    value: Int<U>,
    digits: u32,
}

impl<U> Elastic<U>
where
    U: TypeRepr + NumberConst + Integer + IsZero + Sign + Copy + Display,
{
    /// Wrap a value with an explicit digit count. Fails if the value's
    /// magnitude needs more bits than the digit count grants, or if the
    /// digits exceed the archetype's capacity.
    pub fn checked_new(value: impl Into<Int<U>>, digits: u32) -> MathResult<Self> {
        let value = value.into();

        if digits > capacity::<U>() {
            return Err(MathError::excess_digits(value, capacity::<U>()));
        }

        if bit_count(value) > digits {
            return Err(MathError::excess_digits(value, digits));
        }

        Ok(Self { value, digits })
    }

    pub fn value(&self) -> Int<U> {
        self.value
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// The descriptor of this value's current type.
    pub fn repr(&self) -> Repr {
        Repr::Elastic {
            digits: self.digits,
            signed: U::REPR.is_signed(),
        }
    }

    /// The narrowest canonical storage the current digit count resolves to.
    pub fn storage_width(&self) -> u32 {
        self.repr().storage_width()
    }

    fn grown(value: Int<U>, digits: u32) -> MathResult<Self> {
        if digits > capacity::<U>() {
            return Err(MathError::excess_digits(value, capacity::<U>()));
        }

        Ok(Self { value, digits })
    }
}

impl<U> Display for Elastic<U>
where
    U: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<U> Number for Elastic<U>
where
    U: TypeRepr + NumberConst + Number + Integer + IsZero + Sign + Copy + Display,
{
    /// `max(digits_a, digits_b) + 1`: one extra bit for the worst-case
    /// carry.
    fn checked_add(self, other: Self) -> MathResult<Self> {
        let digits = self.digits.max(other.digits) + 1;
        Self::grown(self.value.checked_add(other.value)?, digits)
    }

    /// Same growth as addition: one extra bit for the worst-case borrow.
    fn checked_sub(self, other: Self) -> MathResult<Self> {
        let digits = self.digits.max(other.digits) + 1;
        Self::grown(self.value.checked_sub(other.value)?, digits)
    }

    /// `digits_a + digits_b`: the exact bit growth of a product.
    fn checked_mul(self, other: Self) -> MathResult<Self> {
        let digits = self.digits + other.digits;
        Self::grown(self.value.checked_mul(other.value)?, digits)
    }

    /// A quotient never needs more bits than its dividend.
    fn checked_div(self, other: Self) -> MathResult<Self> {
        Self::grown(self.value.checked_div(other.value)?, self.digits)
    }

    /// A remainder never needs more bits than the divisor.
    fn checked_rem(self, other: Self) -> MathResult<Self> {
        Self::grown(self.value.checked_rem(other.value)?, other.digits)
    }

    fn checked_pow(self, other: u32) -> MathResult<Self> {
        let mut result = Self::checked_new(Int::<U>::ONE, 1)?;
        for _ in 0..other {
            result = result.checked_mul(self)?;
        }
        Ok(result)
    }

    /// A square root needs half the bits, rounded up.
    fn checked_sqrt(self) -> MathResult<Self> {
        let digits = self.digits.div_ceil(2);
        Self::grown(self.value.checked_sqrt()?, digits)
    }
}

impl<U> Integer for Elastic<U>
where
    U: TypeRepr + NumberConst + Integer + IsZero + Sign + Copy + Display,
{
    /// Shifting left grows the digit count by the shift amount, so no bit is
    /// ever lost.
    fn checked_shl(self, other: u32) -> MathResult<Self> {
        Self::grown(self.value.checked_shl(other)?, self.digits + other)
    }

    /// Shifting right truncates; the old digit bound still covers the
    /// result.
    fn checked_shr(self, other: u32) -> MathResult<Self> {
        Ok(Self {
            value: self.value.checked_shr(other)?,
            digits: self.digits,
        })
    }

    fn checked_ilog2(self) -> MathResult<u32> {
        self.value.checked_ilog2()
    }
}

impl<U> IsZero for Elastic<U>
where
    U: IsZero,
{
    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl<U> Sign for Elastic<U>
where
    U: Sign,
{
    fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    fn checked_abs(self) -> MathResult<Self> {
        self.value.checked_abs().map(|value| Self {
            value,
            digits: self.digits,
        })
    }
}

/// Value digits the archetype can hold.
fn capacity<U: TypeRepr>() -> u32 {
    U::REPR.digits()
}

/// Bits needed for the value's magnitude. The most negative value of a
/// signed archetype needs one bit more than the capacity, so it can never
/// satisfy a valid digit bound; this keeps the bound symmetric.
fn bit_count<U>(value: Int<U>) -> u32
where
    U: TypeRepr + NumberConst + Integer + IsZero + Sign + Copy,
{
    if value.is_zero() {
        return 0;
    }

    match value.checked_abs() {
        // safe to unwrap: the magnitude is non-zero
        Ok(abs) => abs.checked_ilog2().unwrap() + 1,
        Err(_) => capacity::<U>() + 1,
    }
}

// --------------------------- archetype promotion -----------------------------

macro_rules! impl_next_elastic {
    ($this:ty => $next:ty) => {
        impl NextNumber for Elastic<$this> {
            type Next = Elastic<$next>;

            fn into_next(self) -> Self::Next {
                Elastic {
                    value: Int::new(self.value.0.into()),
                    digits: self.digits,
                }
            }
        }
    };
    ($($this:ty => $next:ty),+ $(,)?) => {
        $(
            impl_next_elastic!($this => $next);
        )+
    };
}

impl_next_elastic! {
    u8  => u16,
    u16 => u32,
    u32 => u64,
    u64 => u128,
    i8  => i16,
    i16 => i32,
    i32 => i64,
    i64 => i128,
}

// ----------------------------------- tests -----------------------------------
