use {
    crate::{
        FloatConvert, Int, Integer, IsZero, Layout, MathError, MathResult, NextNumber, Number,
        NumberConst, Sign, TypeRepr, Wrapping, conversions::pow2f, raised_exponent,
    },
    std::{
        cmp::Ordering,
        ops::{
            Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Shl, Shr, Sub,
            SubAssign,
        },
    },
};

// ------------------------------- generic type --------------------------------

/// A fixed-point number: a raw integer of representation `U` scaled by a
/// binary exponent `E` carried in the type. The real value is
/// `bits * 2^E`.
///
/// The exponent is a property of the type: two values of different exponent
/// are different types, and every same-type operation resolves its scale
/// statically. Operations whose result lives at another scale or width go
/// through the widening methods here, or through the dynamic
/// [`Value`](crate::Value) surface, which resolves layouts by the same
/// rules.
#[derive(Default, Debug, Clone, Copy)]
pub struct Fixed<U, const E: i32>(pub(crate) Int<U>);

impl<U, const E: i32> Fixed<U, E> {
    pub const EXPONENT: i32 = E;

    /// Wrap a raw scaled value directly, bypassing scaling. Exact: for any
    /// bits `b`, `Fixed::from_bits(b).to_bits() == b`.
    pub const fn from_bits(bits: Int<U>) -> Self {
        Self(bits)
    }

    pub fn to_bits(self) -> Int<U> {
        self.0
    }

    /// Read access to the raw scaled value, the only way to inspect exact
    /// internal state.
    pub const fn bits(&self) -> &Int<U> {
        &self.0
    }
}

impl<U, const E: i32> Fixed<U, E>
where
    U: TypeRepr,
{
    pub const LAYOUT: Layout = Layout::new(U::REPR, E);

    /// Digits above the binary point a value of this type can carry.
    pub const INTEGER_DIGITS: i32 = U::REPR.digits() as i32 + E;

    pub const FRACTIONAL_DIGITS: i32 = -E;
}

impl<U, const E: i32> Fixed<U, E>
where
    U: NumberConst,
{
    pub const MAX: Self = Self(Int::MAX);
    pub const MIN: Self = Self(Int::MIN);
    pub const ZERO: Self = Self(Int::ZERO);
}

// ------------------------------- construction --------------------------------

impl<U, const E: i32> Fixed<U, E>
where
    U: Number + Integer + NumberConst + Copy,
{
    /// Scale an integer into this type: the raw value is the input divided
    /// by `2^E`, truncated toward zero. Out-of-range inputs follow the
    /// representation: a plain integer's shift drops the excess bits
    /// silently, an overflow-checked representation fails with its range
    /// error.
    pub fn checked_from_int(int: impl Into<Int<U>>) -> MathResult<Self> {
        let int = int.into();

        if E < 0 {
            int.checked_mul_pow2((-E) as u32).map(Self)
        } else if E > 0 {
            int.checked_div_pow2(E as u32).map(Self)
        } else {
            Ok(Self(int))
        }
    }

    /// The integral part of the value, truncated toward zero.
    pub fn checked_into_int(self) -> MathResult<Int<U>> {
        if E < 0 {
            self.0.checked_div_pow2((-E) as u32)
        } else if E > 0 {
            self.0.checked_mul_pow2(E as u32)
        } else {
            Ok(self.0)
        }
    }

    /// Move the value to another scale of the same representation.
    /// Refining can overflow; coarsening truncates toward zero.
    pub fn convert_exponent<const E2: i32>(self) -> MathResult<Fixed<U, E2>> {
        if E2 < E {
            self.0.checked_mul_pow2((E - E2) as u32).map(Fixed)
        } else if E2 > E {
            self.0.checked_div_pow2((E2 - E) as u32).map(Fixed)
        } else {
            Ok(Fixed(self.0))
        }
    }
}

impl<U, const E: i32> Fixed<U, E>
where
    U: FloatConvert,
{
    /// The float scaled by `2^-E` and truncated toward zero. Non-finite and
    /// out-of-range inputs fail; an overflow-checked representation reports
    /// its own range error.
    pub fn checked_from_f64(value: f64) -> MathResult<Self> {
        if !value.is_finite() {
            return Err(MathError::non_finite(value));
        }

        // scaling by a power of two is exact in binary floating-point
        let scaled = (value * pow2f(-E)).trunc();
        Int::checked_from_f64(scaled).map(Self)
    }

    pub fn checked_from_f32(value: f32) -> MathResult<Self> {
        Self::checked_from_f64(value as f64)
    }

    /// `bits * 2^E` in floating arithmetic; may lose precision for very
    /// wide representations.
    pub fn to_f64(self) -> f64 {
        self.0.to_f64() * pow2f(E)
    }

    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }
}

// ------------------------------ low-level paths ------------------------------

impl<U, const E: i32> Fixed<U, E>
where
    U: Wrapping,
{
    /// Multiply the raw values directly: no widening, no rescaling, overflow
    /// wraps. The true product lives at exponent `2 * E`; accounting for
    /// that is the caller's business. This is the efficiency escape hatch
    /// the widening [`checked_mul`](crate::Number::checked_mul) is
    /// contrasted with.
    pub fn wrapping_mul_bits(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }
}

// -------------------------------- comparison ---------------------------------

/// Compare raw values across scales by promoting both to the common layout
/// the resolution rules pick over the doubled width, where the raised
/// exponent guarantees the integral parts fit.
fn cross_cmp<U, const EA: i32, const EB: i32>(a: Fixed<U, EA>, b: Fixed<U, EB>) -> Ordering
where
    U: TypeRepr,
    Int<U>: NextNumber,
    <Int<U> as NextNumber>::Next: Integer + Number + NumberConst + Ord + Copy,
{
    let wide = U::REPR.set_width(U::REPR.width() * 2);
    let capacity = wide.digits() as i32;
    let digits = U::REPR.digits() as i32;

    let ideal_top = (digits + EA).max(digits + EB);
    let exponent = raised_exponent(ideal_top, EA.min(EB), capacity);

    let a = rescale_wide(a.0.into_next(), EA, exponent);
    let b = rescale_wide(b.0.into_next(), EB, exponent);
    a.cmp(&b)
}

fn rescale_wide<N>(value: N, from: i32, to: i32) -> N
where
    N: Integer + Number + NumberConst + Copy,
{
    if from > to {
        // cannot overflow: the raised exponent leaves room for every
        // operand's integral part in the doubled width
        value
            .checked_mul_pow2((from - to) as u32)
            .unwrap_or_else(|err| panic!("{err}"))
    } else if from < to {
        value
            .checked_div_pow2((to - from) as u32)
            .unwrap_or_else(|err| panic!("{err}"))
    } else {
        value
    }
}

impl<U, const EA: i32, const EB: i32> PartialEq<Fixed<U, EB>> for Fixed<U, EA>
where
    U: TypeRepr + Copy,
    Int<U>: NextNumber + Copy,
    <Int<U> as NextNumber>::Next: Integer + Number + NumberConst + Ord + Copy,
{
    fn eq(&self, other: &Fixed<U, EB>) -> bool {
        cross_cmp(*self, *other) == Ordering::Equal
    }
}

impl<U, const E: i32> Eq for Fixed<U, E> where Self: PartialEq<Self> {}

impl<U, const EA: i32, const EB: i32> PartialOrd<Fixed<U, EB>> for Fixed<U, EA>
where
    U: TypeRepr + Copy,
    Int<U>: NextNumber + Copy,
    <Int<U> as NextNumber>::Next: Integer + Number + NumberConst + Ord + Copy,
{
    fn partial_cmp(&self, other: &Fixed<U, EB>) -> Option<Ordering> {
        Some(cross_cmp(*self, *other))
    }
}

// ----------------------------- unary properties ------------------------------

impl<U, const E: i32> IsZero for Fixed<U, E>
where
    U: IsZero,
{
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<U, const E: i32> Sign for Fixed<U, E>
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

/// Negation keeps the exponent and negates the raw value; it requires a
/// signed representation.
impl<U, const E: i32> Neg for Fixed<U, E>
where
    U: Neg<Output = U>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

// -------------------------------- operators ----------------------------------

impl<U, const E: i32> Add for Fixed<U, E>
where
    Self: Number,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U, const E: i32> Sub for Fixed<U, E>
where
    Self: Number,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U, const E: i32> Mul for Fixed<U, E>
where
    Self: Number,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U, const E: i32> Div for Fixed<U, E>
where
    Self: Number,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U, const E: i32> Rem for Fixed<U, E>
where
    Self: Number,
{
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U, const E: i32> AddAssign for Fixed<U, E>
where
    Self: Number + Copy,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U, const E: i32> SubAssign for Fixed<U, E>
where
    Self: Number + Copy,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// An integer operand is first brought to the left side's type, then added;
/// anything below the left side's scale would be truncated there.
impl<U, const E: i32> AddAssign<Int<U>> for Fixed<U, E>
where
    Self: Number + Copy,
    U: Number + Integer + NumberConst + Copy,
{
    fn add_assign(&mut self, rhs: Int<U>) {
        let rhs = Self::checked_from_int(rhs).unwrap_or_else(|err| panic!("{err}"));
        *self = *self + rhs;
    }
}

impl<U, const E: i32> SubAssign<Int<U>> for Fixed<U, E>
where
    Self: Number + Copy,
    U: Number + Integer + NumberConst + Copy,
{
    fn sub_assign(&mut self, rhs: Int<U>) {
        let rhs = Self::checked_from_int(rhs).unwrap_or_else(|err| panic!("{err}"));
        *self = *self - rhs;
    }
}

/// `*=` multiplies the raw value by the operand directly, with no widening
/// of the representation: the low-level contract, deliberately asymmetric
/// with the widening `*`. Overflow wraps, so the path only exists for
/// representations that admit wrapping.
impl<U, T, const E: i32> MulAssign<T> for Fixed<U, E>
where
    T: Into<Int<U>>,
    U: Wrapping + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.0 = self.0.wrapping_mul(rhs.into());
    }
}

/// `/=` divides the raw value by the operand directly, mirroring `*=`.
impl<U, T, const E: i32> DivAssign<T> for Fixed<U, E>
where
    T: Into<Int<U>>,
    U: Number + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        self.0 = self
            .0
            .checked_div(rhs.into())
            .unwrap_or_else(|err| panic!("{err}"));
    }
}

/// Raw bit shifts: the exponent is unchanged, so the value itself is
/// multiplied or divided by `2^n`. A low-level escape hatch, not
/// scale-preserving arithmetic.
impl<U, const E: i32> Shl<u32> for Fixed<U, E>
where
    U: Integer,
{
    type Output = Self;

    fn shl(self, rhs: u32) -> Self::Output {
        Self(self.0.checked_shl(rhs).unwrap_or_else(|err| panic!("{err}")))
    }
}

impl<U, const E: i32> Shr<u32> for Fixed<U, E>
where
    U: Integer,
{
    type Output = Self;

    fn shr(self, rhs: u32) -> Self::Output {
        Self(self.0.checked_shr(rhs).unwrap_or_else(|err| panic!("{err}")))
    }
}

// ------------------------------ concrete types -------------------------------

/// Unsigned fixed-point over a byte.
pub type Ufix8<const E: i32> = Fixed<u8, E>;

pub type Ufix16<const E: i32> = Fixed<u16, E>;

pub type Ufix32<const E: i32> = Fixed<u32, E>;

pub type Ufix64<const E: i32> = Fixed<u64, E>;

pub type Ufix128<const E: i32> = Fixed<u128, E>;

/// Signed fixed-point over a byte.
pub type Fix8<const E: i32> = Fixed<i8, E>;

pub type Fix16<const E: i32> = Fixed<i16, E>;

pub type Fix32<const E: i32> = Fixed<i32, E>;

pub type Fix64<const E: i32> = Fixed<i64, E>;

pub type Fix128<const E: i32> = Fixed<i128, E>;

// ----------------------------------- tests -----------------------------------
