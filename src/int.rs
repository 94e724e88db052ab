use {
    crate::{Integer, MathResult, NextNumber, Number, NumberConst},
    bnum::types::{I256, I512, U256, U512},
    std::{
        fmt::{self, Display},
        iter::Sum,
        ops::{
            Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl,
            ShlAssign, Shr, ShrAssign, Sub, SubAssign,
        },
    },
};

// ------------------------------- generic type --------------------------------

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Int<U>(pub U);

impl<U> Int<U> {
    pub const fn new(value: U) -> Self {
        Self(value)
    }
}

impl<U> Int<U>
where
    Int<U>: NextNumber,
    <Int<U> as NextNumber>::Next: Number,
{
    /// Multiply into the next wider word, so the full product is always
    /// representable.
    pub fn checked_full_mul(
        self,
        rhs: impl Into<Self>,
    ) -> MathResult<<Int<U> as NextNumber>::Next> {
        let s = self.into_next();
        let r = rhs.into().into_next();
        s.checked_mul(r)
    }
}

impl<U> fmt::Display for Int<U>
where
    U: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<U> Neg for Int<U>
where
    U: Neg<Output = U>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<U> Add for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Sub for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Mul for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Div for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Rem for Int<U>
where
    U: Number,
{
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Shl<u32> for Int<U>
where
    U: Integer,
{
    type Output = Self;

    fn shl(self, rhs: u32) -> Self::Output {
        self.checked_shl(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> Shr<u32> for Int<U>
where
    U: Integer,
{
    type Output = Self;

    fn shr(self, rhs: u32) -> Self::Output {
        self.checked_shr(rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<U> AddAssign for Int<U>
where
    U: Number + Copy,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U> SubAssign for Int<U>
where
    U: Number + Copy,
{
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<U> MulAssign for Int<U>
where
    U: Number + Copy,
{
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<U> DivAssign for Int<U>
where
    U: Number + Copy,
{
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<U> RemAssign for Int<U>
where
    U: Number + Copy,
{
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl<U> ShlAssign<u32> for Int<U>
where
    U: Integer + Copy,
{
    fn shl_assign(&mut self, rhs: u32) {
        *self = *self << rhs;
    }
}

impl<U> ShrAssign<u32> for Int<U>
where
    U: Integer + Copy,
{
    fn shr_assign(&mut self, rhs: u32) {
        *self = *self >> rhs;
    }
}

impl<U> Not for Int<U>
where
    U: Not<Output = U>,
{
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

impl<U> Sum for Int<U>
where
    U: Number + NumberConst + Copy,
{
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        let mut sum = Self::ZERO;
        for int in iter {
            sum += int;
        }
        sum
    }
}

// ------------------------------ concrete types -------------------------------

/// 8-bit unsigned integer.
pub type Uint8 = Int<u8>;

/// 16-bit unsigned integer.
pub type Uint16 = Int<u16>;

/// 32-bit unsigned integer.
pub type Uint32 = Int<u32>;

/// 64-bit unsigned integer.
pub type Uint64 = Int<u64>;

/// 128-bit unsigned integer.
pub type Uint128 = Int<u128>;

/// 256-bit unsigned integer.
pub type Uint256 = Int<U256>;

/// 512-bit unsigned integer.
pub type Uint512 = Int<U512>;

/// 8-bit signed integer.
pub type Int8 = Int<i8>;

/// 16-bit signed integer.
pub type Int16 = Int<i16>;

/// 32-bit signed integer.
pub type Int32 = Int<i32>;

/// 64-bit signed integer.
pub type Int64 = Int<i64>;

/// 128-bit signed integer.
pub type Int128 = Int<i128>;

/// 256-bit signed integer.
pub type Int256 = Int<I256>;

/// 512-bit signed integer.
pub type Int512 = Int<I512>;

// ---------------------- additional constructor methods -----------------------

macro_rules! impl_from_inner {
    ($($alias:ty => $inner:ty),+ $(,)?) => {
        $(
            impl From<$inner> for $alias {
                fn from(value: $inner) -> Self {
                    Self::new(value)
                }
            }
        )+
    };
}

impl_from_inner! {
    Uint8   => u8,
    Uint16  => u16,
    Uint32  => u32,
    Uint64  => u64,
    Uint128 => u128,
    Uint256 => U256,
    Uint512 => U512,
    Int8    => i8,
    Int16   => i16,
    Int32   => i32,
    Int64   => i64,
    Int128  => i128,
    Int256  => I256,
    Int512  => I512,
}

// ----------------------------------- tests -----------------------------------
