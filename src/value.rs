use {
    crate::{
        Checked, Fixed, Inner, Int, Layout, MathError, MathResult, Op, Repr, TypeRepr,
        conversions::{pow2f, u512_to_f64},
        resolve,
    },
    bnum::{
        BTryFrom,
        cast::As,
        types::{I256, I512, U256, U512},
    },
    std::cmp::Ordering,
};

// ------------------------------- raw payload ---------------------------------

/// The carrier a [`Value`] stores its raw scaled number in: a 512-bit word
/// for the integer categories (wide enough for any representable raw value),
/// a double for the float category.
#[derive(Debug, Clone, Copy)]
pub enum Raw {
    Int(I512),
    Uint(U512),
    Float(f64),
}

/// Maps a static representation scalar into and out of the raw carrier.
pub trait RawScalar: TypeRepr + Sized {
    fn into_raw(self) -> Raw;

    fn try_from_raw(raw: Raw) -> Option<Self>;
}

macro_rules! impl_raw_scalar_uint {
    ($($t:ty),+ $(,)?) => {
        $(
            impl RawScalar for $t {
                fn into_raw(self) -> Raw {
                    Raw::Uint(U512::from(self))
                }

                fn try_from_raw(raw: Raw) -> Option<Self> {
                    match raw {
                        Raw::Uint(u) => u.try_into().ok(),
                        _ => None,
                    }
                }
            }
        )+
    };
}

macro_rules! impl_raw_scalar_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl RawScalar for $t {
                fn into_raw(self) -> Raw {
                    Raw::Int(I512::from(self))
                }

                fn try_from_raw(raw: Raw) -> Option<Self> {
                    match raw {
                        Raw::Int(i) => i.try_into().ok(),
                        _ => None,
                    }
                }
            }
        )+
    };
}

impl_raw_scalar_uint! { u8, u16, u32, u64, u128 }
impl_raw_scalar_int! { i8, i16, i32, i64, i128 }

impl RawScalar for U256 {
    fn into_raw(self) -> Raw {
        Raw::Uint(self.as_())
    }

    fn try_from_raw(raw: Raw) -> Option<Self> {
        match raw {
            Raw::Uint(u) => BTryFrom::try_from(u).ok(),
            _ => None,
        }
    }
}

impl RawScalar for U512 {
    fn into_raw(self) -> Raw {
        Raw::Uint(self)
    }

    fn try_from_raw(raw: Raw) -> Option<Self> {
        match raw {
            Raw::Uint(u) => Some(u),
            _ => None,
        }
    }
}

impl RawScalar for I256 {
    fn into_raw(self) -> Raw {
        Raw::Int(self.as_())
    }

    fn try_from_raw(raw: Raw) -> Option<Self> {
        match raw {
            Raw::Int(i) => BTryFrom::try_from(i).ok(),
            _ => None,
        }
    }
}

impl RawScalar for I512 {
    fn into_raw(self) -> Raw {
        Raw::Int(self)
    }

    fn try_from_raw(raw: Raw) -> Option<Self> {
        match raw {
            Raw::Int(i) => Some(i),
            _ => None,
        }
    }
}

impl RawScalar for f32 {
    fn into_raw(self) -> Raw {
        Raw::Float(self as f64)
    }

    fn try_from_raw(raw: Raw) -> Option<Self> {
        match raw {
            Raw::Float(f) => Some(f as f32),
            _ => None,
        }
    }
}

impl RawScalar for f64 {
    fn into_raw(self) -> Raw {
        Raw::Float(self)
    }

    fn try_from_raw(raw: Raw) -> Option<Self> {
        match raw {
            Raw::Float(f) => Some(f),
            _ => None,
        }
    }
}

impl<U> RawScalar for Checked<U>
where
    U: RawScalar,
    Checked<U>: TypeRepr,
{
    fn into_raw(self) -> Raw {
        self.0.into_raw()
    }

    fn try_from_raw(raw: Raw) -> Option<Self> {
        U::try_from_raw(raw).map(Checked::new)
    }
}

// ------------------------------ dynamic value --------------------------------

/// A number carrying its own [`Layout`]: the runtime mirror of the static
/// fixed-point types, and the single entry point through which every binary
/// operation flows.
///
/// A binary operation resolves its result layout through
/// [`resolve`](crate::resolve), normalizes both operands to it, performs one
/// implementation per operator on the raw carrier, and returns a value in
/// exactly the resolved layout. Plain representations wrap modulo their
/// width; checked representations compute exactly and signal
/// [`MathError::OutOfRange`]; width-tracking representations grow their digit
/// count per the exact bit-growth rules.
#[derive(Debug, Clone, Copy)]
pub struct Value {
    layout: Layout,
    raw: Raw,
}

impl Value {
    /// A scalar at exponent zero: a plain integer, or a float.
    pub fn scalar<T: RawScalar>(value: T) -> Self {
        let raw = canonical(value.into_raw(), &T::REPR);
        Self {
            layout: Layout::integer(T::REPR),
            raw,
        }
    }

    /// A fixed-point value from its raw bits and a binary exponent. Float
    /// scalars ignore the exponent; their scale lives in the value.
    pub fn with_scale<T: RawScalar>(bits: T, exponent: i32) -> Self {
        let exponent = if T::REPR.is_float() { 0 } else { exponent };
        let raw = canonical(bits.into_raw(), &T::REPR);
        Self {
            layout: Layout::new(T::REPR, exponent),
            raw,
        }
    }

    pub fn float(value: f64) -> Self {
        Self::scalar(value)
    }

    pub fn float32(value: f32) -> Self {
        Self::scalar(value)
    }

    /// A width-tracking integer from its raw bits, an explicit digit count,
    /// and a binary exponent. Fails if the value needs more significant bits
    /// than the digit count grants, or if the digits exceed the widest
    /// available storage.
    pub fn elastic<T: RawScalar>(bits: T, digits: u32, exponent: i32) -> MathResult<Self> {
        let signed = T::REPR.is_signed();
        let repr = Repr::Elastic { digits, signed };

        if repr.width() > CARRIER_BITS {
            return Err(MathError::excess_digits(repr, CARRIER_BITS));
        }

        let raw = canonical(bits.into_raw(), &T::REPR);
        let (_, mag) = signed_mag(&raw);
        let significant = CARRIER_BITS - mag.leading_zeros();
        if significant > digits {
            return Err(MathError::excess_digits(fmt_raw(&raw), digits));
        }

        Ok(Self {
            layout: Layout::new(repr, exponent),
            raw,
        })
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn checked_add(self, other: Value) -> MathResult<Value> {
        self.checked_binop(Op::Add, other)
    }

    pub fn checked_sub(self, other: Value) -> MathResult<Value> {
        self.checked_binop(Op::Sub, other)
    }

    pub fn checked_mul(self, other: Value) -> MathResult<Value> {
        self.checked_binop(Op::Mul, other)
    }

    pub fn checked_div(self, other: Value) -> MathResult<Value> {
        self.checked_binop(Op::Div, other)
    }

    /// The generic binary-operation entry point.
    pub fn checked_binop(self, op: Op, other: Value) -> MathResult<Value> {
        let target = resolve(op, self.layout, other.layout);

        if target.repr.is_float() {
            let x = self.to_f64();
            let y = other.to_f64();
            let result = match op {
                Op::Add => x + y,
                Op::Sub => x - y,
                Op::Mul => x * y,
                Op::Div => x / y,
            };
            return Ok(Self::float_in(result, target));
        }

        if target.repr.is_elastic() && target.repr.width() > CARRIER_BITS {
            return Err(MathError::excess_digits(target.repr, CARRIER_BITS));
        }

        if target.repr.is_checked() {
            self.binop_exact(op, other, target)
        } else {
            self.binop_modular(op, other, target)
        }
    }

    /// Plain and width-tracking integer path: arithmetic modulo the target
    /// width, matching the documented silent-wraparound behavior of plain
    /// representations. Width-tracking targets cannot actually wrap, their
    /// digit count having grown to fit.
    fn binop_modular(self, op: Op, other: Value, target: Layout) -> MathResult<Value> {
        let a = self.bits_at(op, target.exponent);
        let b = other.bits_at(op, target.exponent);

        // reduce the operands to the target representation before operating;
        // for division this is required, not just equivalent
        let a = canonical_bits(a, &target.repr);
        let b = canonical_bits(b, &target.repr);

        let out = match op {
            Op::Add => a.wrapping_add(b),
            Op::Sub => a.wrapping_sub(b),
            Op::Mul => a.wrapping_mul(b),
            Op::Div => {
                if b == U512::ZERO {
                    return Err(MathError::division_by_zero(fmt_raw(&self.raw)));
                }
                if target.repr.is_signed() {
                    let q = I512::from_bits(a).wrapping_div(I512::from_bits(b));
                    q.to_bits()
                } else {
                    a / b
                }
            },
        };

        Ok(Self {
            layout: target,
            raw: canonical(Raw::Uint(out), &target.repr),
        })
    }

    /// Overflow-checked path: the mathematically exact result is computed,
    /// then validated against the target's representable range.
    fn binop_exact(self, op: Op, other: Value, target: Layout) -> MathResult<Value> {
        let a = self
            .exact_value()
            .ok_or_else(|| MathError::out_of_range::<Value>(fmt_raw(&self.raw)))?;
        let b = other
            .exact_value()
            .ok_or_else(|| MathError::out_of_range::<Value>(fmt_raw(&other.raw)))?;

        let a = rescale_exact(a, self.layout.exponent, op, target.exponent)?;
        let b = rescale_exact(b, other.layout.exponent, op, target.exponent)?;

        let exact = match op {
            Op::Add => a.checked_add(b),
            Op::Sub => a.checked_sub(b),
            Op::Mul => a.checked_mul(b),
            Op::Div => {
                if b == I512::ZERO {
                    return Err(MathError::division_by_zero(a));
                }
                a.checked_div(b)
            },
        }
        .ok_or_else(|| MathError::out_of_range::<Value>(fmt_raw(&self.raw)))?;

        let (min, max) = checked_bounds(&target.repr);
        if exact < min || exact > max {
            return Err(MathError::out_of_range::<Value>(exact));
        }

        Ok(Self {
            layout: target,
            raw: canonical(Raw::Uint(exact.to_bits()), &target.repr),
        })
    }

    /// Value-order comparison across layouts. Exact for the integer
    /// categories regardless of scale difference; floats compare by their
    /// IEEE total order.
    pub fn compare(&self, other: &Value) -> Ordering {
        if self.layout.repr.is_float() || other.layout.repr.is_float() {
            return self.to_f64().total_cmp(&other.to_f64());
        }

        let (aneg, amag) = signed_mag(&self.raw);
        let (bneg, bmag) = signed_mag(&other.raw);

        match (aneg, bneg) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => mag_cmp(amag, self.layout.exponent, bmag, other.layout.exponent),
            (true, true) => mag_cmp(bmag, other.layout.exponent, amag, self.layout.exponent),
        }
    }

    /// The value as a double: `raw * 2^exponent`. May lose precision for
    /// very wide raw values.
    pub fn to_f64(&self) -> f64 {
        match &self.raw {
            Raw::Float(f) => *f,
            Raw::Int(i) => {
                let sign = if i.is_negative() { -1.0 } else { 1.0 };
                sign * u512_to_f64(i.unsigned_abs()) * pow2f(self.layout.exponent)
            },
            Raw::Uint(u) => u512_to_f64(*u) * pow2f(self.layout.exponent),
        }
    }

    /// Extract a static fixed-point value. The layout must match exactly;
    /// no implicit conversion happens here.
    pub fn try_into_fixed<U, const E: i32>(self) -> MathResult<Fixed<U, E>>
    where
        U: RawScalar,
    {
        let expect = Layout::new(U::REPR, E);
        if self.layout != expect {
            return Err(MathError::layout_mismatch(expect, self.layout));
        }

        U::try_from_raw(self.raw)
            .map(|u| Fixed::from_bits(Int::new(u)))
            .ok_or_else(|| MathError::overflow_conversion::<_, U>(fmt_raw(&self.raw)))
    }

    /// Extract a plain scalar; the layout must be the scalar's at exponent
    /// zero.
    pub fn try_into_scalar<T>(self) -> MathResult<T>
    where
        T: RawScalar,
    {
        let expect = Layout::integer(T::REPR);
        if self.layout != expect {
            return Err(MathError::layout_mismatch(expect, self.layout));
        }

        T::try_from_raw(self.raw).ok_or_else(|| MathError::overflow_conversion::<_, T>(fmt_raw(&self.raw)))
    }

    fn float_in(value: f64, target: Layout) -> Self {
        let value = if target.repr.width() <= 32 {
            value as f32 as f64
        } else {
            value
        };
        Self {
            layout: target,
            raw: Raw::Float(value),
        }
    }

    /// Two's-complement bits of the numeric value, rescaled to the target
    /// exponent for the additive operators. Multiplicative operators take
    /// the raw bits as-is; their exponent algebra is exact.
    fn bits_at(&self, op: Op, target_exponent: i32) -> U512 {
        let bits = raw_bits(&self.raw);
        match op {
            Op::Add | Op::Sub => rescale_bits(bits, self.layout.exponent, target_exponent),
            Op::Mul | Op::Div => bits,
        }
    }

    /// The exact numeric value as a 512-bit signed word, when it fits.
    fn exact_value(&self) -> Option<I512> {
        match &self.raw {
            Raw::Int(i) => Some(*i),
            Raw::Uint(u) => {
                if u.bit(CARRIER_BITS - 1) {
                    None
                } else {
                    Some(I512::from_bits(*u))
                }
            },
            Raw::Float(_) => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<U, const E: i32> From<Fixed<U, E>> for Value
where
    U: RawScalar,
{
    fn from(fixed: Fixed<U, E>) -> Self {
        Self::with_scale(fixed.into_inner(), E)
    }
}

// ------------------------------- bit plumbing --------------------------------

const CARRIER_BITS: u32 = 512;

fn raw_bits(raw: &Raw) -> U512 {
    match raw {
        Raw::Int(i) => i.to_bits(),
        Raw::Uint(u) => *u,
        Raw::Float(_) => unreachable!("float values never enter the integer path"),
    }
}

/// Reduce two's-complement bits to the representation's width, then rebuild
/// the canonical payload: sign-extended for signed categories, zero-extended
/// otherwise.
fn canonical(raw: Raw, repr: &Repr) -> Raw {
    if repr.is_float() {
        return raw;
    }

    Raw::from_bits_canonical(canonical_bits(raw_bits(&raw), repr), repr)
}

fn canonical_bits(bits: U512, repr: &Repr) -> U512 {
    let width = repr.width().min(CARRIER_BITS);

    if repr.is_signed() {
        let shift = CARRIER_BITS - width;
        if shift == 0 {
            bits
        } else {
            ((I512::from_bits(bits) << shift) >> shift).to_bits()
        }
    } else if width == CARRIER_BITS {
        bits
    } else {
        bits & ((U512::ONE << width) - U512::ONE)
    }
}

impl Raw {
    fn from_bits_canonical(bits: U512, repr: &Repr) -> Raw {
        if repr.is_signed() {
            Raw::Int(I512::from_bits(bits))
        } else {
            Raw::Uint(bits)
        }
    }
}

fn signed_mag(raw: &Raw) -> (bool, U512) {
    match raw {
        Raw::Int(i) => (i.is_negative(), i.unsigned_abs()),
        Raw::Uint(u) => (false, *u),
        Raw::Float(_) => unreachable!("float values never enter the integer path"),
    }
}

/// Shift two's-complement bits from one exponent to another. Coarsening
/// truncates toward zero; refining shifts left, bits falling off the top
/// wrapping away exactly as the modular arithmetic expects.
fn rescale_bits(bits: U512, from: i32, to: i32) -> U512 {
    if from == to {
        return bits;
    }

    if from > to {
        let diff = (from - to) as u32;
        if diff >= CARRIER_BITS {
            return U512::ZERO;
        }
        return bits << diff;
    }

    let diff = (to - from) as u32;
    let value = I512::from_bits(bits);
    let (neg, mag) = (value.is_negative(), value.unsigned_abs());
    let mag = if diff >= CARRIER_BITS {
        U512::ZERO
    } else {
        mag >> diff
    };

    if neg {
        mag.wrapping_neg()
    } else {
        mag
    }
}

/// The exact-path analog of [`rescale_bits`]: refinement must not lose bits.
fn rescale_exact(value: I512, from: i32, op: Op, to: i32) -> MathResult<I512> {
    match op {
        Op::Mul | Op::Div => return Ok(value),
        Op::Add | Op::Sub => {},
    }

    if from == to {
        return Ok(value);
    }

    if from > to {
        let diff = (from - to) as u32;
        return value
            .checked_shl(diff)
            .ok_or_else(|| MathError::out_of_range::<Value>(value));
    }

    // truncation toward zero, on the magnitude so the shift stays in range
    // for any coarsening distance
    let diff = (to - from) as u32;
    let (neg, mag) = (value.is_negative(), value.unsigned_abs());
    let mag = if diff >= CARRIER_BITS {
        U512::ZERO
    } else {
        mag >> diff
    };

    if neg {
        Ok(I512::from_bits(mag.wrapping_neg()))
    } else {
        Ok(I512::from_bits(mag))
    }
}

fn checked_bounds(repr: &Repr) -> (I512, I512) {
    let width = repr.width().min(CARRIER_BITS);

    if repr.is_signed() {
        if width == CARRIER_BITS {
            (I512::MIN, I512::MAX)
        } else {
            let half = I512::ONE << (width - 1);
            (-half, half - I512::ONE)
        }
    } else if width == CARRIER_BITS {
        (I512::ZERO, I512::MAX)
    } else {
        (I512::ZERO, (I512::ONE << width) - I512::ONE)
    }
}

/// Compare `a * 2^ea` against `b * 2^eb`, both non-negative magnitudes.
fn mag_cmp(a: U512, ea: i32, b: U512, eb: i32) -> Ordering {
    if ea == eb {
        return a.cmp(&b);
    }

    if ea > eb {
        if a == U512::ZERO {
            return if b == U512::ZERO {
                Ordering::Equal
            } else {
                Ordering::Less
            };
        }

        let diff = (ea - eb) as u32;
        if diff >= CARRIER_BITS || a.leading_zeros() < diff {
            // the shifted magnitude exceeds the carrier, so it exceeds b
            return Ordering::Greater;
        }

        (a << diff).cmp(&b)
    } else {
        mag_cmp(b, eb, a, ea).reverse()
    }
}

fn fmt_raw(raw: &Raw) -> String {
    match raw {
        Raw::Int(i) => i.to_string(),
        Raw::Uint(u) => u.to_string(),
        Raw::Float(f) => f.to_string(),
    }
}

// ----------------------------------- tests -----------------------------------
