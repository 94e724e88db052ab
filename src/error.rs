use {std::any::type_name, thiserror::Error};

#[derive(Debug, Clone, Error)]
pub enum MathError {
    #[error("addition overflow: {a} + {b} > {ty}::MAX")]
    OverflowAdd {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("subtraction overflow: {a} - {b} < {ty}::MIN")]
    OverflowSub {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("multiplication overflow: {a} * {b} > {ty}::MAX")]
    OverflowMul {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("power overflow: {a} ^ {b} > {ty}::MAX")]
    OverflowPow {
        ty: &'static str,
        a: String,
        b: String,
    },

    #[error("left shift overflow: {a} << {b}")]
    OverflowShl { a: String, b: u32 },

    #[error("right shift overflow: {a} >> {b}")]
    OverflowShr { a: String, b: u32 },

    #[error("absolute value overflow: |{a}| > {ty}::MAX")]
    OverflowAbs { ty: &'static str, a: String },

    #[error("conversion overflow: {source_type}({value}) out of range for {target_type}")]
    OverflowConversion {
        source_type: &'static str,
        target_type: &'static str,
        value: String,
    },

    #[error("division by zero: {a} / 0")]
    DivisionByZero { a: String },

    #[error("remainder by zero: {a} % 0")]
    RemainderByZero { a: String },

    #[error("square root of negative: sqrt({a})")]
    NegativeSqrt { a: String },

    #[error("logarithm of zero")]
    ZeroLog,

    /// Signaled by overflow-checked representations whenever an operation's
    /// exact result, or a constructed value, falls outside the wrapped
    /// type's representable range. Kept distinct from the plain overflow
    /// variants so callers can tell a checked-representation failure apart
    /// from any other error kind.
    #[error("value out of range for {ty}: {value}")]
    OutOfRange { ty: &'static str, value: String },

    #[error("too many significant bits: {value} needs more than {digits} digits")]
    ExcessDigits { value: String, digits: u32 },

    #[error("layout mismatch: expecting {expect}, found {actual}")]
    LayoutMismatch { expect: String, actual: String },

    #[error("non-finite floating-point input: {value}")]
    NonFiniteFloat { value: f64 },
}

impl MathError {
    pub fn overflow_add<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowAdd {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_sub<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowSub {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_mul<T: ToString>(a: T, b: T) -> Self {
        Self::OverflowMul {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_pow<T: ToString>(a: T, b: u32) -> Self {
        Self::OverflowPow {
            ty: type_name::<T>(),
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    pub fn overflow_shl<T: ToString>(a: T, b: u32) -> Self {
        Self::OverflowShl {
            a: a.to_string(),
            b,
        }
    }

    pub fn overflow_shr<T: ToString>(a: T, b: u32) -> Self {
        Self::OverflowShr {
            a: a.to_string(),
            b,
        }
    }

    pub fn overflow_abs<T: ToString>(a: T) -> Self {
        Self::OverflowAbs {
            ty: type_name::<T>(),
            a: a.to_string(),
        }
    }

    pub fn overflow_conversion<A: ToString, B>(source: A) -> Self {
        Self::OverflowConversion {
            source_type: type_name::<A>(),
            target_type: type_name::<B>(),
            value: source.to_string(),
        }
    }

    pub fn division_by_zero(a: impl ToString) -> Self {
        Self::DivisionByZero { a: a.to_string() }
    }

    pub fn remainder_by_zero(a: impl ToString) -> Self {
        Self::RemainderByZero { a: a.to_string() }
    }

    pub fn negative_sqrt(a: impl ToString) -> Self {
        Self::NegativeSqrt { a: a.to_string() }
    }

    pub fn zero_log() -> Self {
        Self::ZeroLog
    }

    pub fn out_of_range<T>(value: impl ToString) -> Self {
        Self::OutOfRange {
            ty: type_name::<T>(),
            value: value.to_string(),
        }
    }

    pub fn excess_digits(value: impl ToString, digits: u32) -> Self {
        Self::ExcessDigits {
            value: value.to_string(),
            digits,
        }
    }

    pub fn layout_mismatch(expect: impl ToString, actual: impl ToString) -> Self {
        Self::LayoutMismatch {
            expect: expect.to_string(),
            actual: actual.to_string(),
        }
    }

    pub fn non_finite(value: f64) -> Self {
        Self::NonFiniteFloat { value }
    }
}

pub type MathResult<T> = core::result::Result<T, MathError>;
