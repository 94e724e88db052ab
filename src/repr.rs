use {
    crate::Int,
    bnum::types::{I256, I512, U256, U512},
    std::fmt,
};

/// Canonical machine integer widths, narrowest first.
pub const MACHINE_WIDTHS: [u32; 5] = [8, 16, 32, 64, 128];

/// Extended integer widths backed by the big-integer plug-in, used when a
/// requested width exceeds every machine size.
pub const EXTENDED_WIDTHS: [u32; 2] = [256, 512];

/// The descriptor of a representation: its category, bit width, and
/// signedness. This is the closed set of tags the result-type resolution
/// works over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repr {
    /// A plain fixed-width integer, machine (8..128 bits) or extended
    /// (256/512 bits).
    Int { width: u32, signed: bool },
    /// A binary floating-point type, 32 or 64 bits wide.
    Float { width: u32 },
    /// A width-tracking integer: `digits` is the exact number of value bits
    /// needed, separate from the storage it resolves to.
    Elastic { digits: u32, signed: bool },
    /// An overflow-checked integer: same range as the plain integer of the
    /// same width, but every operation validates its result.
    Checked { width: u32, signed: bool },
}

impl Repr {
    /// Number of bits needed to represent the full range of the type. For
    /// width-tracking integers this is the tracked digit count plus a sign
    /// bit if signed.
    pub const fn width(&self) -> u32 {
        match self {
            Repr::Int { width, .. } => *width,
            Repr::Float { width } => *width,
            Repr::Elastic { digits, signed } => *digits + *signed as u32,
            Repr::Checked { width, .. } => *width,
        }
    }

    /// Number of value digits the representation can hold: the width minus
    /// the sign bit for integer categories, the mantissa digit count for
    /// floats.
    pub const fn digits(&self) -> u32 {
        match self {
            Repr::Int { width, signed } => *width - *signed as u32,
            Repr::Float { width } => {
                if *width <= 32 {
                    f32::MANTISSA_DIGITS
                } else {
                    f64::MANTISSA_DIGITS
                }
            },
            Repr::Elastic { digits, .. } => *digits,
            Repr::Checked { width, signed } => *width - *signed as u32,
        }
    }

    pub const fn is_signed(&self) -> bool {
        match self {
            Repr::Int { signed, .. } => *signed,
            Repr::Float { .. } => true,
            Repr::Elastic { signed, .. } => *signed,
            Repr::Checked { signed, .. } => *signed,
        }
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Repr::Float { .. })
    }

    pub const fn is_checked(&self) -> bool {
        matches!(self, Repr::Checked { .. })
    }

    pub const fn is_elastic(&self) -> bool {
        matches!(self, Repr::Elastic { .. })
    }

    /// The narrowest representation of the same category and signedness
    /// whose width is at least `min_bits`.
    ///
    /// Machine integers resolve through the canonical size table, then the
    /// extended sizes; a request beyond the widest extended size saturates
    /// to it, mirroring the float rule. Width-tracking integers change the
    /// digit count directly, with no table. Floats map to the narrowest
    /// float category that is at least as wide, else the widest available.
    pub fn set_width(self, min_bits: u32) -> Repr {
        match self {
            Repr::Int { signed, .. } => Repr::Int {
                width: integer_storage_width(min_bits),
                signed,
            },
            Repr::Float { .. } => Repr::Float {
                width: float_storage_width(min_bits),
            },
            Repr::Elastic { signed, .. } => Repr::Elastic {
                digits: min_bits.saturating_sub(signed as u32),
                signed,
            },
            Repr::Checked { signed, .. } => Repr::Checked {
                width: integer_storage_width(min_bits),
                signed,
            },
        }
    }

    pub const fn make_signed(self) -> Repr {
        match self {
            Repr::Int { width, .. } => Repr::Int {
                width,
                signed: true,
            },
            Repr::Float { width } => Repr::Float { width },
            Repr::Elastic { digits, .. } => Repr::Elastic {
                digits,
                signed: true,
            },
            Repr::Checked { width, .. } => Repr::Checked {
                width,
                signed: true,
            },
        }
    }

    pub const fn make_unsigned(self) -> Repr {
        match self {
            Repr::Int { width, .. } => Repr::Int {
                width,
                signed: false,
            },
            Repr::Float { width } => Repr::Float { width },
            Repr::Elastic { digits, .. } => Repr::Elastic {
                digits,
                signed: false,
            },
            Repr::Checked { width, .. } => Repr::Checked {
                width,
                signed: false,
            },
        }
    }

    /// The width of the storage actually backing the representation. For
    /// width-tracking integers this re-resolves the narrowest canonical
    /// storage that holds the tracked digits (plus sign); for every other
    /// category it is the width itself.
    pub fn storage_width(&self) -> u32 {
        match self {
            Repr::Elastic { .. } => integer_storage_width(self.width()),
            _ => self.width(),
        }
    }
}

impl fmt::Display for Repr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repr::Int { width, signed } => {
                write!(f, "{}{}", if *signed { "i" } else { "u" }, width)
            },
            Repr::Float { width } => write!(f, "f{width}"),
            Repr::Elastic { digits, signed } => {
                write!(f, "elastic<{}{}>", if *signed { "i" } else { "u" }, digits)
            },
            Repr::Checked { width, signed } => {
                write!(f, "checked<{}{}>", if *signed { "i" } else { "u" }, width)
            },
        }
    }
}

fn integer_storage_width(min_bits: u32) -> u32 {
    for width in MACHINE_WIDTHS {
        if width >= min_bits {
            return width;
        }
    }

    for width in EXTENDED_WIDTHS {
        if width >= min_bits {
            return width;
        }
    }

    EXTENDED_WIDTHS[EXTENDED_WIDTHS.len() - 1]
}

fn float_storage_width(min_bits: u32) -> u32 {
    if min_bits <= 32 {
        32
    } else {
        64
    }
}

// ---------------------------------- mapping ----------------------------------

/// Maps a static representation scalar to its descriptor.
pub trait TypeRepr {
    const REPR: Repr;
}

macro_rules! impl_type_repr {
    ($t:ty = $repr:expr) => {
        impl TypeRepr for $t {
            const REPR: Repr = $repr;
        }
    };
    ($($t:ty = $repr:expr),+ $(,)?) => {
        $(
            impl_type_repr!($t = $repr);
        )+
    };
}

impl_type_repr! {
    u8   = Repr::Int { width: 8, signed: false },
    u16  = Repr::Int { width: 16, signed: false },
    u32  = Repr::Int { width: 32, signed: false },
    u64  = Repr::Int { width: 64, signed: false },
    u128 = Repr::Int { width: 128, signed: false },
    U256 = Repr::Int { width: 256, signed: false },
    U512 = Repr::Int { width: 512, signed: false },
    i8   = Repr::Int { width: 8, signed: true },
    i16  = Repr::Int { width: 16, signed: true },
    i32  = Repr::Int { width: 32, signed: true },
    i64  = Repr::Int { width: 64, signed: true },
    i128 = Repr::Int { width: 128, signed: true },
    I256 = Repr::Int { width: 256, signed: true },
    I512 = Repr::Int { width: 512, signed: true },
    f32  = Repr::Float { width: 32 },
    f64  = Repr::Float { width: 64 },
}

impl<U> TypeRepr for Int<U>
where
    U: TypeRepr,
{
    const REPR: Repr = U::REPR;
}

// ----------------------------------- tests -----------------------------------
