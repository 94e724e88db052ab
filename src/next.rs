use {
    crate::{
        Checked, Fixed, Inner, Int, Int8, Int16, Int32, Int64, Int128, Int256, Int512, Uint8,
        Uint16, Uint32, Uint64, Uint128, Uint256, Uint512,
    },
    bnum::cast::As,
};

/// Describes a number type can be cast into another type of a bigger word size.
///
/// For example, [`Uint128`](crate::Uint128) can be safely cast to
/// [`Uint256`](crate::Uint256). In this case, [`NextNumber`] is implemented
/// for [`Uint128`](crate::Uint128) with `Next` being
/// [`Uint256`](crate::Uint256).
pub trait NextNumber {
    type Next;

    fn into_next(self) -> Self::Next;
}

// ------------------------------------ std ------------------------------------

macro_rules! impl_next {
    ($this:ty => $next:ty) => {
        impl NextNumber for $this {
            type Next = $next;

            fn into_next(self) -> Self::Next {
                <$next>::new(self.0.into())
            }
        }
    };
    ($($this:ty => $next:ty),+ $(,)?) => {
        $(
            impl_next!($this => $next);
        )+
    };
}

impl_next! {
    Uint8   => Uint16,
    Uint16  => Uint32,
    Uint32  => Uint64,
    Uint64  => Uint128,
    Uint128 => Uint256,
    Int8    => Int16,
    Int16   => Int32,
    Int32   => Int64,
    Int64   => Int128,
    Int128  => Int256,
}

// ----------------------------------- bnum ------------------------------------

macro_rules! impl_next_bnum {
    ($this:ty => $next:ty) => {
        impl NextNumber for $this {
            type Next = $next;

            fn into_next(self) -> Self::Next {
                <$next>::new(self.0.as_())
            }
        }
    };
    ($($this:ty => $next:ty),+ $(,)?) => {
        $(
            impl_next_bnum!($this => $next);
        )+
    };
}

impl_next_bnum! {
    Uint256 => Uint512,
    Int256  => Int512,
}

// ---------------------------------- checked ----------------------------------

macro_rules! impl_next_checked {
    ($this:ty => $next:ty) => {
        impl NextNumber for Int<Checked<$this>> {
            type Next = Int<Checked<$next>>;

            fn into_next(self) -> Self::Next {
                Int::new(Checked::new(self.0.0.into()))
            }
        }
    };
    ($($this:ty => $next:ty),+ $(,)?) => {
        $(
            impl_next_checked!($this => $next);
        )+
    };
}

impl_next_checked! {
    u8  => u16,
    u16 => u32,
    u32 => u64,
    u64 => u128,
    i8  => i16,
    i16 => i32,
    i32 => i64,
    i64 => i128,
}

// ----------------------------------- fixed -----------------------------------

/// Widening a fixed-point value keeps its exponent; only the representation
/// grows.
impl<U, const E: i32> NextNumber for Fixed<U, E>
where
    Int<U>: NextNumber,
    <Int<U> as NextNumber>::Next: Inner,
{
    type Next = Fixed<<<Int<U> as NextNumber>::Next as Inner>::U, E>;

    fn into_next(self) -> Self::Next {
        Fixed::from_bits(Int::new(self.0.into_next().into_inner()))
    }
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {
        crate::{Int, NextNumber, NumberConst, int_test, test_utils::bt},
        bnum::cast::As,
        bnum::types::{I512, U512},
    };

    int_test!( into_next_preserves_value
        inputs = {
            u128 = [crate::Uint128::MAX, crate::Uint256::new(bnum::types::U256::from(u128::MAX))]
            u256 = [crate::Uint256::MAX, crate::Uint512::new(bnum::types::U256::MAX.as_::<U512>())]
            i128 = [crate::Int128::MIN, crate::Int256::new(bnum::types::I256::from(i128::MIN))]
            i256 = [crate::Int256::MIN, crate::Int512::new(bnum::types::I256::MIN.as_::<I512>())]
        }
        method = |_0: Int<_>, input, expect| {
            assert_eq!(bt(_0, input).into_next(), expect);
        }
    );
}
