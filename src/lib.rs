//! Scaled binary fixed-point arithmetic.
//!
//! The crate is built around three surfaces:
//!
//! - [`Fixed<U, E>`](Fixed), a fixed-point number whose representation `U`
//!   and binary exponent `E` live in the type, wrapping the generic integer
//!   [`Int<U>`](Int) the same way the plain integer aliases do;
//! - the representation adapters [`Checked<U>`](Checked) (every operation
//!   validated against the wrapped range) and [`Elastic<U>`](Elastic) (the
//!   exact number of significant bits tracked per operation);
//! - the result-type resolution engine: [`Repr`], [`Layout`], and
//!   [`resolve`], the pure functions deciding the representation, scale,
//!   and overflow behavior of every operation's result, plus the dynamic
//!   [`Value`] type that carries them out at runtime.

mod checked;
mod conversions;
mod elastic;
mod error;
mod fixed;
mod inner;
mod int;
mod integer;
mod is_zero;
mod next;
mod number;
mod number_const;
mod prev;
mod repr;
mod resolve;
mod sign;
mod value;
mod wrapping;

pub use {
    checked::*, conversions::*, elastic::*, error::*, fixed::*, inner::*, int::*, integer::*,
    is_zero::*, next::*, number::*, number_const::*, prev::*, repr::*, resolve::*, sign::*,
    value::*, wrapping::*,
};

// ---------------------------------- testing ----------------------------------

#[cfg(test)]
pub(crate) mod test_utils;
