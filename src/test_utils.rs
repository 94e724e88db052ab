/// `derive_type`
///
/// Allow compiler to derive the type of a variable, which is necessary for
/// the test functions.
pub(crate) fn dt<T>(_: T, _: T) {}

/// `derive_types`
///
/// Allow compiler to derive the types of multiple variables
#[macro_export(local_inner_macros)]
macro_rules! dts {
    ($u: expr, $($p:expr),*) => {
        $($crate::test_utils::dt($u, $p);)*
    };
}

/// `built_type`
///
/// Allow compiler to derive the type of a variable, and return right.
pub(crate) fn bt<T>(_: T, ret: T) -> T {
    ret
}

// ------------------------------------ int ------------------------------------

/// Macro for unit tests over the integer flavors.
///
/// [`test_case::test_case`] cannot be used here because the argument types
/// differ per flavor, and `Int<U>` is a different type for each case. The
/// macro passes the flavor's `Int::ZERO` as the first callback parameter so
/// the compiler can derive the type (see [`dt`], [`dts!`] and [`bt`]).
#[macro_export(local_inner_macros)]
macro_rules! int_test {
    // Internal: no flavors left to emit.
    (@munch $name:ident, $test_fn:expr, $attrs:tt,) => {};
    // Internal: emit one flavor's test fn, then recurse on the rest. The attrs
    // are threaded through as a single bracketed token tree so the `#[$meta]`
    // repetition never has to share a repetition depth with the flavor list.
    (@munch $name:ident, $test_fn:expr, [$(#[$meta:meta])*],
        ($suffix:ident, $ty:ty, [$($p:expr),*]) $($rest:tt)*
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _ $suffix>]() {
                ($test_fn)(<$ty as $crate::NumberConst>::ZERO, $($p),*);
            }
        }
        int_test!(@munch $name, $test_fn, [$(#[$meta])*], $($rest)*);
    };
    // No args.
    (
        $name:ident
        $(attrs = $(#[$meta:meta])* $(,)?)?
        method = $test_fn:expr
    ) => {
        int_test!($name
            inputs = {
                u128 = []
                u256 = []
                i128 = []
                i256 = []
            }
            $(attrs = $(#[$meta])*)?
            method = $test_fn
        );
    };
    // Multiple optional tests with attrs.
    (
        $name:ident
        inputs = {
            $(u128 = [$($pu128:expr),* $(,)?] $(,)?)?
            $(u256 = [$($pu256:expr),* $(,)?] $(,)?)?
            $(i128 = [$($pi128:expr),* $(,)?] $(,)?)?
            $(i256 = [$($pi256:expr),* $(,)?] $(,)?)?
        } $(,)?
        attrs = $(#[$meta:meta])* $(,)?
        method = $test_fn:expr
    ) => {
        int_test!(@munch $name, $test_fn, [$(#[$meta])*],
            $( (u128, $crate::Uint128, [$($pu128),*]) )?
            $( (u256, $crate::Uint256, [$($pu256),*]) )?
            $( (i128, $crate::Int128, [$($pi128),*]) )?
            $( (i256, $crate::Int256, [$($pi256),*]) )?
        );
    };
    // Multiple optional tests without attrs.
    (
        $name:ident
        inputs = {
            $(u128 = [$($pu128:expr),* $(,)?] $(,)?)?
            $(u256 = [$($pu256:expr),* $(,)?] $(,)?)?
            $(i128 = [$($pi128:expr),* $(,)?] $(,)?)?
            $(i256 = [$($pi256:expr),* $(,)?] $(,)?)?
        } $(,)?
        method = $test_fn:expr
    ) => {
        int_test!(
            $name
            inputs = {
                $(u128 = [$($pu128),*])?
                $(u256 = [$($pu256),*])?
                $(i128 = [$($pi128),*])?
                $(i256 = [$($pi256),*])?
            }
            attrs =
            method = $test_fn
        );
    };
    // Multiple optional passing/failing tests.
    (
        $name:ident
        inputs = {
            $(u128 = {
                passing: [$($pu128:expr),* $(,)?] $(,)?
                $(failing: [$($fu128:expr),* $(,)?])? $(,)?
            } $(,)? )?
            $(u256 = {
                passing: [$($pu256:expr),* $(,)?] $(,)?
                $(failing: [$($fu256:expr),* $(,)?])? $(,)?
            } $(,)? )?
            $(i128 = {
                passing: [$($pi128:expr),* $(,)?] $(,)?
                $(failing: [$($fi128:expr),* $(,)?])? $(,)?
            } $(,)? )?
            $(i256 = {
                passing: [$($pi256:expr),* $(,)?] $(,)?
                $(failing: [$($fi256:expr),* $(,)?])? $(,)?
            } $(,)? )?
        } $(,)?
        $(attrs = $(#[$meta:meta])*)? $(,)?
        method = $test_fn:expr
    ) => {
        int_test!(
            $name
            inputs = {
                $(u128 = [[$($pu128),*] $(, [$($fu128),*])?])?
                $(u256 = [[$($pu256),*] $(, [$($fu256),*])?])?
                $(i128 = [[$($pi128),*] $(, [$($fi128),*])?])?
                $(i256 = [[$($pi256),*] $(, [$($fi256),*])?])?
            }
            attrs = $($(#[$meta])*)?
            method = $test_fn
        );
    };
}

// ----------------------------------- fixed -----------------------------------

/// The fixed-point counterpart of [`int_test!`]: fans the callback over the
/// four wide fixed-point flavors at sixteen fractional bits.
#[macro_export(local_inner_macros)]
macro_rules! fixed_test {
    (
        $name:ident
        $(attrs = $(#[$meta:meta])* $(,)?)?
        method = $test_fn:expr
    ) => {
        paste::paste! {
            $($(#[$meta])*)?
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _ufix64>]() {
                ($test_fn)(<$crate::Fixed<u64, { -16 }>>::ZERO);
            }

            $($(#[$meta])*)?
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _ufix128>]() {
                ($test_fn)(<$crate::Fixed<u128, { -16 }>>::ZERO);
            }

            $($(#[$meta])*)?
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _fix64>]() {
                ($test_fn)(<$crate::Fixed<i64, { -16 }>>::ZERO);
            }

            $($(#[$meta])*)?
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _fix128>]() {
                ($test_fn)(<$crate::Fixed<i128, { -16 }>>::ZERO);
            }
        }
    };
}
