#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "assertion failed: {val:?} does not match {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables)]
            $pat => ::core::panic!(
                "assertion failed: {val:?} does not satisfy {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "assertion failed: {val:?} does not match {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}
