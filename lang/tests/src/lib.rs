pub use pretty_assertions;

/// Assert each listed flag of a dialect, e.g.
/// `assert_flags!(DOTTY, { allow_or_types: true, allow_xml_literals: false })`.
#[macro_export]
macro_rules! assert_flags {
    ($dialect:expr, { $($flag:ident : $value:expr),* $(,)? }) => {{
        let dialect: &parlance_dialects::Dialect = &$dialect;
        $(
            $crate::pretty_assertions::assert_eq!(
                dialect.$flag,
                $value,
                "flag `{}` of {}",
                stringify!($flag),
                dialect
            );
        )*
    }};
}

/// Assert that two dialects agree on every flag except the listed ones.
#[macro_export]
macro_rules! assert_same_except {
    ($left:expr, $right:expr, [$($flag:ident),* $(,)?]) => {{
        let left: &parlance_dialects::Dialect = &$left;
        let right: &parlance_dialects::Dialect = &$right;
        let skip: &[&str] = &[$(stringify!($flag)),*];
        for ((name, l), (_, r)) in left.fields().into_iter().zip(right.fields()) {
            if !skip.contains(&name) {
                $crate::pretty_assertions::assert_eq!(l, r, "flag `{}` of {} vs {}", name, left, right);
            }
        }
    }};
}
