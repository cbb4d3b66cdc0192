use core::str::FromStr;

/**
A type that can be converted from a single command-line argument.

Conversion either succeeds or it doesn't: a value that fails to convert is
treated by the fields exactly like a value that never arrived, and surfaces
later as a "missing or invalid" error naming the field. There is deliberately
no error payload here.

Most types should implement [`ParsedValue`] instead, which derives [`Value`]
from a [`FromStr`] implementation. Closed sets of labels (enums) can use
`#[derive(Value)]`.
*/
pub trait Value: Sized {
    /// Convert a raw argument, returning [`None`] if it isn't valid for this
    /// type.
    fn from_arg(argument: &str) -> Option<Self>;
}

/// For types with a [`FromStr`] implementation, [`ParsedValue`] automatically
/// gives them a [`Value`] implementation, so that they can be used as the
/// value type of any field.
pub trait ParsedValue: FromStr {}

impl<T> Value for T
where
    T: ParsedValue,
{
    #[inline]
    fn from_arg(argument: &str) -> Option<Self> {
        argument.parse().ok()
    }
}
