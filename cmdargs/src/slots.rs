/*!
The field slots a consumer declares in an [`Arguments`][crate::Arguments]
record.

Each cardinality is one generic type, parameterized over the converted value
type `T` (any [`Value`], defaulting to [`String`]) and the position `P`
([`OptionNames`] or [`OperandName`]). The aliases at the bottom of this
module are the names consumers normally write:

```
use cmdargs::slots::{Flag, MultipleOperand, OptionalOption, VariadicOperand};

let verbose = Flag::new().short("v").usage("Print more output");
let jobs = OptionalOption::<u32>::new().long("jobs");
let inputs = VariadicOperand::<String>::new().min(1);
let pair = MultipleOperand::<String>::new(2).name("pair");
# let _ = (verbose, jobs, inputs, pair);
```
*/

use crate::fields::{Cardinality, OperandName, OptionNames, Placed, Position, Slot};
use crate::parameter::Value;

/// A boolean option, set by its presence on the command line.
///
/// `-v` sets it to `true`. An explicit value sets it to whether that value
/// is exactly `true`, so `-v=false`, `-v=` and `-v no` all leave it `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flag {
    pub value: bool,
    names: OptionNames,
    usage: Option<String>,
}

impl Flag {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.names.long = Some(long.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.names.short = Some(short.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }
}

impl Slot for Flag {
    #[inline]
    fn cardinality(&self) -> Cardinality {
        Cardinality::Flag
    }

    #[inline]
    fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    #[inline]
    fn store(&mut self, argument: &str) {
        self.value = argument == "true";
    }

    #[inline]
    fn held(&self) -> usize {
        usize::from(self.value)
    }
}

impl Placed for Flag {
    type Position = OptionNames;

    #[inline]
    fn position(&self) -> &OptionNames {
        &self.names
    }

    #[inline]
    fn position_mut(&mut self) -> &mut OptionNames {
        &mut self.names
    }
}

/// A field that needs exactly one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Required<T = String, P = OptionNames> {
    pub value: Option<T>,
    position: P,
    usage: Option<String>,
}

impl<T, P: Position> Required<T, P> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: None,
            position: P::default(),
            usage: None,
        }
    }
}

impl<T: Value, P> Slot for Required<T, P> {
    #[inline]
    fn cardinality(&self) -> Cardinality {
        Cardinality::Required
    }

    #[inline]
    fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    #[inline]
    fn store(&mut self, argument: &str) {
        self.value = T::from_arg(argument);
    }

    #[inline]
    fn held(&self) -> usize {
        usize::from(self.value.is_some())
    }
}

/// A field that takes zero or one value. A value that fails to convert
/// leaves it empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optional<T = String, P = OptionNames> {
    pub value: Option<T>,
    position: P,
    usage: Option<String>,
}

impl<T, P: Position> Optional<T, P> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: None,
            position: P::default(),
            usage: None,
        }
    }
}

impl<T: Value, P> Slot for Optional<T, P> {
    #[inline]
    fn cardinality(&self) -> Cardinality {
        Cardinality::Optional
    }

    #[inline]
    fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    #[inline]
    fn store(&mut self, argument: &str) {
        self.value = T::from_arg(argument);
    }

    #[inline]
    fn held(&self) -> usize {
        usize::from(self.value.is_some())
    }
}

/// A field that takes zero or one value, and otherwise keeps the default it
/// was created with. A value that fails to convert also keeps the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaulted<T = String, P = OptionNames> {
    pub value: T,
    position: P,
    usage: Option<String>,
}

impl<T, P: Position> Defaulted<T, P> {
    #[inline]
    #[must_use]
    pub fn new(default: T) -> Self {
        Self {
            value: default,
            position: P::default(),
            usage: None,
        }
    }
}

impl<T: Value, P> Slot for Defaulted<T, P> {
    #[inline]
    fn cardinality(&self) -> Cardinality {
        Cardinality::Optional
    }

    #[inline]
    fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    #[inline]
    fn store(&mut self, argument: &str) {
        if let Some(value) = T::from_arg(argument) {
            self.value = value;
        }
    }

    #[inline]
    fn held(&self) -> usize {
        1
    }
}

/// A field that takes exactly `count` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiple<T = String, P = OptionNames> {
    pub value: Vec<T>,
    count: usize,
    position: P,
    usage: Option<String>,
}

impl<T, P: Position> Multiple<T, P> {
    #[inline]
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            value: Vec::with_capacity(count),
            count,
            position: P::default(),
            usage: None,
        }
    }
}

impl<T: Value, P> Slot for Multiple<T, P> {
    #[inline]
    fn cardinality(&self) -> Cardinality {
        Cardinality::Fixed(self.count)
    }

    #[inline]
    fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    #[inline]
    fn store(&mut self, argument: &str) {
        self.value.extend(T::from_arg(argument));
    }

    #[inline]
    fn held(&self) -> usize {
        self.value.len()
    }
}

/// A field that takes any number of values, optionally bounded by
/// [`min`][Variadic::min] and [`max`][Variadic::max]. A `max` of `0` is the
/// same as no `max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variadic<T = String, P = OptionNames> {
    pub value: Vec<T>,
    min: Option<usize>,
    max: Option<usize>,
    position: P,
    usage: Option<String>,
}

impl<T, P: Position> Variadic<T, P> {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: Vec::new(),
            min: None,
            max: None,
            position: P::default(),
            usage: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    #[inline]
    #[must_use]
    pub fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

impl<T: Value, P> Slot for Variadic<T, P> {
    #[inline]
    fn cardinality(&self) -> Cardinality {
        Cardinality::Variadic {
            min: self.min,
            max: self.max,
        }
    }

    #[inline]
    fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    #[inline]
    fn store(&mut self, argument: &str) {
        self.value.extend(T::from_arg(argument));
    }

    #[inline]
    fn held(&self) -> usize {
        self.value.len()
    }
}

/// The builder methods and trait plumbing that every generic slot shares:
/// `usage`, `long`/`short` for options, `name` for operands, and [`Placed`].
macro_rules! positioned {
    ($($Kind:ident),* $(,)?) => {$(
        impl<T, P> $Kind<T, P> {
            #[inline]
            #[must_use]
            pub fn usage(mut self, usage: impl Into<String>) -> Self {
                self.usage = Some(usage.into());
                self
            }
        }

        impl<T> $Kind<T, OptionNames> {
            #[inline]
            #[must_use]
            pub fn long(mut self, long: impl Into<String>) -> Self {
                self.position.long = Some(long.into());
                self
            }

            #[inline]
            #[must_use]
            pub fn short(mut self, short: impl Into<String>) -> Self {
                self.position.short = Some(short.into());
                self
            }
        }

        impl<T> $Kind<T, OperandName> {
            #[inline]
            #[must_use]
            pub fn name(mut self, name: impl Into<String>) -> Self {
                self.position.name = Some(name.into());
                self
            }
        }

        impl<T, P: Position> Placed for $Kind<T, P> {
            type Position = P;

            #[inline]
            fn position(&self) -> &P {
                &self.position
            }

            #[inline]
            fn position_mut(&mut self) -> &mut P {
                &mut self.position
            }
        }
    )*};
}

positioned! { Required, Optional, Defaulted, Multiple, Variadic }

impl<T, P: Position> Default for Required<T, P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Position> Default for Optional<T, P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, P: Position> Default for Defaulted<T, P> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, P: Position> Default for Variadic<T, P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

pub type RequiredOption<T = String> = Required<T, OptionNames>;
pub type RequiredOperand<T = String> = Required<T, OperandName>;

pub type OptionalOption<T = String> = Optional<T, OptionNames>;
pub type OptionalOperand<T = String> = Optional<T, OperandName>;

pub type DefaultedOption<T = String> = Defaulted<T, OptionNames>;
pub type DefaultedOperand<T = String> = Defaulted<T, OperandName>;

pub type MultipleOption<T = String> = Multiple<T, OptionNames>;
pub type MultipleOperand<T = String> = Multiple<T, OperandName>;

pub type VariadicOption<T = String> = Variadic<T, OptionNames>;
pub type VariadicOperand<T = String> = Variadic<T, OperandName>;
