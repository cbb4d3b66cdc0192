/*!
The type-erased view of a declared field that classification and parsing
work with.

Every slot type in [`slots`][crate::slots] implements [`Slot`], the value
half of a field, and [`Placed`], which ties it to a [`Position`]: either
[`OptionNames`] (a `-short`/`--long` option) or [`OperandName`] (a positional
operand). Blanket implementations then make it an [`OptionField`] or an
[`OperandField`], and let it [`Declare`] itself as the matching [`Field`]
variant.
*/

use core::fmt::{self, Display};

/// How many value tokens a field takes. This is a closed set; the engine
/// matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// No value tokens; a boolean toggled by presence. Option-only.
    Flag,

    /// Exactly one value
    Required,

    /// Zero or one value
    Optional,

    /// Exactly `n` values
    Fixed(usize),

    /// Between `min` and `max` values. A `max` of [`None`] or `0` is
    /// unbounded.
    Variadic {
        min: Option<usize>,
        max: Option<usize>,
    },
}

impl Cardinality {
    /// The number of values a field of this cardinality reserves from the
    /// end of the operand list, if it is eligible to do so.
    #[inline]
    #[must_use]
    pub const fn trailing_count(&self) -> Option<usize> {
        match *self {
            Cardinality::Required => Some(1),
            Cardinality::Fixed(n) if n > 0 => Some(n),
            _ => None,
        }
    }

    /// What a field of this cardinality needs in order to be satisfied, if
    /// it can be unsatisfied at all.
    #[inline]
    #[must_use]
    pub const fn expected(&self) -> Option<Expected> {
        match *self {
            Cardinality::Required => Some(Expected::Value),
            Cardinality::Fixed(n) => Some(Expected::Exactly(n)),
            Cardinality::Variadic { min: Some(min), .. } => Some(Expected::AtLeast(min)),
            Cardinality::Flag | Cardinality::Optional | Cardinality::Variadic { .. } => None,
        }
    }
}

/// The requirement a field failed to meet, carried by the "missing" parse
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A single value
    Value,

    /// Exactly this many values
    Exactly(usize),

    /// At least this many values
    AtLeast(usize),
}

impl Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Expected::Value => write!(f, "value"),
            Expected::Exactly(n) => write!(f, "values (need {n})"),
            Expected::AtLeast(n) => write!(f, "values (at least {n})"),
        }
    }
}

/**
The value half of a field: what it holds and how it takes values.

Implementations are driven one token at a time by the parser; a slot never
looks at other tokens and never decides when it's finished.
*/
pub trait Slot {
    fn cardinality(&self) -> Cardinality;

    /// Free-form description used in usage messages
    fn usage(&self) -> Option<&str>;

    /// Convert `argument` and store it. What happens to the held value when
    /// the conversion fails depends on the slot.
    fn store(&mut self, argument: &str);

    /// The number of converted values currently held
    fn held(&self) -> usize;
}

/// The `-short` and `--long` names of an option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionNames {
    pub long: Option<String>,
    pub short: Option<String>,
}

impl OptionNames {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.long.is_none() && self.short.is_none()
    }

    /// The name used to refer to this option in error messages: the long
    /// name if there is one, else the short name.
    #[inline]
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.long
            .as_deref()
            .or(self.short.as_deref())
            .unwrap_or_default()
    }
}

/// The name of a positional operand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandName {
    pub name: Option<String>,
}

/// A field that is named on the command line with `-short` or `--long`
pub trait OptionField: Slot {
    fn names(&self) -> &OptionNames;
    fn names_mut(&mut self) -> &mut OptionNames;
}

/// A field that takes its values by position
pub trait OperandField: Slot {
    fn name(&self) -> Option<&str>;
    fn name_mut(&mut self) -> &mut Option<String>;
}

/// A handle to one declared field, by position kind.
pub enum Field<'a> {
    Option(&'a mut dyn OptionField),
    Operand(&'a mut dyn OperandField),
}

/// A field as listed by [`Arguments::fields`][crate::Arguments::fields]: the
/// handle, plus the name it was declared under (used as the default name).
pub struct Declared<'a> {
    pub name: Option<&'static str>,
    pub field: Field<'a>,
}

impl<'a> Declared<'a> {
    #[inline]
    #[must_use]
    pub fn new(name: Option<&'static str>, field: Field<'a>) -> Self {
        Self { name, field }
    }

    #[inline]
    #[must_use]
    pub fn named(name: &'static str, field: Field<'a>) -> Self {
        Self::new(Some(name), field)
    }

    #[inline]
    #[must_use]
    pub fn anonymous(field: Field<'a>) -> Self {
        Self::new(None, field)
    }
}

/// Where a slot sits on the command line. Implemented by [`OptionNames`] and
/// [`OperandName`].
pub trait Position: Default {
    #[doc(hidden)]
    fn field<'a, S>(slot: &'a mut S) -> Field<'a>
    where
        S: Slot + Placed<Position = Self> + 'a;
}

impl Position for OptionNames {
    #[inline]
    fn field<'a, S>(slot: &'a mut S) -> Field<'a>
    where
        S: Slot + Placed<Position = Self> + 'a,
    {
        Field::Option(slot)
    }
}

impl Position for OperandName {
    #[inline]
    fn field<'a, S>(slot: &'a mut S) -> Field<'a>
    where
        S: Slot + Placed<Position = Self> + 'a,
    {
        Field::Operand(slot)
    }
}

/// A slot that knows its [`Position`].
pub trait Placed {
    type Position: Position;

    fn position(&self) -> &Self::Position;
    fn position_mut(&mut self) -> &mut Self::Position;
}

impl<S> OptionField for S
where
    S: Slot + Placed<Position = OptionNames>,
{
    #[inline]
    fn names(&self) -> &OptionNames {
        self.position()
    }

    #[inline]
    fn names_mut(&mut self) -> &mut OptionNames {
        self.position_mut()
    }
}

impl<S> OperandField for S
where
    S: Slot + Placed<Position = OperandName>,
{
    #[inline]
    fn name(&self) -> Option<&str> {
        self.position().name.as_deref()
    }

    #[inline]
    fn name_mut(&mut self) -> &mut Option<String> {
        &mut self.position_mut().name
    }
}

/// Anything that can be listed as a field of an
/// [`Arguments`][crate::Arguments] record.
pub trait Declare {
    fn declare(&mut self) -> Field<'_>;
}

impl<S> Declare for S
where
    S: Slot + Placed,
{
    #[inline]
    fn declare(&mut self) -> Field<'_> {
        S::Position::field(self)
    }
}
