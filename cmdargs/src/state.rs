use crate::fields::{Cardinality, Expected, Slot};

/**
The parsing state of a single field, for the duration of one parse.

A `FieldParser` never looks at the command line itself. Whoever owns it (the
option dispatcher or the operand allocator) feeds it values one at a time
with [`parse_value`][FieldParser::parse_value], asking
[`can_take_value`][FieldParser::can_take_value] first, and calls
[`finish`][FieldParser::finish] and [`validate`][FieldParser::validate] once
it's done.

Every value fed counts against the field's cardinality, whether or not it
converted successfully.
*/
pub struct FieldParser<'a, F: ?Sized> {
    field: &'a mut F,
    cardinality: Cardinality,
    taken: usize,
}

impl<'a, F> FieldParser<'a, F>
where
    F: Slot + ?Sized,
{
    #[inline]
    #[must_use]
    pub fn new(field: &'a mut F) -> Self {
        Self {
            cardinality: field.cardinality(),
            field,
            taken: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn field(&self) -> &F {
        self.field
    }

    #[inline]
    #[must_use]
    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    #[must_use]
    pub fn can_take_value(&self) -> bool {
        match self.cardinality {
            Cardinality::Flag | Cardinality::Required | Cardinality::Optional => self.taken == 0,
            Cardinality::Fixed(count) => self.taken < count,
            Cardinality::Variadic { max: None | Some(0), .. } => true,
            Cardinality::Variadic { max: Some(max), .. } => self.taken < max,
        }
    }

    /// Feed one value to the field. It's stored (or not, if it fails to
    /// convert) and counted either way.
    pub fn parse_value(&mut self, argument: &str) {
        self.field.store(argument);
        self.taken += 1;
    }

    /// Close the field. A flag that was named without a value is set here.
    pub fn finish(&mut self) {
        if self.cardinality == Cardinality::Flag && self.taken == 0 {
            self.parse_value("true");
        }
    }

    /// Check that the field holds what its cardinality requires.
    pub fn validate(&self) -> Result<(), Expected> {
        let required = match self.cardinality {
            Cardinality::Flag | Cardinality::Optional => return Ok(()),
            Cardinality::Required => 1,
            Cardinality::Fixed(count) => count,
            Cardinality::Variadic { min, .. } => min.unwrap_or(0),
        };

        match self.field.held() >= required {
            true => Ok(()),
            false => Err(self.cardinality.expected().unwrap_or(Expected::Value)),
        }
    }
}
