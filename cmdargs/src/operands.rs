/*!
The second parsing pass: distributing the operand values collected by the
[`Dispatcher`][crate::options::Dispatcher] across the operand fields.
*/

use crate::errors::ParseError;
use crate::fields::{Expected, OperandField};
use crate::state::FieldParser;

/**
Allocates operand values to operand fields, left to right.

Values are handed out non-greedily in declaration order, with one exception:
if there is more than one operand and the last one takes a fixed number of
values (it's required, or takes exactly `n > 0` values), those values are
reserved from the *end* of the list before anything else is allocated. This
is what allows `cp`-style signatures like `source... dest`.
*/
pub struct Allocator<'a> {
    parsers: Vec<FieldParser<'a, dyn OperandField + 'a>>,

    /// Operands before this index have been handed at least one value
    next: usize,

    /// Operands at or past this index aren't available to the main pass
    limit: usize,

    active: Option<usize>,
}

impl<'a> Allocator<'a> {
    #[must_use]
    pub fn new(operands: Vec<&'a mut dyn OperandField>) -> Self {
        let parsers: Vec<_> = operands.into_iter().map(FieldParser::new).collect();

        Self {
            next: 0,
            limit: parsers.len(),
            parsers,
            active: None,
        }
    }

    fn missing(parser: &FieldParser<'a, dyn OperandField + 'a>, expected: Expected) -> ParseError {
        ParseError::MissingOperand {
            name: parser.field().name().unwrap_or_default().to_owned(),
            expected,
        }
    }

    /// Feed the trailing values to the last operand, if it reserves any,
    /// returning the values left over for everyone else.
    fn reserve_trailing<'v, 'arg>(
        &mut self,
        values: &'v [&'arg str],
    ) -> Result<&'v [&'arg str], ParseError> {
        if self.parsers.len() < 2 {
            return Ok(values);
        }

        let Some(last) = self.parsers.last_mut() else {
            return Ok(values);
        };

        let Some(count) = last.cardinality().trailing_count() else {
            return Ok(values);
        };

        let Some(split) = values.len().checked_sub(count) else {
            let expected = last.cardinality().expected().unwrap_or(Expected::Value);
            return Err(Self::missing(last, expected));
        };

        let (head, tail) = values.split_at(split);
        tail.iter().for_each(|value| last.parse_value(value));
        last.finish();
        self.limit -= 1;

        Ok(head)
    }

    fn close_active(&mut self) {
        if let Some(index) = self.active.take() {
            self.parsers[index].finish();
        }
    }

    fn allocate_value(&mut self, value: &str) -> Result<(), ParseError> {
        if let Some(index) = self.active {
            let parser = &mut self.parsers[index];
            parser.parse_value(value);

            if !parser.can_take_value() {
                self.close_active();
            }

            return Ok(());
        }

        if self.next >= self.limit {
            return Err(ParseError::InvalidOperand(value.to_owned()));
        }

        let index = self.next;
        self.next += 1;

        let parser = &mut self.parsers[index];
        parser.parse_value(value);

        match parser.can_take_value() {
            true => self.active = Some(index),
            false => parser.finish(),
        }

        Ok(())
    }

    /// Allocate every value, then validate every operand in declaration
    /// order.
    pub fn run(mut self, values: &[&str]) -> Result<(), ParseError> {
        match (self.parsers.is_empty(), values.first()) {
            (true, None) => return Ok(()),
            (true, Some(value)) => return Err(ParseError::InvalidOperand((*value).to_owned())),
            (false, _) => {}
        }

        // With nothing to allocate, the first operand that needs a value is
        // the one to report.
        if !values.is_empty() {
            let values = self.reserve_trailing(values)?;

            for value in values {
                self.allocate_value(value)?;
            }

            self.close_active();
        }

        for parser in &self.parsers {
            parser
                .validate()
                .map_err(|expected| Self::missing(parser, expected))?;
        }

        Ok(())
    }
}
