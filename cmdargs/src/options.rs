/*!
The first parsing pass: scanning the command line, routing option values to
their fields, and collecting everything else as operand values.
*/

use std::collections::HashMap;

use cmdargs_parser::{ArgumentsParser, Visitor};

use crate::errors::ParseError;
use crate::fields::OptionField;
use crate::state::FieldParser;

/**
Dispatches scanned arguments to option fields.

At most one option is *active* at a time: the most recently named one, as
long as it can still take values. A plain value goes to the active option if
there is one, and becomes an operand value otherwise. Naming another option,
a lone `-`, or the `--` terminator closes the active option.
*/
pub struct Dispatcher<'a, 'arg> {
    parsers: Vec<FieldParser<'a, dyn OptionField + 'a>>,
    lookup: HashMap<String, usize>,
    active: Option<usize>,
    operand_values: Vec<&'arg str>,
}

impl<'a, 'arg> Dispatcher<'a, 'arg> {
    /// Create a dispatcher over classified options. Every long and short
    /// name is looked up in the same table.
    #[must_use]
    pub fn new(options: Vec<&'a mut dyn OptionField>) -> Self {
        let mut lookup = HashMap::new();

        for (index, option) in options.iter().enumerate() {
            let names = option.names();
            for name in [&names.long, &names.short].into_iter().flatten() {
                lookup.insert(name.clone(), index);
            }
        }

        Self {
            parsers: options.into_iter().map(FieldParser::new).collect(),
            lookup,
            active: None,
            operand_values: Vec::new(),
        }
    }

    fn close_active(&mut self) {
        if let Some(index) = self.active.take() {
            self.parsers[index].finish();
        }
    }

    /// Close the active option and make `name` the active one.
    fn activate(&mut self, name: &str) -> Result<(), ParseError> {
        self.close_active();

        let index = *self
            .lookup
            .get(name)
            .ok_or_else(|| ParseError::InvalidOption(name.to_owned()))?;

        self.active = Some(index);
        Ok(())
    }

    /// Feed a value to the active option, closing it once it's full.
    fn feed_active(&mut self, index: usize, argument: &str) {
        let parser = &mut self.parsers[index];
        parser.parse_value(argument);

        if !parser.can_take_value() {
            self.close_active();
        }
    }

    fn activate_with_value(&mut self, name: &str, argument: &str) -> Result<(), ParseError> {
        self.activate(name)?;

        if let Some(index) = self.active {
            self.feed_active(index, argument);
        }

        Ok(())
    }

    /**
    Scan every argument, then close the active option and validate all of
    them in declaration order. Returns the operand values in the order they
    were found.
    */
    pub fn run<I>(mut self, args: I) -> Result<Vec<&'arg str>, ParseError>
    where
        I: IntoIterator<Item = &'arg str>,
    {
        let mut parser = ArgumentsParser::new(args);

        while let Some(result) = parser.next_arg(&mut self) {
            result?;
        }

        self.close_active();

        for parser in &self.parsers {
            parser
                .validate()
                .map_err(|expected| ParseError::MissingOption {
                    name: parser.field().names().display_name().to_owned(),
                    expected,
                })?;
        }

        Ok(self.operand_values)
    }
}

impl<'arg> Visitor<'arg> for &mut Dispatcher<'_, 'arg> {
    type Value = Result<(), ParseError>;

    fn visit_value(self, argument: &'arg str) -> Self::Value {
        match self.active {
            Some(index) => self.feed_active(index, argument),
            None => self.operand_values.push(argument),
        }

        Ok(())
    }

    fn visit_short(self, option: &'arg str) -> Self::Value {
        self.activate(option)
    }

    fn visit_short_with_value(self, option: &'arg str, argument: &'arg str) -> Self::Value {
        self.activate_with_value(option, argument)
    }

    fn visit_long(self, option: &'arg str) -> Self::Value {
        self.activate(option)
    }

    fn visit_long_with_value(self, option: &'arg str, argument: &'arg str) -> Self::Value {
        self.activate_with_value(option, argument)
    }

    fn visit_dash(self) -> Self::Value {
        self.close_active();
        Ok(())
    }

    fn visit_terminator(self) -> Self::Value {
        self.close_active();
        Ok(())
    }

    fn visit_escaped(self, argument: &'arg str) -> Self::Value {
        self.operand_values.push(argument);
        Ok(())
    }
}
