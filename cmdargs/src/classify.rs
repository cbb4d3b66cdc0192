/*!
Sorting declared fields into options and operands, and settling their names.
*/

use std::collections::HashSet;

use crate::errors::TypeError;
use crate::fields::{Declared, Field, OperandField, OptionField};

/// The fields of a record, split by position kind, in declaration order.
/// Every option has at least one name, and every operand has a name.
pub struct Classified<'a> {
    pub options: Vec<&'a mut dyn OptionField>,
    pub operands: Vec<&'a mut dyn OperandField>,
}

/// Names claimed so far. Long and short option names share one namespace.
#[derive(Debug, Default)]
struct Known {
    options: HashSet<String>,
    operands: HashSet<String>,
}

impl Known {
    fn claim_option(&mut self, name: &str) -> Result<(), TypeError> {
        match self.options.insert(name.to_owned()) {
            true => Ok(()),
            false => Err(TypeError::DuplicatedOptionName(name.to_owned())),
        }
    }

    fn claim_operand(&mut self, name: &str) -> Result<(), TypeError> {
        match self.operands.insert(name.to_owned()) {
            true => Ok(()),
            false => Err(TypeError::DuplicatedOperandName(name.to_owned())),
        }
    }

    fn register_option(&mut self, option: &dyn OptionField) -> Result<(), TypeError> {
        let names = option.names();

        if let Some(long) = names.long.as_deref() {
            self.claim_option(long)?;
        }

        if let Some(short) = names.short.as_deref() {
            if !is_valid_short(short) {
                return Err(TypeError::InvalidShortOptionName(short.to_owned()));
            }

            self.claim_option(short)?;
        }

        Ok(())
    }

    fn register_operand(&mut self, operand: &dyn OperandField) -> Result<(), TypeError> {
        match operand.name() {
            Some(name) => self.claim_operand(name),
            None => Ok(()),
        }
    }

    /// An unclaimed, non-empty declared name, claimed as an option name.
    fn adopt_option_name(&mut self, declared: Option<&str>) -> Option<String> {
        let name = declared.filter(|name| !name.is_empty())?;
        self.options
            .insert(name.to_owned())
            .then(|| name.to_owned())
    }

    fn adopt_operand_name(&mut self, declared: Option<&str>) -> Option<String> {
        let name = declared.filter(|name| !name.is_empty())?;
        self.operands
            .insert(name.to_owned())
            .then(|| name.to_owned())
    }
}

/// An empty name can't be written on a command line, so it counts as no
/// name at all.
fn unset_empty(name: &mut Option<String>) {
    if name.as_deref() == Some("") {
        *name = None;
    }
}

fn is_valid_short(name: &str) -> bool {
    let mut chars = name.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
}

/**
Classify the declared fields of a record.

Explicit names are checked first, in declaration order, so the first bad
name in declaration order is the one reported. Only then are fields without
any name given their declared name: as a short name if it is a single
character, and as a long name otherwise. An explicitly empty name is the same
as no name. A declared name that is already
taken leaves the field nameless, which is an error.
*/
pub fn classify(fields: Vec<Declared<'_>>) -> Result<Classified<'_>, TypeError> {
    let mut known = Known::default();
    let mut options = Vec::new();
    let mut operands = Vec::new();

    for Declared { name, field } in fields {
        match field {
            Field::Option(option) => {
                let names = option.names_mut();
                unset_empty(&mut names.long);
                unset_empty(&mut names.short);

                known.register_option(option)?;
                options.push((name, option));
            }
            Field::Operand(operand) => {
                unset_empty(operand.name_mut());

                known.register_operand(operand)?;
                operands.push((name, operand));
            }
        }
    }

    for (declared, option) in &mut options {
        if !option.names().is_empty() {
            continue;
        }

        let name = known
            .adopt_option_name(*declared)
            .ok_or_else(|| TypeError::MissingOptionName(declared.map(str::to_owned)))?;

        let names = option.names_mut();
        match name.chars().count() {
            1 => names.short = Some(name),
            _ => names.long = Some(name),
        }
    }

    for (declared, operand) in &mut operands {
        if operand.name().is_some() {
            continue;
        }

        let name = known
            .adopt_operand_name(*declared)
            .ok_or_else(|| TypeError::MissingOperandName(declared.map(str::to_owned)))?;

        *operand.name_mut() = Some(name);
    }

    Ok(Classified {
        options: options.into_iter().map(|(_, option)| option).collect(),
        operands: operands.into_iter().map(|(_, operand)| operand).collect(),
    })
}
