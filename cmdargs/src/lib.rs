/*!
Declarative command-line arguments: declare a record whose fields are flags,
options and operands, and parse a command line into it.

```
use cmdargs::{Arguments, Flag, OptionalOption, RequiredOperand};

#[derive(Arguments, Default)]
struct Build {
    platform: RequiredOperand,
    version: OptionalOption,
    clean: Flag,
}

let mut args = Build::default();
args.parse_str("ios --version=1.0 --clean").unwrap();

assert_eq!(args.platform.value.as_deref(), Some("ios"));
assert_eq!(args.version.value.as_deref(), Some("1.0"));
assert!(args.clean.value);
```

Parsing happens in two passes. The first walks the command line, handing
values to the options they belong to (`-x`, `--long`, `-x=value`, clusters
like `-abc`, and so on) and setting everything else aside as operand values.
The second distributes the operand values across the operands, in
declaration order. Any error aborts the parse immediately, leaving the
record partially populated.

Fields that don't name themselves take the name of the struct field they're
declared in, converted to kebab-case: a single character becomes a short
option (`-v`), anything longer becomes a long option (`--dry-run`) or an
operand name.

Values are converted with the [`Value`] trait; implement [`ParsedValue`] for
any [`FromStr`][core::str::FromStr] type to use it, or derive [`Value`] for
an enum of labels.
*/

#[cfg(feature = "std")]
pub mod arguments;
pub mod classify;
pub mod errors;
pub mod fields;
mod impls;
pub mod operands;
pub mod options;
pub mod parameter;
pub mod slots;
pub mod state;
pub mod usage;

pub use cmdargs_derive::{Arguments, Value};

pub use crate::{
    classify::Classified,
    errors::{Error, ParseError, TypeError},
    fields::{Cardinality, Declare, Declared, Expected, Field, OperandField, OptionField},
    parameter::{ParsedValue, Value},
    slots::{
        DefaultedOperand, DefaultedOption, Flag, MultipleOperand, MultipleOption,
        OptionalOperand, OptionalOption, RequiredOperand, RequiredOption, VariadicOperand,
        VariadicOption,
    },
};

use crate::{operands::Allocator, options::Dispatcher, usage::Usage};

/**
A record of command-line fields. Usually derived with
[`#[derive(Arguments)]`][derive@Arguments], which lists every field of a
struct with named fields, in declaration order.

Only [`fields`][Arguments::fields] needs to be implemented; everything else
is built on it. Each call to [`parse`][Arguments::parse] expects the record to
be freshly created: values from an earlier parse are not cleared.
*/
pub trait Arguments {
    /// List the fields of this record in declaration order, along with the
    /// names they were declared under.
    fn fields(&mut self) -> Vec<Declared<'_>>;

    /// Split the fields into options and operands, and settle their names.
    fn classify(&mut self) -> Result<Classified<'_>, TypeError> {
        classify::classify(self.fields())
    }

    /// Parse a command line into this record. `args` should *exclude* the
    /// name of the program.
    fn parse<S>(&mut self, args: &[S]) -> Result<(), Error>
    where
        S: AsRef<str>,
    {
        let Classified { options, operands } = self.classify()?;
        let values = Dispatcher::new(options).run(args.iter().map(|arg| arg.as_ref()))?;
        Allocator::new(operands).run(&values)?;

        Ok(())
    }

    /// Parse a command line given as a single string, split on every space.
    fn parse_str(&mut self, line: &str) -> Result<(), Error> {
        let args: Vec<&str> = line.split(' ').collect();
        self.parse(&args)
    }

    /// Parse the arguments starting at index `start`. If `start` is past the
    /// end of `args`, this parses an empty command line.
    fn parse_from<S>(&mut self, args: &[S], start: usize) -> Result<(), Error>
    where
        S: AsRef<str>,
    {
        self.parse(args.get(start..).unwrap_or_default())
    }

    /// Render a usage message for this record.
    fn usage(&mut self, command: &str) -> Result<String, TypeError> {
        let classified = self.classify()?;
        Ok(Usage::new(command, &classified).to_string())
    }
}
