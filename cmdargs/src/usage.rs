/*!
Rendering of usage messages for a classified record.

```text
Usage: cp [options] source ... dest

Operands:
  source  Files to copy
  dest    Where to copy them

Options:
  -f, --force       Overwrite existing files
      --no-clobber
  -v                Print each file as it is copied
```
*/

use core::fmt::{self, Display, Write};

use indent_write::fmt::IndentWriter;
use joinery::JoinableIterator;
use lazy_format::lazy_format;

use crate::classify::Classified;
use crate::fields::{Cardinality, OperandField, OptionField};

/// Descriptions are wrapped to fit in this many columns
const WIDTH: usize = 80;

/// Descriptions are never wrapped narrower than this, however wide the titles
/// are
const MIN_DESCRIPTION_WIDTH: usize = 20;

const INDENT: &str = "  ";

/// A usage message, rendered with [`Display`].
pub struct Usage<'c, 'a> {
    command: &'c str,
    classified: &'c Classified<'a>,
}

impl<'c, 'a> Usage<'c, 'a> {
    #[inline]
    #[must_use]
    pub fn new(command: &'c str, classified: &'c Classified<'a>) -> Self {
        Self {
            command,
            classified,
        }
    }
}

impl Display for Usage<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = &self.classified.options;
        let operands = &self.classified.operands;

        write!(f, "Usage: {}", self.command)?;

        if !options.is_empty() {
            write!(f, " [options]")?;
        }

        if !operands.is_empty() {
            let synopses = operands
                .iter()
                .map(|operand| operand_synopsis(&**operand))
                .join_with(" ");

            write!(f, " {synopses}")?;
        }

        writeln!(f)?;

        let operand_titles: Vec<_> = operands
            .iter()
            .map(|operand| (operand.name().unwrap_or_default().to_owned(), operand.usage()))
            .collect();

        maybe_section(f, "Operands", &operand_titles)?;

        let layout = OptionLayout::new(options);
        let option_titles: Vec<_> = options
            .iter()
            .map(|option| (layout.title(&**option).to_string(), option.usage()))
            .collect();

        maybe_section(f, "Options", &option_titles)
    }
}

fn operand_synopsis(operand: &dyn OperandField) -> impl Display + '_ {
    let name = operand.name().unwrap_or_default();

    lazy_format!(match (operand.cardinality()) {
        Cardinality::Required => "{name}",
        Cardinality::Fixed(_) | Cardinality::Variadic { min: Some(1..), .. } => "{name} ...",
        Cardinality::Variadic { .. } => "[{name} ...]",
        Cardinality::Flag | Cardinality::Optional => "[{name}]",
    })
}

/// Which title columns are in use across all the options. Titles are
/// aligned so that long names line up whenever any option has a short name.
#[derive(Debug, Clone, Copy)]
struct OptionLayout {
    any_short: bool,
    any_long: bool,
}

impl OptionLayout {
    fn new(options: &[&mut dyn OptionField]) -> Self {
        Self {
            any_short: options.iter().any(|option| option.names().short.is_some()),
            any_long: options.iter().any(|option| option.names().long.is_some()),
        }
    }

    fn title<'o>(&self, option: &'o dyn OptionField) -> impl Display + 'o {
        let names = option.names();
        let short = names.short.as_deref();
        let long = names.long.as_deref();
        let align = self.any_short && self.any_long;

        lazy_format!(match ((short, long, align)) {
            (Some(short), Some(long), _) => "-{short}, --{long}",
            (Some(short), None, _) => "-{short}",
            (None, Some(long), true) => "    --{long}",
            (None, Some(long), false) => "--{long}",
            (None, None, _) => "",
        })
    }
}

/// Write a section by writing a blank line, then the `header`, then the
/// indented, described entries. Nothing is written if there are no entries.
fn maybe_section(
    out: &mut impl Write,
    header: &str,
    entries: &[(String, Option<&str>)],
) -> fmt::Result {
    if entries.is_empty() {
        return Ok(());
    }

    let width = entries
        .iter()
        .map(|(title, _)| title.chars().count())
        .max()
        .unwrap_or(0);

    writeln!(out, "\n{header}:")?;
    let mut out = IndentWriter::new(INDENT, out);

    entries
        .iter()
        .try_for_each(|(title, usage)| describe(&mut out, title, width, *usage))
}

/// Write a title, followed by its description in a column two spaces past
/// the widest title. Long descriptions are wrapped, with continuation lines
/// aligned to the description column.
fn describe(out: &mut impl Write, title: &str, width: usize, usage: Option<&str>) -> fmt::Result {
    let Some(usage) = usage.filter(|usage| !usage.is_empty()) else {
        return writeln!(out, "{title}");
    };

    let column = width + 2;
    let available = WIDTH
        .saturating_sub(INDENT.len() + column)
        .max(MIN_DESCRIPTION_WIDTH);

    let lines = textwrap::wrap(usage, available);
    let mut lines = lines.iter();

    match lines.next() {
        None => writeln!(out, "{title}"),
        Some(first) => {
            writeln!(out, "{title:<column$}{first}")?;
            lines.try_for_each(|line| writeln!(out, "{:column$}{line}", ""))
        }
    }
}
