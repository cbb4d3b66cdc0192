#![no_std]

/*!
Low-level scanning of command-line arguments. Takes care of distinguishing
values, short options, clustered short options, long options, `=`-attached
values and the `--` terminator. No name lookup or type handling happens here;
those belong to whoever implements [`Visitor`]. Usually this is too low level
to use directly.
*/

mod populated_str;

use populated_str::PopulatedStr;

/**
The [`ArgumentsParser`] type operates by passing the arguments it finds into a
[`Visitor`], to be handled.

Option names are always handed over as `&str`, including the single-character
names of short options, so that a visitor can keep short and long names in
one lookup table.
 */
pub trait Visitor<'arg> {
    type Value;

    /// An argument that doesn't start with `-`. It's either the value of an
    /// option that is still waiting for one, or an operand.
    fn visit_value(self, argument: &'arg str) -> Self::Value;

    /// A short option such as `-o`. Clusters like `-abc` are reported as a
    /// sequence of short options, one `char` at a time.
    fn visit_short(self, option: &'arg str) -> Self::Value;

    /// A short option given as `-o=argument`. Everything between the `-` and
    /// the `=` is the option, even if it is more than one character long.
    fn visit_short_with_value(self, option: &'arg str, argument: &'arg str) -> Self::Value;

    /// A long option such as `--option`
    fn visit_long(self, option: &'arg str) -> Self::Value;

    /// A long option that definitely has an argument, because it was given
    /// as `--option=argument`. The argument may be empty.
    fn visit_long_with_value(self, option: &'arg str, argument: &'arg str) -> Self::Value;

    /// A lone `-`
    fn visit_dash(self) -> Self::Value;

    /// The `--` terminator. Every argument after it is reported through
    /// [`visit_escaped`][Visitor::visit_escaped].
    fn visit_terminator(self) -> Self::Value;

    /// An argument that appeared after `--`, passed through verbatim (even if
    /// it is empty or looks like an option).
    fn visit_escaped(self, argument: &'arg str) -> Self::Value;
}

#[derive(Debug, Clone)]
enum State<'arg> {
    Ready,
    PositionalOnly,
    ShortInProgress(&'arg PopulatedStr),
}

/**
An `ArgumentsParser` is the main entry point into `cmdargs_parser`. It parses
arguments in each call to [`next_arg`][ArgumentsParser::next_arg], sending
what it finds to the given [`Visitor`].

The parser operates entirely on borrowed data; the ubiquitous `'arg` lifetime
refers to the borrowed command line.
*/
#[derive(Debug, Clone)]
pub struct ArgumentsParser<'arg, I> {
    state: State<'arg>,
    args: I,
}

impl<'arg, I> ArgumentsParser<'arg, I>
where
    I: Iterator<Item = &'arg str>,
{
    /**
    Create a new [`ArgumentsParser`] from an iterator of string slices, where
    each slice is a single argument received from the command line. This
    list should *exclude* the name of the program.
     */
    #[inline]
    #[must_use]
    pub fn new(args: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            state: State::Ready,
            args: args.into_iter(),
        }
    }

    /// Report the first character of a short cluster, and remember the rest
    /// of it (if any) for the next call.
    #[inline]
    fn handle_short_cluster<V>(&mut self, cluster: &'arg PopulatedStr, visitor: V) -> V::Value
    where
        V: Visitor<'arg>,
    {
        let (option, rest) = cluster.split_first();

        self.state = match PopulatedStr::new(rest) {
            None => State::Ready,
            Some(rest) => State::ShortInProgress(rest),
        };

        visitor.visit_short(option)
    }

    fn handle_argument<V>(&mut self, argument: &'arg str, visitor: V) -> V::Value
    where
        V: Visitor<'arg>,
    {
        if argument == "--" {
            self.state = State::PositionalOnly;
            return visitor.visit_terminator();
        }

        if let Some(option) = argument.strip_prefix("--") {
            return match split_once(option, b'=') {
                Some((option, argument)) => visitor.visit_long_with_value(option, argument),
                None => visitor.visit_long(option),
            };
        }

        match argument.strip_prefix('-') {
            None => visitor.visit_value(argument),
            Some(short) => match split_once(short, b'=') {
                Some((option, argument)) => visitor.visit_short_with_value(option, argument),
                None => match PopulatedStr::new(short) {
                    None => visitor.visit_dash(),
                    Some(cluster) => self.handle_short_cluster(cluster, visitor),
                },
            },
        }
    }

    /// Scan the next argument (or the next character of a short cluster) and
    /// report it to the visitor. Empty arguments are skipped, except after
    /// `--`. Returns [`None`] once the arguments are exhausted.
    pub fn next_arg<V>(&mut self, visitor: V) -> Option<V::Value>
    where
        V: Visitor<'arg>,
    {
        match self.state {
            State::Ready => {
                let argument = self.args.by_ref().find(|argument| !argument.is_empty())?;
                Some(self.handle_argument(argument, visitor))
            }
            State::PositionalOnly => self
                .args
                .next()
                .map(|argument| visitor.visit_escaped(argument)),
            State::ShortInProgress(cluster) => Some(self.handle_short_cluster(cluster, visitor)),
        }
    }
}

fn split_once(input: &str, delimiter: u8) -> Option<(&str, &str)> {
    // The delimiter is ASCII, so both halves are on char boundaries
    memchr::memchr(delimiter, input.as_bytes()).map(|i| (&input[..i], &input[i + 1..]))
}
