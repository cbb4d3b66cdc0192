mod derive;
mod parse;

use cmdargs::Arguments;
use expect_test::Expect;

/// Parse `args` (split on whitespace) into a fresh record, and check the
/// error message against `expect`.
fn check_error<A>(args: &str, expect: Expect)
where
    A: Arguments + Default,
{
    let args: Vec<&str> = args.split_ascii_whitespace().collect();

    match A::default().parse(&args) {
        Ok(()) => panic!("parsing {args:?} unexpectedly succeeded"),
        Err(err) => expect.assert_eq(&err.to_string()),
    }
}

/// Parse `args` (split on whitespace) into a fresh record, which must
/// succeed.
fn parsed<A>(args: &str) -> A
where
    A: Arguments + Default,
{
    let mut record = A::default();
    let args: Vec<&str> = args.split_ascii_whitespace().collect();

    if let Err(err) = record.parse(&args) {
        panic!("failed to parse {args:?}: {err}");
    }

    record
}
