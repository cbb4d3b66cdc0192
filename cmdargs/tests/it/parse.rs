use cmdargs::{
    Arguments, Error, Expected, Flag, MultipleOperand, MultipleOption, OptionalOperand,
    OptionalOption, ParseError, RequiredOperand, RequiredOption, TypeError, VariadicOperand,
    VariadicOption,
};
use expect_test::expect;

use crate::{check_error, parsed};

#[derive(Arguments, Default, Debug)]
struct ThreeOperands {
    first: RequiredOperand,
    second: RequiredOperand,
    third: RequiredOperand,
}

#[test]
fn required_operands_in_order() {
    let args: ThreeOperands = parsed("x y z");

    assert_eq!(args.first.value.as_deref(), Some("x"));
    assert_eq!(args.second.value.as_deref(), Some("y"));
    assert_eq!(args.third.value.as_deref(), Some("z"));
}

#[derive(Arguments, Default, Debug)]
struct Flags {
    a: Flag,
    b: Flag,
    c: Flag,
}

#[test]
fn clustered_flags_match_separate_flags() {
    let clustered: Flags = parsed("-abc");
    let separate: Flags = parsed("-a -b -c");

    assert!(clustered.a.value && clustered.b.value && clustered.c.value);
    assert_eq!(clustered.a.value, separate.a.value);
    assert_eq!(clustered.b.value, separate.b.value);
    assert_eq!(clustered.c.value, separate.c.value);
}

#[test]
fn unmentioned_flags_stay_false() {
    let args: Flags = parsed("-b");

    assert!(!args.a.value);
    assert!(args.b.value);
    assert!(!args.c.value);
}

#[test]
fn flag_consumes_a_following_value() {
    let args: Flags = parsed("-a true -b false");
    assert!(args.a.value);
    assert!(!args.b.value);

    let args: Flags = parsed("-a=true -b= -c=yes");
    assert!(args.a.value);
    assert!(!args.b.value);
    assert!(!args.c.value);
}

#[derive(Arguments, Default, Debug)]
struct Named {
    name: RequiredOption,
}

#[test]
fn attached_value_matches_separate_value() {
    let attached: Named = parsed("--name=value");
    let separate: Named = parsed("--name value");

    assert_eq!(attached.name.value.as_deref(), Some("value"));
    assert_eq!(attached.name.value, separate.name.value);
}

#[test]
fn repeated_option_takes_the_last_value() {
    let args: Named = parsed("--name first --name second");
    assert_eq!(args.name.value.as_deref(), Some("second"));
}

#[test]
fn missing_required_option() {
    check_error::<Named>("", expect!["missing or invalid value for option name"]);
    check_error::<Named>("--name=", expect!["missing or invalid value for option name"]);
}

#[derive(Arguments, Default, Debug)]
struct FlagAndRest {
    a: Flag,
    rest: VariadicOperand,
}

#[test]
fn terminator_passes_dashes_through() {
    let args: FlagAndRest = parsed("-a -- -1 -2");

    assert!(args.a.value);
    assert_eq!(args.rest.value, ["-1", "-2"]);
}

#[test]
fn empty_arguments_are_skipped_before_the_terminator_only() {
    let mut args = FlagAndRest::default();
    args.parse(&["", "x", "", "-a", "--", "", "--"]).unwrap();

    // The empty operand after `--` reaches the field, but isn't valid text
    assert!(args.a.value);
    assert_eq!(args.rest.value, ["x", "--"]);
}

#[derive(Arguments, Default, Debug)]
struct SingleOperand {
    file: RequiredOperand,
}

#[test]
fn missing_operand() {
    let result = SingleOperand::default().parse::<&str>(&[]);

    assert_eq!(
        result,
        Err(Error::Parse(ParseError::MissingOperand {
            name: "file".to_owned(),
            expected: Expected::Value,
        }))
    );
}

#[test]
fn too_many_operands() {
    check_error::<SingleOperand>("a b c", expect!["invalid operand b"]);
}

#[test]
fn unknown_options() {
    check_error::<SingleOperand>("--file x", expect!["invalid option file"]);
    check_error::<Flags>("-abx", expect!["invalid option x"]);
}

#[test]
fn no_fields_accept_no_arguments() {
    #[derive(Arguments, Default)]
    struct Empty {}

    Empty::default().parse::<&str>(&[]).unwrap();
    check_error::<Empty>("stray", expect!["invalid operand stray"]);
}

struct Clashing {
    x: Flag,
    y: OptionalOption,
}

impl Default for Clashing {
    fn default() -> Self {
        Self {
            x: Flag::new().short("x"),
            y: OptionalOption::new().short("x"),
        }
    }
}

impl Arguments for Clashing {
    fn fields(&mut self) -> Vec<cmdargs::Declared<'_>> {
        use cmdargs::{Declare, Declared};

        vec![
            Declared::named("x", self.x.declare()),
            Declared::named("y", self.y.declare()),
        ]
    }
}

#[test]
fn duplicated_names_fail_before_scanning() {
    let result = Clashing::default().parse(&["--not-an-option"]);

    assert_eq!(
        result,
        Err(Error::Type(TypeError::DuplicatedOptionName("x".to_owned())))
    );
}

#[derive(Arguments, Debug)]
struct Mixed {
    verbose: Flag,
    level: OptionalOption<u8>,
    pair: MultipleOption,
    ids: VariadicOption<u32>,
    input: RequiredOperand,
    extra: OptionalOperand,
}

impl Default for Mixed {
    fn default() -> Self {
        Self {
            verbose: Flag::new().short("v").long("verbose"),
            level: OptionalOption::new().short("l"),
            pair: MultipleOption::new(2).long("pair"),
            ids: VariadicOption::new().long("ids").min(1),
            input: RequiredOperand::new(),
            extra: OptionalOperand::new(),
        }
    }
}

#[test]
fn classification_is_repeatable() {
    fn names(record: &mut Mixed) -> Vec<String> {
        let classified = record.classify().unwrap();

        let options = classified.options.iter().map(|option| {
            let names = option.names();
            format!("{:?}/{:?}", names.long, names.short)
        });

        let operands = classified
            .operands
            .iter()
            .map(|operand| format!("{:?}", operand.name()));

        options.chain(operands).collect()
    }

    let first = names(&mut Mixed::default());
    let second = names(&mut Mixed::default());

    assert_eq!(first, second);
    expect![[r#"
        [
            "Some(\"verbose\")/Some(\"v\")",
            "None/Some(\"l\")",
            "Some(\"pair\")/None",
            "Some(\"ids\")/None",
            "Some(\"input\")",
            "Some(\"extra\")",
        ]
    "#]]
    .assert_debug_eq(&first);
}

#[test]
fn mixed_options_and_operands() {
    let args: Mixed = parsed("in.txt -vl 3 --pair a b --ids 1 2 -- out.txt");

    assert!(args.verbose.value);
    assert_eq!(args.level.value, Some(3));
    assert_eq!(args.pair.value, ["a", "b"]);
    assert_eq!(args.ids.value, [1, 2]);
    assert_eq!(args.input.value.as_deref(), Some("in.txt"));
    assert_eq!(args.extra.value.as_deref(), Some("out.txt"));
}

#[test]
fn option_cardinality_errors() {
    check_error::<Mixed>(
        "in --ids 1 --pair a",
        expect!["missing or invalid values (need 2) for option pair"],
    );
    check_error::<Mixed>(
        "in --pair a b",
        expect!["missing or invalid values (at least 1) for option ids"],
    );
    check_error::<Mixed>(
        "in --pair a b --ids x",
        expect!["missing or invalid values (at least 1) for option ids"],
    );
}

#[test]
fn unconvertible_optional_value_is_absent() {
    let args: Mixed = parsed("in -l many --pair a b --ids 1");

    assert_eq!(args.level.value, None);
    assert_eq!(args.input.value.as_deref(), Some("in"));
}

#[derive(Arguments, Debug)]
struct Counted {
    pair: MultipleOperand<u32>,
    rest: OptionalOperand,
}

impl Counted {
    fn new() -> Self {
        Self {
            pair: MultipleOperand::new(2),
            rest: OptionalOperand::new(),
        }
    }
}

#[test]
fn failed_conversion_consumes_a_slot_and_reports_missing() {
    let mut args = Counted::new();
    let result = args.parse(&["1", "x", "rest"]);

    assert_eq!(
        result,
        Err(Error::Parse(ParseError::MissingOperand {
            name: "pair".to_owned(),
            expected: Expected::Exactly(2),
        }))
    );
    assert_eq!(args.pair.value, [1]);
    assert_eq!(args.rest.value.as_deref(), Some("rest"));
}

#[test]
fn parse_str_splits_on_single_spaces() {
    let mut args = ThreeOperands::default();
    args.parse_str("a  b c").unwrap();

    assert_eq!(args.first.value.as_deref(), Some("a"));
    assert_eq!(args.second.value.as_deref(), Some("b"));
    assert_eq!(args.third.value.as_deref(), Some("c"));
}

#[test]
fn parse_from_skips_leading_arguments() {
    let mut args = SingleOperand::default();
    args.parse_from(&["program", "file"], 1).unwrap();
    assert_eq!(args.file.value.as_deref(), Some("file"));

    let mut args = SingleOperand::default();
    assert_eq!(
        args.parse_from(&["program"], 5),
        Err(Error::Parse(ParseError::MissingOperand {
            name: "file".to_owned(),
            expected: Expected::Value,
        }))
    );
}

#[test]
fn loaded_arguments_skip_the_program_name() {
    use cmdargs::arguments::LoadedArguments;

    let loaded = LoadedArguments::new(["./target/debug/tool", "file"]);
    let mut args = SingleOperand::default();
    loaded.parse_into(&mut args).unwrap();

    assert_eq!(loaded.command_name(), Some("tool"));
    assert_eq!(args.file.value.as_deref(), Some("file"));
}
