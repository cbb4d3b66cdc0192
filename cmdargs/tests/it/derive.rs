use cmdargs::{
    Arguments, Flag, OptionalOption, RequiredOperand, RequiredOption, Value, VariadicOperand,
};
use expect_test::expect;

use crate::{check_error, parsed};

#[derive(Arguments, Default, Debug)]
struct Naming {
    dry_run: Flag,
    v: Flag,
    output_dir: OptionalOption,
    r#type: OptionalOption,

    #[args(rename = "n")]
    count: OptionalOption<u32>,

    #[args(rename = "in")]
    input: RequiredOperand,

    #[args(skip)]
    seen: Vec<String>,
}

#[test]
fn field_names_become_kebab_case_options() {
    let args: Naming = parsed("--dry-run -v --output-dir=out --type dir -n 3 file");

    assert!(args.dry_run.value);
    assert!(args.v.value);
    assert_eq!(args.output_dir.value.as_deref(), Some("out"));
    assert_eq!(args.r#type.value.as_deref(), Some("dir"));
    assert_eq!(args.count.value, Some(3));
    assert_eq!(args.input.value.as_deref(), Some("file"));
    assert!(args.seen.is_empty());
}

#[test]
fn renamed_fields_lose_their_field_names() {
    check_error::<Naming>("--count 3 file", expect!["invalid option count"]);
    check_error::<Naming>("--dry_run file", expect!["invalid option dry_run"]);
    check_error::<Naming>("", expect!["missing or invalid value for operand in"]);
}

#[derive(Arguments, Debug)]
struct Explicit {
    lvl: OptionalOption<u8>,
    quiet: Flag,
}

impl Default for Explicit {
    fn default() -> Self {
        Self {
            lvl: OptionalOption::new().long("level"),
            quiet: Flag::new().short("q"),
        }
    }
}

#[test]
fn explicit_names_replace_field_names() {
    let args: Explicit = parsed("--level 2 -q");

    assert_eq!(args.lvl.value, Some(2));
    assert!(args.quiet.value);

    check_error::<Explicit>("--lvl 2", expect!["invalid option lvl"]);
    check_error::<Explicit>("--quiet", expect!["invalid option quiet"]);
}

#[derive(Arguments, Default, Debug)]
struct Generic<T: Value> {
    value: RequiredOperand<T>,
}

#[test]
fn generic_records() {
    let args: Generic<u16> = parsed("8080");
    assert_eq!(args.value.value, Some(8080));

    check_error::<Generic<u16>>(
        "http",
        expect!["missing or invalid value for operand value"],
    );
}

#[derive(Value, Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    DarkBlue,

    #[args(rename = "GRN")]
    Green,
}

#[test]
fn enum_labels() {
    assert_eq!(Color::from_arg("red"), Some(Color::Red));
    assert_eq!(Color::from_arg("dark-blue"), Some(Color::DarkBlue));
    assert_eq!(Color::from_arg("GRN"), Some(Color::Green));

    assert_eq!(Color::from_arg("Red"), None);
    assert_eq!(Color::from_arg("green"), None);
    assert_eq!(Color::from_arg(""), None);
}

#[derive(Value, Debug, PartialEq, Eq)]
enum Level {
    Quiet,
    Loud,
    Number(u8),
}

#[derive(Value, Debug, PartialEq, Eq)]
enum Target {
    Local,
    Remote { host: String },
}

#[test]
fn enum_fallback_variants() {
    assert_eq!(Level::from_arg("quiet"), Some(Level::Quiet));
    assert_eq!(Level::from_arg("3"), Some(Level::Number(3)));
    assert_eq!(Level::from_arg("300"), None);

    assert_eq!(Target::from_arg("local"), Some(Target::Local));
    assert_eq!(
        Target::from_arg("example.com"),
        Some(Target::Remote {
            host: "example.com".to_owned()
        })
    );
    assert_eq!(Target::from_arg(""), None);
}

#[derive(Value, Debug, PartialEq, Eq)]
struct Port(u16);

#[derive(Value, Debug, PartialEq, Eq)]
struct Label {
    text: String,
}

#[test]
fn newtype_values() {
    assert_eq!(Port::from_arg("22"), Some(Port(22)));
    assert_eq!(Port::from_arg("-1"), None);

    assert_eq!(
        Label::from_arg("nightly"),
        Some(Label {
            text: "nightly".to_owned()
        })
    );
    assert_eq!(Label::from_arg(""), None);
}

#[derive(Arguments, Debug)]
struct Deploy {
    color: OptionalOption<Color>,
    port: RequiredOption<Port>,
    targets: VariadicOperand<Target>,
}

impl Default for Deploy {
    fn default() -> Self {
        Self {
            color: OptionalOption::new().short("c"),
            port: RequiredOption::new().short("p").long("port"),
            targets: VariadicOperand::new(),
        }
    }
}

#[test]
fn derived_values_in_fields() {
    let args: Deploy = parsed("-c dark-blue -p 22 local example.com");

    assert_eq!(args.color.value, Some(Color::DarkBlue));
    assert_eq!(args.port.value, Some(Port(22)));
    assert_eq!(
        args.targets.value,
        [
            Target::Local,
            Target::Remote {
                host: "example.com".to_owned()
            }
        ]
    );
}

#[test]
fn unconvertible_values_are_missing() {
    check_error::<Deploy>(
        "--port ssh",
        expect!["missing or invalid value for option port"],
    );

    let args: Deploy = parsed("-c Red --port=22");
    assert_eq!(args.color.value, None);
}
