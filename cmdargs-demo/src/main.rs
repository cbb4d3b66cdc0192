use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context as _;
use cmdargs::{
    Arguments, DefaultedOption, Error, Flag, OptionalOption, RequiredOperand, Value,
    VariadicOperand, arguments::LoadedArguments,
};
use lazy_format::lazy_format;

#[derive(Value, Debug, Clone, Copy)]
enum Platform {
    Ios,
    Android,
    #[args(rename = "macos")]
    MacOs,
}

#[derive(Arguments, Debug)]
struct Build {
    #[args(rename = "platform")]
    platforms: VariadicOperand<Platform>,
    output: RequiredOperand<PathBuf>,

    version: OptionalOption,
    jobs: DefaultedOption<u32>,
    clean: Flag,
    verbose: Flag,

    #[args(skip)]
    started: Instant,
}

impl Build {
    fn new() -> Self {
        Self {
            platforms: VariadicOperand::new()
                .min(1)
                .usage("Platforms to build for: ios, android or macos"),
            output: RequiredOperand::new().usage("Directory to put the build products in"),
            version: OptionalOption::new()
                .long("version")
                .usage("Version number to stamp the build with"),
            jobs: DefaultedOption::new(1)
                .short("j")
                .long("jobs")
                .usage("Number of parallel jobs"),
            clean: Flag::new().usage("Clean before building"),
            verbose: Flag::new()
                .short("v")
                .long("verbose")
                .usage("Print every step"),
            started: Instant::now(),
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let loaded = LoadedArguments::from_env();
    let command = loaded.command_name().unwrap_or("cmdargs-demo");

    if loaded
        .arguments()
        .iter()
        .any(|arg| arg == "-h" || arg == "--help")
    {
        print!("{}", Build::new().usage(command)?);
        return Ok(ExitCode::SUCCESS);
    }

    let mut build = Build::new();

    match loaded.parse_into(&mut build) {
        Ok(()) => {}
        Err(Error::Parse(error)) => {
            eprintln!("{command}: {error}\n");
            eprint!("{}", Build::new().usage(command)?);
            return Ok(ExitCode::from(2));
        }
        Err(error @ Error::Type(_)) => {
            return Err(error).context("the build arguments are declared incorrectly");
        }
    }

    let version = build.version.value.as_deref().unwrap_or("unversioned");
    let output = build
        .output
        .value
        .as_ref()
        .context("output directory was not parsed")?;

    if build.clean.value {
        println!("cleaning {}", output.display());
    }

    for platform in &build.platforms.value {
        println!(
            "{}",
            lazy_format!(
                "building {platform:?} ({version}) into {output} with {jobs} job(s)",
                output = output.display(),
                jobs = build.jobs.value,
            )
        );
    }

    if build.verbose.value {
        println!("{build:#?}");
        println!("done in {:?}", build.started.elapsed());
    }

    Ok(ExitCode::SUCCESS)
}
