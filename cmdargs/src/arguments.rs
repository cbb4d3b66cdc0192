use std::path::Path;

use crate::{Arguments, errors::Error};

/// Helper type for loading arguments from the environment.
///
/// This type exists to provide a convenient owned container for the
/// arguments retrieved from [`std::env`], which are converted to UTF-8
/// lossily.
#[derive(Debug, Clone, Default)]
pub struct LoadedArguments {
    arguments: Vec<String>,
}

impl LoadedArguments {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            arguments: std::env::args_os()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
        }
    }

    /// Create a `LoadedArguments` from a full command line, *including* the
    /// name of the program.
    #[must_use]
    pub fn new(arguments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// The program name, exactly as it was invoked.
    #[inline]
    #[must_use]
    pub fn argv0(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }

    /// The file name of the program, suitable for usage messages.
    #[must_use]
    pub fn command_name(&self) -> Option<&str> {
        let argv0 = self.argv0()?;
        Path::new(argv0)
            .file_name()
            .and_then(|name| name.to_str())
            .or(Some(argv0))
    }

    /// Every argument after the program name.
    #[inline]
    #[must_use]
    pub fn arguments(&self) -> &[String] {
        self.arguments.get(1..).unwrap_or_default()
    }

    /// Parse every argument after the program name into `record`.
    pub fn parse_into<T>(&self, record: &mut T) -> Result<(), Error>
    where
        T: Arguments,
    {
        record.parse_from(&self.arguments, 1)
    }
}
