//! Leveled console output for the CLI

/// Console verbosity selected by `-q`/`-v`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress everything except errors
    Quiet,
    /// Phase banners and the run summary
    Normal,
    /// Also per-class detail
    Verbose,
}

impl LogLevel {
    /// Resolve the level from the parsed flags; quiet wins over verbose
    #[must_use]
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }
}

/// Print `msg` when the selected level admits messages of `required` level
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && level >= required {
        println!("{msg}");
    }
}
