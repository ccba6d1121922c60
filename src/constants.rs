//! Constants used throughout infill

/// Suffix marking a file as a template source
pub const TEMPLATE_SUFFIX: &str = ".TEMPLATE";

/// Suffix replacing [`TEMPLATE_SUFFIX`] on the populated artifact
pub const POPULATED_SUFFIX: &str = ".POPULATED";

/// Matches every placeholder occurrence, named or random
pub const PLACEHOLDER_PATTERN: &str = r"<[A-Z_]+(?:_[0-9]+)?>";

/// Matches a whole placeholder reserved for random token generation
pub const RANDOM_PLACEHOLDER_PATTERN: &str = r"^<GENERATE_RANDOM_([0-9]+)>$";

/// Shortest random token we agree to generate
pub const MIN_RANDOM_LENGTH: i64 = 6;

/// Longest random token we agree to generate (1 MiB of output)
pub const MAX_RANDOM_LENGTH: i64 = 1 << 20;

/// Joins a parent directory name and a file-derived command name
pub const COMMAND_SEPARATOR: &str = "__";

/// Built-in subcommand listing discovered templates
pub const LIST_COMMAND: &str = "list";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
