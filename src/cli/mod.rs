pub mod args;
pub mod runner;

pub use args::{get_log_level_from_verbose, pre_parse, Cli};
pub use runner::{bind_arguments, build_command, flag_name, run, template_command};
