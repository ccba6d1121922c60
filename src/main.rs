use std::ffi::OsString;

use infill::{
    cli::{get_log_level_from_verbose, pre_parse, run},
    error::{default_error_handler, Error},
};

fn main() {
    let raw_args: Vec<OsString> = std::env::args_os().collect();
    let log_level = get_log_level_from_verbose(pre_parse(&raw_args).verbose);
    env_logger::Builder::new().filter_level(log_level).init();

    match run(raw_args, &mut std::io::stdout().lock()) {
        Ok(()) => {}
        // Help, version and usage errors are rendered by clap itself.
        Err(Error::CliError(err)) => err.exit(),
        Err(err) => default_error_handler(err),
    }
}
