use std::ffi::OsString;
use std::io::Write;

use clap::{error::ErrorKind, Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches};
use log::info;

use crate::{
    constants::LIST_COMMAND,
    error::{Error, Result},
    registry::discover,
    template::{operation::TemplateOperation, Arguments, Template},
};

use super::args::{pre_parse, Cli};

/// Long flag name for a placeholder key, e.g. `API_KEY` becomes `api-key`.
///
/// Keys with leading or trailing underscores keep their exact spelling so the
/// flag never starts with an extra dash and never collides with another key.
pub fn flag_name(key: &str) -> String {
    let kebab = key.to_lowercase().replace('_', "-");
    if kebab.starts_with('-') || kebab.ends_with('-') {
        key.to_string()
    } else {
        kebab
    }
}

/// Builds the subcommand that populates `template`.
///
/// Every named placeholder becomes a required string flag, in schema order.
/// Values may start with `-`, as generated secrets often do.
pub fn template_command(template: &Template) -> Command {
    let schema = template.schema();
    let mut command = Command::new(template.command_name().to_string())
        .about(format!("Populate '{}'", template.path().display()))
        .disable_help_flag(schema.fields().any(|key| flag_name(key) == "help"));

    for key in schema.fields() {
        command = command.arg(
            Arg::new(key.to_string())
                .long(flag_name(key))
                .value_name(key.to_string())
                .help(format!("Value for <{key}>"))
                .value_parser(clap::value_parser!(String))
                .action(ArgAction::Set)
                .allow_hyphen_values(true)
                .required(true),
        );
    }
    command
}

/// Builds the full command line: shared options, `list`, and one subcommand per template.
pub fn build_command(templates: &[Template]) -> Command {
    let list = Command::new(LIST_COMMAND).about("List discovered templates and their arguments");
    templates.iter().fold(
        Cli::command().subcommand_required(true).arg_required_else_help(true).subcommand(list),
        |command, template| command.subcommand(template_command(template)),
    )
}

/// Collects the flag values of a template subcommand into bound [`Arguments`].
pub fn bind_arguments(template: &Template, matches: &ArgMatches) -> Result<Arguments> {
    let schema = template.schema();
    schema.bind(
        schema
            .fields()
            .filter_map(|key| matches.get_one::<String>(key).map(|value| (key, value.as_str()))),
    )
}

/// Parse outcomes clap renders on its own, even when discovery failed.
fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

fn list_templates(templates: &[Template], out: &mut impl Write) -> Result<()> {
    for template in templates {
        let flags: Vec<String> =
            template.schema().fields().map(|key| format!("--{}", flag_name(key))).collect();
        writeln!(
            out,
            "{}\t{}\t{}",
            template.command_name(),
            template.path().display(),
            flags.join(" ")
        )?;
    }
    Ok(())
}

fn populate_template(
    template: &Template,
    matches: &ArgMatches,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<()> {
    let arguments = bind_arguments(template, matches)?;
    let operation = TemplateOperation::populate(template, &arguments)?;

    if dry_run {
        write!(out, "{}", operation.content())?;
    } else {
        operation.apply()?;
    }
    info!("{}", operation.get_message(dry_run));
    Ok(())
}

/// Discovers templates, parses `raw_args` against them and runs the chosen command.
///
/// Output of `list` and `--dry-run` goes to `out`. Parse failures, including
/// `--help`, come back as `Error::CliError` for the caller to render. When
/// discovery fails, help and version still render from a command without
/// template subcommands; anything else reports the discovery error.
///
/// # Arguments
/// * `raw_args` - Full argument list, program name first
/// * `out` - Destination for command output
pub fn run<I, T>(raw_args: I, out: &mut impl Write) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let raw_args: Vec<OsString> = raw_args.into_iter().map(Into::into).collect();
    let root = pre_parse(&raw_args).root;
    let discovered = discover(&root);
    let parsed = build_command(discovered.as_deref().unwrap_or_default())
        .try_get_matches_from(&raw_args);

    let (templates, matches) = match (discovered, parsed) {
        (Ok(templates), Ok(matches)) => (templates, matches),
        (_, Err(err)) if is_informational(&err) => return Err(err.into()),
        (Err(err), _) => return Err(err),
        (Ok(_), Err(err)) => return Err(err.into()),
    };
    let cli = Cli::from_arg_matches(&matches)?;

    match matches.subcommand() {
        Some((LIST_COMMAND, _)) => list_templates(&templates, out),
        Some((name, sub_matches)) => {
            let template = templates
                .iter()
                .find(|template| template.command_name() == name)
                .ok_or_else(|| {
                    Error::CliError(clap::Error::raw(
                        ErrorKind::InvalidSubcommand,
                        format!("unknown template command '{name}'\n"),
                    ))
                })?;
            populate_template(template, sub_matches, cli.dry_run, out)
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(content: &str) -> Template {
        Template::new("app_env_TEMPLATE", "app.env.TEMPLATE", content).unwrap()
    }

    #[test]
    fn flag_names_are_kebab_case() {
        assert_eq!(flag_name("API_KEY"), "api-key");
        assert_eq!(flag_name("DB_HOST_2"), "db-host-2");
        assert_eq!(flag_name("_PRIVATE"), "_PRIVATE");
        assert_eq!(flag_name("TRAILING_"), "TRAILING_");
    }

    #[test]
    fn template_command_requires_every_named_key() {
        let command = template_command(&template("<USER> <GENERATE_RANDOM_8> <HOST> <USER>"));
        let ids: Vec<&str> =
            command.get_arguments().map(|arg| arg.get_id().as_str()).collect();
        assert_eq!(ids, vec!["USER", "HOST"]);
        assert!(command.get_arguments().all(|arg| arg.is_required_set()));
    }

    #[test]
    fn binds_flag_values_from_matches() {
        let template = template("<USER>@<HOST>");
        let matches = template_command(&template)
            .try_get_matches_from(["app_env_TEMPLATE", "--user", "alice", "--host", "example"])
            .unwrap();
        let arguments = bind_arguments(&template, &matches).unwrap();
        assert_eq!(arguments.get("USER"), Some("alice"));
        assert_eq!(arguments.get("HOST"), Some("example"));
    }

    #[test]
    fn missing_flag_is_a_parse_error() {
        let template = template("<USER>@<HOST>");
        let err = template_command(&template)
            .try_get_matches_from(["app_env_TEMPLATE", "--user", "alice"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn values_may_start_with_a_dash() {
        let template = template("<PASSWORD>");
        let matches = template_command(&template)
            .try_get_matches_from(["app_env_TEMPLATE", "--password", "-x9"])
            .unwrap();
        assert_eq!(bind_arguments(&template, &matches).unwrap().get("PASSWORD"), Some("-x9"));
    }

    #[test]
    fn help_placeholder_replaces_help_flag() {
        let template = template("<HELP>");
        let matches = template_command(&template)
            .try_get_matches_from(["app_env_TEMPLATE", "--help", "see docs"])
            .unwrap();
        assert_eq!(bind_arguments(&template, &matches).unwrap().get("HELP"), Some("see docs"));
    }

    #[test]
    fn build_command_registers_each_template() {
        let templates = vec![
            Template::new("a_TEMPLATE", "a.TEMPLATE", "").unwrap(),
            Template::new("dir__b_TEMPLATE", "dir/b.TEMPLATE", "<X>").unwrap(),
        ];
        let command = build_command(&templates);
        let names: Vec<&str> = command.get_subcommands().map(|c| c.get_name()).collect();
        assert_eq!(names, vec![LIST_COMMAND, "a_TEMPLATE", "dir__b_TEMPLATE"]);
        command.debug_assert();
    }
}
