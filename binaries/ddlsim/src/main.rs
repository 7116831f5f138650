mod cmd;

use {
    clap::{arg, value_parser, ArgAction, ArgMatches, Command},
    cmd::{Error as CommandError, Format},
    snafu::prelude::*,
    std::{env, ffi::OsString, path::PathBuf, process},
    tracing_subscriber::{fmt, EnvFilter},
};

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("no script given and the `DDLSIM_MIGRATIONS` environment variable is unset, you can pass the scripts or directories to replay as arguments"))]
    NoMigrations,

    #[snafu(display("{}", source))]
    ExecuteCommand {
        #[snafu(backtrace)]
        source: CommandError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

const DDLSIM_MIGRATIONS: &str = "DDLSIM_MIGRATIONS";

const REPLAY: &str = "replay";
const CHECK: &str = "check";

fn cli() -> Command {
    let pkg_name = env!("CARGO_PKG_NAME");
    let paths = arg!([PATH] ... "a .sql script or a directory of them")
        .value_parser(value_parser!(PathBuf));

    Command::new(pkg_name)
        .bin_name(pkg_name)
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .arg(arg!(-v --verbose ... "raise the log level, may be repeated").global(true))
        .subcommand(
            Command::new(REPLAY)
                .about("replay scripts and print the resulting tables")
                .arg(paths.clone())
                .arg(
                    arg!(-f --format <FORMAT> "output format")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(arg!(-t --table <NAME> "only print this table").action(ArgAction::Append))
                .arg(arg!(--sample "print a fabricated sample row for every table")),
        )
        .subcommand(
            Command::new(CHECK)
                .about("replay scripts and only report whether they apply")
                .arg(paths),
        )
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{}", err);
        process::exit(2);
    }
}

fn try_main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some((REPLAY, sub_matches)) => {
            let scripts = scripts(sub_matches)?;
            let catalog = cmd::replay(&scripts).context(ExecuteCommandSnafu)?;

            let names = sub_matches
                .get_many::<String>("table")
                .map(|names| names.cloned().collect::<Vec<_>>())
                .unwrap_or_default();
            let format = match sub_matches.get_one::<String>("format").map(String::as_str) {
                Some("json") => Format::Json,
                _ => Format::Text,
            };

            let tables = cmd::select_tables(&catalog, &names).context(ExecuteCommandSnafu)?;
            let output = cmd::render(&tables, format, sub_matches.get_flag("sample"))
                .context(ExecuteCommandSnafu)?;

            println!("{}", output.trim_end());
        }
        Some((CHECK, sub_matches)) => {
            let scripts = scripts(sub_matches)?;
            let catalog = cmd::replay(&scripts).context(ExecuteCommandSnafu)?;

            println!(
                "ok: {} scripts replayed, {} tables",
                scripts.len(),
                catalog.tables().len()
            );
        }
        _ => unreachable!(),
    }

    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn scripts(matches: &ArgMatches) -> Result<Vec<PathBuf>> {
    let paths = matches
        .get_many::<PathBuf>("PATH")
        .map(|paths| paths.cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    let paths = resolve_paths(paths, env::var_os(DDLSIM_MIGRATIONS))?;

    cmd::collect_scripts(&paths).context(ExecuteCommandSnafu)
}

/// Falls back to the migration directory from the environment when no path is given.
fn resolve_paths(paths: Vec<PathBuf>, fallback: Option<OsString>) -> Result<Vec<PathBuf>> {
    if !paths.is_empty() {
        return Ok(paths);
    }

    fallback
        .map(|dir| vec![PathBuf::from(dir)])
        .context(NoMigrationsSnafu)
}
