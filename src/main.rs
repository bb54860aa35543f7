// SPDX-License-Identifier: MPL-2.0
use postify::app::{self, Flags};
use postify::config::paths;
use postify::logging;

const HELP: &str = "\
Postify

USAGE:
    postify [OPTIONS]

OPTIONS:
    -h, --help               Print this help
    --lang <LOCALE>          Display language (e.g. en-US, fr)
    --config-dir <PATH>      Directory holding settings.toml
    --log-level <LEVEL>      Log level for postify (trace, debug, info, warn, error)

ENVIRONMENT:
    POSTIFY_CONFIG_DIR       Same as --config-dir
    POSTIFY_LOG              Log filter directives, overrides --log-level
";

struct Args {
    lang: Option<String>,
    config_dir: Option<String>,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: ignoring unexpected arguments: {remaining:?}");
    }
    Ok(Some(parsed))
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    logging::init(args.log_level.as_deref());
    paths::init_cli_override(args.config_dir);

    app::run(Flags { lang: args.lang })
}
