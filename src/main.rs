// SPDX-License-Identifier: MPL-2.0
use checkin_board::app::{self, paths, Flags};
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
CheckinBoard - weekly exercise check-ins

USAGE:
  checkin_board [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, ko)
  --api-url <URL>        Check-in API base URL
  --storage-url <URL>    Public image storage base URL
  --config-dir <DIR>     Directory holding settings.toml
  -h, --help             Print this help
";

fn main() -> iced::Result {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let unused = args.finish();
    if !unused.is_empty() {
        tracing::warn!(?unused, "ignoring unrecognized arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        storage_url: args.opt_value_from_str("--storage-url")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    })
}
