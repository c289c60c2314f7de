// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use tracing::Level;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Auto-dismissing toast notifications demo

USAGE:
  iced_toast [OPTIONS] [MESSAGE]

OPTIONS:
  --visible-ms <MS>     Delay before a toast fades
  --grace-ms <MS>       Delay before fading after the pointer leaves a toast
  --placement <POS>     Toast position, e.g. end-bottom, start-top, center-middle
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help

ARGS:
  <MESSAGE>             Message shown as a toast on startup

Set RUST_LOG (e.g. RUST_LOG=iced_toast=debug) to trace toast timers.
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let visible_ms = args.opt_value_from_str("--visible-ms")?;
    let grace_ms = args.opt_value_from_str("--grace-ms")?;
    let placement = args.opt_value_from_str("--placement")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;

    let message = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        visible_ms,
        grace_ms,
        placement,
        config_dir,
        message,
    })
}
