// SPDX-License-Identifier: MPL-2.0
use fleet_pro::app::{self, paths, Flags};

const HELP: &str = "\
fleet_pro

USAGE:
  fleet_pro [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Interface language (en-US, ar)
  --i18n-dir <DIR>      Directory with custom .ftl translation files
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    fleet_pro::logging::init();

    let flags = Flags {
        lang: optional_value(&mut args, "--lang"),
        i18n_dir: optional_value(&mut args, "--i18n-dir"),
        config_dir: optional_value(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, %err, "ignoring invalid argument");
            None
        }
    }
}
