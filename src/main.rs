// SPDX-License-Identifier: MPL-2.0
use brandboard::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
        site_dir: args
            .opt_value_from_str("--site-dir")
            .unwrap()
            .or_else(|| {
                args.finish()
                    .into_iter()
                    .next()
                    .and_then(|s| s.into_string().ok())
            }),
    };

    app::run(flags)
}
