// SPDX-License-Identifier: MPL-2.0
use paws_rescue::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        endpoint: args.opt_value_from_str("--endpoint").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    app::run(flags)
}
