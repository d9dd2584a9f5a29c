// SPDX-License-Identifier: Apache-2.0 OR MIT
mod app;

use self::app::args::AppArgs;
use clap::Parser;
use color_eyre::{eyre::WrapErr, Result};
use env_logger::Env;

fn main() -> Result<()> {
	color_eyre::install().wrap_err("failed to install color-eyre handler")?;
	let args = AppArgs::parse();
	env_logger::Builder::from_env(
		Env::default().default_filter_or(if args.verbose { "debug" } else { "warn" }),
	)
	.init();

	let config = args.config();
	app::process::process(&args, &config).wrap_err("failed to process archives")
}
