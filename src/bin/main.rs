// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: shall
// File: main.rs
// Author: shall maintainers

use colored::Colorize;
use shall::shl::app;

fn main() {
	if let Err(err) = app::run() {
		eprintln!("{} {}", "error:".red().bold(), err);
		std::process::exit(err.exit_code());
	}
}
