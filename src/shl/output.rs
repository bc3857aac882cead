// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: shall
// Module: output
// Purpose: Render digest results as terminal lines.

use crate::shl::digest::pipeline::DigestResult;
use colored::Colorize;
use std::env;
use std::fmt;
use std::io::{self, IsTerminal, Write};

/// Column the `:` separator lines up on.
pub const LABEL_WIDTH: usize = 8;

/// User-facing color preference selected via `--color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
	#[default]
	Auto,
	Always,
	Never,
}

impl fmt::Display for ColorMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			ColorMode::Auto => "auto",
			ColorMode::Always => "always",
			ColorMode::Never => "never",
		})
	}
}

impl ColorMode {
	/// Resolve against the environment: `NO_COLOR` and whether stdout is a
	/// terminal only matter in auto mode.
	pub fn resolve(self) -> bool {
		self.resolve_with(
			env::var_os("NO_COLOR").is_some(),
			io::stdout().is_terminal(),
		)
	}

	pub fn resolve_with(self, no_color_env: bool, stdout_is_tty: bool) -> bool {
		match self {
			ColorMode::Always => true,
			ColorMode::Never => false,
			ColorMode::Auto => !no_color_env && stdout_is_tty,
		}
	}
}

/// Presentation settings handed to the formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
	pub color: bool,
}

impl OutputConfig {
	pub fn plain() -> Self {
		Self { color: false }
	}

	pub fn colored() -> Self {
		Self { color: true }
	}

	pub fn from_mode(mode: ColorMode) -> Self {
		Self {
			color: mode.resolve(),
		}
	}

	/// `<LABEL><padding>: <hex>`
	pub fn format_result(&self, result: &DigestResult) -> String {
		format!("{}: {}", self.label(result), self.digest(result))
	}

	/// `<LABEL><padding>: <hex>  <name>`, used for directory listings.
	pub fn format_named_result(
		&self,
		result: &DigestResult,
		name: &str,
	) -> String {
		format!(
			"{}: {}  {}",
			self.label(result),
			self.digest(result),
			name
		)
	}

	pub fn format_results(&self, results: &[DigestResult]) -> Vec<String> {
		results.iter().map(|r| self.format_result(r)).collect()
	}

	fn label(&self, result: &DigestResult) -> String {
		let padded = format!("{:<width$}", result.label(), width = LABEL_WIDTH);
		if self.color {
			padded.color(result.algorithm().color()).bold().to_string()
		} else {
			padded
		}
	}

	fn digest(&self, result: &DigestResult) -> String {
		let hex = result.hex();
		if self.color {
			hex.cyan().to_string()
		} else {
			hex
		}
	}
}

/// Write every line in one go; a failure maps to `ShallError::Output`.
pub fn emit_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
	for line in lines {
		writeln!(out, "{}", line)?;
	}
	out.flush()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::shl::algorithm::Algorithm;

	fn sample(alg: Algorithm) -> DigestResult {
		DigestResult::new(alg, vec![0xde, 0xad, 0xbe, 0xef])
	}

	#[test]
	fn plain_lines_pad_labels_to_a_fixed_column() {
		let config = OutputConfig::plain();
		assert_eq!(
			config.format_result(&sample(Algorithm::Sha1)),
			"SHA1    : deadbeef"
		);
		assert_eq!(
			config.format_result(&sample(Algorithm::Sha512)),
			"SHA512  : deadbeef"
		);
		assert_eq!(
			config.format_result(&sample(Algorithm::Md5)),
			"MD5     : deadbeef"
		);
	}

	#[test]
	fn named_lines_append_the_file_name() {
		let line = OutputConfig::plain()
			.format_named_result(&sample(Algorithm::Md5), "a.txt");
		assert_eq!(line, "MD5     : deadbeef  a.txt");
	}

	#[test]
	fn colored_lines_carry_escape_codes_around_the_same_text() {
		colored::control::set_override(true);
		let line =
			OutputConfig::colored().format_result(&sample(Algorithm::Sha256));
		assert!(line.contains('\u{1b}'));
		assert!(line.contains("SHA256  "));
		assert!(line.contains("deadbeef"));
	}

	#[test]
	fn plain_lines_never_contain_escape_codes() {
		let lines = OutputConfig::plain().format_results(&[
			sample(Algorithm::Sha1),
			sample(Algorithm::Md5),
		]);
		assert!(lines.iter().all(|line| !line.contains('\u{1b}')));
	}

	#[test]
	fn auto_mode_respects_no_color_and_tty() {
		assert!(ColorMode::Auto.resolve_with(false, true));
		assert!(!ColorMode::Auto.resolve_with(true, true));
		assert!(!ColorMode::Auto.resolve_with(false, false));
		assert!(ColorMode::Always.resolve_with(true, false));
		assert!(!ColorMode::Never.resolve_with(false, true));
	}

	#[test]
	fn emit_lines_writes_one_line_each() {
		let mut buffer = Vec::new();
		emit_lines(&mut buffer, &["a".to_string(), "b".to_string()])
			.expect("write to vec");
		assert_eq!(buffer, b"a\nb\n");
	}
}
