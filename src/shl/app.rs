// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: shall
// File: app.rs
// Author: shall maintainers

use crate::shl::algorithm::Algorithm;
use crate::shl::digest::commands::{self as digest_commands, DigestRequest, InputSelection};
use crate::shl::error::ShallError;
use crate::shl::output::{ColorMode, OutputConfig};
use clap::{crate_name, Arg, ArgAction, ArgMatches};
use clap_complete::{generate, Generator, Shell};
use log::{debug, LevelFilter};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
{about-with-newline}
Hashes a string, a file, standard input or every file of a directory
with SHA1, SHA256, SHA512 and MD5 in a single pass over the input.
  shall basil
  shall --file ./image.iso --sha256
  cat notes.txt | shall --stdin --md5
{usage-heading} {usage}

{all-args}{after-help}
";

fn algorithm_help(alg: Algorithm) -> &'static str {
	match alg {
		Algorithm::Sha1 => "Calculate SHA1 hash",
		Algorithm::Sha256 => "Calculate SHA256 hash",
		Algorithm::Sha512 => "Calculate SHA512 hash",
		Algorithm::Md5 => "Calculate MD5 hash",
	}
}

pub fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.help_template(HELP_TEMPLATE)
		.bin_name(crate_name!())
		.version(clap::crate_version!())
		.about("Calculate various hashes of a string or file")
		.arg(
			Arg::new("input")
				.value_name("INPUT")
				.value_parser(clap::value_parser!(OsString))
				.help("String to hash (its raw bytes)"),
		)
		.arg(
			Arg::new("file")
				.short('f')
				.long("file")
				.value_name("FILE")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Hash the contents of FILE"),
		)
		.arg(
			Arg::new("stdin")
				.long("stdin")
				.action(ArgAction::SetTrue)
				.help("Hash everything read from standard input"),
		)
		.arg(
			Arg::new("directory")
				.short('d')
				.long("directory")
				.value_name("DIR")
				.value_parser(clap::value_parser!(PathBuf))
				.help("Hash every file in DIR (non-recursive, one algorithm)"),
		)
		.args(Algorithm::all().into_iter().map(|alg| {
			Arg::new(alg.flag())
				.long(alg.flag())
				.action(ArgAction::SetTrue)
				.help(algorithm_help(alg))
		}))
		.arg(
			Arg::new("color")
				.long("color")
				.value_name("WHEN")
				.value_parser(clap::value_parser!(ColorMode))
				.default_value("auto")
				.help("When to colorize digest lines"),
		)
		.arg(
			Arg::new("no-color")
				.long("no-color")
				.action(ArgAction::SetTrue)
				.help("Disable colored output (same as --color never)"),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.action(ArgAction::SetTrue)
				.help("Print diagnostics to stderr"),
		)
		.arg(
			Arg::new("generate")
				.long("generate")
				.value_name("SHELL")
				.value_parser(clap::value_parser!(Shell))
				.help("Print shell completions and exit"),
		)
}

/// Pick the one input source named on the command line.
pub fn resolve_input(
	matches: &ArgMatches,
) -> Result<InputSelection, ShallError> {
	let mut chosen = Vec::new();
	if let Some(text) = matches.get_one::<OsString>("input") {
		chosen.push(InputSelection::Text(text.as_encoded_bytes().to_vec()));
	}
	if let Some(path) = matches.get_one::<PathBuf>("file") {
		chosen.push(InputSelection::File(path.clone()));
	}
	if matches.get_flag("stdin") {
		chosen.push(InputSelection::Stdin);
	}
	if let Some(dir) = matches.get_one::<PathBuf>("directory") {
		chosen.push(InputSelection::Directory(dir.clone()));
	}

	match chosen.len() {
		1 => Ok(chosen.remove(0)),
		0 => Err(ShallError::invalid_argument(
			"no input given: pass a string, --file, --stdin or --directory",
		)),
		_ => Err(ShallError::invalid_argument(
			"conflicting inputs: use exactly one of a string, --file, --stdin or --directory",
		)),
	}
}

/// Selected algorithms in canonical order; no selection means all of them.
pub fn resolve_algorithms(matches: &ArgMatches) -> Vec<Algorithm> {
	let selected: Vec<Algorithm> = Algorithm::all()
		.into_iter()
		.filter(|alg| matches.get_flag(alg.flag()))
		.collect();
	if selected.is_empty() {
		return Algorithm::all();
	}
	selected
}

pub fn resolve_color(matches: &ArgMatches) -> ColorMode {
	if matches.get_flag("no-color") {
		return ColorMode::Never;
	}
	matches
		.get_one::<ColorMode>("color")
		.copied()
		.unwrap_or_default()
}

pub fn resolve_request(
	matches: &ArgMatches,
) -> Result<DigestRequest, ShallError> {
	let input = resolve_input(matches)?;
	let algorithms = resolve_algorithms(matches);
	let color = resolve_color(matches);
	debug!("input {:?}, algorithms {:?}, color {}", input, algorithms, color);
	Ok(DigestRequest {
		input,
		algorithms,
		output: OutputConfig::from_mode(color),
	})
}

fn init_logging(verbose: bool) {
	let level = if verbose {
		LevelFilter::Debug
	} else {
		LevelFilter::Warn
	};
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or(level.as_str()),
	)
	.format_timestamp(None)
	.init();
}

pub fn run() -> Result<(), ShallError> {
	let matches = build_cli().get_matches();
	init_logging(matches.get_flag("verbose"));

	if let Some(shell) = matches.get_one::<Shell>("generate").copied() {
		print_completions(shell, &mut build_cli());
		return Ok(());
	}

	// Pinned before anything can fail so error lines obey --no-color too.
	let color = resolve_color(&matches);
	colored::control::set_override(color.resolve());

	let request = resolve_request(&matches)?;

	let stdout = io::stdout();
	let mut out = stdout.lock();
	digest_commands::execute(&request, &mut out)
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	generate(
		gen,
		cmd,
		cmd.get_name().to_string(),
		&mut std::io::stdout(),
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn matches(args: &[&str]) -> ArgMatches {
		let mut argv = vec!["shall"];
		argv.extend_from_slice(args);
		build_cli()
			.try_get_matches_from(argv)
			.expect("arguments should parse")
	}

	#[test]
	fn cli_definition_is_consistent() {
		build_cli().debug_assert();
	}

	#[test]
	fn positional_string_becomes_text_input() {
		let input = resolve_input(&matches(&["basil"])).unwrap();
		assert_eq!(input, InputSelection::Text("basil".into()));
	}

	#[cfg(unix)]
	#[test]
	fn non_utf8_string_keeps_its_raw_bytes() {
		use std::ffi::OsStr;
		use std::os::unix::ffi::OsStrExt;

		let matches = build_cli()
			.try_get_matches_from([
				OsStr::new("shall"),
				OsStr::from_bytes(b"bas\xffil"),
			])
			.expect("non-UTF-8 input should parse");
		let input = resolve_input(&matches).unwrap();
		assert_eq!(input, InputSelection::Text(b"bas\xffil".to_vec()));
	}

	#[test]
	fn file_flag_becomes_file_input() {
		let input = resolve_input(&matches(&["--file", "a.bin"])).unwrap();
		assert_eq!(input, InputSelection::File(PathBuf::from("a.bin")));
	}

	#[test]
	fn missing_input_is_invalid_argument() {
		let err = resolve_input(&matches(&["--sha1"])).unwrap_err();
		assert!(matches!(err, ShallError::InvalidArgument(_)));
		assert_eq!(err.exit_code(), 2);
	}

	#[test]
	fn string_and_file_together_are_invalid_argument() {
		let err = resolve_input(&matches(&["basil", "--file", "a.bin"]))
			.unwrap_err();
		assert!(matches!(err, ShallError::InvalidArgument(_)));
	}

	#[test]
	fn stdin_and_directory_together_are_invalid_argument() {
		let err = resolve_input(&matches(&["--stdin", "-d", "."]))
			.unwrap_err();
		assert!(matches!(err, ShallError::InvalidArgument(_)));
	}

	#[test]
	fn no_algorithm_flags_selects_all() {
		assert_eq!(resolve_algorithms(&matches(&["x"])), Algorithm::all());
	}

	#[test]
	fn algorithm_flags_keep_canonical_order() {
		let algorithms =
			resolve_algorithms(&matches(&["x", "--md5", "--sha256"]));
		assert_eq!(algorithms, vec![Algorithm::Sha256, Algorithm::Md5]);
	}

	#[test]
	fn color_flags_resolve() {
		assert_eq!(resolve_color(&matches(&["x"])), ColorMode::Auto);
		assert_eq!(
			resolve_color(&matches(&["x", "--color", "always"])),
			ColorMode::Always
		);
		assert_eq!(
			resolve_color(&matches(&["x", "--no-color"])),
			ColorMode::Never
		);
	}

	#[test]
	fn never_color_request_is_plain() {
		let request =
			resolve_request(&matches(&["basil", "--color", "never"]))
				.unwrap();
		assert!(!request.output.color);
	}
}
