// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: shall
// Digest command handlers (string/file/stdin/directory)

use crate::shl::algorithm::Algorithm;
use crate::shl::digest::pipeline::{compute, InputSource};
use crate::shl::error::ShallError;
use crate::shl::output::{emit_lines, OutputConfig};
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The single input a run hashes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InputSelection {
	Text(Vec<u8>),
	File(PathBuf),
	Stdin,
	Directory(PathBuf),
}

/// Everything a run needs once the command line has been resolved.
#[derive(Clone, Debug)]
pub struct DigestRequest {
	pub input: InputSelection,
	pub algorithms: Vec<Algorithm>,
	pub output: OutputConfig,
}

/// Compute every line of output without writing any of it.
pub fn render(request: &DigestRequest) -> Result<Vec<String>, ShallError> {
	match &request.input {
		InputSelection::Text(text) => {
			info!("hashing string argument ({} bytes)", text.len());
			digest_single(
				InputSource::text(text.clone()),
				&request.algorithms,
				&request.output,
			)
		}
		InputSelection::File(path) => {
			info!("hashing file {}", path.display());
			digest_single(
				InputSource::file(path),
				&request.algorithms,
				&request.output,
			)
		}
		InputSelection::Stdin => {
			info!("hashing standard input");
			digest_single(
				InputSource::stdin(),
				&request.algorithms,
				&request.output,
			)
		}
		InputSelection::Directory(dir) => {
			info!("hashing files in {}", dir.display());
			digest_directory(dir, &request.algorithms, &request.output)
		}
	}
}

/// Render the request and write it to `out`.
///
/// Nothing is written unless every digest was computed.
pub fn execute<W: Write>(
	request: &DigestRequest,
	out: &mut W,
) -> Result<(), ShallError> {
	let lines = render(request)?;
	emit_lines(out, &lines).map_err(ShallError::Output)
}

fn digest_single(
	input: InputSource,
	algorithms: &[Algorithm],
	output: &OutputConfig,
) -> Result<Vec<String>, ShallError> {
	let results = compute(input, algorithms)?;
	Ok(output.format_results(&results))
}

fn digest_directory(
	dir: &Path,
	algorithms: &[Algorithm],
	output: &OutputConfig,
) -> Result<Vec<String>, ShallError> {
	let algorithm = match algorithms {
		[single] => *single,
		_ => {
			return Err(ShallError::invalid_argument(
				"--directory requires exactly one algorithm flag (--sha1, --sha256, --sha512 or --md5)",
			))
		}
	};

	let mut lines = Vec::new();
	for (name, path) in list_files(dir)? {
		debug!("hashing {}", path.display());
		let results = compute(InputSource::file(&path), &[algorithm])?;
		for result in &results {
			lines.push(output.format_named_result(result, &name));
		}
	}
	Ok(lines)
}

/// Regular files directly inside `dir`, sorted by file name.
fn list_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, ShallError> {
	let unavailable = |err| ShallError::input_unavailable(dir, err);
	let mut files = Vec::new();
	for entry in fs::read_dir(dir).map_err(unavailable)? {
		let entry = entry.map_err(unavailable)?;
		let path = entry.path();
		if !path.is_file() {
			debug!("skipping {}", path.display());
			continue;
		}
		let name = entry.file_name().to_string_lossy().into_owned();
		files.push((name, path));
	}
	files.sort_by(|a, b| a.0.cmp(&b.0));
	Ok(files)
}
