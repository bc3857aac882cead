// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: shall
// File: pipeline.rs
// Author: shall maintainers

//! Single-pass digest pipeline.
//!
//! The input is read once, chunk by chunk. Each chunk is handed to every
//! requested hasher before the next one is read, and each hasher is
//! finalized exactly once after the input runs dry.

use crate::shl::algorithm::Algorithm;
use crate::shl::error::ShallError;
use digest::DynDigest;
use log::{debug, trace};
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

/// Bytes requested from the input per read.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

const STDIN_NAME: &str = "<stdin>";
const TEXT_NAME: &str = "<string>";

/// Where the pipeline pulls its bytes from.
pub enum InputSource {
	/// In-memory argument bytes, hashed exactly as given.
	Text(Vec<u8>),
	/// File opened by the pipeline itself.
	File(PathBuf),
	/// Any other byte stream, e.g. standard input.
	Reader {
		name: String,
		reader: Box<dyn Read>,
	},
}

impl InputSource {
	pub fn text(text: impl Into<Vec<u8>>) -> Self {
		InputSource::Text(text.into())
	}

	pub fn file(path: impl AsRef<Path>) -> Self {
		InputSource::File(path.as_ref().to_path_buf())
	}

	pub fn stdin() -> Self {
		InputSource::Reader {
			name: STDIN_NAME.to_string(),
			reader: Box::new(io::stdin()),
		}
	}

	pub fn reader(name: impl Into<String>, reader: impl Read + 'static) -> Self {
		InputSource::Reader {
			name: name.into(),
			reader: Box::new(reader),
		}
	}

	/// Name used in diagnostics and errors.
	pub fn origin(&self) -> PathBuf {
		match self {
			InputSource::Text(_) => PathBuf::from(TEXT_NAME),
			InputSource::File(path) => path.clone(),
			InputSource::Reader { name, .. } => PathBuf::from(name),
		}
	}

	fn open(self) -> Result<Box<dyn Read>, ShallError> {
		match self {
			InputSource::Text(text) => {
				Ok(Box::new(Cursor::new(text)))
			}
			InputSource::File(path) => match File::open(&path) {
				Ok(file) => Ok(Box::new(file)),
				Err(err) => Err(ShallError::input_unavailable(path, err)),
			},
			InputSource::Reader { reader, .. } => Ok(reader),
		}
	}
}

/// Finalized digest of one algorithm.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DigestResult {
	algorithm: Algorithm,
	digest: Vec<u8>,
}

impl DigestResult {
	pub fn new(algorithm: Algorithm, digest: Vec<u8>) -> Self {
		Self { algorithm, digest }
	}

	pub fn algorithm(&self) -> Algorithm {
		self.algorithm
	}

	pub fn label(&self) -> &'static str {
		self.algorithm.label()
	}

	pub fn digest(&self) -> &[u8] {
		&self.digest
	}

	/// Lowercase hexadecimal rendering of the digest.
	pub fn hex(&self) -> String {
		hex::encode(&self.digest)
	}
}

/// Hash `input` once with every algorithm in `algorithms`.
///
/// Results come back in the order of `algorithms`.
pub fn compute(
	input: InputSource,
	algorithms: &[Algorithm],
) -> Result<Vec<DigestResult>, ShallError> {
	compute_with_chunk_size(input, algorithms, DEFAULT_CHUNK_SIZE)
}

pub fn compute_with_chunk_size(
	input: InputSource,
	algorithms: &[Algorithm],
	chunk_size: usize,
) -> Result<Vec<DigestResult>, ShallError> {
	validate_algorithms(algorithms)?;
	if chunk_size == 0 {
		return Err(ShallError::invalid_argument(
			"chunk size must be greater than zero",
		));
	}

	let origin = input.origin();
	let mut reader = input.open()?;
	let mut hashers: Vec<(Algorithm, Box<dyn DynDigest>)> = algorithms
		.iter()
		.map(|&alg| (alg, alg.hasher()))
		.collect();

	let mut buffer = Vec::new();
	buffer.try_reserve_exact(chunk_size).map_err(|_| {
		ShallError::invalid_argument(format!(
			"chunk size {} cannot be allocated",
			chunk_size
		))
	})?;
	buffer.resize(chunk_size, 0);
	let mut total_bytes: u64 = 0;
	let mut chunks: u64 = 0;
	loop {
		let count = match reader.read(&mut buffer) {
			Ok(0) => break,
			Ok(count) => count,
			Err(err) if err.kind() == io::ErrorKind::Interrupted => {
				continue
			}
			Err(err) => {
				return Err(ShallError::input_unavailable(origin, err))
			}
		};
		let chunk = &buffer[..count];
		for (_, hasher) in hashers.iter_mut() {
			hasher.update(chunk);
		}
		total_bytes += count as u64;
		chunks += 1;
		trace!("chunk {} of {} bytes from {}", chunks, count, origin.display());
	}
	debug!(
		"read {} bytes in {} chunks from {}",
		total_bytes,
		chunks,
		origin.display()
	);

	Ok(hashers
		.into_iter()
		.map(|(alg, hasher)| {
			let digest = hasher.finalize().into_vec();
			debug!("finalized {}", alg);
			DigestResult::new(alg, digest)
		})
		.collect())
}

fn validate_algorithms(algorithms: &[Algorithm]) -> Result<(), ShallError> {
	if algorithms.is_empty() {
		return Err(ShallError::EmptyAlgorithmList);
	}
	for (idx, alg) in algorithms.iter().enumerate() {
		if algorithms[..idx].contains(alg) {
			return Err(ShallError::DuplicateAlgorithm(alg.label()));
		}
	}
	Ok(())
}
