// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: shall
// File: error.rs
// Author: shall maintainers

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code for unreadable input and internal failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for usage errors, shared with clap.
pub const EXIT_USAGE: i32 = 2;

/// Every way a shall invocation can fail. All of them end the run.
#[derive(Debug, Error)]
pub enum ShallError {
	#[error("cannot read {}: {source}", .path.display())]
	InputUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("no digest algorithms requested")]
	EmptyAlgorithmList,

	#[error("algorithm {0} requested more than once")]
	DuplicateAlgorithm(&'static str),

	#[error("{0}")]
	InvalidArgument(String),

	#[error("failed to write output: {0}")]
	Output(#[source] io::Error),
}

impl ShallError {
	pub fn input_unavailable(
		path: impl Into<PathBuf>,
		source: io::Error,
	) -> Self {
		ShallError::InputUnavailable {
			path: path.into(),
			source,
		}
	}

	pub fn invalid_argument(message: impl Into<String>) -> Self {
		ShallError::InvalidArgument(message.into())
	}

	pub fn exit_code(&self) -> i32 {
		match self {
			ShallError::InvalidArgument(_) => EXIT_USAGE,
			ShallError::InputUnavailable { .. }
			| ShallError::EmptyAlgorithmList
			| ShallError::DuplicateAlgorithm(_)
			| ShallError::Output(_) => EXIT_FAILURE,
		}
	}
}
