// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: shall
// File: algorithm.rs
// Author: shall maintainers

//! Supported digest algorithms and the factory producing their hashers.

use colored::Color;
use digest::{Digest, DynDigest};
use std::fmt;
use strum::{EnumIter, IntoEnumIterator};

/// Digest algorithms known to shall, declared in output order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, EnumIter)]
pub enum Algorithm {
	Sha1,
	Sha256,
	Sha512,
	Md5,
}

macro_rules! create_hasher {
	($alg:expr, $($pattern:pat => $hasher:expr),+ $(,)?) => {
		match $alg {
			$(
				$pattern => Box::new($hasher),
			)+
		}
	};
}

impl Algorithm {
	/// Every algorithm in canonical output order.
	pub fn all() -> Vec<Algorithm> {
		Algorithm::iter().collect()
	}

	/// Upper-case label printed in front of the digest.
	pub fn label(self) -> &'static str {
		match self {
			Algorithm::Sha1 => "SHA1",
			Algorithm::Sha256 => "SHA256",
			Algorithm::Sha512 => "SHA512",
			Algorithm::Md5 => "MD5",
		}
	}

	/// Lower-case identifier used for the CLI selection flags.
	pub fn flag(self) -> &'static str {
		match self {
			Algorithm::Sha1 => "sha1",
			Algorithm::Sha256 => "sha256",
			Algorithm::Sha512 => "sha512",
			Algorithm::Md5 => "md5",
		}
	}

	pub fn color(self) -> Color {
		match self {
			Algorithm::Sha1 => Color::Green,
			Algorithm::Sha256 => Color::Yellow,
			Algorithm::Sha512 => Color::Magenta,
			Algorithm::Md5 => Color::Blue,
		}
	}

	/// Fresh incremental hasher. Hashers are never shared between inputs.
	pub fn hasher(self) -> Box<dyn DynDigest> {
		create_hasher!(self,
			Algorithm::Sha1 => sha1::Sha1::new(),
			Algorithm::Sha256 => sha2::Sha256::new(),
			Algorithm::Sha512 => sha2::Sha512::new(),
			Algorithm::Md5 => md5::Md5::new(),
		)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn canonical_order_is_sha1_sha256_sha512_md5() {
		let labels: Vec<&str> =
			Algorithm::all().iter().map(|a| a.label()).collect();
		assert_eq!(labels, ["SHA1", "SHA256", "SHA512", "MD5"]);
	}

	#[test]
	fn hashers_produce_standard_lengths() {
		let sizes: Vec<usize> = Algorithm::all()
			.iter()
			.map(|alg| alg.hasher().output_size())
			.collect();
		assert_eq!(sizes, [20, 32, 64, 16]);
	}
}
