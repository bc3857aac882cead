// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: shall
// File: lib.rs
// Author: shall maintainers

pub mod shl {
	pub mod algorithm;
	pub mod app;
	pub mod digest;
	pub mod error;
	pub mod output;
}

#[cfg(test)]
mod tests {
	use super::shl::algorithm::Algorithm;
	use hex_literal::hex;

	const PHRASE: &str =
		"Jeder wackere Bayer vertilgt bequem zwo Pfund Kalbshaxen.";

	fn one_shot(alg: Algorithm, data: &[u8]) -> Vec<u8> {
		let mut hasher = alg.hasher();
		hasher.update(data);
		hasher.finalize().into_vec()
	}

	#[test]
	fn test_sha1_phrase() {
		assert_eq!(
			one_shot(Algorithm::Sha1, PHRASE.as_bytes())[..],
			hex!("1C90817FE5067AB226A331D4E7454858F6DD966A")
		);
	}

	#[test]
	fn test_md5_abc() {
		assert_eq!(
			one_shot(Algorithm::Md5, b"abc")[..],
			hex!("900150983cd24fb0d6963f7d28e17f72")
		);
	}

	#[test]
	fn test_sha256_abc() {
		assert_eq!(
			one_shot(Algorithm::Sha256, b"abc")[..],
			hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
		);
	}

	#[test]
	fn test_sha512_abc() {
		assert_eq!(
			one_shot(Algorithm::Sha512, b"abc")[..],
			hex!("ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f")
		);
	}
}
