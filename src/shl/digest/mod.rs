// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: shall
// File: src/shl/digest/mod.rs
// Author: shall maintainers
//
// Digest command group: the single-pass pipeline and its command handlers.

pub mod commands;
pub mod pipeline;

pub use pipeline::{
	compute, compute_with_chunk_size, DigestResult, InputSource,
	DEFAULT_CHUNK_SIZE,
};
