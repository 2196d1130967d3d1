// This module holds the pieces the generators share: the host-facing error type and the
// text helpers (capitalization, trailing periods, centering, border lines, line
// splitting). The generators build their output exclusively from these helpers so that
// column widths and punctuation behave identically in the stack diagram and in the
// procedure header.

//! Shared infrastructure for the asmdoc generators.

pub mod error;
pub mod text;

pub use error::{DocError, DocResult};
