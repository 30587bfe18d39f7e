//! Low-level source access for the Vesper lexer.
//!
//! This crate is standalone: no `vesper_*` dependencies, only `memchr`.
//! It provides two things:
//!
//! - [`SourceBuffer`]: a validated view of a source unit, enforcing the
//!   `u32` byte-offset cap the rest of the compiler relies on.
//! - [`Cursor`]: forward-only iteration over Unicode scalar values with
//!   line/column bookkeeping and a few bulk skip helpers.
//!
//! The cursor knows nothing about tokens. All token structure lives in
//! `vesper_lexer`, built exclusively from these primitives.

mod cursor;
mod source_buffer;

pub use cursor::{Cursor, CursorState};
pub use source_buffer::{SourceBuffer, SourceError};
