//! Vesper IR - Shared Front-End Types
//!
//! This crate contains the data structures exchanged between the lexer
//! and later compiler stages:
//! - [`Position`] and [`Span`] for source locations
//! - [`Token`] and [`TokenKind`] for lexer output
//!
//! Every type here is a plain value: `Clone + Eq + Hash + Debug`, no
//! interior mutability, no references back into the source text. Tokens
//! that need source-derived text carry their own owned copy.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod span;
mod token;

pub use span::{Position, Span};
pub use token::{Token, TokenKind};
