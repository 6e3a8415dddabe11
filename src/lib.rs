//! Compose regular expression patterns out of typed building blocks.
//!
//! A [`Pattern`] is built by chaining calls; nothing is rendered until one
//! of the render entry points is called, at which point the chain is
//! flattened into the final pattern text according to the active
//! [`Settings`].

pub mod compiling;
pub mod language;
pub mod pattern;
pub mod rendering;

pub use compiling::CompileOptions;
pub use language::{PatternError, Settings};
pub use pattern::{Pattern, Quantified};
