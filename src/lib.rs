//! `lorem` - length-targeted placeholder text
//!
//! Generates "lorem ipsum" text sized in bytes, characters, lines, or raw
//! repetitions of a source phrase, wrapped with a configurable paragraph
//! wrapper. The [`generate`] module holds the growth loop that hits an exact
//! length; [`wrap`] is the wrapper it drives.

// Crate-level lint configuration
#![warn(unsafe_code)] // Unsafe code needs justification (required for ioctl FFI)
#![allow(clippy::cast_possible_truncation)] // Intentional length casts
#![allow(clippy::cast_sign_loss)] // Column budgets are clamped before casting
#![allow(clippy::cast_possible_wrap)] // Widths never approach isize::MAX
#![allow(clippy::module_name_repetitions)] // Allow wrap::WrapOptions etc
#![allow(clippy::struct_excessive_bools)] // Wrapper options are a bag of flags
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Builder setters are obvious

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod output;
pub mod source;
pub mod terminal;
pub mod unicode;
pub mod wrap;

// Re-export core types at crate root
pub use config::{Config, Target};
pub use error::{Error, Result};
pub use generate::{GROWTH_STEP, generate, write_to};
pub use output::Destination;
pub use source::{LOREM_IPSUM, repeat_phrase};
pub use wrap::{TextWrapper, WrapOptions};
