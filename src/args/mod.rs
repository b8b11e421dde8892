//! Schema-driven argument parsing.
//!
//! ```text
//! Schema text → Compile → Scan tokens → Marshal values → Args (queries)
//!                                   ↘ ErrorState (first error wins)
//! ```
//!
//! A schema such as `"l,p#,d*"` declares a boolean `-l`, an integer `-p` and
//! a text `-d`. Each stage is a pure function that can be unit-tested
//! independently; [`Args`] ties them together.

mod error;
mod marshal;
mod parser;
mod scanner;
mod schema;
mod store;

pub use error::{render, try_render, ErrorCode, ErrorState};
pub use marshal::{marshal, FlagValue, MarshalError};
pub use parser::Args;
pub use scanner::{scan, ScanOutcome, FLAG_PREFIX};
pub use schema::{FlagDef, FlagKind, Schema, SchemaError};
pub use store::ValueStore;
