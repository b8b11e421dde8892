//! Schema-driven command-line flag parsing.
//!
//! ```
//! use flagschema::args::Args;
//!
//! let args = Args::new("l,p#,d*", &["-l", "-p", "8080", "-d", "/tmp"]).unwrap();
//! assert!(args.is_valid());
//! assert!(args.get_boolean('l'));
//! assert_eq!(args.get_int('p'), 8080);
//! assert_eq!(args.get_string('d'), "/tmp");
//! ```

pub mod args;
pub mod config;
pub mod logging;
pub mod report;
