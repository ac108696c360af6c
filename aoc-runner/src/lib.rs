//! Advent of Code Solution Runner
//!
//! Locates the solution for a puzzle identifier (year, problem number, part),
//! invokes the requested part with an open handle to the puzzle input, times
//! the call, logs the result and copies it to a clipboard.
//!
//! # Overview
//!
//! - [`Logger`]: timestamped `<time> | [<prefix>] | <objects> | <fields>` lines
//! - [`SolutionProvider`]: lookup of solution classes and their `part_<n>` callables
//! - [`SolutionRegistry`]: the provider built from plugins collected at link time
//! - [`Runner`]: the linear resolve, open, invoke, report procedure
//!
//! # Quick Example
//!
//! ```ignore
//! use aoc_runner::{
//!     Input, Logger, RegistryBuilder, RunRequest, Runner, SolutionLayout, solution,
//! };
//! use std::io::BufRead;
//!
//! pub struct Solution;
//!
//! #[solution(year = 2015, problem = 1)]
//! impl Solution {
//!     fn part_1(input: &mut Input) -> Result<usize, std::io::Error> {
//!         Ok(input.lines().count())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();
//! let mut runner = Runner::new(&registry, SolutionLayout::new("solutions"), Logger::stdout());
//! let report = runner.run(&RunRequest::new(2015, 1, 1)).unwrap();
//! println!("{}", report.answer);
//! ```
//!
//! # Part signatures
//!
//! The first parameter of a part always receives the input handle. Any other
//! parameter is bound by its name:
//!
//! | name     | type             |
//! |----------|------------------|
//! | `args`   | `&Arguments`     |
//! | `kwargs` | `&Kwargs`        |
//! | `paths`  | `&SearchPaths`   |
//! | `logger` | `&Logger`        |
//!
//! Only parts that declare `logger` are handed one. The returned value must be
//! `Debug + 'static`; it is formatted after the call has been timed.

mod args;
mod clipboard;
mod error;
mod input;
mod logger;
mod registry;
mod runner;
mod search_path;
mod solution;

// Re-export public API
pub use args::{Arguments, Kwargs, Value};
pub use clipboard::{Clipboard, MemoryClipboard, NoClipboard};
pub use error::{ClipboardError, LookupError, RegistrationError, RunError, SolveError};
pub use input::Input;
pub use logger::{CapturedLines, Field, Logger, format_line};
pub use registry::{RegistryBuilder, SolutionPlugin, SolutionRegistry};
pub use runner::{
    DEFAULT_CLASS_NAME, DEFAULT_INPUT_NAME, RunReport, RunRequest, Runner, SolutionLayout,
};
pub use search_path::{PathSpec, SearchPaths};
pub use solution::{
    Answer, Invocation, Part, PartFn, PartValue, ProblemId, SolutionModule, SolutionProvider,
};

// Re-export inventory for use by the attribute macro
pub use inventory;

// Re-export the attribute macro
pub use aoc_runner_macros::solution;
