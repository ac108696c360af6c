//! Solution classes, their part callables and the provider interface

use crate::args::{Arguments, Kwargs};
use crate::error::{LookupError, SolveError};
use crate::input::Input;
use crate::logger::Logger;
use crate::search_path::SearchPaths;
use std::fmt::{self, Debug};

/// Year and problem number of a puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProblemId {
    pub year: u16,
    pub problem: u32,
}

impl ProblemId {
    pub fn new(year: u16, problem: u32) -> Self {
        Self { year, problem }
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.year, self.problem)
    }
}

/// Textual representation of the value a part returned
#[derive(Clone, PartialEq, Eq)]
pub struct Answer(String);

impl Answer {
    /// Capture the `Debug` representation of `value`
    pub fn from_value<T: Debug + ?Sized>(value: &T) -> Self {
        Self(format!("{:?}", value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Already a representation; printing it again would add another layer of quotes
impl Debug for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a part callable can receive
pub struct Invocation<'a> {
    /// Open puzzle input
    pub input: &'a mut Input,
    pub args: &'a Arguments,
    pub kwargs: &'a Kwargs,
    /// Problem directory followed by the dependency directories
    pub paths: &'a SearchPaths,
    /// Present only when the part declares a `logger` parameter
    pub logger: Option<&'a Logger>,
}

/// Value a part returned, formatted into an [`Answer`] once timing has stopped
pub type PartValue = Box<dyn Debug>;

/// Uniform signature every part callable is compiled to
pub type PartFn = fn(&mut Invocation<'_>) -> Result<PartValue, SolveError>;

/// One `part_<n>` callable of a solution class
#[derive(Clone, Copy)]
pub struct Part {
    pub number: u8,
    /// Name as written in the solution, e.g. `part_1`
    pub name: &'static str,
    /// Whether the signature has a `logger` parameter
    pub accepts_logger: bool,
    pub run: PartFn,
}

impl Debug for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Part")
            .field("number", &self.number)
            .field("name", &self.name)
            .field("accepts_logger", &self.accepts_logger)
            .finish_non_exhaustive()
    }
}

/// A resolved solution class for one problem
#[derive(Debug, Clone, Copy)]
pub struct SolutionModule {
    pub id: ProblemId,
    pub class: &'static str,
    pub parts: &'static [Part],
}

impl SolutionModule {
    /// Name the module is known by, e.g. `2015/1::Solution`
    pub fn name(&self) -> String {
        format!("{}::{}", self.id, self.class)
    }

    /// Resolve `part_<part>` by naming convention
    pub fn part(&self, part: u8) -> Result<&'static Part, LookupError> {
        self.parts
            .iter()
            .find(|p| p.number == part)
            .ok_or_else(|| LookupError::PartNotFound {
                module: self.name(),
                part,
            })
    }
}

/// Anything that can hand out solution classes by identifier
pub trait SolutionProvider {
    /// Resolve the class registered for `id` under `class`
    fn import(&self, id: ProblemId, class: &str) -> Result<SolutionModule, LookupError>;

    /// Resolve a single part callable
    fn lookup(&self, id: ProblemId, class: &str, part: u8) -> Result<&'static Part, LookupError> {
        self.import(id, class)?.part(part)
    }
}
