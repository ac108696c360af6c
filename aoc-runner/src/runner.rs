//! Resolve, invoke and time a single solution part

use crate::args::{Arguments, Kwargs};
use crate::clipboard::{Clipboard, NoClipboard};
use crate::error::{LookupError, RunError};
use crate::input::Input;
use crate::logger::Logger;
use crate::search_path::{PathSpec, SearchPaths};
use crate::solution::{Answer, Invocation, ProblemId, SolutionProvider};
use chrono::{DateTime, Local};
use std::env;
use std::path::{self, Path, PathBuf};
use std::time::{Duration, Instant};

/// Input file name used when none is given
pub const DEFAULT_INPUT_NAME: &str = "input";
/// Class name used when none is given
pub const DEFAULT_CLASS_NAME: &str = "Solution";

/// Directory convention: `{root}/{year}/{problem}/{input_name}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionLayout {
    root: PathBuf,
}

impl SolutionLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn problem_dir(&self, id: ProblemId) -> PathBuf {
        self.root
            .join(id.year.to_string())
            .join(id.problem.to_string())
    }
}

/// What to run
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    pub year: u16,
    pub problem: u32,
    pub part: u8,
    pub input_name: String,
    pub class_name: String,
    pub args: Arguments,
    pub kwargs: Kwargs,
}

impl RunRequest {
    pub fn new(year: u16, problem: u32, part: u8) -> Self {
        Self {
            year,
            problem,
            part,
            input_name: DEFAULT_INPUT_NAME.to_string(),
            class_name: DEFAULT_CLASS_NAME.to_string(),
            args: Arguments::default(),
            kwargs: Kwargs::default(),
        }
    }

    pub fn id(&self) -> ProblemId {
        ProblemId::new(self.year, self.problem)
    }

    pub fn with_input_name(mut self, input_name: impl Into<String>) -> Self {
        self.input_name = input_name.into();
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_args(mut self, args: Arguments) -> Self {
        self.args = args;
        self
    }

    pub fn with_kwargs(mut self, kwargs: Kwargs) -> Self {
        self.kwargs = kwargs;
        self
    }
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub id: ProblemId,
    pub part: u8,
    /// Module name, e.g. `2015/1::Solution`
    pub module: String,
    /// Callable name, e.g. `part_1`
    pub callable: &'static str,
    pub problem_dir: PathBuf,
    pub answer: Answer,
    /// Time spent inside the part callable only
    pub elapsed: Duration,
    pub started_at: DateTime<Local>,
}

/// Runs solution parts from a [`SolutionProvider`]
pub struct Runner<'p, P: SolutionProvider + ?Sized> {
    provider: &'p P,
    layout: SolutionLayout,
    search_paths: SearchPaths,
    logger: Logger,
    clipboard: Box<dyn Clipboard>,
    change_dir: bool,
}

impl<'p, P: SolutionProvider + ?Sized> Runner<'p, P> {
    /// Runner with no clipboard and no working-directory change
    pub fn new(provider: &'p P, layout: SolutionLayout, logger: Logger) -> Self {
        Self {
            provider,
            layout,
            search_paths: SearchPaths::new(),
            logger,
            clipboard: Box::new(NoClipboard),
            change_dir: false,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Change into the problem directory for the duration of each run
    pub fn with_change_dir(mut self, change_dir: bool) -> Self {
        self.change_dir = change_dir;
        self
    }

    pub fn search_paths(&self) -> &SearchPaths {
        &self.search_paths
    }

    /// Declare dependency directories, see [`SearchPaths::add`]
    pub fn add_import_paths(&mut self, spec: &PathSpec) -> Result<(), RunError> {
        self.search_paths.add(spec, &self.logger)
    }

    /// Run one part and report its answer
    ///
    /// The input handle is closed before this returns, whether the part
    /// succeeded or not.
    pub fn run(&mut self, request: &RunRequest) -> Result<RunReport, RunError> {
        let id = request.id();
        let problem_dir = self.layout.problem_dir(id);
        if !problem_dir.is_dir() {
            let err = RunError::ProblemNotFound { path: problem_dir };
            self.logger.error(
                &err,
                &[&"Problem directory not found"],
                &[("year", &id.year), ("problem", &id.problem)],
            );
            return Err(err);
        }
        // Absolute before the working directory may change
        let problem_dir = path::absolute(&problem_dir).map_err(|source| RunError::WorkingDir {
            path: problem_dir.clone(),
            source,
        })?;

        let _cwd = if self.change_dir {
            Some(WorkingDirGuard::enter(&problem_dir)?)
        } else {
            None
        };

        let mut paths = self.search_paths.clone();
        paths.prepend(&problem_dir);

        let module = self
            .provider
            .import(id, &request.class_name)
            .map_err(|e| self.lookup_failed(e))?;
        let part = module.part(request.part).map_err(|e| self.lookup_failed(e))?;
        log::debug!(
            "resolved {}.{} (logger injected: {})",
            module.name(),
            part.name,
            part.accepts_logger
        );

        let input_path = problem_dir.join(&request.input_name);
        let mut input = match Input::open(&input_path) {
            Ok(input) => input,
            Err(source) => {
                let err = RunError::Input {
                    path: input_path,
                    source,
                };
                self.logger.error(&err, &[&"Cannot open input"], &[]);
                return Err(err);
            }
        };

        let mut invocation = Invocation {
            input: &mut input,
            args: &request.args,
            kwargs: &request.kwargs,
            paths: &paths,
            logger: part.accepts_logger.then_some(&self.logger),
        };

        let started_at = Local::now();
        let start = Instant::now();
        let outcome = (part.run)(&mut invocation);
        let elapsed = start.elapsed();
        drop(input);

        let answer = Answer::from_value(&*outcome?);

        self.logger.info(
            &[&"Time taken", &elapsed],
            &[("solution", &module.name()), ("part", &part.name)],
        );
        self.logger.info(&[&"Result", &answer], &[]);

        if let Err(e) = self.clipboard.copy(answer.as_str()) {
            log::warn!("answer not copied: {}", e);
        }

        Ok(RunReport {
            id,
            part: part.number,
            module: module.name(),
            callable: part.name,
            problem_dir,
            answer,
            elapsed,
            started_at,
        })
    }

    fn lookup_failed(&self, err: LookupError) -> RunError {
        self.logger.error(&err, &[&"Lookup failed"], &[]);
        RunError::Lookup(err)
    }
}

/// Restores the previous working directory on drop
struct WorkingDirGuard {
    previous: PathBuf,
}

impl WorkingDirGuard {
    fn enter(dir: &Path) -> Result<Self, RunError> {
        let to_err = |source| RunError::WorkingDir {
            path: dir.to_path_buf(),
            source,
        };
        let previous = env::current_dir().map_err(to_err)?;
        env::set_current_dir(dir).map_err(to_err)?;
        log::debug!("working directory is now {}", dir.display());
        Ok(Self { previous })
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            log::warn!(
                "could not restore working directory {}: {}",
                self.previous.display(),
                e
            );
        }
    }
}
