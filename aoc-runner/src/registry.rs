//! Solution registry built from the compile-time plugin table

use crate::error::{LookupError, RegistrationError};
use crate::solution::{Part, ProblemId, SolutionModule, SolutionProvider};
use std::collections::BTreeMap;

/// Plugin information for automatic solution registration
///
/// Normally emitted by the `#[solution(...)]` attribute, but can be
/// submitted by hand:
///
/// ```no_run
/// use aoc_runner::{Invocation, Part, PartValue, SolutionPlugin, SolveError};
///
/// fn part_1(inv: &mut Invocation<'_>) -> Result<PartValue, SolveError> {
///     let text = inv.input.read_all()?;
///     Ok(Box::new(text.lines().count()))
/// }
///
/// aoc_runner::inventory::submit! {
///     SolutionPlugin {
///         year: 2015,
///         problem: 1,
///         class: "Solution",
///         parts: &[Part { number: 1, name: "part_1", accepts_logger: false, run: part_1 }],
///         tags: &["manual"],
///     }
/// }
/// ```
pub struct SolutionPlugin {
    pub year: u16,
    pub problem: u32,
    /// Class name the parts are grouped under, `Solution` by convention
    pub class: &'static str,
    pub parts: &'static [Part],
    /// Optional tags for filtering
    pub tags: &'static [&'static str],
}

impl SolutionPlugin {
    pub fn id(&self) -> ProblemId {
        ProblemId::new(self.year, self.problem)
    }

    fn module(&self) -> SolutionModule {
        SolutionModule {
            id: self.id(),
            class: self.class,
            parts: self.parts,
        }
    }
}

inventory::collect!(SolutionPlugin);

type Key = (ProblemId, &'static str);

/// Builder for constructing a [`SolutionRegistry`]
///
/// # Example
///
/// ```no_run
/// # use aoc_runner::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register_all_plugins()
///     .unwrap()
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    modules: BTreeMap<Key, SolutionModule>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single plugin
    ///
    /// Returns an error if the same class is already registered for the problem.
    pub fn register(mut self, plugin: &SolutionPlugin) -> Result<Self, RegistrationError> {
        let key = (plugin.id(), plugin.class);
        if self.modules.contains_key(&key) {
            return Err(RegistrationError::Duplicate {
                year: plugin.year,
                problem: plugin.problem,
                class: plugin.class.to_string(),
            });
        }
        self.modules.insert(key, plugin.module());
        Ok(self)
    }

    /// Register every plugin submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solution_plugins(|_| true)
    }

    /// Register the plugins for which `filter` returns `true`
    ///
    /// ```no_run
    /// # use aoc_runner::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solution_plugins(|plugin| plugin.year == 2015)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solution_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolutionPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolutionPlugin>() {
            if filter(plugin) {
                self = self.register(plugin)?;
            }
        }
        Ok(self)
    }

    /// Finalize into an immutable registry
    pub fn build(self) -> SolutionRegistry {
        SolutionRegistry {
            modules: self.modules,
        }
    }
}

/// Immutable table of solution classes keyed by problem and class name
#[derive(Debug)]
pub struct SolutionRegistry {
    modules: BTreeMap<Key, SolutionModule>,
}

impl SolutionRegistry {
    /// All registered classes in (year, problem, class) order
    pub fn iter(&self) -> impl Iterator<Item = &SolutionModule> {
        self.modules.values()
    }

    /// Classes registered for a single problem
    pub fn classes(&self, id: ProblemId) -> impl Iterator<Item = &'static str> + '_ {
        self.modules
            .keys()
            .filter(move |(key_id, _)| *key_id == id)
            .map(|(_, class)| *class)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl SolutionProvider for SolutionRegistry {
    fn import(&self, id: ProblemId, class: &str) -> Result<SolutionModule, LookupError> {
        self.modules
            .iter()
            .find(|((key_id, key_class), _)| *key_id == id && *key_class == class)
            .map(|(_, module)| *module)
            .ok_or_else(|| LookupError::SolutionNotFound {
                year: id.year,
                problem: id.problem,
                class: class.to_string(),
            })
    }
}
