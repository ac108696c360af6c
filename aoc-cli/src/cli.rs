//! CLI argument parsing using clap

use aoc_runner::{Arguments, DEFAULT_CLASS_NAME, DEFAULT_INPUT_NAME, Kwargs, RunRequest, Value};
use clap::Parser;

/// Run one part of a registered puzzle solution
#[derive(Parser, Debug)]
#[command(name = "aoc-run", about = "Run a registered Advent of Code solution", version)]
pub struct Args {
    /// Puzzle year
    pub year: u16,

    /// Problem number within the year
    pub problem_num: u32,

    /// Part to run; calls `part_<PART>` on the solution class
    pub part: u8,

    /// Name of the input file inside the problem directory
    #[arg(long, visible_alias = "inputname", default_value = DEFAULT_INPUT_NAME)]
    pub input_name: String,

    /// Solution class to use
    #[arg(long, visible_alias = "classname", default_value = DEFAULT_CLASS_NAME)]
    pub class_name: String,

    /// Extra positional arguments (comma-separated literals)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub args: Vec<Value>,

    /// Extra keyword arguments (comma-separated KEY=VALUE)
    #[arg(long, value_delimiter = ',', value_parser = parse_kwarg, allow_hyphen_values = true)]
    pub kwargs: Vec<(String, Value)>,
}

impl Args {
    pub fn into_request(self) -> RunRequest {
        RunRequest::new(self.year, self.problem_num, self.part)
            .with_input_name(self.input_name)
            .with_class_name(self.class_name)
            .with_args(self.args.into_iter().collect::<Arguments>())
            .with_kwargs(self.kwargs.into_iter().collect::<Kwargs>())
    }
}

/// `key=value` -> (key, literal)
fn parse_kwarg(s: &str) -> Result<(String, Value), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", s));
    }
    let value = value
        .parse::<Value>()
        .map_err(|never| -> String { match never {} })?;
    Ok((key.to_string(), value))
}
