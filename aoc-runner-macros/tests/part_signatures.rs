use aoc_runner::{
    Arguments, Input, Invocation, Kwargs, Logger, ProblemId, RegistryBuilder, RunError,
    RunRequest, Runner, SearchPaths, SolutionLayout, SolutionProvider, SolutionRegistry,
    SolveError, Value, solution,
};
use std::fs;
use std::io::BufRead;
use tempfile::TempDir;

pub struct Solution;

#[solution(year = 3001, problem = 1, tags = ["macro-test"])]
impl Solution {
    fn part_1(input: &mut Input) -> usize {
        input.lines().count()
    }

    fn part_2(input: &mut Input, logger: &Logger) -> Result<String, std::io::Error> {
        let text = input.read_all()?;
        logger.info(&[&"read", &text.len()], &[]);
        Ok(text.trim().to_string())
    }

    fn part_3(_input: &mut Input, args: &Arguments, kwargs: &Kwargs) -> i64 {
        let base = args.get(0).and_then(Value::as_i64).unwrap_or(0);
        let offset = kwargs.get("offset").and_then(Value::as_i64).unwrap_or(0);
        base + offset
    }

    fn part_4(_input: &mut Input, _paths: &SearchPaths) {}

    #[allow(dead_code)]
    fn helper() -> u8 {
        7
    }
}

pub struct Fast;

#[solution(year = 3001, problem = 1, class = "Quick")]
impl Fast {
    fn part_1(_input: &mut Input) -> Result<u8, String> {
        Err("not yet".to_string())
    }
}

fn registry() -> SolutionRegistry {
    RegistryBuilder::new()
        .register_solution_plugins(|plugin| plugin.year == 3001)
        .unwrap()
        .build()
}

fn root_with_input(contents: &str) -> TempDir {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("3001").join("1");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("input"), contents).unwrap();
    root
}

#[test]
fn test_parts_collected_in_order() {
    let registry = registry();
    let module = registry.import(ProblemId::new(3001, 1), "Solution").unwrap();

    let names: Vec<&str> = module.parts.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["part_1", "part_2", "part_3", "part_4"]);

    let numbers: Vec<u8> = module.parts.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn test_logger_detected_from_signature() {
    let registry = registry();
    let id = ProblemId::new(3001, 1);

    let flags: Vec<bool> = (1..=4)
        .map(|part| registry.lookup(id, "Solution", part).unwrap().accepts_logger)
        .collect();
    assert_eq!(flags, vec![false, true, false, false]);
}

#[test]
fn test_class_name_override() {
    let registry = registry();
    let classes: Vec<&str> = registry.classes(ProblemId::new(3001, 1)).collect();
    assert_eq!(classes, vec!["Quick", "Solution"]);
}

#[test]
fn test_runs_through_runner() {
    let root = root_with_input("a\nb\n");
    let registry = registry();
    let (logger, captured) = Logger::capture();
    let mut runner = Runner::new(&registry, SolutionLayout::new(root.path()), logger);

    let report = runner.run(&RunRequest::new(3001, 1, 1)).unwrap();
    assert_eq!(report.answer.as_str(), "2");

    let report = runner.run(&RunRequest::new(3001, 1, 2)).unwrap();
    assert_eq!(report.answer.as_str(), "\"a\\nb\"");
    assert!(captured.lines().iter().any(|l| l.ends_with("\"read\", 4")));

    let mut kwargs = Kwargs::new();
    kwargs.insert("offset", 2i64);
    let request = RunRequest::new(3001, 1, 3)
        .with_args(Arguments::new(vec![Value::Int(40)]))
        .with_kwargs(kwargs);
    assert_eq!(runner.run(&request).unwrap().answer.as_str(), "42");

    let report = runner.run(&RunRequest::new(3001, 1, 4)).unwrap();
    assert_eq!(report.answer.as_str(), "()");
}

#[test]
fn test_result_error_becomes_solve_failure() {
    let root = root_with_input("");
    let registry = registry();
    let (logger, _) = Logger::capture();
    let mut runner = Runner::new(&registry, SolutionLayout::new(root.path()), logger);

    let err = runner
        .run(&RunRequest::new(3001, 1, 1).with_class_name("Quick"))
        .unwrap_err();
    assert!(matches!(err, RunError::Solve(SolveError::Failed(_))));
    assert_eq!(err.to_string(), "Solve failed: not yet");
}

#[test]
fn test_missing_logger_rejected() {
    let root = root_with_input("x");
    let registry = registry();
    let part = registry
        .lookup(ProblemId::new(3001, 1), "Solution", 2)
        .unwrap();

    let mut input = Input::open(root.path().join("3001/1/input")).unwrap();
    let args = Arguments::default();
    let kwargs = Kwargs::default();
    let paths = SearchPaths::new();
    let mut invocation = Invocation {
        input: &mut input,
        args: &args,
        kwargs: &kwargs,
        paths: &paths,
        logger: None,
    };

    let err = (part.run)(&mut invocation).unwrap_err();
    assert!(matches!(err, SolveError::MissingLogger(2)));
}
