use anyhow::anyhow;
use aoc_runner::{Arguments, Input, Logger, Value, solution};

pub struct Solution;

#[solution(year = 2015, problem = 1, tags = ["easy"])]
impl Solution {
    /// Floor reached after following every instruction
    fn part_1(input: &mut Input) -> anyhow::Result<i64> {
        let steps = parse(&input.read_all()?)?;
        Ok(steps.iter().sum())
    }

    /// 1-based position of the first instruction that reaches the target floor
    ///
    /// The target defaults to the basement (-1) and can be overridden by the
    /// first positional argument.
    fn part_2(input: &mut Input, args: &Arguments, logger: &Logger) -> anyhow::Result<usize> {
        let target = args.get(0).and_then(Value::as_i64).unwrap_or(-1);
        let steps = parse(&input.read_all()?)?;
        logger.info(&[&"Looking for floor", &target], &[("steps", &steps.len())]);

        first_reaching(&steps, target).ok_or_else(|| anyhow!("floor {} is never reached", target))
    }
}

pub struct Scan;

/// Same answers without collecting the instructions first
#[solution(year = 2015, problem = 1, class = "Streaming")]
impl Scan {
    fn part_1(input: &mut Input) -> anyhow::Result<i64> {
        use std::io::Read;

        let mut floor = 0i64;
        for byte in input.bytes() {
            floor += step(byte?)?;
        }
        Ok(floor)
    }
}

fn step(byte: u8) -> anyhow::Result<i64> {
    match byte {
        b'(' => Ok(1),
        b')' => Ok(-1),
        b'\n' | b'\r' | b' ' => Ok(0),
        other => Err(anyhow!("unexpected character {:?}", other as char)),
    }
}

fn parse(text: &str) -> anyhow::Result<Vec<i64>> {
    text.bytes()
        .map(step)
        .filter(|s| !matches!(s, Ok(0)))
        .collect()
}

fn first_reaching(steps: &[i64], target: i64) -> Option<usize> {
    steps
        .iter()
        .scan(0i64, |floor, step| {
            *floor += step;
            Some(*floor)
        })
        .position(|floor| floor == target)
        .map(|idx| idx + 1)
}
