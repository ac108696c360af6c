use anyhow::{Context, anyhow};
use aoc_runner::{Input, Kwargs, Logger, Value, solution};
use std::io::BufRead;

/// Position the dial points at before the first rotation
const DEFAULT_START: i64 = 50;
const DIAL_SIZE: i64 = 100;

pub struct Solution;

#[solution(year = 2025, problem = 1, tags = ["dial"])]
impl Solution {
    /// Rotations that leave the dial on zero
    fn part_1(input: &mut Input, kwargs: &Kwargs) -> anyhow::Result<u64> {
        let rotations = parse(input)?;
        Ok(turn(start(kwargs), &rotations)?.zero_stops)
    }

    /// Clicks that pass over or stop on zero
    fn part_2(input: &mut Input, kwargs: &Kwargs, logger: &Logger) -> anyhow::Result<u64> {
        let rotations = parse(input)?;
        logger.info(&[&"Parsed rotations", &rotations.len()], &[]);
        let counts = turn(start(kwargs), &rotations)?;
        logger.info(
            &[&"Dial settled"],
            &[("stops", &counts.zero_stops), ("passes", &counts.zero_passes)],
        );
        Ok(counts.zero_passes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ZeroCounts {
    zero_stops: u64,
    zero_passes: u64,
}

fn start(kwargs: &Kwargs) -> i64 {
    kwargs
        .get("start")
        .and_then(Value::as_i64)
        .unwrap_or(DEFAULT_START)
        .rem_euclid(DIAL_SIZE)
}

/// `L68` -> -68, `R14` -> 14
fn parse_rotation(line: &str) -> anyhow::Result<i64> {
    let negative = match line.as_bytes().first() {
        Some(b'L') => true,
        Some(b'R') => false,
        _ => return Err(anyhow!("first character need to be 'L' or 'R'")),
    };
    let value: i64 = line[1..].parse()?;
    if value < 0 {
        return Err(anyhow!("Rotate value must be non negative"));
    }
    Ok(if negative { -value } else { value })
}

fn parse(input: &mut Input) -> anyhow::Result<Vec<i64>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
        .map(|(idx, line)| {
            let line = line?;
            parse_rotation(line.trim()).with_context(|| format!("line {}", idx + 1))
        })
        .collect()
}

fn turn(start: i64, rotations: &[i64]) -> anyhow::Result<ZeroCounts> {
    let (_, zero_stops, zero_passes) = rotations.iter().try_fold(
        (start, 0u64, 0u64),
        |(dial, mut stops, mut passes), &rotation| {
            let moved = dial
                .checked_add(rotation)
                .ok_or_else(|| anyhow!("rotation {} is too large", rotation))?;
            if moved <= 0 && dial != 0 {
                passes += 1;
            }
            passes += (moved / DIAL_SIZE).unsigned_abs();
            let dial = moved.rem_euclid(DIAL_SIZE);
            if dial == 0 {
                stops += 1;
            }
            anyhow::Ok((dial, stops, passes))
        },
    )?;

    Ok(ZeroCounts {
        zero_stops,
        zero_passes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: [i64; 10] = [-68, -30, 48, -5, 60, -55, -1, -99, 14, -82];

    #[test]
    fn test_parse_rotation() {
        assert_eq!(parse_rotation("L68").unwrap(), -68);
        assert_eq!(parse_rotation("R14").unwrap(), 14);
        assert!(parse_rotation("X1").is_err());
        assert!(parse_rotation("R").is_err());
    }

    #[test]
    fn test_example_counts() {
        let counts = turn(DEFAULT_START, &EXAMPLE).unwrap();
        assert_eq!(counts.zero_stops, 3);
        assert_eq!(counts.zero_passes, 6);
    }

    #[test]
    fn test_full_turns_pass_zero_each_time() {
        let counts = turn(DEFAULT_START, &[1000]).unwrap();
        assert_eq!(counts.zero_passes, 10);
        assert_eq!(counts.zero_stops, 0);
    }

    #[test]
    fn test_huge_rotation_is_an_error() {
        let huge = parse_rotation("R9223372036854775807").unwrap();
        assert!(turn(DEFAULT_START, &[huge]).is_err());
        assert!(turn(0, &[huge]).is_ok());
    }

    #[test]
    fn test_start_kwarg_wraps() {
        let mut kwargs = Kwargs::new();
        assert_eq!(start(&kwargs), 50);
        kwargs.insert("start", -1i64);
        assert_eq!(start(&kwargs), 99);
    }
}
