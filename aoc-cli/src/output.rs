//! Output formatting for run reports

use aoc_runner::RunReport;
use colored::Colorize;
use std::time::Duration;

/// An RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const AQUAMARINE: Rgb = Rgb(127, 255, 212);
pub const MAGENTA: Rgb = Rgb(255, 0, 255);

/// Prints the result block with a colour gradient
pub struct OutputFormatter {
    start: Rgb,
    end: Rgb,
}

impl OutputFormatter {
    pub fn new() -> Self {
        Self {
            start: AQUAMARINE,
            end: MAGENTA,
        }
    }

    /// Print the block for a finished run
    pub fn print_report(&self, report: &RunReport) {
        println!("{}", gradient(&report_text(report), self.start, self.end));
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Uncoloured text of the result block
pub fn report_text(report: &RunReport) -> String {
    format!(
        "Running {}\nSolution: {}.{}\nYear: {}\nProblem: {}\nPart: {}\nStarted: {}\nTime taken: {}\nResult: {}",
        report.problem_dir.display(),
        report.module,
        report.callable,
        report.id.year,
        report.id.problem,
        report.part,
        report.started_at.format("%H:%M:%S"),
        format_duration(report.elapsed),
        report.answer,
    )
}

/// Colour each visible character along a linear gradient
fn gradient(text: &str, start: Rgb, end: Rgb) -> String {
    let visible = text.chars().filter(|c| *c != '\n').count();
    let mut out = String::with_capacity(text.len() * 20);
    let mut index = 0;
    for ch in text.chars() {
        if ch == '\n' {
            out.push('\n');
            continue;
        }
        let Rgb(r, g, b) = color_at(start, end, index, visible);
        out.push_str(&ch.to_string().truecolor(r, g, b).to_string());
        index += 1;
    }
    out
}

/// Colour of the `index`-th of `count` evenly spaced steps
fn color_at(start: Rgb, end: Rgb, index: usize, count: usize) -> Rgb {
    if count <= 1 {
        return start;
    }
    let t = index as f64 / (count - 1) as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Rgb(lerp(start.0, end.0), lerp(start.1, end.1), lerp(start.2, end.2))
}

/// Format a Duration for display
fn format_duration(d: Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::{Answer, ProblemId};
    use chrono::Local;
    use std::path::PathBuf;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(999)), "999µs");
        assert_eq!(format_duration(Duration::from_micros(1500)), "1.50ms");
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.50s");
    }

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(color_at(AQUAMARINE, MAGENTA, 0, 10), AQUAMARINE);
        assert_eq!(color_at(AQUAMARINE, MAGENTA, 9, 10), MAGENTA);
        assert_eq!(color_at(AQUAMARINE, MAGENTA, 0, 1), AQUAMARINE);
        assert_eq!(color_at(Rgb(0, 0, 0), Rgb(200, 100, 0), 1, 3), Rgb(100, 50, 0));
    }

    #[test]
    fn test_report_text() {
        let report = RunReport {
            id: ProblemId::new(2015, 1),
            part: 2,
            module: "2015/1::Solution".to_string(),
            callable: "part_2",
            problem_dir: PathBuf::from("/srv/aoc/2015/1"),
            answer: Answer::from_value(&1795),
            elapsed: Duration::from_micros(42),
            started_at: Local::now(),
        };

        let text = report_text(&report);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Running /srv/aoc/2015/1");
        assert_eq!(lines[1], "Solution: 2015/1::Solution.part_2");
        assert_eq!(lines[2], "Year: 2015");
        assert_eq!(lines[3], "Problem: 1");
        assert_eq!(lines[4], "Part: 2");
        assert_eq!(lines[6], "Time taken: 42µs");
        assert_eq!(lines[7], "Result: 1795");
    }
}
