//! Reporting sinks.
//!
//! A [`Report`] receives exactly one call per executed case. The default
//! [`ConsoleReporter`] writes pass lines to stdout and fail lines to stderr;
//! a runner can be handed any other sink instead.

use colored::Colorize;

use crate::outcome::Failure;
use crate::runner::TestStats;

pub trait Report {
    fn case_passed(&mut self, title: &str);
    fn case_failed(&mut self, title: &str, failure: &Failure);
    fn case_ignored(&mut self, title: &str);

    fn suite_started(&mut self, _name: &str, _planned: usize) {}
    fn suite_finished(&mut self, _stats: &TestStats) {}
}

/// Colored console output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Report for ConsoleReporter {
    fn case_passed(&mut self, title: &str) {
        println!("{} {}", "PASS".green().bold(), title);
    }

    fn case_failed(&mut self, title: &str, failure: &Failure) {
        eprintln!("{} {}: {}", "FAIL".red().bold(), title, failure);
    }

    fn case_ignored(&mut self, title: &str) {
        println!("{} {}", "SKIP".yellow(), title);
    }

    fn suite_started(&mut self, name: &str, planned: usize) {
        println!(
            "{}",
            format!("Running suite `{name}` ({planned} tests)...")
                .blue()
                .bold()
        );
    }

    fn suite_finished(&mut self, stats: &TestStats) {
        let summary = format!(
            "{} passed, {} failed, {} ignored, {} total",
            stats.passed, stats.failed, stats.ignored, stats.total
        );
        if stats.failed > 0 {
            eprintln!("{}", summary.red().bold());
        } else {
            println!("{}", summary.green().bold());
        }
    }
}
