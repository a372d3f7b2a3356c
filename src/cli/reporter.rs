// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! CLI output reporter with colored formatting

use super::runner::RenderOutcome;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report a finished render
    pub fn report_render(file: &str, outcome: &RenderOutcome, written: Option<&str>) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Rendered:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());
        println!(
            "  {} {}",
            "Trees:".bright_black(),
            outcome.roots.len().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Nodes:".bright_black(),
            outcome.node_count().to_string().cyan()
        );
        println!(
            "  {} {}",
            "Lines:".bright_black(),
            outcome.source.lines().count().to_string().cyan()
        );
        if let Some(path) = written {
            println!("  {} {}", "Output:".bright_black(), path.cyan());
        }
        println!(
            "  {} {}",
            "Time:".bright_black(),
            Self::format_duration(outcome.duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    /// Format duration for display
    pub fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
