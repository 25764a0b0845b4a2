//! Validate command - find month cells that are not valid durations

use crate::cmd::read_roster;
use crate::core::{month_name, Roster};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// CSV file of employees and monthly hours ("-" for stdin)
    #[arg(short, long)]
    employees: PathBuf,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

/// A malformed cell for output
#[derive(Debug, Clone, Serialize)]
struct CellIssue {
    row: usize,
    name: String,
    month: String,
    value: String,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ValidationOutput {
    employee_count: usize,
    issue_count: usize,
    issues: Vec<CellIssue>,
}

impl ValidateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let roster = read_roster(&self.employees)?;
        let issues = find_issues(&roster);

        if self.json {
            let output = ValidationOutput {
                employee_count: roster.len(),
                issue_count: issues.len(),
                issues: issues.clone(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            print_text(&issues);
        }

        // Exit with code 1 if issues found
        if !issues.is_empty() {
            std::process::exit(1);
        }
        Ok(())
    }
}

fn find_issues(roster: &Roster) -> Vec<CellIssue> {
    roster
        .employees()
        .iter()
        .enumerate()
        .flat_map(|(i, employee)| {
            employee
                .malformed_cells()
                .into_iter()
                .map(move |(month, value)| CellIssue {
                    row: i + 1,
                    name: employee.name.clone(),
                    month: month_name(month).unwrap_or("?").to_string(),
                    value: value.to_string(),
                })
        })
        .collect()
}

fn print_text(issues: &[CellIssue]) {
    println!();
    println!("VALIDATION RESULTS");
    println!();

    if issues.is_empty() {
        println!("\u{2713} No issues found.");
        return;
    }

    println!("\u{26A0} {} issue(s) found:", issues.len());
    println!();
    for (i, issue) in issues.iter().enumerate() {
        println!(
            "  {}. Row {} ({}) {}: '{}'",
            i + 1,
            issue.row,
            issue.name,
            issue.month,
            issue.value
        );
        println!("     Expected hours and minutes like '12h 30m'; counted as zero");
        println!();
    }
}
