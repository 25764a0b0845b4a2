//! Calculate command - split the tip pool over a range of months

use crate::cmd::{read_roster, write_roster};
use crate::core::{format_share, Allocation, MonthRange, TipPool};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct CalculateCommand {
    /// CSV file of employees and monthly hours ("-" for stdin)
    #[arg(short, long)]
    employees: PathBuf,

    /// First month to include (name, abbreviation or 1-12)
    #[arg(short, long)]
    from: String,

    /// Last month to include; may be earlier in the year than --from to wrap over New Year
    #[arg(short, long)]
    to: String,

    /// Total tips to share out
    #[arg(long, allow_negative_numbers = true)]
    tips: Decimal,

    /// Output the updated employee table as CSV instead of a formatted table
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Output the allocation as JSON
    #[arg(long)]
    json: bool,

    /// Also write the updated employee table to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Row for the shares table output
#[derive(Debug, Tabled)]
struct ShareRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Worked")]
    worked: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Tip Share")]
    share: String,
}

impl CalculateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let range = MonthRange::parse(&self.from, &self.to)?;
        let pool = TipPool::new(self.tips)?;
        let mut roster = read_roster(&self.employees)?;

        let allocation = roster.calculate(&range, &pool)?;

        if let Some(path) = &self.output {
            write_roster(&roster, Some(path))?;
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&allocation)?);
        } else if self.csv {
            write_roster(&roster, None)?;
        } else {
            print_table(&allocation);
        }
        Ok(())
    }
}

fn print_table(allocation: &Allocation) {
    let rows: Vec<ShareRow> = allocation
        .shares
        .iter()
        .map(|s| ShareRow {
            name: s.name.clone(),
            worked: s.worked.to_string(),
            hours: format!("{:.2}", s.hours.round_dp(2)),
            share: format_share(s.amount),
        })
        .collect();

    println!();
    println!("TIP SHARES ({})", allocation.range);
    println!();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);

    println!();
    println!(
        "  Tips: {} | Hours: {:.2} | Per hour: {}",
        format_share(allocation.pool),
        allocation.total_hours.round_dp(2),
        format_per_hour(allocation.ratio)
    );
    println!(
        "  Shared: {} | Unallocated: {}",
        format_share(allocation.total_allocated()),
        format_share(allocation.drift())
    );
    println!();
}

fn format_per_hour(ratio: Decimal) -> String {
    format!("£{:.4}", ratio.round_dp(4))
}
