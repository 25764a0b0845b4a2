//! Seed command - generate a table of sample employees for trying things out

use crate::cmd::write_roster;
use crate::core::{EmployeeRecord, Roster, ZERO_CELL};
use clap::Args;
use rand::{rngs::StdRng, seq::index, Rng, SeedableRng};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SeedCommand {
    /// Number of sample employees
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Random seed, for a repeatable table
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write the table to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SeedCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let roster = sample_roster(&mut rng, self.count);
        write_roster(&roster, self.output.as_deref())
    }
}

/// Employees "Test 1".."Test n", each with a random time in a random set of months.
fn sample_roster<R: Rng>(rng: &mut R, count: usize) -> Roster {
    let employees = (1..=count)
        .map(|i| {
            let mut cells: [String; 12] = std::array::from_fn(|_| ZERO_CELL.to_string());
            let months = rng.gen_range(1..=12);
            for slot in index::sample(rng, 12, months) {
                cells[slot] = format!("{}h {:02}m", rng.gen_range(0..=10), rng.gen_range(0..60));
            }
            EmployeeRecord::from_cells(format!("Test {}", i), cells, Some(Decimal::ZERO))
        })
        .collect();
    Roster::new(employees)
}
