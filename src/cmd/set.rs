//! Set command - record the hours an employee worked in one month

use crate::cmd::{read_roster, write_roster};
use crate::core::parse_month;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SetCommand {
    /// CSV file of employees
    #[arg(short, long)]
    employees: PathBuf,

    /// Employee to update (the first one with this name)
    #[arg(short, long)]
    name: String,

    /// Month to update (name, abbreviation or 1-12)
    #[arg(short, long)]
    month: String,

    /// Time worked, e.g. "12h 30m"
    #[arg(short, long)]
    duration: String,
}

impl SetCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let month = parse_month(&self.month)?;
        let mut roster = read_roster(&self.employees)?;

        // A rejected value leaves the file as it was.
        let worked = roster.set_duration(&self.name, month, &self.duration)?;
        log::info!("{}: month {} set to {}", self.name, month, worked);

        write_roster(&roster, Some(&self.employees))
    }
}
