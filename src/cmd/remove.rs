//! Remove command - drop an employee from the table

use crate::cmd::{read_roster, write_roster};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RemoveCommand {
    /// CSV file of employees
    #[arg(short, long)]
    employees: PathBuf,

    /// Employee to remove; every row with this name is removed
    #[arg(short, long)]
    name: String,
}

impl RemoveCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut roster = read_roster(&self.employees)?;
        let removed = roster.remove_employee(&self.name)?;
        log::info!("Removed {} row(s) for '{}'", removed, self.name);
        write_roster(&roster, Some(&self.employees))
    }
}
