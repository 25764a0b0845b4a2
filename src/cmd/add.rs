//! Add command - append a new employee with no hours recorded

use crate::cmd::{read_roster, write_roster};
use crate::core::Roster;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AddCommand {
    /// CSV file of employees, created if it does not exist
    #[arg(short, long)]
    employees: PathBuf,

    /// Name of the new employee
    #[arg(short, long)]
    name: String,
}

impl AddCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut roster = if self.employees.exists() {
            read_roster(&self.employees)?
        } else {
            log::info!("Creating {}", self.employees.display());
            Roster::default()
        };

        roster.add_employee(&self.name)?;
        write_roster(&roster, Some(&self.employees))
    }
}
