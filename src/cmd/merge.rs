//! Merge command - combine several employee tables into one

use crate::cmd::{read_roster, write_roster};
use crate::core::{ImportMode, Roster};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct MergeCommand {
    /// CSV files to combine, in order ("-" for stdin)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Write the combined table to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl MergeCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut roster = Roster::default();
        for (i, path) in self.files.iter().enumerate() {
            let mode = if i == 0 {
                ImportMode::Replace
            } else {
                ImportMode::Append
            };
            let imported = read_roster(path)?;
            roster.import(imported.into_employees(), mode);
        }
        write_roster(&roster, self.output.as_deref())
    }
}
