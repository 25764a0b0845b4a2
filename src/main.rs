use clap::{Parser, Subcommand};

use tipc::cmd::{
    add::AddCommand, calculate::CalculateCommand, merge::MergeCommand, remove::RemoveCommand,
    schema::SchemaCommand, seed::SeedCommand, set::SetCommand, validate::ValidateCommand,
};

#[derive(Parser, Debug)]
#[command(
    name = "tipc",
    version,
    about = "Share a tip pool between employees by the hours they worked"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate each employee's share of the tips for a range of months
    Calculate(CalculateCommand),
    /// Check the employee table for hours that cannot be read
    Validate(ValidateCommand),
    /// Add an employee
    Add(AddCommand),
    /// Set the hours an employee worked in a month
    Set(SetCommand),
    /// Remove an employee
    Remove(RemoveCommand),
    /// Combine employee tables
    Merge(MergeCommand),
    /// Generate sample employees
    Seed(SeedCommand),
    /// Print the employee table format
    Schema(SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Calculate(cmd) => cmd.exec(),
        Command::Validate(cmd) => cmd.exec(),
        Command::Add(cmd) => cmd.exec(),
        Command::Set(cmd) => cmd.exec(),
        Command::Remove(cmd) => cmd.exec(),
        Command::Merge(cmd) => cmd.exec(),
        Command::Seed(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
