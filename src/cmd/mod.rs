pub mod add;
pub mod calculate;
pub mod merge;
pub mod remove;
pub mod schema;
pub mod seed;
pub mod set;
pub mod validate;

use crate::core::{read_employees, write_employees, Roster};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read the employee table from a CSV file (or stdin with "-")
pub fn read_roster(path: &Path) -> anyhow::Result<Roster> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<Roster> {
    let file = File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open {}: {}", path.display(), e))?;
    let employees = read_employees(BufReader::new(file))?;
    Ok(Roster::new(employees))
}

fn read_from_stdin() -> anyhow::Result<Roster> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    let employees = read_employees(io::Cursor::new(buffer))?;
    Ok(Roster::new(employees))
}

/// Write the employee table to `path`, or stdout when no path is given.
///
/// An existing file is replaced only once the whole table has been written.
pub fn write_roster(roster: &Roster, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            // written beside the target, then renamed over it
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            let mut file = NamedTempFile::new_in(dir)
                .map_err(|e| anyhow::anyhow!("cannot write {}: {}", path.display(), e))?;
            if let Ok(meta) = std::fs::metadata(path) {
                file.as_file().set_permissions(meta.permissions())?;
            }
            write_employees(roster.employees(), BufWriter::new(file.as_file_mut()))?;
            file.persist(path)
                .map_err(|e| anyhow::anyhow!("cannot write {}: {}", path.display(), e.error))?;
            log::info!("Wrote {} employees to {}", roster.len(), path.display());
        }
        None => write_employees(roster.employees(), io::stdout().lock())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EmployeeRecord;
    use std::fs;

    #[test]
    fn write_replaces_table_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("staff.csv");
        fs::write(&path, "old contents").unwrap();

        let roster = Roster::new(vec![EmployeeRecord::new("Alice")]);
        write_roster(&roster, Some(&path)).unwrap();

        let table = fs::read_to_string(&path).unwrap();
        assert!(table.starts_with("Name,January,"));
        assert!(table.contains("Alice,0h 00m,"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(read_roster(&path).unwrap(), roster);
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("staff.csv");

        let roster = Roster::new(vec![EmployeeRecord::new("Alice")]);
        assert!(write_roster(&roster, Some(&path)).is_err());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
