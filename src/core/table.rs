//! The flat employee table: one row per employee, a column per month and the tip share.

use super::allocate::round_to_currency;
use super::employee::EmployeeRecord;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use tipc_derive::CsvSchema;

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("row {row}: employee name is empty")]
    EmptyName { row: usize },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Column description generated by `#[derive(CsvSchema)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvField {
    pub name: &'static str,
    pub required: bool,
    pub description: &'static str,
}

/// A row exactly as stored in the CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, CsvSchema)]
pub struct EmployeeRow {
    /// Employee name
    #[serde(rename = "Name")]
    pub name: String,
    /// Time worked in January, e.g. "12h 30m" (empty means none)
    #[serde(rename = "January", default)]
    pub january: String,
    /// Time worked in February
    #[serde(rename = "February", default)]
    pub february: String,
    /// Time worked in March
    #[serde(rename = "March", default)]
    pub march: String,
    /// Time worked in April
    #[serde(rename = "April", default)]
    pub april: String,
    /// Time worked in May
    #[serde(rename = "May", default)]
    pub may: String,
    /// Time worked in June
    #[serde(rename = "June", default)]
    pub june: String,
    /// Time worked in July
    #[serde(rename = "July", default)]
    pub july: String,
    /// Time worked in August
    #[serde(rename = "August", default)]
    pub august: String,
    /// Time worked in September
    #[serde(rename = "September", default)]
    pub september: String,
    /// Time worked in October
    #[serde(rename = "October", default)]
    pub october: String,
    /// Time worked in November
    #[serde(rename = "November", default)]
    pub november: String,
    /// Time worked in December
    #[serde(rename = "December", default)]
    pub december: String,
    /// Share of the tips from the last calculation, e.g. "£25.00"
    #[serde(rename = "Tip Share", default)]
    pub tip_share: String,
}

impl EmployeeRow {
    fn into_record(self, row: usize) -> Result<EmployeeRecord, TableError> {
        if self.name.trim().is_empty() {
            return Err(TableError::EmptyName { row });
        }
        let share = parse_share(&self.tip_share);
        let cells = [
            self.january,
            self.february,
            self.march,
            self.april,
            self.may,
            self.june,
            self.july,
            self.august,
            self.september,
            self.october,
            self.november,
            self.december,
        ];
        Ok(EmployeeRecord::from_cells(self.name, cells, share))
    }
}

impl From<&EmployeeRecord> for EmployeeRow {
    fn from(record: &EmployeeRecord) -> Self {
        let [january, february, march, april, may, june, july, august, september, october, november, december] =
            record.cells().clone();
        EmployeeRow {
            name: record.name.clone(),
            january,
            february,
            march,
            april,
            may,
            june,
            july,
            august,
            september,
            october,
            november,
            december,
            tip_share: record.share.map(format_share).unwrap_or_default(),
        }
    }
}

/// `£` followed by the amount to two decimal places.
pub fn format_share(amount: Decimal) -> String {
    let amount = round_to_currency(amount);
    if amount < Decimal::ZERO {
        format!("-£{:.2}", amount.abs())
    } else {
        format!("£{:.2}", amount)
    }
}

/// Read a tip share cell; the `£` is optional. Unreadable text is dropped.
pub fn parse_share(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let amount = text.strip_prefix('£').unwrap_or(text).trim();
    match amount.parse::<Decimal>() {
        Ok(share) => Some(share),
        Err(_) => {
            log::warn!("Ignoring unreadable tip share '{}'", text);
            None
        }
    }
}

/// Read employees from CSV with a header row. Row numbers in errors count data rows from 1.
pub fn read_employees<R: Read>(reader: R) -> Result<Vec<EmployeeRecord>, TableError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut employees = Vec::new();
    for (i, result) in rdr.deserialize::<EmployeeRow>().enumerate() {
        let row = result?;
        employees.push(row.into_record(i + 1)?);
    }
    log::info!("Read {} employee records", employees.len());
    Ok(employees)
}

/// Write employees as CSV with the standard header, even when there are none.
pub fn write_employees<'a, I, W>(employees: I, writer: W) -> Result<(), TableError>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
    W: Write,
{
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(EmployeeRow::csv_header())?;
    for employee in employees {
        wtr.serialize(EmployeeRow::from(employee))?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const TABLE: &str = "\
Name,January,February,March,April,May,June,July,August,September,October,November,December,Tip Share
Alice,10h 00m,,5h 7m,0h 00m,,,,,,,3H 15M,,£25.00
Bob,30h 00m,bad cell,,,,,,,,,,,£75.00
";

    #[test]
    fn reads_rows_in_order() {
        let employees = read_employees(TABLE.as_bytes()).unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].name, "Alice");
        assert_eq!(employees[0].cell(3), Ok("5h 7m"));
        assert_eq!(employees[0].cell(11), Ok("3H 15M"));
        assert_eq!(employees[0].share, Some(dec!(25.00)));
        assert_eq!(employees[1].name, "Bob");
        assert_eq!(employees[1].cell(2), Ok("bad cell"));
    }

    #[test]
    fn export_reproduces_import() {
        let employees = read_employees(TABLE.as_bytes()).unwrap();
        let mut out = Vec::new();
        write_employees(&employees, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), TABLE);
    }

    #[test]
    fn header_matches_column_order() {
        let header = EmployeeRow::csv_header();
        assert_eq!(header.len(), 14);
        assert_eq!(header[0], "Name");
        assert_eq!(&header[1..13], &crate::core::MONTH_NAMES[..]);
        assert_eq!(header[13], "Tip Share");
    }

    #[test]
    fn schema_marks_only_name_required() {
        let schema = EmployeeRow::csv_schema();
        assert!(schema[0].required);
        assert!(schema[1..].iter().all(|f| !f.required));
        assert_eq!(schema[13].description, "Share of the tips from the last calculation, e.g. \"£25.00\"");
    }

    #[test]
    fn missing_month_columns_default_to_empty() {
        let employees = read_employees("Name,March\nCarol,4h 00m\n".as_bytes()).unwrap();
        assert_eq!(employees[0].cell(3), Ok("4h 00m"));
        assert_eq!(employees[0].cell(1), Ok(""));
        assert_eq!(employees[0].share, None);
    }

    #[test]
    fn empty_name_rejected() {
        let err = read_employees("Name,January\nAlice,1h 00m\n ,2h 00m\n".as_bytes()).unwrap_err();
        assert!(matches!(err, TableError::EmptyName { row: 2 }));
    }

    #[test]
    fn empty_roster_still_has_header() {
        let mut out = Vec::new();
        write_employees(Vec::<EmployeeRecord>::new().iter(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name,January,February,March,April,May,June,July,August,September,October,November,December,Tip Share\n"
        );
    }

    #[test]
    fn share_text() {
        assert_eq!(format_share(dec!(25)), "£25.00");
        assert_eq!(format_share(dec!(0.015)), "£0.02");
        assert_eq!(format_share(dec!(-3.5)), "-£3.50");
        assert_eq!(parse_share("£12.34"), Some(dec!(12.34)));
        assert_eq!(parse_share("7.5"), Some(dec!(7.5)));
        assert_eq!(parse_share(""), None);
        assert_eq!(parse_share("lots"), None);
    }
}
