use crate::error::DatasetError;
use core_types::SalesRecord;
use std::io::Read;

/// Every column the fixed dashboard schema expects. The check is by name, not
/// position, so column order in the file does not matter.
pub const REQUIRED_COLUMNS: &[&str] = &[
    "Country",
    "year",
    "month",
    "Year-Month",
    "Line",
    "MainType",
    "Brand",
    "Item",
    "Brick",
    "Emp1Name",
    "Emp2Name",
    "Emp3Name",
    "Emp4Name",
    "Value",
    "TargetValue",
    "LastYearValue",
    "Quantity",
    "TargetQuantity",
    "LastYearQuantity",
];

/// Reads sales records from a CSV source.
///
/// The header row is validated against `REQUIRED_COLUMNS` before any row is
/// decoded, so a schema mismatch surfaces as a single clear diagnostic instead
/// of a per-row parse failure.
pub fn load_records<R: Read>(reader: R) -> Result<Vec<SalesRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == *column) {
            return Err(DatasetError::MissingColumn((*column).to_string()));
        }
    }

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: SalesRecord = result.map_err(|e| DatasetError::Row {
            row: e.position().map(|p| p.line()).unwrap_or_default(),
            source: e,
        })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HEADER: &str = "Country,year,month,Year-Month,Line,MainType,Brand,Item,Brick,\
Emp1Name,Emp2Name,Emp3Name,Emp4Name,Value,TargetValue,LastYearValue,\
Quantity,TargetQuantity,LastYearQuantity";

    #[test]
    fn decodes_rows_into_sales_records() {
        let csv = format!(
            "{HEADER}\n\
Jordan,2023,4,2023-04,Line A,Pharma,BrandX,Item 1,Amman East,Alia,,Omar,,100.5,80,50,10,8,5\n"
        );

        let records = load_records(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.country, "Jordan");
        assert_eq!(record.year, 2023);
        assert_eq!(record.month, 4);
        assert_eq!(record.period, "2023-04");
        assert_eq!(record.value, dec!(100.5));
        assert_eq!(record.emp1_name.as_deref(), Some("Alia"));
        assert_eq!(record.emp2_name, None);
        let names: Vec<&str> = record.employee_names().collect();
        assert_eq!(names, vec!["Alia", "Omar"]);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        // Header without the Brick column.
        let csv = "Country,year,month,Year-Month,Line,MainType,Brand,Item,\
Emp1Name,Emp2Name,Emp3Name,Emp4Name,Value,TargetValue,LastYearValue,\
Quantity,TargetQuantity,LastYearQuantity\n";

        let err = load_records(csv.as_bytes()).unwrap_err();
        match err {
            DatasetError::MissingColumn(column) => assert_eq!(column, "Brick"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn malformed_row_reports_its_line_number() {
        let csv = format!(
            "{HEADER}\n\
Jordan,2023,4,2023-04,Line A,Pharma,BrandX,Item 1,Amman East,Alia,,,,100,80,50,10,8,5\n\
Jordan,not-a-year,4,2023-04,Line A,Pharma,BrandX,Item 1,Amman East,Alia,,,,100,80,50,10,8,5\n"
        );

        let err = load_records(csv.as_bytes()).unwrap_err();
        match err {
            DatasetError::Row { row, .. } => assert_eq!(row, 3),
            other => panic!("expected Row error, got {other:?}"),
        }
    }
}
