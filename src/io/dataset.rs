//! Defect dataset loading.
//!
//! The dataset is a CSV file with one defect per row and Spanish column
//! names (see [`crate::testkit::DATASET_HEADER`]). Rows that cannot be
//! decoded, or that leave a required field blank, fail the whole load with
//! [`Error::Dataset`].

use crate::core::{DefectRecord, Error, Result};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn read_defects(path: &Path) -> Result<Vec<DefectRecord>> {
    let file = File::open(path).map_err(|e| {
        Error::from(e).with_context(format!("cannot open dataset {}", path.display()))
    })?;
    let records = parse_defects(file)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded defect dataset");
    Ok(records)
}

pub fn parse_defects<R: Read>(reader: R) -> Result<Vec<DefectRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(|e| Error::dataset(&e))?.clone();
    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|e| Error::dataset(&e))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let record: DefectRecord = row.deserialize(Some(&headers)).map_err(|e| Error::Dataset {
            line,
            message: e.to_string(),
        })?;
        if let Some(field) = record.missing_field() {
            return Err(Error::Dataset {
                line,
                message: format!("required field '{}' is blank", field),
            });
        }
        records.push(record);
    }
    Ok(records)
}

/// Group records by discovery date, keeping dataset order within each day.
pub fn group_by_day(records: Vec<DefectRecord>) -> BTreeMap<NaiveDate, Vec<DefectRecord>> {
    let mut days: BTreeMap<NaiveDate, Vec<DefectRecord>> = BTreeMap::new();
    for record in records {
        days.entry(record.date).or_default().push(record);
    }
    days
}

/// The last `count` distinct days in chronological order.
pub fn recent_days(
    mut days: BTreeMap<NaiveDate, Vec<DefectRecord>>,
    count: usize,
) -> Vec<(NaiveDate, Vec<DefectRecord>)> {
    let skip = days.len().saturating_sub(count);
    if let Some(first_kept) = days.keys().nth(skip).copied() {
        days = days.split_off(&first_kept);
    } else {
        days.clear();
    }
    days.into_iter().collect()
}
