//! # Sales Dataset
//!
//! Loads the delimited sales table once at startup and holds it as an
//! immutable, in-memory record set. Every aggregation pass reads from this
//! handle; nothing in the system mutates it after load.
//!
//! A load failure (missing file, missing required column, malformed row) is
//! fatal by design: the dashboard never starts in a partial or degraded state.

use core_types::SalesRecord;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

pub mod error;
pub mod loader;

pub use error::DatasetError;
pub use loader::{REQUIRED_COLUMNS, load_records};

/// The immutable, fully-loaded sales table.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

/// The distinct values of each filterable dimension, sorted. This is what a
/// filter UI offers in its multi-select controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionCatalog {
    pub countries: Vec<String>,
    pub years: Vec<i32>,
    pub main_types: Vec<String>,
    pub brands: Vec<String>,
    pub items: Vec<String>,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// Loads the dataset from a CSV file at `path`.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let records = load_records(file)?;
        tracing::info!(rows = records.len(), path = %path.display(), "Loaded sales dataset.");
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collects the distinct values of the five filterable dimensions.
    pub fn dimensions(&self) -> DimensionCatalog {
        let mut countries = BTreeSet::new();
        let mut years = BTreeSet::new();
        let mut main_types = BTreeSet::new();
        let mut brands = BTreeSet::new();
        let mut items = BTreeSet::new();

        for record in &self.records {
            countries.insert(record.country.clone());
            years.insert(record.year);
            main_types.insert(record.main_type.clone());
            brands.insert(record.brand.clone());
            items.insert(record.item.clone());
        }

        DimensionCatalog {
            countries: countries.into_iter().collect(),
            years: years.into_iter().collect(),
            main_types: main_types.into_iter().collect(),
            brands: brands.into_iter().collect(),
            items: items.into_iter().collect(),
        }
    }
}
