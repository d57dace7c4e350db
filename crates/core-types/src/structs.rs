use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One row of the sales table.
///
/// The serde renames pin the struct to the dataset's fixed CSV schema; field
/// names stay idiomatic on the Rust side. Up to four salespeople can be
/// credited on a single record, and any of the name columns may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Country")]
    pub country: String,
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// The "Year-Month" period label, e.g. "2023-04".
    #[serde(rename = "Year-Month")]
    pub period: String,
    #[serde(rename = "Line")]
    pub line: String,
    #[serde(rename = "MainType")]
    pub main_type: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Item")]
    pub item: String,
    /// Fine-grained sales-territory subdivision within the country.
    #[serde(rename = "Brick")]
    pub brick: String,
    #[serde(rename = "Emp1Name")]
    pub emp1_name: Option<String>,
    #[serde(rename = "Emp2Name")]
    pub emp2_name: Option<String>,
    #[serde(rename = "Emp3Name")]
    pub emp3_name: Option<String>,
    #[serde(rename = "Emp4Name")]
    pub emp4_name: Option<String>,
    #[serde(rename = "Value")]
    pub value: Decimal,
    #[serde(rename = "TargetValue")]
    pub target_value: Decimal,
    #[serde(rename = "LastYearValue")]
    pub last_year_value: Decimal,
    #[serde(rename = "Quantity")]
    pub quantity: Decimal,
    #[serde(rename = "TargetQuantity")]
    pub target_quantity: Decimal,
    #[serde(rename = "LastYearQuantity")]
    pub last_year_quantity: Decimal,
}

impl SalesRecord {
    /// The non-empty salesperson names credited on this record.
    pub fn employee_names(&self) -> impl Iterator<Item = &str> {
        [
            &self.emp1_name,
            &self.emp2_name,
            &self.emp3_name,
            &self.emp4_name,
        ]
        .into_iter()
        .filter_map(|name| name.as_deref())
        .filter(|name| !name.is_empty())
    }
}

/// The user's multi-select filter state: one allowed-value set per filterable
/// dimension. An empty set means "no constraint on this dimension", never
/// "exclude everything".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    pub countries: HashSet<String>,
    pub years: HashSet<i32>,
    pub main_types: HashSet<String>,
    pub brands: HashSet<String>,
    pub items: HashSet<String>,
}

impl FilterSelection {
    /// True when no dimension carries a constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.countries.is_empty()
            && self.years.is_empty()
            && self.main_types.is_empty()
            && self.brands.is_empty()
            && self.items.is_empty()
    }

    /// A record passes iff it passes every dimension test (logical AND).
    pub fn matches(&self, record: &SalesRecord) -> bool {
        (self.countries.is_empty() || self.countries.contains(&record.country))
            && (self.years.is_empty() || self.years.contains(&record.year))
            && (self.main_types.is_empty() || self.main_types.contains(&record.main_type))
            && (self.brands.is_empty() || self.brands.contains(&record.brand))
            && (self.items.is_empty() || self.items.contains(&record.item))
    }
}
