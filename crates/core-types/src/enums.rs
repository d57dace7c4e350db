use crate::error::CoreError;
use crate::structs::SalesRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The measured quantity being analyzed: monetary value or physical quantity.
///
/// Every sales record carries an actual, a planning target, and a prior-year
/// figure for both units. Selecting a unit selects which triple of fields the
/// aggregations read, so there is no dynamic field-name lookup anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Value,
    Quantity,
}

impl Unit {
    /// The record's actual figure for this unit.
    pub fn actual(&self, record: &SalesRecord) -> Decimal {
        match self {
            Unit::Value => record.value,
            Unit::Quantity => record.quantity,
        }
    }

    /// The record's planning target for this unit.
    pub fn target(&self, record: &SalesRecord) -> Decimal {
        match self {
            Unit::Value => record.target_value,
            Unit::Quantity => record.target_quantity,
        }
    }

    /// The record's prior-year figure for this unit.
    pub fn last_year(&self, record: &SalesRecord) -> Decimal {
        match self {
            Unit::Value => record.last_year_value,
            Unit::Quantity => record.last_year_quantity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Value => "Value",
            Unit::Quantity => "Quantity",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "value" => Ok(Unit::Value),
            "quantity" => Ok(Unit::Quantity),
            other => Err(CoreError::UnknownUnit(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_record() -> SalesRecord {
        SalesRecord {
            country: "Jordan".to_string(),
            year: 2023,
            month: 4,
            period: "2023-04".to_string(),
            line: "Line A".to_string(),
            main_type: "Pharma".to_string(),
            brand: "BrandX".to_string(),
            item: "Item 1".to_string(),
            brick: "Amman East".to_string(),
            emp1_name: Some("Alia".to_string()),
            emp2_name: None,
            emp3_name: None,
            emp4_name: None,
            value: dec!(100),
            target_value: dec!(80),
            last_year_value: dec!(50),
            quantity: dec!(10),
            target_quantity: dec!(8),
            last_year_quantity: dec!(5),
        }
    }

    #[test]
    fn unit_selects_the_matching_field_triple() {
        let record = sample_record();

        assert_eq!(Unit::Value.actual(&record), dec!(100));
        assert_eq!(Unit::Value.target(&record), dec!(80));
        assert_eq!(Unit::Value.last_year(&record), dec!(50));

        assert_eq!(Unit::Quantity.actual(&record), dec!(10));
        assert_eq!(Unit::Quantity.target(&record), dec!(8));
        assert_eq!(Unit::Quantity.last_year(&record), dec!(5));
    }

    #[test]
    fn unit_parses_case_insensitively() {
        assert_eq!("value".parse::<Unit>().unwrap(), Unit::Value);
        assert_eq!("Quantity".parse::<Unit>().unwrap(), Unit::Quantity);
        assert!("revenue".parse::<Unit>().is_err());
    }
}
