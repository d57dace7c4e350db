//! End-to-end derivation over a small but realistic dataset: filter the
//! records the way a dashboard request would, then check the composed report.

use analytics::{AnalyticsEngine, filter};
use core_types::{FilterSelection, SalesRecord, Unit};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[allow(clippy::too_many_arguments)]
fn record(
    country: &str,
    year: i32,
    month: u32,
    line: &str,
    brick: &str,
    employee: &str,
    value: Decimal,
    target_value: Decimal,
    last_year_value: Decimal,
) -> SalesRecord {
    SalesRecord {
        country: country.to_string(),
        year,
        month,
        period: format!("{year:04}-{month:02}"),
        line: line.to_string(),
        main_type: "Pharma".to_string(),
        brand: "BrandX".to_string(),
        item: "Item 1".to_string(),
        brick: brick.to_string(),
        emp1_name: Some(employee.to_string()),
        emp2_name: None,
        emp3_name: None,
        emp4_name: None,
        value,
        target_value,
        last_year_value,
        quantity: value * dec!(2),
        target_quantity: target_value * dec!(2),
        last_year_quantity: last_year_value * dec!(2),
    }
}

fn dataset() -> Vec<SalesRecord> {
    vec![
        record("Jordan", 2023, 1, "Line A", "Amman East", "Alia", dec!(100), dec!(80), dec!(50)),
        record("Jordan", 2023, 2, "Line B", "Amman West", "Omar", dec!(50), dec!(20), dec!(0)),
        record("Syria", 2023, 1, "Line A", "Damascus", "Rami", dec!(70), dec!(70), dec!(35)),
        record("Syria", 2022, 12, "Line A", "Damascus", "Rami", dec!(30), dec!(40), dec!(30)),
        record("Libya", 2023, 2, "Line B", "Tripoli", "Huda", dec!(40), dec!(0), dec!(0)),
    ]
}

#[test]
fn filtered_dashboard_for_one_country() {
    let records = dataset();
    let mut selection = FilterSelection::default();
    selection.countries.insert("Jordan".to_string());

    let subset = filter(&records, &selection);
    let report = AnalyticsEngine::new().dashboard(&subset, Unit::Value);

    // Overview header: totals over the filtered subset only.
    assert_eq!(report.summary.total, dec!(150));
    assert_eq!(report.summary.total_target, dec!(100));
    assert_eq!(report.summary.total_last_year, dec!(50));
    assert_eq!(report.summary.growth_pct, Some(dec!(200)));
    assert_eq!(report.summary.achievement_pct, Some(dec!(150)));

    // One country, one growth/achievement group (2023).
    assert_eq!(report.country_totals.len(), 1);
    assert_eq!(report.country_totals[0].total, dec!(150));
    assert_eq!(report.country_growth.len(), 1);
    assert_eq!(report.country_growth[0].pct, dec!(200));
    assert_eq!(report.country_achievement[0].pct, dec!(150.0));

    // Both bricks rank, Jordan-labelled.
    assert_eq!(report.top_bricks.len(), 2);
    assert_eq!(report.top_bricks[0].label, "Jordan - Amman East");
}

#[test]
fn unfiltered_dashboard_spans_the_whole_dataset() {
    let records = dataset();
    let subset = filter(&records, &FilterSelection::default());
    assert_eq!(subset, records);

    let report = AnalyticsEngine::new().dashboard(&subset, Unit::Value);

    assert_eq!(report.summary.total, dec!(290));
    assert_eq!(report.country_totals.len(), 3);

    // Libya's 2023 group has zero target and zero prior-year sums: excluded
    // from both ratio tables.
    assert!(report.country_growth.iter().all(|g| g.country != "Libya"));
    assert!(report.country_achievement.iter().all(|a| a.country != "Libya"));

    // Ascending display order for the histogram.
    let totals: Vec<Decimal> = report.country_distribution.iter().map(|g| g.total).collect();
    let mut sorted = totals.clone();
    sorted.sort();
    assert_eq!(totals, sorted);

    // Trend is chronological: Dec 2022 before Jan 2023 before Feb 2023.
    let periods: Vec<&str> = report.trend.iter().map(|p| p.period.as_str()).collect();
    assert_eq!(periods, vec!["2022-12", "2023-01", "2023-02"]);

    // Pivot completeness: every observed (month, year) pair has a cell, and
    // unobserved combinations inside the observed axes are zero.
    let heatmap = &report.monthly_heatmap;
    assert_eq!(heatmap.row_labels, vec!["1", "2", "12"]);
    assert_eq!(heatmap.col_labels, vec!["2022", "2023"]);
    assert_eq!(heatmap.cells[0], vec![dec!(0), dec!(170)]); // month 1
    assert_eq!(heatmap.cells[1], vec![dec!(0), dec!(90)]); // month 2
    assert_eq!(heatmap.cells[2], vec![dec!(30), dec!(0)]); // month 12

    // Line-by-country pivot covers the full cross of observed axes.
    let lines = &report.line_by_country_heatmap;
    assert_eq!(lines.row_labels, vec!["Line A", "Line B"]);
    assert_eq!(lines.col_labels, vec!["Jordan", "Libya", "Syria"]);
    assert_eq!(lines.cells[0], vec![dec!(100), dec!(0), dec!(100)]);
    assert_eq!(lines.cells[1], vec![dec!(50), dec!(40), dec!(0)]);

    // Largest pie slice is flagged.
    assert_eq!(report.line_distribution[0].label, "Line A");
    assert!(report.line_distribution[0].emphasized);

    // Rami is credited across two records.
    assert_eq!(report.top_employees[0].label, "Alia");
    let rami = report
        .top_employees
        .iter()
        .find(|e| e.label == "Rami")
        .unwrap();
    assert_eq!(rami.total, dec!(100));
}

#[test]
fn quantity_unit_reads_the_quantity_fields() {
    let records = dataset();
    let report = AnalyticsEngine::new().dashboard(&records, Unit::Quantity);

    // Quantities are 2x the values in the fixture.
    assert_eq!(report.summary.total, dec!(580));
    assert_eq!(report.country_totals[0].total, dec!(300));
    // Ratios are scale-invariant, so growth matches the Value page.
    assert_eq!(report.country_growth[0].pct, dec!(200));
}

#[test]
fn selection_matching_nothing_is_a_valid_state() {
    let records = dataset();
    let mut selection = FilterSelection::default();
    selection.years.insert(1999);

    let subset = filter(&records, &selection);
    assert!(subset.is_empty());

    let report = AnalyticsEngine::new().dashboard(&subset, Unit::Value);
    assert_eq!(report.summary.total, Decimal::ZERO);
    assert_eq!(report.summary.growth_pct, None);
    assert!(report.country_totals.is_empty());
    assert!(report.trend.is_empty());
    assert!(report.monthly_heatmap.row_labels.is_empty());
}
