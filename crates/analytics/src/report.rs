use core_types::Unit;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One group's summed total, keyed by a single dimension value (e.g. a
/// country). Feeds the choropleth map and the per-country histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupTotal {
    pub key: String,
    pub total: Decimal,
}

/// A per-(country, year) percentage: growth over the prior year, or
/// achievement against target. Groups whose denominator sum is zero are never
/// emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryYearRate {
    pub country: String,
    pub year: i32,
    pub pct: Decimal,
}

/// One slice of a pie-style distribution, sorted largest-first. The largest
/// slice is flagged so the presentation layer can pull it out for emphasis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub total: Decimal,
    pub emphasized: bool,
}

/// One row of a ranked top-N table (top bricks, top employees).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub label: String,
    pub total: Decimal,
}

/// One point of the monthly trend: the actual, target, and prior-year sums
/// for a calendar period, emitted in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// "YYYY-MM" period label.
    pub period: String,
    pub actual: Decimal,
    pub target: Decimal,
    pub last_year: Decimal,
}

/// A zero-filled 2-D pivot of summed totals: `cells[r][c]` is the sum for
/// `(row_labels[r], col_labels[c])`. Axes span exactly the values observed in
/// the input, sorted ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub cells: Vec<Vec<Decimal>>,
}

impl Heatmap {
    /// An empty pivot, produced when the filtered input has no records.
    pub fn empty() -> Self {
        Self {
            row_labels: Vec::new(),
            col_labels: Vec::new(),
            cells: Vec::new(),
        }
    }
}

/// The five scalar metrics shown in the dashboard's overview header.
///
/// The two percentages are `Option` because a filter can select a subset
/// whose target or prior-year sum is zero (e.g. only newly launched,
/// target-less items); `None` means "not applicable", never a division error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    pub total: Decimal,
    pub total_target: Decimal,
    pub total_last_year: Decimal,
    pub growth_pct: Option<Decimal>,
    pub achievement_pct: Option<Decimal>,
}

/// Everything one dashboard page needs for a given (filtered records, unit)
/// pair: the overview metrics plus the eleven derived tables, in the order
/// the page renders them.
///
/// This struct is the engine's final output and the data transfer object
/// handed to any presentation layer (HTTP JSON, terminal tables, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub unit: Unit,
    pub summary: SummaryMetrics,
    pub country_totals: Vec<GroupTotal>,
    pub country_distribution: Vec<GroupTotal>,
    pub country_growth: Vec<CountryYearRate>,
    pub country_achievement: Vec<CountryYearRate>,
    pub top_bricks: Vec<RankedEntry>,
    pub trend: Vec<TrendPoint>,
    pub monthly_heatmap: Heatmap,
    pub line_distribution: Vec<PieSlice>,
    pub main_type_distribution: Vec<PieSlice>,
    pub line_by_country_heatmap: Heatmap,
    pub top_employees: Vec<RankedEntry>,
}
