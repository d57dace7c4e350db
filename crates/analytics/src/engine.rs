use crate::report::{
    CountryYearRate, DashboardReport, GroupTotal, Heatmap, PieSlice, RankedEntry, SummaryMetrics,
    TrendPoint,
};
use core_types::{SalesRecord, Unit};
use rust_decimal::Decimal;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

/// A stateless calculator deriving every dashboard table from a filtered
/// record set and a unit selection.
///
/// All operations recompute from scratch on each call; the engine itself
/// holds only the ranking depth for the top-N tables.
#[derive(Debug, Clone)]
pub struct AnalyticsEngine {
    top_n: usize,
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self { top_n: 10 }
    }
}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the default top-10 ranking depth.
    pub fn with_top_n(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Derives the full dashboard payload for one (filtered records, unit)
    /// pair: the overview metrics plus all eleven tables.
    pub fn dashboard(&self, records: &[SalesRecord], unit: Unit) -> DashboardReport {
        tracing::debug!(rows = records.len(), %unit, "Deriving dashboard report.");

        DashboardReport {
            unit,
            summary: self.summary(records, unit),
            country_totals: self.country_totals(records, unit),
            country_distribution: self.country_distribution(records, unit),
            country_growth: self.country_growth(records, unit),
            country_achievement: self.country_achievement(records, unit),
            top_bricks: self.top_bricks(records, unit),
            trend: self.trend(records, unit),
            monthly_heatmap: self.monthly_heatmap(records, unit),
            line_distribution: self.line_distribution(records, unit),
            main_type_distribution: self.main_type_distribution(records, unit),
            line_by_country_heatmap: self.line_by_country_heatmap(records, unit),
            top_employees: self.top_employees(records, unit),
        }
    }

    /// The five scalar metrics of the overview header.
    ///
    /// The growth and achievement percentages are `None` when their
    /// denominator sum is zero, consistent with the exclusion policy the
    /// grouped tables apply.
    pub fn summary(&self, records: &[SalesRecord], unit: Unit) -> SummaryMetrics {
        let total: Decimal = records.iter().map(|r| unit.actual(r)).sum();
        let total_target: Decimal = records.iter().map(|r| unit.target(r)).sum();
        let total_last_year: Decimal = records.iter().map(|r| unit.last_year(r)).sum();

        let growth_pct = (!total_last_year.is_zero())
            .then(|| (total - total_last_year) / total_last_year * Decimal::from(100));
        let achievement_pct =
            (!total_target.is_zero()).then(|| total / total_target * Decimal::from(100));

        SummaryMetrics {
            total,
            total_target,
            total_last_year,
            growth_pct,
            achievement_pct,
        }
    }

    /// Summed unit per country, one row per country, in first-seen order.
    /// Feeds the choropleth map.
    pub fn country_totals(&self, records: &[SalesRecord], unit: Unit) -> Vec<GroupTotal> {
        grouped_sum(records, |r| r.country.clone(), unit)
            .into_iter()
            .map(|(key, total)| GroupTotal { key, total })
            .collect()
    }

    /// Summed unit per country, sorted ascending by total for the horizontal
    /// histogram's display order.
    pub fn country_distribution(&self, records: &[SalesRecord], unit: Unit) -> Vec<GroupTotal> {
        let mut groups = grouped_sum(records, |r| r.country.clone(), unit);
        groups.sort_by(|a, b| a.1.cmp(&b.1));
        groups
            .into_iter()
            .map(|(key, total)| GroupTotal { key, total })
            .collect()
    }

    /// Year-over-year growth percentage per (country, year).
    ///
    /// growth% = (Σ actual − Σ last_year) / Σ last_year × 100. Groups whose
    /// prior-year sum is zero are excluded, not emitted as zero or infinity.
    pub fn country_growth(&self, records: &[SalesRecord], unit: Unit) -> Vec<CountryYearRate> {
        country_year_sums(records, unit, Unit::last_year)
            .into_iter()
            .filter(|(_, _, last_year)| !last_year.is_zero())
            .map(|((country, year), actual, last_year)| CountryYearRate {
                country,
                year,
                pct: (actual - last_year) / last_year * Decimal::from(100),
            })
            .collect()
    }

    /// Achievement-against-target percentage per (country, year), rounded to
    /// one decimal place. Groups whose target sum is zero are excluded.
    pub fn country_achievement(&self, records: &[SalesRecord], unit: Unit) -> Vec<CountryYearRate> {
        country_year_sums(records, unit, Unit::target)
            .into_iter()
            .filter(|(_, _, target)| !target.is_zero())
            .map(|((country, year), actual, target)| CountryYearRate {
                country,
                year,
                pct: (actual / target * Decimal::from(100)).round_dp(1),
            })
            .collect()
    }

    /// Pie-ready distribution of the unit across product lines, largest
    /// slice first and flagged for emphasis.
    pub fn line_distribution(&self, records: &[SalesRecord], unit: Unit) -> Vec<PieSlice> {
        self.distribution(records, unit, |r| r.line.clone())
    }

    /// Pie-ready distribution of the unit across main product types.
    pub fn main_type_distribution(&self, records: &[SalesRecord], unit: Unit) -> Vec<PieSlice> {
        self.distribution(records, unit, |r| r.main_type.clone())
    }

    fn distribution(
        &self,
        records: &[SalesRecord],
        unit: Unit,
        label_of: impl Fn(&SalesRecord) -> String,
    ) -> Vec<PieSlice> {
        let mut groups = grouped_sum(records, label_of, unit);
        groups.sort_by(|a, b| b.1.cmp(&a.1));
        groups
            .into_iter()
            .enumerate()
            .map(|(i, (label, total))| PieSlice {
                label,
                total,
                emphasized: i == 0,
            })
            .collect()
    }

    /// The top bricks by summed unit across all (country, brick) pairs,
    /// labelled "Country - Brick". Strict truncation after a full stable
    /// descending sort, so ties keep their first-seen order.
    pub fn top_bricks(&self, records: &[SalesRecord], unit: Unit) -> Vec<RankedEntry> {
        let mut groups = grouped_sum(records, |r| (r.country.clone(), r.brick.clone()), unit);
        groups.sort_by(|a, b| b.1.cmp(&a.1));
        groups.truncate(self.top_n);
        groups
            .into_iter()
            .map(|((country, brick), total)| RankedEntry {
                label: format!("{country} - {brick}"),
                total,
            })
            .collect()
    }

    /// Monthly trend: actual, target, and prior-year sums per calendar
    /// period, in chronological order.
    pub fn trend(&self, records: &[SalesRecord], unit: Unit) -> Vec<TrendPoint> {
        let mut index: HashMap<(i32, u32), usize> = HashMap::new();
        let mut groups: Vec<((i32, u32), [Decimal; 3])> = Vec::new();

        for record in records {
            let key = (record.year, record.month);
            let i = match index.get(&key) {
                Some(&i) => i,
                None => {
                    index.insert(key, groups.len());
                    groups.push((key, [Decimal::ZERO; 3]));
                    groups.len() - 1
                }
            };
            let sums = &mut groups[i].1;
            sums[0] += unit.actual(record);
            sums[1] += unit.target(record);
            sums[2] += unit.last_year(record);
        }

        groups.sort_by_key(|(key, _)| *key);
        groups
            .into_iter()
            .map(|((year, month), [actual, target, last_year])| TrendPoint {
                period: format!("{year:04}-{month:02}"),
                actual,
                target,
                last_year,
            })
            .collect()
    }

    /// Month-by-year pivot of the summed unit: rows are the observed months,
    /// columns the observed years, missing cells zero-filled.
    pub fn monthly_heatmap(&self, records: &[SalesRecord], unit: Unit) -> Heatmap {
        pivot(
            records,
            unit,
            |r| r.month,
            |r| r.year,
            |month| month.to_string(),
            |year| year.to_string(),
        )
    }

    /// Line-by-country pivot of the summed unit, zero-filled.
    pub fn line_by_country_heatmap(&self, records: &[SalesRecord], unit: Unit) -> Heatmap {
        pivot(
            records,
            unit,
            |r| r.line.clone(),
            |r| r.country.clone(),
            |line| line.clone(),
            |country| country.clone(),
        )
    }

    /// The top salespeople by summed unit.
    ///
    /// The four employee-name columns are unpivoted: every non-empty name on
    /// a record is credited with the record's full unit value. A record with
    /// four names contributes its whole value four times — credit every
    /// contributor, not split credit.
    pub fn top_employees(&self, records: &[SalesRecord], unit: Unit) -> Vec<RankedEntry> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut groups: Vec<(String, Decimal)> = Vec::new();

        for record in records {
            let amount = unit.actual(record);
            for name in record.employee_names() {
                match index.get(name) {
                    Some(&i) => groups[i].1 += amount,
                    None => {
                        index.insert(name.to_string(), groups.len());
                        groups.push((name.to_string(), amount));
                    }
                }
            }
        }

        groups.sort_by(|a, b| b.1.cmp(&a.1));
        groups.truncate(self.top_n);
        groups
            .into_iter()
            .map(|(label, total)| RankedEntry { label, total })
            .collect()
    }
}

/// Sums the unit's actual value per group key, emitting groups in first-seen
/// order so later stable sorts break ties by emission order.
fn grouped_sum<K, F>(records: &[SalesRecord], key_of: F, unit: Unit) -> Vec<(K, Decimal)>
where
    K: Eq + Hash + Clone,
    F: Fn(&SalesRecord) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Decimal)> = Vec::new();

    for record in records {
        let key = key_of(record);
        match index.get(&key) {
            Some(&i) => groups[i].1 += unit.actual(record),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, unit.actual(record)));
            }
        }
    }
    groups
}

/// Sums the actual value and one comparison field (target or prior-year) per
/// (country, year) group, in first-seen order.
fn country_year_sums(
    records: &[SalesRecord],
    unit: Unit,
    comparison: fn(&Unit, &SalesRecord) -> Decimal,
) -> Vec<((String, i32), Decimal, Decimal)> {
    let mut index: HashMap<(String, i32), usize> = HashMap::new();
    let mut groups: Vec<((String, i32), Decimal, Decimal)> = Vec::new();

    for record in records {
        let key = (record.country.clone(), record.year);
        match index.get(&key) {
            Some(&i) => {
                groups[i].1 += unit.actual(record);
                groups[i].2 += comparison(&unit, record);
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, unit.actual(record), comparison(&unit, record)));
            }
        }
    }
    groups
}

/// Builds a zero-filled 2-D pivot of summed unit values. Axes span exactly
/// the row/column keys observed in the input, sorted ascending.
fn pivot<R, C, FR, FC, LR, LC>(
    records: &[SalesRecord],
    unit: Unit,
    row_of: FR,
    col_of: FC,
    row_label: LR,
    col_label: LC,
) -> Heatmap
where
    R: Ord + Hash + Clone,
    C: Ord + Hash + Clone,
    FR: Fn(&SalesRecord) -> R,
    FC: Fn(&SalesRecord) -> C,
    LR: Fn(&R) -> String,
    LC: Fn(&C) -> String,
{
    if records.is_empty() {
        return Heatmap::empty();
    }

    let mut rows: BTreeSet<R> = BTreeSet::new();
    let mut cols: BTreeSet<C> = BTreeSet::new();
    let mut sums: HashMap<(R, C), Decimal> = HashMap::new();

    for record in records {
        let row = row_of(record);
        let col = col_of(record);
        rows.insert(row.clone());
        cols.insert(col.clone());
        *sums.entry((row, col)).or_insert(Decimal::ZERO) += unit.actual(record);
    }

    let cells = rows
        .iter()
        .map(|row| {
            cols.iter()
                .map(|col| {
                    sums.get(&(row.clone(), col.clone()))
                        .copied()
                        .unwrap_or(Decimal::ZERO)
                })
                .collect()
        })
        .collect();

    Heatmap {
        row_labels: rows.iter().map(&row_label).collect(),
        col_labels: cols.iter().map(&col_label).collect(),
        cells,
    }
}
