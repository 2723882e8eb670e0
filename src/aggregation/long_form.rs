//! Long-form reshape for grouped bar rendering.

use crate::aggregation::SummaryRow;
use crate::models::Measure;


/// One (category, measure) pair with its value.
///
/// The grouped-bar renderers expect exactly one value per pair, with
/// category driving cluster order and measure driving series order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRow {
    pub category: String,
    pub measure: Measure,
    pub value: i64,
}


/// Reshape aggregate rows into long form, category-major.
///
/// Category order is preserved from the input rows and measure order from
/// the given slice; no value is altered, so the output always has exactly
/// rows * measures entries.
pub fn melt(rows: &[SummaryRow], measures: &[Measure]) -> Vec<LongRow> {
    let mut long = Vec::with_capacity(rows.len() * measures.len());

    for row in rows {
        for &measure in measures {
            long.push(LongRow {
                category: row.label.clone(),
                measure,
                value: row.counts.get(measure),
            });
        }
    }

    long
}
