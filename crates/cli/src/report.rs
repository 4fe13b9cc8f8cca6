//! Loading position snapshots and printing reports.

use anyhow::{Context, Result};
use chrono::Utc;
use clmm_monitor_domain::prelude::*;
use prettytable::{Table, row};
use std::path::Path;

/// Reads a JSON array of position snapshots.
pub async fn load_positions(path: &Path) -> Result<Vec<TrackedPosition>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading positions from {}", path.display()))?;
    let positions = serde_json::from_str(&raw)
        .with_context(|| format!("parsing positions from {}", path.display()))?;
    Ok(positions)
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn status_cell(assessment: &ProximityAssessment) -> String {
    match assessment.range_side {
        Some(side) => format!("{} ({})", assessment.status, side),
        None => assessment.status.to_string(),
    }
}

/// One row per position with its classification and edge distances.
pub fn proximity_table(rows: &[(&TrackedPosition, ProximityAssessment)]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "Position", "Pool", "Lower", "Upper", "Current", "Status", "To lower %", "To upper %"
    ]);

    for (position, assessment) in rows {
        table.add_row(row![
            position.id,
            opt(position.pool.as_deref()),
            opt(position.tick_lower),
            opt(position.tick_upper),
            opt(assessment.current_tick.or(position.current_tick)),
            status_cell(assessment),
            opt(assessment.distance_to_lower_pct),
            opt(assessment.distance_to_upper_pct),
        ]);
    }
    table
}

/// Renders the warning lines for flagged positions.
pub fn flagged_lines(flagged: &[FlaggedPosition]) -> Vec<String> {
    flagged
        .iter()
        .map(|f| {
            format!(
                "{} [{}]: {}",
                f.position.id,
                opt(f.position.pool.as_deref()),
                format_proximity_warning(&f.proximity)
            )
        })
        .collect()
}

pub fn print_flagged(flagged: &[FlaggedPosition], total: usize) {
    println!(
        "\n🔔 Range proximity report ({})",
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    );
    println!("════════════════════════════════════");
    println!("Positions checked: {}", total);
    println!("Near a bound:      {}", flagged.len());

    if flagged.is_empty() {
        println!("✅ All positions clear of their bounds.");
        return;
    }
    for line in flagged_lines(flagged) {
        println!("{}", line);
    }
}

/// Where the tick sits, in the wording of the position report.
pub fn range_line(range: &RangeCheck) -> String {
    match range.range_side {
        None if range.is_full_range => "🟢 IN RANGE (full range)".to_string(),
        None => format!(
            "🟢 IN RANGE ({} ticks above lower, {} below upper)",
            range.distance_to_lower, range.distance_to_upper
        ),
        Some(RangeSide::BelowRange) => {
            format!("🔴 BELOW RANGE by {} ticks", -range.distance_to_lower)
        }
        Some(RangeSide::AboveRange) => {
            format!("🔴 ABOVE RANGE by {} ticks", -range.distance_to_upper)
        }
    }
}

pub fn fees_line(fees: &UncollectedFees) -> String {
    if !fees.has_uncollected_fees {
        return "No uncollected fees".to_string();
    }
    format!(
        "token0: {}, token1: {} (${:.2})",
        fees.fee0_amount.normalized(),
        fees.fee1_amount.normalized(),
        fees.total_fees_usd
    )
}

pub fn print_valuation(valuation: &PositionValuation, range: &RangeCheck, fees: &UncollectedFees) {
    println!("\n💎 Position value");
    println!("════════════════════════════════════");
    println!("Status:     {}", valuation.status);
    println!("Range:      {}", range_line(range));
    println!("Tick:       {}", valuation.current_tick);
    println!("token0:     {}", valuation.amount0.normalized());
    println!("token1:     {}", valuation.amount1.normalized());
    println!("token0 USD: ${:.2}", valuation.value0_usd);
    println!("token1 USD: ${:.2}", valuation.value1_usd);
    println!("Total USD:  ${:.2}", valuation.value_usd);
    println!("Fees:       {}", fees_line(fees));
    println!("════════════════════════════════════");
}
