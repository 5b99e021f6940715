//! Detailed output for status reads and scenario reports.

use std::fmt::Write;

use colored::Colorize;
use strategy_harness::fixtures::format_units;
use strategy_harness::scenarios::{Outcome, ScenarioReport};
use strategy_harness::StrategyStatus;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Tabled)]
struct HarvestRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Profit")]
    profit: String,
    #[tabled(rename = "Loss")]
    loss: String,
    #[tabled(rename = "Debt Payment")]
    debt_payment: String,
    #[tabled(rename = "Debt Outstanding")]
    debt_outstanding: String,
}

#[derive(Tabled)]
struct TriggerRow {
    #[tabled(rename = "Condition")]
    condition: String,
    #[tabled(rename = "Expected")]
    expected: bool,
    #[tabled(rename = "Observed")]
    observed: bool,
    #[tabled(rename = "Result")]
    result: String,
}

fn header(output: &mut String, title: &str) {
    let _ = writeln!(output, "{}", "=".repeat(60));
    let _ = writeln!(output, "{}", title.bold());
    let _ = writeln!(output, "{}\n", "=".repeat(60));
}

fn format_bps(value: impl std::fmt::Display) -> String {
    format!("{value} bps")
}

fn table<R: Tabled>(rows: Vec<R>) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
        .to_string()
}

pub fn format_status_detail(status: &StrategyStatus) -> String {
    let mut output = String::new();
    header(&mut output, &format!("Strategy {}", status.strategy));

    let params = &status.params;
    let _ = writeln!(output, "{}", "Vault Record".cyan().bold());
    let _ = writeln!(output, "  Activation:      {}", params.activation);
    let _ = writeln!(output, "  Last Report:     {}", params.last_report);
    let _ = writeln!(output, "  Debt Ratio:      {}", format_bps(params.debt_ratio));
    let _ = writeln!(output, "  Performance Fee: {}", format_bps(params.performance_fee));
    let _ = writeln!(output, "  Min Per Harvest: {}", params.min_debt_per_harvest);
    let _ = writeln!(output, "  Max Per Harvest: {}", params.max_debt_per_harvest);
    let _ = writeln!(output, "  Total Debt:      {}", params.total_debt);
    let _ = writeln!(output, "  Total Gain:      {}", params.total_gain);
    let _ = writeln!(output, "  Total Loss:      {}\n", params.total_loss);

    let _ = writeln!(output, "{}", "Strategy".cyan().bold());
    let _ = writeln!(output, "  Estimated Assets: {}\n", status.estimated_total_assets);

    let _ = writeln!(output, "{}", "Withdrawal Queue".cyan().bold());
    if status.queue.is_empty() {
        let _ = writeln!(output, "  (empty)");
    }
    for (member, ratio) in &status.queue {
        let marker = if *member == status.strategy { " *" } else { "" };
        let _ = writeln!(output, "  {member}  {}{marker}", format_bps(ratio));
    }
    let _ = writeln!(output, "  Queue Total:  {}", format_bps(status.queue_debt_ratio));
    let _ = write!(output, "  Vault Total:  {}", format_bps(status.vault_debt_ratio));

    output
}

pub fn format_report_detail(report: &ScenarioReport) -> String {
    let mut output = String::new();
    header(&mut output, &format!("Scenario: {}", report.name));

    match &report.outcome {
        Outcome::Passed => {
            let _ = writeln!(output, "Outcome: {}\n", "passed".green().bold());
        }
        Outcome::Skipped { reason } => {
            let _ = writeln!(output, "Outcome: {} ({reason})", "skipped".yellow().bold());
            return output;
        }
    }

    if !report.harvests.is_empty() {
        let rows: Vec<HarvestRow> = report
            .harvests
            .iter()
            .enumerate()
            .map(|(i, h)| HarvestRow {
                index: i + 1,
                profit: h.profit.to_string(),
                loss: h.loss.to_string(),
                debt_payment: h.extra.debt_payment.to_string(),
                debt_outstanding: h.extra.debt_outstanding.to_string(),
            })
            .collect();
        let _ = writeln!(output, "{}", "Harvests".cyan().bold());
        let _ = writeln!(output, "{}\n", table(rows));
    }

    if !report.trigger_checks.is_empty() {
        let rows: Vec<TriggerRow> = report
            .trigger_checks
            .iter()
            .map(|c| TriggerRow {
                condition: c.condition.to_string(),
                expected: c.expected,
                observed: c.observed,
                result: if c.passed() { "ok".into() } else { "MISMATCH".into() },
            })
            .collect();
        let _ = writeln!(output, "{}", "Harvest Trigger".cyan().bold());
        let _ = writeln!(output, "{}\n", table(rows));
    }

    let _ = writeln!(output, "{}", "Depositor".cyan().bold());
    let balance = |b: Option<_>| b.map_or_else(|| "-".to_string(), |b| format_units(b, 18));
    let _ = writeln!(output, "  Starting Balance: {}", balance(report.starting_balance));
    let _ = writeln!(output, "  Ending Balance:   {}", balance(report.ending_balance));
    let apr = report
        .estimated_apr
        .map_or_else(|| "-".to_string(), |apr| format!("{:.2}%", apr.saturating_mul(100.into())));
    let _ = write!(output, "  Estimated APR:    {apr}");

    if let Some(status) = &report.status {
        let _ = write!(output, "\n\n{}", format_status_detail(status));
    }

    output
}
