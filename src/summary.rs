use crate::ledger::SelectionLedger;

pub const EMPTY_SUMMARY: &str = "Nothing yet. Choose an option";

/// Floating summary text for the current ledger and lifecycle state.
pub fn summary_text(ledger: &SelectionLedger, pending: bool, pending_label: &str) -> String {
    if pending {
        return pending_label.to_string();
    }

    match ledger.entries() {
        [] => EMPTY_SUMMARY.to_string(),
        [only] => only.name.clone(),
        entries => format!("{} different items selected", entries.len()),
    }
}

/// Dishes are prepared side by side, so the wait is the slowest one.
pub fn estimated_minutes(ledger: &SelectionLedger) -> u32 {
    ledger
        .entries()
        .iter()
        .map(|entry| entry.prep_minutes)
        .max()
        .unwrap_or(0)
}
