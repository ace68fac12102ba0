use colored::*;

use originmap_core::scanner::ScanSummary;

pub const TOTAL_WIDTH: usize = 64;

/// Section header on stderr, mirrored on the way out by [`summary`].
pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    eprintln!("{}", line);
}

pub fn summary(summary: &ScanSummary) {
    let hits: ColoredString = format!("{} hits", summary.hits).bold().green();
    let pairs: ColoredString = format!("{} pairs", summary.pairs).bold();
    let elapsed: ColoredString = format!("{:.2}s", summary.elapsed.as_secs_f64())
        .bold()
        .yellow();

    eprintln!("Scan complete: {hits} across {pairs} in {elapsed}");
}
