//! Console reports

use league_core::{HeadToHead, MatchRecord, RankingRow};

const NO_MATCHES: &str = "No match records available";

/// Win rate as a percentage with one decimal, e.g. `66.7%`
pub fn format_win_rate(win_rate: f64) -> String {
    format!("{:.1}%", win_rate * 100.0)
}

/// Rankings table, best player first
pub fn rankings_report(rows: &[RankingRow]) -> String {
    if rows.is_empty() {
        return format!("{NO_MATCHES}\n");
    }

    let mut report = String::new();
    report.push_str("\n=== Pool League Rankings ===\n");
    report.push_str(&format!(
        "{:>4}  {:<16} {:>6} {:>6} {:>6} {:>9}\n",
        "Rank", "Player", "Wins", "Losses", "Total", "Win Rate"
    ));
    report.push_str(&"-".repeat(54));
    report.push('\n');

    for (i, row) in rows.iter().enumerate() {
        report.push_str(&format!(
            "{:>4}  {:<16} {:>6} {:>6} {:>6} {:>9}\n",
            i + 1,
            row.player,
            row.wins,
            row.losses,
            row.total,
            format_win_rate(row.win_rate)
        ));
    }
    report
}

/// Recent matches, in the order given (newest first from `history`)
pub fn history_report(matches: &[&MatchRecord]) -> String {
    if matches.is_empty() {
        return format!("{NO_MATCHES}\n");
    }

    let mut report = format!("\n=== Last {} matches ===\n", matches.len());
    for m in matches {
        report.push_str(&format!(
            "{} | {} > {}\n",
            m.date.format("%m/%d %H:%M"),
            m.winner,
            m.loser
        ));
    }
    report
}

/// One player's totals followed by their head-to-head records
pub fn player_report(summary: &RankingRow, head_to_head: &[HeadToHead]) -> String {
    let mut report = format!("\n=== {}'s Statistics ===\n", summary.player);
    report.push_str(&format!("Wins: {}\n", summary.wins));
    report.push_str(&format!("Losses: {}\n", summary.losses));
    report.push_str(&format!("Total matches: {}\n", summary.total));
    report.push_str(&format!("Win rate: {}\n", format_win_rate(summary.win_rate)));

    if !head_to_head.is_empty() {
        report.push_str("\nHead-to-head records:\n");
        for record in head_to_head {
            report.push_str(&format!(
                "  vs {}: {}W {}L\n",
                record.opponent, record.wins, record.losses
            ));
        }
    }
    report
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
