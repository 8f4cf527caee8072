//! Rankings section of the project README
//!
//! The section runs from its heading to the end of the document. Updating
//! drops everything from the heading onwards and appends a fresh table.

use std::path::Path;
use tracing::debug;

use league_core::RankingRow;

use crate::error::{PoolError, Result};
use crate::render::format_win_rate;

pub const RANKINGS_HEADING: &str = "## Pool League Rankings";

/// Markdown rankings section, heading included
pub fn rankings_markdown(rows: &[RankingRow]) -> String {
    let mut md = format!("{RANKINGS_HEADING}\n\n");
    md.push_str("| Rank | Player | Wins | Losses | Total | Win Rate |\n");
    md.push_str("|------|--------|------|--------|-------|----------|\n");
    for (i, row) in rows.iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            i + 1,
            row.player,
            row.wins,
            row.losses,
            row.total,
            format_win_rate(row.win_rate)
        ));
    }
    md
}

/// Replace (or append) the rankings section of `document`
pub fn splice_rankings(document: &str, section: &str) -> String {
    let head = match document.find(RANKINGS_HEADING) {
        Some(index) => &document[..index],
        None => document,
    };
    let head = head.trim_end();
    if head.is_empty() {
        section.to_string()
    } else {
        format!("{head}\n\n{section}")
    }
}

/// Rewrite the rankings section of the README at `path`, creating the file if needed
pub fn update_readme(path: &Path, rows: &[RankingRow]) -> Result<()> {
    let readme_error = |source| PoolError::Readme {
        path: path.to_path_buf(),
        source,
    };

    let document = match std::fs::read_to_string(path) {
        Ok(document) => document,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(readme_error(e)),
    };

    let updated = splice_rankings(&document, &rankings_markdown(rows));
    std::fs::write(path, updated).map_err(readme_error)?;
    debug!(path = %path.display(), players = rows.len(), "README rankings updated");
    Ok(())
}

#[cfg(test)]
#[path = "readme_tests.rs"]
mod readme_tests;
