use super::*;
use league_core::LeagueState;
use tempfile::TempDir;

fn rows() -> Vec<RankingRow> {
    let mut state = LeagueState::new();
    state.record_match("A", "B", None).unwrap();
    state.record_match("A", "C", None).unwrap();
    state.record_match("B", "A", None).unwrap();
    state.rankings()
}

#[test]
fn test_rankings_markdown() {
    let md = rankings_markdown(&rows());
    let lines: Vec<&str> = md.lines().collect();
    assert_eq!(lines[0], RANKINGS_HEADING);
    assert_eq!(lines[4], "| 1 | A | 2 | 1 | 3 | 66.7% |");
    assert_eq!(lines[5], "| 2 | B | 1 | 1 | 2 | 50.0% |");
    assert_eq!(lines[6], "| 3 | C | 0 | 1 | 1 | 0.0% |");
}

#[test]
fn test_splice_appends_when_missing() {
    let doc = "# Project\n\nSome text.\n";
    assert_eq!(
        splice_rankings(doc, "## Pool League Rankings\n\nT\n"),
        "# Project\n\nSome text.\n\n## Pool League Rankings\n\nT\n"
    );
}

#[test]
fn test_splice_replaces_existing_section() {
    let doc = "# Project\n\n## Pool League Rankings\n\nold table\n";
    let once = splice_rankings(doc, "## Pool League Rankings\n\nnew\n");
    assert_eq!(once, "# Project\n\n## Pool League Rankings\n\nnew\n");
    // Repeated updates do not accumulate blank lines
    assert_eq!(splice_rankings(&once, "## Pool League Rankings\n\nnew\n"), once);
}

#[test]
fn test_splice_empty_document() {
    assert_eq!(splice_rankings("", "S\n"), "S\n");
}

#[test]
fn test_update_readme_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("README.md");

    update_readme(&path, &rows()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with(RANKINGS_HEADING));
    assert_eq!(written.matches(RANKINGS_HEADING).count(), 1);

    update_readme(&path, &rows()).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), written);
}
