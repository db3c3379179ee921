use serde_json::Value;

use crate::models::{LeaderboardRow, RankedRow};

/// Drop the header row, sort by percentage (highest first, ties keep sheet
/// order) and number the result from 1.
pub fn rank_rows(rows: Vec<Vec<Value>>) -> Vec<RankedRow> {
    let mut parsed: Vec<LeaderboardRow> = rows
        .iter()
        .skip(1)
        .map(|cells| LeaderboardRow::from_cells(cells))
        .collect();

    parsed.sort_by(|a, b| b.percent.total_cmp(&a.percent));

    parsed
        .into_iter()
        .enumerate()
        .map(|(index, row)| RankedRow {
            rank: index + 1,
            row,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn rows(value: Value) -> Vec<Vec<Value>> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_sorts_descending_by_percentage() {
        let ranked = rank_rows(rows(json!([
            ["Name", "Attempts", "Correct", "Total", "Percent"],
            ["alice", 5, 20, 25, 80],
            ["bob", 3, 14, 15, 95],
        ])));

        let order: Vec<(usize, &str)> = ranked
            .iter()
            .map(|r| (r.rank, r.row.name.as_str()))
            .collect();
        assert_eq!(order, vec![(1, "bob"), (2, "alice")]);
    }

    #[test]
    fn test_ties_and_missing_percentages() {
        let ranked = rank_rows(rows(json!([
            ["header"],
            ["carol", 1],
            ["dave", 2, 0, 0, "50"],
            ["erin", 4, 0, 0, 50],
        ])));

        let names: Vec<&str> = ranked.iter().map(|r| r.row.name.as_str()).collect();
        assert_eq!(names, vec!["dave", "erin", "carol"]);
    }

    #[test]
    fn test_header_only() {
        assert!(rank_rows(rows(json!([["Name"]]))).is_empty());
        assert!(rank_rows(Vec::new()).is_empty());
    }
}
