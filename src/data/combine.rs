use std::collections::{HashMap, HashSet};

use crate::types::{CombinedRecord, RecordKey};

use super::load::CountRow;
use super::DataError;

/// Join the issue and pull-request tables into combined records.
///
/// The join is keyed by `(name, year, quarter)`. Output order and length
/// follow the issues table. A duplicate key in either table or an issue key
/// without a pull-request counterpart fails the whole join; pull-request
/// keys without an issue counterpart are tolerated and logged.
pub fn combine(issues: &[CountRow], prs: &[CountRow]) -> Result<Vec<CombinedRecord>, DataError> {
    let mut pr_counts: HashMap<RecordKey, u64> = HashMap::with_capacity(prs.len());
    for row in prs {
        let key = row_key(row);
        if pr_counts.insert(key.clone(), row.count).is_some() {
            return Err(DataError::DuplicateKey {
                table: "pull request",
                key,
            });
        }
    }

    let mut seen: HashSet<RecordKey> = HashSet::with_capacity(issues.len());
    let mut combined = Vec::with_capacity(issues.len());
    for row in issues {
        let key = row_key(row);
        if !seen.insert(key.clone()) {
            return Err(DataError::DuplicateKey {
                table: "issue",
                key,
            });
        }

        let pr_count = match pr_counts.get(&key) {
            Some(count) => *count,
            None => return Err(DataError::MissingPrEntry { key }),
        };

        combined.push(CombinedRecord {
            name: row.name.clone(),
            year: row.year.clone(),
            quarter: row.quarter.clone(),
            total_count: row.count + pr_count,
        });
    }

    let unmatched = prs.len().saturating_sub(combined.len());
    if unmatched > 0 {
        log::warn!(
            "{} pull-request rows have no issue counterpart and were ignored",
            unmatched
        );
    }

    Ok(combined)
}

fn row_key(row: &CountRow) -> RecordKey {
    RecordKey {
        name: row.name.clone(),
        year: row.year.clone(),
        quarter: row.quarter.clone(),
    }
}
