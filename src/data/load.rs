use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::task::spawn_blocking;

use crate::types::Dataset;
use crate::utils::unique_values;

use super::{combine, DataError};

/// One row of the issues or pull-requests table.
///
/// `count` is parsed as an integer at this boundary; a non-numeric value
/// fails the load with the offending record position.
#[derive(Debug, Clone, Deserialize)]
pub struct CountRow {
    /// The language (or repository) name
    pub name: String,
    /// Calendar year label
    pub year: String,
    /// Quarter label
    pub quarter: String,
    /// Issue or pull-request count for the period
    pub count: u64,
}

/// One row of the repositories table. Columns other than `language` are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRow {
    /// The repository's primary language
    pub language: String,
}

/// The three source tables as read from disk.
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub issues: Vec<CountRow>,
    pub prs: Vec<CountRow>,
    pub repos: Vec<RepoRow>,
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DataError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?);
    }

    Ok(rows)
}

/// Read `issues.csv`, `prs.csv`, and `repos.csv` from `dir` concurrently.
///
/// Each file is parsed on a blocking task since csv reads are blocking. Any
/// unreachable or malformed file fails the whole load; nothing partial is
/// returned.
pub async fn load_tables_async(dir: PathBuf) -> Result<SourceTables, DataError> {
    let issues_path = dir.join("issues.csv");
    let prs_path = dir.join("prs.csv");
    let repos_path = dir.join("repos.csv");

    let issues = spawn_blocking(move || read_rows::<CountRow>(&issues_path));
    let prs = spawn_blocking(move || read_rows::<CountRow>(&prs_path));
    let repos = spawn_blocking(move || read_rows::<RepoRow>(&repos_path));

    let (issues, prs, repos) = futures::try_join!(issues, prs, repos)?;

    Ok(SourceTables {
        issues: issues?,
        prs: prs?,
        repos: repos?,
    })
}

/// Derive the dataset from the source tables: combined records plus the
/// dropdown option lists.
pub fn build_dataset(tables: &SourceTables) -> Result<Dataset, DataError> {
    let combined = combine(&tables.issues, &tables.prs)?;
    let years = unique_values(&tables.issues, |r| r.year.as_str());
    let quarters = unique_values(&tables.issues, |r| r.quarter.as_str());
    let languages = unique_values(&tables.repos, |r| r.language.as_str());

    log::info!(
        "loaded {} issue rows, {} pull-request rows, {} repository rows",
        tables.issues.len(),
        tables.prs.len(),
        tables.repos.len()
    );

    Ok(Dataset {
        combined,
        years,
        quarters,
        languages,
    })
}

/// Load the source tables and derive the dataset in one step.
pub async fn load_dataset_async(dir: PathBuf) -> Result<Dataset, DataError> {
    let tables = load_tables_async(dir).await?;
    build_dataset(&tables)
}
