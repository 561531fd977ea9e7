//! Data pipeline: reading the three source tables, joining issue and
//! pull-request counts into combined records, and resolving the filter
//! selection into a render plan.

use std::path::PathBuf;

use crate::types::RecordKey;

mod combine;
mod filter;
mod load;

pub use combine::combine;
pub use filter::{filter_records, resolve, RenderPlan, ResolveMode};
pub use load::{
    build_dataset, load_dataset_async, load_tables_async, CountRow, RepoRow, SourceTables,
};


/// Errors from loading or joining the source tables.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A source file was unreachable or malformed. Non-numeric count fields
    /// surface here; csv reports the offending record.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A source table repeats a `(name, year, quarter)` key.
    #[error("{table} table has a duplicate entry for {key}")]
    DuplicateKey {
        table: &'static str,
        key: RecordKey,
    },

    /// An issue row has no pull-request counterpart.
    #[error("pull request table has no entry for {key}")]
    MissingPrEntry { key: RecordKey },

    /// A background load worker failed.
    #[error("load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
