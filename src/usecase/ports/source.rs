use thiserror::Error;

use crate::domain::entities::snapshot::ReportSnapshot;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read report snapshot: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse report snapshot: {path}: {message}")]
    Parse { path: String, message: String },
}

pub trait SnapshotSource: Send + Sync {
    fn load(&self) -> Result<ReportSnapshot, SourceError>;
}
