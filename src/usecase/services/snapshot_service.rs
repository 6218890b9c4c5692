use std::sync::Arc;

use tracing::info;

use crate::domain::entities::snapshot::ReportSnapshot;
use crate::usecase::ports::source::{SnapshotSource, SourceError};

pub struct SnapshotService {
    source: Arc<dyn SnapshotSource>,
}

impl SnapshotService {
    pub fn new(source: Arc<dyn SnapshotSource>) -> Self {
        Self { source }
    }

    pub fn load(&self) -> Result<ReportSnapshot, SourceError> {
        let snapshot = self.source.load()?;
        info!(
            rows = snapshot.rows.len(),
            departments = snapshot.department_totals.len(),
            grand_total = snapshot.grand_total,
            "report snapshot loaded"
        );
        Ok(snapshot)
    }
}
