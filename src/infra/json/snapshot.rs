use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::domain::entities::date_range::parse_iso_date;
use crate::domain::entities::quotation::{normalize_department, QuotationRow, RowId};
use crate::domain::entities::snapshot::ReportSnapshot;
use crate::usecase::ports::source::{SnapshotSource, SourceError};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    fn value(&self) -> f64 {
        match self {
            RawAmount::Number(value) => *value,
            RawAmount::Text(text) => text.trim().replace(',', "").parse::<f64>().unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    department: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    client: Option<String>,
    #[serde(default)]
    amount: Option<RawAmount>,
}

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    rows: Vec<RawRow>,
    #[serde(default)]
    department_totals: BTreeMap<String, Option<RawAmount>>,
    #[serde(default)]
    grand_total: Option<RawAmount>,
}

fn into_row(idx: usize, raw: RawRow) -> QuotationRow {
    let date = match raw.date.as_deref() {
        Some(text) => {
            let parsed = parse_iso_date(text);
            if parsed.is_none() {
                warn!(row = idx, date = text, "row date is not YYYY-MM-DD, row stays undated");
            }
            parsed
        }
        None => None,
    };

    QuotationRow {
        id: RowId::from(idx),
        department: normalize_department(raw.department.as_deref().unwrap_or_default()),
        date,
        reference: raw.reference.unwrap_or_default(),
        client: raw.client.unwrap_or_default(),
        amount: raw.amount.map(|amount| amount.value()),
    }
}

pub fn parse_snapshot(text: &str) -> Result<ReportSnapshot, serde_json::Error> {
    let raw: RawSnapshot = serde_json::from_str(text)?;

    let rows = raw
        .rows
        .into_iter()
        .enumerate()
        .map(|(idx, row)| into_row(idx, row))
        .collect();
    let department_totals = raw
        .department_totals
        .into_iter()
        .map(|(department, amount)| {
            let value = amount.map(|amount| amount.value()).unwrap_or(0.0);
            (department, value)
        })
        .collect();
    let grand_total = raw.grand_total.map(|amount| amount.value()).unwrap_or(0.0);

    Ok(ReportSnapshot {
        rows,
        department_totals,
        grand_total,
    })
}

pub struct JsonSnapshotSource {
    pub path: PathBuf,
}

impl JsonSnapshotSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SnapshotSource for JsonSnapshotSource {
    fn load(&self) -> Result<ReportSnapshot, SourceError> {
        let path = self.path.display().to_string();
        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: path.clone(),
            source,
        })?;
        parse_snapshot(&text).map_err(|err| SourceError::Parse {
            path,
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_snapshot_accepts_string_and_number_amounts() {
        let snapshot = parse_snapshot(
            r#"{
                "rows": [
                    {"department": "Sales", "date": "2025-01-10", "reference": "Q-1", "amount": "1,200.50"},
                    {"department": "Ops", "date": "2025-02-01", "amount": 400}
                ],
                "department_totals": {"Sales": "600", "Ops": 400},
                "grand_total": "1000"
            }"#,
        )
        .expect("snapshot should parse");

        assert_eq!(snapshot.rows.len(), 2);
        assert_eq!(snapshot.rows[0].reference, "Q-1");
        assert_eq!(snapshot.rows[0].amount, Some(1200.5));
        assert_eq!(snapshot.rows[1].id, RowId(1));
        assert_eq!(snapshot.department_totals.get("Sales"), Some(&600.0));
        assert_eq!(snapshot.department_totals.get("Ops"), Some(&400.0));
        assert_eq!(snapshot.grand_total, 1000.0);
    }

    #[test]
    fn parse_snapshot_defaults_missing_fields() {
        let snapshot = parse_snapshot(r#"{"rows": [{"date": "not-a-date"}, {}]}"#)
            .expect("sparse snapshot should parse");

        assert_eq!(snapshot.rows[0].department, "All");
        assert_eq!(snapshot.rows[0].date, None);
        assert_eq!(snapshot.rows[1].date, None);
        assert!(snapshot.department_totals.is_empty());
        assert_eq!(snapshot.grand_total, 0.0);
    }

    #[test]
    fn non_numeric_grand_total_counts_as_zero() {
        let snapshot =
            parse_snapshot(r#"{"grand_total": ""}"#).expect("empty grand total should parse");

        assert_eq!(snapshot.grand_total, 0.0);
    }

    #[test]
    fn text_amounts_drop_grouping_commas_but_not_trailing_garbage() {
        let snapshot = parse_snapshot(
            r#"{"department_totals": {"Sales": " 1,000 ", "Ops": "1000abc"}}"#,
        )
        .expect("text totals should parse");

        assert_eq!(snapshot.department_totals.get("Sales"), Some(&1000.0));
        assert_eq!(snapshot.department_totals.get("Ops"), Some(&0.0));
    }

    #[test]
    fn null_totals_and_text_fields_degrade_to_defaults() {
        let snapshot = parse_snapshot(
            r#"{
                "rows": [
                    {"department": "Ops", "date": null, "reference": null, "client": null, "amount": null}
                ],
                "department_totals": {"Sales": 600, "Ops": null},
                "grand_total": null
            }"#,
        )
        .expect("nulls should not fail the load");

        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.rows[0].department, "Ops");
        assert_eq!(snapshot.rows[0].reference, "");
        assert_eq!(snapshot.rows[0].client, "");
        assert_eq!(snapshot.rows[0].amount, None);
        assert_eq!(snapshot.department_totals.get("Sales"), Some(&600.0));
        assert_eq!(snapshot.department_totals.get("Ops"), Some(&0.0));
        assert_eq!(snapshot.grand_total, 0.0);
        assert!(snapshot.has_department_total("Ops"));
        assert_eq!(snapshot.summary_amount("Ops"), 0.0);
    }

    #[test]
    fn parse_snapshot_rejects_malformed_json() {
        assert!(parse_snapshot("{ rows: ").is_err());
    }
}
