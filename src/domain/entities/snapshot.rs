use std::collections::BTreeMap;

use crate::domain::entities::quotation::{QuotationRow, ALL_DEPARTMENTS};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSnapshot {
    pub rows: Vec<QuotationRow>,
    pub department_totals: BTreeMap<String, f64>,
    pub grand_total: f64,
}

impl ReportSnapshot {
    pub fn summary_amount(&self, selection: &str) -> f64 {
        if selection == ALL_DEPARTMENTS {
            return self.grand_total;
        }
        self.department_totals
            .get(selection)
            .copied()
            .unwrap_or(0.0)
    }

    pub fn has_department_total(&self, department: &str) -> bool {
        self.department_totals.contains_key(department)
    }

    pub fn summary_departments(&self) -> Vec<String> {
        self.department_totals.keys().cloned().collect()
    }
}
