use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::entities::date_range::DateRange;

pub const ALL_DEPARTMENTS: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(pub usize);

impl From<usize> for RowId {
    fn from(value: usize) -> Self {
        RowId(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuotationRow {
    pub id: RowId,
    pub department: String,
    pub date: Option<NaiveDate>,
    pub reference: String,
    pub client: String,
    pub amount: Option<f64>,
}

impl QuotationRow {
    pub fn matches_department(&self, department: &str) -> bool {
        department == ALL_DEPARTMENTS || self.department == department
    }

    pub fn matches_range(&self, range: Option<&DateRange>) -> bool {
        match range {
            None => true,
            Some(range) => self.date.is_some_and(|date| range.contains_date(date)),
        }
    }

    pub fn is_visible(&self, department: &str, range: Option<&DateRange>) -> bool {
        self.matches_department(department) && self.matches_range(range)
    }
}

// Empty selector values fall back to the wildcard.
pub fn normalize_department(value: &str) -> String {
    if value.is_empty() {
        ALL_DEPARTMENTS.to_string()
    } else {
        value.to_string()
    }
}

pub fn department_label(department: &str) -> &str {
    if department == ALL_DEPARTMENTS {
        "All departments"
    } else {
        department
    }
}

pub fn distinct_departments(rows: &[QuotationRow]) -> Vec<String> {
    rows.iter()
        .map(|row| row.department.as_str())
        .filter(|department| *department != ALL_DEPARTMENTS)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
impl QuotationRow {
    pub fn new(id: usize, department: &str, date: Option<NaiveDate>) -> Self {
        Self {
            id: RowId(id),
            department: normalize_department(department),
            date,
            reference: String::new(),
            client: String::new(),
            amount: None,
        }
    }
}
