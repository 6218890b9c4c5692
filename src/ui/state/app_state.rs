use std::collections::BTreeSet;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::filter_state::FilterKind;
use crate::domain::entities::quotation::{QuotationRow, RowId, ALL_DEPARTMENTS};

pub struct AppState {
    pub rows: Signal<Vec<QuotationRow>>,
    pub hidden_rows: Signal<BTreeSet<RowId>>,
    pub departments: Signal<Vec<String>>,
    pub summary_departments: Signal<Vec<String>>,
    pub department_filter: Signal<String>,
    pub summary_selection: Signal<String>,
    pub active_filter: Signal<Option<FilterKind>>,
    pub custom_picker_visible: Signal<bool>,
    pub custom_date: Signal<String>,
    pub results_title: Signal<String>,
    pub summary_amount: Signal<String>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            rows: use_signal(Vec::<QuotationRow>::new),
            hidden_rows: use_signal(BTreeSet::<RowId>::new),
            departments: use_signal(Vec::<String>::new),
            summary_departments: use_signal(Vec::<String>::new),
            department_filter: use_signal(|| ALL_DEPARTMENTS.to_string()),
            summary_selection: use_signal(|| ALL_DEPARTMENTS.to_string()),
            active_filter: use_signal(|| None::<FilterKind>),
            custom_picker_visible: use_signal(|| false),
            custom_date: use_signal(String::new),
            results_title: use_signal(String::new),
            summary_amount: use_signal(String::new),
            status: use_signal(|| "Loading report".to_string()),
        }
    }
}
