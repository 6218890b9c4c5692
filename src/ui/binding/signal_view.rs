use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::domain::entities::filter_state::FilterKind;
use crate::domain::entities::quotation::RowId;
use crate::usecase::ports::view::ReportView;

#[derive(Clone, Copy)]
pub struct SignalView {
    pub hidden_rows: Signal<BTreeSet<RowId>>,
    pub results_title: Signal<String>,
    pub summary_amount: Signal<String>,
    pub active_filter: Signal<Option<FilterKind>>,
    pub custom_picker_visible: Signal<bool>,
    pub summary_selection: Signal<String>,
}

impl ReportView for SignalView {
    fn render_row_visibility(&mut self, row: RowId, visible: bool) {
        let mut hidden = self.hidden_rows.write();
        if visible {
            hidden.remove(&row);
        } else {
            hidden.insert(row);
        }
    }

    fn render_title(&mut self, text: &str) {
        self.results_title.set(text.to_string());
    }

    fn render_summary(&mut self, text: &str) {
        self.summary_amount.set(text.to_string());
    }

    fn render_active_filter(&mut self, kind: FilterKind) {
        self.active_filter.set(Some(kind));
    }

    fn render_custom_picker(&mut self, visible: bool) {
        self.custom_picker_visible.set(visible);
    }

    fn render_summary_selection(&mut self, department: &str) {
        self.summary_selection.set(department.to_string());
    }
}
