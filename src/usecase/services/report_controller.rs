use std::fmt;

use chrono::NaiveDateTime;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::entities::date_range::{parse_iso_date, DateRange};
use crate::domain::entities::filter_state::{
    custom_day_title, quick_filter_title, FilterKind, FilterState,
};
use crate::domain::entities::quotation::{normalize_department, ALL_DEPARTMENTS};
use crate::domain::entities::snapshot::ReportSnapshot;
use crate::domain::format::format_currency_inr;
use crate::usecase::ports::view::ReportView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInputProblem {
    Missing,
    Unparseable,
}

impl fmt::Display for DateInputProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInputProblem::Missing => write!(f, "Please choose a date."),
            DateInputProblem::Unparseable => write!(f, "Invalid date selected."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("{0}")]
    InvalidInput(DateInputProblem),
}

pub struct ReportController<V: ReportView> {
    snapshot: ReportSnapshot,
    state: FilterState,
    has_summary_selector: bool,
    view: V,
}

impl<V: ReportView> ReportController<V> {
    pub fn new(snapshot: ReportSnapshot, view: V) -> Self {
        Self {
            snapshot,
            state: FilterState::default(),
            has_summary_selector: true,
            view,
        }
    }

    fn summary_amount(&self) -> f64 {
        self.snapshot.summary_amount(&self.state.summary_department)
    }

    pub fn initialize(&mut self, now: NaiveDateTime, available_filters: &[FilterKind]) {
        info!(
            rows = self.snapshot.rows.len(),
            departments = self.snapshot.department_totals.len(),
            "initialising report filters"
        );
        self.recompute_summary_amount();
        self.set_custom_picker(false);

        if available_filters.contains(&FilterKind::Week) {
            self.select_quick_filter(FilterKind::Week, now);
        } else {
            self.apply_filters();
        }
    }

    // Custom only reveals the date picker.
    pub fn select_quick_filter(&mut self, kind: FilterKind, now: NaiveDateTime) {
        self.state.active_filter = Some(kind);
        self.view.render_active_filter(kind);

        if kind == FilterKind::Custom {
            self.set_custom_picker(true);
            return;
        }

        self.set_custom_picker(false);
        let range = kind.range_for(now);
        self.state.base_title = quick_filter_title(kind, range.as_ref());
        self.state.active_date_range = range;
        info!(filter = kind.tag(), "quick filter selected");
        self.apply_filters();
    }

    pub fn select_custom_date(&mut self, value: Option<&str>) -> Result<(), FilterError> {
        let Some(value) = value.filter(|value| !value.trim().is_empty()) else {
            warn!("custom date applied without a date");
            return Err(FilterError::InvalidInput(DateInputProblem::Missing));
        };
        let Some(day) = parse_iso_date(value) else {
            warn!(value, "custom date could not be parsed");
            return Err(FilterError::InvalidInput(DateInputProblem::Unparseable));
        };

        self.state.base_title = custom_day_title(day);
        self.state.active_date_range = Some(DateRange::single_day(day));
        info!(%day, "custom date selected");
        self.apply_filters();
        Ok(())
    }

    pub fn select_department(&mut self, name: &str) {
        self.state.current_department = normalize_department(name);
        info!(department = %self.state.current_department, "department filter selected");
        self.apply_filters();

        let department = self.state.current_department.clone();
        if self.has_summary_selector
            && (department == ALL_DEPARTMENTS || self.snapshot.has_department_total(&department))
        {
            self.state.summary_department = department;
            self.view
                .render_summary_selection(&self.state.summary_department);
            self.recompute_summary_amount();
        }
    }

    pub fn select_summary_department(&mut self, name: &str) {
        self.state.summary_department = normalize_department(name);
        self.recompute_summary_amount();
    }

    fn set_custom_picker(&mut self, visible: bool) {
        self.state.custom_picker_visible = visible;
        self.view.render_custom_picker(visible);
    }

    fn apply_filters(&mut self) {
        let department = self.state.current_department.as_str();
        let range = self.state.active_date_range.as_ref();

        let mut visible_count = 0;
        for row in &self.snapshot.rows {
            let visible = row.is_visible(department, range);
            self.view.render_row_visibility(row.id, visible);
            if visible {
                visible_count += 1;
            }
        }
        self.state.visible_count = visible_count;
        debug!(visible_count, "filters applied");

        self.view.render_title(&self.state.results_title());
    }

    fn recompute_summary_amount(&mut self) {
        let amount = self.summary_amount();
        self.view.render_summary(&format_currency_inr(amount));
    }
}

#[cfg(test)]
impl<V: ReportView> ReportController<V> {
    pub fn with_summary_selector(mut self, present: bool) -> Self {
        self.has_summary_selector = present;
        self
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn snapshot(&self) -> &ReportSnapshot {
        &self.snapshot
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
