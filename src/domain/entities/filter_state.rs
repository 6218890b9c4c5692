use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::domain::entities::date_range::DateRange;
use crate::domain::entities::quotation::{department_label, ALL_DEPARTMENTS};
use crate::domain::format::{format_label_date, format_month_label};

pub const BASE_TITLE: &str = "Approved quotations";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Week,
    Month,
    Year,
    All,
    Custom,
}

impl FilterKind {
    pub const BUTTONS: [FilterKind; 5] = [
        FilterKind::Week,
        FilterKind::Month,
        FilterKind::Year,
        FilterKind::All,
        FilterKind::Custom,
    ];

    // Unknown tags behave like "all".
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "week" => FilterKind::Week,
            "month" => FilterKind::Month,
            "year" => FilterKind::Year,
            "custom" => FilterKind::Custom,
            _ => FilterKind::All,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            FilterKind::Week => "week",
            FilterKind::Month => "month",
            FilterKind::Year => "year",
            FilterKind::All => "all",
            FilterKind::Custom => "custom",
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            FilterKind::Week => "This Week",
            FilterKind::Month => "This Month",
            FilterKind::Year => "This Year",
            FilterKind::All => "All",
            FilterKind::Custom => "Custom",
        }
    }

    pub fn range_for(self, now: NaiveDateTime) -> Option<DateRange> {
        let today = now.date();
        match self {
            FilterKind::Week => Some(DateRange::week_of(today)),
            FilterKind::Month => Some(DateRange::month_of(today)),
            FilterKind::Year => Some(DateRange::year_of(today)),
            FilterKind::All | FilterKind::Custom => None,
        }
    }
}

pub fn quick_filter_title(kind: FilterKind, range: Option<&DateRange>) -> String {
    match (kind, range) {
        (FilterKind::Week, Some(range)) => format!(
            "{BASE_TITLE} • This Week ({} - {})",
            format_label_date(range.first_day()),
            format_label_date(range.last_day())
        ),
        (FilterKind::Month, Some(range)) => format!(
            "{BASE_TITLE} • This Month ({})",
            format_month_label(range.first_day())
        ),
        (FilterKind::Year, Some(range)) => {
            format!("{BASE_TITLE} • This Year ({})", range.first_day().year())
        }
        _ => format!("{BASE_TITLE} • All reports"),
    }
}

pub fn custom_day_title(day: NaiveDate) -> String {
    format!("{BASE_TITLE} • {}", format_label_date(day))
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub current_department: String,
    pub active_date_range: Option<DateRange>,
    pub base_title: String,
    pub visible_count: usize,
    pub active_filter: Option<FilterKind>,
    pub summary_department: String,
    pub custom_picker_visible: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            current_department: ALL_DEPARTMENTS.to_string(),
            active_date_range: None,
            base_title: BASE_TITLE.to_string(),
            visible_count: 0,
            active_filter: None,
            summary_department: ALL_DEPARTMENTS.to_string(),
            custom_picker_visible: false,
        }
    }
}

impl FilterState {
    pub fn results_title(&self) -> String {
        let base = if self.base_title.is_empty() {
            BASE_TITLE
        } else {
            self.base_title.as_str()
        };
        format!(
            "Showing: {base} • {} ({})",
            department_label(&self.current_department),
            self.visible_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(15, 30, 0))
            .expect("valid test moment")
    }

    #[test]
    fn unknown_tags_fall_back_to_all() {
        assert_eq!(FilterKind::from_tag("week"), FilterKind::Week);
        assert_eq!(FilterKind::from_tag("custom"), FilterKind::Custom);
        assert_eq!(FilterKind::from_tag("quarter"), FilterKind::All);
        for kind in FilterKind::BUTTONS {
            assert_eq!(FilterKind::from_tag(kind.tag()), kind);
        }
    }

    #[test]
    fn quick_filter_titles_embed_bounds() {
        let now = at(2025, 1, 8);

        let week = FilterKind::Week.range_for(now);
        assert_eq!(
            quick_filter_title(FilterKind::Week, week.as_ref()),
            "Approved quotations • This Week (06 Jan 2025 - 12 Jan 2025)"
        );

        let month = FilterKind::Month.range_for(now);
        assert_eq!(
            quick_filter_title(FilterKind::Month, month.as_ref()),
            "Approved quotations • This Month (Jan 2025)"
        );

        let year = FilterKind::Year.range_for(now);
        assert_eq!(
            quick_filter_title(FilterKind::Year, year.as_ref()),
            "Approved quotations • This Year (2025)"
        );

        assert_eq!(FilterKind::All.range_for(now), None);
        assert_eq!(
            quick_filter_title(FilterKind::All, None),
            "Approved quotations • All reports"
        );
    }

    #[test]
    fn results_title_uses_department_label_and_count() {
        let mut state = FilterState::default();
        assert_eq!(
            state.results_title(),
            "Showing: Approved quotations • All departments (0)"
        );

        state.current_department = "Sales".to_string();
        state.visible_count = 3;
        state.base_title.clear();
        assert_eq!(
            state.results_title(),
            "Showing: Approved quotations • Sales (3)"
        );
    }
}
