use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use tracing::error;

use crate::config::AppConfig;
use crate::domain::entities::filter_state::FilterKind;
use crate::domain::entities::quotation::{distinct_departments, ALL_DEPARTMENTS};
use crate::domain::format::{format_currency_inr, format_label_date};
use crate::infra::json::snapshot::JsonSnapshotSource;
use crate::platform::desktop::notice::show_notice;
use crate::ui::binding::signal_view::SignalView;
use crate::ui::state::app_state::AppState;
use crate::ui::styles::{
    custom_picker_style, filter_button_style, root_container_style, row_style, table_cell_style,
    table_container_style, table_header_cell_style,
};
use crate::usecase::services::report_controller::ReportController;
use crate::usecase::services::snapshot_service::SnapshotService;

type SharedController = Rc<RefCell<Option<ReportController<SignalView>>>>;

#[component]
pub fn App() -> Element {
    let config = use_hook(|| AppConfig::from_env().map_err(|err| err.to_string()));

    let AppState {
        mut rows,
        hidden_rows,
        mut departments,
        mut summary_departments,
        mut department_filter,
        mut summary_selection,
        active_filter,
        custom_picker_visible,
        mut custom_date,
        results_title,
        summary_amount,
        mut status,
    } = AppState::new();

    let view = SignalView {
        hidden_rows,
        results_title,
        summary_amount,
        active_filter,
        custom_picker_visible,
        summary_selection,
    };
    let controller: SharedController = use_hook(|| Rc::new(RefCell::new(None)));

    let controller_for_init = controller.clone();
    let config_for_init = config.clone();
    use_effect(move || {
        let Ok(config) = config_for_init.as_ref() else {
            return;
        };
        let service = SnapshotService::new(Arc::new(JsonSnapshotSource::new(&config.snapshot_path)));
        match service.load() {
            Ok(snapshot) => {
                rows.set(snapshot.rows.clone());
                departments.set(distinct_departments(&snapshot.rows));
                summary_departments.set(snapshot.summary_departments());

                let mut report = ReportController::new(snapshot, view);
                report.initialize(Local::now().naive_local(), &config.quick_filters);
                *controller_for_init.borrow_mut() = Some(report);
                status.set(format!("Loaded {}", config.snapshot_path.display()));
            }
            Err(err) => {
                error!(%err, "failed to load report snapshot");
                status.set(format!("Failed to load report: {err}"));
            }
        }
    });

    let (page_title, quick_filters) = match &config {
        Ok(config) => (config.window_title.clone(), config.quick_filters.clone()),
        Err(err) => {
            return rsx! {
                div {
                    p { "Unable to resolve report location: {err}" }
                }
            };
        }
    };

    let controller_for_custom = controller.clone();
    let controller_for_department = controller.clone();
    let controller_for_summary = controller.clone();
    let hidden_snapshot = hidden_rows();
    let current_filter = active_filter();
    let picker_visible = custom_picker_visible();
    let picker_hidden = !picker_visible;
    let text_cell_style = table_cell_style("left");
    let amount_cell_style = table_cell_style("right");

    rsx! {
        div {
            style: "{root_container_style()}",
            h2 { "{page_title}" }
            nav {
                style: "display: flex; gap: 8px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                {quick_filters.iter().map(|kind| {
                    let tag = kind.tag();
                    let label = kind.button_label();
                    let controller = controller.clone();
                    let is_active = current_filter == Some(*kind);
                    rsx!(
                        button {
                            key: "{tag}",
                            "data-filter": "{tag}",
                            style: "{filter_button_style(is_active)}",
                            onclick: move |_| {
                                let kind = FilterKind::from_tag(tag);
                                if let Some(report) = controller.borrow_mut().as_mut() {
                                    report.select_quick_filter(kind, Local::now().naive_local());
                                }
                            },
                            "{label}"
                        }
                    )
                })}
                span { " {status}" }
            }

            div {
                style: "{custom_picker_style(picker_visible)}",
                "aria-hidden": "{picker_hidden}",
                input {
                    r#type: "date",
                    value: "{custom_date}",
                    oninput: move |event| custom_date.set(event.value()),
                }
                button {
                    onclick: move |_| {
                        let value = custom_date();
                        let result = controller_for_custom
                            .borrow_mut()
                            .as_mut()
                            .map(|report| report.select_custom_date(Some(&value)));
                        if let Some(Err(err)) = result {
                            let message = err.to_string();
                            status.set(message.clone());
                            show_notice(&message);
                        }
                    },
                    "Apply"
                }
            }

            div {
                style: "display: flex; gap: 16px; align-items: center; flex-wrap: wrap; padding: 4px 0;",
                label {
                    "Department "
                    select {
                        value: "{department_filter}",
                        onchange: move |event| {
                            let value = event.value();
                            department_filter.set(value.clone());
                            if let Some(report) = controller_for_department.borrow_mut().as_mut() {
                                report.select_department(&value);
                            }
                        },
                        option { value: "{ALL_DEPARTMENTS}", "All departments" }
                        for department in departments() {
                            option { value: "{department}", "{department}" }
                        }
                    }
                }
                label {
                    "Summary "
                    select {
                        value: "{summary_selection}",
                        onchange: move |event| {
                            let value = event.value();
                            summary_selection.set(value.clone());
                            if let Some(report) = controller_for_summary.borrow_mut().as_mut() {
                                report.select_summary_department(&value);
                            }
                        },
                        option { value: "{ALL_DEPARTMENTS}", "All departments" }
                        for department in summary_departments() {
                            option { value: "{department}", "{department}" }
                        }
                    }
                }
                strong { "{summary_amount}" }
            }

            h3 { "{results_title}" }

            div {
                style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            for header in ["Reference", "Client", "Department", "Date", "Amount"] {
                                th { style: "{table_header_cell_style()}", "{header}" }
                            }
                        }
                    }
                    tbody {
                        {rows().into_iter().map(|row| {
                            let hidden = hidden_snapshot.contains(&row.id);
                            let date = row.date.map(format_label_date).unwrap_or_default();
                            let amount = row.amount.map(format_currency_inr).unwrap_or_default();
                            rsx!(
                                tr {
                                    key: "{row.id.0}",
                                    style: "{row_style(hidden)}",
                                    td { style: "{text_cell_style}", "{row.reference}" }
                                    td { style: "{text_cell_style}", "{row.client}" }
                                    td { style: "{text_cell_style}", "{row.department}" }
                                    td { style: "{text_cell_style}", "{date}" }
                                    td { style: "{amount_cell_style}", "{amount}" }
                                }
                            )
                        })}
                    }
                }
            }
        }
    }
}
