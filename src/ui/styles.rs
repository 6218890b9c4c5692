pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; overflow: hidden; padding: 0 12px; box-sizing: border-box;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; border-radius: 6px;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 1; background: #f5f5f5; border: 1px solid #bbb; padding: 6px; text-align: left;"
}

pub fn table_cell_style(alignment: &str) -> String {
    format!("border: 1px solid #bbb; padding: 4px; text-align: {alignment};")
}

pub fn filter_button_style(active: bool) -> &'static str {
    if active {
        "border: 1px solid #2a5bd7; background: #2a5bd7; color: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    } else {
        "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;"
    }
}

pub fn custom_picker_style(visible: bool) -> &'static str {
    if visible {
        "display: flex; gap: 8px; align-items: center; padding: 4px 0;"
    } else {
        "display: none;"
    }
}

pub fn row_style(hidden: bool) -> &'static str {
    if hidden {
        "display: none;"
    } else {
        ""
    }
}
