use crate::domain::entities::filter_state::FilterKind;
use crate::domain::entities::quotation::RowId;

pub trait ReportView {
    fn render_row_visibility(&mut self, row: RowId, visible: bool);
    fn render_title(&mut self, text: &str);
    fn render_summary(&mut self, text: &str);
    fn render_active_filter(&mut self, kind: FilterKind);
    fn render_custom_picker(&mut self, visible: bool);
    fn render_summary_selection(&mut self, department: &str);
}
