pub mod event_list;
pub mod filter_bar;
pub mod help;
pub mod list_view;
pub mod month_view;
pub mod placeholder;
pub mod status_bar;

pub use event_list::EventListView;
pub use filter_bar::FilterBar;
pub use list_view::ListView;
pub use month_view::MonthView;
pub use status_bar::StatusBar;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::app::{App, RenderedView};
use crate::view_model::calendar::CalendarViewModel;

/// Draws the whole screen from the current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Filters, content, status bar
    let layout = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    FilterBar::render(
        frame,
        layout[0],
        app.criteria(),
        &app.facet_options(),
        app.active_filter,
        app.input_mode,
    );

    match app.rendered() {
        RenderedView::List(vm) => ListView::render(frame, layout[1], vm, app.selected_item),
        RenderedView::Calendar(vm) => render_calendar_layout(frame, layout[1], app, vm),
    }

    StatusBar::render(frame, layout[2], app);

    if app.show_help {
        help::render(frame, area);
    }
}

fn render_calendar_layout(frame: &mut Frame, area: Rect, app: &App, vm: &CalendarViewModel) {
    let events = app.day_detail.as_ref().unwrap_or(&vm.summary);
    let is_detail = app.day_detail.is_some();

    if area.width < 70 {
        let content = Layout::vertical([Constraint::Length(15), Constraint::Min(3)]).split(area);
        MonthView::render(frame, content[0], vm, app.selected_date);
        EventListView::render(frame, content[1], events, app.selected_item, is_detail);
    } else {
        let month_w = if area.width >= 120 { 86 } else { 44 };
        let content = Layout::horizontal([
            Constraint::Length(month_w),
            Constraint::Min(20),
        ])
        .split(area);
        MonthView::render(frame, content[0], vm, app.selected_date);
        EventListView::render(frame, content[1], events, app.selected_item, is_detail);
    }
}
