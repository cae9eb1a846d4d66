use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme;
use crate::view_model::calendar::{CalendarGrid, CalendarViewModel, CellMonth, DayCell};

pub struct MonthView;

impl MonthView {
    pub fn render(frame: &mut Frame, area: Rect, vm: &CalendarViewModel, selected_date: NaiveDate) {
        let theme = theme::current();

        let block = Block::default()
            .title(format!(" {} ", vm.month_label))
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(" [ ] mois ", theme.dim)))
            .borders(Borders::ALL)
            .border_style(theme.border);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let col_w = ((inner.width / 7) as usize).max(3);
        let lines = grid_lines(&vm.grid, selected_date, col_w);
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Header row, then two rows per week: day numbers and event counts.
fn grid_lines(grid: &CalendarGrid, selected_date: NaiveDate, col_w: usize) -> Vec<Line<'static>> {
    let theme = theme::current();
    let mut lines = Vec::with_capacity(1 + 2 * 6);

    let header: Vec<Span> = grid
        .headers
        .iter()
        .map(|d| Span::styled(format!("{:^col_w$}", d), theme.header))
        .collect();
    lines.push(Line::from(header));

    for week in grid.weeks() {
        let numbers: Vec<Span> = week
            .iter()
            .map(|cell| {
                Span::styled(
                    format!("{:^col_w$}", format!("{:>2}", cell.day)),
                    cell_style(cell, selected_date),
                )
            })
            .collect();
        let counts: Vec<Span> = week
            .iter()
            .map(|cell| Span::styled(format!("{:^col_w$}", count_text(cell, col_w)), theme.event_day))
            .collect();
        lines.push(Line::from(numbers));
        lines.push(Line::from(counts));
    }

    lines
}

fn cell_style(cell: &DayCell, selected_date: NaiveDate) -> Style {
    let theme = theme::current();
    if cell.month != CellMonth::Current {
        return theme.dim;
    }
    let selected = cell.date == selected_date;
    if cell.is_today && selected {
        theme.today.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else if selected {
        theme.selected
    } else if cell.is_today {
        theme.today
    } else if cell.has_events() {
        theme.event_day
    } else {
        Style::default()
    }
}

/// The full label when the column is wide enough, a short marker otherwise.
fn count_text(cell: &DayCell, col_w: usize) -> String {
    match cell.count_label() {
        Some(label) if label.chars().count() <= col_w => label,
        Some(_) => format!("•{}", cell.event_count),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{dated, ymd};

    #[test]
    fn count_text_shrinks_to_fit() {
        let data = vec![dated("a", "Dev", 2025, 6, 10), dated("b", "Dev", 2025, 6, 10)];
        let grid = CalendarGrid::build(ymd(2025, 6, 1), ymd(2025, 6, 1), &data);
        let cell = grid.cell(ymd(2025, 6, 10)).unwrap();

        assert_eq!(count_text(cell, 20), "2 événements");
        assert_eq!(count_text(cell, 5), "•2");
        assert_eq!(count_text(grid.cell(ymd(2025, 6, 11)).unwrap(), 20), "");
    }

    #[test]
    fn grid_has_header_and_two_rows_per_week() {
        let grid = CalendarGrid::build(ymd(2025, 6, 1), ymd(2025, 6, 1), &[]);
        assert_eq!(grid_lines(&grid, ymd(2025, 6, 1), 5).len(), 13);
    }
}
