use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::placeholder;
use crate::theme;
use crate::view_model::calendar::{EventItem, EventList, EventListBody};

/// Month summary or day detail, beside the grid.
pub struct EventListView;

impl EventListView {
    pub fn render(frame: &mut Frame, area: Rect, list: &EventList, selected: usize, is_detail: bool) {
        let theme = theme::current();

        let title = list
            .heading
            .as_deref()
            .map(|h| format!(" {h} "))
            .unwrap_or_else(|| " Événements ".to_string());
        let hint = if is_detail { " Esc: retour au mois " } else { " Enter: détail du jour " };

        let block = Block::default()
            .title(title)
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(hint, theme.dim)))
            .borders(Borders::ALL)
            .border_style(theme.border);

        match &list.body {
            EventListBody::Empty(p) => {
                let inner = block.inner(area);
                frame.render_widget(block, area);
                placeholder::render(frame, inner, p, theme.header);
            }
            EventListBody::Events(items) => {
                let items: Vec<ListItem> = items.iter().map(event_item).collect();
                let widget = List::new(items)
                    .block(block)
                    .highlight_style(theme.highlight);
                let mut state = ListState::default().with_selected(Some(selected));
                frame.render_stateful_widget(widget, area, &mut state);
            }
        }
    }
}

fn event_item(item: &EventItem) -> ListItem<'static> {
    let theme = theme::current();
    let label = |s: &'static str| Span::styled(s, theme.dim);

    let schedule_label = if item.date.is_some() { "Date: " } else { "Horaire: " };

    let lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![label(schedule_label), Span::raw(item.schedule())]),
        Line::from(vec![
            label("Type: "),
            Span::raw(item.kind.label()),
            label(" | Format: "),
            Span::raw(item.format),
        ]),
        Line::from(vec![label("Prix: "), Span::raw(item.price.clone())]),
        Line::from(Span::styled(
            format!("→ {}", item.action.label),
            Style::default()
                .fg(item.action.color)
                .add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
    ];

    ListItem::new(Text::from(lines))
}
