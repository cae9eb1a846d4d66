use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::placeholder;
use crate::theme;
use crate::view_model::list::{Card, InfoItem, ListBody, ListViewModel};

pub struct ListView;

impl ListView {
    pub fn render(frame: &mut Frame, area: Rect, vm: &ListViewModel, selected: usize) {
        let theme = theme::current();

        let block = Block::default()
            .title(" Formations & conférences ")
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(
                format!(" {} ", vm.count_label),
                theme.dim,
            )))
            .borders(Borders::ALL)
            .border_style(theme.border);

        match &vm.body {
            ListBody::Empty(p) => {
                let inner = block.inner(area);
                frame.render_widget(block, area);
                placeholder::render(frame, inner, p, theme.header);
            }
            ListBody::Failed(p) => {
                let inner = block.inner(area);
                frame.render_widget(block, area);
                placeholder::render(frame, inner, p, theme.error);
            }
            ListBody::Cards(cards) => {
                let inner_w = area.width.saturating_sub(2) as usize;
                let items: Vec<ListItem> = cards.iter().map(|c| card_item(c, inner_w)).collect();
                let list = List::new(items)
                    .block(block)
                    .highlight_style(theme.highlight);
                let mut state = ListState::default().with_selected(Some(selected));
                frame.render_stateful_widget(list, area, &mut state);
            }
        }
    }
}

fn card_item(card: &Card, max_width: usize) -> ListItem<'static> {
    let theme = theme::current();
    let bar = || Span::styled("▌ ", Style::default().fg(card.border_color));

    let mut lines: Vec<Line> = Vec::new();

    let mut badges = vec![bar()];
    for badge in card.badges() {
        badges.push(Span::styled(
            format!("[{badge}] "),
            theme.dim.add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(badges));

    lines.push(Line::from(vec![
        bar(),
        Span::styled(card.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
    ]));
    lines.push(Line::from(vec![
        bar(),
        Span::styled(card.category.clone(), Style::default().fg(card.category_color)),
    ]));
    lines.push(Line::from(vec![
        bar(),
        Span::styled(truncate(&card.description, max_width.saturating_sub(2)), theme.dim),
    ]));

    // Date, time, duration, level on one row; price, format, location on the next.
    let (first, second) = card.info.split_at(card.info.len().min(4));
    for row in [first, second] {
        if !row.is_empty() {
            let mut spans = vec![bar()];
            spans.extend(row.iter().map(info_span));
            lines.push(Line::from(spans));
        }
    }

    if !card.modules.is_empty() {
        lines.push(Line::from(vec![
            bar(),
            Span::styled("Modules: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(card.modules.join(", ")),
        ]));
    }
    if !card.tags.is_empty() {
        lines.push(Line::from(vec![
            bar(),
            Span::styled(card.tags.join(" "), theme.dim),
        ]));
    }

    lines.push(Line::from(vec![
        bar(),
        Span::styled(
            format!("→ {}", card.action.label),
            Style::default()
                .fg(card.action.color)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        ),
    ]));
    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}

fn info_span(item: &InfoItem) -> Span<'static> {
    Span::raw(format!("{} {}   ", item.kind.icon(), item.text))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
