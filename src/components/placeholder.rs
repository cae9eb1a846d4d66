use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::theme;
use crate::view_model::Placeholder;

/// Draws a single centered "nothing here" block.
pub fn render(frame: &mut Frame, area: Rect, placeholder: &Placeholder, title_style: Style) {
    let mut lines = vec![
        Line::from(""),
        Line::from(placeholder.icon),
        Line::from(Span::styled(
            placeholder.title.clone(),
            title_style.add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(ref hint) = placeholder.hint {
        lines.push(Line::from(Span::styled(hint.clone(), theme::current().dim)));
    }

    let para = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}
