use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme;

/// Keybinding overlay.
pub fn render(frame: &mut Frame, area: Rect) {
    let popup_w = area.width.min(56).max(30);
    let popup_h = area.height.min(26).max(12);
    let x = area.x + (area.width.saturating_sub(popup_w)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(x, y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Raccourcis ")
        .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let section_style = Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<10}"), key_style),
            Span::raw(desc),
        ])
    };

    let lines = vec![
        Line::from(Span::styled("Vues", section_style)),
        entry("1 / 2", "Liste / Calendrier"),
        entry("Tab", "Changer de vue"),
        Line::from(""),
        Line::from(Span::styled("Filtres", section_style)),
        entry("f", "Éditer les filtres"),
        entry("← →", "Choisir le filtre"),
        entry("↑ ↓", "Changer la valeur"),
        entry("/", "Recherche libre"),
        entry("x", "Réinitialiser les filtres"),
        Line::from(""),
        Line::from(Span::styled("Liste", section_style)),
        entry("j / k", "Carte suivante / précédente"),
        entry("o", "Ouvrir le lien"),
        Line::from(""),
        Line::from(Span::styled("Calendrier", section_style)),
        entry("h j k l", "Déplacer le jour"),
        entry("[ / ]", "Mois précédent / suivant"),
        entry("t", "Aujourd'hui"),
        entry("Enter", "Événements du jour"),
        entry("n / p", "Événement suivant / précédent"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  q", key_style),
            Span::styled(" / ", theme::current().dim),
            Span::styled("Esc     ", key_style),
            Span::raw("Quitter / fermer"),
        ]),
    ];

    let para = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}
