use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, InputMode, ViewMode};
use crate::theme;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = theme::current();
        let w = area.width as usize;

        let mode_str = match app.view_mode {
            ViewMode::List => "[1]Liste",
            ViewMode::Calendar => "[2]Calendrier",
        };

        let focus_indicator = match app.input_mode {
            InputMode::Filters => " [Filtres]",
            InputMode::Search => " [Recherche]",
            InputMode::Normal => "",
        };

        // Show status message if present, otherwise show context-aware hints
        let right_text = if let Some(ref msg) = app.status_message {
            format!(" {} ", msg)
        } else {
            hints(app.view_mode, app.day_detail.is_some(), w).to_string()
        };

        let left = format!(" {}{} ", mode_str, focus_indicator);
        let padding_len = w.saturating_sub(left.chars().count() + right_text.chars().count());
        let padding = " ".repeat(padding_len);

        let line = Line::from(vec![
            Span::styled(left, theme.status),
            Span::styled(padding, theme.status),
            Span::styled(right_text, theme.status),
        ]);

        let bar = Paragraph::new(line).style(theme.status);
        frame.render_widget(bar, area);
    }
}

fn hints(mode: ViewMode, detail_open: bool, w: usize) -> &'static str {
    match mode {
        ViewMode::List if w >= 80 => " jk:Carte o:Ouvrir f:Filtres /:Recherche x:Reset Tab:Vue ?:Aide q:Quitter",
        ViewMode::List if w >= 50 => " jk:Carte o:Ouvrir f:Filtres q:Quitter",
        ViewMode::Calendar if detail_open && w >= 60 => " np:Événement o:Ouvrir Esc:Mois ?:Aide q:Quitter",
        ViewMode::Calendar if w >= 80 => " hjkl:Jour [/]:Mois Enter:Détail np:Événement t:Auj. ?:Aide q:Quitter",
        ViewMode::Calendar if w >= 50 => " hjkl:Jour [/]:Mois Enter:Détail q:Quitter",
        _ => " ?:Aide q:Quitter",
    }
}
