use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::InputMode;
use crate::facets::{FacetOption, FacetOptions};
use crate::filter::{FilterCriteria, FilterField};
use crate::theme;

pub struct FilterBar;

impl FilterBar {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        criteria: &FilterCriteria,
        options: &FacetOptions,
        active: FilterField,
        mode: InputMode,
    ) {
        let theme = theme::current();
        let editing = mode != InputMode::Normal;

        let block = Block::default()
            .title(" Filtres ")
            .title_style(theme.header)
            .title_bottom(Line::from(Span::styled(
                match mode {
                    InputMode::Normal => " f: filtrer  /: rechercher  x: réinitialiser ",
                    InputMode::Filters => " ←→: champ  ↑↓: valeur  Enter: rechercher  Esc: fermer ",
                    InputMode::Search => " Saisissez un texte  Enter/Esc: terminer ",
                },
                theme.dim,
            )))
            .borders(Borders::ALL)
            .border_style(if editing {
                Style::default().fg(ratatui::style::Color::Cyan)
            } else {
                theme.border
            });

        let mut spans = Vec::new();
        for field in FilterField::ALL {
            let focused = editing && field == active;
            let mut value = value_label(field, criteria, options);
            if field == FilterField::Search && mode == InputMode::Search {
                value.push('_');
            }

            spans.push(Span::styled(format!("{}: ", field.label()), theme.dim));
            let style = if focused {
                theme.selected
            } else if is_set(field, criteria) {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {value} "), style));
            spans.push(Span::raw("  "));
        }

        let para = Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(para, area);
    }
}

/// Text shown for the current value of a control.
pub fn value_label(field: FilterField, criteria: &FilterCriteria, options: &FacetOptions) -> String {
    match field {
        FilterField::Kind => option_label(&options.kinds, &criteria.kind),
        FilterField::Category => option_label(&options.categories, &criteria.category),
        FilterField::Level => option_label(&options.levels, &criteria.level),
        FilterField::Format => option_label(&options.formats, &criteria.format),
        FilterField::Certification => {
            option_label(&options.certification, &criteria.certification.as_option())
        }
        FilterField::Search => criteria.search.clone(),
    }
}

fn option_label<T: PartialEq>(options: &[FacetOption<T>], value: &Option<T>) -> String {
    options
        .iter()
        .find(|o| &o.value == value)
        .or_else(|| options.first())
        .map(|o| o.label.clone())
        .unwrap_or_default()
}

fn is_set(field: FilterField, criteria: &FilterCriteria) -> bool {
    match field {
        FilterField::Kind => criteria.kind.is_some(),
        FilterField::Category => criteria.category.is_some(),
        FilterField::Level => criteria.level.is_some(),
        FilterField::Format => criteria.format.is_some(),
        FilterField::Certification => criteria.certification.as_option().is_some(),
        FilterField::Search => !criteria.search.is_empty(),
    }
}
