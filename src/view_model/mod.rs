//! Pure projections from application state to render-ready structures.
//!
//! Nothing here touches the terminal; `components` draws these.

pub mod calendar;
pub mod format;
pub mod list;

use ratatui::style::Color;

use crate::catalog::Formation;
use crate::facets::CategoryColors;

pub const ACTION_LABEL: &str = "En savoir plus";

/// A single "nothing to show" element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub icon: &'static str,
    pub title: String,
    pub hint: Option<String>,
}

/// Link that opens the formation page outside the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionLink {
    pub label: &'static str,
    pub url: String,
    pub color: Color,
}

impl ActionLink {
    pub fn for_formation(formation: &Formation, colors: CategoryColors) -> Self {
        Self {
            label: ACTION_LABEL,
            url: formation.link.clone(),
            color: colors.accent,
        }
    }
}
