use ratatui::style::Color;

use super::format;
use super::{ActionLink, Placeholder};
use crate::catalog::{Formation, Kind};
use crate::facets::CategoryColorMap;

pub const CERTIFIED_BADGE: &str = "✓ Certifiante";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    Date,
    Time,
    Duration,
    Level,
    Price,
    Format,
    Location,
}

impl InfoKind {
    pub fn icon(&self) -> &'static str {
        match self {
            InfoKind::Date => "📅",
            InfoKind::Time => "⏰",
            InfoKind::Duration => "⌛",
            InfoKind::Level => "📊",
            InfoKind::Price => "💰",
            InfoKind::Format => "📍",
            InfoKind::Location => "🗺",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoItem {
    pub kind: InfoKind,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub kind: Kind,
    pub certified: bool,
    pub title: String,
    pub category: String,
    pub category_color: Color,
    pub border_color: Color,
    pub description: String,
    pub info: Vec<InfoItem>,
    /// Empty when the formation lists no modules; then nothing is drawn.
    pub modules: Vec<String>,
    /// Already prefixed with `#`.
    pub tags: Vec<String>,
    pub action: ActionLink,
}

impl Card {
    pub fn new(formation: &Formation, colors: &CategoryColorMap) -> Self {
        let palette = colors.get(&formation.category);

        let mut info = vec![
            InfoItem {
                kind: InfoKind::Date,
                text: format::date_or_always(formation.date),
            },
            InfoItem {
                kind: InfoKind::Time,
                text: formation.time.clone(),
            },
            InfoItem {
                kind: InfoKind::Duration,
                text: formation.duration.clone(),
            },
            InfoItem {
                kind: InfoKind::Level,
                text: formation.level.clone(),
            },
            InfoItem {
                kind: InfoKind::Price,
                text: formation.price.clone(),
            },
            InfoItem {
                kind: InfoKind::Format,
                text: formation.format.label().to_string(),
            },
        ];
        if let Some(location) = formation.displayed_location() {
            info.push(InfoItem {
                kind: InfoKind::Location,
                text: location.to_string(),
            });
        }

        Self {
            kind: formation.kind,
            certified: formation.certified,
            title: formation.title.clone(),
            category: formation.category.clone(),
            category_color: palette.border,
            border_color: palette.border,
            description: formation.description.clone(),
            info,
            modules: formation.modules.clone(),
            tags: formation.tags.iter().map(|t| format!("#{t}")).collect(),
            action: ActionLink::for_formation(formation, palette),
        }
    }

    pub fn badges(&self) -> Vec<&'static str> {
        let mut badges = vec![self.kind.label()];
        if self.certified {
            badges.push(CERTIFIED_BADGE);
        }
        badges
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
    Cards(Vec<Card>),
    Empty(Placeholder),
    Failed(Placeholder),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub count_label: String,
    pub body: ListBody,
}

impl ListViewModel {
    pub fn build(filtered: &[Formation], colors: &CategoryColorMap) -> Self {
        let count_label = format::count(filtered.len(), "résultat");

        let body = if filtered.is_empty() {
            ListBody::Empty(Placeholder {
                icon: "🔍",
                title: "Aucune formation ou conférence trouvée".to_string(),
                hint: Some("Essayez de modifier vos critères de recherche".to_string()),
            })
        } else {
            ListBody::Cards(filtered.iter().map(|f| Card::new(f, colors)).collect())
        };

        Self { count_label, body }
    }

    /// Error panel shown instead of the cards when loading failed.
    pub fn failed(message: &str) -> Self {
        Self {
            count_label: format::count(0, "résultat"),
            body: ListBody::Failed(Placeholder {
                icon: "⚠",
                title: "Erreur".to_string(),
                hint: Some(message.to_string()),
            }),
        }
    }

    pub fn cards(&self) -> &[Card] {
        match &self.body {
            ListBody::Cards(cards) => cards,
            ListBody::Empty(_) | ListBody::Failed(_) => &[],
        }
    }
}
