use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// The `type` tag of a formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Kind {
    Formation,
    #[serde(rename = "Conférence")]
    Conference,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Formation, Kind::Conference];

    pub fn label(&self) -> &'static str {
        match self {
            Kind::Formation => "Formation",
            Kind::Conference => "Conférence",
        }
    }
}

/// How a formation is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum Format {
    #[serde(rename = "Présentiel")]
    InPerson,
    #[serde(rename = "Distanciel")]
    Remote,
    #[serde(rename = "Hybride")]
    Hybrid,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::InPerson, Format::Remote, Format::Hybrid];

    pub fn label(&self) -> &'static str {
        match self {
            Format::InPerson => "Présentiel",
            Format::Remote => "Distanciel",
            Format::Hybrid => "Hybride",
        }
    }

    /// Whether attendees go somewhere, which is what makes a location meaningful.
    pub fn has_venue(&self) -> bool {
        matches!(self, Format::InPerson | Format::Hybrid)
    }
}

/// One catalog entry, as stored in `formations.json`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Formation {
    #[serde(rename = "titre")]
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: Kind,
    #[serde(rename = "categorie")]
    pub category: String,
    #[serde(rename = "niveau")]
    pub level: String,
    pub format: Format,
    #[serde(rename = "certifiante")]
    pub certified: bool,
    /// `None` means "always available".
    #[serde(default, deserialize_with = "deserialize_date")]
    pub date: Option<NaiveDate>,
    #[serde(rename = "horaire")]
    pub time: String,
    #[serde(rename = "duree")]
    pub duration: String,
    #[serde(rename = "prix")]
    pub price: String,
    #[serde(rename = "localisation", default)]
    pub location: Option<String>,
    #[serde(rename = "lien")]
    pub link: String,
    pub modules: Vec<String>,
    pub tags: Vec<String>,
}

impl Formation {
    /// Location to show, if any. Remote formations never show one.
    pub fn displayed_location(&self) -> Option<&str> {
        if !self.format.has_venue() {
            return None;
        }
        self.location.as_deref().filter(|loc| !loc.is_empty())
    }

    /// Text the free-text search runs against.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.category)
    }

    /// Kept in the baseline: undated, or dated today or later.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        match self.date {
            None => true,
            Some(date) => date >= today,
        }
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Some)
            .map_err(|e| serde::de::Error::custom(format!("invalid date {s:?}: {e}"))),
    }
}
