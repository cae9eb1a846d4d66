use crate::catalog::{Format, Formation, Kind};

/// Tri-state certification constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Certification {
    #[default]
    Any,
    Yes,
    No,
}

impl Certification {
    pub fn matches(self, certified: bool) -> bool {
        match self {
            Certification::Any => true,
            Certification::Yes => certified,
            Certification::No => !certified,
        }
    }

    pub fn as_option(self) -> Option<bool> {
        match self {
            Certification::Any => None,
            Certification::Yes => Some(true),
            Certification::No => Some(false),
        }
    }
}

impl From<Option<bool>> for Certification {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Certification::Any,
            Some(true) => Certification::Yes,
            Some(false) => Certification::No,
        }
    }
}

/// Active constraints. `None` and an empty search mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub kind: Option<Kind>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub format: Option<Format>,
    pub certification: Certification,
    pub search: String,
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }

    /// AND of every active constraint.
    pub fn matches(&self, formation: &Formation) -> bool {
        if self.kind.is_some_and(|k| k != formation.kind) {
            return false;
        }
        if self
            .category
            .as_deref()
            .is_some_and(|c| c != formation.category)
        {
            return false;
        }
        if self.level.as_deref().is_some_and(|l| l != formation.level) {
            return false;
        }
        if self.format.is_some_and(|f| f != formation.format) {
            return false;
        }
        if !self.certification.matches(formation.certified) {
            return false;
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            if !formation.search_text().to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// Filters `baseline`, keeping its order.
pub fn apply<'a>(baseline: &'a [Formation], criteria: &FilterCriteria) -> Vec<&'a Formation> {
    baseline.iter().filter(|f| criteria.matches(f)).collect()
}

/// The six filter controls, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Kind,
    Category,
    Level,
    Format,
    Certification,
    Search,
}

impl FilterField {
    pub const ALL: [FilterField; 6] = [
        FilterField::Kind,
        FilterField::Category,
        FilterField::Level,
        FilterField::Format,
        FilterField::Certification,
        FilterField::Search,
    ];

    pub fn next(&self) -> Self {
        match self {
            FilterField::Kind => FilterField::Category,
            FilterField::Category => FilterField::Level,
            FilterField::Level => FilterField::Format,
            FilterField::Format => FilterField::Certification,
            FilterField::Certification => FilterField::Search,
            FilterField::Search => FilterField::Kind,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FilterField::Kind => FilterField::Search,
            FilterField::Category => FilterField::Kind,
            FilterField::Level => FilterField::Category,
            FilterField::Format => FilterField::Level,
            FilterField::Certification => FilterField::Format,
            FilterField::Search => FilterField::Certification,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Kind => "Type",
            FilterField::Category => "Catégorie",
            FilterField::Level => "Niveau",
            FilterField::Format => "Format",
            FilterField::Certification => "Certifiante",
            FilterField::Search => "Recherche",
        }
    }
}
