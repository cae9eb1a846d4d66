use std::collections::{BTreeMap, BTreeSet};

use ratatui::style::Color;

use crate::catalog::{Format, Formation, Kind};

/// Display colors of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryColors {
    pub border: Color,
    pub background: Color,
    pub accent: Color,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const fn colors(border: u32, background: u32, accent: u32) -> CategoryColors {
    CategoryColors {
        border: rgb(border),
        background: rgb(background),
        accent: rgb(accent),
    }
}

/// Assigned by sorted category position, wrapping after the last entry.
pub const PALETTE: [CategoryColors; 10] = [
    colors(0x3498db, 0xebf5fb, 0x2980b9), // blue
    colors(0xe74c3c, 0xfadbd8, 0xc0392b), // red
    colors(0x2ecc71, 0xd5f4e6, 0x27ae60), // green
    colors(0xf39c12, 0xfef5e7, 0xd68910), // orange
    colors(0x9b59b6, 0xf4ecf7, 0x7d3c98), // purple
    colors(0x1abc9c, 0xd1f2eb, 0x16a085), // turquoise
    colors(0xe67e22, 0xfdebd0, 0xca6f1e), // carrot
    colors(0x34495e, 0xeaecee, 0x2c3e50), // dark gray
    colors(0x16a085, 0xd0ece7, 0x138d75), // teal
    colors(0x8e44ad, 0xebdef0, 0x7d3c98), // violet
];

/// Used for categories that were not indexed.
pub const DEFAULT_COLORS: CategoryColors = colors(0x667eea, 0xf0f4ff, 0x5568d3);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryColorMap(BTreeMap<String, CategoryColors>);

impl CategoryColorMap {
    /// `categories` must already be sorted and deduplicated.
    pub fn assign(categories: &[String]) -> Self {
        let map = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), PALETTE[i % PALETTE.len()]))
            .collect();
        Self(map)
    }

    pub fn get(&self, category: &str) -> CategoryColors {
        self.0.get(category).copied().unwrap_or(DEFAULT_COLORS)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One entry of a selector. `value: None` is the "all" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetOption<T> {
    pub label: String,
    pub value: Option<T>,
}

impl<T> FacetOption<T> {
    fn all(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: None,
        }
    }

    fn of(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
        }
    }
}

/// Option lists for the six filter controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetOptions {
    pub kinds: Vec<FacetOption<Kind>>,
    pub categories: Vec<FacetOption<String>>,
    pub levels: Vec<FacetOption<String>>,
    pub formats: Vec<FacetOption<Format>>,
    pub certification: Vec<FacetOption<bool>>,
}

/// Distinct facet values of the full dataset. Built once after load; filters
/// narrow what is displayed, never this universe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetIndex {
    categories: Vec<String>,
    levels: Vec<String>,
    colors: CategoryColorMap,
}

impl FacetIndex {
    pub fn build(all: &[Formation]) -> Self {
        let categories = sorted_distinct(all.iter().map(|f| f.category.as_str()));
        let levels = sorted_distinct(all.iter().map(|f| f.level.as_str()));
        let colors = CategoryColorMap::assign(&categories);

        if categories.len() > PALETTE.len() {
            tracing::debug!(
                categories = categories.len(),
                palette = PALETTE.len(),
                "category colors are reused"
            );
        }

        Self {
            categories,
            levels,
            colors,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    pub fn colors(&self) -> &CategoryColorMap {
        &self.colors
    }

    pub fn options(&self) -> FacetOptions {
        let mut kinds = vec![FacetOption::all("Tous")];
        kinds.extend(Kind::ALL.iter().map(|k| FacetOption::of(k.label(), *k)));

        let mut categories = vec![FacetOption::all("Toutes")];
        categories.extend(self.categories.iter().map(|c| FacetOption::of(c.clone(), c.clone())));

        let mut levels = vec![FacetOption::all("Tous")];
        levels.extend(self.levels.iter().map(|l| FacetOption::of(l.clone(), l.clone())));

        let mut formats = vec![FacetOption::all("Tous")];
        formats.extend(Format::ALL.iter().map(|f| FacetOption::of(f.label(), *f)));

        let certification = vec![
            FacetOption::all("Toutes"),
            FacetOption::of("Oui", true),
            FacetOption::of("Non", false),
        ];

        FacetOptions {
            kinds,
            categories,
            levels,
            formats,
            certification,
        }
    }
}

fn sorted_distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::fixtures::formation;

    #[test]
    fn categories_and_levels_are_sorted_and_distinct() {
        let mut a = formation("a", "Sécurité");
        a.level = "Avancé".to_string();
        let b = formation("b", "Cloud");
        let c = formation("c", "Sécurité");

        let index = FacetIndex::build(&[a, b, c]);
        assert_eq!(index.categories(), &["Cloud".to_string(), "Sécurité".to_string()]);
        assert_eq!(index.levels(), &["Avancé".to_string(), "Débutant".to_string()]);
    }

    #[test]
    fn options_start_with_all_sentinel() {
        let index = FacetIndex::build(&[formation("a", "B"), formation("b", "A")]);
        let options = index.options();

        let labels: Vec<&str> = options.categories.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Toutes", "A", "B"]);
        assert_eq!(options.categories[0].value, None);
        assert_eq!(options.levels[0].label, "Tous");
        assert_eq!(options.kinds.len(), 3);
        assert_eq!(options.formats.len(), 4);
        assert_eq!(options.certification[1].value, Some(true));
    }

    #[test]
    fn colors_follow_sorted_position() {
        let all = vec![formation("x", "C"), formation("y", "A"), formation("z", "B")];
        let first = FacetIndex::build(&all);
        let again = FacetIndex::build(&all);

        assert_eq!(first.colors().get("A"), PALETTE[0]);
        assert_eq!(first.colors().get("B"), PALETTE[1]);
        assert_eq!(first.colors().get("C"), PALETTE[2]);
        assert_eq!(first.colors(), again.colors());
    }

    #[test]
    fn palette_wraps_after_ten_categories() {
        let categories: Vec<String> = (0..12).map(|i| format!("cat{i:02}")).collect();
        let map = CategoryColorMap::assign(&categories);

        assert_eq!(map.get("cat10"), PALETTE[0]);
        assert_eq!(map.get("cat11"), PALETTE[1]);
    }

    #[test]
    fn unknown_category_uses_default() {
        let map = CategoryColorMap::assign(&["A".to_string()]);
        assert_eq!(map.get("Z"), DEFAULT_COLORS);
    }

    #[test]
    fn palette_hex_is_decoded() {
        assert_eq!(PALETTE[0].border, Color::Rgb(0x34, 0x98, 0xdb));
    }
}
