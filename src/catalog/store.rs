use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::error::LoadFailure;
use super::formation::Formation;

/// Default location of the dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "formations.json";

/// The loaded dataset: every record, plus the baseline with past-dated
/// formations removed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    all: Vec<Formation>,
    baseline: Vec<Formation>,
}

impl Catalog {
    pub async fn load(path: &Path, today: NaiveDate) -> Result<Self, LoadFailure> {
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| LoadFailure::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_json(&text, today)?;
        info!(
            path = %path.display(),
            total = catalog.all.len(),
            upcoming = catalog.baseline.len(),
            "loaded formations"
        );
        Ok(catalog)
    }

    /// Parses a JSON array of formations. Records are validated one by one so
    /// the error can name the offending index.
    pub fn from_json(text: &str, today: NaiveDate) -> Result<Self, LoadFailure> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(text)?;

        let all = raw
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<Formation>(value)
                    .map_err(|source| LoadFailure::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_formations(all, today))
    }

    pub fn from_formations(all: Vec<Formation>, today: NaiveDate) -> Self {
        let baseline: Vec<Formation> = all
            .iter()
            .filter(|f| f.is_upcoming(today))
            .cloned()
            .collect();
        debug!(hidden = all.len() - baseline.len(), "past formations hidden");
        Self { all, baseline }
    }

    /// Every record, including past ones. Facets are computed from this.
    pub fn all(&self) -> &[Formation] {
        &self.all
    }

    /// Records the filter engine works on.
    pub fn baseline(&self) -> &[Formation] {
        &self.baseline
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::catalog::fixtures::ymd;

    const DATASET: &str = r#"[
        {"titre":"Hier","description":"d","type":"Formation","categorie":"Data",
         "niveau":"Débutant","format":"Distanciel","certifiante":false,"date":"2025-06-14",
         "horaire":"9h","duree":"1j","prix":"0","lien":"https://a","modules":[],"tags":[]},
        {"titre":"Aujourd'hui","description":"d","type":"Formation","categorie":"Data",
         "niveau":"Débutant","format":"Distanciel","certifiante":false,"date":"2025-06-15",
         "horaire":"9h","duree":"1j","prix":"0","lien":"https://b","modules":[],"tags":[]},
        {"titre":"Toujours","description":"d","type":"Conférence","categorie":"Cloud",
         "niveau":"Avancé","format":"Présentiel","certifiante":true,
         "horaire":"9h","duree":"1j","prix":"0","lien":"https://c","modules":["m"],"tags":["t"]}
    ]"#;

    #[test]
    fn baseline_hides_past_formations() {
        let catalog = Catalog::from_json(DATASET, ymd(2025, 6, 15)).unwrap();

        assert_eq!(catalog.all().len(), 3);
        let titles: Vec<&str> = catalog.baseline().iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["Aujourd'hui", "Toujours"]);
    }

    #[test]
    fn non_array_payload_is_a_parse_failure() {
        let err = Catalog::from_json(r#"{"titre":"x"}"#, ymd(2025, 6, 15)).unwrap_err();
        assert!(matches!(err, LoadFailure::Parse(_)));
    }

    #[test]
    fn missing_modules_is_rejected_with_index() {
        let text = r#"[{"titre":"t","description":"d","type":"Formation","categorie":"c",
            "niveau":"n","format":"Distanciel","certifiante":false,"horaire":"h",
            "duree":"d","prix":"p","lien":"l","tags":[]}]"#;
        let err = Catalog::from_json(text, ymd(2025, 6, 15)).unwrap_err();
        assert!(matches!(err, LoadFailure::InvalidRecord { index: 0, .. }));
        assert!(err.to_string().contains("modules"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let text = DATASET.replacen("Distanciel", "En ligne", 1);
        let err = Catalog::from_json(&text, ymd(2025, 6, 15)).unwrap_err();
        assert!(matches!(err, LoadFailure::InvalidRecord { index: 0, .. }));
    }

    #[tokio::test]
    async fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let catalog = Catalog::load(file.path(), ymd(2025, 6, 15)).await.unwrap();
        assert_eq!(catalog.baseline().len(), 2);
    }

    #[tokio::test]
    async fn missing_file_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("absent.json"), ymd(2025, 6, 15))
            .await
            .unwrap_err();
        assert!(matches!(err, LoadFailure::Read { .. }));
    }
}
