use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use ratatui::{backend::TestBackend, Terminal};

use formations_tui::app::{App, RenderedView, ViewMode};
use formations_tui::catalog::{Format, Kind};
use formations_tui::components;
use formations_tui::filter::{Certification, FilterCriteria};
use formations_tui::view_model::calendar::EventListBody;
use formations_tui::view_model::list::ListBody;

const DATASET: &str = r#"[
  {"titre":"Rust pour les systèmes","description":"Ownership, lifetimes et FFI",
   "type":"Formation","categorie":"Développement","niveau":"Avancé","format":"Présentiel",
   "certifiante":true,"date":"2025-06-20","horaire":"09:00 - 17:00","duree":"3 jours",
   "prix":"1 800 €","localisation":"Lyon","lien":"https://example.org/rust",
   "modules":["Ownership","Async"],"tags":["rust","systèmes"]},
  {"titre":"Kubernetes en production","description":"Déployer et observer",
   "type":"Conférence","categorie":"Cloud","niveau":"Intermédiaire","format":"Distanciel",
   "certifiante":false,"date":"2025-06-20","horaire":"14:00 - 15:30","duree":"1h30",
   "prix":"Gratuit","localisation":"Paris","lien":"https://example.org/k8s",
   "modules":[],"tags":[]},
  {"titre":"Ancienne session","description":"Déjà passée",
   "type":"Formation","categorie":"Archives","niveau":"Débutant","format":"Hybride",
   "certifiante":false,"date":"2025-05-02","horaire":"10:00","duree":"1 jour",
   "prix":"300 €","lien":"https://example.org/old","modules":[],"tags":[]},
  {"titre":"Sécurité web à la demande","description":"OWASP top 10",
   "type":"Formation","categorie":"Sécurité","niveau":"Débutant","format":"Distanciel",
   "certifiante":true,"date":"","horaire":"À votre rythme","duree":"10h",
   "prix":"250 €","lien":"https://example.org/secu","modules":["XSS"],"tags":["web"]},
  {"titre":"Data engineering","description":"Pipelines batch et streaming",
   "type":"Formation","categorie":"Data","niveau":"Intermédiaire","format":"Hybride",
   "certifiante":false,"date":"2025-07-03","horaire":"09:30 - 12:30","duree":"2 jours",
   "prix":"900 €","localisation":"Nantes","lien":"https://example.org/data",
   "modules":[],"tags":["data"]}
]"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn write_dataset(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

async fn loaded_app() -> (tempfile::NamedTempFile, App) {
    let file = write_dataset(DATASET);
    let mut app = App::with_today(file.path().to_path_buf(), today());
    app.load_dataset().await;
    (file, app)
}

fn titles(app: &App) -> Vec<&str> {
    app.filtered().iter().map(|f| f.title.as_str()).collect()
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
    terminal.draw(|frame| components::draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

#[tokio::test]
async fn load_hides_past_formations_but_indexes_them() {
    let (_file, app) = loaded_app().await;

    assert!(app.load_failure().is_none());
    assert_eq!(
        titles(&app),
        vec![
            "Rust pour les systèmes",
            "Kubernetes en production",
            "Sécurité web à la demande",
            "Data engineering",
        ]
    );

    let options = app.facet_options();
    let categories: Vec<&str> = options.categories.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        categories,
        vec!["Toutes", "Archives", "Cloud", "Data", "Développement", "Sécurité"]
    );
}

#[tokio::test]
async fn combined_criteria_narrow_the_list() {
    let (_file, mut app) = loaded_app().await;

    app.on_filter_change(FilterCriteria {
        format: Some(Format::Remote),
        ..Default::default()
    });
    assert_eq!(
        titles(&app),
        vec!["Kubernetes en production", "Sécurité web à la demande"]
    );

    app.on_filter_change(FilterCriteria {
        format: Some(Format::Remote),
        certification: Certification::Yes,
        ..Default::default()
    });
    assert_eq!(titles(&app), vec!["Sécurité web à la demande"]);

    app.on_filter_change(FilterCriteria {
        kind: Some(Kind::Conference),
        search: "OBSERVER".to_string(),
        ..Default::default()
    });
    assert_eq!(titles(&app), vec!["Kubernetes en production"]);
}

#[tokio::test]
async fn empty_result_shows_one_placeholder_in_both_views() {
    let (_file, mut app) = loaded_app().await;
    app.on_filter_change(FilterCriteria {
        search: "cobol".to_string(),
        ..Default::default()
    });

    match app.rendered() {
        RenderedView::List(vm) => {
            assert_eq!(vm.count_label, "0 résultats");
            assert!(matches!(vm.body, ListBody::Empty(_)));
        }
        other => panic!("expected list, got {other:?}"),
    }
    let text = screen(&app);
    assert_eq!(text.matches("Aucune formation ou conférence trouvée").count(), 1);

    app.on_view_switch(ViewMode::Calendar);
    match app.rendered() {
        RenderedView::Calendar(vm) => assert!(matches!(vm.summary.body, EventListBody::Empty(_))),
        other => panic!("expected calendar, got {other:?}"),
    }
    let text = screen(&app);
    assert_eq!(text.matches("Aucun événement ce mois-ci").count(), 1);
}

#[tokio::test]
async fn calendar_drill_down_and_navigation() {
    let (_file, mut app) = loaded_app().await;
    app.on_view_switch(ViewMode::Calendar);

    let text = screen(&app);
    assert!(text.contains("Juin 2025"));
    assert!(text.contains("Événements du mois"));

    assert!(app.on_day_click(NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()));
    let text = screen(&app);
    assert!(text.contains("Événements du vendredi 20 juin 2025"));
    assert_eq!(app.calendar_events().unwrap().items().len(), 2);

    app.on_month_change(1);
    assert!(app.day_detail.is_none());
    let summary = app.calendar_events().unwrap();
    let titles: Vec<&str> = summary.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Data engineering"]);
    assert_eq!(summary.items()[0].schedule(), "3 juillet 2025 - 09:30 - 12:30");
}

#[tokio::test]
async fn list_screen_shows_cards() {
    let (_file, app) = loaded_app().await;
    let text = screen(&app);

    assert!(text.contains("4 résultats"));
    assert!(text.contains("Rust pour les systèmes"));
    assert!(text.contains("Toujours disponible"));
    assert!(text.contains("#rust #systèmes"));
}

#[tokio::test]
async fn load_failure_replaces_list_and_keeps_calendar_reachable() {
    let file = write_dataset("{ not json");
    let mut app = App::with_today(file.path().to_path_buf(), today());
    app.load_dataset().await;

    assert!(app.load_failure().is_some());
    let text = screen(&app);
    assert!(text.contains("Erreur lors du chargement des formations"));

    app.on_view_switch(ViewMode::Calendar);
    match app.rendered() {
        RenderedView::Calendar(vm) => {
            assert_eq!(vm.grid.cells.len(), 42);
            assert!(vm.grid.cells.iter().all(|c| c.event_count == 0));
        }
        other => panic!("expected calendar, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_dataset_is_a_load_failure() {
    let mut app = App::with_today(PathBuf::from("/nonexistent/formations.json"), today());
    app.load_dataset().await;
    assert!(app.load_failure().is_some());
    assert!(app.filtered().is_empty());
}
