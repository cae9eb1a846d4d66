//! Builders shared by unit tests.

use chrono::NaiveDate;

use super::{Format, Formation, Kind};

pub fn formation(title: &str, category: &str) -> Formation {
    Formation {
        title: title.to_string(),
        description: format!("About {title}"),
        kind: Kind::Formation,
        category: category.to_string(),
        level: "Débutant".to_string(),
        format: Format::InPerson,
        certified: false,
        date: None,
        time: "09:00 - 12:00".to_string(),
        duration: "3h".to_string(),
        price: "Gratuit".to_string(),
        location: Some("Paris".to_string()),
        link: format!("https://example.org/{}", title.to_lowercase().replace(' ', "-")),
        modules: Vec::new(),
        tags: Vec::new(),
    }
}

pub fn dated(title: &str, category: &str, y: i32, m: u32, d: u32) -> Formation {
    Formation {
        date: NaiveDate::from_ymd_opt(y, m, d),
        ..formation(title, category)
    }
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
