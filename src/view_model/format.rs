//! fr-FR date and count formatting.

use chrono::{Datelike, NaiveDate, Weekday};

pub const ALWAYS_AVAILABLE: &str = "Toujours disponible";

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "janvier",
        2 => "février",
        3 => "mars",
        4 => "avril",
        5 => "mai",
        6 => "juin",
        7 => "juillet",
        8 => "août",
        9 => "septembre",
        10 => "octobre",
        11 => "novembre",
        12 => "décembre",
        _ => "?",
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lundi",
        Weekday::Tue => "mardi",
        Weekday::Wed => "mercredi",
        Weekday::Thu => "jeudi",
        Weekday::Fri => "vendredi",
        Weekday::Sat => "samedi",
        Weekday::Sun => "dimanche",
    }
}

/// `15 juin 2025`
pub fn long_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_name(date.month()), date.year())
}

/// `dimanche 15 juin 2025`
pub fn long_date_with_weekday(date: NaiveDate) -> String {
    format!("{} {}", weekday_name(date.weekday()), long_date(date))
}

pub fn date_or_always(date: Option<NaiveDate>) -> String {
    date.map(long_date)
        .unwrap_or_else(|| ALWAYS_AVAILABLE.to_string())
}

/// `Juin 2025`
pub fn month_label(month: NaiveDate) -> String {
    let name = month_name(month.month());
    let mut chars = name.chars();
    let capitalized: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{} {}", capitalized, month.year())
}

/// `1 résultat`, `0 résultats`, `3 résultats`
pub fn count(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}
