use chrono::{Datelike, Days, Months, NaiveDate};

use super::format;
use super::{ActionLink, Placeholder};
use crate::catalog::{Formation, Kind};
use crate::facets::CategoryColorMap;

/// Monday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Lun", "Mar", "Mer", "Jeu", "Ven", "Sam", "Dim"];

/// Six full weeks.
pub const GRID_CELLS: usize = 42;

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shifts a month by `delta` months. The day is pinned to 1 so short months
/// never roll over.
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let start = month_start(month);
    let months = Months::new(delta.unsigned_abs());
    let shifted = if delta >= 0 {
        start.checked_add_months(months)
    } else {
        start.checked_sub_months(months)
    };
    shifted.unwrap_or(start)
}

pub fn days_in_month(month: NaiveDate) -> u32 {
    let start = month_start(month);
    let next = shift_month(start, 1);
    next.signed_duration_since(start).num_days() as u32
}

/// Formations of `filtered` dated exactly `date`. Undated ones never match.
pub fn events_on<'a>(filtered: &'a [Formation], date: NaiveDate) -> Vec<&'a Formation> {
    filtered.iter().filter(|f| f.date == Some(date)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMonth {
    Previous,
    Current,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub month: CellMonth,
    pub is_today: bool,
    pub event_count: usize,
}

impl DayCell {
    pub fn has_events(&self) -> bool {
        self.event_count > 0
    }

    /// `2 événements`, only on cells that have some.
    pub fn count_label(&self) -> Option<String> {
        self.has_events()
            .then(|| format::count(self.event_count, "événement"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub headers: [&'static str; 7],
    pub cells: Vec<DayCell>,
}

impl CalendarGrid {
    pub fn build(month: NaiveDate, today: NaiveDate, filtered: &[Formation]) -> Self {
        let first = month_start(month);
        let leading = first.weekday().num_days_from_monday() as u64;
        let grid_start = first - Days::new(leading);

        let cells = (0..GRID_CELLS as u64)
            .map(|offset| {
                let date = grid_start + Days::new(offset);
                let position = match (date.year(), date.month()).cmp(&(first.year(), first.month())) {
                    std::cmp::Ordering::Less => CellMonth::Previous,
                    std::cmp::Ordering::Equal => CellMonth::Current,
                    std::cmp::Ordering::Greater => CellMonth::Next,
                };
                let current = position == CellMonth::Current;
                DayCell {
                    date,
                    day: date.day(),
                    month: position,
                    is_today: current && date == today,
                    event_count: if current {
                        filtered.iter().filter(|f| f.date == Some(date)).count()
                    } else {
                        0
                    },
                }
            })
            .collect();

        Self {
            headers: WEEKDAY_HEADERS,
            cells,
        }
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells
            .iter()
            .find(|c| c.month == CellMonth::Current && c.date == date)
    }

    pub fn count_of(&self, month: CellMonth) -> usize {
        self.cells.iter().filter(|c| c.month == month).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventItem {
    pub title: String,
    /// Long date, present in the month summary but not in a day detail.
    pub date: Option<String>,
    pub time: String,
    pub kind: Kind,
    pub format: &'static str,
    pub price: String,
    pub action: ActionLink,
}

impl EventItem {
    fn new(formation: &Formation, with_date: bool, colors: &CategoryColorMap) -> Self {
        Self {
            title: formation.title.clone(),
            date: with_date.then(|| format::date_or_always(formation.date)),
            time: formation.time.clone(),
            kind: formation.kind,
            format: formation.format.label(),
            price: formation.price.clone(),
            action: ActionLink::for_formation(formation, colors.get(&formation.category)),
        }
    }

    /// `15 juin 2025 - 09:00` in a summary, the time alone in a day detail.
    pub fn schedule(&self) -> String {
        match &self.date {
            Some(date) => format!("{} - {}", date, self.time),
            None => self.time.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventListBody {
    Events(Vec<EventItem>),
    Empty(Placeholder),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventList {
    pub heading: Option<String>,
    pub body: EventListBody,
}

impl EventList {
    /// Everything dated in the displayed month, oldest first.
    pub fn month_summary(month: NaiveDate, filtered: &[Formation], colors: &CategoryColorMap) -> Self {
        let first = month_start(month);
        let mut in_month: Vec<&Formation> = filtered
            .iter()
            .filter(|f| {
                f.date
                    .is_some_and(|d| d.year() == first.year() && d.month() == first.month())
            })
            .collect();
        in_month.sort_by_key(|f| f.date);

        if in_month.is_empty() {
            return Self {
                heading: None,
                body: EventListBody::Empty(Placeholder {
                    icon: "📅",
                    title: "Aucun événement ce mois-ci".to_string(),
                    hint: None,
                }),
            };
        }

        Self {
            heading: Some("Événements du mois".to_string()),
            body: EventListBody::Events(
                in_month
                    .into_iter()
                    .map(|f| EventItem::new(f, true, colors))
                    .collect(),
            ),
        }
    }

    /// Drill-down for one grid cell.
    pub fn day_detail(date: NaiveDate, events: &[&Formation], colors: &CategoryColorMap) -> Self {
        Self {
            heading: Some(format!(
                "Événements du {}",
                format::long_date_with_weekday(date)
            )),
            body: EventListBody::Events(
                events
                    .iter()
                    .map(|f| EventItem::new(f, false, colors))
                    .collect(),
            ),
        }
    }

    pub fn items(&self) -> &[EventItem] {
        match &self.body {
            EventListBody::Events(items) => items,
            EventListBody::Empty(_) => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarViewModel {
    pub month_label: String,
    pub grid: CalendarGrid,
    pub summary: EventList,
}

impl CalendarViewModel {
    pub fn build(
        month: NaiveDate,
        today: NaiveDate,
        filtered: &[Formation],
        colors: &CategoryColorMap,
    ) -> Self {
        Self {
            month_label: format::month_label(month),
            grid: CalendarGrid::build(month, today, filtered),
            summary: EventList::month_summary(month, filtered, colors),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::fixtures::{dated, formation, ymd};

    #[test]
    fn thirty_day_month_starting_wednesday() {
        // April 2026 starts on a Wednesday.
        let month = ymd(2026, 4, 1);
        assert_eq!(days_in_month(month), 30);

        let grid = CalendarGrid::build(month, ymd(2020, 1, 1), &[]);
        assert_eq!(grid.cells.len(), 42);
        assert_eq!(grid.count_of(CellMonth::Previous), 2);
        assert_eq!(grid.count_of(CellMonth::Current), 30);
        assert_eq!(grid.count_of(CellMonth::Next), 10);

        // Tail of March, counted back from the 31st.
        let leading: Vec<u32> = grid.cells[..2].iter().map(|c| c.day).collect();
        assert_eq!(leading, vec![30, 31]);
        assert_eq!(grid.cells[2].day, 1);
        assert_eq!(grid.cells[41].day, 10);
    }

    #[test]
    fn month_starting_monday_has_no_leading_cells() {
        let grid = CalendarGrid::build(ymd(2025, 9, 1), ymd(2020, 1, 1), &[]);
        assert_eq!(grid.count_of(CellMonth::Previous), 0);
        assert_eq!(grid.cells[0].day, 1);
        assert_eq!(grid.weeks().count(), 6);
    }

    #[test]
    fn month_starting_sunday_has_six_leading_cells() {
        // June 2025 starts on a Sunday.
        let grid = CalendarGrid::build(ymd(2025, 6, 1), ymd(2020, 1, 1), &[]);
        assert_eq!(grid.count_of(CellMonth::Previous), 6);
        assert_eq!(grid.cells[6].day, 1);
        assert_eq!(grid.headers[6], "Dim");
    }

    #[test]
    fn cells_are_annotated() {
        let data = vec![
            dated("a", "Dev", 2025, 6, 10),
            dated("b", "Dev", 2025, 6, 10),
            dated("c", "Dev", 2025, 7, 10),
            formation("undated", "Dev"),
        ];
        let grid = CalendarGrid::build(ymd(2025, 6, 1), ymd(2025, 6, 15), &data);

        let tenth = grid.cell(ymd(2025, 6, 10)).unwrap();
        assert_eq!(tenth.event_count, 2);
        assert_eq!(tenth.count_label().as_deref(), Some("2 événements"));

        let fifteenth = grid.cell(ymd(2025, 6, 15)).unwrap();
        assert!(fifteenth.is_today);
        assert!(!fifteenth.has_events());
        assert_eq!(fifteenth.count_label(), None);

        // July 10 shows as a trailing cell, never annotated.
        let trailing = grid.cells.iter().find(|c| c.date == ymd(2025, 7, 10));
        assert!(trailing.map_or(true, |c| c.event_count == 0));
    }

    #[test]
    fn shift_month_clamps_day_and_crosses_years() {
        assert_eq!(shift_month(ymd(2025, 1, 31), 1), ymd(2025, 2, 1));
        assert_eq!(shift_month(ymd(2025, 12, 15), 1), ymd(2026, 1, 1));
        assert_eq!(shift_month(ymd(2025, 1, 15), -1), ymd(2024, 12, 1));
        assert_eq!(shift_month(ymd(2025, 3, 31), -13), ymd(2024, 2, 1));
    }

    #[test]
    fn summary_is_sorted_and_scoped_to_month() {
        let data = vec![
            dated("late", "Dev", 2025, 6, 20),
            dated("other year", "Dev", 2024, 6, 5),
            dated("early", "Dev", 2025, 6, 2),
            formation("undated", "Dev"),
        ];
        let summary = EventList::month_summary(ymd(2025, 6, 1), &data, &CategoryColorMap::default());

        let titles: Vec<&str> = summary.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["early", "late"]);
        assert_eq!(summary.heading.as_deref(), Some("Événements du mois"));
        assert_eq!(summary.items()[0].schedule(), "2 juin 2025 - 09:00 - 12:00");
    }

    #[test]
    fn empty_month_yields_one_placeholder() {
        let summary = EventList::month_summary(ymd(2025, 6, 1), &[], &CategoryColorMap::default());
        assert!(matches!(summary.body, EventListBody::Empty(_)));
        assert!(summary.items().is_empty());
    }

    #[test]
    fn events_on_matches_exact_date_only() {
        let data = vec![
            dated("hit", "Dev", 2025, 6, 10),
            dated("miss", "Dev", 2025, 6, 11),
            formation("undated", "Dev"),
        ];
        let hits = events_on(&data, ymd(2025, 6, 10));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "hit");
    }

    #[test]
    fn day_detail_heading_and_items() {
        let data = vec![dated("hit", "Dev", 2025, 6, 15)];
        let events = events_on(&data, ymd(2025, 6, 15));
        let detail = EventList::day_detail(ymd(2025, 6, 15), &events, &CategoryColorMap::default());

        assert_eq!(
            detail.heading.as_deref(),
            Some("Événements du dimanche 15 juin 2025")
        );
        assert_eq!(detail.items()[0].schedule(), "09:00 - 12:00");
    }
}
