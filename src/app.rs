use std::path::PathBuf;

use chrono::{Datelike, Days, Local, NaiveDate};
use tracing::{debug, error, info, warn};

use crate::catalog::{Catalog, Formation, LoadFailure};
use crate::facets::{FacetIndex, FacetOption, FacetOptions};
use crate::filter::{self, FilterCriteria, FilterField};
use crate::view_model::calendar::{self, CalendarViewModel, EventList};
use crate::view_model::list::ListViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Calendar,
}

impl ViewMode {
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::List => ViewMode::Calendar,
            ViewMode::Calendar => ViewMode::List,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Filters,
    Search,
}

/// View model of whichever view is active. The inactive one is only built
/// when switched to.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedView {
    List(ListViewModel),
    Calendar(CalendarViewModel),
}

/// Owns all session state. Every mutation goes through one of the handlers
/// below and ends with the active view re-rendered.
pub struct App {
    pub running: bool,
    pub view_mode: ViewMode,
    pub input_mode: InputMode,
    pub active_filter: FilterField,
    pub today: NaiveDate,
    /// Always the first day of the displayed month.
    pub displayed_month: NaiveDate,
    /// Day cursor inside the displayed month.
    pub selected_date: NaiveDate,
    /// Card in the list, or entry of the calendar event list.
    pub selected_item: usize,
    pub day_detail: Option<EventList>,
    pub status_message: Option<String>,
    pub show_help: bool,
    criteria: FilterCriteria,
    rendered: RenderedView,
    filtered: Vec<Formation>,
    facets: FacetIndex,
    catalog: Catalog,
    load_failure: Option<LoadFailure>,
    data_path: PathBuf,
}

impl App {
    pub fn new(data_path: PathBuf) -> Self {
        Self::with_today(data_path, Local::now().date_naive())
    }

    pub fn with_today(data_path: PathBuf, today: NaiveDate) -> Self {
        let month = calendar::month_start(today);
        Self {
            running: true,
            view_mode: ViewMode::List,
            input_mode: InputMode::Normal,
            active_filter: FilterField::Kind,
            today,
            displayed_month: month,
            selected_date: today,
            selected_item: 0,
            day_detail: None,
            status_message: None,
            show_help: false,
            criteria: FilterCriteria::default(),
            rendered: RenderedView::List(ListViewModel::build(&[], &Default::default())),
            filtered: Vec::new(),
            facets: FacetIndex::default(),
            catalog: Catalog::default(),
            load_failure: None,
            data_path,
        }
    }

    /// Reads the dataset. A failure is kept and shown, never propagated.
    pub async fn load_dataset(&mut self) {
        match Catalog::load(&self.data_path, self.today).await {
            Ok(catalog) => self.install_catalog(catalog),
            Err(err) => {
                error!(error = %err, path = %self.data_path.display(), "failed to load formations");
                self.catalog = Catalog::default();
                self.facets = FacetIndex::default();
                self.filtered.clear();
                self.load_failure = Some(err);
                self.render_active_view();
            }
        }
    }

    /// Installs an already-loaded catalog, indexes its facets and shows the
    /// whole baseline.
    pub fn install_catalog(&mut self, catalog: Catalog) {
        self.facets = FacetIndex::build(catalog.all());
        self.catalog = catalog;
        self.load_failure = None;
        info!(
            categories = self.facets.categories().len(),
            levels = self.facets.levels().len(),
            "facets indexed"
        );
        self.apply_filters(self.criteria.clone());
    }

    pub fn load_failure(&self) -> Option<&LoadFailure> {
        self.load_failure.as_ref()
    }

    pub fn facet_options(&self) -> FacetOptions {
        self.facets.options()
    }

    pub fn facets(&self) -> &FacetIndex {
        &self.facets
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn filtered(&self) -> &[Formation] {
        &self.filtered
    }

    pub fn rendered(&self) -> &RenderedView {
        &self.rendered
    }

    /// Replaces the criteria, recomputes the filtered set from the baseline
    /// and re-renders the active view.
    pub fn apply_filters(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.filtered = filter::apply(self.catalog.baseline(), &self.criteria)
            .into_iter()
            .cloned()
            .collect();
        debug!(
            matched = self.filtered.len(),
            baseline = self.catalog.baseline().len(),
            "filters applied"
        );
        self.render_active_view();
    }

    pub fn render_active_view(&mut self) {
        self.selected_item = 0;
        self.rendered = match self.view_mode {
            ViewMode::List => match &self.load_failure {
                Some(err) => RenderedView::List(ListViewModel::failed(err.user_message())),
                None => RenderedView::List(ListViewModel::build(&self.filtered, self.facets.colors())),
            },
            ViewMode::Calendar => {
                self.day_detail = None;
                RenderedView::Calendar(CalendarViewModel::build(
                    self.displayed_month,
                    self.today,
                    &self.filtered,
                    self.facets.colors(),
                ))
            }
        };
    }

    /// Shifts the displayed month and rebuilds grid and summary.
    pub fn change_month(&mut self, delta: i32) {
        self.displayed_month = calendar::shift_month(self.displayed_month, delta);
        self.selected_date = if calendar::month_start(self.today) == self.displayed_month {
            self.today
        } else {
            self.displayed_month
        };
        if self.view_mode == ViewMode::Calendar {
            self.render_active_view();
        }
    }

    /// Filtered formations dated exactly `date`.
    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&Formation> {
        calendar::events_on(&self.filtered, date)
    }

    // ── Command handlers ──

    pub fn on_filter_change(&mut self, criteria: FilterCriteria) {
        if criteria != self.criteria {
            self.apply_filters(criteria);
        }
    }

    pub fn on_view_switch(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.render_active_view();
    }

    pub fn on_month_change(&mut self, delta: i32) {
        self.change_month(delta);
    }

    /// Opens the day detail. Returns `false` for days without events, which
    /// are not clickable.
    pub fn on_day_click(&mut self, date: NaiveDate) -> bool {
        let events = self.events_for_date(date);
        if events.is_empty() {
            return false;
        }
        let detail = EventList::day_detail(date, &events, self.facets.colors());
        self.selected_date = date;
        self.selected_item = 0;
        self.day_detail = Some(detail);
        true
    }

    pub fn close_day_detail(&mut self) {
        self.day_detail = None;
        self.selected_item = 0;
    }

    pub fn reset_filters(&mut self) {
        self.apply_filters(FilterCriteria::default());
        self.status_message = Some("Filtres réinitialisés".to_string());
    }

    /// Steps the option of the active filter control by `step`.
    pub fn cycle_filter(&mut self, step: isize) {
        let options = self.facet_options();
        let mut criteria = self.criteria.clone();
        match self.active_filter {
            FilterField::Kind => criteria.kind = cycle(&options.kinds, &criteria.kind, step),
            FilterField::Category => {
                criteria.category = cycle(&options.categories, &criteria.category, step)
            }
            FilterField::Level => criteria.level = cycle(&options.levels, &criteria.level, step),
            FilterField::Format => criteria.format = cycle(&options.formats, &criteria.format, step),
            FilterField::Certification => {
                criteria.certification =
                    cycle(&options.certification, &criteria.certification.as_option(), step).into()
            }
            FilterField::Search => return,
        }
        self.on_filter_change(criteria);
    }

    pub fn search_input(&mut self, c: char) {
        let mut criteria = self.criteria.clone();
        criteria.search.push(c);
        self.on_filter_change(criteria);
    }

    pub fn search_backspace(&mut self) {
        let mut criteria = self.criteria.clone();
        if criteria.search.pop().is_some() {
            self.on_filter_change(criteria);
        }
    }

    pub fn go_to_today(&mut self) {
        self.today = Local::now().date_naive();
        self.displayed_month = calendar::month_start(self.today);
        self.selected_date = self.today;
        if self.view_mode == ViewMode::Calendar {
            self.render_active_view();
        }
    }

    /// Moves the day cursor, staying inside the displayed month.
    pub fn move_selected_day(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.selected_date.checked_add_days(Days::new(days as u64))
        } else {
            self.selected_date.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        if let Some(date) = moved {
            if date.year() == self.displayed_month.year() && date.month() == self.displayed_month.month() {
                self.selected_date = date;
            }
        }
    }

    pub fn next_item(&mut self) {
        let len = self.item_count();
        if len > 0 {
            self.selected_item = (self.selected_item + 1).min(len - 1);
        }
    }

    pub fn prev_item(&mut self) {
        self.selected_item = self.selected_item.saturating_sub(1);
    }

    /// The event list shown beside the grid: the day detail when one is
    /// open, the month summary otherwise.
    pub fn calendar_events(&self) -> Option<&EventList> {
        match &self.rendered {
            RenderedView::Calendar(vm) => Some(self.day_detail.as_ref().unwrap_or(&vm.summary)),
            RenderedView::List(_) => None,
        }
    }

    fn item_count(&self) -> usize {
        match &self.rendered {
            RenderedView::List(vm) => vm.cards().len(),
            RenderedView::Calendar(_) => self.calendar_events().map_or(0, |l| l.items().len()),
        }
    }

    pub fn selected_link(&self) -> Option<&str> {
        match &self.rendered {
            RenderedView::List(vm) => vm.cards().get(self.selected_item).map(|c| c.action.url.as_str()),
            RenderedView::Calendar(_) => self
                .calendar_events()
                .and_then(|l| l.items().get(self.selected_item))
                .map(|i| i.action.url.as_str()),
        }
    }

    pub fn open_selected_link(&mut self) {
        let Some(url) = self.selected_link().map(str::to_string) else {
            return;
        };
        match opener::open(&url) {
            Ok(()) => {
                info!(%url, "opened link");
                self.status_message = Some(format!("Ouvert : {url}"));
            }
            Err(err) => {
                warn!(%url, error = %err, "failed to open link");
                self.status_message = Some(format!("Impossible d'ouvrir {url}"));
            }
        }
    }
}

/// Next option after `current` in `options`, wrapping around. Values no
/// longer offered restart from the sentinel.
fn cycle<T: Clone + PartialEq>(options: &[FacetOption<T>], current: &Option<T>, step: isize) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let len = options.len() as isize;
    let pos = options
        .iter()
        .position(|o| &o.value == current)
        .unwrap_or(0) as isize;
    let next = (pos + step).rem_euclid(len) as usize;
    options[next].value.clone()
}
