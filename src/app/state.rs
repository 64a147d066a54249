use crate::app::parsing::parse_date_input;
use crate::billing::{self, Elapsed};
use crate::config::{GlobalConfig, PlugId};
use crate::data_model::plug::{PlugField, PlugRecord};
use chrono::NaiveDateTime;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ViewMode {
    Admin,
    Customer,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Admin => ViewMode::Customer,
            ViewMode::Customer => ViewMode::Admin,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Admin => "Admin Panel",
            ViewMode::Customer => "Plug Tracking Dashboard",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortField {
    WellId,
    InstallDate,
}

impl SortField {
    pub fn label(self) -> &'static str {
        match self {
            SortField::WellId => "Well ID",
            SortField::InstallDate => "Install Date",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// The whole dashboard state. Mutated only through the methods below, all of
/// them plain transitions with no rendering dependency, so the record list,
/// filtering and sorting behave identically under test and under the TUI.
pub struct AppState {
    pub global: GlobalConfig,
    pub records: Vec<PlugRecord>,
    /// Index into the visible (filtered + sorted) list, not into `records`.
    pub selected_record: usize,
    pub view_mode: ViewMode,
    pub search_term: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl AppState {
    pub fn new(global: GlobalConfig) -> Self {
        Self {
            global,
            records: Vec::new(),
            selected_record: 0,
            view_mode: ViewMode::Admin,
            search_term: String::new(),
            sort_field: SortField::InstallDate,
            sort_direction: SortDirection::Ascending,
        }
    }

    /// Appends an empty record and selects it.
    pub fn add_record(&mut self) -> PlugId {
        let record = PlugRecord::empty();
        let id = record.id;
        self.records.push(record);
        self.select_id(id);
        id
    }

    /// Removes a record by its index into `records`. Immediate and
    /// irreversible within the session; there is no soft delete.
    pub fn remove_record(&mut self, index: usize) {
        if index >= self.records.len() {
            return;
        }
        self.records.remove(index);
        self.clamp_selection();
    }

    /// In-place field edit. Date fields go through the permissive parser:
    /// text that does not parse clears the field instead of failing.
    pub fn set_field(&mut self, index: usize, field: PlugField, value: &str) {
        let Some(record) = self.records.get_mut(index) else {
            return;
        };
        match field {
            PlugField::WellId => record.well_id = value.to_string(),
            PlugField::Uwi => record.uwi = value.to_string(),
            PlugField::InstallDate => record.install_date = parse_date_input(value),
            PlugField::RetrievalDate => record.retrieval_date = parse_date_input(value),
        }
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggle();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.clamp_selection();
    }

    /// Selects the sort field and reverses the current direction. The
    /// direction flips on every activation, even when switching fields,
    /// matching how the dashboard's sort buttons have always behaved.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort_field = field;
        self.sort_direction = self.sort_direction.reversed();
    }

    /// The records as displayed: filtered by the search term, then sorted.
    /// Each entry carries its index into `records` so edits and deletes can
    /// resolve back to the underlying record.
    pub fn visible_records(&self) -> Vec<(usize, &PlugRecord)> {
        let mut visible: Vec<(usize, &PlugRecord)> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.matches(&self.search_term))
            .collect();

        match self.sort_field {
            SortField::WellId => visible.sort_by(|(_, a), (_, b)| {
                let ordering = a.well_id.to_lowercase().cmp(&b.well_id.to_lowercase());
                self.directed(ordering)
            }),
            SortField::InstallDate => visible.sort_by(|(_, a), (_, b)| {
                // Records without an install date sort last in either direction.
                match (a.install_date, b.install_date) {
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (Some(a), Some(b)) => self.directed(a.cmp(&b)),
                }
            }),
        }
        visible
    }

    fn directed(&self, ordering: Ordering) -> Ordering {
        match self.sort_direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn selected_plug(&self) -> Option<&PlugRecord> {
        self.visible_records()
            .get(self.selected_record)
            .map(|(_, record)| *record)
    }

    /// Index into `records` of the currently selected visible record.
    pub fn selected_record_index(&self) -> Option<usize> {
        self.visible_records()
            .get(self.selected_record)
            .map(|(index, _)| *index)
    }

    pub fn select_next(&mut self) {
        if self.selected_record + 1 < self.visible_records().len() {
            self.selected_record += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_record = self.selected_record.saturating_sub(1);
    }

    fn select_id(&mut self, id: PlugId) {
        if let Some(pos) = self
            .visible_records()
            .iter()
            .position(|(_, record)| record.id == id)
        {
            self.selected_record = pos;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_records().len();
        if len == 0 {
            self.selected_record = 0;
        } else if self.selected_record >= len {
            self.selected_record = len - 1;
        }
    }

    /// Live elapsed readout for a record; None suppresses the timer when the
    /// plug has no install date yet.
    pub fn record_elapsed(&self, record: &PlugRecord, now: NaiveDateTime) -> Option<Elapsed> {
        record
            .install_date
            .map(|install| billing::elapsed(install, record.retrieval_date, now))
    }

    pub fn record_cost(&self, record: &PlugRecord, now: NaiveDateTime) -> f64 {
        billing::cost(
            record.install_date,
            record.retrieval_date,
            now,
            &self.global.rates,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn app_with_records(specs: &[(&str, &str, Option<NaiveDateTime>)]) -> AppState {
        let mut app = AppState::new(GlobalConfig::default());
        for (well_id, uwi, install) in specs {
            let index = app.records.len();
            app.add_record();
            app.set_field(index, PlugField::WellId, well_id);
            app.set_field(index, PlugField::Uwi, uwi);
            if let Some(install) = install {
                app.records[index].install_date = Some(*install);
            }
        }
        app
    }

    #[test]
    fn add_record_appends_empty_and_selects_it() {
        let mut app = AppState::new(GlobalConfig::default());
        let id = app.add_record();
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.selected_plug().map(|r| r.id), Some(id));
    }

    #[test]
    fn remove_record_is_immediate() {
        let mut app = app_with_records(&[("A1", "", None), ("B2", "", None)]);
        app.remove_record(0);
        assert_eq!(app.records.len(), 1);
        assert_eq!(app.records[0].well_id, "B2");
    }

    #[test]
    fn remove_record_ignores_out_of_range_index() {
        let mut app = app_with_records(&[("A1", "", None)]);
        app.remove_record(5);
        assert_eq!(app.records.len(), 1);
    }

    #[test]
    fn set_field_clears_date_on_unparseable_text() {
        let mut app = app_with_records(&[("A1", "", Some(at(2024, 1, 1)))]);
        app.set_field(0, PlugField::InstallDate, "not a date");
        assert_eq!(app.records[0].install_date, None);
    }

    #[test]
    fn search_filters_case_insensitively() {
        let mut app = app_with_records(&[("A1", "", None), ("B2", "", None)]);
        app.set_search("a1");
        let visible = app.visible_records();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1.well_id, "A1");
    }

    #[test]
    fn search_matches_uwi_too() {
        let mut app = app_with_records(&[("A1", "100/04-21", None), ("B2", "200/08-15", None)]);
        app.set_search("08-15");
        let visible = app.visible_records();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].1.well_id, "B2");
    }

    #[test]
    fn missing_install_dates_sort_last_in_both_directions() {
        let mut app = app_with_records(&[
            ("no-date", "", None),
            ("old", "", Some(at(2023, 1, 1))),
            ("new", "", Some(at(2024, 1, 1))),
        ]);
        app.sort_field = SortField::InstallDate;

        app.sort_direction = SortDirection::Ascending;
        let ascending: Vec<_> = app
            .visible_records()
            .iter()
            .map(|(_, r)| r.well_id.clone())
            .collect();
        assert_eq!(ascending, vec!["old", "new", "no-date"]);

        app.sort_direction = SortDirection::Descending;
        let descending: Vec<_> = app
            .visible_records()
            .iter()
            .map(|(_, r)| r.well_id.clone())
            .collect();
        assert_eq!(descending, vec!["new", "old", "no-date"]);
    }

    #[test]
    fn sort_by_well_id_is_lexicographic() {
        let mut app = app_with_records(&[("b2", "", None), ("A1", "", None)]);
        app.sort_field = SortField::WellId;
        app.sort_direction = SortDirection::Ascending;
        let ordered: Vec<_> = app
            .visible_records()
            .iter()
            .map(|(_, r)| r.well_id.clone())
            .collect();
        assert_eq!(ordered, vec!["A1", "b2"]);
    }

    #[test]
    fn toggle_sort_flips_direction_on_every_activation() {
        let mut app = AppState::new(GlobalConfig::default());
        assert_eq!(app.sort_direction, SortDirection::Ascending);

        app.toggle_sort(SortField::WellId);
        assert_eq!(app.sort_field, SortField::WellId);
        assert_eq!(app.sort_direction, SortDirection::Descending);

        // Switching fields flips too.
        app.toggle_sort(SortField::InstallDate);
        assert_eq!(app.sort_field, SortField::InstallDate);
        assert_eq!(app.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn toggle_view_round_trips() {
        let mut app = AppState::new(GlobalConfig::default());
        assert_eq!(app.view_mode, ViewMode::Admin);
        app.toggle_view();
        assert_eq!(app.view_mode, ViewMode::Customer);
        app.toggle_view();
        assert_eq!(app.view_mode, ViewMode::Admin);
    }

    #[test]
    fn selection_clamps_when_filter_shrinks_the_list() {
        let mut app = app_with_records(&[("A1", "", None), ("A2", "", None), ("B1", "", None)]);
        app.selected_record = 2;
        app.set_search("a");
        assert_eq!(app.selected_record, 1);
        app.set_search("zzz");
        assert_eq!(app.selected_record, 0);
        assert!(app.selected_plug().is_none());
    }

    #[test]
    fn record_elapsed_is_suppressed_without_install_date() {
        let app = app_with_records(&[("A1", "", None)]);
        let now = at(2024, 1, 1);
        assert!(app.record_elapsed(&app.records[0], now).is_none());
    }

    #[test]
    fn record_cost_uses_configured_rates() {
        let mut app = app_with_records(&[("A1", "", Some(at(2024, 1, 1)))]);
        app.global.rates = crate::config::RateSchedule::half_after(10.0, 60);
        let now = at(2024, 1, 3);
        assert_eq!(app.record_cost(&app.records[0], now), 20.0);
    }
}
