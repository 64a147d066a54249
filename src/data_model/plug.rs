use crate::app::format_date_input;
use crate::config::PlugId;
use chrono::NaiveDateTime;
use uuid::Uuid;

/// A tracked physical well plug and its billing window. The id is assigned
/// at creation and never changes; everything else is free-form and editable
/// in place. A missing install date means "not yet installed"; a missing
/// retrieval date means "still installed".
#[derive(Clone, Debug)]
pub struct PlugRecord {
    pub id: PlugId,
    pub well_id: String,
    pub uwi: String,
    pub install_date: Option<NaiveDateTime>,
    pub retrieval_date: Option<NaiveDateTime>,
}

impl PlugRecord {
    pub fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            well_id: String::new(),
            uwi: String::new(),
            install_date: None,
            retrieval_date: None,
        }
    }

    /// Case-insensitive substring match against the well id and UWI labels.
    /// An empty term retains everything.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.well_id.to_lowercase().contains(&term) || self.uwi.to_lowercase().contains(&term)
    }

    /// Current field value as editable text, used to seed edit prompts.
    pub fn field_text(&self, field: PlugField) -> String {
        match field {
            PlugField::WellId => self.well_id.clone(),
            PlugField::Uwi => self.uwi.clone(),
            PlugField::InstallDate => self.install_date.map(format_date_input).unwrap_or_default(),
            PlugField::RetrievalDate => {
                self.retrieval_date.map(format_date_input).unwrap_or_default()
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlugField {
    WellId,
    Uwi,
    InstallDate,
    RetrievalDate,
}

impl PlugField {
    pub fn label(self) -> &'static str {
        match self {
            PlugField::WellId => "Well ID",
            PlugField::Uwi => "UWI",
            PlugField::InstallDate => "Install Date",
            PlugField::RetrievalDate => "Retrieval Date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn empty_records_get_distinct_ids() {
        let a = PlugRecord::empty();
        let b = PlugRecord::empty();
        assert_ne!(a.id, b.id);
        assert!(a.well_id.is_empty());
        assert!(a.install_date.is_none());
    }

    #[test]
    fn matches_is_case_insensitive_over_both_labels() {
        let mut record = PlugRecord::empty();
        record.well_id = "A1".to_string();
        record.uwi = "100/04-21".to_string();

        assert!(record.matches("a1"));
        assert!(record.matches("04-21"));
        assert!(record.matches(""));
        assert!(!record.matches("b2"));
    }

    #[test]
    fn field_text_round_trips_dates() {
        let mut record = PlugRecord::empty();
        record.install_date = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(8, 30, 0);

        assert_eq!(record.field_text(PlugField::InstallDate), "2024-03-15T08:30");
        assert_eq!(record.field_text(PlugField::RetrievalDate), "");
    }
}
