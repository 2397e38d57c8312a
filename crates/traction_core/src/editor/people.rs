//! Accountability chart and People Analyzer editor.

use crate::editor::is_filled;
use crate::model::domain::{PEOPLE_KEY, VISION_KEY};
use crate::model::editable_list::EditableList;
use crate::model::people::{
    AnalyzedPerson, AnalyzedPersonField, Gwc, PeopleDocument, Seat, SeatField,
};
use crate::model::vision::VisionDocument;
use crate::repo::record_repo::{generate_unique_id, RecordStore};

/// Columns shown in the analyzer before any core values are defined.
const PLACEHOLDER_CORE_VALUES: [&str; 3] = ["Value 1", "Value 2", "Value 3"];

#[derive(Debug, Clone, PartialEq)]
pub struct PeopleEditor {
    seats: EditableList<Seat>,
    analyzer: EditableList<AnalyzedPerson>,
    core_values: Vec<String>,
}

impl Default for PeopleEditor {
    fn default() -> Self {
        Self::from_parts(PeopleDocument::default(), Vec::new())
    }
}

impl PeopleEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the people record plus the VTO core values used as analyzer columns.
    pub fn load<S: RecordStore>(store: &S) -> Self {
        let document = store
            .load_as::<PeopleDocument>(PEOPLE_KEY)
            .unwrap_or_default();
        let core_values = store
            .load_as::<VisionDocument>(VISION_KEY)
            .map(|vision| vision.vto.core_values)
            .unwrap_or_default();
        Self::from_parts(document, core_values)
    }

    /// An empty analyzer starts with one blank row to type into.
    fn from_parts(document: PeopleDocument, core_values: Vec<String>) -> Self {
        let mut analyzer = EditableList::from_entries(document.people_analyzer);
        if analyzer.is_empty() {
            analyzer.append(AnalyzedPerson::blank(generate_unique_id()));
        }
        let core_values = if core_values.is_empty() {
            PLACEHOLDER_CORE_VALUES.iter().map(|v| v.to_string()).collect()
        } else {
            core_values
        };
        Self {
            seats: EditableList::from_entries(document.accountability_chart),
            analyzer,
            core_values,
        }
    }

    /// Accountability seats in chart order.
    ///
    /// Seat ids are not persisted: every [`PeopleEditor::load`] assigns fresh
    /// ones, so an id obtained before a reload no longer resolves after it.
    pub fn seats(&self) -> &EditableList<Seat> {
        &self.seats
    }

    pub fn analyzer(&self) -> &EditableList<AnalyzedPerson> {
        &self.analyzer
    }

    pub fn core_values(&self) -> &[String] {
        &self.core_values
    }

    pub fn add_seat(&mut self) -> String {
        let seat = Seat::new("", "");
        let id = seat.id.clone();
        self.seats.append(seat);
        id
    }

    pub fn remove_seat(&mut self, id: &str) -> Option<Seat> {
        self.seats.remove(id)
    }

    pub fn set_seat_field(&mut self, id: &str, field: SeatField, value: impl Into<String>) -> bool {
        self.seats.set_field(id, field, value)
    }

    pub fn add_person(&mut self) -> String {
        let person = AnalyzedPerson::blank(generate_unique_id());
        let id = person.id.clone();
        self.analyzer.append(person);
        id
    }

    pub fn remove_person(&mut self, id: &str) -> Option<AnalyzedPerson> {
        self.analyzer.remove(id)
    }

    pub fn set_person_field(
        &mut self,
        id: &str,
        field: AnalyzedPersonField,
        value: impl Into<String>,
    ) -> bool {
        self.analyzer.set_field(id, field, value)
    }

    /// Records the rating (`+`, `+/-`, `-`) a person gets on one core value.
    pub fn rate_value(&mut self, id: &str, core_value: &str, rating: impl Into<String>) -> bool {
        let rating = rating.into();
        self.analyzer.update(id, |person| {
            person.values.insert(core_value.to_string(), rating);
        })
    }

    pub fn set_gwc(&mut self, id: &str, gwc: Gwc) -> bool {
        self.analyzer.update(id, |person| person.gwc = gwc)
    }

    /// Record written by [`PeopleEditor::save`]; unnamed analyzer rows are dropped.
    pub fn document(&self) -> PeopleDocument {
        PeopleDocument {
            accountability_chart: self.seats.entries().to_vec(),
            people_analyzer: self.analyzer.saved_entries(|person| is_filled(&person.name)),
        }
    }

    pub fn save<S: RecordStore>(&mut self, store: &S) {
        self.analyzer.retain(|person| is_filled(&person.name));
        store.save_as(PEOPLE_KEY, &self.document());
    }
}

#[cfg(test)]
mod tests {
    use super::PeopleEditor;
    use crate::model::people::{AnalyzedPersonField, Gwc, SeatField};

    #[test]
    fn fresh_editor_has_one_blank_analyzer_row_and_placeholders() {
        let editor = PeopleEditor::new();
        assert_eq!(editor.analyzer().len(), 1);
        assert_eq!(editor.core_values().len(), 3);
        assert!(editor.document().people_analyzer.is_empty());
    }

    #[test]
    fn ratings_and_gwc_are_kept_for_named_people() {
        let mut editor = PeopleEditor::new();
        let person = editor.add_person();
        assert!(editor.set_person_field(&person, AnalyzedPersonField::Name, "Ana"));
        assert!(editor.rate_value(&person, "Humble", "+"));
        assert!(editor.set_gwc(
            &person,
            Gwc {
                gets_it: true,
                wants_it: true,
                capacity: false,
            }
        ));
        let seat = editor.add_seat();
        assert!(editor.set_seat_field(&seat, SeatField::Role, "Integrator"));

        let document = editor.document();
        assert_eq!(document.people_analyzer.len(), 1);
        assert_eq!(document.people_analyzer[0].values["Humble"], "+");
        assert!(document.people_analyzer[0].gwc.wants_it);
        assert_eq!(document.accountability_chart[0].role, "Integrator");
    }
}
