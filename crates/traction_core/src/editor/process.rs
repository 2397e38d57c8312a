//! Process documentation editor.

use crate::editor::is_filled;
use crate::model::domain::PROCESSES_KEY;
use crate::model::editable_list::EditableList;
use crate::model::process::{Process, ProcessField, ProcessStep, StepField};
use crate::repo::record_repo::{generate_unique_id, RecordStore};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessEditor {
    processes: EditableList<Process>,
}

impl ProcessEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<S: RecordStore>(store: &S) -> Self {
        Self {
            processes: store.load_as(PROCESSES_KEY).unwrap_or_default(),
        }
    }

    pub fn processes(&self) -> &EditableList<Process> {
        &self.processes
    }

    /// Appends an unnamed process with one blank step and returns its id.
    pub fn add_process(&mut self) -> String {
        let mut process = Process::new(generate_unique_id(), "");
        process
            .steps
            .append(ProcessStep::new(generate_unique_id(), ""));
        let id = process.id.clone();
        self.processes.append(process);
        id
    }

    pub fn remove_process(&mut self, id: &str) -> Option<Process> {
        self.processes.remove(id)
    }

    pub fn set_field(&mut self, id: &str, field: ProcessField, value: impl Into<String>) -> bool {
        self.processes.set_field(id, field, value)
    }

    /// Appends a blank step; `None` if the process is unknown.
    pub fn add_step(&mut self, process_id: &str) -> Option<String> {
        let step = ProcessStep::new(generate_unique_id(), "");
        let step_id = step.id.clone();
        self.processes
            .update(process_id, |process| {
                process.steps.append(step);
            })
            .then_some(step_id)
    }

    pub fn remove_step(&mut self, process_id: &str, step_id: &str) -> bool {
        let mut removed = false;
        self.processes.update(process_id, |process| {
            removed = process.steps.remove(step_id).is_some();
        });
        removed
    }

    pub fn set_step(
        &mut self,
        process_id: &str,
        step_id: &str,
        field: StepField,
        value: impl Into<String>,
    ) -> bool {
        let value = value.into();
        let mut changed = false;
        self.processes.update(process_id, |process| {
            changed = process.steps.set_field(step_id, field, value);
        });
        changed
    }

    /// Drops unnamed processes and empty steps, then writes the rest.
    pub fn save<S: RecordStore>(&mut self, store: &S) {
        self.processes.retain(|process| is_filled(&process.name));
        for process in self.processes.iter_mut() {
            process.steps.retain(|step| is_filled(&step.description));
        }
        store.save_as(PROCESSES_KEY, &self.processes);
    }
}

#[cfg(test)]
mod tests {
    use super::ProcessEditor;
    use crate::model::process::StepField;

    #[test]
    fn new_process_starts_with_one_blank_step() {
        let mut editor = ProcessEditor::new();
        let id = editor.add_process();
        let process = editor.processes().get(&id).unwrap();
        assert_eq!(process.steps.len(), 1);
        assert!(process.steps.entries()[0].description.is_empty());
    }

    #[test]
    fn step_operations_require_known_process() {
        let mut editor = ProcessEditor::new();
        assert!(editor.add_step("missing").is_none());
        assert!(!editor.remove_step("missing", "x"));

        let id = editor.add_process();
        let step = editor.add_step(&id).unwrap();
        assert!(editor.set_step(&id, &step, StepField::Description, "Qualify lead"));
        assert!(editor.remove_step(&id, &step));
        assert!(!editor.remove_step(&id, &step));
    }
}
