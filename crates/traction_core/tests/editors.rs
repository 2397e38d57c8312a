use serde_json::json;
use traction_core::db::open_db_in_memory;
use traction_core::model::people::{AnalyzedPersonField, SeatField};
use traction_core::model::process::{ProcessField, StepField};
use traction_core::model::scorecard::MeasurableField;
use traction_core::{
    Domain, IssueStatus, IssuesEditor, PeopleEditor, ProcessEditor, ProgressService, RecordStore,
    RockStatus, RocksEditor, ScorecardEditor, SqliteRecordStore, VisionEditor, VisionField,
    VisionList,
};

#[test]
fn issue_solve_then_reopen_restores_status_and_delete_works_from_any_state() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    let mut editor = IssuesEditor::new();

    let open_id = editor.add("pricing unclear").unwrap();
    let solved_id = editor.add("no CRM").unwrap();
    assert!(editor.solve(&solved_id));
    assert!(editor.solve(&open_id));
    assert!(editor.reopen(&open_id));
    assert_eq!(
        editor.issues().get(&open_id).unwrap().status,
        IssueStatus::Open
    );

    assert!(editor.delete(&solved_id).is_some());
    assert!(editor.delete(&open_id).is_some());
    assert!(editor.delete(&open_id).is_none());

    editor.save(&store);
    assert_eq!(store.load("issues"), Some(json!([])));
}

#[test]
fn issues_reload_newest_first() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    let mut editor = IssuesEditor::new();
    editor.add("first");
    editor.add("second");
    editor.save(&store);

    let reloaded = IssuesEditor::load(&store);
    let descriptions: Vec<&str> = reloaded
        .issues()
        .entries()
        .iter()
        .map(|issue| issue.description.as_str())
        .collect();
    assert_eq!(descriptions, ["second", "first"]);
    assert_eq!(reloaded, editor);
}

#[test]
fn rock_toggle_cycles_and_persists_status() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    let mut editor = RocksEditor::new();
    let id = editor.add("Launch partner program", "Luis").unwrap();

    assert_eq!(editor.toggle_status(&id), Some(RockStatus::OffTrack));
    editor.save(&store);
    assert_eq!(store.load("rocks").unwrap()[0]["status"], "off-track");

    assert_eq!(editor.toggle_status(&id), Some(RockStatus::Done));
    assert_eq!(editor.toggle_status(&id), Some(RockStatus::OnTrack));

    editor.toggle_status(&id);
    assert!(editor.delete(&id).is_some());
    assert!(editor.rocks().is_empty());
}

#[test]
fn scorecard_save_drops_unnamed_rows() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    let mut editor = ScorecardEditor::new();
    let named = editor.add_measurable();
    editor.add_measurable();
    editor.set_field(&named, MeasurableField::Measurable, "Weekly revenue");
    editor.set_field(&named, MeasurableField::Owner, "Finance");

    editor.save(&store);

    assert_eq!(editor.rows().len(), 1);
    let stored = store.load("scorecard").unwrap();
    assert_eq!(stored.as_array().unwrap().len(), 1);
    assert_eq!(stored[0]["measurable"], "Weekly revenue");
    assert_eq!(stored[0]["values"].as_array().unwrap().len(), 13);
    assert_eq!(ProgressService::new(&store).score(Domain::Data), 20);
}

#[test]
fn process_save_drops_unnamed_processes_and_empty_steps() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    let mut editor = ProcessEditor::new();

    let sales = editor.add_process();
    editor.add_process();
    editor.set_field(&sales, ProcessField::Name, "Sales");
    let first_step = editor.processes().get(&sales).unwrap().steps.entries()[0]
        .id
        .clone();
    editor.set_step(&sales, &first_step, StepField::Description, "Prospect identified");
    editor.add_step(&sales).unwrap();

    editor.save(&store);

    assert_eq!(
        store.load("processes"),
        Some(json!([{
            "id": sales,
            "name": "Sales",
            "steps": [{ "id": first_step, "description": "Prospect identified" }]
        }]))
    );
    assert_eq!(ProgressService::new(&store).score(Domain::Process), 25);
    assert_eq!(ProcessEditor::load(&store), editor);
}

#[test]
fn vision_save_scores_present_sections() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    let mut editor = VisionEditor::new();

    let value = editor.add_item(VisionList::CoreValues);
    editor.set_item(VisionList::CoreValues, &value, "Do the right thing");
    editor.add_item(VisionList::CoreValues);
    editor.set_field(VisionField::TenYearTarget, "$10M revenue");
    editor.save(&store);

    // coreValues, coreFocus, tenYearTarget, marketingStrategy and
    // threeYearPicture are non-empty; oneYearPlan, rocks, issues are empty.
    assert_eq!(ProgressService::new(&store).score(Domain::Vision), 63);
    assert_eq!(editor.list(VisionList::CoreValues).len(), 1);

    let reloaded = VisionEditor::load(&store);
    assert_eq!(reloaded.document(), editor.document());
}

#[test]
fn people_editor_reads_core_values_from_vision() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    store.save("vision", &json!({ "vto": { "coreValues": ["Humble", "Hungry"] } }));

    let mut editor = PeopleEditor::load(&store);
    assert_eq!(editor.core_values(), ["Humble", "Hungry"]);

    let blank_row = editor.analyzer().entries()[0].id.clone();
    editor.set_person_field(&blank_row, AnalyzedPersonField::Name, "Ana");
    editor.rate_value(&blank_row, "Humble", "+");
    editor.add_person();
    editor.save(&store);

    let stored = store.load("people").unwrap();
    assert_eq!(stored["peopleAnalyzer"].as_array().unwrap().len(), 1);
    assert_eq!(stored["peopleAnalyzer"][0]["values"]["Humble"], "+");
    assert_eq!(ProgressService::new(&store).score(Domain::People), 50);
}

#[test]
fn issues_load_keeps_well_formed_entries_next_to_malformed_ones() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    store.save(
        "issues",
        &json!([
            { "id": "a", "description": "keep me", "status": "open" },
            { "id": "b", "description": "archived", "status": "archived" },
            { "description": "no id", "status": "open" }
        ]),
    );

    let mut editor = IssuesEditor::load(&store);
    assert_eq!(editor.issues().len(), 1);
    editor.add("new one").unwrap();
    editor.save(&store);

    let stored = store.load("issues").unwrap();
    let descriptions: Vec<&str> = stored
        .as_array()
        .unwrap()
        .iter()
        .map(|issue| issue["description"].as_str().unwrap())
        .collect();
    assert_eq!(descriptions, ["new one", "keep me"]);
}

#[test]
fn rocks_and_scorecard_survive_one_bad_entry() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    store.save(
        "rocks",
        &json!([
            { "id": "r1", "description": "Hire COO", "owner": "Ana", "status": "done" },
            { "id": "r2", "description": "Unknown", "status": "paused" }
        ]),
    );
    store.save(
        "scorecard",
        &json!([
            { "id": "m1", "measurable": "Leads", "values": [] },
            { "id": 7, "measurable": "bad id" }
        ]),
    );

    let rocks = RocksEditor::load(&store);
    assert_eq!(rocks.rocks().len(), 1);
    assert_eq!(rocks.rocks().get("r1").unwrap().status, RockStatus::Done);
    rocks.save(&store);
    assert_eq!(store.load("rocks").unwrap().as_array().unwrap().len(), 1);

    let mut scorecard = ScorecardEditor::load(&store);
    assert!(scorecard.rows().contains("m1"));
    scorecard.save(&store);
    assert_eq!(store.load("scorecard").unwrap()[0]["measurable"], "Leads");
}

#[test]
fn vision_and_people_documents_drop_only_bad_list_entries() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    store.save(
        "vision",
        &json!({ "vto": { "coreValues": ["Humble", 3, "Hungry"], "tenYearTarget": "$10M" } }),
    );
    store.save(
        "people",
        &json!({
            "accountabilityChart": [{ "role": "Visionary", "name": "Ana" }, { "role": 5 }],
            "peopleAnalyzer": [{ "id": "p1", "name": "Luis" }, { "name": "no id" }]
        }),
    );

    let vision = VisionEditor::load(&store);
    assert_eq!(vision.document().vto.core_values, ["Humble", "Hungry"]);
    assert_eq!(vision.document().vto.ten_year_target, "$10M");

    let people = PeopleEditor::load(&store);
    assert_eq!(people.core_values(), ["Humble", "Hungry"]);
    assert_eq!(people.seats().len(), 1);
    assert_eq!(people.analyzer().len(), 1);
    assert!(people.analyzer().contains("p1"));
}

#[test]
fn blank_vision_save_counts_keyed_mapping_sections() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    assert_eq!(ProgressService::new(&store).score(Domain::Vision), 0);

    VisionEditor::new().save(&store);

    // coreFocus, marketingStrategy and threeYearPicture are written with
    // their keys, so three of eight sections count.
    let stored = store.load("vision").unwrap();
    assert_eq!(stored["vto"]["coreFocus"], json!({ "passion": "", "niche": "" }));
    assert_eq!(ProgressService::new(&store).score(Domain::Vision), 38);
}

#[test]
fn people_editor_save_scores_both_halves() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    let mut editor = PeopleEditor::new();

    let seat = editor.add_seat();
    editor.set_seat_field(&seat, SeatField::Role, "Integrator");
    editor.save(&store);
    assert_eq!(ProgressService::new(&store).score(Domain::People), 50);

    let person = editor.add_person();
    editor.set_person_field(&person, AnalyzedPersonField::Name, "Ana");
    editor.save(&store);
    assert_eq!(ProgressService::new(&store).score(Domain::People), 100);
}

#[test]
fn vision_save_carries_sections_without_editor() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteRecordStore::new(&conn);
    store.save(
        "vision",
        &json!({ "vto": {
            "oneYearPlan": { "revenue": "$2M", "goals": ["Launch v2"] },
            "rocks": ["Hire COO"],
            "issues": ["Cash flow"]
        }}),
    );

    let mut editor = VisionEditor::load(&store);
    editor.set_field(VisionField::Niche, "Dental clinics");
    editor.save(&store);

    let vto = &store.load("vision").unwrap()["vto"];
    assert_eq!(vto["oneYearPlan"], json!({ "revenue": "$2M", "goals": ["Launch v2"] }));
    assert_eq!(vto["rocks"], json!(["Hire COO"]));
    assert_eq!(vto["issues"], json!(["Cash flow"]));
    assert_eq!(vto["coreFocus"]["niche"], "Dental clinics");

    VisionEditor::new().save(&store);
    let vto = &store.load("vision").unwrap()["vto"];
    assert_eq!(vto["oneYearPlan"], json!({}));
    assert_eq!(vto["rocks"], json!([]));
}
