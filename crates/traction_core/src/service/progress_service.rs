//! Completion scoring for the dashboard.
//!
//! # Responsibility
//! - Score each domain 0..=100 from its currently stored record.
//! - Average the six domain scores into the overall progress figure.
//!
//! # Invariants
//! - Scores are recomputed on every call; nothing is cached.
//! - Missing or malformed records score 0 and never raise.
//! - The issues rule scores an absent record 0 but an empty list 100. This
//!   asymmetry is observed behavior with no recorded rationale; keep it.

use crate::model::domain::{Domain, COMPANY_SETTINGS_KEY};
use crate::model::settings::CompanySettings;
use crate::model::vision::VTO_SECTIONS;
use crate::repo::record_repo::RecordStore;
use log::debug;
use serde::Serialize;
use serde_json::Value;

const VISION_SECTION_WEIGHT: f64 = 12.5;
const PEOPLE_PART_WEIGHT: u8 = 50;
const SCORECARD_ENTRY_WEIGHT: usize = 20;
const PROCESS_ENTRY_WEIGHT: usize = 25;
const ROCK_ENTRY_WEIGHT: usize = 25;

/// Coarse progress band used to colour dashboard bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBand {
    /// Above 79.
    OnTrack,
    /// 50 through 79.
    Partial,
    Behind,
}

impl ProgressBand {
    pub fn for_score(score: u8) -> Self {
        if score > 79 {
            Self::OnTrack
        } else if score > 49 {
            Self::Partial
        } else {
            Self::Behind
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DomainProgress {
    pub domain: Domain,
    pub score: u8,
    pub band: ProgressBand,
}

/// Everything the dashboard renders in one read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSnapshot {
    pub company_name: Option<String>,
    /// In [`Domain::ALL`] order.
    pub domains: Vec<DomainProgress>,
    pub overall: u8,
    pub overall_band: ProgressBand,
}

/// Progress aggregator over a record store.
pub struct ProgressService<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> ProgressService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Completion percentage of one domain.
    pub fn score(&self, domain: Domain) -> u8 {
        let record = self.store.load(domain.storage_key());
        let score = score_record(domain, record.as_ref());
        debug!(
            "event=score module=progress status=ok domain={} present={} score={}",
            domain,
            record.is_some(),
            score
        );
        score
    }

    /// Scores a domain by dashboard id. Unknown ids score 0.
    pub fn score_by_id(&self, domain_id: &str) -> u8 {
        Domain::parse(domain_id).map_or(0, |domain| self.score(domain))
    }

    /// Rounded mean over the six domains, each weighted equally.
    pub fn overall_score(&self) -> u8 {
        let scores: Vec<u8> = Domain::ALL.iter().map(|domain| self.score(*domain)).collect();
        overall_from_scores(&scores)
    }

    pub fn dashboard(&self) -> DashboardSnapshot {
        let domains: Vec<DomainProgress> = Domain::ALL
            .iter()
            .map(|domain| {
                let score = self.score(*domain);
                DomainProgress {
                    domain: *domain,
                    score,
                    band: ProgressBand::for_score(score),
                }
            })
            .collect();
        let scores: Vec<u8> = domains.iter().map(|progress| progress.score).collect();
        let overall = overall_from_scores(&scores);
        let company_name = self
            .store
            .load_as::<CompanySettings>(COMPANY_SETTINGS_KEY)
            .map(|settings| settings.name)
            .filter(|name| !name.trim().is_empty());

        DashboardSnapshot {
            company_name,
            domains,
            overall,
            overall_band: ProgressBand::for_score(overall),
        }
    }
}

/// Rounded arithmetic mean; an empty slice averages to 0.
pub fn overall_from_scores(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u32 = scores.iter().map(|score| u32::from(*score)).sum();
    round_percent(f64::from(sum) / scores.len() as f64)
}

/// Applies the domain rule to a record, `None` meaning nothing stored.
pub fn score_record(domain: Domain, record: Option<&Value>) -> u8 {
    let Some(record) = record.filter(|value| is_truthy(value)) else {
        return 0;
    };
    match domain {
        Domain::Vision => score_vision(record),
        Domain::People => score_people(record),
        Domain::Data => score_by_count(record, SCORECARD_ENTRY_WEIGHT),
        Domain::Issues => score_issues(record),
        Domain::Process => score_by_count(record, PROCESS_ENTRY_WEIGHT),
        Domain::Traction => score_by_count(record, ROCK_ENTRY_WEIGHT),
    }
}

fn score_vision(record: &Value) -> u8 {
    let Some(vto) = record.get("vto").and_then(Value::as_object) else {
        return 0;
    };
    let present = VTO_SECTIONS
        .iter()
        .filter(|section| vto.get(**section).is_some_and(is_section_present))
        .count();
    round_percent(present as f64 * VISION_SECTION_WEIGHT)
}

fn is_section_present(section: &Value) -> bool {
    match section {
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => false,
    }
}

fn score_people(record: &Value) -> u8 {
    let seated = non_empty_array(record.get("accountabilityChart")).is_some_and(|chart| {
        chart
            .iter()
            .any(|seat| field_is_truthy(seat, "role") || field_is_truthy(seat, "name"))
    });
    let analyzed = non_empty_array(record.get("peopleAnalyzer"))
        .is_some_and(|rows| rows.iter().any(|row| field_is_truthy(row, "name")));

    let mut score = 0;
    if seated {
        score += PEOPLE_PART_WEIGHT;
    }
    if analyzed {
        score += PEOPLE_PART_WEIGHT;
    }
    score
}

fn score_by_count(record: &Value, weight: usize) -> u8 {
    match record.as_array() {
        Some(entries) => entries.len().saturating_mul(weight).min(100) as u8,
        None => 0,
    }
}

fn score_issues(record: &Value) -> u8 {
    let Some(issues) = record.as_array() else {
        return 0;
    };
    if issues.is_empty() {
        return 100;
    }
    let solved = issues
        .iter()
        .filter(|issue| issue.get("status").and_then(Value::as_str) == Some("solved"))
        .count();
    round_percent(solved as f64 * 100.0 / issues.len() as f64)
}

fn non_empty_array(value: Option<&Value>) -> Option<&Vec<Value>> {
    value
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
}

fn field_is_truthy(entry: &Value, field: &str) -> bool {
    entry.get(field).is_some_and(is_truthy)
}

/// Mirrors the loose truthiness stored records were written with:
/// empty strings, zero, `false` and `null` are falsy; containers are truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn round_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
