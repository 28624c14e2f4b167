//! Aggregation engine for application statistics
//!
//! Pure functions over a snapshot of applications and one reference table.
//! The snapshot may be stale relative to concurrent writes; nothing here
//! re-reads the store.

use std::collections::{BTreeMap, HashMap};

use shared::{Application, ApplicationStatus, EntityId, Major, School, StatEntry, StatKey};

use crate::types::DashboardSummary;

/// Count applications per set reference; numeric ids ascending, then opaque ones
fn count_by_reference<F>(applications: &[Application], reference: F) -> BTreeMap<EntityId, u64>
where
    F: Fn(&Application) -> Option<&EntityId>,
{
    let mut counts = BTreeMap::new();
    for id in applications.iter().filter_map(reference).filter(|id| id.is_set()) {
        *counts.entry(id.clone()).or_insert(0) += 1;
    }
    counts
}

/// Attach display names; unresolved references get `"{placeholder} {id}"`
fn label_counts(
    counts: BTreeMap<EntityId, u64>,
    names: &HashMap<&EntityId, &str>,
    placeholder: &str,
) -> Vec<StatEntry> {
    counts
        .into_iter()
        .map(|(id, value)| StatEntry {
            name: names
                .get(&id)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("{placeholder} {id}")),
            key: StatKey::Reference(id),
            value,
        })
        .collect()
}

/// First record wins when the table holds duplicate ids
fn name_index<'a, T>(
    records: &'a [T],
    entry: impl Fn(&'a T) -> (&'a EntityId, &'a str),
) -> HashMap<&'a EntityId, &'a str> {
    let mut index = HashMap::with_capacity(records.len());
    for (id, name) in records.iter().map(entry) {
        index.entry(id).or_insert(name);
    }
    index
}

/// Applications per school
pub fn stats_by_school(applications: &[Application], schools: &[School]) -> Vec<StatEntry> {
    let names = name_index(schools, |school| (&school.id, school.details.name.as_str()));
    let counts = count_by_reference(applications, |application| application.school_id.as_ref());
    label_counts(counts, &names, "School")
}

/// Applications per major
pub fn stats_by_major(applications: &[Application], majors: &[Major]) -> Vec<StatEntry> {
    let names = name_index(majors, |major| (&major.id, major.details.name.as_str()));
    let counts = count_by_reference(applications, |application| application.major_id.as_ref());
    label_counts(counts, &names, "Major")
}

/// Applications per status; all three canonical statuses are always present
pub fn stats_by_status(applications: &[Application]) -> Vec<StatEntry> {
    ApplicationStatus::ALL
        .iter()
        .map(|status| StatEntry {
            key: StatKey::Status(*status),
            name: status.label().to_string(),
            value: applications
                .iter()
                .filter(|application| application.status.get() == Some(*status))
                .count() as u64,
        })
        .collect()
}

/// Headline counters for the admin dashboard
pub fn dashboard_summary(applications: &[Application], schools: &[School]) -> DashboardSummary {
    DashboardSummary {
        total_schools: schools.len() as u64,
        total_applications: applications.len() as u64,
        pending_applications: applications
            .iter()
            .filter(|application| application.status.get() == Some(ApplicationStatus::Pending))
            .count() as u64,
    }
}
