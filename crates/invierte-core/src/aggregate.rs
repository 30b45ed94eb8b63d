//! Categorical value counting for the chart view.
//!
//! Counts occurrences of every distinct value across a fixed set of
//! categorical fields. Values from different fields share one counting
//! namespace keyed purely by string value: if `situacion` and `marco`
//! both hold `"VIABLE"`, that is one bucket with count 2. That merge is a
//! deliberate policy of the chart view, not an accident.

use std::collections::HashMap;

use serde::Serialize;

use crate::project::Project;

/// One distinct field value with its occurrence count across a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationEntry {
    /// The literal field value.
    pub label: String,
    /// Number of occurrences across all records and fields.
    pub count: u64,
}

/// Extracts one categorical field value from a record.
pub type FieldExtractor = fn(&Project) -> Option<&str>;

/// The categorical fields the chart view aggregates over.
pub const CHART_FIELDS: &[FieldExtractor] = &[
    |p| p.nivel_gobierno.as_deref(),
    |p| p.situacion.as_deref(),
    |p| p.marco.as_deref(),
    |p| p.tipo_formato.as_deref(),
];

/// Count occurrences of each distinct value across the given fields.
///
/// Absent and empty values are skipped. Entries come out in the order
/// their value was first encountered, which fixes the chart category
/// order. Recomputed from scratch on every fetch; nothing is cached.
pub fn count_field_values(projects: &[Project], fields: &[FieldExtractor]) -> Vec<AggregationEntry> {
    let mut entries: Vec<AggregationEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for project in projects {
        for extract in fields {
            let Some(value) = extract(project).filter(|v| !v.is_empty()) else {
                continue;
            };
            match index.get(value) {
                Some(&at) => entries[at].count += 1,
                None => {
                    index.insert(value, entries.len());
                    entries.push(AggregationEntry {
                        label: value.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    entries
}
