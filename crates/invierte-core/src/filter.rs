//! Client-side search over a fetched batch of project records.

use crate::project::Project;
use crate::text::comparison_key;

/// Filter a batch of projects by a free-text search term.
///
/// A term that is empty after trimming is the identity: every record is
/// returned in its original order. Otherwise the term is comparison-folded
/// and matched by substring containment against each of the six searchable
/// fields (name, function, executing entity, department, province,
/// investment state). A record matches if any field matches; missing
/// fields never match and never fail. Original relative order is kept.
///
/// # Examples
///
/// ```
/// use invierte_core::filter_projects;
///
/// let projects = vec![];
/// assert!(filter_projects(&projects, "canaris").is_empty());
/// ```
pub fn filter_projects<'a>(projects: &'a [Project], term: &str) -> Vec<&'a Project> {
    if term.trim().is_empty() {
        return projects.iter().collect();
    }

    let needle = comparison_key(term.trim());

    projects
        .iter()
        .filter(|project| {
            project
                .searchable_fields()
                .into_iter()
                .flatten()
                .any(|field| comparison_key(field).contains(&needle))
        })
        .collect()
}
