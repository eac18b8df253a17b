use tracing::debug;

/// Build-clause order the host uses for queries (and row fetches) before the
/// plugin is installed.
pub const QUERY_BUILD_CLAUSES: &[&str] =
    &["SELECT", "FROM", "WHERE", "GROUP BY", "ORDER BY", "LIMIT", "FOR"];

/// Build-clause order the host uses for updates before the plugin is installed.
pub const UPDATE_BUILD_CLAUSES: &[&str] = &["UPDATE", "SET", "FROM", "WHERE"];

/// The clauses this plugin adds, each paired with the anchor clause it must be
/// spliced in front of. One table serves the query, row, and update lists:
/// an anchor absent from a given list simply drops that insertion (UPDATE
/// never appears in the query list, SELECT never in the update list).
pub const CLAUSE_INSERTIONS: &[(&str, &str)] = &[
    ("WITH", "SELECT"),
    ("WITH", "UPDATE"),
    ("UNION", "ORDER BY"),
    ("INTERSECT", "ORDER BY"),
    ("EXCEPT", "ORDER BY"),
];

/// Splice `insertions` into `original`, emitting each insertion immediately
/// before the first occurrence of its anchor. Entries already present keep
/// their first-occurrence position; an insertion whose anchor never appears is
/// dropped.
pub fn merge_build_clauses(
    original: &[&'static str],
    insertions: &[(&'static str, &'static str)],
) -> Vec<&'static str> {
    let mut merged = Vec::with_capacity(original.len() + insertions.len());

    for &entry in original {
        for &(name, anchor) in insertions {
            if anchor == entry && !merged.contains(&name) {
                merged.push(name);
            }
        }
        if !merged.contains(&entry) {
            merged.push(entry);
        }
    }

    for &(name, anchor) in insertions {
        if !merged.contains(&name) {
            debug!(name, anchor, "dropped clause insertion, anchor not present");
        }
    }

    merged
}

/// The build-clause lists of the host's statement-building callbacks, one per
/// operation kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callbacks {
    pub query: Vec<&'static str>,
    pub row: Vec<&'static str>,
    pub update: Vec<&'static str>,
}

impl Default for Callbacks {
    fn default() -> Self {
        Self {
            query: QUERY_BUILD_CLAUSES.to_vec(),
            row: QUERY_BUILD_CLAUSES.to_vec(),
            update: UPDATE_BUILD_CLAUSES.to_vec(),
        }
    }
}

/// Splices the extra clause keywords (WITH, UNION, INTERSECT, EXCEPT) into the
/// host's clause-build lists.
#[derive(Debug, Default)]
pub struct ExtraClausePlugin;

impl ExtraClausePlugin {
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &'static str {
        "extra-clause"
    }

    /// Rewrite the query, row, and update build-clause lists. Lists the host
    /// has customized keep their customizations; only the missing extra-clause
    /// tokens are spliced in.
    pub fn install(&self, callbacks: &mut Callbacks) {
        callbacks.query = merge_build_clauses(&callbacks.query, CLAUSE_INSERTIONS);
        callbacks.row = merge_build_clauses(&callbacks.row, CLAUSE_INSERTIONS);
        callbacks.update = merge_build_clauses(&callbacks.update, CLAUSE_INSERTIONS);
        debug!(plugin = self.name(), "registered extra clause build steps");
    }
}
