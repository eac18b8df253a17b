use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::plugin::{merge_build_clauses, CLAUSE_INSERTIONS, QUERY_BUILD_CLAUSES};
use crate::SQLParam;

use super::{
    expression_builder::ExpressionBuilder,
    raw::RawExpression,
    set_operation::SetOperation,
    sql_builder::SQLBuilder,
    with::{Cte, With},
};

/// A clause registered against a statement, keyed in the registry by
/// [`StatementClause::name`]. Registering a second clause under the same name
/// merges into the existing one instead of producing a second keyword.
#[derive(Debug)]
pub enum StatementClause<'a> {
    With(With<'a>),
    SetOperation(SetOperation<'a>),
    /// The FROM target of the statement
    Table(String),
    /// A host-native clause (WHERE, GROUP BY, ...) carried as a raw fragment
    Raw {
        name: &'static str,
        expr: RawExpression,
    },
}

impl<'a> StatementClause<'a> {
    /// The registry key, which is also the keyword the statement writes before
    /// the clause body.
    pub fn name(&self) -> &'static str {
        match self {
            StatementClause::With(_) => With::NAME,
            StatementClause::SetOperation(op) => op.kind.keyword(),
            StatementClause::Table(_) => "FROM",
            StatementClause::Raw { name, .. } => *name,
        }
    }

    /// An empty clause renders as a complete no-op, keyword included.
    pub fn is_empty(&self) -> bool {
        match self {
            StatementClause::With(with) => with.is_empty(),
            StatementClause::SetOperation(op) => op.is_empty(),
            StatementClause::Table(name) => name.is_empty(),
            StatementClause::Raw { expr, .. } => expr.is_empty(),
        }
    }

    /// Keyed update for a re-registration under the same name. Mergeable
    /// clauses concatenate; anything else is replaced by the newcomer.
    fn merge(&mut self, other: StatementClause<'a>) {
        match (self, other) {
            (StatementClause::With(existing), StatementClause::With(incoming)) => {
                existing.merge(incoming)
            }
            (StatementClause::SetOperation(existing), StatementClause::SetOperation(incoming))
                if existing.kind == incoming.kind =>
            {
                existing.merge(incoming)
            }
            (existing, incoming) => *existing = incoming,
        }
    }
}

impl<'a> From<With<'a>> for StatementClause<'a> {
    fn from(with: With<'a>) -> Self {
        StatementClause::With(with)
    }
}

impl<'a> From<Cte<'a>> for StatementClause<'a> {
    fn from(cte: Cte<'a>) -> Self {
        StatementClause::With(With::from(cte))
    }
}

impl<'a> From<SetOperation<'a>> for StatementClause<'a> {
    fn from(op: SetOperation<'a>) -> Self {
        StatementClause::SetOperation(op)
    }
}

/// A statement under construction: the host's ordered list of clause-build
/// steps plus a name-keyed clause registry. Rendering walks the build list in
/// order and emits `<name> <clause>` for every registered, non-empty clause,
/// so a clause whose name never appears in the build list is skipped.
#[derive(Debug)]
pub struct Statement<'a> {
    build_clauses: Vec<&'static str>,
    clauses: HashMap<&'static str, StatementClause<'a>>,
}

impl<'a> Statement<'a> {
    /// A statement with the extended query build-clause list.
    pub fn new() -> Self {
        Self::with_build_clauses(merge_build_clauses(QUERY_BUILD_CLAUSES, CLAUSE_INSERTIONS))
    }

    /// A statement with a custom (e.g. host-provided) build-clause list.
    pub fn with_build_clauses(build_clauses: Vec<&'static str>) -> Self {
        Self {
            build_clauses,
            clauses: HashMap::new(),
        }
    }

    /// A `SELECT * FROM <table>` statement.
    pub fn table<S: Into<String>>(name: S) -> Self {
        Self::new()
            .clause(StatementClause::Raw {
                name: "SELECT",
                expr: RawExpression::from("*"),
            })
            .clause(StatementClause::Table(name.into()))
    }

    /// Register a clause, merging into any clause already registered under the
    /// same name.
    pub fn add_clause(&mut self, clause: impl Into<StatementClause<'a>>) {
        let clause = clause.into();
        match self.clauses.entry(clause.name()) {
            Entry::Occupied(mut entry) => entry.get_mut().merge(clause),
            Entry::Vacant(entry) => {
                entry.insert(clause);
            }
        }
    }

    /// Chaining form of [`Statement::add_clause`].
    pub fn clause(mut self, clause: impl Into<StatementClause<'a>>) -> Self {
        self.add_clause(clause);
        self
    }

    /// Register a host-native clause from a raw fragment, e.g.
    /// `raw_clause("WHERE", RawExpression::new("age > ?", vec![...]))`.
    pub fn raw_clause(self, name: &'static str, expr: RawExpression) -> Self {
        self.clause(StatementClause::Raw { name, expr })
    }

    /// Render the statement into SQL text and its positional parameters.
    pub fn to_sql(&self) -> (String, Vec<Arc<dyn SQLParam>>) {
        let mut builder = SQLBuilder::new();
        self.build(&mut builder);
        let (sql, params) = builder.into_sql();
        debug!(%sql, "built statement");
        (sql, params)
    }
}

impl Default for Statement<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionBuilder for Statement<'_> {
    fn build(&self, builder: &mut SQLBuilder) {
        let mut first = true;
        for name in &self.build_clauses {
            let Some(clause) = self.clauses.get(name) else {
                continue;
            };
            if clause.is_empty() {
                continue;
            }
            if !first {
                builder.push_space();
            }
            builder.push_str(name);
            builder.push_space();
            clause.build(builder);
            first = false;
        }
    }
}

impl ExpressionBuilder for StatementClause<'_> {
    fn build(&self, builder: &mut SQLBuilder) {
        match self {
            StatementClause::With(with) => with.build(builder),
            StatementClause::SetOperation(op) => op.build(builder),
            StatementClause::Table(name) => builder.push_identifier(name),
            StatementClause::Raw { expr, .. } => expr.build(builder),
        }
    }
}
