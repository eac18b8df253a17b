/// Extension clauses for a statement builder: WITH/CTE (including RECURSIVE
/// and MATERIALIZED/NOT MATERIALIZED hints), UNION, INTERSECT, and EXCEPT.
///
/// The crate has two halves. [`ExtraClausePlugin`] splices the new clause
/// keywords into the host's ordered clause-build lists (each keyword lands
/// immediately before its anchor clause, and lists the host has customized
/// keep their customizations). The clause values themselves — [`With`] and
/// [`SetOperation`] — attach to a [`Statement`] under their keyword, merge
/// with an earlier registration of the same keyword, and render through the
/// [`ExpressionBuilder`]/[`SQLBuilder`] pair, delegating each nested query to
/// its [`Subquery`] source (a raw fragment with `?` placeholders, or another
/// statement).
///
/// ```
/// use extra_clause::{Cte, Statement, With};
///
/// let (sql, _params) = Statement::table("cte")
///     .clause(With::new(vec![Cte::new("cte", Statement::table("users"))]))
///     .to_sql();
/// assert_eq!(sql, r#"WITH "cte" AS (SELECT * FROM "users") SELECT * FROM "cte""#);
/// ```
mod plugin;
#[macro_use]
mod sql;

pub use plugin::{
    merge_build_clauses, Callbacks, ExtraClausePlugin, CLAUSE_INSERTIONS, QUERY_BUILD_CLAUSES,
    UPDATE_BUILD_CLAUSES,
};

pub use sql::{
    expression_builder::ExpressionBuilder,
    raw::RawExpression,
    set_operation::{SetMember, SetOpKind, SetOperation},
    sql_builder::SQLBuilder,
    statement::{Statement, StatementClause},
    subquery::Subquery,
    with::{Cte, Materialization, With},
    SQLParam,
};
