use super::{
    expression_builder::ExpressionBuilder, sql_builder::SQLBuilder, subquery::Subquery,
};

/// Materialization hint for a CTE body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Materialization {
    /// No hint; the database picks (its default)
    #[default]
    Unspecified,
    /// Force the body to be materialized (`AS MATERIALIZED (...)`)
    Materialized,
    /// Forbid materializing the body (`AS NOT MATERIALIZED (...)`)
    NotMaterialized,
}

/// A single common table expression of the form
/// `<alias> [(<columns>)] AS [MATERIALIZED | NOT MATERIALIZED] (<subquery>)`.
#[derive(Debug)]
pub struct Cte<'a> {
    pub name: String,
    pub columns: Vec<String>,
    pub materialization: Materialization,
    pub subquery: Subquery<'a>,
}

impl<'a> Cte<'a> {
    pub fn new<S: Into<String>>(name: S, subquery: impl Into<Subquery<'a>>) -> Self {
        Self {
            name: name.into(),
            columns: vec![],
            materialization: Materialization::Unspecified,
            subquery: subquery.into(),
        }
    }

    pub fn materialized<S: Into<String>>(name: S, subquery: impl Into<Subquery<'a>>) -> Self {
        Self {
            materialization: Materialization::Materialized,
            ..Self::new(name, subquery)
        }
    }

    pub fn not_materialized<S: Into<String>>(name: S, subquery: impl Into<Subquery<'a>>) -> Self {
        Self {
            materialization: Materialization::NotMaterialized,
            ..Self::new(name, subquery)
        }
    }

    /// Set the explicit column list of the expression.
    pub fn columns<S: Into<String>>(mut self, columns: Vec<S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// A `WITH` clause: an ordered list of CTEs plus the recursive marker.
///
/// The statement writes the `WITH ` keyword itself (from the clause's registry
/// name), so this builds only what follows it. Registering a second `With`
/// against the same statement appends its CTEs after the existing ones and ORs
/// the recursive flags, so chained registrations coalesce into a single clause
/// instead of producing two `WITH` keywords.
#[derive(Debug, Default)]
pub struct With<'a> {
    pub recursive: bool,
    pub ctes: Vec<Cte<'a>>,
}

impl<'a> With<'a> {
    pub const NAME: &'static str = "WITH";

    pub fn new(ctes: Vec<Cte<'a>>) -> Self {
        Self {
            recursive: false,
            ctes,
        }
    }

    pub fn recursive(ctes: Vec<Cte<'a>>) -> Self {
        Self {
            recursive: true,
            ctes,
        }
    }

    /// Append a later registration; the existing CTEs stay first.
    pub fn merge(&mut self, other: With<'a>) {
        self.recursive |= other.recursive;
        self.ctes.extend(other.ctes);
    }

    /// An empty clause renders as a complete no-op (not even the keyword).
    pub fn is_empty(&self) -> bool {
        self.ctes.is_empty()
    }
}

impl<'a> From<Cte<'a>> for With<'a> {
    fn from(cte: Cte<'a>) -> Self {
        With::new(vec![cte])
    }
}

impl ExpressionBuilder for With<'_> {
    fn build(&self, builder: &mut SQLBuilder) {
        if self.recursive {
            builder.push_str("RECURSIVE ");
        }
        builder.push_elems(&self.ctes, ",");
    }
}

impl ExpressionBuilder for Cte<'_> {
    /// Build the `<alias> [(<columns>)] AS [<hint>] (<subquery>)` text.
    fn build(&self, builder: &mut SQLBuilder) {
        builder.push_identifier(&self.name);

        if !self.columns.is_empty() {
            builder.push_str(" (");
            builder.push_iter(self.columns.iter(), ",", |builder, column| {
                builder.push_identifier(column);
            });
            builder.push(')');
        }

        builder.push_str(" AS ");

        match self.materialization {
            Materialization::Unspecified => {}
            Materialization::Materialized => builder.push_str("MATERIALIZED "),
            Materialization::NotMaterialized => builder.push_str("NOT MATERIALIZED "),
        }

        builder.push('(');
        self.subquery.build(builder);
        builder.push(')');
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::sql::statement::Statement;

    #[test]
    fn raw_subquery_keeps_its_parameters() {
        let cte = Cte::new(
            "cte",
            Subquery::raw(
                "SELECT * FROM users WHERE name = ?",
                vec![Arc::new("admin")],
            ),
        );
        assert_binding!(
            cte.into_sql(),
            r#""cte" AS (SELECT * FROM users WHERE name = $1)"#,
            "admin"
        );
    }

    #[test]
    fn statement_subquery_is_rendered_inline() {
        let users = Statement::table("users");
        let cte = Cte::new("cte", &users);
        assert_binding!(cte.into_sql(), r#""cte" AS (SELECT * FROM "users")"#);
    }

    #[test]
    fn column_list_is_quoted_and_parenthesized() {
        let cte = Cte::new("cte", Statement::table("users")).columns(vec!["id", "name"]);
        assert_binding!(
            cte.into_sql(),
            r#""cte" ("id","name") AS (SELECT * FROM "users")"#
        );
    }

    #[test]
    fn materialization_hints() {
        let cte = Cte::materialized("cte", Statement::table("users"));
        assert_binding!(
            cte.into_sql(),
            r#""cte" AS MATERIALIZED (SELECT * FROM "users")"#
        );

        let cte = Cte::not_materialized("cte", Statement::table("users"));
        assert_binding!(
            cte.into_sql(),
            r#""cte" AS NOT MATERIALIZED (SELECT * FROM "users")"#
        );

        let cte = Cte::new("cte", Statement::table("users"));
        assert_binding!(cte.into_sql(), r#""cte" AS (SELECT * FROM "users")"#);
    }

    #[test]
    fn ctes_are_comma_separated_without_space() {
        let with = With::new(vec![
            Cte::materialized("cte1", Statement::table("users")),
            Cte::not_materialized("cte2", Statement::table("products")),
        ]);
        assert_binding!(
            with.into_sql(),
            r#""cte1" AS MATERIALIZED (SELECT * FROM "users"),"cte2" AS NOT MATERIALIZED (SELECT * FROM "products")"#
        );
    }

    #[test]
    fn merge_appends_and_ors_recursive() {
        let mut with = With::recursive(vec![Cte::new("cte1", Statement::table("users"))]);
        with.merge(With::new(vec![Cte::new("cte2", Statement::table("users"))]));

        assert!(with.recursive);
        assert_binding!(
            with.into_sql(),
            r#"RECURSIVE "cte1" AS (SELECT * FROM "users"),"cte2" AS (SELECT * FROM "users")"#
        );
    }

    #[test]
    fn recursive_flag_from_either_side() {
        let mut with = With::new(vec![Cte::new("cte1", Statement::table("users"))]);
        with.merge(With::recursive(vec![Cte::new(
            "cte2",
            Statement::table("users"),
        )]));
        assert!(with.recursive);
    }
}
