use std::sync::Arc;

use maybe_owned::MaybeOwned;

use crate::SQLParam;

use super::{
    expression_builder::ExpressionBuilder, raw::RawExpression, sql_builder::SQLBuilder,
    statement::Statement,
};

/// The source of a nested query: either a literal SQL fragment or another
/// statement built through this crate. Clauses that wrap a query (a CTE body,
/// a UNION member) hold one of these and delegate rendering to it.
#[derive(Debug)]
pub enum Subquery<'a> {
    Raw(RawExpression),
    Select(MaybeOwned<'a, Statement<'a>>),
}

impl Subquery<'_> {
    /// A raw subquery from SQL text with `?` placeholders and its bound values.
    pub fn raw<S: Into<String>>(sql: S, params: Vec<Arc<dyn SQLParam>>) -> Self {
        Subquery::Raw(RawExpression::new(sql, params))
    }
}

impl ExpressionBuilder for Subquery<'_> {
    fn build(&self, builder: &mut SQLBuilder) {
        match self {
            Subquery::Raw(raw) => raw.build(builder),
            Subquery::Select(statement) => statement.build(builder),
        }
    }
}

impl From<RawExpression> for Subquery<'_> {
    fn from(raw: RawExpression) -> Self {
        Subquery::Raw(raw)
    }
}

impl From<&str> for Subquery<'_> {
    fn from(sql: &str) -> Self {
        Subquery::Raw(RawExpression::from(sql))
    }
}

impl<'a> From<Statement<'a>> for Subquery<'a> {
    fn from(statement: Statement<'a>) -> Self {
        Subquery::Select(MaybeOwned::Owned(statement))
    }
}

impl<'a> From<&'a Statement<'a>> for Subquery<'a> {
    fn from(statement: &'a Statement<'a>) -> Self {
        Subquery::Select(MaybeOwned::Borrowed(statement))
    }
}
