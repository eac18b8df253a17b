use std::sync::Arc;

use crate::SQLParam;

use super::{expression_builder::ExpressionBuilder, sql_builder::SQLBuilder};

/// A literal SQL fragment with `?` placeholders and the values bound to them.
///
/// Rendering re-emits the text with each `?` replaced by the builder's next
/// `$n` placeholder, so parameter numbering stays continuous no matter how
/// deeply the fragment is nested inside a statement. The fragment is trusted
/// as-is: a `?` with no value left to bind survives verbatim, and values
/// beyond the last `?` are never bound.
#[derive(Debug, Clone)]
pub struct RawExpression {
    pub sql: String,
    pub params: Vec<Arc<dyn SQLParam>>,
}

impl RawExpression {
    pub fn new<S: Into<String>>(sql: S, params: Vec<Arc<dyn SQLParam>>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

impl From<&str> for RawExpression {
    fn from(sql: &str) -> Self {
        Self::new(sql, vec![])
    }
}

impl ExpressionBuilder for RawExpression {
    fn build(&self, builder: &mut SQLBuilder) {
        let mut params = self.params.iter();
        let mut pieces = self.sql.split('?');

        if let Some(head) = pieces.next() {
            builder.push_str(head);
        }
        for piece in pieces {
            match params.next() {
                Some(param) => builder.push_param(param.clone()),
                None => builder.push('?'),
            }
            builder.push_str(piece);
        }
    }
}
