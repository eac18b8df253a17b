use std::any::Any;

use tokio_postgres::types::ToSql;

#[macro_use]
#[cfg(test)]
mod test_util;

pub(crate) mod expression_builder;
pub(crate) mod raw;
pub(crate) mod set_operation;
pub(crate) mod sql_builder;
pub(crate) mod statement;
pub(crate) mod subquery;
pub(crate) mod with;

/// A value that can be bound to a positional parameter of a statement.
///
/// Parameters travel as `Arc<dyn SQLParam>`, so the trait carries its own
/// cross-type equality (needed by tests and by anything that wants to compare
/// parameter lists without knowing the concrete types).
pub trait SQLParam: ToSql + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    fn eq(&self, other: &dyn SQLParam) -> bool;
}

impl<T: ToSql + Send + Sync + Any + PartialEq> SQLParam for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq(&self, other: &dyn SQLParam) -> bool {
        if let Some(other) = other.as_any().downcast_ref::<T>() {
            self == other
        } else {
            false
        }
    }
}

impl PartialEq for dyn SQLParam {
    fn eq(&self, other: &Self) -> bool {
        SQLParam::eq(self, other)
    }
}
