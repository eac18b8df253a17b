use super::{
    expression_builder::ExpressionBuilder, sql_builder::SQLBuilder, subquery::Subquery,
};

/// The kind of a set operation clause. Each kind registers under its own
/// keyword, so a statement can carry a UNION and an EXCEPT independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOpKind {
    Union,
    Intersect,
    Except,
}

impl SetOpKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            SetOpKind::Union => "UNION",
            SetOpKind::Intersect => "INTERSECT",
            SetOpKind::Except => "EXCEPT",
        }
    }
}

/// One operand of a set operation: the query plus the `ALL` marker.
#[derive(Debug)]
pub struct SetMember<'a> {
    pub all: bool,
    pub query: Subquery<'a>,
}

/// A UNION / INTERSECT / EXCEPT clause appended to a statement.
///
/// The statement writes the leading keyword itself (from the clause's registry
/// name); this builds `[ALL ]<query>` for the first member and
/// ` <KEYWORD> [ALL ]<query>` for each member merged in after it.
#[derive(Debug)]
pub struct SetOperation<'a> {
    pub kind: SetOpKind,
    pub members: Vec<SetMember<'a>>,
}

impl<'a> SetOperation<'a> {
    pub fn union(query: impl Into<Subquery<'a>>) -> Self {
        Self::new(SetOpKind::Union, false, query)
    }

    pub fn union_all(query: impl Into<Subquery<'a>>) -> Self {
        Self::new(SetOpKind::Union, true, query)
    }

    pub fn intersect(query: impl Into<Subquery<'a>>) -> Self {
        Self::new(SetOpKind::Intersect, false, query)
    }

    pub fn except(query: impl Into<Subquery<'a>>) -> Self {
        Self::new(SetOpKind::Except, false, query)
    }

    fn new(kind: SetOpKind, all: bool, query: impl Into<Subquery<'a>>) -> Self {
        Self {
            kind,
            members: vec![SetMember {
                all,
                query: query.into(),
            }],
        }
    }

    /// Append a later registration; the existing members stay first.
    pub fn merge(&mut self, other: SetOperation<'a>) {
        self.members.extend(other.members);
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl ExpressionBuilder for SetOperation<'_> {
    fn build(&self, builder: &mut SQLBuilder) {
        for (index, member) in self.members.iter().enumerate() {
            if index > 0 {
                builder.push_space();
                builder.push_str(self.kind.keyword());
                builder.push_space();
            }
            if member.all {
                builder.push_str("ALL ");
            }
            member.query.build(builder);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::statement::Statement;

    #[test]
    fn single_member_renders_bare_query() {
        let union = SetOperation::union(Statement::table("archived"));
        assert_binding!(union.into_sql(), r#"SELECT * FROM "archived""#);
    }

    #[test]
    fn all_marker_precedes_the_query() {
        let union = SetOperation::union_all("SELECT * FROM archived");
        assert_binding!(union.into_sql(), "ALL SELECT * FROM archived");
    }

    #[test]
    fn merged_members_repeat_the_keyword() {
        let mut union = SetOperation::union("SELECT 1");
        union.merge(SetOperation::union_all("SELECT 2"));
        assert_binding!(union.into_sql(), "SELECT 1 UNION ALL SELECT 2");

        let mut except = SetOperation::except("SELECT 1");
        except.merge(SetOperation::except("SELECT 2"));
        assert_binding!(except.into_sql(), "SELECT 1 EXCEPT SELECT 2");
    }
}
