#![cfg(test)]

//! Test assertions to check SQL statements and parameters.

/// Assert that the actual parameters match the expected ones.
///
/// # Usage:
/// ```no_run
/// assert_params!(actual_params, expected_param1, expected_param2, ...);
/// assert_params!(actual_params); // asserts that there are no parameters
/// ```
macro_rules! assert_params {
    ($actual_params:expr $(, $expected_param:expr)*) => {
        let actual_params: &[std::sync::Arc<dyn $crate::SQLParam>] = &$actual_params;
        let expected_params: Vec<&dyn $crate::SQLParam> =
            vec![$(&$expected_param as &dyn $crate::SQLParam),*];
        assert_eq!(
            actual_params.len(),
            expected_params.len(),
            "Parameter count mismatch"
        );
        for (actual, expected) in actual_params.iter().zip(expected_params) {
            assert!(
                $crate::SQLParam::eq(actual.as_ref(), expected),
                "Parameter mismatch"
            );
        }
    };
}

/// Assert that a `(stmt, params)` pair matches the expected statement and
/// parameters.
macro_rules! assert_binding {
    ($actual:expr, $expected_stmt:expr $(, $expected_param:expr)*) => {
        let (actual_stmt, actual_params) = $actual;
        assert_eq!(actual_stmt, $expected_stmt);
        assert_params!(actual_params $(, $expected_param)*);
    };
}
