//! Assertion macros for engine results.
//!
//! - [`crate::assert_result_err!`] - Assert Result is Err and extract error
//! - [`crate::assert_contains_error!`] - Assert error message contains pattern
//!
//! # Example
//!
//! ```rust
//! use qametrics::assert_contains_error;
//! use qametrics::metrics::MetricsEngine;
//! use qametrics::core::DailyExecution;
//!
//! let mut engine = MetricsEngine::default();
//! assert_contains_error!(
//!     engine.register_day("", Vec::new(), DailyExecution::default()),
//!     "day label"
//! );
//! ```

/// Assert that a Result is Err and extract the error.
///
/// If the Result is Ok, panics with a message showing the value.
#[macro_export]
macro_rules! assert_result_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!(
                "Expected Err, got Ok: {:?}\n  at {}:{}:{}",
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(e) => e,
        }
    };
}

/// Assert that a Result is Err and its message contains a pattern.
///
/// Returns the error for further inspection.
#[macro_export]
macro_rules! assert_contains_error {
    ($result:expr, $pattern:expr) => {{
        let err = $crate::assert_result_err!($result);
        let err_str = err.to_string();
        assert!(
            err_str.contains($pattern),
            "Error '{}' does not contain '{}'\n  at {}:{}:{}",
            err_str,
            $pattern,
            file!(),
            line!(),
            column!()
        );
        err
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_assert_contains_error_returns_error() {
        let result: Result<(), String> = Err("dataset error at line 3".to_string());
        let err = crate::assert_contains_error!(result, "line 3");
        assert_eq!(err, "dataset error at line 3");
    }

    #[test]
    #[should_panic(expected = "Expected Err")]
    fn test_assert_result_err_panics_on_ok() {
        let result: Result<i32, String> = Ok(1);
        crate::assert_result_err!(result);
    }
}
