//! Custom assertion macros and utilities
//!
//! Provides enhanced assertion macros for better test output and
//! more descriptive error messages.

/// Assert a `(status, body)` pair is an error response with this message
#[macro_export]
macro_rules! assert_error {
    ($response:expr, $status:expr, $message:expr) => {
        let (status, body) = $response;
        assert_eq!(status, $status, "unexpected status, body: {}", body);
        assert_eq!(
            body["error"].as_str(),
            Some($message),
            "unexpected error body: {}",
            body
        );
    };
    ($response:expr, $status:expr) => {
        let (status, body) = $response;
        assert_eq!(status, $status, "unexpected status, body: {}", body);
        assert!(body["error"].is_string(), "expected an error body, got: {}", body);
    };
}

/// Assert that two values are approximately equal (for floating point)
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {
        let diff = ($left - $right).abs();
        assert!(
            diff < $epsilon,
            "Values are not approximately equal: {} vs {} (diff: {})",
            $left,
            $right,
            diff
        );
    };
}

/// Assert that a JSON object has no key that could carry a password
#[macro_export]
macro_rules! assert_no_password {
    ($user:expr) => {
        let user = &$user;
        assert!(user.is_object(), "expected a user object, got: {}", user);
        for key in ["password", "password_hash"] {
            assert!(user.get(key).is_none(), "user leaks '{}': {}", key, user);
        }
    };
}
