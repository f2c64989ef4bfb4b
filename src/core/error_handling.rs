//! Error reporting shared by the CLI and the plugin layer
//!
//! Errors the user can act on (unknown plugin name, bad argument) are logged
//! with their own message. Everything else gets the caller's context line,
//! with the underlying error at debug level.

/// Errors that know whether their message is meant for the user
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some`.
pub trait ContextualError: std::error::Error {
    fn is_user_actionable(&self) -> bool;

    fn user_message(&self) -> Option<String>;
}

/// Log an error at the detail level its kind calls for
pub fn log_error_with_context<E: ContextualError>(error: &E, operation_context: &str) {
    match error.user_message().filter(|_| error.is_user_actionable()) {
        Some(message) => log::error!("FATAL: {}", message),
        None => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
