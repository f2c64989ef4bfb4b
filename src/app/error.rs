//! Application error type

use crate::app::cli::config::ConfigError;
use crate::core::error_handling::ContextualError;
use crate::core::logging::LoggingError;
use crate::plugin::api::PluginError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ContextualError for AppError {
    fn is_user_actionable(&self) -> bool {
        match self {
            AppError::Plugin(e) => e.is_user_actionable(),
            AppError::Config(e) => e.is_user_actionable(),
            AppError::Logging(_) => true,
            AppError::Output(_) | AppError::Encode(_) => false,
        }
    }

    fn user_message(&self) -> Option<String> {
        self.is_user_actionable().then(|| self.to_string())
    }
}
