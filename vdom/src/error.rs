//! Error types.

use thiserror::Error;

/// Errors raised by a [`Stateful`](crate::component::Stateful) component.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// The component type never implemented `render`.
    #[error("component '{component}' must implement render")]
    RenderUnimplemented {
        /// Type name of the component (from `std::any::type_name`).
        component: &'static str,
    },

    /// The mounted live node no longer has a parent to patch against.
    #[error("component '{component}' is mounted but its live node is detached")]
    Detached { component: &'static str },
}

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: expected {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Failure to install the logger.
#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("failed to open log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger already initialized: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}
