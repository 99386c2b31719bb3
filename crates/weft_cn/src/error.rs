//! Configuration errors
//!
//! Raised synchronously at resolve time and surfaced to the caller: a
//! misconfigured variant is a programming mistake, not a runtime condition.
//! The merge step never errors; malformed class tokens pass through.

use thiserror::Error;

/// A component was given props its variant map cannot resolve
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("component `{component}` has no prop `{prop}`")]
    UnknownProp { component: &'static str, prop: String },

    #[error("component `{component}`: unrecognized value `{value}` for prop `{prop}`")]
    UnknownValue {
        component: &'static str,
        prop: &'static str,
        value: String,
    },

    #[error("component `{component}`: prop `{prop}` was not supplied and declares no default")]
    MissingValue {
        component: &'static str,
        prop: &'static str,
    },

    #[error("no icon named `{name}` is registered")]
    UnknownIcon { name: String },
}
