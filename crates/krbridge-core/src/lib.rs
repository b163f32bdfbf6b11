//! krbridge-core - Module export contract, payload values and registry
//!
//! This crate provides the foundational types for building render modules:
//! - [`ModuleExport`] trait every module implements
//! - [`Value`] dynamically-typed call payload
//! - [`ModuleRegistry`] for name-based module lookup and dispatch
//! - [`ModuleError`] for error handling
//! - [`BridgeConfig`] for host configuration

mod config;
mod error;
mod module;
mod registry;
mod value;

pub use config::BridgeConfig;
pub use error::{ModuleError, ModuleResult};
pub use module::{ModuleExport, RenderCallback};
pub use registry::ModuleRegistry;
pub use value::Value;

/// Log levels shared by sinks and host callbacks
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Parse a level name as found in configuration (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BridgeConfig, LogLevel, ModuleError, ModuleExport, ModuleRegistry, ModuleResult,
        RenderCallback, Value,
    };
}
