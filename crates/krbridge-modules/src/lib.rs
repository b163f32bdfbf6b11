//! krbridge-modules - Built-in render modules
//!
//! - [`LogModule`] (`KRLogModule`): info/debug/error logging for the business layer

mod log;

pub use log::{
    LOG_MODULE_NAME, LogModule, LogModuleSettings, MAX_TAG_CHARS, METHOD_LOG_DEBUG,
    METHOD_LOG_ERROR, METHOD_LOG_INFO, find_tag,
};
