//! Sink implementations

pub mod console;
pub mod json;
pub mod memory;

pub use console::{ConsoleSink, ConsoleStream};
pub use json::JsonSink;
pub use memory::MemorySink;

pub use crate::core::Sink;
