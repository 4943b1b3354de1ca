//! Adapters for the document source and the key-store port.

pub mod in_memory;
pub mod json_file;
