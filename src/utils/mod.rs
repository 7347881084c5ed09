//! Environment introspection consumed by the driver

pub mod cpu;
pub mod host;
