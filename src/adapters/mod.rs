// Adapters layer: concrete implementations of the domain ports (terminal, catalog file).

pub mod console;
pub mod storage;
