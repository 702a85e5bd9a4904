mod source;

pub use source::{DemoSource, RecordSource, parse_records};

#[cfg(not(target_arch = "wasm32"))]
pub use source::JsonFileSource;
