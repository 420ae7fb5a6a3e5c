mod export;

pub use export::{export, ExportArgs};
