pub mod data;
mod ui;

pub use ui::create_library_text;
