//! Builder DSL and canonical text serializer for remote widget libraries.
//!
//! Trees of [`Expression`] nodes are assembled with the constructors in
//! [`dsl`], attached to a [`RemoteWidgetLibraryBuilder`] as widget bodies,
//! and frozen into a [`RemoteWidgetLibrary`] whose
//! [`to_text`](RemoteWidgetLibrary::to_text) renders the `.rfwtxt` document
//! consumed by the rendering host.

pub mod args;
pub mod ast;
pub mod builder;
pub mod dsl;
pub mod error;
pub mod serializer;
pub mod value;

pub use args::{Argument, ArgumentBuilder};
pub use ast::{Expression, ListItem, RemoteWidgetDefinition, RemoteWidgetLibrary};
pub use builder::RemoteWidgetLibraryBuilder;
pub use error::{RfwError, RfwResult};
pub use serializer::serialize;
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::{item, list, string, widget};

    #[test]
    fn test_build_and_render_smoke() {
        let mut builder = RemoteWidgetLibraryBuilder::new("smoke").unwrap();
        builder
            .define_widget(
                "root",
                widget("Text", [("text", list([item(string("hi"))]))]).unwrap(),
                None,
            )
            .unwrap();

        let library = builder.build().unwrap();
        assert!(library.to_text().starts_with("widget root = Text("));
    }
}
