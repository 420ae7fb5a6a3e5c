//! Canonical text rendering for remote widget libraries.
//!
//! The output format is whitespace- and comma-significant: every map entry,
//! widget argument, and list item carries a trailing comma, empty containers
//! collapse to `{}`/`[]`, and rendering the same frozen library twice yields
//! byte-identical text. The serializer performs no validation; a built
//! library always renders.

use crate::ast::{Expression, ListItem, RemoteWidgetLibrary};

/// Indenting text emitter shared by the whole render walk.
///
/// Indentation is emitted lazily, exactly once, right before the first
/// non-empty write on a line. One writer instance per render call; the
/// walk never shares a writer across renders.
struct Writer {
    out: String,
    indent_token: &'static str,
    indent_level: usize,
    at_line_start: bool,
}

impl Writer {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent_token: "  ",
            indent_level: 0,
            at_line_start: true,
        }
    }

    fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.write_indent();
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        self.at_line_start = true;
    }

    fn write_line(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    fn write_indent(&mut self) {
        if !self.at_line_start {
            return;
        }
        for _ in 0..self.indent_level {
            self.out.push_str(self.indent_token);
        }
        self.at_line_start = false;
    }

    fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    fn pop_indent(&mut self) {
        self.indent_level -= 1;
    }

    fn finish(self) -> String {
        self.out
    }
}

fn write_expression(writer: &mut Writer, expression: &Expression) {
    match expression {
        Expression::Literal { raw } => {
            writer.write(raw);
        }

        Expression::StringLiteral { value } => {
            writer.write("\"");
            writer.write(&escape(value));
            writer.write("\"");
        }

        Expression::Reference { segments } => {
            writer.write(&segments.join("."));
        }

        Expression::Map { entries } => {
            if entries.is_empty() {
                writer.write("{}");
                return;
            }
            writer.write_line("{");
            writer.push_indent();
            for (key, value) in entries {
                writer.write(key);
                writer.write(": ");
                write_expression(writer, value);
                writer.write_line(",");
            }
            writer.pop_indent();
            writer.write("}");
        }

        Expression::Widget { name, arguments } => {
            writer.write(name);
            writer.write_line("(");
            writer.push_indent();
            for (key, value) in arguments {
                writer.write(key);
                writer.write(": ");
                write_expression(writer, value);
                writer.write_line(",");
            }
            writer.pop_indent();
            writer.write(")");
        }

        Expression::Event { name, payload } => {
            writer.write("event \"");
            writer.write(name);
            writer.write("\"");
            if let Some(payload) = payload {
                writer.write(" ");
                write_expression(writer, payload);
            }
        }

        Expression::List { items } => {
            if items.is_empty() {
                writer.write("[]");
                return;
            }
            writer.write_line("[");
            writer.push_indent();
            for item in items {
                write_list_item(writer, item);
            }
            writer.pop_indent();
            writer.write("]");
        }
    }
}

fn write_list_item(writer: &mut Writer, item: &ListItem) {
    match item {
        ListItem::Value { expression } => {
            writer.write_indent();
            write_expression(writer, expression);
            writer.write_line(",");
        }

        ListItem::For {
            variable,
            iterable,
            body,
        } => {
            writer.write("...for ");
            writer.write(variable);
            writer.write(" in ");
            write_expression(writer, iterable);
            writer.write_line(":");
            writer.push_indent();
            writer.write_indent();
            write_expression(writer, body);
            writer.write_line(",");
            writer.pop_indent();
        }
    }
}

fn write_library(writer: &mut Writer, library: &RemoteWidgetLibrary) {
    for import in library.imports() {
        writer.write_line(&format!("import {import};"));
    }
    if !library.imports().is_empty() {
        writer.newline();
    }

    let widgets = library.widgets();
    for (index, widget) in widgets.iter().enumerate() {
        if let Some(description) = widget.description() {
            if !description.trim().is_empty() {
                writer.write_line(&format!("// {description}"));
            }
        }

        writer.write("widget ");
        writer.write(widget.name());
        if let Some(state) = widget.initial_state() {
            if !state.is_empty() {
                writer.write(" { ");
                for (entry_index, (key, value)) in state.iter().enumerate() {
                    if entry_index > 0 {
                        writer.write(", ");
                    }
                    writer.write(key);
                    writer.write(": ");
                    write_expression(writer, value);
                }
                writer.write(" }");
            }
        }
        writer.write(" = ");
        write_expression(writer, widget.body());
        writer.write_line(";");

        if index < widgets.len() - 1 {
            writer.newline();
        }
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 4);
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl RemoteWidgetLibrary {
    /// Renders the library into its canonical `.rfwtxt` text form.
    pub fn to_text(&self) -> String {
        let mut writer = Writer::new();
        write_library(&mut writer, self);
        writer.finish()
    }
}

/// Convenience function mirroring [`RemoteWidgetLibrary::to_text`].
pub fn serialize(library: &RemoteWidgetLibrary) -> String {
    library.to_text()
}
