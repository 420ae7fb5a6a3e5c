//! Constructor functions for building remote widget expression trees.
//!
//! Every constructor is pure: it validates its inputs, allocates one node,
//! and performs no I/O. Validation failures surface immediately at the
//! offending call rather than at render time.

use crate::args::ArgumentBuilder;
use crate::ast::{Expression, ListItem};
use crate::error::{require_name, RfwError, RfwResult};
use crate::value::Value;

/// Verbatim token, emitted with no quoting or escaping.
pub fn literal(raw: impl Into<String>) -> Expression {
    Expression::Literal { raw: raw.into() }
}

pub fn boolean(value: bool) -> Expression {
    literal(if value { "true" } else { "false" })
}

pub fn int(value: i64) -> Expression {
    literal(value.to_string())
}

pub fn double(value: f64) -> Expression {
    literal(value.to_string())
}

/// ARGB color token: `0x` followed by exactly 8 uppercase hex digits.
pub fn hex_color(value: u32) -> Expression {
    literal(format!("0x{value:08X}"))
}

/// Quoted string literal. Empty strings are valid.
pub fn string(value: impl Into<String>) -> Expression {
    Expression::StringLiteral {
        value: value.into(),
    }
}

/// Dotted reference into host data or a loop variable. At least one segment
/// is required.
pub fn reference<I, S>(segments: I) -> RfwResult<Expression>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
    if segments.is_empty() {
        return Err(RfwError::invalid_argument(
            "segments",
            "a reference requires at least one segment",
        ));
    }
    Ok(Expression::Reference { segments })
}

/// Widget invocation from a fixed argument list. Argument names collapse
/// unique-by-name; assigning a name twice overwrites the value in place.
pub fn widget<'a>(
    name: &str,
    arguments: impl IntoIterator<Item = (&'a str, Expression)>,
) -> RfwResult<Expression> {
    widget_with(name, |builder| {
        for (key, value) in arguments {
            builder.argument(key, value)?;
        }
        Ok(())
    })
}

/// Widget invocation configured through an [`ArgumentBuilder`].
pub fn widget_with(
    name: &str,
    configure: impl FnOnce(&mut ArgumentBuilder) -> RfwResult<()>,
) -> RfwResult<Expression> {
    require_name(name, "widget name")?;
    let mut builder = ArgumentBuilder::new();
    configure(&mut builder)?;
    Ok(Expression::Widget {
        name: name.to_string(),
        arguments: builder.build(),
    })
}

/// Map literal from a fixed entry list, unique-by-name like widget arguments.
pub fn map<'a>(
    entries: impl IntoIterator<Item = (&'a str, Expression)>,
) -> RfwResult<Expression> {
    map_with(|builder| {
        for (key, value) in entries {
            builder.argument(key, value)?;
        }
        Ok(())
    })
}

/// Map literal configured through an [`ArgumentBuilder`].
pub fn map_with(
    configure: impl FnOnce(&mut ArgumentBuilder) -> RfwResult<()>,
) -> RfwResult<Expression> {
    let mut builder = ArgumentBuilder::new();
    configure(&mut builder)?;
    Ok(Expression::Map {
        entries: builder.build(),
    })
}

/// Event invocation; the entries become an implicit map payload (an empty
/// entry list still renders a `{}` payload).
pub fn event<'a>(
    name: &str,
    entries: impl IntoIterator<Item = (&'a str, Expression)>,
) -> RfwResult<Expression> {
    require_name(name, "event name")?;
    let payload = map(entries)?;
    Ok(Expression::Event {
        name: name.to_string(),
        payload: Some(Box::new(payload)),
    })
}

/// Event invocation configured through an [`ArgumentBuilder`].
pub fn event_with(
    name: &str,
    configure: impl FnOnce(&mut ArgumentBuilder) -> RfwResult<()>,
) -> RfwResult<Expression> {
    require_name(name, "event name")?;
    let payload = map_with(configure)?;
    Ok(Expression::Event {
        name: name.to_string(),
        payload: Some(Box::new(payload)),
    })
}

/// Event invocation with no payload at all.
pub fn bare_event(name: &str) -> RfwResult<Expression> {
    require_name(name, "event name")?;
    Ok(Expression::Event {
        name: name.to_string(),
        payload: None,
    })
}

/// List expression from prepared items (plain values and `...for` loops may
/// be mixed freely).
pub fn list(items: impl IntoIterator<Item = ListItem>) -> Expression {
    Expression::List {
        items: items.into_iter().collect(),
    }
}

/// List expression whose items are all plain coerced values.
pub fn list_of(values: impl IntoIterator<Item = Value>) -> RfwResult<Expression> {
    let mut items = Vec::new();
    for value in values {
        items.push(item(value.into_expression()?));
    }
    Ok(list(items))
}

/// Plain list item.
pub fn item(expression: Expression) -> ListItem {
    ListItem::Value { expression }
}

/// Iteration list item: `...for <variable> in <iterable>: <body>`.
pub fn for_in(variable: &str, iterable: Expression, body: Expression) -> RfwResult<ListItem> {
    require_name(variable, "loop variable")?;
    Ok(ListItem::For {
        variable: variable.to_string(),
        iterable,
        body,
    })
}
