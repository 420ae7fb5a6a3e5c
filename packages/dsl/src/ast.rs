use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Expression node in a remote widget tree.
///
/// Expressions are immutable once constructed; the serializer walks them
/// without mutation, so a finished tree can be rendered from multiple
/// threads at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Expression {
    /// Verbatim token (numbers, booleans, hex colors). Never escaped.
    Literal { raw: String },

    /// Double-quoted string, escaped on render.
    StringLiteral { value: String },

    /// Dotted path into host data or a loop variable (`data.catalog.items`).
    Reference { segments: Vec<String> },

    /// Ordered name/expression entries, unique by name.
    Map { entries: IndexMap<String, Expression> },

    /// Widget invocation with ordered named arguments.
    Widget {
        name: String,
        arguments: IndexMap<String, Expression>,
    },

    /// Event handler registration with an optional payload (typically a map).
    Event {
        name: String,
        payload: Option<Box<Expression>>,
    },

    /// Ordered list of items.
    List { items: Vec<ListItem> },
}

/// One entry of a list expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ListItem {
    /// Plain value item.
    Value { expression: Expression },

    /// Spread iteration over a host-resolved iterable
    /// (`...for product in data.catalog.items:`).
    For {
        variable: String,
        iterable: Expression,
        body: Expression,
    },
}

/// One named widget definition inside a library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteWidgetDefinition {
    name: String,
    initial_state: Option<IndexMap<String, Expression>>,
    body: Expression,
    description: Option<String>,
}

impl RemoteWidgetDefinition {
    pub(crate) fn new(
        name: String,
        initial_state: Option<IndexMap<String, Expression>>,
        body: Expression,
        description: Option<String>,
    ) -> Self {
        Self {
            name,
            initial_state,
            body,
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_state(&self) -> Option<&IndexMap<String, Expression>> {
        self.initial_state.as_ref()
    }

    pub fn body(&self) -> &Expression {
        &self.body
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Frozen library of widget definitions, produced by
/// [`RemoteWidgetLibraryBuilder::build`](crate::RemoteWidgetLibraryBuilder::build).
///
/// The import list and widget list are snapshots; mutating the builder after
/// `build` does not affect an already-built library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteWidgetLibrary {
    name: String,
    imports: Vec<String>,
    widgets: Vec<RemoteWidgetDefinition>,
}

impl RemoteWidgetLibrary {
    pub(crate) fn new(
        name: String,
        imports: Vec<String>,
        widgets: Vec<RemoteWidgetDefinition>,
    ) -> Self {
        Self {
            name,
            imports,
            widgets,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn widgets(&self) -> &[RemoteWidgetDefinition] {
        &self.widgets
    }
}
