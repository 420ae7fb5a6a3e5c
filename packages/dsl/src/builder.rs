use indexmap::IndexMap;

use crate::ast::{Expression, RemoteWidgetDefinition, RemoteWidgetLibrary};
use crate::error::{require_name, RfwError, RfwResult};

/// Mutable assembler for a [`RemoteWidgetLibrary`].
///
/// Intended for single-threaded, build-once use: accumulate imports and
/// widget definitions, then [`build`](Self::build) a frozen snapshot. The
/// builder stays usable afterwards, but an already-built library never sees
/// later mutations.
#[derive(Debug, Clone)]
pub struct RemoteWidgetLibraryBuilder {
    name: String,
    imports: Vec<String>,
    widgets: Vec<RemoteWidgetDefinition>,
}

impl RemoteWidgetLibraryBuilder {
    pub fn new(name: impl Into<String>) -> RfwResult<Self> {
        let name = name.into();
        require_name(&name, "library name")?;
        Ok(Self {
            name,
            imports: Vec::new(),
            widgets: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an import statement. Repeated adds of the same name are no-ops,
    /// so each import renders at most once.
    pub fn add_import(&mut self, library: impl Into<String>) -> RfwResult<&mut Self> {
        let library = library.into();
        require_name(&library, "import name")?;
        if !self.imports.contains(&library) {
            self.imports.push(library);
        }
        Ok(self)
    }

    /// Appends a widget definition. Duplicate widget names are not rejected;
    /// every definition is serialized in order.
    pub fn define_widget(
        &mut self,
        name: impl Into<String>,
        body: Expression,
        description: Option<&str>,
    ) -> RfwResult<&mut Self> {
        let name = name.into();
        require_name(&name, "widget name")?;
        self.widgets.push(RemoteWidgetDefinition::new(
            name,
            None,
            body,
            description.map(str::to_string),
        ));
        Ok(self)
    }

    /// Appends a widget definition with an initial-state block.
    pub fn define_widget_with_state<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        initial_state: impl IntoIterator<Item = (S, Expression)>,
        body: Expression,
        description: Option<&str>,
    ) -> RfwResult<&mut Self> {
        let name = name.into();
        require_name(&name, "widget name")?;
        let state: IndexMap<String, Expression> = initial_state
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect();
        self.widgets.push(RemoteWidgetDefinition::new(
            name,
            Some(state),
            body,
            description.map(str::to_string),
        ));
        Ok(self)
    }

    /// Freezes the accumulated state into a library. At least one widget
    /// definition is required.
    pub fn build(&self) -> RfwResult<RemoteWidgetLibrary> {
        if self.widgets.is_empty() {
            return Err(RfwError::invalid_operation(
                "at least one widget definition is required",
            ));
        }
        Ok(RemoteWidgetLibrary::new(
            self.name.clone(),
            self.imports.clone(),
            self.widgets.clone(),
        ))
    }
}
