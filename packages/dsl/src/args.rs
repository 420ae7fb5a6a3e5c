use indexmap::IndexMap;

use crate::ast::Expression;
use crate::dsl;
use crate::error::{require_name, RfwResult};
use crate::value::Value;

/// A named argument, used transiently while assembling widgets, maps, and
/// event payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    name: String,
    value: Value,
}

impl Argument {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> RfwResult<Self> {
        let name = name.into();
        require_name(&name, "argument name")?;
        Ok(Self {
            name,
            value: value.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_parts(self) -> (String, Value) {
        (self.name, self.value)
    }
}

/// Accumulates ordered, unique-by-name argument entries.
///
/// Setting a name that already exists overwrites the value but keeps the
/// key's original position; new names append at the end. Position stability
/// is observable in the rendered output, which is why this is an `IndexMap`
/// rather than a hash map.
#[derive(Debug, Clone, Default)]
pub struct ArgumentBuilder {
    values: IndexMap<String, Expression>,
}

impl ArgumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn argument(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> RfwResult<&mut Self> {
        let name = name.into();
        require_name(&name, "argument name")?;
        self.values.insert(name, value.into().into_expression()?);
        Ok(self)
    }

    pub fn add(&mut self, argument: Argument) -> RfwResult<&mut Self> {
        let (name, value) = argument.into_parts();
        self.argument(name, value)
    }

    pub fn add_all(
        &mut self,
        arguments: impl IntoIterator<Item = Argument>,
    ) -> RfwResult<&mut Self> {
        for argument in arguments {
            self.add(argument)?;
        }
        Ok(self)
    }

    /// Sugar for the conventional `child` argument.
    pub fn child(&mut self, child: impl Into<Value>) -> RfwResult<&mut Self> {
        self.argument("child", child)
    }

    /// Sugar for the conventional `children` list argument.
    pub fn children(
        &mut self,
        children: impl IntoIterator<Item = Value>,
    ) -> RfwResult<&mut Self> {
        self.argument("children", dsl::list_of(children)?)
    }

    /// Sugar for the conventional `padding` edge list.
    pub fn padding(&mut self, edges: impl IntoIterator<Item = Value>) -> RfwResult<&mut Self> {
        self.argument("padding", dsl::list_of(edges)?)
    }

    pub(crate) fn build(self) -> IndexMap<String, Expression> {
        self.values
    }
}
