//! Declaration model shared by the extractor and the bridge builders.
//!
//! A [`Declaration`] holds the exported callables of one source file together
//! with their return bindings. Returns are kept in a parallel sequence rather
//! than on [`Callable`]: `returns[i]` always belongs to `callables[i]`, and a
//! callable without a result still occupies a slot holding an empty
//! [`Parameter`].

use serde::Serialize;

/// One formal parameter or return binding.
///
/// `type_name` is the bare source type identifier. Anything more complex than
/// a simple identifier never reaches the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// A return slot for a callable that declares no result.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this binding carries a type.
    pub fn has_type(&self) -> bool {
        !self.type_name.is_empty()
    }
}

/// One exported function: its name and ordered parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Callable {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl Callable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
        }
    }

    /// Append a parameter, keeping declaration order.
    pub fn with_parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }
}

/// The exported callables of one source file of a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub package_name: String,
    callables: Vec<Callable>,
    returns: Vec<Parameter>,
}

impl Declaration {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            callables: Vec::new(),
            returns: Vec::new(),
        }
    }

    /// Append a callable together with its return slot.
    ///
    /// Pass [`Parameter::empty`] for a callable without a result.
    pub fn push(&mut self, callable: Callable, ret: Parameter) {
        self.callables.push(callable);
        self.returns.push(ret);
    }

    /// Builder-style variant of [`Declaration::push`].
    pub fn with_callable(mut self, callable: Callable, ret: Parameter) -> Self {
        self.push(callable, ret);
        self
    }

    pub fn callables(&self) -> &[Callable] {
        &self.callables
    }

    pub fn returns(&self) -> &[Parameter] {
        &self.returns
    }

    /// Iterate callables paired with their return slot.
    pub fn entries(&self) -> impl Iterator<Item = (&Callable, &Parameter)> {
        self.callables.iter().zip(self.returns.iter())
    }

    /// A declaration is emitted only when it names a package and exports at
    /// least one callable.
    pub fn is_valid(&self) -> bool {
        !self.package_name.is_empty() && !self.callables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_declaration_is_invalid() {
        let decl = Declaration::new("hello");
        assert!(!decl.is_valid());
    }

    #[test]
    fn test_declaration_without_package_is_invalid() {
        let decl = Declaration::new("").with_callable(Callable::new("Greet"), Parameter::empty());
        assert!(!decl.is_valid());
    }

    #[test]
    fn test_declaration_with_callable_is_valid() {
        let decl =
            Declaration::new("hello").with_callable(Callable::new("Greet"), Parameter::empty());
        assert!(decl.is_valid());
    }

    #[test]
    fn test_push_keeps_returns_aligned() {
        let mut decl = Declaration::new("pkg");
        decl.push(Callable::new("A"), Parameter::empty());
        decl.push(Callable::new("B"), Parameter::new("", "int"));

        assert_eq!(decl.callables().len(), decl.returns().len());
        let pairs: Vec<_> = decl
            .entries()
            .map(|(c, r)| (c.name.as_str(), r.type_name.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", ""), ("B", "int")]);
    }

    #[test]
    fn test_duplicate_parameter_names_are_kept() {
        let callable = Callable::new("F")
            .with_parameter(Parameter::new("x", "int"))
            .with_parameter(Parameter::new("x", "string"));

        assert_eq!(callable.parameters.len(), 2);
        assert_eq!(callable.parameters[1].type_name, "string");
    }

    #[test]
    fn test_parameter_has_type() {
        assert!(!Parameter::empty().has_type());
        assert!(Parameter::new("", "string").has_type());
    }
}
