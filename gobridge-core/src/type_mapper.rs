//! Type mapping between source type names and target-language type names.

/// Trait for mapping source type names to target-language type strings.
///
/// Unmapped names yield an empty string. Callers decide how to render a
/// parameter or binding without a type.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a bare source type identifier to a target type string
    fn map_type(&self, source: &str) -> &'static str;
}

/// Go type names understood by the Java bridge.
const JAVA_TYPES: &[(&str, &str)] = &[("string", "String"), ("int", "long")];

/// Go to Java type mapper.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn language(&self) -> &'static str {
        "java"
    }

    fn map_type(&self, source: &str) -> &'static str {
        JAVA_TYPES
            .iter()
            .find(|(go, _)| *go == source)
            .map(|(_, java)| *java)
            .unwrap_or("")
    }
}
