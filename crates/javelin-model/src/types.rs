/// Textual description of a declared or derived type.
///
/// The variants form a closed set: nominal (declared) types carry their full
/// textual rendering, function-shaped (executable) types carry their parts,
/// and everything else (primitives, arrays, type variables, wildcards) is an
/// opaque textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    /// A nominal class or interface type, e.g. `java.util.List<java.lang.String>`.
    Declared { text: String },
    /// A function-shaped type: the type of a method or constructor.
    Executable(ExecutableType),
    /// Opaque textual form for every other type kind.
    Other { text: String },
}

impl TypeDescriptor {
    pub fn declared(text: impl Into<String>) -> Self {
        TypeDescriptor::Declared { text: text.into() }
    }

    pub fn other(text: impl Into<String>) -> Self {
        TypeDescriptor::Other { text: text.into() }
    }
}

/// The function-shaped type of an executable element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableType {
    pub type_variables: Vec<TypeDescriptor>,
    pub receiver: Option<Box<TypeDescriptor>>,
    pub parameters: Vec<TypeDescriptor>,
    pub return_type: Box<TypeDescriptor>,
    pub thrown: Vec<TypeDescriptor>,
}
