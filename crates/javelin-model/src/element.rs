use std::fmt;

use javelin_core::SymbolKind;

use crate::types::{ExecutableType, TypeDescriptor};

/// Index of an element inside its [`ElementStore`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    pub(crate) fn from_raw(raw: u32) -> Self {
        ElementId(raw)
    }

    #[must_use]
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

/// Declaration kinds recognized by the signature builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Package,
    Class,
    Interface,
    Enum,
    AnnotationType,
    Method,
    Constructor,
    Field,
    Parameter,
    LocalVariable,
    EnumConstant,
    ExceptionParameter,
    TypeParameter,
}

impl ElementKind {
    /// Class-like kinds: classes, interfaces, enums and annotation types.
    pub fn is_class_like(self) -> bool {
        matches!(
            self,
            ElementKind::Class
                | ElementKind::Interface
                | ElementKind::Enum
                | ElementKind::AnnotationType
        )
    }

    pub fn is_executable(self) -> bool {
        matches!(self, ElementKind::Method | ElementKind::Constructor)
    }

    /// Maps an element kind to the protocol symbol kind, `None` for kinds the
    /// protocol has no representation for.
    pub fn symbol_kind(self) -> Option<SymbolKind> {
        match self {
            ElementKind::Interface => Some(SymbolKind::Interface),
            ElementKind::Class => Some(SymbolKind::Class),
            ElementKind::Package => Some(SymbolKind::Package),
            ElementKind::Method => Some(SymbolKind::Method),
            ElementKind::Constructor => Some(SymbolKind::Constructor),
            ElementKind::Field => Some(SymbolKind::Field),
            ElementKind::Enum => Some(SymbolKind::Enum),
            _ => None,
        }
    }
}

/// Java declaration modifiers, rendered in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Synchronized,
    Volatile,
    Transient,
    Native,
    Strictfp,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::Public => "public",
            Modifier::Protected => "protected",
            Modifier::Private => "private",
            Modifier::Abstract => "abstract",
            Modifier::Default => "default",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Synchronized => "synchronized",
            Modifier::Volatile => "volatile",
            Modifier::Transient => "transient",
            Modifier::Native => "native",
            Modifier::Strictfp => "strictfp",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageElement {
    pub qualified_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeElement {
    /// One of the class-like kinds.
    pub kind: ElementKind,
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub qualified_name: String,
    pub enclosing: Option<ElementId>,
    /// The declared type of this element, e.g. `p.C<T>`.
    pub ty: TypeDescriptor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableElement {
    /// `Method` or `Constructor`.
    pub kind: ElementKind,
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub enclosing: Option<ElementId>,
    pub type_parameters: Vec<ElementId>,
    pub parameters: Vec<ElementId>,
    pub return_type: Option<TypeDescriptor>,
    pub receiver: Option<TypeDescriptor>,
    pub thrown: Vec<TypeDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableElement {
    /// One of the field-like kinds.
    pub kind: ElementKind,
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub enclosing: Option<ElementId>,
    pub ty: TypeDescriptor,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParameterElement {
    pub name: String,
    pub enclosing: Option<ElementId>,
}

/// A declaration descriptor produced by the upstream semantic model.
///
/// The set of variants is closed; dispatch is by pattern match rather than
/// open-ended type inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Package(PackageElement),
    Type(TypeElement),
    Executable(ExecutableElement),
    Variable(VariableElement),
    TypeParameter(TypeParameterElement),
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Package(_) => ElementKind::Package,
            Element::Type(ty) => ty.kind,
            Element::Executable(exec) => exec.kind,
            Element::Variable(var) => var.kind,
            Element::TypeParameter(_) => ElementKind::TypeParameter,
        }
    }

    pub fn simple_name(&self) -> &str {
        match self {
            Element::Package(pkg) => pkg
                .qualified_name
                .rsplit('.')
                .next()
                .unwrap_or(&pkg.qualified_name),
            Element::Type(ty) => &ty.name,
            Element::Executable(exec) => &exec.name,
            Element::Variable(var) => &var.name,
            Element::TypeParameter(tp) => &tp.name,
        }
    }

    pub fn enclosing(&self) -> Option<ElementId> {
        match self {
            Element::Package(_) => None,
            Element::Type(ty) => ty.enclosing,
            Element::Executable(exec) => exec.enclosing,
            Element::Variable(var) => var.enclosing,
            Element::TypeParameter(tp) => tp.enclosing,
        }
    }

    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            Element::Type(ty) => &ty.modifiers,
            Element::Executable(exec) => &exec.modifiers,
            Element::Variable(var) => &var.modifiers,
            Element::Package(_) | Element::TypeParameter(_) => &[],
        }
    }

    /// The qualified name of this element, for the kinds that carry one.
    pub fn qualified_name(&self) -> Option<&str> {
        match self {
            Element::Package(pkg) => Some(&pkg.qualified_name),
            Element::Type(ty) => Some(&ty.qualified_name),
            _ => None,
        }
    }
}

/// Owning table of all elements of one semantic model.
///
/// Enclosing-element references are indexes into this table; chains are
/// acyclic by construction (an element can only reference already-allocated
/// elements) and terminate at a package or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementStore {
    elements: Vec<Element>,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, element: Element) -> ElementId {
        if let Some(enclosing) = element.enclosing() {
            debug_assert!(
                enclosing.idx() < self.elements.len(),
                "enclosing element must be allocated first"
            );
        }
        let id = ElementId::from_raw(self.elements.len() as u32);
        self.elements.push(element);
        id
    }

    pub fn get(&self, id: ElementId) -> &Element {
        &self.elements[id.idx()]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element itself followed by its enclosing chain, outwards.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(Some(id), move |&id| self.get(id).enclosing())
    }

    /// The outermost class-like element enclosing `id` (or `id` itself).
    pub fn top_level_type(&self, id: ElementId) -> Option<ElementId> {
        let mut highest = None;
        for ancestor in self.ancestors(id) {
            if self.get(ancestor).kind().is_class_like() {
                highest = Some(ancestor);
            }
        }
        highest
    }

    /// The qualified name of the package enclosing `id`, if any.
    pub fn package_name(&self, id: ElementId) -> Option<&str> {
        self.ancestors(id).find_map(|ancestor| match self.get(ancestor) {
            Element::Package(pkg) => Some(pkg.qualified_name.as_str()),
            _ => None,
        })
    }

    /// The function-shaped type of an executable element.
    pub fn executable_type(&self, exec: &ExecutableElement) -> ExecutableType {
        ExecutableType {
            type_variables: exec
                .type_parameters
                .iter()
                .map(|&tp| TypeDescriptor::other(self.get(tp).simple_name()))
                .collect(),
            receiver: exec.receiver.clone().map(Box::new),
            parameters: exec
                .parameters
                .iter()
                .map(|&param| self.variable_type(param).clone())
                .collect(),
            return_type: Box::new(
                exec.return_type
                    .clone()
                    .unwrap_or_else(|| TypeDescriptor::other("")),
            ),
            thrown: exec.thrown.clone(),
        }
    }

    /// The declared type of a variable element.
    ///
    /// Panics in debug builds when `id` is not a variable; the upstream model
    /// only references variables from executable parameter lists.
    pub fn variable_type(&self, id: ElementId) -> &TypeDescriptor {
        match self.get(id) {
            Element::Variable(var) => &var.ty,
            other => {
                debug_assert!(false, "expected variable element, got {:?}", other.kind());
                &EMPTY_TYPE
            }
        }
    }
}

static EMPTY_TYPE: TypeDescriptor = TypeDescriptor::Other { text: String::new() };
