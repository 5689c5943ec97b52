//! Semantic element model for Javelin.
//!
//! The upstream resolver produces declaration descriptors (packages, types,
//! executables, variables, type parameters) and owns them in an
//! [`ElementStore`]. Enclosing-element references are plain [`ElementId`]
//! indexes into that store, never owning references, so element lifecycles
//! stay with the store.

mod element;
mod types;

pub use element::{
    Element, ElementId, ElementKind, ElementStore, ExecutableElement, Modifier, PackageElement,
    TypeElement, TypeParameterElement, VariableElement,
};
pub use types::{ExecutableType, TypeDescriptor};
