//! Canonical and cross-representation signature strings for declarations.
//!
//! Two construction modes exist:
//!
//! - *canonical*: the full, human-oriented rendering of a declaration
//!   ([`element_signature`], [`method_signature`], [`type_signature`]).
//! - *cross-representation* ([`cross_repo_qualified_name`]): a normalized
//!   form that must agree byte-for-byte whether the element was derived
//!   from a raw parse tree or from a fully type-checked model. The symbol
//!   matcher uses this equality to correlate externally-referenced symbols
//!   with locally re-derived ones, so the normalization rules here are a
//!   fixed contract, not formatting choices.
//!
//! All functions are pure over the element store; signing the same element
//! twice yields byte-identical output.

use javelin_model::{Element, ElementId, ElementKind, ElementStore, TypeDescriptor};

/// Canonical signature of any declaration element.
///
/// Unknown or unsupported kinds fall back to the element's opaque textual
/// form rather than failing.
pub fn element_signature(store: &ElementStore, id: ElementId) -> String {
    let element = store.get(id);
    match element.kind() {
        ElementKind::Package => format!("package {}", element_text(store, id)),
        ElementKind::AnnotationType => {
            format!(
                "{}@interface {}",
                modifiers_prefix(element),
                declared_type_text(element)
            )
        }
        ElementKind::Class => {
            format!(
                "{}class {}",
                modifiers_prefix(element),
                declared_type_text(element)
            )
        }
        ElementKind::Interface => {
            format!(
                "{}interface {}",
                modifiers_prefix(element),
                declared_type_text(element)
            )
        }
        ElementKind::Enum => {
            format!(
                "{}enum {}",
                modifiers_prefix(element),
                declared_type_text(element)
            )
        }
        ElementKind::Constructor | ElementKind::Method => method_signature(store, id),
        ElementKind::EnumConstant
        | ElementKind::ExceptionParameter
        | ElementKind::Field
        | ElementKind::LocalVariable
        | ElementKind::Parameter => match element {
            Element::Variable(var) => format!(
                "{}{} {}",
                modifiers_prefix(element),
                type_signature(Some(&var.ty)),
                var.name
            ),
            _ => element_text(store, id),
        },
        ElementKind::TypeParameter => element_text(store, id),
    }
}

/// Canonical signature of a method or constructor.
///
/// Constructors render the enclosing type's simple name in place of a method
/// name and carry no return type.
pub fn method_signature(store: &ElementStore, id: ElementId) -> String {
    let element = store.get(id);
    let Element::Executable(exec) = element else {
        return element_text(store, id);
    };
    let ctor = exec.kind == ElementKind::Constructor;
    let exec_ty = store.executable_type(exec);

    let mut sig = modifiers_prefix(element);
    if !ctor {
        sig.push_str(&type_signature(Some(&exec_ty.return_type)));
    }

    let type_var_sigs: Vec<String> = exec
        .type_parameters
        .iter()
        .map(|&tp| element_signature(store, tp).trim().to_string())
        .collect();
    if !type_var_sigs.is_empty() {
        sig.push_str(" <");
        sig.push_str(&type_var_sigs.join(", "));
        sig.push('>');
    }

    if ctor {
        if let Some(enclosing) = exec.enclosing {
            sig.push_str(store.get(enclosing).simple_name());
        }
    } else {
        sig.push(' ');
        sig.push_str(&exec.name);
    }

    sig.push('(');
    let param_sigs: Vec<String> = exec
        .parameters
        .iter()
        .map(|&param| element_signature(store, param).trim().to_string())
        .collect();
    sig.push_str(&param_sigs.join(", "));
    sig.push(')');

    if !exec.thrown.is_empty() {
        sig.push_str(" throws ");
        let thrown_sigs: Vec<String> = exec
            .thrown
            .iter()
            .map(|ty| type_signature(Some(ty)))
            .collect();
        sig.push_str(&thrown_sigs.join(", "));
    }
    sig
}

/// Canonical rendering of a type descriptor; absent types render empty.
pub fn type_signature(ty: Option<&TypeDescriptor>) -> String {
    let Some(ty) = ty else {
        return String::new();
    };
    match ty {
        TypeDescriptor::Declared { text } | TypeDescriptor::Other { text } => text.clone(),
        TypeDescriptor::Executable(exec) => {
            let mut sig = String::new();
            if !exec.type_variables.is_empty() {
                let type_var_sigs: Vec<String> = exec
                    .type_variables
                    .iter()
                    .map(|tv| type_signature(Some(tv)))
                    .collect();
                sig.push('<');
                sig.push_str(&type_var_sigs.join(", "));
                sig.push_str("> ");
            }
            if let Some(receiver) = &exec.receiver {
                sig.push_str(&type_signature(Some(receiver)));
                sig.push_str("::");
            }
            sig.push('(');
            let param_sigs: Vec<String> = exec
                .parameters
                .iter()
                .map(|param| type_signature(Some(param)))
                .collect();
            sig.push_str(&param_sigs.join(", "));
            sig.push_str(") -> ");
            sig.push_str(&type_signature(Some(&exec.return_type)));
            if !exec.thrown.is_empty() {
                let thrown_sigs: Vec<String> = exec
                    .thrown
                    .iter()
                    .map(|ty| type_signature(Some(ty)))
                    .collect();
                sig.push_str(" throws ");
                sig.push_str(&thrown_sigs.join(", "));
            }
            sig
        }
    }
}

/// Fully qualified dotted name of an element.
///
/// Walks the enclosing chain until the first element that carries its own
/// qualified name (a package or class-like element), then joins the
/// collected links innermost-last.
pub fn qualified_name(store: &ElementStore, id: ElementId) -> String {
    qualified_name_impl(store, id, false)
}

/// Qualified name normalized for cross-representation symbol matching.
///
/// Executable links in the chain render as a reduced method signature
/// ([`cross_repo_method_name`]) instead of their plain textual form, so that
/// names derived pre- and post-resolution compare equal.
pub fn cross_repo_qualified_name(store: &ElementStore, id: ElementId) -> String {
    qualified_name_impl(store, id, true)
}

fn qualified_name_impl(store: &ElementStore, id: ElementId, cross_repo: bool) -> String {
    let mut names = Vec::new();
    for ancestor in store.ancestors(id) {
        let element = store.get(ancestor);
        if let Some(qualified) = element.qualified_name() {
            names.push(qualified.to_string());
            break;
        }
        if cross_repo && matches!(element, Element::Executable(_)) {
            names.push(cross_repo_method_name(store, ancestor));
        } else {
            names.push(element_text(store, ancestor));
        }
    }
    names.reverse();
    names.join(".")
}

/// Reduced method signature used for cross-representation matching.
///
/// Signatures built from raw parse trees and from the resolved model differ
/// in qualification and whitespace; this form strips both so the two paths
/// agree: parameter type names keep only their last `.` segment, type
/// variables and parameters join on bare commas, and any remaining `", "`
/// is collapsed to `","`.
pub fn cross_repo_method_name(store: &ElementStore, id: ElementId) -> String {
    let element = store.get(id);
    let Element::Executable(exec) = element else {
        return element_text(store, id);
    };

    let mut sig = String::new();

    let type_params: Vec<&str> = exec
        .type_parameters
        .iter()
        .map(|&tp| store.get(tp).simple_name())
        .collect();
    if !type_params.is_empty() {
        sig.push('<');
        sig.push_str(&type_params.join(","));
        sig.push('>');
    }

    if exec.kind == ElementKind::Constructor {
        if let Some(enclosing) = exec.enclosing {
            sig.push_str(store.get(enclosing).simple_name());
        }
    } else {
        sig.push_str(&exec.name);
    }

    let params: Vec<String> = exec
        .parameters
        .iter()
        .map(|&param| {
            let rendered = type_signature(Some(store.variable_type(param)));
            match rendered.rfind('.') {
                Some(dot) => rendered[dot + 1..].to_string(),
                None => rendered,
            }
        })
        .collect();
    sig.push('(');
    sig.push_str(&params.join(","));
    sig.push(')');

    // The resolved model emits ", " where the raw parse tree emits ","; the
    // two must compare equal, so normalize here.
    sig.replace(", ", ",")
}

/// The element's opaque textual form, used as the fallback rendering.
fn element_text(store: &ElementStore, id: ElementId) -> String {
    match store.get(id) {
        Element::Package(pkg) => pkg.qualified_name.clone(),
        Element::Type(ty) => ty.qualified_name.clone(),
        Element::Executable(exec) => exec.name.clone(),
        Element::Variable(var) => var.name.clone(),
        Element::TypeParameter(tp) => tp.name.clone(),
    }
}

fn declared_type_text(element: &Element) -> String {
    match element {
        Element::Type(ty) => type_signature(Some(&ty.ty)),
        _ => String::new(),
    }
}

fn modifiers_prefix(element: &Element) -> String {
    let modifiers = element.modifiers();
    if modifiers.is_empty() {
        return String::new();
    }
    let mut prefix = modifiers
        .iter()
        .map(|modifier| modifier.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    prefix.push(' ');
    prefix
}
