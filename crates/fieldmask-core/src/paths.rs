//! Field mask path construction.
//!
//! [`build_paths`] walks a selection set depth-first and emits one
//! dot-separated path per selected leaf. Two caller hooks shape the result:
//! a [`FieldNameResolver`] that renames or drops fields, and an
//! [`AbstractTypeResolver`] that decides what an interface or union typed
//! field contributes. Without the latter such fields contribute nothing,
//! since the concrete type of the value is unknown before it is fetched.

use std::fmt;

use async_graphql_parser::types::{FieldDefinition, SelectionSet};
use tracing::trace;

use crate::error::{FieldMaskError, Result};
use crate::flatten::flatten;
use crate::fragments::FragmentRegistry;
use crate::schema::{TypeCategory, TypeGraph};

/// Separator between the segments of a field mask path.
pub const PATH_SEPARATOR: char = '.';

/// Joins a path segment and a sub-path.
#[must_use]
pub fn join_path(segment: &str, sub_path: &str) -> String {
    format!("{segment}{PATH_SEPARATOR}{sub_path}")
}

/// Chooses the path segment for a field.
///
/// Returning `None` removes the field and everything selected below it.
/// Implemented for closures taking the same arguments.
pub trait FieldNameResolver {
    fn resolve_field_name(
        &self,
        field: &FieldDefinition,
        parent_type: &str,
        schema: &dyn TypeGraph,
    ) -> Option<String>;
}

impl<F> FieldNameResolver for F
where
    F: Fn(&FieldDefinition, &str, &dyn TypeGraph) -> Option<String>,
{
    fn resolve_field_name(
        &self,
        field: &FieldDefinition,
        parent_type: &str,
        schema: &dyn TypeGraph,
    ) -> Option<String> {
        self(field, parent_type, schema)
    }
}

/// What the path builder knows about an interface or union typed field.
pub struct AbstractTypeContext<'a> {
    /// The interface or union the field returns.
    pub type_name: &'a str,
    pub category: TypeCategory,
    /// Possible object types of `type_name`, in schema order.
    pub possible_types: Vec<&'a str>,
    /// Object type declaring the field.
    pub parent_type: &'a str,
    pub field: &'a FieldDefinition,
    /// Selection set under the field, fragments not yet expanded.
    pub selection_set: &'a SelectionSet,
    pub schema: &'a dyn TypeGraph,
}

impl fmt::Debug for AbstractTypeContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbstractTypeContext")
            .field("type_name", &self.type_name)
            .field("category", &self.category)
            .field("possible_types", &self.possible_types)
            .field("parent_type", &self.parent_type)
            .field("field", &self.field.name.node)
            .finish_non_exhaustive()
    }
}

/// Computes the sub-paths of an interface or union typed field.
///
/// `compute_for_concrete_type` runs the path builder over the field's
/// selection set as if the value had the given object type. The resolver
/// decides which types to ask for and how to combine the answers; the
/// builder prefixes whatever it returns with the field's segment.
///
/// Implemented for closures taking the same arguments.
pub trait AbstractTypeResolver {
    fn resolve_abstract_type_paths(
        &self,
        context: &AbstractTypeContext<'_>,
        compute_for_concrete_type: &dyn Fn(&str) -> Result<Vec<String>>,
    ) -> Result<Vec<String>>;
}

impl<F> AbstractTypeResolver for F
where
    F: Fn(&AbstractTypeContext<'_>, &dyn Fn(&str) -> Result<Vec<String>>) -> Result<Vec<String>>,
{
    fn resolve_abstract_type_paths(
        &self,
        context: &AbstractTypeContext<'_>,
        compute_for_concrete_type: &dyn Fn(&str) -> Result<Vec<String>>,
    ) -> Result<Vec<String>> {
        self(context, compute_for_concrete_type)
    }
}

/// Hooks for [`build_paths`]. Both are optional.
#[derive(Clone, Copy, Default)]
pub struct FieldMaskOptions<'h> {
    field_names: Option<&'h dyn FieldNameResolver>,
    abstract_types: Option<&'h dyn AbstractTypeResolver>,
}

impl<'h> FieldMaskOptions<'h> {
    /// Creates options with no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field name resolver.
    #[must_use]
    pub fn with_field_names(mut self, resolver: &'h dyn FieldNameResolver) -> Self {
        self.field_names = Some(resolver);
        self
    }

    /// Sets the abstract type resolver.
    #[must_use]
    pub fn with_abstract_types(mut self, resolver: &'h dyn AbstractTypeResolver) -> Self {
        self.abstract_types = Some(resolver);
        self
    }
}

impl fmt::Debug for FieldMaskOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMaskOptions")
            .field("field_names", &self.field_names.is_some())
            .field("abstract_types", &self.abstract_types.is_some())
            .finish()
    }
}

/// Computes the field mask paths selected by `selection_set` on the object
/// type `type_name`.
///
/// Paths come out in depth-first document order, fragment contents at the
/// position of their spread. Nothing is deduplicated.
///
/// # Errors
///
/// Propagates the errors of [`flatten`], for `type_name` and for every type
/// the recursion visits, including types requested by the abstract type
/// resolver. Returns [`FieldMaskError::UnknownType`] if a selected field's
/// return type is missing from the schema.
pub fn build_paths(
    selection_set: &SelectionSet,
    type_name: &str,
    schema: &dyn TypeGraph,
    fragments: &dyn FragmentRegistry,
    options: &FieldMaskOptions<'_>,
) -> Result<Vec<String>> {
    let mut paths = Vec::new();

    for field in flatten(selection_set, type_name, schema, fragments)? {
        let segment = match options.field_names {
            Some(resolver) => {
                match resolver.resolve_field_name(field.definition, type_name, schema) {
                    Some(segment) => segment,
                    None => {
                        trace!(type_name, field = field.name, "Field excluded by name resolver");
                        continue;
                    }
                }
            }
            None => field.name.to_string(),
        };

        let return_type = field.return_type().as_str();
        let category = schema
            .type_category(return_type)
            .ok_or_else(|| FieldMaskError::unknown_type(return_type))?;

        let (true, Some(nested)) = (category.is_composite(), field.selection_set) else {
            paths.push(segment);
            continue;
        };

        let sub_paths = if category == TypeCategory::Object {
            build_paths(nested, return_type, schema, fragments, options)?
        } else {
            let Some(resolver) = options.abstract_types else {
                trace!(
                    type_name,
                    field = field.name,
                    return_type,
                    "Abstract field omitted without a resolver"
                );
                continue;
            };

            let context = AbstractTypeContext {
                type_name: return_type,
                category,
                possible_types: schema.possible_types(return_type),
                parent_type: type_name,
                field: field.definition,
                selection_set: nested,
                schema,
            };
            let compute_for_concrete_type =
                |concrete: &str| build_paths(nested, concrete, schema, fragments, options);
            resolver.resolve_abstract_type_paths(&context, &compute_for_concrete_type)?
        };

        paths.extend(sub_paths.iter().map(|sub| join_path(&segment, sub)));
    }

    Ok(paths)
}
