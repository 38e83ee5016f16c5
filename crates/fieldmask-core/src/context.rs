//! Resolver-facing entry point.
//!
//! A field resolver hands over what its host engine knows about the field
//! being resolved: the schema, the fragments of the executing document, and
//! the field's selection set. The host is expected to have merged all
//! occurrences of the field that share its response key; the
//! [`merged_field_selection_set`] helper does that for hosts working directly
//! on a parsed document.

use std::fmt;

use async_graphql_parser::Positioned;
use async_graphql_parser::types::{
    ExecutableDocument, Field, OperationDefinition, Selection, SelectionSet,
};
use tracing::debug;

use crate::error::{FieldMaskError, Result};
use crate::fragments::FragmentRegistry;
use crate::paths::{FieldMaskOptions, build_paths};
use crate::schema::TypeGraph;

/// Everything the path builder needs about the field being resolved.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Type graph of the executing schema.
    pub schema: &'a dyn TypeGraph,

    /// Fragments of the executing document.
    pub fragments: &'a dyn FragmentRegistry,

    /// Selection set of the field, merged across same-key occurrences.
    pub selection_set: &'a SelectionSet,
}

impl<'a> ResolveContext<'a> {
    /// Creates a new resolve context.
    #[must_use]
    pub fn new(
        schema: &'a dyn TypeGraph,
        fragments: &'a dyn FragmentRegistry,
        selection_set: &'a SelectionSet,
    ) -> Self {
        Self {
            schema,
            fragments,
            selection_set,
        }
    }
}

impl fmt::Debug for ResolveContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveContext")
            .field("selections", &self.selection_set.items.len())
            .finish_non_exhaustive()
    }
}

/// Computes the field mask paths requested below the field being resolved.
///
/// `type_name` is the object type the field resolves to.
///
/// # Errors
///
/// Returns [`FieldMaskError::UnknownType`] if `type_name`, or a type requested
/// by the abstract type resolver, is not an object type of the schema.
pub fn compute_field_mask_paths(
    type_name: &str,
    context: &ResolveContext<'_>,
    options: &FieldMaskOptions<'_>,
) -> Result<Vec<String>> {
    let paths = build_paths(
        context.selection_set,
        type_name,
        context.schema,
        context.fragments,
        options,
    )?;

    debug!(type_name, paths = paths.len(), "Computed field mask paths");
    Ok(paths)
}

/// Finds a field of an operation by its dot-separated response path and
/// merges the selection sets of all its occurrences.
///
/// Path segments are response keys, so aliased fields are addressed by
/// alias. Occurrences inside fragments are found too, at any level; type
/// conditions are not evaluated here. With a single operation in the
/// document `operation_name` may be omitted.
///
/// # Errors
///
/// - [`FieldMaskError::InvalidQuery`] if the operation cannot be selected.
/// - [`FieldMaskError::FieldNotFound`] if no field answers to the path.
pub fn merged_field_selection_set(
    document: &ExecutableDocument,
    operation_name: Option<&str>,
    response_path: &str,
) -> Result<SelectionSet> {
    let operation = select_operation(document, operation_name)?;
    let mut current = vec![&operation.selection_set.node];

    for key in response_path.split(crate::paths::PATH_SEPARATOR) {
        let mut occurrences = Vec::new();
        for &selection_set in &current {
            collect_occurrences(selection_set, key, document, &mut Vec::new(), &mut occurrences);
        }
        if occurrences.is_empty() {
            return Err(FieldMaskError::FieldNotFound(response_path.to_string()));
        }
        current = occurrences
            .into_iter()
            .map(|field| &field.selection_set.node)
            .collect();
    }

    let items: Vec<Positioned<Selection>> = current
        .into_iter()
        .flat_map(|selection_set| selection_set.items.iter().cloned())
        .collect();
    Ok(SelectionSet { items })
}

fn select_operation<'d>(
    document: &'d ExecutableDocument,
    operation_name: Option<&str>,
) -> Result<&'d OperationDefinition> {
    let mut operations = document.operations.iter();
    let found = match operation_name {
        Some(wanted) => operations.find(|(name, _)| name.is_none_or(|n| n.as_str() == wanted)),
        None => {
            let first = operations.next();
            if operations.next().is_some() {
                return Err(FieldMaskError::InvalidQuery(
                    "document has several operations, an operation name is required".into(),
                ));
            }
            first
        }
    };

    found
        .map(|(_, operation)| &operation.node)
        .ok_or_else(|| {
            FieldMaskError::InvalidQuery(format!(
                "unknown operation: {}",
                operation_name.unwrap_or_default()
            ))
        })
}

fn collect_occurrences<'d>(
    selection_set: &'d SelectionSet,
    response_key: &str,
    document: &'d ExecutableDocument,
    active_fragments: &mut Vec<&'d str>,
    occurrences: &mut Vec<&'d Field>,
) {
    for item in &selection_set.items {
        match &item.node {
            Selection::Field(field) => {
                let key = field.node.alias.as_ref().unwrap_or(&field.node.name);
                if key.node.as_str() == response_key {
                    occurrences.push(&field.node);
                }
            }
            Selection::InlineFragment(inline) => collect_occurrences(
                &inline.node.selection_set.node,
                response_key,
                document,
                active_fragments,
                occurrences,
            ),
            Selection::FragmentSpread(spread) => {
                let name = spread.node.fragment_name.node.as_str();
                if active_fragments.contains(&name) {
                    continue;
                }
                if let Some(fragment) = document.fragment(name) {
                    active_fragments.push(name);
                    collect_occurrences(
                        &fragment.selection_set.node,
                        response_key,
                        document,
                        active_fragments,
                        occurrences,
                    );
                    active_fragments.pop();
                }
            }
        }
    }
}
