//! Selection flattening.
//!
//! Turns one selection set into the ordered list of fields that apply when
//! the runtime value has a given object type. Fragment spreads and inline
//! fragments are expanded in place when their type condition matches and
//! dropped otherwise, so the output order is the document order of the
//! fields that survive.

use async_graphql_parser::types::{FieldDefinition, Selection, SelectionSet};
use async_graphql_value::Name;
use tracing::trace;

use crate::error::{FieldMaskError, Result};
use crate::fragments::FragmentRegistry;
use crate::schema::{TypeCategory, TypeGraph, is_meta_field, named_type, satisfies_type_condition};

/// A field selected on an object type, after fragment expansion.
#[derive(Debug, Clone, Copy)]
pub struct FieldSelection<'a> {
    /// Declared schema name of the field. Aliases never show up here.
    pub name: &'a str,

    /// Schema definition of the field on the flattened type.
    pub definition: &'a FieldDefinition,

    /// Nested selection set, `None` when the field selects no sub-fields.
    pub selection_set: Option<&'a SelectionSet>,
}

impl<'a> FieldSelection<'a> {
    /// Named return type of the field, list and non-null wrappers removed.
    #[must_use]
    pub fn return_type(&self) -> &'a Name {
        named_type(&self.definition.ty.node)
    }
}

/// Flattens `selection_set` against the object type `type_name`.
///
/// Meta fields such as `__typename` are left out: they have no schema
/// definition and never name stored data.
///
/// # Errors
///
/// - [`FieldMaskError::UnknownType`] if `type_name` is not an object type of
///   the schema.
/// - [`FieldMaskError::UnknownField`], [`FieldMaskError::UnknownFragment`] or
///   [`FieldMaskError::FragmentCycle`] if the document does not fit the
///   schema.
pub fn flatten<'a>(
    selection_set: &'a SelectionSet,
    type_name: &str,
    schema: &'a dyn TypeGraph,
    fragments: &'a dyn FragmentRegistry,
) -> Result<Vec<FieldSelection<'a>>> {
    if schema.type_category(type_name) != Some(TypeCategory::Object) {
        return Err(FieldMaskError::unknown_type(type_name));
    }

    let mut flattener = Flattener {
        type_name,
        schema,
        fragments,
        active_fragments: Vec::new(),
        fields: Vec::new(),
    };
    flattener.collect(selection_set)?;
    Ok(flattener.fields)
}

struct Flattener<'a, 't> {
    type_name: &'t str,
    schema: &'a dyn TypeGraph,
    fragments: &'a dyn FragmentRegistry,
    /// Fragments currently being expanded, innermost last.
    active_fragments: Vec<&'a str>,
    fields: Vec<FieldSelection<'a>>,
}

impl<'a> Flattener<'a, '_> {
    fn collect(&mut self, selection_set: &'a SelectionSet) -> Result<()> {
        for item in &selection_set.items {
            match &item.node {
                Selection::Field(field) => {
                    let field = &field.node;
                    let name = field.name.node.as_str();
                    if is_meta_field(name) {
                        trace!(field = name, "Skipping meta field");
                        continue;
                    }

                    let definition = self
                        .schema
                        .field_definition(self.type_name, name)
                        .ok_or_else(|| FieldMaskError::unknown_field(self.type_name, name))?;
                    let nested = &field.selection_set.node;

                    self.fields.push(FieldSelection {
                        name,
                        definition,
                        selection_set: (!nested.items.is_empty()).then_some(nested),
                    });
                }
                Selection::FragmentSpread(spread) => {
                    let name = spread.node.fragment_name.node.as_str();
                    let fragment = self
                        .fragments
                        .fragment(name)
                        .ok_or_else(|| FieldMaskError::unknown_fragment(name))?;
                    let condition = fragment.type_condition.node.on.node.as_str();

                    if !satisfies_type_condition(self.schema, condition, self.type_name) {
                        trace!(
                            fragment = name,
                            condition,
                            type_name = self.type_name,
                            "Fragment does not apply"
                        );
                        continue;
                    }
                    if self.active_fragments.contains(&name) {
                        return Err(FieldMaskError::FragmentCycle {
                            name: name.to_string(),
                        });
                    }

                    self.active_fragments.push(name);
                    self.collect(&fragment.selection_set.node)?;
                    self.active_fragments.pop();
                }
                Selection::InlineFragment(inline) => {
                    let inline = &inline.node;
                    if let Some(condition) = &inline.type_condition {
                        let condition = condition.node.on.node.as_str();
                        if !satisfies_type_condition(self.schema, condition, self.type_name) {
                            trace!(
                                condition,
                                type_name = self.type_name,
                                "Inline fragment does not apply"
                            );
                            continue;
                        }
                    }
                    self.collect(&inline.selection_set.node)?;
                }
            }
        }
        Ok(())
    }
}
