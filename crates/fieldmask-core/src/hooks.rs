//! Ready-made hooks for [`FieldMaskOptions`](crate::FieldMaskOptions).
//!
//! - [`DirectiveFieldName`] renames or hides fields through a schema directive
//! - [`PerPossibleType`] expands interface and union fields once per possible type
//! - [`dedup_paths`] drops repeated paths, for callers that want a set

use async_graphql_parser::types::FieldDefinition;
use async_graphql_value::ConstValue;
use indexmap::IndexSet;
use tracing::trace;

use crate::error::Result;
use crate::paths::{AbstractTypeContext, AbstractTypeResolver, FieldNameResolver, join_path};
use crate::schema::TypeGraph;

/// Default name of the directive read by [`DirectiveFieldName`].
pub const DEFAULT_NAME_DIRECTIVE: &str = "fieldMask";

/// Field name resolver driven by a directive on schema field definitions.
///
/// ```graphql
/// type User {
///   displayName: String @fieldMask(name: "display_name")
///   passwordHash: String @fieldMask(skip: true)
/// }
/// ```
///
/// Fields without the directive keep their declared name.
#[derive(Debug, Clone)]
pub struct DirectiveFieldName {
    directive: String,
}

impl DirectiveFieldName {
    /// Reads the directive called `directive`.
    #[must_use]
    pub fn new(directive: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
        }
    }
}

impl Default for DirectiveFieldName {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_DIRECTIVE)
    }
}

impl FieldNameResolver for DirectiveFieldName {
    fn resolve_field_name(
        &self,
        field: &FieldDefinition,
        parent_type: &str,
        _schema: &dyn TypeGraph,
    ) -> Option<String> {
        let declared = field.name.node.as_str();
        let Some(directive) = field
            .directives
            .iter()
            .find(|d| d.node.name.node.as_str() == self.directive)
        else {
            return Some(declared.to_string());
        };

        if let Some(skip) = directive.node.get_argument("skip")
            && let ConstValue::Boolean(true) = skip.node
        {
            trace!(parent_type, field = declared, "Field hidden by directive");
            return None;
        }

        match directive.node.get_argument("name").map(|name| &name.node) {
            Some(ConstValue::String(name)) => Some(name.clone()),
            _ => Some(declared.to_string()),
        }
    }
}

type Discriminator = fn(&str) -> Option<String>;

fn type_name_discriminator(type_name: &str) -> Option<String> {
    Some(type_name.to_string())
}

/// Abstract type resolver that asks for every possible type in schema order.
///
/// Each concrete type's paths are prefixed with a discriminator segment,
/// the type name unless another discriminator is given. A discriminator
/// returning `None` leaves that type out.
#[derive(Debug, Clone)]
pub struct PerPossibleType<F = Discriminator> {
    discriminator: F,
}

impl PerPossibleType {
    /// Prefixes each concrete type's paths with the type name.
    #[must_use]
    pub fn type_name() -> Self {
        Self {
            discriminator: type_name_discriminator,
        }
    }
}

impl Default for PerPossibleType {
    fn default() -> Self {
        Self::type_name()
    }
}

impl<F> PerPossibleType<F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Prefixes each concrete type's paths with `discriminator(type_name)`.
    pub fn with_discriminator(discriminator: F) -> Self {
        Self { discriminator }
    }
}

impl<F> AbstractTypeResolver for PerPossibleType<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve_abstract_type_paths(
        &self,
        context: &AbstractTypeContext<'_>,
        compute_for_concrete_type: &dyn Fn(&str) -> Result<Vec<String>>,
    ) -> Result<Vec<String>> {
        let mut paths = Vec::new();
        for &object_type in &context.possible_types {
            let Some(prefix) = (self.discriminator)(object_type) else {
                trace!(
                    abstract_type = context.type_name,
                    object_type, "Possible type left out"
                );
                continue;
            };
            let sub_paths = compute_for_concrete_type(object_type)?;
            paths.extend(sub_paths.iter().map(|sub| join_path(&prefix, sub)));
        }
        Ok(paths)
    }
}

/// Removes repeated paths, keeping the first occurrence of each.
#[must_use]
pub fn dedup_paths(paths: Vec<String>) -> Vec<String> {
    paths.into_iter().collect::<IndexSet<_>>().into_iter().collect()
}
