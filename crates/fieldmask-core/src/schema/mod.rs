//! Read-only view of a GraphQL schema's type graph.
//!
//! The path builder never needs a full schema, only a handful of lookups:
//! what kind of type a name refers to, which object types an abstract type
//! may resolve to, and the definition of a field on a composite type. Those
//! lookups are the [`TypeGraph`] trait. [`SchemaIndex`] implements it for a
//! schema parsed from SDL; hosts with their own schema representation can
//! implement the trait directly.

mod index;

pub use index::SchemaIndex;

use async_graphql_parser::types::{BaseType, FieldDefinition, Type};
use async_graphql_value::Name;
use serde::{Deserialize, Serialize};

/// Classification of a named schema type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeCategory {
    Object,
    Interface,
    Union,
    /// Scalars and enums.
    Leaf,
    InputObject,
}

impl TypeCategory {
    /// Returns true for types that can carry a selection set.
    #[must_use]
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::Interface | Self::Union)
    }

    /// Returns true for interfaces and unions.
    #[must_use]
    pub fn is_abstract(self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }
}

/// Lookups into a schema's type graph.
///
/// Implementations must be pure: repeated calls with the same arguments
/// return the same answers for the lifetime of a computation. They are
/// shared across sibling resolvers, hence `Send + Sync`.
pub trait TypeGraph: Send + Sync {
    /// Returns the category of the named type, or `None` if it does not exist.
    fn type_category(&self, name: &str) -> Option<TypeCategory>;

    /// Returns the possible object types of an abstract type, in schema order.
    ///
    /// Empty for object and leaf types.
    fn possible_types(&self, name: &str) -> Vec<&str>;

    /// Returns the definition of `field_name` on the composite type `type_name`.
    fn field_definition(&self, type_name: &str, field_name: &str) -> Option<&FieldDefinition>;

    /// Returns whether `object_type` is one of the possible types of `abstract_type`.
    fn is_possible_type(&self, abstract_type: &str, object_type: &str) -> bool {
        self.possible_types(abstract_type)
            .iter()
            .any(|candidate| *candidate == object_type)
    }
}

/// Returns whether a value of the concrete type `object_type` satisfies a
/// fragment type condition naming `condition`.
///
/// That holds when the names are equal, when `condition` is an interface
/// implemented by `object_type`, or when `condition` is a union containing it.
pub fn satisfies_type_condition(schema: &dyn TypeGraph, condition: &str, object_type: &str) -> bool {
    if condition == object_type {
        return true;
    }
    match schema.type_category(condition) {
        Some(category) if category.is_abstract() => schema.is_possible_type(condition, object_type),
        _ => false,
    }
}

/// Strips list and non-null wrapping from a field type.
pub fn named_type(ty: &Type) -> &Name {
    match &ty.base {
        BaseType::Named(name) => name,
        BaseType::List(inner) => named_type(inner),
    }
}

/// Returns whether a field name is reserved for introspection.
#[must_use]
pub fn is_meta_field(name: &str) -> bool {
    name.starts_with("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SDL: &str = r#"
        interface Node { id: ID! }
        type User implements Node { id: ID! tags: [[String!]]! }
        type Group implements Node { id: ID! }
        union Member = User | Group
    "#;

    #[test]
    fn test_type_condition_relation() {
        let schema = SchemaIndex::from_sdl(SDL).unwrap();

        assert!(satisfies_type_condition(&schema, "User", "User"));
        assert!(satisfies_type_condition(&schema, "Node", "User"));
        assert!(satisfies_type_condition(&schema, "Member", "Group"));
        assert!(!satisfies_type_condition(&schema, "Group", "User"));
        assert!(!satisfies_type_condition(&schema, "String", "User"));
        assert!(!satisfies_type_condition(&schema, "Missing", "User"));
    }

    #[test]
    fn test_named_type_unwraps_lists() {
        let schema = SchemaIndex::from_sdl(SDL).unwrap();
        let field = schema.field_definition("User", "tags").unwrap();

        assert_eq!(named_type(&field.ty.node).as_str(), "String");
    }

    #[test]
    fn test_categories() {
        assert!(TypeCategory::Union.is_composite());
        assert!(TypeCategory::Interface.is_abstract());
        assert!(!TypeCategory::Object.is_abstract());
        assert!(!TypeCategory::Leaf.is_composite());
        assert!(!TypeCategory::InputObject.is_composite());
    }

    #[test]
    fn test_meta_fields() {
        assert!(is_meta_field("__typename"));
        assert!(is_meta_field("__schema"));
        assert!(!is_meta_field("name"));
    }
}
