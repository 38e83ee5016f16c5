//! Type graph built from schema SDL.

use async_graphql_parser::types::{FieldDefinition, ServiceDocument, TypeKind, TypeSystemDefinition};
use indexmap::IndexMap;
use tracing::debug;

use super::{TypeCategory, TypeGraph};
use crate::error::{FieldMaskError, Result};

const BUILTIN_SCALARS: [&str; 5] = ["Int", "Float", "String", "Boolean", "ID"];

/// One named type of the indexed schema.
#[derive(Debug, Clone)]
struct IndexedType {
    category: TypeCategory,
    /// Field definitions in declaration order, extensions appended.
    fields: IndexMap<String, FieldDefinition>,
    /// Interfaces implemented by an object or interface type.
    implements: Vec<String>,
    /// Members of a union type.
    members: Vec<String>,
}

impl IndexedType {
    fn new(category: TypeCategory) -> Self {
        Self {
            category,
            fields: IndexMap::new(),
            implements: Vec::new(),
            members: Vec::new(),
        }
    }
}

/// [`TypeGraph`] over a schema parsed from SDL.
///
/// Types keep their declaration order, which fixes the order of
/// [`TypeGraph::possible_types`]: union members as listed, interface
/// implementors in the order their object types are declared.
///
/// # Example
///
/// ```
/// use fieldmask_core::{SchemaIndex, TypeGraph};
///
/// let schema = SchemaIndex::from_sdl("type Query { hello: String }").unwrap();
/// assert!(schema.field_definition("Query", "hello").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct SchemaIndex {
    types: IndexMap<String, IndexedType>,
}

impl SchemaIndex {
    /// Parses schema SDL and indexes its types.
    ///
    /// # Errors
    ///
    /// Returns [`FieldMaskError::InvalidSchema`] if the SDL does not parse.
    pub fn from_sdl(sdl: &str) -> Result<Self> {
        let document = async_graphql_parser::parse_schema(sdl)
            .map_err(|e| FieldMaskError::InvalidSchema(e.to_string()))?;
        Ok(Self::from(document))
    }

    /// Iterates over the names of all object types, in declaration order.
    pub fn object_types(&self) -> impl Iterator<Item = &str> {
        self.types
            .iter()
            .filter(|(_, ty)| ty.category == TypeCategory::Object)
            .map(|(name, _)| name.as_str())
    }

    fn entry(&mut self, name: String, category: TypeCategory) -> &mut IndexedType {
        self.types
            .entry(name)
            .or_insert_with(|| IndexedType::new(category))
    }
}

impl From<ServiceDocument> for SchemaIndex {
    fn from(document: ServiceDocument) -> Self {
        let mut index = SchemaIndex {
            types: IndexMap::new(),
        };
        for scalar in BUILTIN_SCALARS {
            index.entry(scalar.to_string(), TypeCategory::Leaf);
        }

        for definition in document.definitions {
            let TypeSystemDefinition::Type(ty) = definition else {
                continue;
            };
            let ty = ty.node;
            let name = ty.name.node.to_string();

            match ty.kind {
                TypeKind::Object(object) => {
                    let entry = index.entry(name, TypeCategory::Object);
                    entry
                        .implements
                        .extend(object.implements.into_iter().map(|i| i.node.to_string()));
                    for field in object.fields {
                        entry.fields.insert(field.node.name.node.to_string(), field.node);
                    }
                }
                TypeKind::Interface(interface) => {
                    let entry = index.entry(name, TypeCategory::Interface);
                    entry
                        .implements
                        .extend(interface.implements.into_iter().map(|i| i.node.to_string()));
                    for field in interface.fields {
                        entry.fields.insert(field.node.name.node.to_string(), field.node);
                    }
                }
                TypeKind::Union(union_type) => {
                    index
                        .entry(name, TypeCategory::Union)
                        .members
                        .extend(union_type.members.into_iter().map(|m| m.node.to_string()));
                }
                TypeKind::Scalar | TypeKind::Enum(_) => {
                    index.entry(name, TypeCategory::Leaf);
                }
                TypeKind::InputObject(_) => {
                    index.entry(name, TypeCategory::InputObject);
                }
            }
        }

        debug!(types = index.types.len(), "Indexed schema types");
        index
    }
}

impl TypeGraph for SchemaIndex {
    fn type_category(&self, name: &str) -> Option<TypeCategory> {
        self.types.get(name).map(|ty| ty.category)
    }

    fn possible_types(&self, name: &str) -> Vec<&str> {
        let Some(ty) = self.types.get(name) else {
            return Vec::new();
        };
        match ty.category {
            TypeCategory::Union => ty
                .members
                .iter()
                .map(String::as_str)
                .filter(|member| self.type_category(member) == Some(TypeCategory::Object))
                .collect(),
            TypeCategory::Interface => self
                .types
                .iter()
                .filter(|(_, candidate)| {
                    candidate.category == TypeCategory::Object
                        && candidate.implements.iter().any(|i| i == name)
                })
                .map(|(candidate_name, _)| candidate_name.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }

    fn field_definition(&self, type_name: &str, field_name: &str) -> Option<&FieldDefinition> {
        self.types
            .get(type_name)
            .and_then(|ty| ty.fields.get(field_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SDL: &str = r#"
        scalar DateTime
        enum Role { ADMIN MEMBER }
        input UserFilter { name: String }

        interface Node { id: ID! }

        type User implements Node {
            id: ID!
            name: String
            role: Role
        }

        type Bot implements Node { id: ID! }

        type Team { id: ID! }

        union Actor = Bot | User

        extend type User { createdAt: DateTime }
    "#;

    #[test]
    fn test_categories() {
        let schema = SchemaIndex::from_sdl(SDL).unwrap();

        assert_eq!(schema.type_category("User"), Some(TypeCategory::Object));
        assert_eq!(schema.type_category("Node"), Some(TypeCategory::Interface));
        assert_eq!(schema.type_category("Actor"), Some(TypeCategory::Union));
        assert_eq!(schema.type_category("Role"), Some(TypeCategory::Leaf));
        assert_eq!(schema.type_category("DateTime"), Some(TypeCategory::Leaf));
        assert_eq!(schema.type_category("String"), Some(TypeCategory::Leaf));
        assert_eq!(
            schema.type_category("UserFilter"),
            Some(TypeCategory::InputObject)
        );
        assert_eq!(schema.type_category("Missing"), None);
    }

    #[test]
    fn test_possible_types_keep_schema_order() {
        let schema = SchemaIndex::from_sdl(SDL).unwrap();

        assert_eq!(schema.possible_types("Actor"), vec!["Bot", "User"]);
        assert_eq!(schema.possible_types("Node"), vec!["User", "Bot"]);
        assert!(schema.possible_types("Team").is_empty());
        assert!(schema.possible_types("Missing").is_empty());
    }

    #[test]
    fn test_extension_fields_are_appended() {
        let schema = SchemaIndex::from_sdl(SDL).unwrap();

        assert!(schema.field_definition("User", "name").is_some());
        assert!(schema.field_definition("User", "createdAt").is_some());
        assert!(schema.field_definition("Bot", "name").is_none());
        assert!(schema.field_definition("Node", "id").is_some());
    }

    #[test]
    fn test_object_types() {
        let schema = SchemaIndex::from_sdl(SDL).unwrap();
        let objects: Vec<_> = schema.object_types().collect();

        assert_eq!(objects, vec!["User", "Bot", "Team"]);
    }

    #[test]
    fn test_invalid_sdl() {
        let err = SchemaIndex::from_sdl("type {").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_SCHEMA");
    }
}
