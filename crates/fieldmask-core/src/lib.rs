//! # fieldmask-core
//!
//! Field mask paths for resolved GraphQL fields.
//!
//! Given the selection set of the field being resolved, this crate computes
//! the dot-separated paths of the leaf fields the query asked for, so that a
//! data source can fetch only those columns or properties.
//!
//! ```graphql
//! query {
//!   user(id: 1) {
//!     id
//!     profile { bio avatar { url } }
//!   }
//! }
//! ```
//!
//! Resolving `user` against type `User` yields
//! `["id", "profile.bio", "profile.avatar.url"]`.
//!
//! ## Overview
//!
//! - Paths follow document order, fragment contents at the spread position
//! - Fragments and inline fragments apply only when their type condition
//!   matches the object type being resolved
//! - Aliases are ignored; segments are schema field names, or whatever a
//!   [`FieldNameResolver`] makes of them
//! - `__typename` never shows up
//! - Interface and union typed fields contribute nothing unless an
//!   [`AbstractTypeResolver`] decides otherwise
//!
//! The computation is synchronous and pure over borrowed inputs, so sibling
//! resolvers may call it concurrently.
//!
//! ## Modules
//!
//! - [`schema`] - Type graph lookups and the SDL-backed [`SchemaIndex`]
//! - [`fragments`] - Fragment lookup
//! - [`flatten`] - Selection flattening
//! - [`paths`] - Path construction and hook traits
//! - [`hooks`] - Built-in hooks
//! - [`context`] - Resolver entry point
//! - [`config`] - Configuration options
//! - [`error`] - Error types

pub mod config;
pub mod context;
pub mod error;
pub mod flatten;
pub mod fragments;
pub mod hooks;
pub mod paths;
pub mod schema;

// Re-export main types
pub use config::{AbstractTypePolicy, FieldMaskConfig};
pub use context::{ResolveContext, compute_field_mask_paths, merged_field_selection_set};
pub use error::{FieldMaskError, Result};
pub use flatten::{FieldSelection, flatten};
pub use fragments::FragmentRegistry;
pub use hooks::{DirectiveFieldName, PerPossibleType, dedup_paths};
pub use paths::{
    AbstractTypeContext, AbstractTypeResolver, FieldMaskOptions, FieldNameResolver, PATH_SEPARATOR,
    build_paths, join_path,
};
pub use schema::{SchemaIndex, TypeCategory, TypeGraph};

pub use async_graphql_parser::types::{ExecutableDocument, FieldDefinition, SelectionSet};
pub use async_graphql_parser::{parse_query, parse_schema};
