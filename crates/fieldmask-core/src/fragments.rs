//! Fragment lookup for the executing document.

use std::collections::HashMap;

use async_graphql_parser::Positioned;
use async_graphql_parser::types::{ExecutableDocument, FragmentDefinition};
use async_graphql_value::Name;

/// Resolves fragment definitions by name.
pub trait FragmentRegistry: Send + Sync {
    /// Returns the fragment called `name`, if the document defines it.
    fn fragment(&self, name: &str) -> Option<&FragmentDefinition>;
}

impl FragmentRegistry for HashMap<Name, Positioned<FragmentDefinition>> {
    fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.get(name).map(|fragment| &fragment.node)
    }
}

impl FragmentRegistry for ExecutableDocument {
    fn fragment(&self, name: &str) -> Option<&FragmentDefinition> {
        self.fragments.fragment(name)
    }
}
