//! Field mask configuration.
//!
//! Hosts that do not need custom hooks can describe the behaviour they want
//! in TOML and let [`FieldMaskConfig::compute`] wire the built-in hooks.
//!
//! # Example Configuration
//!
//! ```toml
//! name_directive = "fieldMask"
//! honor_name_directive = true
//! abstract_types = "per_possible_type"
//! dedup = false
//! ```

use serde::{Deserialize, Serialize};

use crate::context::{ResolveContext, compute_field_mask_paths};
use crate::error::{FieldMaskError, Result};
use crate::hooks::{DEFAULT_NAME_DIRECTIVE, DirectiveFieldName, PerPossibleType, dedup_paths};
use crate::paths::FieldMaskOptions;

/// What interface and union typed fields contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbstractTypePolicy {
    /// Nothing; the concrete type is unknown until the value is fetched.
    #[default]
    Omit,
    /// Every possible type, prefixed with its type name.
    PerPossibleType,
}

/// Field mask configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMaskConfig {
    /// Schema directive that renames (`name:`) or hides (`skip: true`) fields.
    /// Default: "fieldMask"
    #[serde(default = "default_name_directive")]
    pub name_directive: String,

    /// Apply the name directive at all.
    /// Default: true
    #[serde(default = "default_honor_name_directive")]
    pub honor_name_directive: bool,

    /// Handling of interface and union typed fields.
    /// Default: omit
    #[serde(default)]
    pub abstract_types: AbstractTypePolicy,

    /// Drop repeated paths, keeping first occurrences.
    /// Default: false
    #[serde(default)]
    pub dedup: bool,
}

fn default_name_directive() -> String {
    DEFAULT_NAME_DIRECTIVE.to_string()
}

fn default_honor_name_directive() -> bool {
    true
}

impl Default for FieldMaskConfig {
    fn default() -> Self {
        Self {
            name_directive: default_name_directive(),
            honor_name_directive: default_honor_name_directive(),
            abstract_types: AbstractTypePolicy::default(),
            dedup: false,
        }
    }
}

impl FieldMaskConfig {
    /// Parses and validates a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FieldMaskError::Configuration`] if the TOML is malformed or
    /// the values are invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| FieldMaskError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.honor_name_directive && self.name_directive.trim().is_empty() {
            return Err(FieldMaskError::Configuration(
                "name_directive must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Field name resolver described by this configuration, if any.
    #[must_use]
    pub fn name_resolver(&self) -> Option<DirectiveFieldName> {
        self.honor_name_directive
            .then(|| DirectiveFieldName::new(&self.name_directive))
    }

    /// Abstract type resolver described by this configuration, if any.
    #[must_use]
    pub fn abstract_resolver(&self) -> Option<PerPossibleType> {
        match self.abstract_types {
            AbstractTypePolicy::Omit => None,
            AbstractTypePolicy::PerPossibleType => Some(PerPossibleType::type_name()),
        }
    }

    /// Computes field mask paths with the hooks this configuration describes.
    ///
    /// # Errors
    ///
    /// Same as [`compute_field_mask_paths`].
    pub fn compute(&self, type_name: &str, context: &ResolveContext<'_>) -> Result<Vec<String>> {
        let names = self.name_resolver();
        let abstract_types = self.abstract_resolver();

        let mut options = FieldMaskOptions::new();
        if let Some(names) = &names {
            options = options.with_field_names(names);
        }
        if let Some(abstract_types) = &abstract_types {
            options = options.with_abstract_types(abstract_types);
        }

        let paths = compute_field_mask_paths(type_name, context, &options)?;
        Ok(if self.dedup { dedup_paths(paths) } else { paths })
    }
}
