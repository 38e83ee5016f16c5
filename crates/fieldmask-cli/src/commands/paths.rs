use anyhow::{Context, Result};
use fieldmask_core::{FieldMaskConfig, FieldMaskError, ResolveContext, merged_field_selection_set};
use tracing::debug;

use super::{load_schema, read_file};
use crate::cli::PathsArgs;

pub fn compute(args: &PathsArgs) -> Result<Vec<String>> {
    let mut config = match &args.config {
        Some(path) => FieldMaskConfig::from_toml_str(&read_file(path)?)
            .with_context(|| format!("Cannot load config {}", path.display()))?,
        None => FieldMaskConfig::default(),
    };
    if let Some(abstract_types) = args.abstract_types {
        config.abstract_types = abstract_types.into();
    }
    config.dedup |= args.dedup;
    debug!(?config, "Using field mask configuration");

    let schema = load_schema(&args.schema)?;
    let document = fieldmask_core::parse_query(&read_file(&args.query)?)
        .map_err(|e| FieldMaskError::InvalidQuery(e.to_string()))?;

    let selection_set =
        merged_field_selection_set(&document, args.operation.as_deref(), &args.field)?;
    let context = ResolveContext::new(&schema, &document, &selection_set);

    Ok(config.compute(&args.type_name, &context)?)
}
