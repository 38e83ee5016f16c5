use anyhow::{Result, bail};
use fieldmask_core::{TypeCategory, TypeGraph};

use super::load_schema;
use crate::cli::TypesArgs;

pub fn list(args: &TypesArgs) -> Result<Vec<String>> {
    let schema = load_schema(&args.schema)?;

    let Some(type_name) = &args.type_name else {
        return Ok(schema.object_types().map(String::from).collect());
    };

    match schema.type_category(type_name) {
        Some(TypeCategory::Object) => Ok(vec![type_name.clone()]),
        Some(category) if category.is_abstract() => Ok(schema
            .possible_types(type_name)
            .into_iter()
            .map(String::from)
            .collect()),
        Some(_) => bail!("{type_name} is not a composite type"),
        None => bail!("Unknown type: {type_name}"),
    }
}
