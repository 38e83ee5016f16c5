pub mod paths;
pub mod types;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use fieldmask_core::SchemaIndex;

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))
}

fn load_schema(path: &Path) -> Result<SchemaIndex> {
    let sdl = read_file(path)?;
    SchemaIndex::from_sdl(&sdl).with_context(|| format!("Cannot load schema {}", path.display()))
}
