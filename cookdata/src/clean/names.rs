use crate::prelude::*;
use crate::render::{self, NAME_KEY_WIDTH};

use super::{load_object, sorted_entries, store};

/// Renders the name table, one `"key": value` line per entry.
pub fn format_names(names: &Object) -> Result<String> {
    let mut lines = Vec::with_capacity(names.len());
    for (key, value) in sorted_entries(names) {
        lines.push(format!(
            "  {:<w$}: {}",
            render::to_string(key)?,
            render::to_string(value)?,
            w = NAME_KEY_WIDTH
        ));
    }
    Ok(format!("{{\n{}\n}}\n", lines.join(",\n")))
}

pub fn clean_names(path: &Path) -> Result<()> {
    let names = load_object(path)?;
    let text = format_names(&names)?;
    store(path, &text)?;
    info!("Cleaned {} names in {}", names.len(), path.display());
    Ok(())
}
