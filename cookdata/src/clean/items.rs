use crate::prelude::*;
use crate::render::{self, render_long, render_short, Render};

use super::{invalid_data, load_object, sorted_entries, store};

/// Fields rendered together on one line of an item block.
pub struct Group {
    pub fields: &'static [&'static str],
    pub render: Render,
}

/// Line order of an item block. Anything not listed here follows, one field per line.
pub const GROUPS: [Group; 6] = [
    Group { fields: &["name", "effect"], render: render_long },
    Group { fields: &["hp", "time", "potency"], render: render_short },
    Group { fields: &["hp_boost", "time_boost", "boost_success_rate"], render: render_short },
    Group { fields: &["sell_price", "buy_price", "cook_low_price"], render: render_short },
    Group { fields: &["roast_item", "key_item"], render: render_short },
    Group { fields: &["tags"], render: render_long },
];

/// Renders the listed fields present in `record` as one indented line with a
/// trailing comma, recording them in `consumed`.
pub fn group_line<'a>(
    record: &'a Object,
    fields: &[&'a str],
    render: Render,
    consumed: &mut Set<&'a str>,
) -> Result<Option<String>> {
    let mut pairs = Vec::with_capacity(fields.len());
    for &field in fields {
        if let Some(value) = record.get(field) {
            pairs.push(render(field, value)?);
            consumed.insert(field);
        }
    }
    if pairs.is_empty() {
        return Ok(None);
    }
    Ok(Some(format!("    {},", pairs.join(", "))))
}

fn format_record(actor: &str, record: &Object) -> Result<String> {
    let mut consumed = Set::default();
    let mut lines = vec![];
    for group in GROUPS.iter() {
        if let Some(line) = group_line(record, group.fields, group.render, &mut consumed)? {
            lines.push(line);
        }
    }

    for (key, value) in record.iter() {
        if consumed.contains(key.as_str()) {
            continue;
        }
        debug!("{}: unrecognized field {}", actor, key);
        lines.push(format!("    {}: {},", render::to_string(key)?, render::to_string(value)?));
    }

    if let Some(last) = lines.last_mut() {
        if last.ends_with(',') {
            last.pop();
        }
    }
    Ok(lines.join("\n"))
}

/// Renders the whole item database, actors in ascending order.
pub fn format_items(items: &Object) -> Result<String> {
    let mut chunks = Vec::with_capacity(items.len());
    for (actor, record) in sorted_entries(items) {
        let record = match record {
            Value::Object(record) => record,
            _ => return Err(invalid_data(format!("item {} is not an object", actor))),
        };
        chunks.push(format!(
            "  {}: {{\n{}\n  }}",
            render::to_string(actor)?,
            format_record(actor, record)?
        ));
    }
    Ok(format!("{{\n{}\n}}\n", chunks.join(",\n")))
}

pub fn clean_items(path: &Path) -> Result<()> {
    let items = load_object(path)?;
    let text = format_items(&items).map_err(|e| format!("{}: {}", path.display(), e))?;
    store(path, &text)?;
    info!("Cleaned {} items in {}", items.len(), path.display());
    Ok(())
}
