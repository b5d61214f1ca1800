use crate::prelude::*;

mod formatter;

pub use formatter::DataFormatter;

/// Column of the `"key":` part of a rendered pair.
pub const KEY_WIDTH: usize = 15;
/// Value column for `name`, `effect` and `tags`.
pub const LONG_WIDTH: usize = 27;
/// Value column for numbers and flags.
pub const SHORT_WIDTH: usize = 5;
/// Key column of a name table line.
pub const NAME_KEY_WIDTH: usize = 20;

/// Signature shared by the pair renderers.
pub type Render = fn(&str, &Value) -> Result<String>;

/// Encodes `v` as one line of JSON using [`DataFormatter`].
pub fn to_string<T: ?Sized + Serialize>(v: &T) -> Result<String> {
    let mut buf = Vec::with_capacity(32);
    let mut ser = json::Serializer::with_formatter(&mut buf, DataFormatter);
    v.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

pub fn render_pair(key: &str, value: &Value, width: usize) -> Result<String> {
    let k = format!("{}:", to_string(key)?);
    let v = to_string(value)?;
    Ok(format!("{:<kw$}{:<vw$}", k, v, kw = KEY_WIDTH, vw = width))
}

pub fn render_long(key: &str, value: &Value) -> Result<String> {
    render_pair(key, value, LONG_WIDTH)
}

pub fn render_short(key: &str, value: &Value) -> Result<String> {
    render_pair(key, value, SHORT_WIDTH)
}
