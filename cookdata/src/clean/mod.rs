use crate::prelude::*;

pub mod items;
pub mod names;

pub use items::{clean_items, format_items};
pub use names::{clean_names, format_names};

pub const DEFAULT_DIR: &str = "src";
pub const ITEMS_FILE: &str = "cook_items.json";
pub const NAMES_FILE: &str = "names.json";

/// Locations of the two data files rewritten by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub items: PathBuf,
    pub names: PathBuf,
}

impl Config {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Config {
            items: dir.join(ITEMS_FILE),
            names: dir.join(NAMES_FILE),
        }
    }

    /// Builds a config from the arguments following the program name: none for
    /// the default data dir, or exactly one data dir.
    pub fn from_args<I>(args: I) -> Result<Self>
        where
            I: IntoIterator,
            I::Item: Into<PathBuf>,
    {
        let mut args = args.into_iter().map(Into::<PathBuf>::into);
        let cfg = match args.next() {
            Some(dir) => Config::in_dir(dir),
            None => Config::default(),
        };
        if let Some(extra) = args.next() {
            return Err(format!("unexpected argument {}; usage: cleandata [DATA_DIR]", extra.display()).into());
        }
        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::in_dir(DEFAULT_DIR)
    }
}

/// Rewrites the item database, then the name table.
pub fn run(cfg: &Config) -> Result<()> {
    clean_items(&cfg.items)?;
    clean_names(&cfg.names)?;
    Ok(())
}

pub(crate) fn load_object(path: &Path) -> Result<Object> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    let value: Value = json::from_str(&text)
        .map_err(|e| format!("{}: {}", path.display(), e))?;
    match value {
        Value::Object(obj) => Ok(obj),
        _ => Err(invalid_data(format!("{}: top-level value is not an object", path.display()))),
    }
}

pub(crate) fn store(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|e| format!("{}: {}", path.display(), e))?;
    Ok(())
}

pub(crate) fn invalid_data(msg: String) -> Box<dyn Error> {
    io::Error::new(io::ErrorKind::InvalidData, msg).into()
}

/// Entries of `obj` in ascending key order.
pub(crate) fn sorted_entries(obj: &Object) -> Vec<(&String, &Value)> {
    let mut entries: Vec<_> = obj.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ITEMS: &str = r#"{
        "Item_Fruit_B": {"name": "Wildberry", "hp": 4, "tags": ["CookFruit"], "euen_name": "Wildberry", "sell_price": 3},
        "Item_Fruit_A": {"effect": "None", "name": "Apple", "roast_item": "Item_Roast_03", "hp": 4}
    }"#;

    const NAMES: &str = r#"{"Item_Fruit_B": "Wildberry", "Item_Fruit_A": "Apple"}"#;

    fn data_dir(items: &str, names: &str) -> (tempfile::TempDir, Config) {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(ITEMS_FILE), items).unwrap();
        fs::write(tmp.path().join(NAMES_FILE), names).unwrap();
        let cfg = Config::in_dir(tmp.path());
        (tmp, cfg)
    }

    #[test]
    fn default_config_points_at_src() {
        let cfg = Config::default();
        assert_eq!(cfg.items, Path::new("src").join("cook_items.json"));
        assert_eq!(cfg.names, Path::new("src").join("names.json"));
    }

    #[test]
    fn config_from_args() {
        let none: Vec<&str> = vec![];
        assert_eq!(Config::from_args(none).unwrap(), Config::default());
        assert_eq!(Config::from_args(vec!["data"]).unwrap(), Config::in_dir("data"));

        let err = Config::from_args(vec!["data", "other"]).unwrap_err();
        assert!(err.to_string().contains("unexpected argument other"));
    }

    #[test]
    fn run_rewrites_both_files() {
        let (_tmp, cfg) = data_dir(ITEMS, NAMES);
        run(&cfg).unwrap();

        let items = fs::read_to_string(&cfg.items).unwrap();
        let a = items.find("\"Item_Fruit_A\"").unwrap();
        let b = items.find("\"Item_Fruit_B\"").unwrap();
        assert!(a < b);
        assert!(items.ends_with("\n}\n"));

        let names = fs::read_to_string(&cfg.names).unwrap();
        assert_eq!(
            names,
            format!(
                "{{\n  {:<20}: \"Apple\",\n  {:<20}: \"Wildberry\"\n}}\n",
                "\"Item_Fruit_A\"", "\"Item_Fruit_B\""
            )
        );
    }

    #[test]
    fn run_is_idempotent_on_disk() {
        let (_tmp, cfg) = data_dir(ITEMS, NAMES);
        run(&cfg).unwrap();
        let items = fs::read_to_string(&cfg.items).unwrap();
        let names = fs::read_to_string(&cfg.names).unwrap();

        run(&cfg).unwrap();
        assert_eq!(fs::read_to_string(&cfg.items).unwrap(), items);
        assert_eq!(fs::read_to_string(&cfg.names).unwrap(), names);
    }

    #[test]
    fn output_parses_back_to_the_input() {
        let (_tmp, cfg) = data_dir(ITEMS, NAMES);
        run(&cfg).unwrap();
        let before: Value = json::from_str(ITEMS).unwrap();
        let after: Value = json::from_str(&fs::read_to_string(&cfg.items).unwrap()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = run(&Config::in_dir(tmp.path())).unwrap_err();
        assert!(err.to_string().contains("cook_items.json"));
    }

    #[test]
    fn malformed_json_leaves_file_untouched() {
        let (_tmp, cfg) = data_dir("{\"a\": ", NAMES);
        assert!(run(&cfg).is_err());
        assert_eq!(fs::read_to_string(&cfg.items).unwrap(), "{\"a\": ");
        // items fail first, so names are never reached
        assert_eq!(fs::read_to_string(&cfg.names).unwrap(), NAMES);
    }

    #[test]
    fn non_object_top_level_is_rejected() {
        let (_tmp, cfg) = data_dir(ITEMS, "[1, 2]");
        let err = run(&cfg).unwrap_err();
        assert!(err.to_string().contains("not an object"));
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let (_tmp, cfg) = data_dir(ITEMS, NAMES);
        fs::write(&cfg.items, b"{\"a\": \"\xff\"}").unwrap();
        assert!(clean_items(&cfg.items).is_err());
    }
}
