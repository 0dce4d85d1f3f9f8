use crate::{ErrgenError, Result};
use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor},
};
use std::{collections::HashSet, fmt, fs, path::Path};
use tracing::debug;

/// A single error definition as written in the YAML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorDef {
    pub code: i64,
    pub status: i64,
    pub message: String,
}

/// Error definitions keyed by their symbolic name, kept in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTable(Vec<(String, ErrorDef)>);

impl ErrorTable {
    pub fn get(&self, name: &str) -> Option<&ErrorDef> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, def)| def)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ErrorDef)> {
        self.0.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A null document (`~`, `null`) arrives as a unit value, not a map.
        deserializer.deserialize_any(ErrorTableVisitor)
    }
}

struct ErrorTableVisitor;

impl<'de> Visitor<'de> for ErrorTableVisitor {
    type Value = ErrorTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a mapping of error names to {code, status, message}")
    }

    fn visit_unit<E>(self) -> std::result::Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(ErrorTable::default())
    }

    fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let capacity = access.size_hint().unwrap_or(0);
        let mut entries: Vec<(String, ErrorDef)> = Vec::with_capacity(capacity);
        let mut seen: HashSet<String> = HashSet::with_capacity(capacity);
        while let Some((name, def)) = access.next_entry::<String, ErrorDef>()? {
            if !seen.insert(name.clone()) {
                return Err(de::Error::custom(format!("duplicate error name `{}`", name)));
            }
            entries.push((name, def));
        }
        Ok(ErrorTable(entries))
    }
}

impl FromIterator<(String, ErrorDef)> for ErrorTable {
    /// Later entries replace earlier ones with the same name, keeping the first position.
    fn from_iter<I: IntoIterator<Item = (String, ErrorDef)>>(iter: I) -> Self {
        let mut table = ErrorTable::default();
        for (name, def) in iter {
            match table.0.iter_mut().find(|(existing, _)| *existing == name) {
                Some(slot) => slot.1 = def,
                None => table.0.push((name, def)),
            }
        }
        table
    }
}

/// Everything a renderer needs: the target package and the error table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub package_name: String,
    pub errors: ErrorTable,
}

impl Model {
    pub fn new(package_name: impl Into<String>, errors: ErrorTable) -> Self {
        Self {
            package_name: package_name.into(),
            errors,
        }
    }

    /// Reads and decodes the YAML file at `path`.
    pub fn load(path: impl AsRef<Path>, package_name: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ErrgenError::io(format!("read config file {}", path.display()), e))?;
        let model = Self::from_yaml(&content, package_name).map_err(|source| {
            ErrgenError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(
            path = %path.display(),
            errors = model.errors.len(),
            "Loaded error definitions"
        );
        Ok(model)
    }

    pub fn from_yaml(content: &str, package_name: &str) -> Result<Self, serde_yaml::Error> {
        let errors = if is_blank_document(content) {
            ErrorTable::default()
        } else {
            serde_yaml::from_str(content)?
        };
        Ok(Self::new(package_name, errors))
    }
}

fn is_blank_document(content: &str) -> bool {
    content
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_document_order() {
        let yaml = r#"
NotFound:
  code: 404
  status: 404
  message: not found
BadRequest:
  code: 400
  status: 400
  message: bad request
Internal:
  code: 1000
  status: 500
  message: internal error
"#;
        let model = Model::from_yaml(yaml, "errors").unwrap();
        let names: Vec<_> = model.errors.names().collect();
        assert_eq!(names, vec!["NotFound", "BadRequest", "Internal"]);
        assert_eq!(
            model.errors.get("Internal"),
            Some(&ErrorDef {
                code: 1000,
                status: 500,
                message: "internal error".to_string(),
            })
        );
        assert_eq!(model.package_name, "errors");
    }

    #[test]
    fn empty_document_is_empty_table() {
        for yaml in ["", "   \n", "# nothing yet\n", "---\n"] {
            let model = Model::from_yaml(yaml, "errors").unwrap();
            assert!(model.errors.is_empty(), "{:?}", yaml);
        }
    }

    #[test]
    fn null_document_is_empty_table() {
        for yaml in ["~\n", "null\n", "--- ~\n"] {
            let model = Model::from_yaml(yaml, "errors").unwrap();
            assert!(model.errors.is_empty(), "{:?}", yaml);
        }
    }

    #[test]
    fn rejects_scalar_document() {
        assert!(Model::from_yaml("just a string\n", "errors").is_err());
        assert!(Model::from_yaml("42\n", "errors").is_err());
    }

    #[test]
    fn rejects_duplicate_names() {
        let yaml = "A: {code: 1, status: 400, message: a}\nA: {code: 2, status: 400, message: b}\n";
        let err = Model::from_yaml(yaml, "errors").unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }

    #[test]
    fn many_entries_keep_order() {
        let yaml: String = (0..2000)
            .map(|i| format!("E{i}: {{code: {i}, status: 400, message: m}}\n"))
            .collect();
        let model = Model::from_yaml(&yaml, "errors").unwrap();
        assert_eq!(model.errors.len(), 2000);
        assert_eq!(model.errors.names().nth(1999), Some("E1999"));
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(Model::from_yaml("- a\n- b\n", "errors").is_err());
        assert!(Model::from_yaml("A: {code: x, status: 1, message: m}\n", "errors").is_err());
        assert!(Model::from_yaml("A: {code: 1, message: m}\n", "errors").is_err());
    }

    #[test]
    fn negative_values_pass_through() {
        let model = Model::from_yaml("Weird: {code: -1, status: -2, message: m}\n", "p").unwrap();
        let def = model.errors.get("Weird").unwrap();
        assert_eq!((def.code, def.status), (-1, -2));
    }

    #[test]
    fn collect_replaces_duplicates_in_place() {
        let def = |code| ErrorDef {
            code,
            status: 400,
            message: "m".to_string(),
        };
        let table: ErrorTable = vec![
            ("A".to_string(), def(1)),
            ("B".to_string(), def(2)),
            ("A".to_string(), def(3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(table.get("A").map(|d| d.code), Some(3));
    }
}
