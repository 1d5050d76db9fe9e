use regex::Regex;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Which parse path produced the store. Exposed so callers (and tests) can
/// tell a JSON sidecar from a line-oriented one from no sidecar at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreFormat {
    Json,
    KeyValue,
    #[default]
    Missing,
}

/// Mapping from `NEXT_PUBLIC_` variable name to its documented justification.
///
/// Built fresh for every checked file and discarded afterwards. A missing or
/// unreadable sidecar is not an error: it yields an empty store, which causes
/// every reference to be reported as unjustified.
#[derive(Debug, Default)]
pub struct JustificationStore {
    entries: FxHashMap<String, String>,
    pub format: StoreFormat,
    pub path: Option<PathBuf>,
}

impl JustificationStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read and parse the sidecar at `path`. An unreadable file degrades to
    /// an empty store, identically to a missing one.
    pub fn load(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                warn!(path = %path.display(), %err, "could not read justification file");
                return Self::empty();
            }
        };

        let (entries, format) = parse_contents(&contents);
        debug!(
            path = %path.display(),
            ?format,
            entries = entries.len(),
            "loaded justification store"
        );

        Self {
            entries,
            format,
            path: Some(path.to_path_buf()),
        }
    }

    /// Build a store directly from sidecar text, bypassing the filesystem.
    #[cfg(test)]
    pub(crate) fn load_for_tests(contents: &str) -> Self {
        let (entries, format) = parse_contents(contents);
        Self {
            entries,
            format,
            path: None,
        }
    }

    pub fn justification(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strict JSON object first, then the line-oriented `KEY="VALUE"` fallback.
fn parse_contents(contents: &str) -> (FxHashMap<String, String>, StoreFormat) {
    match serde_json::from_str::<FxHashMap<String, String>>(contents) {
        Ok(entries) => (entries, StoreFormat::Json),
        Err(_) => (parse_key_value_lines(contents), StoreFormat::KeyValue),
    }
}

/// One entry per line shaped `KEY="justification text"`. Blank lines and
/// `#` comments are ignored, as is any line that doesn't match the shape.
fn parse_key_value_lines(contents: &str) -> FxHashMap<String, String> {
    let mut entries = FxHashMap::default();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(captures) = line_entry_pattern().captures(line) {
            entries.insert(captures[1].to_string(), captures[2].to_string());
        }
    }
    entries
}

fn line_entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*"(.*)"$"#).expect("valid regex")
    })
}
