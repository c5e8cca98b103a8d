//! Batch configuration: which JSON files to process, where the generated
//! modules go, and what the root types are called.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Prefix joined with every entry's `input` (default: cwd).
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    /// Prefix joined with every entry's `output` (default: cwd).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileEntry {
    /// Source JSON, relative to `dataDir`.
    pub input: PathBuf,
    /// Generated module path, relative to `outputDir`.
    pub output: PathBuf,
    /// Identifier for the root type (e.g. `RoomData`).
    pub root_type_name: String,
    /// Free-text label for the header comment.
    #[serde(default)]
    pub module_name: Option<String>,
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let src = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("cannot read config {}: {e}", path.display()))?;
        crate::path_de::from_str_with_path(&src)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {e}", path.display()))
    }

    pub fn input_path(&self, entry: &FileEntry) -> PathBuf {
        join_opt(self.data_dir.as_deref(), &entry.input)
    }

    pub fn output_path(&self, entry: &FileEntry) -> PathBuf {
        join_opt(self.output_dir.as_deref(), &entry.output)
    }
}

fn join_opt(base: Option<&Path>, rel: &Path) -> PathBuf {
    match base {
        Some(base) => base.join(rel),
        None => rel.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_entries() {
        let src = r#"{
            "dataDir": "app/data",
            "outputDir": "app/modules",
            "files": [
                {
                    "input": "roomData.json",
                    "output": "rooms/types/room.types.ts",
                    "rootTypeName": "RoomData",
                    "moduleName": "rooms"
                }
            ]
        }"#;
        let cfg: GeneratorConfig = crate::path_de::from_str_with_path(src).unwrap();
        assert_eq!(cfg.files.len(), 1);
        let entry = &cfg.files[0];
        assert_eq!(entry.root_type_name, "RoomData");
        assert_eq!(entry.module_name.as_deref(), Some("rooms"));
        assert_eq!(
            cfg.input_path(entry),
            PathBuf::from("app/data/roomData.json")
        );
        assert_eq!(
            cfg.output_path(entry),
            PathBuf::from("app/modules/rooms/types/room.types.ts")
        );
    }

    #[test]
    fn dirs_are_optional() {
        let src = r#"{ "files": [ { "input": "a.json", "output": "a.ts", "rootTypeName": "A" } ] }"#;
        let cfg: GeneratorConfig = crate::path_de::from_str_with_path(src).unwrap();
        let entry = &cfg.files[0];
        assert_eq!(cfg.input_path(entry), PathBuf::from("a.json"));
        assert!(entry.module_name.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let src = r#"{ "files": [], "extra": true }"#;
        assert!(crate::path_de::from_str_with_path::<GeneratorConfig>(src).is_err());
    }
}
