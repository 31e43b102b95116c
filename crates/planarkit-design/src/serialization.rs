//! Serialization and deserialization for design files.
//!
//! Implements save/load for .pkd (planarkit design) files using JSON
//! with complete design state preservation.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use uuid::Uuid;

use crate::chip::ChipSpec;
use crate::design::Design;
use crate::element::{ComponentId, ElementTables};
use crate::options::RendererOptions;

/// Design file format version
pub const FILE_FORMAT_VERSION: &str = "1.0";

/// Complete design file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub version: String,
    pub metadata: DesignMetadata,
    #[serde(default)]
    pub chips: BTreeMap<String, ChipSpec>,
    #[serde(default)]
    pub components: BTreeMap<ComponentId, String>,
    #[serde(default)]
    pub tables: ElementTables,
    #[serde(default)]
    pub options: RendererOptions,
}

/// Design metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignMetadata {
    pub name: String,
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl DesignMetadata {
    /// Fresh metadata for a new design.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            id: Uuid::new_v4(),
            created: now,
            modified: now,
            author: String::new(),
            description: String::new(),
        }
    }
}

impl From<DesignFile> for Design {
    fn from(file: DesignFile) -> Self {
        Self {
            metadata: file.metadata,
            chips: file.chips,
            components: file.components,
            tables: file.tables,
            options: file.options,
        }
    }
}

fn to_file(design: &Design) -> DesignFile {
    let mut metadata = design.metadata.clone();
    metadata.modified = Utc::now();
    DesignFile {
        version: FILE_FORMAT_VERSION.to_string(),
        metadata,
        chips: design.chips.clone(),
        components: design.components.clone(),
        tables: design.tables.clone(),
        options: design.options.clone(),
    }
}

/// Save a design to a JSON file, refreshing its modified timestamp.
pub fn save_design(design: &Design, path: &Path) -> Result<()> {
    let file = to_file(design);
    let json = serde_json::to_string_pretty(&file).context("Failed to serialize design")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write design file: {}", path.display()))?;
    Ok(())
}

/// Load a design from a JSON file.
pub fn load_design(path: &Path) -> Result<Design> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read design file: {}", path.display()))?;
    let file: DesignFile = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse design file: {}", path.display()))?;
    if !file.version.starts_with("1.") {
        bail!(
            "Unsupported design file version {} (expected {}.x)",
            file.version,
            "1"
        );
    }
    Ok(file.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, ElementKind, Geometry};
    use planarkit_core::Point;

    fn sample_design() -> Design {
        let mut design = Design::new("readout_test");
        let id = design.add_component("readout").unwrap();
        design
            .add_element(
                ElementKind::Path,
                Element {
                    component: id,
                    name: "feedline".to_string(),
                    chip: "main".to_string(),
                    geometry: Geometry::LineString {
                        points: vec![Point::new(-2.0, 0.0), Point::new(2.0, 0.0)],
                    },
                    fillet: Some(0.05),
                    width: 0.01,
                    subtract: false,
                    helper: false,
                    junction: None,
                },
            )
            .unwrap();
        design
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readout.pkd");

        let design = sample_design();
        save_design(&design, &path).unwrap();
        let loaded = load_design(&path).unwrap();

        assert_eq!(loaded.name(), design.name());
        assert_eq!(loaded.metadata.id, design.metadata.id);
        assert_eq!(loaded.chips, design.chips);
        assert_eq!(loaded.components, design.components);
        assert_eq!(loaded.tables, design.tables);
        assert_eq!(loaded.options, design.options);
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("future.pkd");

        let mut file = to_file(&sample_design());
        file.version = "2.0".to_string();
        std::fs::write(&path, serde_json::to_string(&file).unwrap()).unwrap();

        assert!(load_design(&path).is_err());
    }

    #[test]
    fn test_minimal_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("minimal.pkd");
        let json = format!(
            r#"{{
                "version": "1.0",
                "metadata": {{
                    "name": "bare",
                    "id": "{}",
                    "created": "2026-01-05T10:00:00Z",
                    "modified": "2026-01-05T10:00:00Z"
                }}
            }}"#,
            Uuid::new_v4()
        );
        std::fs::write(&path, json).unwrap();

        let design = load_design(&path).unwrap();
        assert!(design.tables.is_empty());
        assert_eq!(design.options, RendererOptions::default());
        assert!(design.chips.is_empty());
    }
}
