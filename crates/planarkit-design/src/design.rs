//! The design: chips, registered components, element tables, options.

use crate::chip::ChipSpec;
use crate::element::{ComponentId, Element, ElementKind, ElementTables, JunctionParams};
use crate::error::DesignError;
use crate::options::RendererOptions;
use crate::serialization::DesignMetadata;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// A complete planar-circuit design.
#[derive(Debug, Clone)]
pub struct Design {
    /// File-level metadata (name, id, timestamps).
    pub metadata: DesignMetadata,
    /// Chips by name. New designs start with a default `main` chip.
    pub chips: BTreeMap<String, ChipSpec>,
    /// Registered components, id to name.
    pub components: BTreeMap<ComponentId, String>,
    /// Element tables.
    pub tables: ElementTables,
    /// Renderer options.
    pub options: RendererOptions,
}

impl Design {
    /// Create an empty design with a default `main` chip.
    pub fn new(name: impl Into<String>) -> Self {
        let mut chips = BTreeMap::new();
        chips.insert("main".to_string(), ChipSpec::default());
        Self {
            metadata: DesignMetadata::new(name),
            chips,
            components: BTreeMap::new(),
            tables: ElementTables::default(),
            options: RendererOptions::default(),
        }
    }

    /// Design name.
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Look up a chip spec by name.
    pub fn chip(&self, name: &str) -> Result<&ChipSpec, DesignError> {
        self.chips.get(name).ok_or_else(|| DesignError::UnknownChip {
            chip: name.to_string(),
        })
    }

    /// Surface elevation of a chip in millimeters.
    pub fn chip_z(&self, name: &str) -> Result<f64, DesignError> {
        self.chip(name)?
            .z_mm()
            .map_err(|source| DesignError::InvalidDimension {
                field: format!("{}.center_z", name),
                source,
            })
    }

    /// Register a component, assigning the next free id.
    pub fn add_component(&mut self, name: impl Into<String>) -> Result<ComponentId, DesignError> {
        let name = name.into();
        if self.components.values().any(|existing| *existing == name) {
            return Err(DesignError::DuplicateComponent { component: name });
        }
        let id = ComponentId(
            self.components
                .keys()
                .last()
                .map(|id| id.0 + 1)
                .unwrap_or(1),
        );
        self.components.insert(id, name);
        Ok(id)
    }

    /// Append an element row, checking its chip and component references.
    ///
    /// Junction rows without explicit lumped-element parameters get the
    /// design-level defaults.
    pub fn add_element(&mut self, kind: ElementKind, mut element: Element) -> Result<(), DesignError> {
        if !self.chips.contains_key(&element.chip) {
            return Err(DesignError::UnknownChip {
                chip: element.chip.clone(),
            });
        }
        if !self.components.contains_key(&element.component) {
            return Err(DesignError::UnknownComponent {
                component: element.component.to_string(),
            });
        }
        if kind == ElementKind::Junction && element.junction.is_none() {
            element.junction = Some(JunctionParams {
                inductance_nh: self.options.lj_nh,
                capacitance_ff: self.options.cj_ff,
                resistance_ohms: self.options.rj_ohms,
                max_mesh_length: self.options.max_mesh_length_jj.clone(),
            });
        }
        self.tables.push(kind, element);
        Ok(())
    }

    /// Resolve a component-name selection to a set of ids.
    ///
    /// An empty selection means "render everything" and resolves to
    /// `None`. Unknown names are logged and skipped.
    pub fn selection_ids(&self, selection: &[String]) -> Option<BTreeSet<ComponentId>> {
        if selection.is_empty() {
            return None;
        }
        let mut ids = BTreeSet::new();
        for name in selection {
            match self
                .components
                .iter()
                .find(|(_, component)| *component == name)
            {
                Some((&id, _)) => {
                    ids.insert(id);
                }
                None => warn!("Selection names unknown component {:?}, skipping", name),
            }
        }
        Some(ids)
    }
}
