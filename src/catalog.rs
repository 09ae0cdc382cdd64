use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use schema::{CreatureDefinition, MoveData};

use crate::creature::CreatureInstance;
use crate::errors::{CatalogError, CatalogResult};

/// Read-only move lookup injected into the engine.
///
/// Backed by a `BTreeMap` so that any iteration over the catalog is
/// deterministic. The engine never mutates a catalog; tests substitute
/// small fixture catalogs built with [`MoveCatalog::new`].
#[derive(Debug, Clone, Default)]
pub struct MoveCatalog {
    moves: BTreeMap<String, MoveData>,
}

impl MoveCatalog {
    pub fn new(moves: Vec<MoveData>) -> Self {
        Self {
            moves: moves.into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }

    pub fn get(&self, move_id: &str) -> Option<&MoveData> {
        self.moves.get(move_id)
    }

    pub fn require(&self, move_id: &str) -> CatalogResult<&MoveData> {
        self.moves
            .get(move_id)
            .ok_or_else(|| CatalogError::MoveNotFound(move_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveData> {
        self.moves.values()
    }

    /// Parse a catalog from a RON document containing a list of moves.
    pub fn from_ron_str(content: &str) -> CatalogResult<Self> {
        let moves: Vec<MoveData> =
            ron::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::new(moves))
    }

    /// Load every `.ron` file in a directory, each holding a list of
    /// moves.
    pub fn load_from_dir(data_path: &Path) -> CatalogResult<Self> {
        let mut all_moves = Vec::new();
        for path in ron_files_in(data_path)? {
            let content = fs::read_to_string(&path).map_err(|e| CatalogError::Io(e.to_string()))?;
            let mut moves: Vec<MoveData> =
                ron::from_str(&content).map_err(|e| CatalogError::Parse(e.to_string()))?;
            all_moves.append(&mut moves);
        }
        Ok(Self::new(all_moves))
    }
}

/// Read-only creature definition lookup, mirroring [`MoveCatalog`].
#[derive(Debug, Clone, Default)]
pub struct CreatureCatalog {
    definitions: BTreeMap<String, CreatureDefinition>,
}

impl CreatureCatalog {
    pub fn new(definitions: Vec<CreatureDefinition>) -> Self {
        Self {
            definitions: definitions
                .into_iter()
                .map(|d| (d.id.clone(), d))
                .collect(),
        }
    }

    pub fn get(&self, definition_id: &str) -> Option<&CreatureDefinition> {
        self.definitions.get(definition_id)
    }

    pub fn require(&self, definition_id: &str) -> CatalogResult<&CreatureDefinition> {
        self.definitions
            .get(definition_id)
            .ok_or_else(|| CatalogError::DefinitionNotFound(definition_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CreatureDefinition> {
        self.definitions.values()
    }

    /// Instantiate a battle-ready creature from a definition, carrying
    /// the definition's full move pool.
    pub fn instantiate(
        &self,
        instance_id: impl Into<String>,
        definition_id: &str,
    ) -> CatalogResult<CreatureInstance> {
        let definition = self.require(definition_id)?;
        Ok(CreatureInstance::new(
            instance_id,
            definition.id.clone(),
            definition.element,
            &definition.base_stats,
            definition.move_pool.clone(),
        ))
    }

    pub fn from_ron_str(content: &str) -> CatalogResult<Self> {
        let definitions: Vec<CreatureDefinition> =
            ron::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Ok(Self::new(definitions))
    }

    pub fn load_from_dir(data_path: &Path) -> CatalogResult<Self> {
        let mut all_definitions = Vec::new();
        for path in ron_files_in(data_path)? {
            let content = fs::read_to_string(&path).map_err(|e| CatalogError::Io(e.to_string()))?;
            let mut definitions: Vec<CreatureDefinition> =
                ron::from_str(&content).map_err(|e| CatalogError::Parse(e.to_string()))?;
            all_definitions.append(&mut definitions);
        }
        Ok(Self::new(all_definitions))
    }
}

/// Collect `.ron` paths in a directory, sorted so load order (and thus
/// any last-write-wins duplicate handling) is stable across platforms.
fn ron_files_in(data_path: &Path) -> CatalogResult<Vec<std::path::PathBuf>> {
    if !data_path.exists() {
        return Err(CatalogError::Io(format!(
            "Catalog data directory not found: {}",
            data_path.display()
        )));
    }
    let entries = fs::read_dir(data_path).map_err(|e| CatalogError::Io(e.to_string()))?;
    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("ron"))
        .collect();
    paths.sort();
    Ok(paths)
}
