//! Star catalog: which stars exist, where they sit on the grid and how the
//! backend names them.
//!
//! The catalog is pure layout data. Whether a star can be unlocked is always
//! decided by the backend.

use crate::protocol::{normalize_star_id, Affinity};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub mod validator;

/// Index of a star inside [`StarCatalog::stars`]
pub type StarIndex = usize;

/// A single star as written in stars.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarDef {
    /// Identifier sent to the backend (e.g. "tortof")
    pub key: String,
    /// Identifier returned by the backend (e.g. "FirstTortoiseStar")
    pub id: String,
    /// Display name
    pub name: String,
    pub col: u16,
    pub row: u16,
    /// Star grants a skill (rendered with its own glyph)
    #[serde(default)]
    pub skill: bool,
}

/// A constellation as written in stars.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstellationDef {
    pub name: String,
    #[serde(default)]
    pub affinity: Option<Affinity>,
    #[serde(default)]
    pub stars: Vec<StarDef>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    constellations: Vec<ConstellationDef>,
}

/// Flattened star entry with a back-reference to its constellation
#[derive(Debug, Clone)]
pub struct CatalogStar {
    pub key: String,
    /// Normalized backend id
    pub id: String,
    pub name: String,
    pub col: u16,
    pub row: u16,
    pub skill: bool,
    pub constellation: usize,
}

/// Loaded star catalog with lookup by backend id
#[derive(Debug, Clone)]
pub struct StarCatalog {
    constellations: Vec<ConstellationDef>,
    stars: Vec<CatalogStar>,
    by_id: HashMap<String, StarIndex>,
}

impl StarCatalog {
    /// Load stars.toml from the data directory, falling back to the embedded copy
    pub fn load() -> Result<Self> {
        let path = crate::config::Config::stars_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            tracing::warn!(
                "Star catalog not found at {}, using embedded default",
                path.display()
            );
            Self::parse(crate::config::DEFAULT_STARS)
        }
    }

    /// Load a catalog from an explicit path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read star catalog from {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse star catalog {}", path.display()))
    }

    /// Parse catalog TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).context("Invalid star catalog TOML")?;
        let catalog = Self::from_constellations(file.constellations);
        tracing::info!(
            "Loaded {} stars in {} constellations",
            catalog.stars.len(),
            catalog.constellations.len()
        );
        Ok(catalog)
    }

    fn from_constellations(constellations: Vec<ConstellationDef>) -> Self {
        let mut stars = Vec::new();
        let mut by_id = HashMap::new();

        for (constellation, def) in constellations.iter().enumerate() {
            for star in &def.stars {
                let id = normalize_star_id(&star.id);
                // First definition wins; duplicates are reported by the validator
                by_id.entry(id.clone()).or_insert(stars.len());
                stars.push(CatalogStar {
                    key: star.key.clone(),
                    id,
                    name: star.name.clone(),
                    col: star.col,
                    row: star.row,
                    skill: star.skill,
                    constellation,
                });
            }
        }

        Self {
            constellations,
            stars,
            by_id,
        }
    }

    pub fn stars(&self) -> &[CatalogStar] {
        &self.stars
    }

    pub fn star(&self, index: StarIndex) -> Option<&CatalogStar> {
        self.stars.get(index)
    }

    pub fn constellations(&self) -> &[ConstellationDef] {
        &self.constellations
    }

    /// Constellation that owns a star
    pub fn constellation_of(&self, index: StarIndex) -> Option<&ConstellationDef> {
        self.stars
            .get(index)
            .and_then(|star| self.constellations.get(star.constellation))
    }

    /// Look up a star by a (raw or normalized) backend id
    pub fn index_of(&self, backend_id: &str) -> Option<StarIndex> {
        self.by_id.get(&normalize_star_id(backend_id)).copied()
    }

    /// Look up a star by the key used in requests
    pub fn index_of_key(&self, key: &str) -> Option<StarIndex> {
        self.stars.iter().position(|star| star.key == key)
    }

    /// Star at a grid cell
    pub fn star_at(&self, col: u16, row: u16) -> Option<StarIndex> {
        self.stars
            .iter()
            .position(|star| star.col == col && star.row == row)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Grid extent as (columns, rows)
    pub fn grid_size(&self) -> (u16, u16) {
        let cols = self.stars.iter().map(|s| s.col.saturating_add(1)).max().unwrap_or(0);
        let rows = self.stars.iter().map(|s| s.row.saturating_add(1)).max().unwrap_or(0);
        (cols, rows)
    }
}
