//! Star catalog validator
//!
//! Checks that every backend id and key is unique, that no two stars share
//! a grid cell and that every constellation has stars.

use super::StarCatalog;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub enum ValidationIssue {
    DuplicateId {
        id: String,
        stars: Vec<String>,
    },
    DuplicateKey {
        key: String,
        stars: Vec<String>,
    },
    SharedCell {
        col: u16,
        row: u16,
        stars: Vec<String>,
    },
    EmptyConstellation {
        name: String,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            ValidationIssue::DuplicateId { .. } | ValidationIssue::DuplicateKey { .. } => {
                ValidationSeverity::Error
            }
            ValidationIssue::SharedCell { .. } | ValidationIssue::EmptyConstellation { .. } => {
                ValidationSeverity::Warning
            }
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::DuplicateId { id, stars } => {
                format!("Backend id '{}' is used by: {}", id, stars.join(", "))
            }
            ValidationIssue::DuplicateKey { key, stars } => {
                format!("Request key '{}' is used by: {}", key, stars.join(", "))
            }
            ValidationIssue::SharedCell { col, row, stars } => {
                format!(
                    "Grid cell ({}, {}) is shared by: {}",
                    col,
                    row,
                    stars.join(", ")
                )
            }
            ValidationIssue::EmptyConstellation { name } => {
                format!("Constellation '{}' has no stars", name)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Warning))
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Error))
            .collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Warning))
            .collect()
    }
}

/// Validate a loaded star catalog
pub fn validate_catalog(catalog: &StarCatalog) -> ValidationResult {
    let mut issues = Vec::new();

    let mut ids: HashMap<&str, Vec<String>> = HashMap::new();
    let mut keys: HashMap<&str, Vec<String>> = HashMap::new();
    let mut cells: HashMap<(u16, u16), Vec<String>> = HashMap::new();

    for star in catalog.stars() {
        ids.entry(star.id.as_str()).or_default().push(star.name.clone());
        keys.entry(star.key.as_str()).or_default().push(star.name.clone());
        cells
            .entry((star.col, star.row))
            .or_default()
            .push(star.name.clone());
    }

    for (id, stars) in ids {
        if stars.len() > 1 {
            issues.push(ValidationIssue::DuplicateId {
                id: id.to_string(),
                stars,
            });
        }
    }

    for (key, stars) in keys {
        if stars.len() > 1 {
            issues.push(ValidationIssue::DuplicateKey {
                key: key.to_string(),
                stars,
            });
        }
    }

    for ((col, row), stars) in cells {
        if stars.len() > 1 {
            issues.push(ValidationIssue::SharedCell { col, row, stars });
        }
    }

    for constellation in catalog.constellations() {
        if constellation.stars.is_empty() {
            issues.push(ValidationIssue::EmptyConstellation {
                name: constellation.name.clone(),
            });
        }
    }

    ValidationResult { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    #[test]
    fn test_sample_catalog_is_clean() {
        let result = validate_catalog(&sample_catalog());
        assert!(result.is_valid());
        assert!(!result.has_warnings());
    }

    #[test]
    fn test_duplicates_are_reported() {
        let toml = r#"
[[constellations]]
name = "Rat"

[[constellations.stars]]
key = "ratf"
id = "FirstRatStar"
name = "First Rat Star"
col = 1
row = 1

[[constellations.stars]]
key = "ratf"
id = "First Rat Star"
name = "Copy"
col = 1
row = 1

[[constellations]]
name = "Empty"
"#;
        let catalog = StarCatalog::parse(toml).unwrap();
        let result = validate_catalog(&catalog);

        assert!(result.has_errors());
        assert_eq!(result.errors().len(), 2);
        assert_eq!(result.warnings().len(), 2);
        assert!(result
            .warnings()
            .iter()
            .any(|w| w.message().contains("'Empty' has no stars")));
    }
}
