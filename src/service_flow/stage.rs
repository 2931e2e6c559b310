use std::collections::HashSet;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

const CATALOG_JSON: &str = include_str!("../../assets/stages.json");

/// One tier of the service offering. Supplied by the caller and never mutated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    pub id: String,
    /// 1-based ordinal, display only.
    pub number: u32,
    pub title: String,
    pub short_title: String,
    pub description: String,
    pub price: String,
    pub button_text: String,
    /// Path handed to the router, never interpreted here.
    pub link_to: String,
    /// Theme token, e.g. "primary".
    pub color: String,
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl Stage {
    pub fn features(&self) -> &[String] {
        self.features.as_deref().unwrap_or(&[])
    }
}

pub fn load_catalog() -> Result<Vec<Stage>> {
    parse_catalog(CATALOG_JSON)
}

pub fn parse_catalog(json: &str) -> Result<Vec<Stage>> {
    let stages: Vec<Stage> = serde_json::from_str(json)?;
    if stages.is_empty() {
        return Err(CatalogError::Empty);
    }
    validate(&stages)?;
    Ok(stages)
}

/// Ids must be unique. Ordinals that drift from their position are only reported.
pub fn validate(stages: &[Stage]) -> Result<()> {
    let mut seen = HashSet::new();
    for (index, stage) in stages.iter().enumerate() {
        if !seen.insert(stage.id.as_str()) {
            return Err(CatalogError::DuplicateId { id: stage.id.clone() });
        }
        if stage.number as usize != index + 1 {
            warn!(
                "Stage '{}' has number {} but sits at position {}",
                stage.id,
                stage.number,
                index + 1
            );
        }
    }
    Ok(())
}

pub fn find_by_link<'a>(stages: &'a [Stage], path: &str) -> Option<&'a Stage> {
    stages.iter().find(|stage| stage.link_to == path)
}

#[cfg(test)]
pub(crate) fn test_stages() -> Vec<Stage> {
    parse_catalog(CATALOG_JSON).expect("bundled catalog must parse")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_has_five_tiers_in_order() {
        let stages = load_catalog().unwrap();
        let ids: Vec<&str> = stages.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["diagnostico", "autoayuda", "reporte", "intervencion", "representacion"]
        );
        for (index, stage) in stages.iter().enumerate() {
            assert_eq!(stage.number as usize, index + 1);
        }
    }

    #[test]
    fn test_stage_deserialize_camel_case_and_missing_features() {
        let json = r#"[{
            "id": "x",
            "number": 1,
            "title": "Título",
            "shortTitle": "Corto",
            "description": "Desc",
            "price": "Gratis",
            "buttonText": "Ir",
            "linkTo": "/x",
            "color": "primary"
        }]"#;
        let stages = parse_catalog(json).unwrap();
        assert_eq!(stages[0].short_title, "Corto");
        assert_eq!(stages[0].link_to, "/x");
        assert!(stages[0].features.is_none());
        assert!(stages[0].features().is_empty());
    }

    #[test]
    fn test_parse_catalog_rejects_duplicate_ids() {
        let mut stages = test_stages();
        stages[1].id = stages[0].id.clone();
        let json = serde_json::to_string(&stages).unwrap();
        match parse_catalog(&json) {
            Err(CatalogError::DuplicateId { id }) => assert_eq!(id, "diagnostico"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_catalog_rejects_empty_and_malformed() {
        assert!(matches!(parse_catalog("[]"), Err(CatalogError::Empty)));
        assert!(matches!(parse_catalog("{"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_validate_tolerates_ordinal_mismatch() {
        let mut stages = test_stages();
        stages[2].number = 9;
        assert!(validate(&stages).is_ok());
    }

    #[test]
    fn test_find_by_link() {
        let stages = test_stages();
        let stage = find_by_link(&stages, "/reporte-estrategico").unwrap();
        assert_eq!(stage.id, "reporte");
        assert!(find_by_link(&stages, "/nope").is_none());
    }
}
