use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::{Category, ChecklistItem};

mod res5109;

pub use res5109::{DEFAULT_TITLE, builtin};

/// Immutable, ordered Category -> Item structure.
///
/// Built once at startup and borrowed by the store and the report assembler.
/// Item ids are unique across the whole catalog and act as the join key for
/// every piece of session state.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    title: String,
    categories: Vec<Category>,
    #[serde(skip)]
    index: HashMap<String, (usize, usize)>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    title: Option<String>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(
        title: impl Into<String>,
        categories: Vec<Category>,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::new();
        let mut category_names = HashMap::<String, usize>::new();

        for (category_idx, category) in categories.iter().enumerate() {
            let name = category.name.trim();
            if name.is_empty() {
                return Err(CatalogError::EmptyCategoryName(category_idx + 1));
            }
            if category_names.insert(name.to_string(), category_idx).is_some() {
                return Err(CatalogError::DuplicateCategory(name.to_string()));
            }

            for (item_idx, item) in category.items.iter().enumerate() {
                if item.id.trim().is_empty() {
                    return Err(CatalogError::EmptyItemId(category.name.clone()));
                }
                if let Some((first_idx, _)) =
                    index.insert(item.id.clone(), (category_idx, item_idx))
                {
                    return Err(CatalogError::DuplicateItemId {
                        id: item.id.clone(),
                        first: categories[first_idx].name.clone(),
                        second: category.name.clone(),
                    });
                }
            }
        }

        if index.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self {
            title: title.into(),
            categories,
            index,
        })
    }

    pub fn from_json_slice(raw: &[u8]) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_slice(raw)?;
        let title = file
            .title
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());
        Self::new(title, file.categories)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_slice(&raw)
            .with_context(|| format!("invalid catalog file: {}", path.display()))
    }

    /// Custom catalog when a path is given, otherwise the built-in one.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => builtin().context("built-in catalog failed validation"),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn contains(&self, id: &str) -> bool {
        self.item(id).is_some()
    }

    pub fn item(&self, id: &str) -> Option<&ChecklistItem> {
        self.index
            .get(id)
            .map(|&(category_idx, item_idx)| &self.categories[category_idx].items[item_idx])
    }

    pub fn item_count(&self) -> usize {
        self.index.len()
    }

    /// Every item in declaration order, paired with its category.
    pub fn items(&self) -> impl Iterator<Item = (&Category, &ChecklistItem)> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter().map(move |item| (category, item)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Applicability;

    fn category(name: &str, ids: &[&str]) -> Category {
        Category {
            name: name.to_string(),
            items: ids
                .iter()
                .map(|id| ChecklistItem::new(*id, "check it", "Art. 1", Applicability::Both))
                .collect(),
        }
    }

    #[test]
    fn builtin_catalog_keeps_source_order() {
        let catalog = builtin().expect("built-in catalog should validate");
        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.item_count(), 38);

        let names = catalog
            .categories()
            .iter()
            .map(|category| category.name.as_str())
            .collect::<Vec<&str>>();
        assert_eq!(names[0], "1. Verificación con INVIMA (registro sanitario)");
        assert_eq!(names[4], "5. Evidencia documental y control");

        let first = catalog.items().next().expect("catalog has items");
        assert_eq!(first.1.id, "Registro sanitario impreso y legible en el empaque");
        assert_eq!(first.1.applicability, Applicability::FinishedProduct);

        let last = catalog.items().last().expect("catalog has items");
        assert_eq!(last.1.id, "Evidencia de revisión periódica de artes");
    }

    #[test]
    fn builtin_catalog_tags_shared_items_as_both() {
        let catalog = builtin().expect("built-in catalog should validate");
        let item = catalog.item("País de origen").expect("item should exist");
        assert_eq!(item.applicability, Applicability::Both);
        assert_eq!(item.legal_reference, "Resolución 5109/2005 Art. 5.9.");
    }

    #[test]
    fn duplicate_item_ids_are_rejected_across_categories() {
        let err = Catalog::new(
            "t",
            vec![category("A", &["x", "y"]), category("B", &["y"])],
        )
        .expect_err("duplicate id should be rejected");

        match err {
            CatalogError::DuplicateItemId { id, first, second } => {
                assert_eq!(id, "y");
                assert_eq!(first, "A");
                assert_eq!(second, "B");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_and_empty_category_names_are_rejected() {
        assert!(matches!(
            Catalog::new("t", vec![category("A", &["x"]), category("A", &["y"])]),
            Err(CatalogError::DuplicateCategory(_))
        ));
        assert!(matches!(
            Catalog::new("t", vec![category("  ", &["x"])]),
            Err(CatalogError::EmptyCategoryName(1))
        ));
        assert!(matches!(
            Catalog::new("t", vec![category("A", &[])]),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn catalog_json_defaults_title_and_applicability() {
        let raw = r#"
        {
          "categories": [
            {
              "name": "INVIMA",
              "items": [
                {
                  "id": "Registro impreso",
                  "verification_text": "Número impreso en el empaque",
                  "legal_reference": "Art. 5.7"
                }
              ]
            }
          ]
        }
        "#;

        let catalog = Catalog::from_json_slice(raw.as_bytes()).expect("catalog should parse");
        assert_eq!(catalog.title(), DEFAULT_TITLE);
        let item = catalog.item("Registro impreso").expect("item should exist");
        assert_eq!(item.applicability, Applicability::Both);
        assert_eq!(catalog.categories()[0].name, "INVIMA");
        assert!(!catalog.contains("Registro"));
    }
}
