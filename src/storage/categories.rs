//! Category repository for JSON storage
//!
//! Manages loading and appending categories in categories.json

use std::collections::HashSet;
use std::path::PathBuf;

use tracing::info;

use crate::error::{FintrackError, FintrackResult, ValidationError};
use crate::models::{Category, CategoryId, FlowType};

use super::json_store::JsonArrayStore;

/// Repository for category persistence
pub struct CategoryRepository {
    store: JsonArrayStore<Category>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            store: JsonArrayStore::new(path),
        }
    }

    /// Get all categories in persisted order
    pub fn get_all(&self) -> FintrackResult<Vec<Category>> {
        self.store.read_all()
    }

    /// Get income (`true`) or expense (`false`) categories in persisted order
    pub fn get_by_type(&self, is_income: bool) -> FintrackResult<Vec<Category>> {
        let mut categories = self.store.read_all()?;
        categories.retain(|c| c.is_income == is_income);
        Ok(categories)
    }

    /// Get every category whose name matches, case-insensitively
    pub fn find_by_name(&self, name: &str) -> FintrackResult<Vec<Category>> {
        let mut categories = self.store.read_all()?;
        categories.retain(|c| c.matches_name(name));
        Ok(categories)
    }

    /// Create and append a new editable category
    ///
    /// The duplicate check and ID assignment happen under the same exclusive
    /// lock as the write, so concurrent calls cannot hand out the same ID.
    pub fn add(&self, name: &str, kind: FlowType) -> FintrackResult<Category> {
        let name = name.trim();

        let category = self.store.update(|categories| {
            if categories
                .iter()
                .any(|c| c.kind == kind && c.matches_name(name))
            {
                return Err(ValidationError::DuplicateCategory {
                    name: name.to_string(),
                    kind,
                }
                .into());
            }

            let id = CategoryId::next_after(categories.iter().map(|c| &c.id)).ok_or_else(|| {
                FintrackError::Storage("No category IDs left above the highest stored ID".into())
            })?;
            let category = Category::new(id, name, kind);
            category.validate()?;

            categories.push(category.clone());
            Ok(category)
        })?;

        info!(id = %category.id, name = %category.name, kind = %category.kind, "category added");
        Ok(category)
    }

    /// Write the seed list if no category file exists yet
    ///
    /// The list must obey the same rules as [`add`](Self::add): unique IDs and
    /// unique (name, type) pairs.
    pub fn seed(&self, categories: &[Category]) -> FintrackResult<bool> {
        let mut ids = HashSet::new();
        for (i, category) in categories.iter().enumerate() {
            category.validate()?;

            if !ids.insert(&category.id) {
                return Err(ValidationError::DuplicateCategoryId {
                    id: category.id.to_string(),
                }
                .into());
            }

            if categories[..i]
                .iter()
                .any(|c| c.kind == category.kind && c.matches_name(&category.name))
            {
                return Err(ValidationError::DuplicateCategory {
                    name: category.name.clone(),
                    kind: category.kind,
                }
                .into());
            }
        }

        let written = self.store.initialize(categories)?;
        if written {
            info!(count = categories.len(), "category store seeded");
        }
        Ok(written)
    }

    /// Count categories
    pub fn count(&self) -> FintrackResult<usize> {
        Ok(self.store.read_all()?.len())
    }

    pub fn path(&self) -> &std::path::Path {
        self.store.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_categories;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.get_by_type(true).unwrap().is_empty());
    }

    #[test]
    fn test_seed_and_filter_by_type() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.seed(&default_categories()).unwrap());

        let income = repo.get_by_type(true).unwrap();
        let expense = repo.get_by_type(false).unwrap();

        let income_names: Vec<_> = income.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(income_names, vec!["Зарплата", "Подарки", "Прочие доходы"]);
        assert_eq!(expense.len(), 4);
        assert_eq!(expense[0].name, "Продукты");
    }

    #[test]
    fn test_seed_does_not_overwrite() {
        let (_temp_dir, repo) = create_test_repo();
        repo.seed(&default_categories()).unwrap();
        repo.add("Кафе", FlowType::Expense).unwrap();

        assert!(!repo.seed(&default_categories()).unwrap());
        assert_eq!(repo.count().unwrap(), 8);
    }

    #[test]
    fn test_add_assigns_next_id() {
        let (_temp_dir, repo) = create_test_repo();
        repo.seed(&default_categories()).unwrap();

        let first = repo.add("  Кафе ", FlowType::Expense).unwrap();
        let second = repo.add("Фриланс", FlowType::Income).unwrap();

        assert_eq!(first.id.as_str(), "8");
        assert_eq!(first.name, "Кафе");
        assert!(first.editable);
        assert_eq!(second.id.as_str(), "9");
        assert!(second.is_income);
    }

    #[test]
    fn test_add_rejects_duplicate_name_and_type() {
        let (_temp_dir, repo) = create_test_repo();
        repo.seed(&default_categories()).unwrap();

        let err = repo.add("продукты", FlowType::Expense).unwrap_err();
        assert!(matches!(
            err,
            FintrackError::Validation(ValidationError::DuplicateCategory { .. })
        ));

        // Same name under the other type is a different category
        assert!(repo.add("Продукты", FlowType::Income).is_ok());
        assert_eq!(repo.find_by_name("ПРОДУКТЫ").unwrap().len(), 2);
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let (_temp_dir, repo) = create_test_repo();
        let err = repo.add("   ", FlowType::Income).unwrap_err();
        assert!(matches!(
            err,
            FintrackError::Validation(ValidationError::EmptyCategoryName)
        ));
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_seed_rejects_duplicate_names() {
        let (_temp_dir, repo) = create_test_repo();
        let seed = vec![
            Category::system(CategoryId::from("1"), "Кафе", FlowType::Expense),
            Category::system(CategoryId::from("2"), " кафе ", FlowType::Expense),
        ];

        let err = repo.seed(&seed).unwrap_err();
        assert!(matches!(
            err,
            FintrackError::Validation(ValidationError::DuplicateCategory { .. })
        ));
        assert!(!repo.path().exists());

        // Same name under both types is allowed
        let seed = vec![
            Category::system(CategoryId::from("1"), "Кафе", FlowType::Expense),
            Category::system(CategoryId::from("2"), "Кафе", FlowType::Income),
        ];
        assert!(repo.seed(&seed).unwrap());
    }

    #[test]
    fn test_seed_rejects_duplicate_ids() {
        let (_temp_dir, repo) = create_test_repo();
        let seed = vec![
            Category::system(CategoryId::from("1"), "Кафе", FlowType::Expense),
            Category::system(CategoryId::from("1"), "Зарплата", FlowType::Income),
        ];

        let err = repo.seed(&seed).unwrap_err();
        assert!(matches!(
            err,
            FintrackError::Validation(ValidationError::DuplicateCategoryId { ref id }) if id == "1"
        ));
        assert!(!repo.path().exists());
    }

    #[test]
    fn test_add_fails_cleanly_when_ids_are_exhausted() {
        let (_temp_dir, repo) = create_test_repo();
        std::fs::write(
            repo.path(),
            r#"[{"id":"18446744073709551615","name":"X","type":"income","is_income":true,"edit":true}]"#,
        )
        .unwrap();
        let before = std::fs::read_to_string(repo.path()).unwrap();

        let err = repo.add("Y", FlowType::Income).unwrap_err();
        assert!(matches!(err, FintrackError::Storage(_)));
        assert_eq!(std::fs::read_to_string(repo.path()).unwrap(), before);
    }
}
