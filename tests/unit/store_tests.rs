//! Unit tests for the shared record store

#[cfg(test)]
mod tests {
    use ava::models::{AssetMetadata, AssetRecord, AssetType, Category};
    use ava::services::store::AssetStore;

    fn record(path: &str, asset_type: AssetType, category: Category) -> AssetRecord {
        AssetRecord {
            relative_path: path.to_string(),
            name: path.rsplit('/').next().unwrap_or(path).to_string(),
            asset_type,
            category,
            size_bytes: 64,
            modified_at: 1_700_000_000,
            metadata: AssetMetadata::None,
            dependencies: Vec::new(),
            is_valid: true,
            issues: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let store = AssetStore::new();
        store.insert(record("a.obj", AssetType::Model, Category::Props));

        assert!(store.contains("a.obj"));
        assert_eq!(store.len(), 1);
        let fetched = store.get("a.obj").expect("record should exist");
        assert_eq!(fetched.asset_type, AssetType::Model);
        assert!(store.get("missing.obj").is_none());
    }

    #[test]
    fn test_reinsert_moves_group_membership() {
        let store = AssetStore::new();
        store.insert(record("a.obj", AssetType::Model, Category::Props));
        store.insert(record("a.obj", AssetType::Model, Category::Vehicles));

        assert_eq!(store.len(), 1);
        assert!(store.by_category(Category::Props).is_empty());
        let vehicles = store.by_category(Category::Vehicles);
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].relative_path, "a.obj");
        // The type group must not have picked up a duplicate
        assert_eq!(store.by_type(AssetType::Model).len(), 1);
    }

    #[test]
    fn test_remove_scrubs_groups() {
        let store = AssetStore::new();
        store.insert(record("a.obj", AssetType::Model, Category::Props));
        store.insert(record("b.png", AssetType::Texture, Category::Props));

        assert!(store.remove("a.obj").is_some());
        assert!(store.remove("a.obj").is_none());
        assert!(!store.contains("a.obj"));
        assert_eq!(store.by_category(Category::Props).len(), 1);
        assert!(store.by_type(AssetType::Model).is_empty());
    }

    #[test]
    fn test_queries_sorted_by_path() {
        let store = AssetStore::new();
        store.insert(record("c.obj", AssetType::Model, Category::Props));
        store.insert(record("a.obj", AssetType::Model, Category::Props));
        store.insert(record("b.obj", AssetType::Model, Category::Props));

        let all: Vec<String> = store.all().into_iter().map(|r| r.relative_path).collect();
        assert_eq!(all, vec!["a.obj", "b.obj", "c.obj"]);

        let props: Vec<String> = store
            .by_category(Category::Props)
            .into_iter()
            .map(|r| r.relative_path)
            .collect();
        assert_eq!(props, vec!["a.obj", "b.obj", "c.obj"]);
    }

    #[test]
    fn test_replace_all_rebuilds_groups() {
        let store = AssetStore::new();
        store.insert(record("old.obj", AssetType::Model, Category::Props));

        store.replace_all(vec![
            record("new1.png", AssetType::Texture, Category::Misc),
            record("new2.png", AssetType::Texture, Category::Misc),
        ]);

        assert!(!store.contains("old.obj"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.by_type(AssetType::Texture).len(), 2);
        assert!(store.by_type(AssetType::Model).is_empty());
        assert_eq!(store.category_counts(), vec![(Category::Misc, 2)]);
    }

    #[test]
    fn test_counts_sorted_by_name() {
        let store = AssetStore::new();
        store.insert(record("v.obj", AssetType::Model, Category::Vehicles));
        store.insert(record("b.obj", AssetType::Model, Category::Buildings));
        store.insert(record("m.png", AssetType::Texture, Category::Misc));

        let names: Vec<&str> = store
            .category_counts()
            .iter()
            .map(|(category, _)| category.as_str())
            .collect();
        assert_eq!(names, vec!["Buildings", "Misc", "Vehicles"]);

        let types: Vec<&str> = store
            .type_counts()
            .iter()
            .map(|(asset_type, _)| asset_type.as_str())
            .collect();
        assert_eq!(types, vec!["model", "texture"]);
    }

    #[test]
    fn test_clear_empties_everything() {
        let store = AssetStore::new();
        store.insert(record("a.obj", AssetType::Model, Category::Props));
        store.clear();

        assert!(store.is_empty());
        assert!(store.by_category(Category::Props).is_empty());
        assert!(store.category_counts().is_empty());
    }
}
