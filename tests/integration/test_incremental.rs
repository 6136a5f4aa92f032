//! Integration tests for targeted single-asset index updates

use crate::fixtures::{create_asset_tree, obj_source, write_file_sync, ASSET_TREE_COUNT};
use ava::models::Category;
use ava::{AssetIndex, IndexOptions};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_update_asset_refreshes_one_record() {
    let temp_dir = TempDir::new().unwrap();
    create_asset_tree(temp_dir.path()).unwrap();

    let index = AssetIndex::new(temp_dir.path(), IndexOptions::default());
    assert!(index.scan(true));

    let before = index.get_asset_by_path("tree_prop.obj").expect("record");
    write_file_sync(temp_dir.path().join("tree_prop.obj"), obj_source(50, 30, None)).unwrap();

    assert!(index.update_asset("tree_prop.obj"));

    let after = index.get_asset_by_path("tree_prop.obj").expect("record");
    assert!(after.size_bytes > before.size_bytes);
    assert_eq!(after.category, Category::Environment);
    assert_eq!(index.asset_count(), ASSET_TREE_COUNT);
}

#[test]
fn test_update_asset_drops_vanished_files() {
    let temp_dir = TempDir::new().unwrap();
    create_asset_tree(temp_dir.path()).unwrap();

    let index = AssetIndex::new(temp_dir.path(), IndexOptions::default());
    assert!(index.scan(true));

    fs::remove_file(temp_dir.path().join("tree_prop.obj")).unwrap();
    assert!(!index.update_asset("tree_prop.obj"));

    assert!(index.get_asset_by_path("tree_prop.obj").is_none());
    assert!(index
        .get_assets_by_category(Category::Environment)
        .iter()
        .all(|record| record.relative_path != "tree_prop.obj"));
    assert_eq!(index.asset_count(), ASSET_TREE_COUNT - 1);
}

#[test]
fn test_update_asset_picks_up_new_files() {
    let temp_dir = TempDir::new().unwrap();
    create_asset_tree(temp_dir.path()).unwrap();

    let index = AssetIndex::new(temp_dir.path(), IndexOptions::default());
    assert!(index.scan(true));

    write_file_sync(
        temp_dir.path().join("models/vehicles/bus_02.obj"),
        obj_source(6, 4, None),
    )
    .unwrap();
    assert!(index.update_asset("models/vehicles/bus_02.obj"));

    let record = index
        .get_asset_by_path("models/vehicles/bus_02.obj")
        .expect("new record");
    assert_eq!(record.category, Category::Vehicles);
    assert_eq!(index.asset_count(), ASSET_TREE_COUNT + 1);
}

#[test]
fn test_remove_asset_scrubs_queries() {
    let temp_dir = TempDir::new().unwrap();
    create_asset_tree(temp_dir.path()).unwrap();

    let index = AssetIndex::new(temp_dir.path(), IndexOptions::default());
    assert!(index.scan(true));

    assert!(index.remove_asset("textures/brick_wall.png"));
    assert!(!index.remove_asset("textures/brick_wall.png"), "second removal is a no-op");

    assert!(index.get_asset_by_path("textures/brick_wall.png").is_none());
    assert_eq!(index.asset_count(), ASSET_TREE_COUNT - 1);
}
