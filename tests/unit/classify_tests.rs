//! Unit tests for extension and category classification

#[cfg(test)]
mod tests {
    use ava::models::{AssetType, Category};
    use ava::services::classify::{categorize, detect_type, is_known_type, type_for_extension};
    use std::path::Path;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(type_for_extension("obj"), AssetType::Model);
        assert_eq!(type_for_extension("fbx"), AssetType::Model);
        assert_eq!(type_for_extension("blend"), AssetType::Model);
        assert_eq!(type_for_extension("png"), AssetType::Texture);
        assert_eq!(type_for_extension("exr"), AssetType::Texture);
        assert_eq!(type_for_extension("mtl"), AssetType::Material);
        assert_eq!(type_for_extension("wav"), AssetType::Audio);
        assert_eq!(type_for_extension("mp4"), AssetType::Video);
        assert_eq!(type_for_extension("txt"), AssetType::Unknown);
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_eq!(detect_type(Path::new("BRICK.PNG")), AssetType::Texture);
        assert_eq!(detect_type(Path::new("Hero.FBX")), AssetType::Model);
        assert_eq!(type_for_extension(".OBJ"), AssetType::Model);
    }

    #[test]
    fn test_missing_or_unknown_extension() {
        assert_eq!(detect_type(Path::new("README")), AssetType::Unknown);
        assert_eq!(detect_type(Path::new("notes.txt")), AssetType::Unknown);
        assert!(!is_known_type(Path::new("notes.txt")));
        assert!(is_known_type(Path::new("mesh.obj")));
    }

    #[test]
    fn test_filename_keyword_beats_directory() {
        // The stem keyword wins even when the directory says otherwise
        assert_eq!(
            categorize(Path::new("models/vehicles/tree_prop.obj")),
            Category::Environment
        );
        assert_eq!(
            categorize(Path::new("models/buildings/police_car.obj")),
            Category::Vehicles
        );
    }

    #[test]
    fn test_keyword_scan_order_within_stem() {
        // tree outranks prop, character outranks car
        assert_eq!(categorize(Path::new("tree_prop.obj")), Category::Environment);
        assert_eq!(
            categorize(Path::new("character_car.fbx")),
            Category::Characters
        );
        assert_eq!(categorize(Path::new("old_house_prop.obj")), Category::Buildings);
    }

    #[test]
    fn test_models_directory_fallback() {
        assert_eq!(
            categorize(Path::new("models/buildings/unnamed_01.obj")),
            Category::Buildings
        );
        assert_eq!(
            categorize(Path::new("Models/Vehicles/rusty_01.obj")),
            Category::Vehicles
        );
        // The category segment must directly follow a models component
        assert_eq!(
            categorize(Path::new("buildings/unnamed_01.obj")),
            Category::Misc
        );
        assert_eq!(
            categorize(Path::new("models/stuff/unnamed_01.obj")),
            Category::Misc
        );
    }

    #[test]
    fn test_misc_fallback() {
        assert_eq!(categorize(Path::new("textures/brick_wall.png")), Category::Misc);
        assert_eq!(categorize(Path::new("loose_mesh.obj")), Category::Misc);
    }
}
