use std::fs;

use deflicker_core::metadata::{MetadataStore, SidecarStore};
use tempfile::TempDir;

#[test]
fn test_sidecar_path_is_appended_suffix() {
    let path = SidecarStore::sidecar_path("shoot/IMG_0042.jpg".as_ref());
    assert_eq!(path.to_string_lossy(), "shoot/IMG_0042.jpg.deflicker.json");
}

#[test]
fn test_get_absent_then_set_then_get() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("frame.png");
    let store = SidecarStore;

    assert_eq!(store.get(&image, "luminance").unwrap(), None);

    store.set(&image, "luminance", 123.25).unwrap();
    assert!(SidecarStore::sidecar_path(&image).exists());
    assert_eq!(store.get(&image, "luminance").unwrap(), Some(123.25));
}

#[test]
fn test_update_keeps_other_fields() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("frame.png");
    let store = SidecarStore;

    store.set(&image, "luminance", 10.0).unwrap();
    store.set(&image, "exposure", 0.5).unwrap();
    store.set(&image, "luminance", 20.0).unwrap();

    assert_eq!(store.get(&image, "luminance").unwrap(), Some(20.0));
    assert_eq!(store.get(&image, "exposure").unwrap(), Some(0.5));
}

#[test]
fn test_malformed_sidecar_treated_as_absent() {
    let dir = TempDir::new().unwrap();
    let image = dir.path().join("frame.png");
    let store = SidecarStore;

    fs::write(SidecarStore::sidecar_path(&image), "not json {").unwrap();
    assert_eq!(store.get(&image, "luminance").unwrap(), None);

    // A set over the garbage rewrites it into a clean record.
    store.set(&image, "luminance", 5.5).unwrap();
    assert_eq!(store.get(&image, "luminance").unwrap(), Some(5.5));
}
