use std::fs;
use std::path::PathBuf;

use metaed_lib::Settings;
use metaed_lib::settings::{add_storage_root_at, remove_storage_root_at};
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let tmp = TempDir::new().unwrap();
    let settings = Settings::load_from(&tmp.path().join("settings.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.scan.max_depth, 4);
}

#[test]
fn reads_storage_and_scan_tables() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(
        &path,
        r#"
[storage]
primary = "/games"
roots = ["/media/sd", "/mnt/usb"]

[scan]
file_names = ["collection.txt"]
max_depth = 2
"#,
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.primary_root, Some(PathBuf::from("/games")));
    assert_eq!(
        settings.extra_roots,
        vec![PathBuf::from("/media/sd"), PathBuf::from("/mnt/usb")]
    );
    assert_eq!(settings.scan.file_names, vec!["collection.txt"]);
    assert_eq!(settings.scan.max_depth, 2);
}

#[test]
fn malformed_file_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "[storage\nroots = ").unwrap();
    assert!(Settings::load_from(&path).is_err());
}

#[test]
fn negative_depth_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("settings.toml");
    fs::write(&path, "[scan]\nmax_depth = -1\n").unwrap();
    assert!(Settings::load_from(&path).is_err());
}

#[test]
fn add_and_remove_roots_preserve_other_tables() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("conf").join("settings.toml");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[ui]\ntheme = \"dark\"\n").unwrap();

    assert!(add_storage_root_at(&path, &PathBuf::from("/media/sd")).unwrap());
    assert!(!add_storage_root_at(&path, &PathBuf::from("/media/sd")).unwrap());
    assert!(add_storage_root_at(&path, &PathBuf::from("/mnt/usb")).unwrap());

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(
        settings.extra_roots,
        vec![PathBuf::from("/media/sd"), PathBuf::from("/mnt/usb")]
    );

    assert!(remove_storage_root_at(&path, &PathBuf::from("/media/sd")).unwrap());
    assert!(!remove_storage_root_at(&path, &PathBuf::from("/media/sd")).unwrap());

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("theme = \"dark\""));
    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.extra_roots, vec![PathBuf::from("/mnt/usb")]);
}

#[test]
fn add_creates_missing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("new").join("settings.toml");
    assert!(add_storage_root_at(&path, &PathBuf::from("/x")).unwrap());
    assert!(path.exists());
}
