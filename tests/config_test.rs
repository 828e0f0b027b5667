// tests/config_test.rs
use publish_tool::config::{load_config, Config};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.module, "common");
    assert_eq!(
        config.versions_file,
        PathBuf::from("gradle/libs.versions.toml")
    );
    assert_eq!(config.build_command, "./gradlew");
    assert_eq!(config.tasks.local, "publishToMavenLocal");
    assert_eq!(config.tasks.remote, "publish");
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
module = "core"
versions_file = "versions/catalog.toml"
build_command = "make"

[tasks]
local = "install-local"
remote = "deploy"

[artifacts]
repository = "/srv/artifacts"
group_path = "com/example"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.module, "core");
    assert_eq!(config.versions_file, PathBuf::from("versions/catalog.toml"));
    assert_eq!(config.build_command, "make");
    assert_eq!(config.tasks.local, "install-local");
    assert_eq!(config.tasks.remote, "deploy");
    assert_eq!(config.artifacts.repository, PathBuf::from("/srv/artifacts"));
}

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"module = \"core\"\n").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.module, "core");
    // Everything else keeps its default
    assert_eq!(config.build_command, "./gradlew");
    assert_eq!(config.tasks.remote, "publish");
}

#[test]
fn test_module_dir_resolution() {
    let mut config = Config::default();
    config.artifacts.repository = PathBuf::from("/repo");
    config.artifacts.group_path = "com/example/libs".to_string();

    assert_eq!(
        config.artifacts.module_dir("common", "1.5.0"),
        PathBuf::from("/repo/com/example/libs/common/1.5.0")
    );
}

#[test]
fn test_module_dir_without_group_path() {
    let mut config = Config::default();
    config.artifacts.repository = PathBuf::from("/repo");
    config.artifacts.group_path = String::new();

    assert_eq!(
        config.artifacts.module_dir("common", "1.5.0"),
        PathBuf::from("/repo/common/1.5.0")
    );
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"module = [not toml").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}
