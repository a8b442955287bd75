use tempfile::TempDir;

use unipkg_core::config::{ConfigStore, Settings};

#[test]
fn load_missing_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::from_path(temp.path().join("unipkg.toml"));

    let settings = store.load().unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn load_reports_path_on_parse_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("unipkg.toml");
    std::fs::write(&path, "whitelist = [\".lua\"\n").unwrap();

    let err = ConfigStore::from_path(&path).load().unwrap_err();

    assert!(err.to_string().contains("Failed to parse config file"));
    assert!(err.to_string().contains("unipkg.toml"));
}

#[test]
fn load_reads_written_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("unipkg.toml");
    std::fs::write(
        &path,
        r#"
target_location = "/usr/lib/"
whitelist = [".lua", ".txt"]
generated_notice = false

[endpoints]
gitlab_api = "https://gitlab.example.com/api/v4"
"#,
    )
    .unwrap();

    let settings = ConfigStore::from_path(&path).load().unwrap();

    assert_eq!(settings.target_location, "/usr/lib/");
    assert_eq!(settings.whitelist, vec![".lua".to_string(), ".txt".to_string()]);
    assert!(!settings.generated_notice);
    assert_eq!(settings.endpoints.gitlab_api, "https://gitlab.example.com/api/v4");
    assert_eq!(settings.timeout_secs, 10);
}
