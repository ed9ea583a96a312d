use assert_cmd::Command;

fn taproom() -> Command {
    let mut command = Command::cargo_bin("taproom").unwrap();
    command.env_remove("TAPROOM_ENV").env_remove("TAPROOM_CONFIG_DIR");
    command
}

#[test]
fn openapi_is_printed_to_stdout() {
    let empty = tempfile::tempdir().unwrap();
    let output = taproom()
        .args(["openapi", "--config-dir"])
        .arg(empty.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let document: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(document["paths"]["/api/v1/beer/{beerId}"]["get"].is_object());
    assert!(document["paths"]["/api/v1/beer/"]["post"].is_object());
}

#[test]
fn openapi_can_be_written_to_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("openapi.json");

    taproom()
        .args(["openapi", "--config-dir"])
        .arg(dir.path())
        .arg("--output")
        .arg(&target)
        .assert()
        .success();

    let written = std::fs::read_to_string(&target).unwrap();
    let document: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(document["info"]["title"], "Taproom API");
}

#[test]
fn config_reflects_the_overlay_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("base.toml"), "[server]\nport = 9191\n").unwrap();
    std::fs::write(dir.path().join("staging.toml"), "[store]\nseed = true\n").unwrap();

    let output = taproom()
        .env("TAPROOM_ENV", "staging")
        .args(["config", "--config-dir"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["server"]["port"], 9191);
    assert_eq!(settings["store"]["seed"], true);
}

#[test]
fn unknown_environment_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    taproom()
        .env("TAPROOM_ENV", "moon")
        .args(["config", "--config-dir"])
        .arg(dir.path())
        .assert()
        .failure();
}
