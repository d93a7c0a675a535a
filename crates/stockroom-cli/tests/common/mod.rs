use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Value, json};

/// Run the CLI binary with arguments, isolated from the caller's environment.
pub fn run_cli(args: &[&str]) -> Output {
    run_cli_with_env(args, &[])
}

/// Run the CLI with extra environment variables set.
pub fn run_cli_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_stockroom"));
    cmd.args(args);
    cmd.env_remove("STOCKROOM_CATALOG");
    cmd.env_remove("STOCKROOM_LOG");
    cmd.envs(vars.iter().copied());
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_success(args: &[&str]) -> String {
    let output = run_cli(args);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub fn run_cli_failure(args: &[&str]) -> String {
    let output = run_cli(args);
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn product(id: &str, name: &str, price: f64, quantity: i64, created_at: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "price": price,
        "quantity": quantity,
        "created_at": created_at,
        "updated_at": created_at,
    })
}

/// Write a three-product catalog and return its path.
pub fn write_catalog(dir: &Path) -> PathBuf {
    let catalog = json!([
        product("p-widget", "Widget", 10.0, 4, "2024-01-01T00:00:00Z"),
        product("p-gadget", "Gadget", 5.0, 0, "2024-02-01T00:00:00Z"),
        product("p-gizmo", "Gizmo", 7.5, 12, "2024-03-01T00:00:00Z"),
    ]);
    let path = dir.join("catalog.json");
    std::fs::write(&path, serde_json::to_string_pretty(&catalog).unwrap()).unwrap();
    path
}

/// Names of the items in a search envelope printed on stdout.
pub fn item_names(stdout: &str) -> Vec<String> {
    let envelope: Value = serde_json::from_str(stdout.trim()).expect("stdout is not JSON");
    envelope["items"]
        .as_array()
        .expect("envelope has no items")
        .iter()
        .map(|item| item["name"].as_str().unwrap_or_default().to_string())
        .collect()
}
