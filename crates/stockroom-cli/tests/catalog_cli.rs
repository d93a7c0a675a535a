//! CLI integration tests against catalog files.

mod common;

use serde_json::Value;
use tempfile::TempDir;

use common::{
    item_names, run_cli, run_cli_failure, run_cli_success, run_cli_with_env, write_catalog,
};

#[test]
fn test_search_defaults_to_newest_first() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();

    let stdout = run_cli_success(&["products", "search", "--catalog", catalog]);

    assert_eq!(item_names(&stdout), ["Gizmo", "Gadget", "Widget"]);
    let envelope: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(envelope["total"], 3);
    assert_eq!(envelope["per_page"], 15);
    assert_eq!(envelope["current_page"], 1);
    assert_eq!(envelope["last_page"], 1);
}

#[test]
fn test_search_sort_and_paginate() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();

    let stdout = run_cli_success(&[
        "products", "search", "--catalog", catalog, "--sort", "price", "--sort-dir", "asc",
        "--per-page", "2", "--page", "2",
    ]);

    assert_eq!(item_names(&stdout), ["Widget"]);
    let envelope: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(envelope["total"], 3);
    assert_eq!(envelope["last_page"], 2);
    assert_eq!(envelope["sort"], "price");
}

#[test]
fn test_search_filter() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();

    let stdout = run_cli_success(&["products", "search", "--catalog", catalog, "--filter", "gIZ"]);
    assert_eq!(item_names(&stdout), ["Gizmo"]);

    // "g" also matches the one in "Widget".
    let stdout = run_cli_success(&["products", "search", "--catalog", catalog, "--filter", "g"]);
    assert_eq!(item_names(&stdout), ["Gizmo", "Gadget", "Widget"]);
}

#[test]
fn test_search_catalog_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());

    let output = run_cli_with_env(
        &["products", "search", "--filter", "widget"],
        &[("STOCKROOM_CATALOG", catalog.to_str().unwrap())],
    );

    assert!(
        output.status.success(),
        "Search failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(item_names(&String::from_utf8_lossy(&output.stdout)), ["Widget"]);
}

#[test]
fn test_search_reports_next_page() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();

    let output = run_cli(&["products", "search", "--catalog", catalog, "--per-page", "2"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Next page"), "unexpected stderr: {}", stderr);

    let output = run_cli(&[
        "products", "search", "--catalog", catalog, "--per-page", "2", "--page", "2",
    ]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Next page"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_log_filter_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();
    let args = ["products", "search", "--catalog", catalog];

    let quiet = run_cli(&args);
    assert!(!String::from_utf8_lossy(&quiet.stderr).contains("Loaded catalog"));

    let output = run_cli_with_env(&args, &[("STOCKROOM_LOG", "debug")]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Loaded catalog"), "unexpected stderr: {}", stderr);

    // Logs never leak into the JSON on stdout.
    assert_eq!(item_names(&String::from_utf8_lossy(&output.stdout)).len(), 3);
}

#[test]
fn test_search_without_catalog_is_empty() {
    let stdout = run_cli_success(&["products", "search"]);

    assert!(item_names(&stdout).is_empty());
    let envelope: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(envelope["total"], 0);
    assert_eq!(envelope["last_page"], 1);
}

#[test]
fn test_get_product() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();

    let stdout = run_cli_success(&["products", "get", "p-gadget", "--catalog", catalog]);

    let product: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(product["name"], "Gadget");
    assert_eq!(product["quantity"], 0);
}

#[test]
fn test_get_missing_product() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();

    let stderr = run_cli_failure(&["products", "get", "p-missing", "--catalog", catalog]);

    assert!(
        stderr.contains("Model with id p-missing not found"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn test_add_and_save() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();

    let stdout = run_cli_success(&[
        "products", "add", "--catalog", catalog, "--name", "Doohickey", "--price", "3.25",
        "--quantity", "8", "--save",
    ]);
    let added: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(added["name"], "Doohickey");

    let stdout = run_cli_success(&[
        "products", "search", "--catalog", catalog, "--sort", "price", "--sort-dir", "asc",
    ]);
    assert_eq!(
        item_names(&stdout),
        ["Doohickey", "Gadget", "Gizmo", "Widget"]
    );
}

#[test]
fn test_add_without_save_leaves_catalog_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();

    run_cli_success(&[
        "products", "add", "--catalog", catalog, "--name", "Doohickey", "--price", "3.25",
        "--quantity", "8",
    ]);

    let stdout = run_cli_success(&["products", "search", "--catalog", catalog]);
    assert_eq!(item_names(&stdout).len(), 3);
}

#[test]
fn test_add_duplicate_name_conflicts() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();

    let stderr = run_cli_failure(&[
        "products", "add", "--catalog", catalog, "--name", "Widget", "--price", "1",
        "--quantity", "1",
    ]);

    assert!(stderr.contains("conflict"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_add_invalid_price() {
    let stderr = run_cli_failure(&[
        "products", "add", "--name", "Free", "--price", "0", "--quantity", "1",
    ]);

    assert!(stderr.contains("price"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_save_requires_catalog_path() {
    let stderr = run_cli_failure(&[
        "products", "add", "--name", "Thing", "--price", "1", "--quantity", "1", "--save",
    ]);

    assert!(stderr.contains("--save"), "unexpected stderr: {}", stderr);
}

#[test]
fn test_update_and_delete() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path());
    let catalog = catalog.to_str().unwrap();

    let stdout = run_cli_success(&[
        "products", "update", "p-gizmo", "--catalog", catalog, "--price", "1.5", "--save",
    ]);
    let updated: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(updated["price"], 1.5);
    assert_ne!(updated["updated_at"], "2024-03-01T00:00:00Z");

    run_cli_success(&["products", "delete", "p-widget", "--catalog", catalog, "--save"]);

    let stdout = run_cli_success(&[
        "products", "search", "--catalog", catalog, "--sort", "price", "--sort-dir", "asc",
    ]);
    assert_eq!(item_names(&stdout), ["Gizmo", "Gadget"]);
}
