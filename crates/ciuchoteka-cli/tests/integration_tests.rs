//! End-to-end tests for the `ciuchoteka` binary.

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use image::{ImageBuffer, Rgb};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Scratch workspace: isolated data dir, empty config, one photo.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "").unwrap();
        let photo: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_fn(64, 48, |x, y| Rgb([x as u8, y as u8, 128]));
        photo.save(dir.path().join("photo.png")).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn data_dir(&self) -> PathBuf {
        self.path("data")
    }

    fn cmd(&self) -> Command {
        self.cmd_at(&self.data_dir())
    }

    fn cmd_at(&self, data_dir: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("ciuchoteka");
        cmd.current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .env_remove("NO_COLOR")
            .arg("--no-color")
            .arg("--config")
            .arg(self.path("config.toml"))
            .arg("--data-dir")
            .arg(data_dir);
        cmd
    }

    fn json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(["--output-format", "json"])
            .args(args)
            .output()
            .unwrap();
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
        serde_json::from_slice(&out.stdout).unwrap()
    }

    /// Add an item and return its id.
    fn add_item(&self, name: &str, cost: Option<&str>) -> String {
        let mut args = vec![
            "item", "add", "--name", name, "--category", "bottom", "--type", "trousers",
            "--photo", "photo.png",
        ];
        if let Some(cost) = cost {
            args.extend(["--cost", cost]);
        }
        self.json(&args)["id"].as_str().unwrap().to_string()
    }

    fn add_outfit(&self, date: &str, items: &[&str]) -> String {
        let mut args = vec!["outfit", "add", "--photo", "photo.png", "--date", date];
        for id in items {
            args.extend(["--item", id]);
        }
        self.json(&args)["id"].as_str().unwrap().to_string()
    }
}

fn stored(data_dir: &Path) -> Value {
    let raw = std::fs::read_to_string(data_dir.join("ciuchoteka_data")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

// ── basics ───────────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("ciuchoteka")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("wardrobe"))
        .stdout(predicate::str::contains("outfit"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("ciuchoteka")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_completions_bash() {
    cargo_bin_cmd!("ciuchoteka")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ciuchoteka"));
}

// ── items and outfits ────────────────────────────────────────────────────────

#[test]
fn test_item_round_trip_through_disk() {
    let sandbox = Sandbox::new();
    let id = sandbox.add_item("Chinos", Some("59.5"));

    let item = sandbox.json(&["item", "show", &id]);
    assert_eq!(item["item"]["name"], "Chinos");
    assert_eq!(item["item"]["type"], "trousers");
    assert_eq!(item["timesWorn"], 0);
    assert!(
        item["item"]["photo"]
            .as_str()
            .unwrap()
            .starts_with("data:image/jpeg;base64,")
    );

    let data = stored(&sandbox.data_dir());
    assert_eq!(data["version"], "1.0.0");
    assert_eq!(data["clothingItems"][0]["cost"], 59.5);
}

#[test]
fn test_outfits_drive_cost_per_wear() {
    let sandbox = Sandbox::new();
    let coat = sandbox.add_item("Coat", Some("100"));
    sandbox.add_outfit("2024-01-01", &[&coat]);
    sandbox.add_outfit("2024-01-05T08:00:00Z", &[&coat]);

    let stats = sandbox.json(&["item", "show", &coat]);
    assert_eq!(stats["timesWorn"], 2);
    assert_eq!(stats["costPerWear"], 50.0);
    assert_eq!(stats["lastWornDate"], "2024-01-05T08:00:00Z");
}

#[test]
fn test_outfit_with_unknown_item_is_rejected() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["outfit", "add", "--photo", "photo.png", "--item", "ghost"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ghost"));
}

#[test]
fn test_repeated_item_flag_is_stored_once() {
    let sandbox = Sandbox::new();
    let scarf = sandbox.add_item("Scarf", None);
    sandbox.add_outfit("2024-01-10", &[&scarf, &scarf]);

    let data = stored(&sandbox.data_dir());
    assert_eq!(data["outfits"][0]["clothingItemIds"], serde_json::json!([scarf]));
    assert_eq!(sandbox.json(&["item", "show", &scarf])["timesWorn"], 1);
}

#[test]
fn test_delete_item_cascades() {
    let sandbox = Sandbox::new();
    let a = sandbox.add_item("A", None);
    let b = sandbox.add_item("B", None);
    let outfit = sandbox.add_outfit("2024-02-02", &[&a, &b]);

    sandbox
        .cmd()
        .args(["item", "delete", &a])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed from 1 outfit"));

    let outfits = sandbox.json(&["outfit", "list"]);
    assert_eq!(outfits[0]["id"], outfit.as_str());
    assert_eq!(outfits[0]["clothingItemIds"], serde_json::json!([b]));
}

#[test]
fn test_missing_record_exits_not_found() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["item", "show", "nope"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("nope"));
    sandbox
        .cmd()
        .args(["outfit", "delete", "nope"])
        .assert()
        .code(3);
}

#[test]
fn test_negative_cost_is_user_error() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args([
            "item", "add", "--name", "X", "--category", "other", "--type", "y", "--cost=-3",
            "--photo", "photo.png",
        ])
        .assert()
        .code(2);
    assert!(!sandbox.data_dir().join("ciuchoteka_data").exists());
}

#[test]
fn test_unreadable_photo_saves_nothing() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.path("broken.jpg"), b"not an image").unwrap();
    sandbox
        .cmd()
        .args([
            "item", "add", "--name", "X", "--category", "other", "--type", "y", "--photo",
            "broken.jpg",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("broken.jpg"));
    assert!(!sandbox.data_dir().join("ciuchoteka_data").exists());
}

#[test]
fn test_update_clears_cost() {
    let sandbox = Sandbox::new();
    let id = sandbox.add_item("Belt", Some("20"));
    sandbox
        .cmd()
        .args(["item", "update", &id, "--clear-cost", "--name", "Leather belt"])
        .assert()
        .success();

    let item = sandbox.json(&["item", "show", &id]);
    assert_eq!(item["item"]["name"], "Leather belt");
    assert!(item["item"].get("cost").is_none());
}

// ── stats and storage ────────────────────────────────────────────────────────

#[test]
fn test_stats_ranking_limit() {
    let sandbox = Sandbox::new();
    let a = sandbox.add_item("A", Some("10"));
    sandbox.add_item("B", Some("5"));
    sandbox.add_item("C", None);
    sandbox.add_outfit("2024-03-01", &[&a]);

    let stats = sandbox.json(&["stats", "--limit", "2"]);
    assert_eq!(stats["totalItems"], 3);
    assert_eq!(stats["totalCost"], 15.0);
    assert_eq!(stats["mostWornItems"].as_array().unwrap().len(), 2);
    assert_eq!(stats["mostWornItems"][0]["item"]["name"], "A");
    assert_eq!(stats["leastWornItems"][0]["item"]["name"], "B");
    let never: Vec<&str> = stats["neverWornItems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["item"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(never, vec!["B", "C"]);
}

#[test]
fn test_storage_usage_empty_then_positive() {
    let sandbox = Sandbox::new();
    assert_eq!(sandbox.json(&["storage"])["usagePercent"], 0.0);
    sandbox.add_item("A", None);
    assert!(sandbox.json(&["storage"])["usagePercent"].as_f64().unwrap() > 0.0);
}

// ── backup ───────────────────────────────────────────────────────────────────

#[test]
fn test_export_then_import_into_fresh_dir() {
    let sandbox = Sandbox::new();
    let a = sandbox.add_item("A", Some("1"));
    sandbox.add_outfit("2024-04-04", &[&a]);

    let out = sandbox
        .cmd()
        .args(["export", "--output", "backups"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let backup = PathBuf::from(String::from_utf8(out.stdout).unwrap().lines().last().unwrap());
    let name = backup.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("ciuchoteka-backup-") && name.ends_with(".json"));

    let restored = sandbox.path("restored");
    sandbox
        .cmd_at(&restored)
        .arg("import")
        .arg(&backup)
        .arg("--yes")
        .assert()
        .success();

    assert_eq!(stored(&restored), stored(&sandbox.data_dir()));
}

#[test]
fn test_bad_import_leaves_data_untouched() {
    let sandbox = Sandbox::new();
    sandbox.add_item("Keep", None);
    let before = stored(&sandbox.data_dir());

    std::fs::write(
        sandbox.path("bad.json"),
        r#"{"clothingItems": [], "version": "1.0.0"}"#,
    )
    .unwrap();
    sandbox
        .cmd()
        .args(["import", "bad.json", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("outfits"));

    assert_eq!(stored(&sandbox.data_dir()), before);
}

#[test]
fn test_import_declined_at_prompt() {
    let sandbox = Sandbox::new();
    sandbox.add_item("Keep", None);
    let before = stored(&sandbox.data_dir());
    std::fs::write(
        sandbox.path("empty.json"),
        r#"{"clothingItems": [], "outfits": [], "version": "1.0.0"}"#,
    )
    .unwrap();

    sandbox
        .cmd()
        .args(["import", "empty.json"])
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cancelled"));
    assert_eq!(stored(&sandbox.data_dir()), before);
}

#[test]
fn test_clear_removes_stored_entry() {
    let sandbox = Sandbox::new();
    sandbox.add_item("Gone", None);
    sandbox.cmd().args(["clear", "--yes"]).assert().success();

    assert!(!sandbox.data_dir().join("ciuchoteka_data").exists());
    assert_eq!(sandbox.json(&["item", "list"]), serde_json::json!([]));
}

// ── configuration ────────────────────────────────────────────────────────────

#[test]
fn test_config_file_and_env_layers() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.path("config.toml"), "[stats]\nranking_limit = 2\n").unwrap();

    sandbox
        .cmd()
        .args(["config", "get", "stats.ranking_limit"])
        .assert()
        .success()
        .stdout("2\n");

    sandbox
        .cmd()
        .env("CIUCHOTEKA__STATS__RANKING_LIMIT", "7")
        .args(["config", "get", "stats.ranking_limit"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_missing_explicit_config_exits_4() {
    let sandbox = Sandbox::new();
    cargo_bin_cmd!("ciuchoteka")
        .current_dir(sandbox.dir.path())
        .args(["--config", "missing.toml", "storage"])
        .assert()
        .code(4);
}

#[test]
fn test_init_writes_config_once() {
    let sandbox = Sandbox::new();
    let path = sandbox.path("fresh.toml");
    let init = |force: bool| {
        let mut cmd = cargo_bin_cmd!("ciuchoteka");
        cmd.current_dir(sandbox.dir.path())
            .arg("--no-color")
            .arg("--config")
            .arg(&path)
            .arg("init");
        if force {
            cmd.arg("--force");
        }
        cmd
    };

    init(false).assert().success();
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("ranking_limit = 5"));

    init(false)
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    init(true)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
}

// ── json output ──────────────────────────────────────────────────────────────

#[test]
fn test_json_item_delete() {
    let sandbox = Sandbox::new();
    let a = sandbox.add_item("A", None);
    sandbox.add_outfit("2024-02-02", &[&a]);

    let out = sandbox.json(&["item", "delete", &a]);
    assert_eq!(out["deleted"], a.as_str());
    assert_eq!(out["removedFromOutfits"], 1);
}

#[test]
fn test_json_outfit_delete() {
    let sandbox = Sandbox::new();
    let outfit = sandbox.add_outfit("2024-02-03", &[]);
    assert_eq!(
        sandbox.json(&["outfit", "delete", &outfit])["deleted"],
        outfit.as_str()
    );
}

#[test]
fn test_json_export_import_clear() {
    let sandbox = Sandbox::new();
    sandbox.add_item("A", None);
    sandbox.add_outfit("2024-02-04", &[]);

    let exported = sandbox.json(&["export", "--output", "backups"]);
    assert_eq!(exported["items"], 1);
    assert_eq!(exported["outfits"], 1);
    let path = exported["path"].as_str().unwrap().to_string();
    assert!(sandbox.path(&path).exists());

    let imported = sandbox.json(&["import", &path, "--yes"]);
    assert_eq!(imported, serde_json::json!({ "items": 1, "outfits": 1 }));

    let cleared = sandbox.json(&["clear", "--yes"]);
    assert_eq!(
        cleared,
        serde_json::json!({ "clearedItems": 1, "clearedOutfits": 1 })
    );
}

#[test]
fn test_json_clear_requires_yes() {
    let sandbox = Sandbox::new();
    sandbox.add_item("Keep", None);
    sandbox
        .cmd()
        .args(["--output-format", "json", "clear"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("--yes"));
    assert!(sandbox.data_dir().join("ciuchoteka_data").exists());
}
