use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const MANIFEST: &str = r#"[
    {"id": "a", "media_source": "https://cdn.example/a.mp4"},
    {"id": "b", "media_source": "https://cdn.example/b.mp4", "poster": "https://cdn.example/b.jpg"},
    {"id": "c", "media_source": "https://cdn.example/c.mp4"}
]"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn replay(dir: &TempDir, script: &str, extra: &[&str]) -> String {
    let manifest = write(dir.path(), "manifest.json", MANIFEST);
    let script = write(dir.path(), "script.json", script);
    let mut cmd = cargo_bin_cmd!("lightboxctl");
    let output = cmd
        .current_dir(dir.path())
        .env_remove("LIGHTBOX_CONFIG_PATH")
        .env_remove("LIGHTBOX_CONFIG_JSON")
        .arg("replay")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--script")
        .arg(&script)
        .args(["--width", "400"])
        .args(extra)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn prints_one_line_per_step() {
    let dir = TempDir::new().unwrap();
    let out = replay(
        &dir,
        r#"[
            {"op": "open", "index": 0},
            {"op": "swipe", "dx": -220, "ms": 300},
            {"op": "key", "key": "ArrowRight"},
            {"op": "next"},
            {"op": "key", "key": "Escape"}
        ]"#,
        &[],
    );
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5, "{out}");
    assert!(lines[0].contains("state=idle index=0 clip=a"), "{}", lines[0]);
    assert!(lines[1].contains("index=1 clip=b"), "{}", lines[1]);
    assert!(lines[2].contains("index=2 clip=c"), "{}", lines[2]);
    assert!(lines[3].contains("(ignored)"), "{}", lines[3]);
    assert!(lines[4].contains("state=closed index=-"), "{}", lines[4]);
}

#[test]
fn marks_persist_and_export() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("review.json");
    let store_arg = store.display().to_string();
    let out = replay(
        &dir,
        r#"[
            {"op": "open", "index": 1},
            {"op": "toggle"},
            {"op": "close"}
        ]"#,
        &["--store", &store_arg],
    );
    assert!(out.contains("(marked)"), "{out}");
    assert!(out.contains("1 to add"), "{out}");

    cargo_bin_cmd!("lightboxctl")
        .current_dir(dir.path())
        .args(["summary", "--store", &store_arg])
        .assert()
        .success()
        .stdout("1 to add\n");

    cargo_bin_cmd!("lightboxctl")
        .current_dir(dir.path())
        .args(["export", "--store", &store_arg])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": "b""#))
        .stdout(predicate::str::contains(r#""action": "add""#));

    cargo_bin_cmd!("lightboxctl")
        .current_dir(dir.path())
        .args(["clear", "--store", &store_arg])
        .assert()
        .success();

    cargo_bin_cmd!("lightboxctl")
        .current_dir(dir.path())
        .args(["export", "--store", &store_arg])
        .assert()
        .success()
        .stdout("no changes\n");
}

#[test]
fn config_file_changes_thresholds() {
    let dir = TempDir::new().unwrap();
    let config = write(
        dir.path(),
        "strict.toml",
        "[carousel]\ncommit_fraction = 0.9\nflick_velocity_px_per_ms = 5.0\n",
    );
    let config_arg = config.display().to_string();
    let out = replay(
        &dir,
        r#"[
            {"op": "open", "index": 0},
            {"op": "swipe", "dx": -220, "ms": 300}
        ]"#,
        &["--config", &config_arg],
    );
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[1].contains("index=0 clip=a"), "{}", lines[1]);
}

#[test]
fn bad_script_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let manifest = write(dir.path(), "manifest.json", MANIFEST);
    let script = write(dir.path(), "script.json", r#"[{"op": "teleport"}]"#);
    cargo_bin_cmd!("lightboxctl")
        .current_dir(dir.path())
        .arg("replay")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid script"));
}
