#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicU64, Ordering};

fn seco_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seco"));
    cmd.env("HOME", home);
    cmd.env_remove("SECO_CONFIG");
    cmd.env_remove("SECO_UI_COLOR");
    cmd.env_remove("SECO_SCANNER_PROGRAM");
    cmd.env_remove("SECO_SCANNER_VERSION_TIMEOUT_SECS");
    cmd
}

fn make_temp_home() -> PathBuf {
    static HOME_SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = HOME_SEQ.fetch_add(1, Ordering::Relaxed);
    let home = std::env::temp_dir().join(format!("seco-exit-test-{}-{seq}", std::process::id()));
    let _ = std::fs::remove_dir_all(&home);
    std::fs::create_dir_all(&home).expect("create home");
    home
}

/// Fake scanner that records every invocation in a marker file.
fn write_recording_scanner(dir: &Path, version_exit: i32) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    let marker = dir.join("scanner-invoked");
    let path = dir.join("fake-bandit.sh");
    let script = format!(
        "#!/bin/sh\ntouch {marker}\nif [ \"$1\" = \"--version\" ]; then\n  exit {version_exit}\nfi\necho '{{\"results\": []}}'\nexit 0\n",
        marker = marker.display()
    );
    std::fs::write(&path, script).expect("write fake scanner");
    let mut perms = std::fs::metadata(&path).expect("stat").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).expect("chmod");
    (path, marker)
}

#[test]
fn nonexistent_path_exits_2_before_invoking_the_scanner() {
    let home = make_temp_home();
    let (scanner, marker) = write_recording_scanner(&home, 0);

    let out: Output = seco_cmd(&home)
        .env("SECO_SCANNER_PROGRAM", &scanner)
        .arg("/tmp/nonexistent")
        .output()
        .expect("run seco");

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("does not exist"), "stderr={stderr}");
    assert!(!marker.exists(), "scanner must not be invoked");

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn file_with_unknown_extension_and_no_output_exits_2() {
    let home = make_temp_home();
    let (scanner, marker) = write_recording_scanner(&home, 0);
    let target = home.join("project");
    std::fs::create_dir_all(&target).expect("mkdir");

    let out = seco_cmd(&home)
        .env("SECO_SCANNER_PROGRAM", &scanner)
        .arg(&target)
        .args(["--file", "report.txt"])
        .output()
        .expect("run seco");

    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("output format must be specified"),
        "stderr={stderr}"
    );
    assert!(!marker.exists(), "usage errors stop before any scan work");

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn invalid_output_format_value_exits_2() {
    let home = make_temp_home();
    let target = home.join("project");
    std::fs::create_dir_all(&target).expect("mkdir");

    let out = seco_cmd(&home)
        .arg(&target)
        .args(["--output", "xml"])
        .output()
        .expect("run seco");

    assert_eq!(out.status.code(), Some(2));

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn missing_scanner_binary_exits_20() {
    let home = make_temp_home();
    let target = home.join("project");
    std::fs::create_dir_all(&target).expect("mkdir");

    let out = seco_cmd(&home)
        .env("SECO_SCANNER_PROGRAM", "/tmp/seco-no-such-scanner")
        .arg(&target)
        .output()
        .expect("run seco");

    assert_eq!(out.status.code(), Some(20));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not installed"), "stderr={stderr}");

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn failing_version_check_exits_20() {
    let home = make_temp_home();
    let (scanner, _marker) = write_recording_scanner(&home, 7);
    let target = home.join("project");
    std::fs::create_dir_all(&target).expect("mkdir");

    let out = seco_cmd(&home)
        .env("SECO_SCANNER_PROGRAM", &scanner)
        .arg(&target)
        .output()
        .expect("run seco");

    assert_eq!(out.status.code(), Some(20));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("version check failed"), "stderr={stderr}");

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn malformed_config_file_exits_2() {
    let home = make_temp_home();
    let target = home.join("project");
    std::fs::create_dir_all(&target).expect("mkdir");
    let config = home.join("config.toml");
    std::fs::write(&config, "not [valid toml").expect("write config");

    let out = seco_cmd(&home)
        .arg(&target)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("run seco");

    assert_eq!(out.status.code(), Some(2));

    let _ = std::fs::remove_dir_all(&home);
}
