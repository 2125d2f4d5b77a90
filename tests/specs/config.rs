//! Behavioral specs for chopper.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > chop.size is used when --size is absent
#[test]
fn config_chop_size_is_the_default() {
    let temp = Project::empty();
    temp.config("[chop]\nsize = \"100B\"\n");
    temp.bytes("data.bin", 250);

    chop()
        .pwd(temp.path())
        .args(&["data.bin"])
        .passes()
        .stdout_has("Created 3 part(s):");
}

/// > chop.size also accepts a bare byte count
#[test]
fn config_chop_size_accepts_integer() {
    let temp = Project::empty();
    temp.config("[chop]\nsize = 50\n");
    temp.bytes("data.bin", 100);

    chop().pwd(temp.path()).args(&["data.bin", "-q"]).passes();

    assert!(temp.exists("data.bin.part0002"));
    assert!(!temp.exists("data.bin.part0003"));
}

/// > --size overrides chop.size
#[test]
fn cli_size_overrides_config() {
    let temp = Project::empty();
    temp.config("[chop]\nsize = \"10B\"\n");
    temp.bytes("data.bin", 250);

    chop()
        .pwd(temp.path())
        .args(&["data.bin", "--size", "1K"])
        .passes()
        .stdout_has("Created 1 part(s):");
}

/// > Config is discovered from a parent directory
#[test]
fn config_found_in_parent_directory() {
    let temp = Project::empty();
    temp.config("[chop]\nsize = \"100B\"\n");
    temp.bytes("nested/data.bin", 200);

    chop()
        .pwd(temp.path().join("nested"))
        .args(&["data.bin", "-q"])
        .passes();

    assert!(temp.exists("nested/data.bin.part0002"));
}

/// > chop.verify = false disables the checksum file
#[test]
fn config_chop_verify_false_skips_sidecar() {
    let temp = Project::empty();
    temp.config("[chop]\nverify = false\n");
    temp.bytes("data.bin", 200);

    chop()
        .pwd(temp.path())
        .args(&["data.bin", "-s", "100B", "-q"])
        .passes();

    assert!(!temp.exists("data.bin.sha256"));
}

/// > join.verify = false disables verification
#[test]
fn config_join_verify_false_skips_check() {
    let temp = Project::empty();
    temp.bytes("data.bin", 200);
    chop()
        .pwd(temp.path())
        .args(&["data.bin", "-s", "100B", "-q"])
        .passes();
    temp.write("data.bin.part0002", b"tampered");
    temp.config("[join]\nverify = false\n");

    join()
        .pwd(temp.path())
        .args(&["data.bin.part0001"])
        .passes()
        .stdout_lacks("Integrity");
}

/// > Unknown keys warn but do not fail
#[test]
fn unknown_config_key_warns() {
    let temp = Project::empty();
    temp.config("colour = true\n[chop]\ncompress = true\n");
    temp.bytes("data.bin", 100);

    chop()
        .pwd(temp.path())
        .args(&["data.bin", "-s", "100B", "-q"])
        .passes()
        .stderr_has("chopper: warning:")
        .stderr_has("unrecognized field `colour` (ignored)")
        .stderr_has("unrecognized field `chop.compress` (ignored)");
}

/// > A config without a version is rejected
#[test]
fn config_without_version_exits_one() {
    let temp = Project::empty();
    temp.write("chopper.toml", b"[chop]\nsize = \"1K\"\n");
    temp.bytes("data.bin", 100);

    chop()
        .pwd(temp.path())
        .args(&["data.bin"])
        .exits(1)
        .stderr_has("missing required field: version");
}

/// > Invalid values name the config file they came from
#[test]
fn bad_config_value_names_the_file() {
    let temp = Project::empty();
    temp.config("[chop]\nsize = \"10XB\"\n");
    temp.bytes("data.bin", 100);

    chop()
        .pwd(temp.path())
        .args(&["data.bin"])
        .exits(1)
        .stderr_has("chopper.toml: chop.size: unknown size unit 'XB'");
}

/// > Unsupported versions are rejected
#[test]
fn config_future_version_exits_one() {
    let temp = Project::empty();
    temp.config("version = 2\n");
    temp.bytes("data.bin", 100);

    chop()
        .pwd(temp.path())
        .args(&["data.bin", "-s", "1K"])
        .exits(1)
        .stderr_has("unsupported config version 2");
}

/// > -C points at a config outside the project
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.write("conf/custom.toml", b"version = 1\n[chop]\nsize = \"100B\"\n");
    temp.bytes("data.bin", 300);

    chop()
        .pwd(temp.path())
        .args(&["data.bin", "-C", "conf/custom.toml"])
        .passes()
        .stdout_has("Created 3 part(s):");
}

/// > CHOPPER_CONFIG is the environment form of -C
#[test]
fn config_env_var() {
    let temp = Project::empty();
    temp.write("conf/custom.toml", b"version = 1\n[chop]\nsize = \"100B\"\n");
    temp.bytes("data.bin", 300);

    chop()
        .pwd(temp.path())
        .args(&["data.bin"])
        .env("CHOPPER_CONFIG", "conf/custom.toml")
        .passes()
        .stdout_has("Created 3 part(s):");
}

/// > A missing explicit config is an error
#[test]
fn missing_explicit_config_exits_one() {
    let temp = Project::empty();
    temp.bytes("data.bin", 100);

    chop()
        .pwd(temp.path())
        .args(&["data.bin", "-s", "1K", "-C", "nope.toml"])
        .exits(1)
        .stderr_has("config error: nope.toml: config file not found");
}

/// > NO_COLOR output carries no escape codes
#[test]
fn no_color_output_is_plain() {
    let temp = Project::empty();
    temp.bytes("data.bin", 100);

    chop()
        .pwd(temp.path())
        .args(&["data.bin", "-s", "100B"])
        .env("NO_COLOR", "1")
        .passes()
        .stdout_lacks("\x1b[");
}

/// > COLOR forces escape codes even when piped
#[test]
fn color_env_forces_color() {
    let temp = Project::empty();
    temp.bytes("data.bin", 100);

    chop()
        .pwd(temp.path())
        .args(&["data.bin", "-s", "100B"])
        .env("COLOR", "1")
        .env_remove("NO_COLOR")
        .passes()
        .stdout_has("\x1b[");
}
