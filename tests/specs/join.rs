//! Behavioral specs for `chopper join`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// Chop `len` bytes of `data.bin` into 100-byte parts, then delete the source.
fn chopped(len: usize, extra: &[&str]) -> (Project, Vec<u8>) {
    let temp = Project::empty();
    let data = temp.bytes("data.bin", len);
    let mut args = vec!["data.bin", "--size", "100B", "--quiet"];
    args.extend_from_slice(extra);
    chop().pwd(temp.path()).args(&args).passes();
    std::fs::remove_file(temp.path().join("data.bin")).unwrap();
    (temp, data)
}

// =============================================================================
// REASSEMBLY
// =============================================================================

/// > Joining from the first part restores the original and verifies it
#[test]
fn join_from_first_part_round_trips() {
    let (temp, data) = chopped(1000, &[]);

    join()
        .pwd(temp.path())
        .args(&["data.bin.part0001"])
        .passes()
        .stdout_has("Parts      : 10")
        .stdout_has("(inferred from part name)")
        .stdout_has("Reassembled file: data.bin")
        .stdout_has("Integrity check passed (SHA-256)");

    assert_eq!(temp.read("data.bin"), data);
}

/// > Any part of the set discovers all of its siblings
#[test]
fn join_from_middle_part_discovers_all() {
    let (temp, data) = chopped(350, &[]);

    join()
        .pwd(temp.path())
        .args(&["data.bin.part0003", "-q"])
        .passes();

    assert_eq!(temp.read("data.bin"), data);
}

/// > A directory plus --base finds the parts
#[test]
fn join_from_directory_with_base() {
    let temp = Project::empty();
    let data = temp.bytes("data.bin", 450);
    chop()
        .pwd(temp.path())
        .args(&["data.bin", "-s", "100B", "-o", "parts", "-q"])
        .passes();

    join()
        .pwd(temp.path())
        .args(&["parts", "--base", "data.bin", "-o", "restored.bin"])
        .passes()
        .stdout_has("Parts      : 5")
        .stdout_has("Integrity check passed");

    assert_eq!(temp.read("restored.bin"), data);
}

/// > A directory without --base is an argument error
#[test]
fn join_directory_requires_base() {
    let (temp, _) = chopped(300, &[]);

    join()
        .pwd(temp.path())
        .args(&["."])
        .exits(1)
        .stderr_has("--base is required");
}

/// > A directory with no matching parts exits 1
#[test]
fn join_directory_without_parts_exits_one() {
    let (temp, _) = chopped(300, &[]);

    join()
        .pwd(temp.path())
        .args(&[".", "--base", "other.bin"])
        .exits(1)
        .stderr_has("no part files found for 'other.bin'");
}

/// > Explicit part lists are joined in the order given
#[test]
fn join_explicit_list_keeps_order() {
    let temp = Project::empty();
    temp.write("b.txt", b"world");
    temp.write("a.txt", b"hello ");

    join()
        .pwd(temp.path())
        .args(&["a.txt", "b.txt", "-o", "out.txt"])
        .passes()
        .stdout_has("No checksum file found, integrity not verified");

    assert_eq!(temp.read("out.txt"), b"hello world");
}

/// > --output writes elsewhere but still verifies against the parts' sidecar
#[test]
fn join_output_override_still_verifies() {
    let (temp, data) = chopped(500, &[]);

    join()
        .pwd(temp.path())
        .args(&["data.bin.part0001", "--output", "restored/copy.bin"])
        .passes()
        .stdout_has("Integrity check passed");

    assert_eq!(temp.read("restored/copy.bin"), data);
}

/// > Parts chopped with --no-verify join with a warning
#[test]
fn join_without_sidecar_warns() {
    let (temp, data) = chopped(300, &["--no-verify"]);

    join()
        .pwd(temp.path())
        .args(&["data.bin.part0001"])
        .passes()
        .stdout_has("No checksum file found");

    assert_eq!(temp.read("data.bin"), data);
}

// =============================================================================
// FAILURES
// =============================================================================

/// > A missing explicit part exits 1 and names it
#[test]
fn join_missing_explicit_part_exits_one() {
    let (temp, _) = chopped(300, &[]);

    join()
        .pwd(temp.path())
        .args(&["data.bin.part0001", "data.bin.part0009"])
        .exits(1)
        .stderr_has("part file not found: data.bin.part0009");

    assert!(!temp.exists("data.bin"));
}

/// > A gap in discovered parts exits 1 and names the missing part
#[test]
fn join_gap_in_parts_exits_one() {
    let (temp, _) = chopped(500, &[]);
    std::fs::remove_file(temp.path().join("data.bin.part0003")).unwrap();

    join()
        .pwd(temp.path())
        .args(&["data.bin.part0001"])
        .exits(1)
        .stderr_has("part file not found")
        .stderr_has("data.bin.part0003");

    assert!(!temp.exists("data.bin"));
}

/// > A corrupted part fails verification with exit 2 and removes the output
#[test]
fn join_corrupted_part_exits_two() {
    let (temp, _) = chopped(300, &[]);
    let mut part = temp.read("data.bin.part0002");
    part[0] ^= 0xff;
    temp.write("data.bin.part0002", &part);

    join()
        .pwd(temp.path())
        .args(&["data.bin.part0001"])
        .exits(2)
        .stderr_has("checksum mismatch")
        .stderr_has("Expected : ")
        .stderr_has("Got      : ")
        .stdout_lacks("Integrity check passed");

    assert!(!temp.exists("data.bin"));
}

/// > --no-verify keeps a corrupted output
#[test]
fn join_no_verify_skips_check() {
    let (temp, _) = chopped(300, &[]);
    let mut part = temp.read("data.bin.part0002");
    part[0] ^= 0xff;
    temp.write("data.bin.part0002", &part);

    join()
        .pwd(temp.path())
        .args(&["data.bin.part0001", "--no-verify"])
        .passes()
        .stdout_lacks("Integrity")
        .stdout_lacks("No checksum file");

    assert!(temp.exists("data.bin"));
}

/// > The output may not overwrite one of its own parts
#[test]
fn join_output_equal_to_part_exits_one() {
    let (temp, _) = chopped(300, &[]);
    let before = temp.read("data.bin.part0001");

    join()
        .pwd(temp.path())
        .args(&["data.bin.part0001", "-o", "data.bin.part0001"])
        .exits(1);

    assert_eq!(temp.read("data.bin.part0001"), before);
}
