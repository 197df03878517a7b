//! Binary-level tests: argument surface, guidance, config resolution, and
//! client-side validation that must block before any network call.

use phongtro_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_help_lists_command_groups() {
    let world = TestWorld::new().unwrap();
    world
        .run(&["--help"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("rental"))
        .stdout(predicate::str::contains("withdrawal"))
        .stdout(predicate::str::contains("agreement"))
        .stdout(predicate::str::contains("inbox"));
}

#[test]
fn test_no_command_shows_guidance() {
    let world = TestWorld::new().unwrap();
    world
        .run(&[])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Quick commands:"));
}

#[test]
fn test_guidance_without_config_points_to_init() {
    let world = TestWorld::without_config().unwrap();
    world
        .run(&[])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("phongtro init"));
}

#[test]
fn test_init_writes_scaffold() {
    let world = TestWorld::without_config().unwrap();
    world
        .run(&["init"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("Wrote "));
    assert!(world.config_path().exists());

    // Second run must not clobber the file.
    world
        .run(&["init"])
        .unwrap()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_missing_backend_configuration_is_reported() {
    let world = TestWorld::without_config().unwrap();
    world
        .run(&["rental", "list"])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("no backend configured"));
}

#[test]
fn test_missing_token_is_reported() {
    let world = TestWorld::with_config("[api]\nbase_url = \"http://127.0.0.1:9\"\n").unwrap();
    world
        .run(&["rental", "list"])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("no access token configured"));
}

#[test]
fn test_unreachable_backend_surfaces_connection_error() {
    let world = TestWorld::new().unwrap();
    world
        .run(&["rental", "list"])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("Connection error"));
}

#[test]
fn test_accept_requires_message_and_start_date() {
    let world = TestWorld::new().unwrap();
    // Clap enforces both as required; neither run reaches the backend.
    world
        .run(&["rental", "accept", "req-1", "--start-date", "2025-09-01"])
        .unwrap()
        .failure();
    world
        .run(&["rental", "accept", "req-1", "--message", "ok"])
        .unwrap()
        .failure();
}

#[test]
fn test_reject_with_unknown_canned_reason_is_blocked() {
    let world = TestWorld::new().unwrap();
    world
        .run(&["rental", "reject", "req-1", "--reason", "Không thích"])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("unknown reason"));
}

#[test]
fn test_reject_without_reason_requires_note_text() {
    let world = TestWorld::new().unwrap();
    world
        .run(&["rental", "reject", "req-1"])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("Lý do khác"));
}

#[test]
fn test_withdrawal_reject_requires_note() {
    let world = TestWorld::new().unwrap();
    world
        .run(&["withdrawal", "reject", "wd-1", "--note", "   "])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("a response note is required"));
}

#[test]
fn test_withdrawal_create_validates_amount_before_any_call() {
    let world = TestWorld::new().unwrap();
    world
        .run(&[
            "withdrawal",
            "create",
            "--amount",
            "0",
            "--request-type",
            "deposit_refund",
            "--reason",
            "Hết hạn hợp đồng",
            "--bank",
            "VCB",
            "--account",
            "0123456789",
            "--holder",
            "NGUYEN VAN AN",
        ])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("amount must be positive"));
}

#[test]
fn test_withdrawal_create_rejects_unknown_type() {
    let world = TestWorld::new().unwrap();
    world
        .run(&[
            "withdrawal",
            "create",
            "--amount",
            "1000000",
            "--request-type",
            "partial_refund",
            "--reason",
            "x",
            "--bank",
            "VCB",
            "--account",
            "1",
            "--holder",
            "A",
        ])
        .unwrap()
        .failure()
        .stderr(predicate::str::contains("unknown withdrawal type"));
}
