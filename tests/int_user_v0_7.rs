//! Integration tests of the Boss user API.
//!
//! These run against a live (usually developer) instance of the Boss and
//! are ignored by default.  Point `BOSS_TEST_CONFIG` at a config file
//! (defaults to `test.toml`) and run with `cargo test -- --ignored`.

use intern::{BossError, BossRemote};
use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

const API_VER: &str = "v0.7";
const CONFIG_ENV_NAME: &str = "BOSS_TEST_CONFIG";

const FIRST_NAME: &str = "john";
const LAST_NAME: &str = "doe";
const PASSWORD: &str = "password";

fn remote() -> BossRemote {
    let path = env::var(CONFIG_ENV_NAME).unwrap_or_else(|_| "test.toml".to_string());
    let mut rmt = BossRemote::from_config_file(&path, API_VER).unwrap();
    // Turn off SSL cert verification.  This is necessary for interacting
    // with developer instances of the Boss.
    rmt.set_verify_ssl(false).unwrap();
    rmt
}

/// A fresh username and email so runs don't collide with leftovers from
/// earlier failed runs.
fn test_identity() -> (String, String) {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos()
        % 10_000;
    (
        format!("user_test_user{}", nonce),
        format!("jd{}@me.com", nonce),
    )
}

fn cleanup(rmt: &BossRemote, user: &str) {
    // An error here just means the user was already gone.
    let _ = rmt.user_delete(user);
}

fn expect_http_error<T>(result: intern::Result<T>) {
    match result {
        Err(BossError::Status { .. }) | Err(BossError::Http(_)) => (),
        Err(err) => panic!("expected an HTTP error, got: {}", err),
        Ok(_) => panic!("expected an HTTP error, got success"),
    }
}

#[test]
#[ignore]
fn add() {
    let rmt = remote();
    let (user, email) = test_identity();

    rmt.user_add(&user, FIRST_NAME, LAST_NAME, &email, PASSWORD)
        .unwrap();

    cleanup(&rmt, &user);
}

#[test]
#[ignore]
fn add_then_delete() {
    let rmt = remote();
    let (user, email) = test_identity();

    rmt.user_add(&user, FIRST_NAME, LAST_NAME, &email, PASSWORD)
        .unwrap();
    rmt.user_delete(&user).unwrap();
}

#[test]
#[ignore]
fn delete_invalid_user() {
    let rmt = remote();
    expect_http_error(rmt.user_delete("foo"));
}

#[test]
#[ignore]
fn add_then_get() {
    let rmt = remote();
    let (user, email) = test_identity();

    rmt.user_add(&user, FIRST_NAME, LAST_NAME, &email, PASSWORD)
        .unwrap();

    let actual = rmt.user_get(&user).unwrap();

    // The server also returns generated values that we cannot test for,
    // such as creation time; those land in `extra`.
    assert_eq!(actual.username, user);
    assert_eq!(actual.first_name, FIRST_NAME);
    assert_eq!(actual.last_name, LAST_NAME);
    assert_eq!(actual.email, email);

    cleanup(&rmt, &user);
}

#[test]
#[ignore]
fn get_invalid_user() {
    let rmt = remote();
    expect_http_error(rmt.user_get("foo"));
}
