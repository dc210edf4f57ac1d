use assert_cmd::Command;
use predicates::prelude::*;
use std::env;
use std::sync::atomic::{AtomicU64, Ordering};

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Helper to create test command with isolated config
fn dao_cmd() -> Command {
    let mut cmd = Command::cargo_bin("dao-cli").unwrap();

    // Use unique temporary directory for each test
    let test_id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    let temp_dir = env::temp_dir().join(format!("dao-cli-test-{}-{}", std::process::id(), test_id));
    cmd.env("HOME", temp_dir.to_str().unwrap());
    cmd.env("XDG_CONFIG_HOME", temp_dir.join(".config").to_str().unwrap());
    cmd.env("USERPROFILE", temp_dir.to_str().unwrap());

    cmd
}

#[test]
fn test_cli_runs() {
    dao_cmd()
        .arg("--version")
        .assert()
        .success();
}

#[test]
fn test_cli_shows_help() {
    dao_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DAO"));
}

#[test]
fn test_config_show() {
    dao_cmd()
        .arg("config")
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration"));
}

#[test]
fn test_config_set_rpc() {
    dao_cmd()
        .arg("config")
        .arg("set-rpc")
        .arg("http://127.0.0.1:8545")
        .arg("--chain-id")
        .arg("31337")
        .assert()
        .success()
        .stdout(predicate::str::contains("8545"));
}

#[test]
fn test_config_set_rpc_invalid_scheme() {
    dao_cmd()
        .arg("config")
        .arg("set-rpc")
        .arg("ftp://example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid RPC URL"));
}

#[test]
fn test_config_set_contracts() {
    dao_cmd()
        .arg("config")
        .arg("set-contracts")
        .arg("--dao")
        .arg("0x7ef2e0048f5bAeDe046f6BF797943daF4ED8CB47")
        .arg("--nft")
        .arg("0x01BE23585060835E02B77ef475b0Cc51aA1e0709")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contract addresses saved"));
}

#[test]
fn test_config_set_contracts_invalid_address() {
    dao_cmd()
        .arg("config")
        .arg("set-contracts")
        .arg("--dao")
        .arg("not-an-address")
        .arg("--nft")
        .arg("0x01BE23585060835E02B77ef475b0Cc51aA1e0709")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid address"));
}

#[test]
fn test_status_requires_wallet() {
    dao_cmd()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet not found"));
}

#[test]
fn test_proposals_requires_wallet() {
    dao_cmd()
        .arg("proposals")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet not found"));
}

#[test]
fn test_create_proposal_requires_token_id() {
    dao_cmd()
        .arg("create-proposal")
        .assert()
        .failure();
}

#[test]
fn test_create_proposal_requires_wallet() {
    dao_cmd()
        .arg("create-proposal")
        .arg("--token-id")
        .arg("5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet not found"));
}

#[test]
fn test_vote_requires_args() {
    dao_cmd()
        .arg("vote")
        .assert()
        .failure();
}

#[test]
fn test_vote_rejects_invalid_choice() {
    // The choice is validated before any wallet or network access
    dao_cmd()
        .arg("vote")
        .arg("--proposal-id")
        .arg("0")
        .arg("--choice")
        .arg("maybe")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid vote choice"));
}

#[test]
fn test_vote_requires_wallet() {
    dao_cmd()
        .arg("vote")
        .arg("--proposal-id")
        .arg("0")
        .arg("--choice")
        .arg("yay")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet not found"));
}

#[test]
fn test_execute_requires_wallet() {
    dao_cmd()
        .arg("execute")
        .arg("--proposal-id")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet not found"));
}

#[test]
fn test_withdraw_requires_wallet() {
    dao_cmd()
        .arg("withdraw")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet not found"));
}

#[test]
fn test_wallet_create_command() {
    dao_cmd()
        .arg("wallet")
        .arg("create")
        .assert()
        .success()
        .stdout(predicate::str::contains("wallet created"));
}

#[test]
fn test_wallet_address_without_wallet() {
    dao_cmd()
        .arg("wallet")
        .arg("address")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wallet not found"));
}

#[test]
fn test_wallet_import_requires_key() {
    dao_cmd()
        .arg("wallet")
        .arg("import")
        .assert()
        .failure();
}

#[test]
fn test_wallet_import_invalid_key() {
    dao_cmd()
        .arg("wallet")
        .arg("import")
        .arg("--private-key")
        .arg("zz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("private key"));
}

#[test]
fn test_wallet_import_then_address() {
    // Both invocations share one isolated config dir
    let home = tempfile::TempDir::new().unwrap();

    let mut import = Command::cargo_bin("dao-cli").unwrap();
    import.env("HOME", home.path());
    import.env("XDG_CONFIG_HOME", home.path().join(".config"));
    import
        .arg("wallet")
        .arg("import")
        .arg("--private-key")
        .arg("0x0000000000000000000000000000000000000000000000000000000000000001")
        .assert()
        .success()
        .stdout(predicate::str::contains("imported"));

    let mut address = Command::cargo_bin("dao-cli").unwrap();
    address.env("HOME", home.path());
    address.env("XDG_CONFIG_HOME", home.path().join(".config"));
    address
        .arg("wallet")
        .arg("address")
        .assert()
        .success()
        // Well-known address of private key 0x...01
        .stdout(predicate::str::contains("0x7e5f4552091a69125d5dfcb7b8c2659029395bdf"));
}

#[test]
fn test_invalid_command() {
    dao_cmd()
        .arg("nonexistent-command")
        .assert()
        .failure();
}
