use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

fn swapkeeper() -> Command {
    let mut cmd = Command::cargo_bin("swapkeeper").expect("binary built");
    cmd.env_remove("WALLET_PRIVATE_KEY")
        .env_remove("LOCALHOST_LIMIT_SWAPPER_ADDRESS");
    cmd
}

#[test]
fn help_lists_commands() {
    swapkeeper()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("execute"))
        .stdout(predicate::str::contains("orders"));
}

#[test]
fn check_config_accepts_valid_file() {
    let file = write_temp_config(
        r#"
[network]
rpc_url = "http://127.0.0.1:8545"
chain_id = 31337

[swapper]
address = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
"#,
    );

    swapkeeper()
        .args(["check", "config", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("localhost"))
        .stdout(predicate::str::contains("WALLET_PRIVATE_KEY is not set"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let file = write_temp_config(
        r#"
[keeper]
interval_secs = 0
"#,
    );

    swapkeeper()
        .args(["check", "config", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval_secs"));
}

#[test]
fn wallet_address_requires_private_key() {
    let file = write_temp_config("[network]\nrpc_url = \"http://127.0.0.1:8545\"\n");

    swapkeeper()
        .args(["wallet", "address", "--config"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("WALLET_PRIVATE_KEY"));
}

#[test]
fn wallet_address_derives_from_env_key() {
    let file = write_temp_config("[network]\nrpc_url = \"http://127.0.0.1:8545\"\n");

    swapkeeper()
        .env(
            "WALLET_PRIVATE_KEY",
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
        )
        .args(["wallet", "address", "--config"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
        ));
}
