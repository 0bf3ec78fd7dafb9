//! End-to-end tests for the credential-demo binary.
//!
//! Each test runs the binary with a controlled environment so a key set in
//! the caller's shell cannot leak into the SSH step.

use assert_cmd::Command;
use predicates::prelude::*;

const OPENSSH_KEY: &str = include_str!("fixtures/id_ed25519");
const OPENSSH_PUBLIC: &str =
    "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAICKhOTM1ngOc4uXCKy9TaJg+Yvd+PtuY6PSHbO2XsXgP";
const ENCRYPTED_KEY: &str = include_str!("fixtures/id_ed25519_encrypted");
const RSA_PKCS1_KEY: &str = include_str!("fixtures/rsa_pkcs1.pem");
const RSA_PKCS1_PUBLIC: &str = include_str!("fixtures/rsa_pkcs1.pub");

/// Helper: the binary with SSH variables cleared and a cheap bcrypt cost.
fn demo() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("credential-demo").expect("binary should exist");
    cmd.env_remove("SSH_PRIVATE_KEY")
        .env_remove("SSH_PRIVATE_KEY_PASSPHRASE")
        .env_remove("RUST_LOG")
        .args(["--bcrypt-cost", "4"]);
    cmd
}

#[test]
fn run_without_ssh_key() {
    demo()
        .assert()
        .success()
        .stdout(predicate::str::contains("Argon2 Hash: "))
        .stdout(predicate::str::contains("Bcrypt Hash: $2b$04$"))
        .stdout(predicate::str::contains("Password verification successful!"))
        .stdout(predicate::str::contains(
            "Wrong password verification failed as expected",
        ))
        .stdout(predicate::str::contains("SSH Public Key").not())
        .stderr(predicate::str::is_empty());
}

#[test]
fn default_cost_run() {
    #[allow(deprecated)]
    Command::cargo_bin("credential-demo")
        .expect("binary should exist")
        .env_remove("SSH_PRIVATE_KEY")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bcrypt Hash: $2b$10$"));
}

#[test]
fn empty_ssh_key_is_skipped() {
    demo()
        .env("SSH_PRIVATE_KEY", "")
        .assert()
        .success()
        .stdout(predicate::str::contains("SSH Public Key").not())
        .stderr(predicate::str::contains("Failed").not());
}

#[test]
fn valid_ssh_key_prints_public_key() {
    demo()
        .env("SSH_PRIVATE_KEY", OPENSSH_KEY)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "SSH Public Key: {}\n",
            OPENSSH_PUBLIC
        )));
}

#[test]
fn pkcs1_rsa_key_prints_public_key() {
    demo()
        .env("SSH_PRIVATE_KEY", RSA_PKCS1_KEY)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "SSH Public Key: {}\n",
            RSA_PKCS1_PUBLIC.trim()
        )))
        .stderr(predicate::str::contains("Failed").not());
}

#[test]
fn garbage_ssh_key_warns_and_continues() {
    demo()
        .env("SSH_PRIVATE_KEY", "not a private key")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Wrong password verification failed as expected",
        ))
        .stdout(predicate::str::contains("SSH Public Key").not())
        .stderr(predicate::str::contains("Failed to extract SSH public key"));
}

#[test]
fn encrypted_key_without_passphrase_warns() {
    demo()
        .env("SSH_PRIVATE_KEY", ENCRYPTED_KEY)
        .assert()
        .success()
        .stdout(predicate::str::contains("SSH Public Key").not())
        .stderr(predicate::str::contains("no passphrase was supplied"));
}

#[test]
fn encrypted_key_with_passphrase() {
    demo()
        .env("SSH_PRIVATE_KEY", ENCRYPTED_KEY)
        .env("SSH_PRIVATE_KEY_PASSPHRASE", "correct horse")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "SSH Public Key: ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIDqAfd4VK9nS1aOilcSevBqo7Nhfrb6rECRiLbfrlNPN",
        ));
}

#[test]
fn no_ssh_flag_skips_key() {
    demo()
        .env("SSH_PRIVATE_KEY", OPENSSH_KEY)
        .arg("--no-ssh")
        .assert()
        .success()
        .stdout(predicate::str::contains("SSH Public Key").not());
}

#[test]
fn invalid_bcrypt_cost_is_fatal() {
    demo()
        .args(["--bcrypt-cost", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Bcrypt Hash").not())
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Password hashing failed"));
}

#[test]
fn custom_passwords() {
    demo()
        .args(["--password", "hunter2", "--wrong-password", "hunter3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password verification successful!"))
        .stdout(predicate::str::contains(
            "Wrong password verification failed as expected",
        ));
}

#[test]
fn help_flag_shows_usage() {
    demo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--bcrypt-cost"))
        .stdout(predicate::str::contains("--no-ssh"));
}
