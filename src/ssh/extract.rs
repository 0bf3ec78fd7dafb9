//! Private key parsing and public key derivation
//!
//! Nothing here generates key material. A private key supplied from the
//! environment is parsed (and decrypted if a passphrase is available) and
//! its public half is rendered as a single authorized_keys line.

use ed25519_dalek::SigningKey;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use pkcs8::{DecodePrivateKey, ObjectIdentifier, PrivateKeyInfo};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::RsaPrivateKey;
use secrecy::{ExposeSecret, SecretString};
use ssh_key::public::{EcdsaPublicKey, Ed25519PublicKey, KeyData, RsaPublicKey};
use ssh_key::{PrivateKey, PublicKey};
use tracing::debug;

use crate::crypto::SecureBytes;
use crate::error::{DemoError, Result};

/// Environment variable holding the encoded private key
pub const PRIVATE_KEY_ENV: &str = "SSH_PRIVATE_KEY";

/// Environment variable holding the passphrase for an encrypted key
pub const PASSPHRASE_ENV: &str = "SSH_PRIVATE_KEY_PASSPHRASE";

const PEM_BEGIN: &str = "-----BEGIN ";
const LEGACY_ENCRYPTED_HEADER: &str = "Proc-Type: 4,ENCRYPTED";

const OID_ED25519: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");
const OID_RSA: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");
const OID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");
const OID_SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");
const OID_SECP384R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/// Private key encodings recognised by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// `openssh-key-v1`, any algorithm supported by `ssh-key`
    OpenSsh,
    /// Unencrypted PKCS#8: Ed25519, RSA, ECDSA P-256 or P-384
    Pkcs8,
    /// PKCS#1 `RSA PRIVATE KEY`
    Pkcs1Rsa,
    /// SEC1 `EC PRIVATE KEY` on P-256 or P-384
    Sec1Ec,
}

impl KeyFormat {
    /// Detect the encoding from the first PEM pre-encapsulation boundary
    pub fn detect(encoded: &str) -> Result<Self> {
        let block = pem_block(encoded)?;
        let begin = block.lines().next().unwrap_or_default().trim();
        let label = begin
            .trim_start_matches(PEM_BEGIN)
            .trim_end_matches('-')
            .trim();

        match label {
            "OPENSSH PRIVATE KEY" => Ok(KeyFormat::OpenSsh),
            "PRIVATE KEY" => Ok(KeyFormat::Pkcs8),
            "RSA PRIVATE KEY" => Ok(KeyFormat::Pkcs1Rsa),
            "EC PRIVATE KEY" => Ok(KeyFormat::Sec1Ec),
            "ENCRYPTED PRIVATE KEY" => Err(DemoError::KeyParse(
                "encrypted PKCS#8 keys are not supported".to_string(),
            )),
            other => Err(DemoError::KeyParse(format!(
                "unsupported private key encoding: {}",
                other
            ))),
        }
    }
}

/// Derive the authorized_keys line for a private key
///
/// # Arguments
/// * `encoded` - PEM text of the private key; text before the first
///   `-----BEGIN` line is ignored
/// * `passphrase` - Passphrase for an encrypted OpenSSH key, if any
///
/// # Returns
/// `<algorithm> <base64-data>` without comment or trailing newline
///
/// # Errors
/// - `KeyParse` for empty, malformed or unsupported input, or a wrong passphrase
/// - `KeyEncrypted` when the key is encrypted and no passphrase was given
pub fn extract_public_key(encoded: &str, passphrase: Option<&SecretString>) -> Result<String> {
    let block = pem_block(encoded)?;
    let format = KeyFormat::detect(block)?;
    debug!(?format, "parsing SSH private key");

    if format != KeyFormat::OpenSsh && block.contains(LEGACY_ENCRYPTED_HEADER) {
        return Err(match passphrase {
            None => DemoError::KeyEncrypted,
            Some(_) => DemoError::KeyParse(
                "passphrase-protected legacy PEM keys are not supported".to_string(),
            ),
        });
    }

    let key_data = match format {
        KeyFormat::OpenSsh => openssh_key_data(block, passphrase)?,
        KeyFormat::Pkcs8 => pkcs8_key_data(&decode_pem(block)?)?,
        KeyFormat::Pkcs1Rsa => pkcs1_key_data(&decode_pem(block)?)?,
        KeyFormat::Sec1Ec => sec1_key_data(&decode_pem(block)?)?,
    };

    PublicKey::new(key_data, "")
        .to_openssh()
        .map_err(|e| DemoError::KeyParse(e.to_string()))
}

/// Read the private key (and optional passphrase) from the environment
///
/// Returns `Ok(None)` when `SSH_PRIVATE_KEY` is unset or empty.
pub fn extract_public_key_from_env() -> Result<Option<String>> {
    let Some(encoded) = read_env(PRIVATE_KEY_ENV)? else {
        return Ok(None);
    };
    let passphrase = read_env(PASSPHRASE_ENV)?.map(SecretString::new);

    extract_public_key(&encoded, passphrase.as_ref()).map(Some)
}

fn read_env(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) if value.is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(DemoError::KeyParse(format!(
            "{} is not valid UTF-8",
            name
        ))),
    }
}

/// Slice from the first line opening a PEM block to the end of the input
fn pem_block(encoded: &str) -> Result<&str> {
    if encoded.trim().is_empty() {
        return Err(DemoError::KeyParse("empty private key".to_string()));
    }

    let mut offset = 0;
    for line in encoded.split_inclusive('\n') {
        let leading = line.len() - line.trim_start().len();
        if line.trim_start().starts_with(PEM_BEGIN) {
            return Ok(encoded[offset + leading..].trim_end());
        }
        offset += line.len();
    }

    Err(DemoError::KeyParse(
        "input is not a PEM-encoded private key".to_string(),
    ))
}

fn decode_pem(block: &str) -> Result<SecureBytes> {
    let (_, der) = pem_rfc7468::decode_vec(block.as_bytes())
        .map_err(|e| DemoError::KeyParse(format!("invalid PEM: {}", e)))?;
    Ok(SecureBytes::new(der))
}

fn openssh_key_data(encoded: &str, passphrase: Option<&SecretString>) -> Result<KeyData> {
    let key = PrivateKey::from_openssh(encoded).map_err(|e| DemoError::KeyParse(e.to_string()))?;

    let key = if key.is_encrypted() {
        let passphrase = passphrase.ok_or(DemoError::KeyEncrypted)?;
        key.decrypt(passphrase.expose_secret().as_bytes())
            .map_err(|e| DemoError::KeyParse(format!("decryption failed: {}", e)))?
    } else {
        key
    };

    Ok(key.public_key().key_data().clone())
}

/// PKCS#8: the algorithm OID picks the parser
fn pkcs8_key_data(der: &[u8]) -> Result<KeyData> {
    let info = PrivateKeyInfo::try_from(der).map_err(|e| DemoError::KeyParse(e.to_string()))?;
    let algorithm = info.algorithm.oid;
    let parse_err = |e: pkcs8::Error| DemoError::KeyParse(e.to_string());

    if algorithm == OID_ED25519 {
        let signing_key = SigningKey::from_pkcs8_der(der).map_err(parse_err)?;
        Ok(KeyData::Ed25519(Ed25519PublicKey(
            signing_key.verifying_key().to_bytes(),
        )))
    } else if algorithm == OID_RSA {
        rsa_key_data(&RsaPrivateKey::from_pkcs8_der(der).map_err(parse_err)?)
    } else if algorithm == OID_EC_PUBLIC_KEY {
        let curve = info
            .algorithm
            .parameters_oid()
            .map_err(|e| DemoError::KeyParse(format!("missing EC curve: {}", e)))?;

        if curve == OID_SECP256R1 {
            let key = p256::SecretKey::from_pkcs8_der(der).map_err(parse_err)?;
            ecdsa_key_data(key.public_key().to_encoded_point(false).as_bytes())
        } else if curve == OID_SECP384R1 {
            let key = p384::SecretKey::from_pkcs8_der(der).map_err(parse_err)?;
            ecdsa_key_data(key.public_key().to_encoded_point(false).as_bytes())
        } else {
            Err(DemoError::KeyParse(format!("unsupported EC curve: {}", curve)))
        }
    } else {
        Err(DemoError::KeyParse(format!(
            "unsupported PKCS#8 key algorithm: {}",
            algorithm
        )))
    }
}

fn pkcs1_key_data(der: &[u8]) -> Result<KeyData> {
    let key = RsaPrivateKey::from_pkcs1_der(der).map_err(|e| DemoError::KeyParse(e.to_string()))?;
    rsa_key_data(&key)
}

/// SEC1 carries the curve in its parameters, so the wrong curve fails to parse
fn sec1_key_data(der: &[u8]) -> Result<KeyData> {
    if let Ok(key) = p256::SecretKey::from_sec1_der(der) {
        return ecdsa_key_data(key.public_key().to_encoded_point(false).as_bytes());
    }
    if let Ok(key) = p384::SecretKey::from_sec1_der(der) {
        return ecdsa_key_data(key.public_key().to_encoded_point(false).as_bytes());
    }

    Err(DemoError::KeyParse(
        "malformed EC private key or unsupported curve (P-256 and P-384 only)".to_string(),
    ))
}

fn rsa_key_data(key: &RsaPrivateKey) -> Result<KeyData> {
    RsaPublicKey::try_from(&key.to_public_key())
        .map(KeyData::Rsa)
        .map_err(|e| DemoError::KeyParse(e.to_string()))
}

fn ecdsa_key_data(sec1_point: &[u8]) -> Result<KeyData> {
    EcdsaPublicKey::from_sec1_bytes(sec1_point)
        .map(KeyData::Ecdsa)
        .map_err(|e| DemoError::KeyParse(e.to_string()))
}
