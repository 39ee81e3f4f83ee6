//! End-to-end extraction scenarios over synthetic certificate buffers.

mod common;

use base64::Engine;
use common::{expected_blob, synthetic_der, test_key, to_pem, ED25519_OID};
use ed25519_ssh_extract::{
    certificate_to_authorized_key, convert_certificate_file, decode_blob, encode_blob,
    extract_public_key, normalize, ConvertWorkflow, Ed25519PublicKey, ExtractError, InputFormat,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn synthetic_der_produces_expected_line() {
    let key = test_key();
    let line = certificate_to_authorized_key(&synthetic_der(&key), "CN=SSH key").unwrap();

    let expected = format!(
        "ssh-ed25519 {} CN=SSH key",
        base64::engine::general_purpose::STANDARD.encode(expected_blob(&key))
    );
    assert_eq!(line.to_string(), expected);
}

#[test]
fn extracted_key_is_always_32_bytes() {
    let key = test_key();
    for raw in [synthetic_der(&key), to_pem(&synthetic_der(&key))] {
        let der = normalize(&raw).unwrap();
        let extracted = extract_public_key(&der).unwrap();
        assert_eq!(extracted.as_bytes().len(), 32);
        assert_eq!(extracted.as_bytes(), &key);
    }
}

#[test]
fn pem_and_der_inputs_give_identical_output() {
    let temp_dir = TempDir::new().unwrap();
    let der = synthetic_der(&test_key());
    let der_path = temp_dir.path().join("cert.der");
    let pem_path = temp_dir.path().join("cert.pem");
    fs::write(&der_path, &der).unwrap();
    fs::write(&pem_path, to_pem(&der)).unwrap();

    let workflow = ConvertWorkflow::default();
    let from_der = workflow
        .run(&der_path, temp_dir.path().join("der.pub"), false)
        .unwrap();
    let from_pem = workflow
        .run(&pem_path, temp_dir.path().join("pem.pub"), false)
        .unwrap();

    assert_eq!(from_der.format, InputFormat::Der);
    assert_eq!(from_pem.format, InputFormat::Pem);
    assert_eq!(from_der.key, from_pem.key);
    assert_eq!(from_der.line, from_pem.line);
    assert_eq!(
        fs::read(temp_dir.path().join("der.pub")).unwrap(),
        fs::read(temp_dir.path().join("pem.pub")).unwrap()
    );
}

#[test]
fn blob_round_trip_recovers_name_and_key() {
    let key = Ed25519PublicKey::from_bytes(test_key());
    let (name, bytes) = decode_blob(&encode_blob(&key)).unwrap();
    assert_eq!(name, "ssh-ed25519");
    assert_eq!(bytes, test_key());
}

#[test]
fn deleting_the_oid_is_not_found() {
    let mut der = synthetic_der(&test_key());
    let pos = der
        .windows(ED25519_OID.len())
        .position(|w| w == ED25519_OID)
        .unwrap();
    der.drain(pos..pos + ED25519_OID.len());

    match extract_public_key(&der) {
        Err(ExtractError::NotFound(msg)) => assert!(msg.contains("algorithm identifier absent")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn truncated_bit_string_is_a_length_error() {
    let der = synthetic_der(&test_key());
    let header = der
        .windows(3)
        .position(|w| w == [0x03, 0x21, 0x00])
        .unwrap();
    let truncated = &der[..header + 3 + 10];

    match extract_public_key(truncated) {
        Err(ExtractError::Length { actual }) => assert_eq!(actual, 10),
        other => panic!("expected Length, got {other:?}"),
    }
}

#[test]
fn input_without_oid_writes_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("rsa.der");
    let output = temp_dir.path().join("out.pub");
    fs::write(&input, [0x30, 0x0d, 0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01, 0x05, 0x00]).unwrap();

    let err = convert_certificate_file(&input, &output).unwrap_err();
    assert!(matches!(err, ExtractError::NotFound(_)));
    assert!(!output.exists());
}

#[test]
fn malformed_pem_body_writes_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.pem");
    let output = temp_dir.path().join("out.pub");
    fs::write(
        &input,
        "-----BEGIN CERTIFICATE-----\nMIIB$$$not-base64\n-----END CERTIFICATE-----\n",
    )
    .unwrap();

    let err = convert_certificate_file(&input, &output).unwrap_err();
    assert!(matches!(err, ExtractError::Decode(_)));
    assert!(!output.exists());
}

#[test]
fn output_file_is_a_single_newline_terminated_line() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("cert.pem");
    let output = temp_dir.path().join("key.pub");
    fs::write(&input, to_pem(&synthetic_der(&test_key()))).unwrap();

    let line = convert_certificate_file(&input, &output).unwrap();
    let written = fs::read_to_string(&output).unwrap();

    assert_eq!(written, format!("{line}\n"));
    assert_eq!(written.lines().count(), 1);
    assert!(written.starts_with("ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAI"));
    assert!(written.trim_end().ends_with(" CN=SSH key"));
}
