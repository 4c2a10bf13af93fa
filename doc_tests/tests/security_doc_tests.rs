use std::fs;
use std::path::PathBuf;

use doc_tests::{
    contains_all_keywords, documented_error_codes, extract_section, rust_error_codes,
    section_exists, subsection_titles,
};

fn repo_file(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join(relative)
}

fn security_md() -> String {
    fs::read_to_string(repo_file("SECURITY.md")).expect("Failed to read SECURITY.md")
}

#[test]
fn test_security_md_exists() {
    assert!(
        repo_file("SECURITY.md").exists(),
        "SECURITY.md file must exist at repository root"
    );
}

#[test]
fn test_required_sections_present() {
    let content = security_md();

    for section in [
        "Overview",
        "Trust Model",
        "Threats and Mitigations",
        "Error Codes",
        "Known Limitations",
        "Operational Security Guidance",
    ] {
        assert!(
            section_exists(&content, section),
            "SECURITY.md must contain {section} section"
        );
    }
}

#[test]
fn test_threat_sections_cover_core_paths() {
    let content = security_md();
    let threats = extract_section(&content, "Threats and Mitigations");
    let titles = subsection_titles(&threats);

    for expected in [
        "Reentrant Claims",
        "Emergency Drain",
        "Custodied Asset Carve-Out",
        "Protected Asset Sweep",
    ] {
        assert!(
            titles.iter().any(|t| t == expected),
            "Threats and Mitigations must contain {expected} subsection"
        );
    }

    let reentrancy = extract_section(&threats, "Reentrant Claims");
    assert!(contains_all_keywords(&reentrancy, &["consumed", "before", "AlreadyClaimed"]));

    let drain = extract_section(&threats, "Emergency Drain");
    assert!(contains_all_keywords(&drain, &["frozen", "irreversible", "ragequit"]));

    let carve_out = extract_section(&threats, "Custodied Asset Carve-Out");
    assert!(contains_all_keywords(&carve_out, &["root", "is_claimed", "custody"]));
}

#[test]
fn test_error_table_matches_contract() {
    let content = security_md();
    let source = fs::read_to_string(repo_file("contracts/vesting_vault/src/errors.rs"))
        .expect("Failed to read vault errors.rs");

    let in_code = rust_error_codes(&source);
    let documented = documented_error_codes(&extract_section(&content, "Error Codes"));

    assert!(!in_code.is_empty(), "no error codes found in errors.rs");
    assert_eq!(
        documented, in_code,
        "SECURITY.md error table is out of sync with VaultError"
    );
}

#[test]
fn test_operational_guidance_structure() {
    let content = security_md();
    let guidance = extract_section(&content, "Operational Security Guidance");

    for subsection in ["Role Assignment", "Monitoring Recommendations", "Emergency Response"] {
        assert!(
            section_exists(&guidance, subsection),
            "Operational Security Guidance must contain {subsection} subsection"
        );
    }
}
