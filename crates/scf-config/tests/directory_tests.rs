//! Directory provider behaviour against a real filesystem tree.

use pretty_assertions::assert_eq;
use scf_config::{ConfigError, ConfigProvider, DirectoryProvider, DocumentKind};
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn populated_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "industries/financial_services.json",
        r#"{
            "typical_switching_timeline": "9-15_months",
            "timeline_phases": {
                "phase_1_foundation": "6_weeks",
                "phase_2_parallel_operation": "12_weeks"
            }
        }"#,
    );
    write(
        dir.path(),
        "industries/healthcare.yml",
        "success_metrics:\n  - hipaa_compliance_maintained\n",
    );
    write(
        dir.path(),
        "competitors/incumbent_leader.yaml",
        "competitor_type: incumbent\ncompetitive_assessment:\n  vulnerabilities:\n    - category: pricing\n      description: rigid contracts\n      severity: 7\n      exploitation_strategy: flexible terms\n",
    );
    write(dir.path(), "competitors/README.md", "# notes");
    dir
}

#[tokio::test]
async fn loads_json_and_yaml_documents_by_stem() {
    let dir = populated_root();
    let provider = DirectoryProvider::load(dir.path()).await.unwrap();

    assert_eq!(provider.document_count(), 3);
    assert_eq!(
        provider.keys(DocumentKind::Industry),
        vec!["financial_services".to_string(), "healthcare".to_string()]
    );
    assert_eq!(
        provider.keys(DocumentKind::Competitor),
        vec!["incumbent_leader".to_string()]
    );
}

#[tokio::test]
async fn phase_order_follows_the_file() {
    let dir = populated_root();
    let provider = DirectoryProvider::load(dir.path()).await.unwrap();

    let industry = provider.get_industry_config("financial_services").unwrap();
    let phases = industry.string_map("timeline_phases").unwrap().unwrap();
    let names: Vec<&str> = phases.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(names, vec!["phase_1_foundation", "phase_2_parallel_operation"]);
}

#[tokio::test]
async fn yaml_competitor_exposes_vulnerabilities() {
    let dir = populated_root();
    let provider = DirectoryProvider::load(dir.path()).await.unwrap();

    let profile = provider.get_competitor_profile("incumbent_leader").unwrap();
    let vulnerabilities = profile
        .sequence("competitive_assessment.vulnerabilities")
        .unwrap()
        .unwrap();
    assert_eq!(vulnerabilities.len(), 1);
    assert_eq!(vulnerabilities[0]["severity"], 7);
}

#[tokio::test]
async fn missing_kind_directory_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "industries/retail.json", "{}");

    let provider = DirectoryProvider::load(dir.path()).await.unwrap();
    assert!(provider.keys(DocumentKind::Competitor).is_empty());
    assert!(provider.get_industry_config("retail").unwrap().is_empty());
}

#[tokio::test]
async fn invalid_document_fails_load_with_path() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "industries/broken.json", "{\"switching_barriers\": [");

    let err = DirectoryProvider::load(dir.path()).await.unwrap_err();
    match &err {
        ConfigError::Syntax { path, .. } => assert!(path.ends_with("industries/broken.json")),
        other => panic!("expected Syntax, got {other:?}"),
    }
}

#[tokio::test]
async fn same_stem_in_two_formats_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "industries/retail.json", "{}");
    write(dir.path(), "industries/retail.yaml", "success_metrics: []\n");

    let err = DirectoryProvider::load(dir.path()).await.unwrap_err();
    match &err {
        ConfigError::DuplicateKey { kind, key, first, second } => {
            assert_eq!(*kind, DocumentKind::Industry);
            assert_eq!(key, "retail");
            let mut names = [first, second].map(|p| p.file_name().unwrap().to_owned());
            names.sort();
            assert_eq!(names, ["retail.json", "retail.yaml"].map(std::ffi::OsString::from));
        }
        other => panic!("expected DuplicateKey, got {other:?}"),
    }
}

#[tokio::test]
async fn same_stem_across_kinds_is_allowed() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "industries/acme.json", "{}");
    write(dir.path(), "competitors/acme.yaml", "competitor_type: niche\n");

    let provider = DirectoryProvider::load(dir.path()).await.unwrap();
    assert_eq!(provider.document_count(), 2);
}
