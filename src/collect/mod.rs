pub mod interactive;

use crate::error::{AuditError, Result};
use crate::types::catalog::Catalog;
use crate::types::response::ResponseSet;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional metadata block at the head of a responses file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// On-disk responses file: an optional `[audit]` block plus judgments keyed
/// bucket, factor, criterion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponsesFile {
    #[serde(default)]
    pub audit: AuditMeta,
    #[serde(default)]
    pub judgments: ResponseSet,
}

/// Reads a responses file and rejects entries the catalog does not define.
/// Completeness is not checked here; the scorer owns that and reports every
/// gap at once.
pub fn load(path: &Path, catalog: &Catalog) -> Result<ResponsesFile> {
    if !path.exists() {
        return Err(AuditError::PathNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    let file: ResponsesFile = toml::from_str(&content)
        .map_err(|e| AuditError::ResponsesParse(format!("{}: {}", path.display(), e)))?;

    let unknown = file.judgments.unknown_paths(catalog);
    if !unknown.is_empty() {
        return Err(AuditError::UnknownResponses(unknown.join(", ")));
    }
    tracing::debug!(
        "loaded {} judgment(s) from {}",
        file.judgments.len(),
        path.display()
    );
    Ok(file)
}

/// Writes a collected response set back out in the responses-file schema.
pub fn save(path: &Path, file: &ResponsesFile) -> Result<()> {
    let content = toml::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::response::Judgment;
    use std::fs;
    use tempfile::TempDir;

    fn tiny_catalog() -> Catalog {
        toml::from_str(
            r#"
[[bucket]]
name = "On-Page"
weight = 1.0

[[bucket.factor]]
name = "H1 Tag"

[[bucket.factor.criterion]]
name = "Contains primary keyword"
weight = 9

[[bucket.factor.criterion]]
name = "Contains proper length"
weight = 8
"#,
        )
        .expect("catalog should parse")
    }

    #[test]
    fn loads_judgments_and_subject() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("responses.toml");
        fs::write(
            &path,
            r#"
[audit]
subject = "https://example.com/pricing"

[judgments."On-Page"."H1 Tag"]
"Contains primary keyword" = "yes"
"Contains proper length" = "n/a"
"#,
        )
        .expect("responses file should write");

        let file = load(&path, &tiny_catalog()).expect("responses should load");
        assert_eq!(
            file.audit.subject.as_deref(),
            Some("https://example.com/pricing")
        );
        assert_eq!(
            file.judgments.get("On-Page", "H1 Tag", "Contains primary keyword"),
            Some(Judgment::Yes)
        );
        assert_eq!(
            file.judgments.get("On-Page", "H1 Tag", "Contains proper length"),
            Some(Judgment::NotApplicable)
        );
    }

    #[test]
    fn subject_block_is_optional() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("responses.toml");
        fs::write(
            &path,
            r#"
[judgments."On-Page"."H1 Tag"]
"Contains primary keyword" = "no"
"#,
        )
        .expect("responses file should write");

        let file = load(&path, &tiny_catalog()).expect("responses should load");
        assert!(file.audit.subject.is_none());
        assert_eq!(file.judgments.len(), 1);
    }

    #[test]
    fn unknown_entries_are_rejected_with_their_paths() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("responses.toml");
        fs::write(
            &path,
            r#"
[judgments."On-Page"."Meta Title"]
"Contains proper length" = "yes"
"#,
        )
        .expect("responses file should write");

        let err = load(&path, &tiny_catalog()).expect_err("unknown path should be rejected");
        match err {
            AuditError::UnknownResponses(paths) => {
                assert!(paths.contains("On-Page / Meta Title / Contains proper length"));
            }
            other => panic!("expected UnknownResponses, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_a_path_error() {
        let err = load(Path::new("/nonexistent/responses.toml"), &tiny_catalog())
            .expect_err("missing file should fail");
        assert!(matches!(err, AuditError::PathNotFound(_)));
    }

    #[test]
    fn malformed_toml_reports_the_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("responses.toml");
        fs::write(&path, "judgments = 3").expect("responses file should write");

        let err = load(&path, &tiny_catalog()).expect_err("malformed file should fail");
        match err {
            AuditError::ResponsesParse(message) => {
                assert!(message.contains("responses.toml"));
            }
            other => panic!("expected ResponsesParse, got {other:?}"),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("responses.toml");
        let catalog = tiny_catalog();

        let mut judgments = ResponseSet::new();
        judgments.record("On-Page", "H1 Tag", "Contains primary keyword", Judgment::Yes);
        judgments.record("On-Page", "H1 Tag", "Contains proper length", Judgment::No);
        let file = ResponsesFile {
            audit: AuditMeta {
                subject: Some("https://example.com".to_string()),
            },
            judgments,
        };

        save(&path, &file).expect("responses should save");
        let reloaded = load(&path, &catalog).expect("saved responses should load");
        assert_eq!(reloaded.audit.subject.as_deref(), Some("https://example.com"));
        assert_eq!(
            reloaded.judgments.get("On-Page", "H1 Tag", "Contains proper length"),
            Some(Judgment::No)
        );
        assert!(reloaded.judgments.missing_paths(&catalog).is_empty());
    }
}
