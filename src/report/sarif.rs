// src/report/sarif.rs
//! SARIF 2.1.0 rendering: one result per duplicate group, one location per
//! member declaration.

use crate::decl::DuplicateGroup;
use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct SarifDoc {
    version: &'static str,
    runs: Vec<Run>,
}

#[derive(Serialize)]
struct Run {
    tool: Tool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
struct Tool {
    driver: Driver,
}

#[derive(Serialize)]
struct Driver {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct SarifResult {
    message: Message,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct Message {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: PhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhysicalLocation {
    artifact_location: ArtifactLocation,
    region: Region,
}

#[derive(Serialize)]
struct ArtifactLocation {
    uri: String,
}

#[derive(Serialize)]
struct Region {
    snippet: Snippet,
}

#[derive(Serialize)]
struct Snippet {
    text: String,
}

/// Renders groups as a SARIF 2.1.0 document.
///
/// # Errors
/// Returns error if serialization fails.
pub fn render(groups: &[DuplicateGroup]) -> Result<String> {
    let results = groups
        .iter()
        .map(|g| SarifResult {
            message: Message {
                text: format!("Similarity: {}", g.similarity),
            },
            locations: g
                .decls
                .iter()
                .map(|d| SarifLocation {
                    physical_location: PhysicalLocation {
                        artifact_location: ArtifactLocation {
                            uri: d.location.file.clone(),
                        },
                        region: Region {
                            snippet: Snippet {
                                text: d.location.name.clone(),
                            },
                        },
                    },
                })
                .collect(),
        })
        .collect();

    let doc = SarifDoc {
        version: "2.1.0",
        runs: vec![Run {
            tool: Tool {
                driver: Driver {
                    name: "decldup",
                    version: env!("CARGO_PKG_VERSION"),
                },
            },
            results,
        }],
    };

    Ok(serde_json::to_string_pretty(&doc)?)
}
