// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Defensive pre-render gate for diagram source.
//!
//! The sandboxed renderer only ever receives code that passed [`validate`]. The gate
//! never panics and never throws; every anomaly is a value.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::classify::first_non_blank_line;

/// Diagram-type keywords accepted on the first non-blank line of diagram source
/// (matched as lower-cased substrings).
pub const DIAGRAM_TYPE_KEYWORDS: &[&str] = &[
    "flowchart",
    "graph",
    "sequencediagram",
    "classdiagram",
    "statediagram",
    "erdiagram",
    "journey",
    "gantt",
    "pie",
    "gitgraph",
    "mindmap",
    "timeline",
    "quadrantchart",
];

const SCRIPT_TAG_MARKER: &str = "<script";
const JAVASCRIPT_SCHEME: &str = "javascript:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramSourceError {
    Empty,
    UnsafeContent { marker: &'static str },
    UnknownDiagramType { first_line: String },
}

impl fmt::Display for DiagramSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty diagram code"),
            Self::UnsafeContent { marker } => {
                write!(f, "diagram code contains disallowed content ({marker})")
            }
            Self::UnknownDiagramType { first_line } => write!(
                f,
                "unrecognized diagram type on first line {first_line:?} (supported keywords: {})",
                DIAGRAM_TYPE_KEYWORDS.join(", ")
            ),
        }
    }
}

impl std::error::Error for DiagramSourceError {}

/// Gates diagram source before it is handed to the renderer.
///
/// Policy, in order: trimmed-empty input is rejected; the injection guard rejects any
/// occurrence of a script tag or a `javascript:` scheme regardless of every other
/// check; otherwise the first non-blank line must mention a recognized diagram-type
/// keyword.
///
/// Keyword matching is a deliberately unanchored substring test: a first line that
/// merely mentions a keyword passes. [`DiagramKind::classify`](crate::DiagramKind::classify)
/// is the anchored counterpart for renderer hinting.
pub fn validate(code: &str) -> Result<(), DiagramSourceError> {
    if code.trim().is_empty() {
        return Err(DiagramSourceError::Empty);
    }

    // The injection guard outranks type recognition: a recognized first line must not
    // smuggle script content past the sandboxed renderer.
    let lowered = code.to_lowercase();
    if lowered.contains(SCRIPT_TAG_MARKER) {
        return Err(DiagramSourceError::UnsafeContent {
            marker: SCRIPT_TAG_MARKER,
        });
    }
    if lowered.contains(JAVASCRIPT_SCHEME) {
        return Err(DiagramSourceError::UnsafeContent {
            marker: JAVASCRIPT_SCHEME,
        });
    }

    let first_line = first_non_blank_line(code).unwrap_or_default();
    let lowered_first = first_line.to_lowercase();
    if DIAGRAM_TYPE_KEYWORDS
        .iter()
        .any(|keyword| lowered_first.contains(keyword))
    {
        return Ok(());
    }

    Err(DiagramSourceError::UnknownDiagramType {
        first_line: first_line.trim().to_owned(),
    })
}

/// Serializable verdict handed across the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// [`validate`] flattened into a [`Validation`] record for callers that forward the
/// verdict to the UI instead of branching on the error kind.
pub fn check(code: &str) -> Validation {
    match validate(code) {
        Ok(()) => Validation {
            valid: true,
            error: None,
        },
        Err(err) => Validation {
            valid: false,
            error: Some(err.to_string()),
        },
    }
}
