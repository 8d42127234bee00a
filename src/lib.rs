// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea — fenced-block extraction and Mermaid pre-render gating for Markdown previews.
//!
//! The editor/preview layer hands in a complete document string. This crate scans it for
//! fenced code blocks, narrows them to Mermaid diagram blocks with per-call handles,
//! rewrites the document with placeholder markers the preview composer can splice rendered
//! output into, and gates diagram source before it reaches the sandboxed renderer.
//!
//! Everything here is a synchronous pure function over its string input: no I/O, no shared
//! state, no panics on malformed documents. Anomalies are values (`Result`s, warnings, an
//! `Unknown` kind), never exceptions, because this code sits on the per-keystroke preview
//! path and must not abort the caller.

pub mod classify;
pub mod extract;
pub mod model;
pub mod scan;
pub mod validate;

pub use classify::DiagramKind;
pub use extract::{
    extract_diagrams, placeholder_marker, substitute, substitute_with, Substitution,
    DIAGRAM_LANG,
};
pub use model::{BlockId, BlockIdError, DiagramBlock, FencedBlock};
pub use scan::{scan, scan_with_warnings, ScanWarning, FENCE, PLAIN_LANG};
pub use validate::{check, validate, DiagramSourceError, Validation, DIAGRAM_TYPE_KEYWORDS};
