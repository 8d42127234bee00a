// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram extraction and placeholder substitution.
//!
//! [`extract_diagrams`] narrows the scanner's output to Mermaid blocks and hands each a
//! per-call handle. [`substitute`] rewrites the document with one inert marker line per
//! diagram block; the preview composer later locates those markers and splices in
//! rendered output keyed by block id.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::{BlockId, DiagramBlock};
use crate::scan::{scan, split_lines};

/// Language tag that marks a fenced block as diagram source (matched case-insensitively).
pub const DIAGRAM_LANG: &str = "mermaid";

/// Scans the document and keeps only diagram blocks, in document order, each with a
/// freshly assigned [`BlockId`].
///
/// Ids combine the block's ordinal position with a wall-clock disambiguator: unique
/// within this call, not stable across calls (see [`BlockId`]).
pub fn extract_diagrams(document: &str) -> Vec<DiagramBlock> {
    let millis = epoch_millis();
    scan(document)
        .into_iter()
        .filter(|block| block.lang.eq_ignore_ascii_case(DIAGRAM_LANG))
        .enumerate()
        .map(|(ordinal, block)| DiagramBlock {
            id: assign_block_id(ordinal, millis),
            block,
        })
        .collect()
}

fn epoch_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or(0)
}

fn assign_block_id(ordinal: usize, millis: u128) -> BlockId {
    BlockId::new(format!("diagram-{ordinal}-{millis}")).expect("ordinal/millis id is a valid handle")
}

/// The default inert marker line standing in for an extracted diagram block.
///
/// An HTML comment is invisible to Markdown renderers, so an un-spliced marker never
/// leaks visible text into the preview.
pub fn placeholder_marker(id: &BlockId) -> String {
    format!("<!-- galatea:diagram {id} -->")
}

/// Result of rewriting a document: the processed text plus the extracted blocks
/// (exactly the [`extract_diagrams`] output, ids included, otherwise untouched).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub document: String,
    pub blocks: Vec<DiagramBlock>,
}

/// Rewrites the document with the default [`placeholder_marker`] per diagram block.
pub fn substitute(document: &str) -> Substitution {
    substitute_with(document, |block| placeholder_marker(&block.id))
}

/// Rewrites the document, collapsing each diagram block's line range to the single
/// line produced by `placeholder`. Content outside replaced ranges is untouched.
pub fn substitute_with<F>(document: &str, mut placeholder: F) -> Substitution
where
    F: FnMut(&DiagramBlock) -> String,
{
    let blocks = extract_diagrams(document);

    let mut lines: Vec<String> = split_lines(document)
        .into_iter()
        .map(str::to_owned)
        .collect();

    // Replacement runs last block to first. Collapsing a block to one line shifts
    // every line index below it, so an earlier block's recorded range stays a valid
    // offset only while the lines above it are untouched. Ascending order would
    // corrupt the not-yet-processed blocks' positions.
    for block in blocks.iter().rev() {
        let marker = placeholder(block);
        lines.splice(
            block.start_line()..=block.end_line(),
            std::iter::once(marker),
        );
    }

    Substitution {
        document: lines.join("\n"),
        blocks,
    }
}
