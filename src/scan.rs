// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Single-pass line scanner for fenced code blocks.
//!
//! A two-state machine (outside-block / inside-block) walked top to bottom over the
//! document's lines. The scanner is total: malformed input never raises an error, an
//! unterminated trailing fence is simply absent from the output (and reported on the
//! optional warning channel of [`scan_with_warnings`]).

use std::fmt;

use memchr::memchr_iter;
use smol_str::SmolStr;

use crate::model::FencedBlock;

/// The fence delimiter that opens and closes a block.
pub const FENCE: &str = "```";

/// Language tag recorded when an opening fence carries none.
pub const PLAIN_LANG: &str = "plain";

/// Splits on `\n` only, keeping any `\r` inside the line slices, so rejoining with
/// `\n` reconstructs the original text byte-for-byte.
pub(crate) fn split_lines(document: &str) -> Vec<&str> {
    let bytes = document.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0usize;
    for newline in memchr_iter(b'\n', bytes) {
        lines.push(&document[start..newline]);
        start = newline + 1;
    }
    lines.push(&document[start..]);
    lines
}

/// A non-fatal observation made while scanning.
///
/// Warnings never change what [`scan`] returns; they exist so a linting caller can
/// surface malformed input without the default contract giving up its total,
/// never-errors shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanWarning {
    UnterminatedFence { start_line: usize, lang: SmolStr },
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedFence { start_line, lang } => write!(
                f,
                "fence opened on line {start_line} (lang '{lang}') is never closed; block dropped"
            ),
        }
    }
}

struct OpenFence<'a> {
    lang: SmolStr,
    start_line: usize,
    opening: &'a str,
    body_lines: Vec<&'a str>,
}

fn close_block(fence: OpenFence<'_>, closing: &str, end_line: usize) -> FencedBlock {
    let body = fence.body_lines.join("\n");

    let mut raw = String::with_capacity(fence.opening.len() + body.len() + closing.len() + 2);
    raw.push_str(fence.opening);
    raw.push('\n');
    for line in &fence.body_lines {
        raw.push_str(line);
        raw.push('\n');
    }
    raw.push_str(closing);

    FencedBlock {
        lang: fence.lang,
        body,
        start_line: fence.start_line,
        end_line,
        raw,
    }
}

/// Scans a document top to bottom and returns every well-formed fenced block, ordered
/// by `start_line` and pairwise non-overlapping.
pub fn scan(document: &str) -> Vec<FencedBlock> {
    scan_with_warnings(document).0
}

/// Like [`scan`], with an additional warning channel for malformed input.
pub fn scan_with_warnings(document: &str) -> (Vec<FencedBlock>, Vec<ScanWarning>) {
    let mut blocks = Vec::new();
    let mut warnings = Vec::new();
    let mut open: Option<OpenFence<'_>> = None;

    for (line_no, line) in split_lines(document).into_iter().enumerate() {
        let trimmed = line.trim();
        match open {
            // Only the bare delimiter closes a block; a fence line carrying a tag is
            // body text while inside (nesting is not supported).
            Some(_) if trimmed == FENCE => {
                let fence = open.take().expect("matched an open fence");
                blocks.push(close_block(fence, line, line_no));
            }
            Some(ref mut fence) => fence.body_lines.push(line),
            None => {
                if let Some(rest) = trimmed.strip_prefix(FENCE) {
                    let tag = rest.trim();
                    let lang = if tag.is_empty() {
                        SmolStr::new_static(PLAIN_LANG)
                    } else {
                        SmolStr::new(tag)
                    };
                    open = Some(OpenFence {
                        lang,
                        start_line: line_no,
                        opening: line,
                        body_lines: Vec::new(),
                    });
                }
            }
        }
    }

    if let Some(fence) = open {
        warnings.push(ScanWarning::UnterminatedFence {
            start_line: fence.start_line,
            lang: fence.lang,
        });
    }

    (blocks, warnings)
}
