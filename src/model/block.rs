// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::ids::BlockId;

/// A fenced code block lifted verbatim from a document.
///
/// Line numbers are zero-based indices into the document's `\n`-separated lines;
/// `start_line` is the opening fence line and `end_line` the closing fence line,
/// so `start_line <= end_line` always holds. `raw` is the exact original text of
/// the span including both fence lines: joining every block's `raw` back at its
/// recorded range reconstructs the source byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FencedBlock {
    pub lang: SmolStr,
    pub body: String,
    pub start_line: usize,
    pub end_line: usize,
    pub raw: String,
}

impl FencedBlock {
    /// Number of document lines the block spans, fences included.
    pub fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line).saturating_add(1)
    }
}

/// A fenced block whose language tag named the diagram dialect, plus the handle
/// assigned to it for this extraction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramBlock {
    pub id: BlockId,
    #[serde(flatten)]
    pub block: FencedBlock,
}

impl DiagramBlock {
    pub fn body(&self) -> &str {
        &self.block.body
    }

    pub fn start_line(&self) -> usize {
        self.block.start_line
    }

    pub fn end_line(&self) -> usize {
        self.block.end_line
    }
}
