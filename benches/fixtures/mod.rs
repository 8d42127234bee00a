// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use galatea::model::FencedBlock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    MediumMixed,
    LargeManyDiagrams,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumMixed => "medium_mixed",
            Self::LargeManyDiagrams => "large_many_diagrams",
        }
    }
}

/// Builds a synthetic Markdown document with interleaved prose, code blocks, and
/// Mermaid diagram blocks. Deterministic for a given case.
pub fn document(case: Case) -> String {
    let (sections, diagrams_per_section) = match case {
        Case::Small => (4, 1),
        Case::MediumMixed => (40, 2),
        Case::LargeManyDiagrams => (300, 3),
    };

    let mut out = String::new();
    for section in 0..sections {
        out.push_str(&format!("## Section {section}\n\n"));
        out.push_str("Prose line one with some filler text to pad the document.\n");
        out.push_str("Prose line two mentioning pie and graph outside any fence.\n\n");

        out.push_str("```rust\n");
        out.push_str(&format!("let section = {section};\n"));
        out.push_str("```\n\n");

        for diagram in 0..diagrams_per_section {
            out.push_str("```mermaid\nflowchart TD\n");
            for edge in 0..4 {
                out.push_str(&format!("s{section}d{diagram}n{edge}-->s{section}d{diagram}n{}\n", edge + 1));
            }
            out.push_str("```\n\n");
        }
    }
    out
}

pub fn checksum_blocks(blocks: &[FencedBlock]) -> u64 {
    let mut acc = 0u64;
    for block in blocks {
        acc = acc.wrapping_mul(131).wrapping_add(block.lang.len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(block.body.len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(block.start_line as u64);
        acc = acc.wrapping_mul(131).wrapping_add(block.end_line as u64);
    }
    acc
}
