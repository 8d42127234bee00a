// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Best-effort diagram dialect derived from the first non-blank line.
///
/// Used only to hint the external renderer; it has no bearing on validation. Anything
/// unrecognized maps to [`DiagramKind::Unknown`] rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    Class,
    State,
    Er,
    Journey,
    Gantt,
    Pie,
    Git,
    Mindmap,
    Timeline,
    Quadrant,
    Unknown,
}

// Longest declarations first so `gitgraph` is not shadowed by shorter matches and the
// `*diagram` headers resolve before bare keywords.
const DECLARATIONS: &[(&str, DiagramKind)] = &[
    ("sequencediagram", DiagramKind::Sequence),
    ("quadrantchart", DiagramKind::Quadrant),
    ("classdiagram", DiagramKind::Class),
    ("statediagram", DiagramKind::State),
    ("erdiagram", DiagramKind::Er),
    ("gitgraph", DiagramKind::Git),
    ("flowchart", DiagramKind::Flowchart),
    ("timeline", DiagramKind::Timeline),
    ("journey", DiagramKind::Journey),
    ("mindmap", DiagramKind::Mindmap),
    ("graph", DiagramKind::Flowchart),
    ("gantt", DiagramKind::Gantt),
    ("pie", DiagramKind::Pie),
];

impl DiagramKind {
    /// Canonical short tag handed to the renderer.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Flowchart => "flowchart",
            Self::Sequence => "sequence",
            Self::Class => "class",
            Self::State => "state",
            Self::Er => "er",
            Self::Journey => "journey",
            Self::Gantt => "gantt",
            Self::Pie => "pie",
            Self::Git => "git",
            Self::Mindmap => "mindmap",
            Self::Timeline => "timeline",
            Self::Quadrant => "quadrant",
            Self::Unknown => "unknown",
        }
    }

    /// Maps the first non-blank line's recognized prefix to a kind.
    ///
    /// Pure and total: blank input or an unrecognized declaration yields `Unknown`.
    pub fn classify(code: &str) -> Self {
        let Some(first_line) = first_non_blank_line(code) else {
            return Self::Unknown;
        };
        let lowered = first_line.trim().to_lowercase();

        DECLARATIONS
            .iter()
            .find(|(prefix, _)| lowered.starts_with(prefix))
            .map(|&(_, kind)| kind)
            .unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

pub(crate) fn first_non_blank_line(code: &str) -> Option<&str> {
    code.lines().find(|line| !line.trim().is_empty())
}
