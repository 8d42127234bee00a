// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Handle assigned to a diagram block during one extraction call.
///
/// The handle is unique only within the call that produced it: the disambiguating
/// component is time-derived, so re-parsing the same unchanged document yields
/// different ids. Consumers keying persistent state off these ids must tolerate
/// id churn across re-parses.
///
/// An id must be a non-empty token without whitespace, because it is embedded
/// verbatim into single-line placeholder markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlockId(SmolStr);

impl BlockId {
    pub fn new(value: impl Into<SmolStr>) -> Result<Self, BlockIdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(BlockIdError::Empty);
        }
        if value.chars().any(char::is_whitespace) {
            return Err(BlockIdError::ContainsWhitespace);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BlockId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for BlockId {
    type Err = BlockIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BlockId {
    type Error = BlockIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BlockId> for String {
    fn from(id: BlockId) -> Self {
        id.0.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockIdError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for BlockIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("block id must not be empty"),
            Self::ContainsWhitespace => f.write_str("block id must not contain whitespace"),
        }
    }
}

impl std::error::Error for BlockIdError {}

#[cfg(test)]
mod tests {
    use super::{BlockId, BlockIdError};

    #[test]
    fn block_id_rejects_empty() {
        assert_eq!(BlockId::new(""), Err(BlockIdError::Empty));
    }

    #[test]
    fn block_id_rejects_whitespace() {
        assert_eq!(
            BlockId::new("diagram 0"),
            Err(BlockIdError::ContainsWhitespace)
        );
        assert_eq!(
            BlockId::new("diagram-0\n"),
            Err(BlockIdError::ContainsWhitespace)
        );
    }

    #[test]
    fn block_id_round_trips_through_serde_as_plain_string() {
        let id = BlockId::new("diagram-0-123").expect("block id");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"diagram-0-123\"");

        let back: BlockId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn block_id_deserialization_validates() {
        let result: Result<BlockId, _> = serde_json::from_str("\"has space\"");
        assert!(result.is_err());
    }
}
