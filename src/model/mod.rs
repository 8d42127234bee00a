// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Block records produced by scanning and extraction.
//!
//! Both record types are transient: produced fresh from a complete document string on
//! every call and discarded once the caller consumes them. There is no cache and no
//! cross-call identity.

pub mod block;
pub mod ids;

pub use block::{DiagramBlock, FencedBlock};
pub use ids::{BlockId, BlockIdError};
