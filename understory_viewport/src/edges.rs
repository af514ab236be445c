// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The edge-membership set.

use core::fmt;
use core::str::FromStr;

use crate::Error;

bitflags::bitflags! {
    /// Which edges of an element fall within the viewport's extent on their axis.
    ///
    /// The bit layout is fixed: top is the lowest bit, then right, bottom, and left.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Edges: u8 {
        /// Top edge.
        const TOP    = 0b0001;
        /// Right edge.
        const RIGHT  = 0b0010;
        /// Bottom edge.
        const BOTTOM = 0b0100;
        /// Left edge.
        const LEFT   = 0b1000;
    }
}

/// Edges paired with their names, in canonical order.
const NAMED: [(Edges, &str); 4] = [
    (Edges::TOP, "top"),
    (Edges::RIGHT, "right"),
    (Edges::BOTTOM, "bottom"),
    (Edges::LEFT, "left"),
];

impl Edges {
    /// Both horizontal-axis edges (left and right).
    pub const HORIZONTAL: Self = Self::LEFT.union(Self::RIGHT);
    /// Both vertical-axis edges (top and bottom).
    pub const VERTICAL: Self = Self::TOP.union(Self::BOTTOM);
}

/// Writes the canonical form: edge names separated by a single space, ordered
/// top, right, bottom, left. The empty set writes nothing.
impl fmt::Display for Edges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (edge, name) in NAMED {
            if self.contains(edge) {
                if !first {
                    f.write_str(" ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Parses whitespace-separated edge names in any order. Repeats are allowed.
impl FromStr for Edges {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().try_fold(Self::empty(), |acc, word| {
            NAMED
                .iter()
                .find(|(_, name)| *name == word)
                .map(|(edge, _)| acc | *edge)
                .ok_or_else(|| Error::UnknownEdge(word.into()))
        })
    }
}
