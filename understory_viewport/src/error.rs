// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the opt-in validation helpers.

use alloc::string::String;

use thiserror::Error;

/// Convenient result type for fallible constructors in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors surfaced by validation and parsing.
///
/// The geometry queries themselves never fail; these only come from
/// [`ViewportRect::try_new`](crate::ViewportRect::try_new),
/// [`ElementBox::validate`](crate::ElementBox::validate), and parsing [`Edges`](crate::Edges).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// A viewport extent was negative or not finite.
    #[error("invalid viewport extent {width}x{height}")]
    InvalidViewport {
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
    /// An element coordinate or size was NaN or infinite.
    #[error("element geometry contains a non-finite value")]
    NonFiniteCoordinate,
    /// An element's view right/bottom edges disagree with its outer size.
    #[error("element view edges do not match its outer size")]
    InconsistentEdges,
    /// An edge name was not one of `top`, `right`, `bottom`, or `left`.
    #[error("unknown edge name `{0}`")]
    UnknownEdge(String),
}
