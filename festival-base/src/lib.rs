// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Domain types shared by the festival greeting client: identifiers, greeting records,
//! the built-in design catalog, SVG templating, image resolution and share links.

pub mod catalog;
pub mod data_types;
pub mod identifiers;
pub mod metadata;
pub mod share;
pub mod template;
pub mod tracing;

#[doc(hidden)]
pub use alloy_primitives;

/// Returns early with the given error if the condition does not hold.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $e:expr) => {
        if !($cond) {
            return Err($e.into());
        }
    };
}
