// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This module assembles the greetings of an account for display and drives the form
//! used to mint new greetings.

pub mod assembler;
pub mod context;
pub mod form;
pub mod refresh;

pub use crate::{
    assembler::{assemble, assemble_for_account, GreetingViews},
    context::{AssemblyPolicy, GreetingsContext, ViewOptions},
    form::{FormController, FormError, Notice},
};
