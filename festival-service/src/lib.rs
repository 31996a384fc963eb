// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Support code of the `festival-greetings` command-line client.

pub mod config;
