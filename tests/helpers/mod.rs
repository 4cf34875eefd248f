// ABOUTME: Shared test helpers for exercising axum routers in-process
// ABOUTME: Exports the HTTP request and response test utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrocycle Contributors

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

pub mod axum_test;
