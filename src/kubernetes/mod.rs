// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic cluster operations shared by the webhook synchronizer.

pub mod apply;

pub use apply::{create_or_force_update, delete_if_exists};
