// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations: decoding, background loading, capture, export and settings.

pub mod capture;
pub mod export;
pub mod loader;
pub mod media;
pub mod settings;
