// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: frame catalog, image layers and compositor state.

pub mod assets;
pub mod catalog;
pub mod state;
