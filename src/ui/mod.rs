// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the FRAMECAM application.

pub mod canvas;
pub mod frames;
pub mod toolbar;
