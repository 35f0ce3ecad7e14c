// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod aggregation;
pub mod engine;
pub mod movie;
pub mod query;
pub mod response;
pub mod version;
