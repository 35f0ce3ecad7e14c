// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

pub mod facets;
pub mod logging;
pub mod query_compiler;
pub mod search;
