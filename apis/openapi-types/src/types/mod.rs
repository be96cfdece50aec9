// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! OpenAPI type definitions

pub mod audit;
pub mod common;
pub mod edge_gateway;
pub mod firewall_group;
pub mod ip_space;
pub mod pages;
pub mod task;

pub use audit::*;
pub use common::*;
pub use edge_gateway::*;
pub use firewall_group::*;
pub use ip_space::*;
pub use pages::*;
pub use task::*;
