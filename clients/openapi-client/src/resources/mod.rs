// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Typed resources built on the generic CRUD engine

pub mod audit_trail;
pub mod edge_gateway;
pub mod firewall_group;
pub mod ip_space;

pub use edge_gateway::EdgeGateway;
pub use firewall_group::FirewallGroup;
pub use ip_space::IpSpace;
