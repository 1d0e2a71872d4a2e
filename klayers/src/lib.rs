// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

#![warn(missing_docs, clippy::needless_borrow)]
#![warn(missing_docs, clippy::needless_borrow)]
// Clippy lints, some should be disabled incrementally
#![allow(clippy::upper_case_acronyms)]

//! `klayers` reports the status of the Klayers build and publish pipelines.
//!
//! AWS Step Functions status-change events arrive through EventBridge, are
//! turned into a short human-readable message and posted to a Slack channel.
//! The crate also carries the harness that drives the layer-building state
//! machine end to end.

pub mod aws;
pub mod configs;
pub mod error;
pub mod event;
pub mod notifier;
pub mod pipeline;
pub mod prelude;
pub mod runtime;
pub mod slack;
