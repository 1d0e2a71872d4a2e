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
//! A "prelude" for users of the klayers crate.
//!
//! Like the standard library's prelude, this module simplifies importing of
//! common items. Unlike the standard prelude, the contents of this module must
//! be imported manually:
//!
//! ```
//! use klayers::prelude::*;
//! ```

pub use crate::aws::cloudformation::get_pipeline_arn;
pub use crate::aws::ssm::ParameterStore;
pub use crate::aws::AwsSession;
pub use crate::aws::step_functions::{execute_state_machine, execution_name, StateMachine};
pub use crate::configs::*;
pub use crate::error::{KlayersError, Result};
pub use crate::event::{
    ExecutionStatus, NotificationResult, PipelineInput, PostStatus, StatusDetail, StatusEvent,
};
pub use crate::notifier::{pipeline_error_message, publish_message, Notification};
pub use crate::pipeline::{build_package, pipeline_scenarios};
pub use crate::runtime::{handle_pipeline_error, handle_publish, Handler, NotifierContext};
pub use crate::slack::{post_to_slack, ChatClient, PostMessageResponse, SlackClient};
