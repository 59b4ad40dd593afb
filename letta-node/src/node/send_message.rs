//! The send-message action: per-item loop and result shaping
//!
//! Items are processed strictly in input order, one dispatch at a time.
//! Each item moves through exactly one of three outcomes:
//! - success: the decoded response is recorded verbatim under the item's
//!   index;
//! - tolerated failure (`continue_on_fail == true`): an `{"error": ...}`
//!   record is pushed and the loop moves on;
//! - fatal failure (`continue_on_fail == false`): the whole invocation
//!   aborts with the failing item's index and no results are returned.
//!
//! The tolerance flag is a plain argument, not ambient state, so the policy
//! in force is visible at every call site.

use crate::config::LettaCredentials;
use crate::http::MessageDispatcher;
use crate::node::{ExecutionRecord, NodeError, SendMessageParams};
use crate::protocol::build_message_request;
use tracing::{debug, warn};

/// Send one message per input item to its agent
pub async fn send_message(
    dispatcher: &dyn MessageDispatcher,
    credentials: &LettaCredentials,
    items: &[SendMessageParams],
    continue_on_fail: bool,
) -> Result<Vec<ExecutionRecord>, NodeError> {
    let mut return_data = Vec::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        let body =
            build_message_request(item.role, item.message.clone(), &item.additional_options);
        debug!("Dispatching item {} to agent {}", index, item.agent_id);

        match dispatcher
            .send_message(credentials, &item.agent_id, &body)
            .await
        {
            Ok(response) => return_data.push(ExecutionRecord::success(index, response)),
            Err(err) if continue_on_fail => {
                warn!("Item {} failed, continuing: {}", index, err);
                return_data.push(ExecutionRecord::error(index, err.to_string()));
            }
            Err(err) => {
                return Err(NodeError::Operation {
                    item_index: index,
                    source: err,
                });
            }
        }
    }

    Ok(return_data)
}
