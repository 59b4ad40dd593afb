//! Translation between UI-facing return-message-type tags and the remote
//! Letta message-type vocabulary
//!
//! The node's parameter surface offers human-oriented tag names; the Letta
//! API expects its own enum values. The mapping is a static lookup with a
//! passthrough fallback: a tag with no entry is forwarded unchanged, so a
//! host running against a newer server can pass new vocabulary straight
//! through. Kept separate from request building so it can be tested on its
//! own.

/// Map a UI-facing tag to the remote message-type value
///
/// Both `internal_monologue` (the legacy label) and `reasoning` collapse to
/// `reasoning_message` on the wire.
pub fn remote_message_type(tag: &str) -> &str {
    match tag {
        "internal_monologue" => "reasoning_message",
        "function_call" => "tool_call_message",
        "function_return" => "tool_return_message",
        "reasoning" => "reasoning_message",
        other => other,
    }
}
