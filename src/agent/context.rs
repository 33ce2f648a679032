//! Message context builder for a conversation turn.

use crate::types::*;
use tracing::debug;

/// Build the full message list for an inference call: the system prompt
/// followed by the most recent `history_window` history messages.
///
/// The window never starts on a tool message: a tool result without its
/// requesting assistant message is rejected by the API, so the window is
/// widened back to that assistant message.
pub fn build_messages(
    system_prompt: &str,
    history: &[ChatMessage],
    history_window: usize,
) -> Vec<ChatMessage> {
    let mut start = history.len().saturating_sub(history_window);
    while start > 0 && start < history.len() && history[start].role == ChatRole::Tool {
        start -= 1;
    }
    // Only reachable when the history itself opens with a tool message.
    while start < history.len() && history[start].role == ChatRole::Tool {
        start += 1;
    }

    let mut messages = Vec::with_capacity(history.len() - start + 1);
    messages.push(ChatMessage::system(system_prompt));
    messages.extend_from_slice(&history[start..]);

    debug!(
        "Context: {} of {} history messages",
        history.len() - start,
        history.len()
    );
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_comes_first() {
        let history = vec![ChatMessage::user("hi"), ChatMessage::assistant("hello")];
        let messages = build_messages("sys", &history, 10);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(messages[0].content, "sys");
        assert_eq!(messages[2].content, "hello");
    }

    #[test]
    fn window_keeps_most_recent_messages() {
        let history: Vec<ChatMessage> = (0..5).map(|i| ChatMessage::user(i.to_string())).collect();
        let messages = build_messages("sys", &history, 2);
        let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["sys", "3", "4"]);
    }

    #[test]
    fn window_widens_to_the_requesting_assistant_message() {
        let history = vec![
            ChatMessage::user("q"),
            ChatMessage::assistant_tool_calls(None, Vec::new()),
            ChatMessage::tool("call_1", "result"),
            ChatMessage::assistant("answer"),
        ];
        let messages = build_messages("sys", &history, 2);
        let roles: Vec<ChatRole> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![ChatRole::System, ChatRole::Assistant, ChatRole::Tool, ChatRole::Assistant]
        );
        assert_eq!(messages[3].content, "answer");
    }

    #[test]
    fn trailing_tool_results_keep_their_tool_call() {
        let history = vec![
            ChatMessage::user("q"),
            ChatMessage::assistant_tool_calls(None, Vec::new()),
            ChatMessage::tool("call_1", "first"),
            ChatMessage::tool("call_2", "second"),
        ];
        let messages = build_messages("sys", &history, 2);
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[1].role, ChatRole::Assistant);
        assert_eq!(messages[3].content, "second");
    }

    #[test]
    fn leading_tool_message_is_dropped() {
        let history = vec![ChatMessage::tool("call_0", "stale"), ChatMessage::user("hi")];
        let messages = build_messages("sys", &history, 5);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, "hi");
    }
}
