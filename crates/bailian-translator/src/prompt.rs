use openai_compat::Message;

/// Flatten OpenAI chat messages into a single Bailian prompt string
///
/// Each turn becomes one role-labeled line, in arrival order, so the
/// application sees the whole conversation losslessly.
pub fn messages_to_prompt(messages: &[Message]) -> String {
    messages
        .iter()
        .map(|message| {
            format!(
                "{}: {}",
                message.role.as_str(),
                message.content.as_deref().unwrap_or_default()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_become_role_labeled_lines_in_order() {
        let messages = vec![
            Message::system("You are a helpful assistant."),
            Message::user("Hello!"),
            Message::assistant("Hi there!"),
            Message::user("How are you?"),
        ];

        let prompt = messages_to_prompt(&messages);
        assert_eq!(
            prompt,
            "system: You are a helpful assistant.\n\
             user: Hello!\n\
             assistant: Hi there!\n\
             user: How are you?"
        );
    }

    #[test]
    fn missing_content_becomes_empty_text() {
        let mut message = Message::user("");
        message.content = None;
        assert_eq!(messages_to_prompt(&[message]), "user: ");
    }
}
