use serde::{Deserialize, Serialize};

/// Role of a message in a chat-completion conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
}

/// A role-tagged chat message as sent to the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serializes_lowercase_role() {
        let json = serde_json::to_value(Message::system("Be brief")).unwrap();

        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "Be brief");
    }

    #[test]
    fn test_user_message_role() {
        let message = Message::user("Hi");

        assert_eq!(message.role, MessageRole::User);
        assert_eq!(serde_json::to_value(message.role).unwrap(), "user");
    }
}
