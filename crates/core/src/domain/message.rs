// Message Domain Model

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

/// Message ID (assigned by the store, auto-increment)
pub type MessageId = i64;

/// Message Entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// 0 until the store assigns one
    #[serde(default)]
    pub id: MessageId,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub created_at: i64, // epoch ms
}

impl Message {
    /// Create an unsaved message (no id, no timestamp yet)
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            body: body.into(),
            created_at: 0,
        }
    }

    /// Build a message addressed at an existing row (for updates)
    pub fn with_id(id: MessageId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            ..Self::new(title, body)
        }
    }

    /// Trim title and body in place, then reject blanks.
    ///
    /// Title is checked first; the first failure wins.
    pub fn validate(&mut self) -> Result<()> {
        self.title = self.title.trim().to_string();
        self.body = self.body.trim().to_string();

        if self.title.is_empty() {
            return Err(AppError::Validation("enter a valid title".to_string()));
        }
        if self.body.is_empty() {
            return Err(AppError::Validation("enter a valid body".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_trims_fields() {
        let mut msg = Message::new("  the title \n", "\tthe body  ");
        assert!(msg.validate().is_ok());
        assert_eq!(msg.title, "the title");
        assert_eq!(msg.body, "the body");
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        for title in ["", "   ", "\t\n"] {
            let mut msg = Message::new(title, "the body");
            assert_eq!(
                msg.validate(),
                Err(AppError::Validation("enter a valid title".to_string()))
            );
        }
    }

    #[test]
    fn test_validate_rejects_blank_body() {
        let mut msg = Message::new("the title", "  ");
        assert_eq!(
            msg.validate(),
            Err(AppError::Validation("enter a valid body".to_string()))
        );
    }

    #[test]
    fn test_validate_title_checked_first() {
        let mut msg = Message::new("", "");
        let err = msg.validate().unwrap_err();
        assert_eq!(err.message(), "enter a valid title");
    }

    #[test]
    fn test_serde_defaults() {
        let msg: Message =
            serde_json::from_value(serde_json::json!({"title": "t", "body": "b"})).unwrap();
        assert_eq!(msg, Message::new("t", "b"));

        let value = serde_json::to_value(Message::with_id(7, "t", "b")).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["created_at"], 0);
    }
}
