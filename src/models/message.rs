//! Message envelope and the simple payload elements.

use serde::{Deserialize, Serialize};

use super::{ActionCardElement, FeedCardElement};

/// Discriminator for the five robot message kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageType {
    #[default]
    Text,
    Link,
    Markdown,
    ActionCard,
    FeedCard,
}

/// Plain text payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    pub content: String,
}

/// Hyperlink card payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkElement {
    /// Card title.
    pub title: String,
    /// Card body; long text is truncated by the client app.
    pub text: String,
    /// URL opened when the card is tapped.
    pub message_url: String,
    /// Thumbnail image URL.
    pub pic_url: String,
}

/// Markdown payload. `title` is what shows in the conversation list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkdownElement {
    pub title: String,
    pub text: String,
}

/// Recipients to highlight, by phone number or all at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtElement {
    pub at_mobiles: Vec<String>,
    pub is_at_all: bool,
}

/// Robot message envelope.
///
/// The wire format requires every payload key to be present regardless of
/// `msgtype`; unselected payloads go out as their zero-valued structs,
/// never null or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "msgtype")]
    pub msg_type: MessageType,
    pub text: TextElement,
    pub link: LinkElement,
    pub markdown: MarkdownElement,
    #[serde(rename = "actionCard")]
    pub action_card: ActionCardElement,
    #[serde(rename = "feedCard")]
    pub feed_card: FeedCardElement,
    pub at: AtElement,
}

/// Fluent builder for [`Message`].
///
/// Performs no validation: building without setting the payload that
/// matches the declared type sends an empty payload, and the server is the
/// authority on acceptance.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    message: Message,
}

impl MessageBuilder {
    /// Start a message tagged with `msg_type`; all payloads default to empty.
    pub fn new(msg_type: MessageType) -> Self {
        Self {
            message: Message {
                msg_type,
                ..Message::default()
            },
        }
    }

    /// Set the plain text payload.
    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.message.text = TextElement {
            content: content.into(),
        };
        self
    }

    /// Set the hyperlink card payload.
    pub fn link(
        mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        message_url: impl Into<String>,
        pic_url: impl Into<String>,
    ) -> Self {
        self.message.link = LinkElement {
            title: title.into(),
            text: text.into(),
            message_url: message_url.into(),
            pic_url: pic_url.into(),
        };
        self
    }

    /// Set the markdown payload.
    pub fn markdown(mut self, title: impl Into<String>, text: impl Into<String>) -> Self {
        self.message.markdown = MarkdownElement {
            title: title.into(),
            text: text.into(),
        };
        self
    }

    /// Attach a pre-built action card payload.
    pub fn action_card(mut self, element: ActionCardElement) -> Self {
        self.message.action_card = element;
        self
    }

    /// Attach a pre-built feed card payload.
    pub fn feed_card(mut self, element: FeedCardElement) -> Self {
        self.message.feed_card = element;
        self
    }

    /// Set the at-mention element. Applies to every message type.
    pub fn at(mut self, mobiles: Vec<String>, is_at_all: bool) -> Self {
        self.message.at = AtElement {
            at_mobiles: mobiles,
            is_at_all,
        };
        self
    }

    /// Hand out the finished message.
    pub fn build(self) -> Message {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActionCardBuilder, AvatarState, FeedCardBuilder, Orientation};
    use serde_json::json;

    #[test]
    fn test_msgtype_tag_matches_declared_type() {
        let cases = [
            (MessageType::Text, "text"),
            (MessageType::Link, "link"),
            (MessageType::Markdown, "markdown"),
            (MessageType::ActionCard, "actionCard"),
            (MessageType::FeedCard, "feedCard"),
        ];
        for (msg_type, tag) in cases {
            let value = serde_json::to_value(MessageBuilder::new(msg_type).build()).unwrap();
            assert_eq!(value["msgtype"], tag);
        }
    }

    #[test]
    fn test_unset_payloads_serialize_as_zero_values() {
        let value = serde_json::to_value(MessageBuilder::new(MessageType::Text).build()).unwrap();

        assert_eq!(value["text"], json!({"content": ""}));
        assert_eq!(
            value["link"],
            json!({"title": "", "text": "", "messageUrl": "", "picUrl": ""})
        );
        assert_eq!(value["markdown"], json!({"title": "", "text": ""}));
        assert_eq!(
            value["actionCard"],
            json!({
                "title": "",
                "text": "",
                "singleTitle": "",
                "singleURL": "",
                "btnOrientation": "0",
                "hideAvatar": "0",
                "btns": []
            })
        );
        assert_eq!(value["feedCard"], json!({"links": []}));
        assert_eq!(value["at"], json!({"atMobiles": [], "isAtAll": false}));
    }

    #[test]
    fn test_builder_setters_are_preserved_exactly() {
        let msg = MessageBuilder::new(MessageType::Link)
            .link(
                "title",
                "body",
                "https://example.com",
                "https://example.com/pic.png",
            )
            .build();

        assert_eq!(msg.msg_type, MessageType::Link);
        assert_eq!(msg.link.title, "title");
        assert_eq!(msg.link.text, "body");
        assert_eq!(msg.link.message_url, "https://example.com");
        assert_eq!(msg.link.pic_url, "https://example.com/pic.png");
        assert_eq!(msg.text, TextElement::default());
    }

    #[test]
    fn test_at_mention_serialized_regardless_of_type() {
        for msg_type in [MessageType::Text, MessageType::Markdown, MessageType::FeedCard] {
            let msg = MessageBuilder::new(msg_type)
                .at(vec!["13800000000".to_string()], false)
                .build();
            let value = serde_json::to_value(&msg).unwrap();
            assert_eq!(value["at"]["atMobiles"], json!(["13800000000"]));
            assert_eq!(value["at"]["isAtAll"], json!(false));
        }
    }

    #[test]
    fn test_envelope_round_trip() {
        let card = ActionCardBuilder::new("t", "b", Orientation::Horizontal, AvatarState::Hide)
            .single_button("open", "https://example.com")
            .button("a", "https://example.com/a")
            .build();
        let feed = FeedCardBuilder::new()
            .link("one", "https://example.com/1", "https://example.com/1.png")
            .build();
        let msg = MessageBuilder::new(MessageType::ActionCard)
            .text("hello")
            .markdown("title", "**bold**")
            .action_card(card)
            .feed_card(feed)
            .at(vec!["13800000000".to_string()], true)
            .build();

        let encoded = serde_json::to_string(&msg).unwrap();
        let decoded: Message = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, msg);
    }
}
