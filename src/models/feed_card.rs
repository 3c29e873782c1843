//! Feed card payload: an ordered list of link entries with thumbnails.

use serde::{Deserialize, Serialize};

/// One feed entry.
///
/// The wire keys spell `URL` in caps here, unlike
/// [`LinkElement`](super::LinkElement)'s `messageUrl`/`picUrl`; the
/// upstream API is inconsistent and both spellings must go out verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedLinkElement {
    pub title: String,
    #[serde(rename = "messageURL")]
    pub message_url: String,
    #[serde(rename = "picURL")]
    pub pic_url: String,
}

/// Feed card payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedCardElement {
    pub links: Vec<FeedLinkElement>,
}

/// Fluent builder for [`FeedCardElement`].
#[derive(Debug, Default)]
pub struct FeedCardBuilder {
    card: FeedCardElement,
}

impl FeedCardBuilder {
    /// Start an empty feed card.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a feed entry. Repeatable; call order is preserved.
    pub fn link(
        mut self,
        title: impl Into<String>,
        message_url: impl Into<String>,
        pic_url: impl Into<String>,
    ) -> Self {
        self.card.links.push(FeedLinkElement {
            title: title.into(),
            message_url: message_url.into(),
            pic_url: pic_url.into(),
        });
        self
    }

    /// Hand out the finished card.
    pub fn build(self) -> FeedCardElement {
        self.card
    }
}
