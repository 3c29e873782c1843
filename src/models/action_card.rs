//! Action card payload: a title and body plus clickable buttons.

use serde::{Deserialize, Serialize};

/// Button layout direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Buttons stacked vertically.
    #[default]
    #[serde(rename = "0")]
    Vertical,
    /// Buttons side by side.
    #[serde(rename = "1")]
    Horizontal,
}

/// Whether the sender avatar is hidden on the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvatarState {
    #[default]
    #[serde(rename = "0")]
    Show,
    #[serde(rename = "1")]
    Hide,
}

/// One clickable button.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ButtonElement {
    pub title: String,
    #[serde(rename = "actionURL")]
    pub action_url: String,
}

/// Action card payload.
///
/// Single-button mode (`single_title`/`single_url`) and multi-button mode
/// (`buttons`) are not mutually exclusive; the server decides precedence
/// when both are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionCardElement {
    pub title: String,
    pub text: String,
    pub single_title: String,
    #[serde(rename = "singleURL")]
    pub single_url: String,
    #[serde(rename = "btnOrientation")]
    pub button_orientation: Orientation,
    pub hide_avatar: AvatarState,
    #[serde(rename = "btns")]
    pub buttons: Vec<ButtonElement>,
}

/// Fluent builder for [`ActionCardElement`].
#[derive(Debug)]
pub struct ActionCardBuilder {
    card: ActionCardElement,
}

impl ActionCardBuilder {
    /// Start a card with its title, body and layout settings.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        orientation: Orientation,
        avatar: AvatarState,
    ) -> Self {
        Self {
            card: ActionCardElement {
                title: title.into(),
                text: text.into(),
                button_orientation: orientation,
                hide_avatar: avatar,
                ..ActionCardElement::default()
            },
        }
    }

    /// Set the single-button fields. Independent of [`button`](Self::button).
    pub fn single_button(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.card.single_title = title.into();
        self.card.single_url = url.into();
        self
    }

    /// Append a button. Repeatable; call order is preserved.
    pub fn button(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.card.buttons.push(ButtonElement {
            title: title.into(),
            action_url: url.into(),
        });
        self
    }

    /// Hand out the finished card.
    pub fn build(self) -> ActionCardElement {
        self.card
    }
}
