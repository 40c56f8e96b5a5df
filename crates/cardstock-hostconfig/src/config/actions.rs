//! Action layout configuration.

use serde::{Deserialize, Serialize};

use crate::color::Color;

use super::metrics::{Insets, Separation};

/// How a show-card action expands its inline card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShowCardMode {
    Inline,
    Popup,
}

impl Default for ShowCardMode {
    fn default() -> Self {
        ShowCardMode::Inline
    }
}

/// Direction the action bar lays buttons out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Horizontal
    }
}

/// Alignment of the action bar within the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionAlignment {
    Left,
    Center,
    Right,
    Stretch,
}

impl Default for ActionAlignment {
    fn default() -> Self {
        ActionAlignment::Left
    }
}

/// Styling for the card a show-card action expands inline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowCardConfig {
    pub action_mode: ShowCardMode,
    pub inline_top_margin: u32,
    pub background_color: Color,
    pub padding: Insets,
}

impl Default for ShowCardConfig {
    fn default() -> Self {
        Self {
            action_mode: ShowCardMode::Inline,
            inline_top_margin: 16,
            background_color: Color::Argb(0x08, 0x00, 0x00, 0x00),
            padding: Insets::uniform(16),
        }
    }
}

/// Action bar configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionsConfig {
    /// Upper bound on rendered actions; extras are dropped by the renderer.
    pub max_actions: u32,
    pub separation: Separation,
    pub button_spacing: u32,
    pub stretch: bool,
    pub show_card: ShowCardConfig,
    pub actions_orientation: Orientation,
    pub action_alignment: ActionAlignment,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            max_actions: 5,
            separation: Separation::spacing_only(20),
            button_spacing: 20,
            stretch: false,
            show_card: ShowCardConfig::default(),
            actions_orientation: Orientation::Horizontal,
            action_alignment: ActionAlignment::Left,
        }
    }
}
