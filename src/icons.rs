//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Ascii
    }
}

/// Post and comment reaction icons
#[derive(Debug, Clone)]
pub struct ReactionIcons {
    pub liked: &'static str,
    pub not_liked: &'static str,
    pub comment: &'static str,
    pub reply: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub feed_title: &'static str,
    pub friends_title: &'static str,
    pub search_title: &'static str,
    pub profile_title: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
}

/// Post visibility indicators
#[derive(Debug, Clone)]
pub struct VisibilityIcons {
    pub public: &'static str,
    pub private: &'static str,
    pub image: &'static str,
}

/// Presence and friendship icons
#[derive(Debug, Clone)]
pub struct PresenceIcons {
    pub online: &'static str,
    pub offline: &'static str,
    pub friend: &'static str,
    pub pending: &'static str,
    pub loading: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub reaction: ReactionIcons,
    pub ui: UiIcons,
    pub visibility: VisibilityIcons,
    pub presence: PresenceIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    /// Get emoji icon set
    fn emoji_icons() -> IconSet {
        IconSet {
            reaction: ReactionIcons {
                liked: "❤️",
                not_liked: "🤍",
                comment: "💬",
                reply: "↩️",
            },
            ui: UiIcons {
                feed_title: "📰",
                friends_title: "👥",
                search_title: "🔎",
                profile_title: "👤",
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
            },
            visibility: VisibilityIcons {
                public: "🌍",
                private: "🔒",
                image: "🖼️",
            },
            presence: PresenceIcons {
                online: "🟢",
                offline: "⚪",
                friend: "🤝",
                pending: "⏳",
                loading: "🔄",
            },
        }
    }

    /// Get Unicode icon set
    fn unicode_icons() -> IconSet {
        IconSet {
            reaction: ReactionIcons {
                liked: "♥",
                not_liked: "♡",
                comment: "✎",
                reply: "↪",
            },
            ui: UiIcons {
                feed_title: "▶",
                friends_title: "◆",
                search_title: "◎",
                profile_title: "●",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
            },
            visibility: VisibilityIcons {
                public: "◯",
                private: "◆",
                image: "▣",
            },
            presence: PresenceIcons {
                online: "●",
                offline: "○",
                friend: "✓",
                pending: "…",
                loading: "⟳",
            },
        }
    }

    /// Get ASCII icon set
    fn ascii_icons() -> IconSet {
        IconSet {
            reaction: ReactionIcons {
                liked: "[*]",
                not_liked: "[ ]",
                comment: "c",
                reply: ">",
            },
            ui: UiIcons {
                feed_title: ">",
                friends_title: "#",
                search_title: "?",
                profile_title: "@",
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
            },
            visibility: VisibilityIcons {
                public: "(pub)",
                private: "(prv)",
                image: "[img]",
            },
            presence: PresenceIcons {
                online: "*",
                offline: "o",
                friend: "+",
                pending: "...",
                loading: "...",
            },
        }
    }
}
