//! Fixed option lists shown by the onboarding steps
//!
//! Countries, tools, and the choice lists for the About and Personalization
//! steps. These are hardcoded; nothing is loaded from outside the binary.

use std::fmt;

use serde::Serialize;

/// A selectable country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2 code
    pub code: &'static str,
    /// Display name
    pub name: &'static str,
}

/// Countries offered by the Location step, in display order
pub const COUNTRIES: [Country; 10] = [
    Country { code: "US", name: "United States" },
    Country { code: "GB", name: "United Kingdom" },
    Country { code: "CA", name: "Canada" },
    Country { code: "AU", name: "Australia" },
    Country { code: "IN", name: "India" },
    Country { code: "DE", name: "Germany" },
    Country { code: "FR", name: "France" },
    Country { code: "JP", name: "Japan" },
    Country { code: "BR", name: "Brazil" },
    Country { code: "NG", name: "Nigeria" },
];

/// Look up a country by its code (case-insensitive)
pub fn country_by_code(code: &str) -> Option<&'static Country> {
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}

/// A tool that can be pre-loaded into the library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
}

/// Tools offered by the ToolStack step, in display order
pub const TOOLS: [Tool; 9] = [
    Tool { name: "Notion", icon: "📝" },
    Tool { name: "Trello", icon: "📋" },
    Tool { name: "Slack", icon: "💬" },
    Tool { name: "ClickUp", icon: "✅" },
    Tool { name: "Canva", icon: "🎨" },
    Tool { name: "Zapier", icon: "⚡" },
    Tool { name: "Stripe", icon: "💳" },
    Tool { name: "Figma", icon: "✏️" },
    Tool { name: "Calendly", icon: "📅" },
];

/// Single-choice answer to "What best describes you?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Description {
    Freelance,
    SoloEntrepreneur,
    SmallTeam,
    Creator,
}

impl Description {
    pub const ALL: [Description; 4] = [
        Self::Freelance,
        Self::SoloEntrepreneur,
        Self::SmallTeam,
        Self::Creator,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Freelance => "Freelance",
            Self::SoloEntrepreneur => "Solo entrepreneur",
            Self::SmallTeam => "Small team",
            Self::Creator => "Creator",
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Multi-choice answer to "What kind of work do you do?"
///
/// `Others` is the sentinel tag that requires a free-text note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Design,
    Development,
    Writing,
    Creator,
    Others,
}

impl WorkType {
    /// Regular work tags, without the `Others` sentinel
    pub const STANDARD: [WorkType; 4] = [
        Self::Design,
        Self::Development,
        Self::Writing,
        Self::Creator,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Design => "Design",
            Self::Development => "Development",
            Self::Writing => "Writing",
            Self::Creator => "Creator",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Goals offered by the Personalization step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    SubscriptionCosts,
    ToolUsage,
    UnusedTools,
    ToolSuggestions,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Self::SubscriptionCosts,
        Self::ToolUsage,
        Self::UnusedTools,
        Self::ToolSuggestions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SubscriptionCosts => "Subscription costs",
            Self::ToolUsage => "Tool usage & engagement",
            Self::UnusedTools => "Unused/duplicate tools",
            Self::ToolSuggestions => "Personalized tool suggestions",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
