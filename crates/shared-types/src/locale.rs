use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::icon::IconRef;

/// Interface language of a dashboard shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ar, Language::En];

    /// ISO 639-1 code, also used for the document `lang` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Parse a language code. Case and surrounding whitespace are ignored.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim().to_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            _ => Err(AppError::unknown_language(s)),
        }
    }

    /// The other language. Used by the header's language switch.
    pub fn toggled(self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }

    pub fn direction(self) -> LocaleDirection {
        LocaleDirection::for_language(self)
    }

    pub fn is_rtl(self) -> bool {
        self.direction().is_rtl
    }

    /// Choose between an Arabic and an English string.
    pub fn pick<'a>(self, ar: &'a str, en: &'a str) -> &'a str {
        match self {
            Language::Ar => ar,
            Language::En => en,
        }
    }

    /// The language's own name, as shown on a button that switches to it.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Ar => "عربي",
            Language::En => "English",
        }
    }
}

/// Text and layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

/// A horizontal screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Left,
    Right,
}

impl Edge {
    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Edge::Left => Edge::Right,
            Edge::Right => Edge::Left,
        }
    }
}

/// Resolved direction for a language.
///
/// Every mirrored piece of the layout (sidebar anchoring, menu rows,
/// header actions, chevrons) derives from this value and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocaleDirection {
    pub direction: TextDirection,
    pub is_rtl: bool,
}

impl LocaleDirection {
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::Ar => Self {
                direction: TextDirection::Rtl,
                is_rtl: true,
            },
            Language::En => Self {
                direction: TextDirection::Ltr,
                is_rtl: false,
            },
        }
    }

    /// Edge where reading starts. The sidebar and the mobile menu button sit here.
    pub fn leading_edge(&self) -> Edge {
        if self.is_rtl {
            Edge::Right
        } else {
            Edge::Left
        }
    }

    pub fn trailing_edge(&self) -> Edge {
        self.leading_edge().opposite()
    }

    /// Flex direction class for rows whose visual order follows reading order.
    pub fn row_class(&self) -> &'static str {
        if self.is_rtl {
            "flex-row-reverse"
        } else {
            "flex-row"
        }
    }

    pub fn text_align_class(&self) -> &'static str {
        if self.is_rtl {
            "text-right"
        } else {
            "text-left"
        }
    }

    /// Cross-axis alignment for stacked text blocks (greeting, titles).
    pub fn items_align_class(&self) -> &'static str {
        if self.is_rtl {
            "items-end"
        } else {
            "items-start"
        }
    }

    /// Chevron pointing toward "next" in reading order.
    pub fn forward_chevron(&self) -> IconRef {
        match self.trailing_edge() {
            Edge::Left => IconRef::ChevronLeft,
            Edge::Right => IconRef::ChevronRight,
        }
    }

    /// Chevron pointing toward "previous" in reading order.
    pub fn backward_chevron(&self) -> IconRef {
        match self.leading_edge() {
            Edge::Left => IconRef::ChevronLeft,
            Edge::Right => IconRef::ChevronRight,
        }
    }
}
