//! Design tokens for the counter
//!
//! The counter never hard-codes colours or spacing. It looks up named
//! design tokens, which come with defaults and can be overridden from the
//! configuration file with hex strings.

use std::collections::BTreeMap;

use counter_core::Tone;
use iced::Theme;

use crate::error::{GuiError, GuiResult};

/// A color in RGBA format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255, 255 = opaque)
    pub a: u8,
}

impl Color {
    /// Create a new color from RGBA values
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new color from RGB values (alpha = 255)
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from a hex string (e.g., "#FF5733" or "FF5733")
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not opaque
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// Same color with the alpha scaled by `factor` (0.0 - 1.0)
    #[must_use]
    pub fn faded(self, factor: f32) -> Self {
        let a = (f32::from(self.a) * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Convert to iced Color
    #[must_use]
    pub fn to_iced(self) -> iced::Color {
        iced::Color::from_rgba8(self.r, self.g, self.b, f32::from(self.a) / 255.0)
    }
}

/// Token names the counter reads
pub mod names {
    pub const PRIMARY: &str = "ddd-theme-primary";
    pub const ACCENT: &str = "ddd-theme-accent";
    pub const SKY_BLUE: &str = "ddd-theme-default-skyBlue";
    pub const GLOBAL_NEON: &str = "ddd-theme-default-globalNeon";
    pub const WONDER_PURPLE: &str = "ddd-theme-default-wonderPurple";
    pub const SLATE_MAX_LIGHT: &str = "ddd-theme-default-slateMaxLight";
    pub const ORIGINAL_87_PINK: &str = "ddd-theme-default-original87Pink";
    pub const SPACING_2: &str = "ddd-spacing-2";
    pub const SPACING_4: &str = "ddd-spacing-4";
    pub const FONT_SIZE_S: &str = "ddd-font-size-s";
    pub const LABEL_FONT_SIZE: &str = "counter-app-label-font-size";
}

/// Base iced theme under the tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseTheme {
    #[default]
    Light,
    Dark,
}

impl BaseTheme {
    /// Parse a theme from a string name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Convert to iced Theme
    #[must_use]
    pub fn to_iced_theme(self) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}

/// Named colours and sizes used to style the counter.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignTokens {
    colors: BTreeMap<String, Color>,
    sizes: BTreeMap<String, f32>,
    pub base: BaseTheme,
}

impl Default for DesignTokens {
    fn default() -> Self {
        let colors = [
            (names::PRIMARY, Color::rgb(0x1E, 0x40, 0x7C)),
            (names::ACCENT, Color::rgb(0xF2, 0xF2, 0xF4)),
            (names::SKY_BLUE, Color::rgb(0x00, 0x9C, 0xDE)),
            (names::GLOBAL_NEON, Color::rgb(0x4C, 0xBD, 0x2C)),
            (names::WONDER_PURPLE, Color::rgb(0x49, 0x1D, 0x70)),
            (names::SLATE_MAX_LIGHT, Color::rgb(0xEE, 0xEF, 0xF2)),
            (names::ORIGINAL_87_PINK, Color::rgb(0xBC, 0x20, 0x4B)),
        ];
        let sizes = [
            (names::SPACING_2, 8.0),
            (names::SPACING_4, 16.0),
            (names::FONT_SIZE_S, 20.0),
        ];

        Self {
            colors: colors.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            sizes: sizes.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
            base: BaseTheme::default(),
        }
    }
}

impl DesignTokens {
    /// Look up a colour token
    #[must_use]
    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    /// Look up a size token
    #[must_use]
    pub fn size(&self, name: &str) -> Option<f32> {
        self.sizes.get(name).copied()
    }

    /// Colour token or black
    #[must_use]
    pub fn color_or_default(&self, name: &str) -> Color {
        self.color(name).unwrap_or(Color::rgb(0, 0, 0))
    }

    /// Size token or `fallback`
    #[must_use]
    pub fn size_or(&self, name: &str, fallback: f32) -> f32 {
        self.size(name).unwrap_or(fallback)
    }

    /// Font size for the number; the widget-specific token wins over the
    /// generic one
    #[must_use]
    pub fn label_font_size(&self) -> f32 {
        self.size(names::LABEL_FONT_SIZE)
            .or_else(|| self.size(names::FONT_SIZE_S))
            .unwrap_or(20.0)
    }

    /// Override a colour token from a hex string
    pub fn set_color(&mut self, name: &str, hex: &str) -> GuiResult<()> {
        let color = Color::from_hex(hex).ok_or_else(|| GuiError::Token {
            name: name.to_string(),
            reason: format!("`{hex}` is not a hex colour"),
        })?;
        self.colors.insert(name.to_string(), color);
        Ok(())
    }

    /// Override a size token
    pub fn set_size(&mut self, name: &str, size: f32) -> GuiResult<()> {
        if !size.is_finite() || size < 0.0 {
            return Err(GuiError::Token {
                name: name.to_string(),
                reason: format!("{size} is not a valid size"),
            });
        }
        self.sizes.insert(name.to_string(), size);
        Ok(())
    }

    /// Colour of the number for a tone; `None` means the host text colour
    #[must_use]
    pub fn tone_color(&self, tone: Tone) -> Option<Color> {
        match tone {
            Tone::Normal | Tone::Emphasis => None,
            Tone::Highlight => self.color(names::SKY_BLUE),
            Tone::Celebrate => self.color(names::GLOBAL_NEON),
        }
    }

    /// Host text colour, tinted when emphasis is on
    #[must_use]
    pub fn host_text_color(&self, emphasis: bool) -> Color {
        if emphasis {
            self.color_or_default(names::ORIGINAL_87_PINK)
        } else {
            self.color_or_default(names::PRIMARY)
        }
    }
}
