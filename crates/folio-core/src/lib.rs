//! Core types shared across the folio crates.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Page colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Flip between dark and light.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Whether this is the dark scheme.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Page background.
    pub fn background(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(11, 12, 16),
            Theme::Light => Color::Rgb(245, 245, 247),
        }
    }

    /// Primary text and particle colour.
    pub fn foreground(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(255, 255, 255),
            Theme::Light => Color::Rgb(20, 20, 28),
        }
    }

    /// Secondary text (roughly 70% opacity text on the web page).
    pub fn muted(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(182, 182, 184),
            Theme::Light => Color::Rgb(90, 90, 100),
        }
    }

    /// Borders of cards and chips.
    pub fn border(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(48, 49, 53),
            Theme::Light => Color::Rgb(205, 205, 212),
        }
    }

    /// Highlight for active navigation entries and the caret.
    pub fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(0, 212, 255),
            Theme::Light => Color::Rgb(88, 86, 214),
        }
    }

    /// Label for the toggle button, showing what pressing it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Dark => "☀ light",
            Theme::Light => "☾ dark",
        }
    }
}

/// Scrollable page sections, in navigation order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Section::About => "Sobre",
            Section::Skills => "Skills",
            Section::Experience => "Experiência",
            Section::Projects => "Projetos",
            Section::Contact => "Contato",
        }
    }

    /// Heading subtitle shown under the section title.
    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            // The about subtitle is the profile tagline.
            Section::About => None,
            Section::Skills => Some("Ferramentas e tecnologias que uso no dia a dia."),
            Section::Experience => Some("Trajetória profissional e frentes de atuação."),
            Section::Projects => Some("Alguns trabalhos e pesquisas em destaque."),
            Section::Contact => Some("Fale comigo para construir algo grande."),
        }
    }

    /// Position in [`Section::ALL`].
    pub fn index(self) -> usize {
        match self {
            Section::About => 0,
            Section::Skills => 1,
            Section::Experience => 2,
            Section::Projects => 3,
            Section::Contact => 4,
        }
    }

    /// Section for a 1-based hotkey digit.
    pub fn from_digit(digit: char) -> Option<Self> {
        let n = digit.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Cycle to the next section, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycle to the previous section, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
        assert_ne!(Theme::Dark.background(), Theme::Light.background());
    }

    #[test]
    fn test_section_cycle() {
        let mut section = Section::About;
        for _ in 0..Section::ALL.len() {
            section = section.next();
        }
        assert_eq!(section, Section::About);
        assert_eq!(Section::About.prev(), Section::Contact);
        assert_eq!(Section::Contact.next(), Section::About);
    }

    #[test]
    fn test_section_index_matches_order() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn test_section_from_digit() {
        assert_eq!(Section::from_digit('1'), Some(Section::About));
        assert_eq!(Section::from_digit('5'), Some(Section::Contact));
        assert_eq!(Section::from_digit('0'), None);
        assert_eq!(Section::from_digit('6'), None);
        assert_eq!(Section::from_digit('x'), None);
    }
}
