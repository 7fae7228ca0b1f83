/// Screen views and the shared layout chrome
///
/// One module per screen plus the header/footer/overlay chrome in
/// layout.rs. Everything here is view composition; the state machines
/// being rendered live under crate::state.

pub mod about;
pub mod contact;
pub mod gallery;
pub mod home;
pub mod layout;

use iced::widget::{container, text, Space};
use iced::{border, Background, Color, Element, Length, Shadow, Theme, Vector};

use crate::Message;

// Palette lifted from the organization's web presence.
pub const BRAND_BLUE: Color = Color { r: 0.1804, g: 0.2902, b: 0.6235, a: 1.0 };
pub const BRAND_BLUE_DARK: Color = Color { r: 0.1176, g: 0.2275, b: 0.4980, a: 1.0 };
pub const ACCENT_ORANGE: Color = Color { r: 0.9765, g: 0.4510, b: 0.0863, a: 1.0 };
pub const ACCENT_RED: Color = Color { r: 0.8627, g: 0.1490, b: 0.1490, a: 1.0 };
pub const HERO_PINK: Color = Color { r: 0.8590, g: 0.1530, b: 0.4670, a: 0.85 };
pub const INK: Color = Color { r: 0.0667, g: 0.0941, b: 0.1529, a: 1.0 };
pub const MUTED: Color = Color { r: 0.2940, g: 0.3330, b: 0.3880, a: 1.0 };
pub const PAPER: Color = Color { r: 0.9760, g: 0.9800, b: 0.9840, a: 1.0 };

/// Section heading in the brand color.
pub fn heading(label: &'static str) -> Element<'static, Message> {
    text(label).size(34).color(BRAND_BLUE).into()
}

/// Muted paragraph text under a heading.
pub fn lede(copy: &'static str) -> Element<'static, Message> {
    text(copy).size(16).color(MUTED).into()
}

/// Gate a section's content on its visibility latch. Until the latch
/// flips, the section keeps its footprint (so scroll geometry stays
/// stable) but renders nothing.
pub fn reveal(visible: bool, content: Element<'_, Message>) -> Element<'_, Message> {
    if visible {
        content
    } else {
        Space::new(Length::Fill, Length::Fill).into()
    }
}

/// A raised white card, the basic panel of every screen.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: border::rounded(12.0),
        shadow: Shadow {
            color: Color { a: 0.12, ..Color::BLACK },
            offset: Vector::new(0.0, 2.0),
            blur_radius: 10.0,
        },
        ..container::Style::default()
    }
}

/// Flat background fill for a section band.
pub fn band(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

/// The pink-to-orange tint layered over hero photographs, and the
/// stand-in shown while the photograph is still loading (or failed to
/// load, in which case it simply stays).
pub fn hero_gradient(_theme: &Theme) -> container::Style {
    let gradient = iced::gradient::Linear::new(iced::Degrees(115.0))
        .add_stop(0.0, HERO_PINK)
        .add_stop(1.0, Color { a: 0.75, ..ACCENT_ORANGE });

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        ..container::Style::default()
    }
}
