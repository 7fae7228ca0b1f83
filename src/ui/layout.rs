//! Shared chrome: header, footer, and the popup/toast overlays.
//!
//! The header is drawn over the page content, mirroring the site's
//! floating navigation bar, and themes itself by route: light text
//! over the hero screens, dark text elsewhere.

use chrono::Datelike;
use iced::font::{Font, Weight};
use iced::widget::{
    button, center, column, container, horizontal_rule, mouse_area, progress_bar, row, text,
    Space,
};
use iced::{Alignment, Background, Color, Element, Length, Theme};

use crate::config::SiteConfig;
use crate::router::Route;
use crate::ui;
use crate::Message;

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Identifier of the page scrollable, shared with the navigation code
/// so it can snap back to the top on route changes.
pub fn page_scroll_id() -> iced::widget::scrollable::Id {
    iced::widget::scrollable::Id::new("weda-page")
}

/// The floating navigation bar.
pub fn header<'a>(route: Route, config: &'a SiteConfig) -> Element<'a, Message> {
    // Over a hero photograph the header text must be light; on the
    // flat screens it flips to ink.
    let foreground = if route.has_hero() { Color::WHITE } else { ui::INK };

    let brand = button(text(&config.org_name).size(24).font(BOLD).color(foreground))
        .style(button::text)
        .on_press(Message::Navigate(Route::Home));

    let mut nav = row![].spacing(8).align_y(Alignment::Center);
    for entry in Route::ALL {
        let active = entry == route;
        let label = text(entry.label())
            .size(16)
            .font(if active { BOLD } else { Font::DEFAULT })
            .color(foreground);
        nav = nav.push(
            button(label)
                .style(button::text)
                .on_press(Message::Navigate(entry)),
        );
    }

    let register = button(text("Register").size(16).color(Color::WHITE))
        .style(|_theme: &Theme, status| button::Style {
            background: Some(Background::Color(match status {
                button::Status::Hovered | button::Status::Pressed => ui::BRAND_BLUE_DARK,
                _ => ui::BRAND_BLUE,
            })),
            text_color: Color::WHITE,
            border: iced::border::rounded(8.0),
            ..button::Style::default()
        })
        .padding([8.0, 20.0])
        .on_press(Message::Navigate(Route::Contact));

    container(
        row![
            brand,
            Space::new(Length::Fill, Length::Shrink),
            nav,
            Space::new(Length::Fixed(16.0), Length::Shrink),
            register,
        ]
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([12.0, 32.0])
    .into()
}

/// The dark footer closing every screen.
pub fn footer(config: &SiteConfig) -> Element<'_, Message> {
    let about = column![
        text(&config.org_name).size(22).font(BOLD).color(Color::WHITE),
        text(&config.org_full_name).size(14).color(ui::PAPER),
        text("A non-profit organization dedicated to empowering women through entrepreneurship and economic self-reliance.")
            .size(14)
            .color(ui::PAPER),
    ]
    .spacing(8)
    .width(Length::FillPortion(2));

    let mut links = column![text("Quick Links").size(16).font(BOLD).color(Color::WHITE)].spacing(6);
    for route in Route::ALL {
        links = links.push(
            button(text(route.label()).size(14).color(ui::PAPER))
                .style(button::text)
                .padding(0)
                .on_press(Message::Navigate(route)),
        );
    }

    let mut contact = column![
        text("Contact Info").size(16).font(BOLD).color(Color::WHITE),
        text(&config.address).size(14).color(ui::PAPER),
        text(&config.phone).size(14).color(ui::PAPER),
        text(format!("WhatsApp: {}", config.whatsapp)).size(14).color(ui::PAPER),
    ]
    .spacing(6)
    .width(Length::FillPortion(1));
    for email in &config.emails {
        contact = contact.push(text(email).size(14).color(ui::PAPER));
    }

    let year = chrono::Local::now().year();

    container(
        column![
            row![about, links.width(Length::FillPortion(1)), contact].spacing(40),
            horizontal_rule(1),
            text(format!("© {} {}. All rights reserved.", year, config.org_name))
                .size(13)
                .color(ui::MUTED),
        ]
        .spacing(24),
    )
    .width(Length::Fill)
    .padding([40.0, 48.0])
    .style(ui::band(ui::INK))
    .into()
}

/// The join popup overlay. A click anywhere on the dimmed backdrop
/// dismisses it; the card swallows its own clicks so only its controls
/// act.
pub fn join_popup(config: &SiteConfig) -> Element<'_, Message> {
    let backdrop = mouse_area(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| iced::widget::container::Style {
                background: Some(Background::Color(Color { a: 0.55, ..Color::BLACK })),
                ..iced::widget::container::Style::default()
            }),
    )
    .on_press(Message::PopupDismissed);

    let close = button(text("✕").size(16).color(ui::MUTED))
        .style(button::text)
        .on_press(Message::PopupDismissed);

    let card = container(
        column![
            row![
                text("Join WEDA").size(26).font(BOLD).color(ui::BRAND_BLUE),
                Space::new(Length::Fill, Length::Shrink),
                close,
            ]
            .align_y(Alignment::Center),
            text(&config.tagline).size(16).color(ui::MUTED),
            text("Become part of a growing community of women entrepreneurs. Registration is free and open to all.")
                .size(15)
                .color(ui::MUTED),
            row![
                button(text("Register Now").size(16).color(Color::WHITE))
                    .style(|_theme: &Theme, _status| button::Style {
                        background: Some(Background::Color(ui::ACCENT_ORANGE)),
                        text_color: Color::WHITE,
                        border: iced::border::rounded(8.0),
                        ..button::Style::default()
                    })
                    .padding([10.0, 24.0])
                    .on_press(Message::PopupRegister),
                button(text("No Thanks").size(16).color(ui::MUTED))
                    .style(button::text)
                    .padding([10.0, 24.0])
                    .on_press(Message::PopupDismissed),
            ]
            .spacing(12),
        ]
        .spacing(16)
        .max_width(440.0),
    )
    .padding(28)
    .style(ui::card);

    iced::widget::stack([
        backdrop.into(),
        center(mouse_area(card).on_press(Message::Noop)).into(),
    ])
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}

/// The registration success toast, pinned to the bottom right corner.
/// The bar under the message drains linearly toward the auto-dismiss
/// deadline.
pub fn success_toast<'a>(fraction_remaining: f32) -> Element<'a, Message> {
    let close = button(text("✕").size(14).color(ui::MUTED))
        .style(button::text)
        .on_press(Message::ToastDismissed);

    let card = container(
        column![
            row![
                text("Registration received").size(16).font(BOLD).color(ui::INK),
                Space::new(Length::Fill, Length::Shrink),
                close,
            ]
            .align_y(Alignment::Center),
            text("Thank you for registering with WEDA. We will reach out to you soon.")
                .size(14)
                .color(ui::MUTED),
            progress_bar(0.0..=1.0, fraction_remaining).height(Length::Fixed(4.0)),
        ]
        .spacing(10)
        .width(Length::Fixed(320.0)),
    )
    .padding(18)
    .style(ui::card);

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .padding(24)
        .into()
}
