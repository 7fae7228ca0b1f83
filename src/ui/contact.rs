//! The contact screen: the registration form and the contact
//! information cards. Submission goes to the external form relay; the
//! success toast it redirects back to is owned by the app shell.

use std::fmt;

use iced::widget::{button, column, container, pick_list, row, text, text_input};
use iced::{Alignment, Background, Color, Element, Length, Theme};

use crate::config::SiteConfig;
use crate::relay::FormFields;
use crate::ui;
use crate::Message;

/// Business types offered by the registration form, matching the
/// relay's expected values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessType {
    Manufacturing,
    Retail,
    Services,
    Agriculture,
    Handicrafts,
    Food,
    Textiles,
    Technology,
    Education,
    Healthcare,
    Other,
}

impl BusinessType {
    pub const ALL: [BusinessType; 11] = [
        BusinessType::Manufacturing,
        BusinessType::Retail,
        BusinessType::Services,
        BusinessType::Agriculture,
        BusinessType::Handicrafts,
        BusinessType::Food,
        BusinessType::Textiles,
        BusinessType::Technology,
        BusinessType::Education,
        BusinessType::Healthcare,
        BusinessType::Other,
    ];

    /// The value submitted to the relay.
    pub fn form_value(self) -> &'static str {
        match self {
            BusinessType::Manufacturing => "manufacturing",
            BusinessType::Retail => "retail",
            BusinessType::Services => "services",
            BusinessType::Agriculture => "agriculture",
            BusinessType::Handicrafts => "handicrafts",
            BusinessType::Food => "food",
            BusinessType::Textiles => "textiles",
            BusinessType::Technology => "technology",
            BusinessType::Education => "education",
            BusinessType::Healthcare => "healthcare",
            BusinessType::Other => "other",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BusinessType::Manufacturing => "Manufacturing",
            BusinessType::Retail => "Retail",
            BusinessType::Services => "Services",
            BusinessType::Agriculture => "Agriculture",
            BusinessType::Handicrafts => "Handicrafts",
            BusinessType::Food => "Food & Beverages",
            BusinessType::Textiles => "Textiles",
            BusinessType::Technology => "Technology",
            BusinessType::Education => "Education",
            BusinessType::Healthcare => "Healthcare",
            BusinessType::Other => "Other",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Default)]
pub struct ContactState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub business: Option<BusinessType>,
    pub city: String,
}

impl ContactState {
    pub fn mount() -> Self {
        Self::default()
    }

    /// The fields as the relay payload expects them.
    pub fn fields(&self) -> FormFields {
        FormFields {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            business_type: self
                .business
                .map(|b| b.form_value().to_string())
                .unwrap_or_default(),
            city: self.city.clone(),
        }
    }

    pub fn view<'a>(&'a self, config: &'a SiteConfig) -> Element<'a, Message> {
        let intro = column![
            text("Register with WEDA").size(40).color(ui::INK),
            ui::lede("Join our community of women entrepreneurs in North Karnataka. Register to access our programs, networking opportunities, and support services."),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        let submit_enabled = self.fields().is_complete();
        let form = container(
            column![
                text("Registration Form").size(22).color(ui::INK),
                labeled("Name", text_input("Your name", &self.name).on_input(Message::NameChanged).padding(10)),
                labeled("Email", text_input("your@email.com", &self.email).on_input(Message::EmailChanged).padding(10)),
                labeled("Phone Number", text_input("+91 98765 43210", &self.phone).on_input(Message::PhoneChanged).padding(10)),
                column![
                    text("Type of Business").size(14).color(ui::MUTED),
                    pick_list(&BusinessType::ALL[..], self.business, Message::BusinessSelected)
                        .placeholder("Select your business type")
                        .width(Length::Fill)
                        .padding(10),
                ]
                .spacing(6),
                labeled("City", text_input("Your city", &self.city).on_input(Message::CityChanged).padding(10)),
                button(text("Submit Registration").size(16).color(Color::WHITE))
                    .style(move |_theme: &Theme, _status| button::Style {
                        background: Some(Background::Color(if submit_enabled {
                            ui::ACCENT_ORANGE
                        } else {
                            ui::MUTED
                        })),
                        text_color: Color::WHITE,
                        border: iced::border::rounded(8.0),
                        ..button::Style::default()
                    })
                    .padding([12.0, 24.0])
                    .width(Length::Fill)
                    .on_press_maybe(submit_enabled.then_some(Message::SubmitRegistration)),
            ]
            .spacing(18),
        )
        .padding(32)
        .width(Length::FillPortion(1))
        .style(ui::card);

        let mut info_lines = column![
            text("Contact Information").size(22).color(ui::INK),
            info("Address", &config.address),
            info("Phone", &config.phone),
            info("WhatsApp", &config.whatsapp),
        ]
        .spacing(16);
        for email in &config.emails {
            info_lines = info_lines.push(info("Email", email));
        }

        let aside = column![
            container(info_lines).padding(32).style(ui::card),
            container(
                column![
                    text("Learn More About WEDA").size(18).color(ui::INK),
                    ui::lede("Discover our journey, values, and the dedicated team behind our mission."),
                    button(text("Explore About Us →").size(15).color(ui::ACCENT_ORANGE))
                        .style(button::text)
                        .padding(0)
                        .on_press(Message::Navigate(crate::router::Route::About)),
                ]
                .spacing(10),
            )
            .padding(24)
            .style(ui::card),
        ]
        .spacing(24)
        .width(Length::FillPortion(1));

        container(
            column![
                intro,
                row![form, aside].spacing(40),
            ]
            .spacing(40)
            .max_width(1100.0)
            .padding([96.0, 48.0]),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(ui::band(ui::PAPER))
        .into()
    }
}

/// A label over its input, the form's repeating unit.
fn labeled<'a>(
    label: &'static str,
    input: iced::widget::TextInput<'a, Message>,
) -> Element<'a, Message> {
    column![text(label).size(14).color(ui::MUTED), input]
        .spacing(6)
        .into()
}

/// One contact-information line.
fn info<'a>(label: &'static str, value: &'a str) -> Element<'a, Message> {
    column![
        text(label).size(13).color(ui::BRAND_BLUE),
        text(value).size(15).color(ui::MUTED),
    ]
    .spacing(2)
    .into()
}
