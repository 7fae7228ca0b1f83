//! The home screen: hero, who-we-are, the tall impact section with its
//! alternating panels, the events preview, supported sectors and the
//! team preview.

use iced::widget::{button, column, container, image as iced_image, row, text, Space};
use iced::{Alignment, Background, Color, ContentFit, Element, Length, Theme};

use crate::assets::Assets;
use crate::config::SiteConfig;
use crate::router::Route;
use crate::state::progress::{Panel, ScrollProgress};
use crate::state::scroll::{ScrollSnapshot, SectionRect};
use crate::state::visibility::VisibilityLatch;
use crate::ui;
use crate::Message;

/// Background photograph behind the hero.
pub const HERO_IMAGE: &str = "home1.webp";

/// Fixed section heights, top to bottom. The scroll trackers derive
/// their rectangles from these, so view code must honor them.
mod layout {
    pub const HERO_HEIGHT: f32 = 720.0;
    pub const WHO_HEIGHT: f32 = 560.0;
    pub const IMPACT_HEIGHT: f32 = 1500.0;
    pub const EVENTS_HEIGHT: f32 = 860.0;
    pub const SECTORS_HEIGHT: f32 = 500.0;
    pub const TEAM_HEIGHT: f32 = 720.0;

    pub const WHO_TOP: f32 = HERO_HEIGHT;
    pub const IMPACT_TOP: f32 = WHO_TOP + WHO_HEIGHT;
    pub const EVENTS_TOP: f32 = IMPACT_TOP + IMPACT_HEIGHT;
    pub const SECTORS_TOP: f32 = EVENTS_TOP + EVENTS_HEIGHT;
    pub const TEAM_TOP: f32 = SECTORS_TOP + SECTORS_HEIGHT;
}

/// Event photographs previewed on the home screen, in display order.
const EVENTS_PREVIEW: [(&str, &str); 6] = [
    ("15.webp", "Annual Exhibition"),
    ("30.webp", "Leadership Summit"),
    ("13.webp", "Recognition Awards"),
    ("1.webp", "Workshop Series"),
    ("26.webp", "Community Fair"),
    ("about.webp", "Achievement Ceremony"),
];

/// Sectors the association supports.
const SECTORS: [(&str, &str); 8] = [
    ("Handicrafts", "Traditional and contemporary handcrafted products with modern design appeal"),
    ("Textiles & Fashion Designing", "Modern textile design and fashion entrepreneurship with sustainable practices"),
    ("Jute Products", "Eco-friendly jute products and sustainable packaging solutions"),
    ("Food Products", "Traditional and innovative food products with quality standards"),
    ("Bags & Accessories", "Stylish bags and fashion accessories with unique designs"),
    ("Jewelry", "Handcrafted jewelry with traditional and contemporary designs"),
    ("Art & Painting", "Traditional and modern art forms with creative expression"),
    ("Event Management", "Professional event planning and management services"),
];

#[derive(Debug)]
pub struct HomeState {
    /// Hero photograph, present once the background preload finishes.
    hero: Option<iced_image::Handle>,
    who_latch: VisibilityLatch,
    impact: ScrollProgress,
    events_latch: VisibilityLatch,
    team_latch: VisibilityLatch,
}

impl HomeState {
    /// Build the screen state and run the mount-time observation so
    /// above-the-fold sections are visible without any scrolling.
    pub fn mount() -> Self {
        let mut state = HomeState {
            hero: None,
            who_latch: VisibilityLatch::new(),
            impact: ScrollProgress::new(),
            events_latch: VisibilityLatch::new(),
            team_latch: VisibilityLatch::new(),
        };
        state.observe(&ScrollSnapshot::at_mount());
        state
    }

    pub fn hero_loaded(&mut self, handle: iced_image::Handle) {
        self.hero = Some(handle);
    }

    /// Feed one scroll observation to every tracker on this screen.
    pub fn observe(&mut self, snap: &ScrollSnapshot) {
        self.who_latch
            .observe(SectionRect::new(layout::WHO_TOP, layout::WHO_HEIGHT), snap);
        self.impact
            .observe(SectionRect::new(layout::IMPACT_TOP, layout::IMPACT_HEIGHT), snap);
        self.events_latch
            .observe(SectionRect::new(layout::EVENTS_TOP, layout::EVENTS_HEIGHT), snap);
        self.team_latch
            .observe(SectionRect::new(layout::TEAM_TOP, layout::TEAM_HEIGHT), snap);
    }

    pub fn view<'a>(&'a self, config: &'a SiteConfig, assets: &Assets) -> Element<'a, Message> {
        column![
            self.hero_section(config),
            self.who_section(assets),
            self.impact_section(assets),
            self.events_section(assets),
            sectors_section(),
            self.team_section(),
        ]
        .width(Length::Fill)
        .into()
    }

    fn hero_section<'a>(&'a self, config: &'a SiteConfig) -> Element<'a, Message> {
        let copy = column![
            text(&config.tagline).size(44).color(Color::WHITE),
            text("WEDA is a charitable organization established in 2009 with a mission to empower women through entrepreneurship, supporting them in becoming socially and economically self-reliant through skill development, training, product development, and market exposure.")
                .size(16)
                .color(Color { a: 0.9, ..Color::WHITE }),
            row![
                button(text("View Brochure").size(16).color(ui::ACCENT_ORANGE))
                    .style(|_theme: &Theme, _status| button::Style {
                        background: Some(Background::Color(Color::WHITE)),
                        text_color: ui::ACCENT_ORANGE,
                        border: iced::border::rounded(8.0),
                        ..button::Style::default()
                    })
                    .padding([12.0, 28.0])
                    .on_press(Message::BrochureRequested),
                button(text("Contact Us").size(16).color(Color::WHITE))
                    .style(|_theme: &Theme, _status| button::Style {
                        background: Some(Background::Color(ui::ACCENT_ORANGE)),
                        text_color: Color::WHITE,
                        border: iced::border::rounded(8.0),
                        ..button::Style::default()
                    })
                    .padding([12.0, 28.0])
                    .on_press(Message::Navigate(Route::Contact)),
            ]
            .spacing(16),
        ]
        .spacing(24)
        .max_width(880.0)
        .align_x(Alignment::Center);

        hero(self.hero.as_ref(), layout::HERO_HEIGHT, copy.into())
    }

    fn who_section(&self, assets: &Assets) -> Element<'_, Message> {
        let content = container(
            row![
                container(
                    iced_image(iced_image::Handle::from_path(assets.path("who.webp")))
                        .width(Length::Fill)
                        .height(Length::Fixed(420.0))
                        .content_fit(ContentFit::Cover),
                )
                .width(Length::FillPortion(1)),
                column![
                    ui::heading("Who We Are"),
                    ui::lede("WEDA is a platform dedicated to supporting women entrepreneurs by enhancing their skills, confidence, and economic independence. We provide structured training, product development support, and marketing assistance to help women successfully enter local, national, and global markets."),
                ]
                .spacing(20)
                .width(Length::FillPortion(1)),
            ]
            .spacing(48)
            .align_y(Alignment::Center)
            .padding([0.0, 64.0]),
        )
        .center_y(Length::Fill);

        section(
            layout::WHO_HEIGHT,
            ui::PAPER,
            ui::reveal(self.who_latch.is_visible(), content.into()),
        )
    }

    /// The tall impact section. Scrolling through it swaps between the
    /// story panel and the target panel at the halfway point.
    fn impact_section(&self, assets: &Assets) -> Element<'_, Message> {
        let panel: Element<'_, Message> = match self.impact.panel() {
            Panel::First => container(
                column![
                    ui::heading("Our Impact So Far"),
                    ui::lede("Since 2009, WEDA has been actively empowering women entrepreneurs through continuous skill development programs. We organize exhibitions, workshops, and awareness initiatives, create market platforms for women-led businesses, and support the development of eco-friendly and traditional products."),
                    iced_image(iced_image::Handle::from_path(assets.path("impact.webp")))
                        .width(Length::Fill)
                        .height(Length::Fixed(320.0))
                        .content_fit(ContentFit::Cover),
                ]
                .spacing(20)
                .max_width(760.0),
            )
            .padding(32)
            .style(ui::card)
            .into(),
            Panel::Second => container(
                column![
                    ui::heading("Our Target"),
                    text("5000+").size(64).color(ui::ACCENT_RED),
                    ui::lede("Women to be trained, supported and brought to market in the next 5 years, with exhibitions, workshops and awareness initiatives across North Karnataka."),
                ]
                .spacing(20)
                .max_width(760.0)
                .align_x(Alignment::Center),
            )
            .padding(32)
            .style(ui::card)
            .into(),
        };

        section(
            layout::IMPACT_HEIGHT,
            Color::WHITE,
            container(panel).center_x(Length::Fill).center_y(Length::Fill).into(),
        )
    }

    fn events_section(&self, assets: &Assets) -> Element<'_, Message> {
        let mut grid = iced_aw::Wrap::new().spacing(16.0).line_spacing(16.0);
        for (file, label) in EVENTS_PREVIEW {
            grid = grid.push(
                container(
                    column![
                        iced_image(iced_image::Handle::from_path(assets.path(file)))
                            .width(Length::Fixed(340.0))
                            .height(Length::Fixed(200.0))
                            .content_fit(ContentFit::Cover),
                        text(label).size(14).color(ui::MUTED),
                    ]
                    .spacing(8),
                )
                .padding(10)
                .style(ui::card),
            );
        }

        let content = container(
            column![
                ui::heading("Events & Awards"),
                ui::lede("Celebrating our achievements and showcasing the vibrant events that empower our community"),
                grid,
                button(text("View More").size(16).color(Color::WHITE))
                    .style(|_theme: &Theme, _status| button::Style {
                        background: Some(Background::Color(ui::ACCENT_RED)),
                        text_color: Color::WHITE,
                        border: iced::border::rounded(8.0),
                        ..button::Style::default()
                    })
                    .padding([12.0, 28.0])
                    .on_press(Message::Navigate(Route::Gallery)),
            ]
            .spacing(24)
            .align_x(Alignment::Center)
            .padding([48.0, 64.0]),
        )
        .center_x(Length::Fill);

        section(
            layout::EVENTS_HEIGHT,
            Color::WHITE,
            ui::reveal(self.events_latch.is_visible(), content.into()),
        )
    }

    fn team_section(&self) -> Element<'_, Message> {
        let mut grid = iced_aw::Wrap::new().spacing(16.0).line_spacing(16.0);
        for (name, role) in super::about::TEAM.iter().take(6) {
            grid = grid.push(
                container(
                    column![
                        text(*name).size(17).color(ui::INK),
                        text(*role).size(14).color(ui::BRAND_BLUE),
                    ]
                    .spacing(6)
                    .width(Length::Fixed(300.0))
                    .align_x(Alignment::Center),
                )
                .padding(24)
                .style(ui::card),
            );
        }

        let content = container(
            column![
                ui::heading("Our Team"),
                ui::lede("Meet the dedicated women leading WEDA and empowering our community"),
                grid,
                button(text("View More").size(16).color(Color::WHITE))
                    .style(|_theme: &Theme, _status| button::Style {
                        background: Some(Background::Color(ui::ACCENT_RED)),
                        text_color: Color::WHITE,
                        border: iced::border::rounded(8.0),
                        ..button::Style::default()
                    })
                    .padding([12.0, 28.0])
                    .on_press(Message::Navigate(Route::About)),
            ]
            .spacing(24)
            .align_x(Alignment::Center)
            .padding([48.0, 64.0]),
        )
        .center_x(Length::Fill);

        section(
            layout::TEAM_HEIGHT,
            ui::PAPER,
            ui::reveal(self.team_latch.is_visible(), content.into()),
        )
    }
}

fn sectors_section<'a>() -> Element<'a, Message> {
    let mut strip = iced_aw::Wrap::new().spacing(16.0).line_spacing(16.0);
    for (name, blurb) in SECTORS {
        strip = strip.push(
            container(
                column![
                    text(name).size(16).color(ui::INK),
                    text(blurb).size(13).color(ui::MUTED),
                ]
                .spacing(8)
                .width(Length::Fixed(250.0)),
            )
            .padding(20)
            .style(ui::card),
        );
    }

    let content = container(
        column![
            ui::heading("Sectors We Support"),
            ui::lede("We empower women entrepreneurs across diverse sectors with comprehensive support and resources"),
            strip,
        ]
        .spacing(24)
        .align_x(Alignment::Center)
        .padding([48.0, 64.0]),
    )
    .center_x(Length::Fill);

    section(layout::SECTORS_HEIGHT, ui::PAPER, content.into())
}

/// A fixed-height band with a flat background. Heights must match the
/// layout constants the trackers use.
fn section(height: f32, background: Color, content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(ui::band(background))
        .into()
}

/// A hero band: the photograph once loaded (gradient until then, or
/// forever if the load fails), the brand tint, and the copy on top.
pub fn hero<'a>(
    photo: Option<&iced_image::Handle>,
    height: f32,
    copy: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut layers: Vec<Element<'a, Message>> = Vec::new();

    if let Some(handle) = photo {
        layers.push(
            iced_image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(height))
                .content_fit(ContentFit::Cover)
                .into(),
        );
    }

    // The tint doubles as the loading fallback: over a photo it is a
    // translucent wash, alone it is the gradient itself.
    layers.push(
        container(Space::new(Length::Fill, Length::Fill))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .style(ui::hero_gradient)
            .into(),
    );

    layers.push(
        container(copy)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding([0.0, 48.0])
            .into(),
    );

    iced::widget::stack(layers)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_reveals_above_the_fold_only() {
        let state = HomeState::mount();
        // The hero fills the default viewport, so nothing below it can
        // have latched yet.
        assert!(!state.who_latch.is_visible());
        assert!(!state.events_latch.is_visible());
        assert!(!state.team_latch.is_visible());
    }

    #[test]
    fn test_scrolling_latches_sections_in_order() {
        let mut state = HomeState::mount();

        state.observe(&ScrollSnapshot { offset_y: layout::WHO_TOP, viewport_height: 720.0 });
        assert!(state.who_latch.is_visible());
        assert!(!state.team_latch.is_visible());

        state.observe(&ScrollSnapshot { offset_y: layout::TEAM_TOP, viewport_height: 720.0 });
        assert!(state.team_latch.is_visible());

        // Back to the top: everything stays latched.
        state.observe(&ScrollSnapshot::at_mount());
        assert!(state.who_latch.is_visible());
        assert!(state.team_latch.is_visible());
    }

    #[test]
    fn test_impact_panels_swap_mid_section() {
        let mut state = HomeState::mount();

        state.observe(&ScrollSnapshot { offset_y: layout::IMPACT_TOP, viewport_height: 720.0 });
        assert_eq!(state.impact.panel(), Panel::First);

        // Past the midpoint of the scrollable span.
        let span = layout::IMPACT_HEIGHT - 720.0;
        state.observe(&ScrollSnapshot {
            offset_y: layout::IMPACT_TOP + span * 0.75,
            viewport_height: 720.0,
        });
        assert_eq!(state.impact.panel(), Panel::Second);
    }
}
