//! The about screen: hero, mission & vision, objectives, support
//! needs, future vision and the full team roster. The first three
//! content sections animate in through visibility latches.

use iced::widget::{column, container, image as iced_image, row, text};
use iced::{Alignment, Color, Element, Length};

use crate::assets::Assets;
use crate::state::scroll::{ScrollSnapshot, SectionRect};
use crate::state::visibility::VisibilityLatch;
use crate::ui;
use crate::Message;

/// Background photograph behind the hero.
pub const HERO_IMAGE: &str = "about.webp";

mod layout {
    pub const HERO_HEIGHT: f32 = 720.0;
    pub const MISSION_HEIGHT: f32 = 860.0;
    pub const OBJECTIVES_HEIGHT: f32 = 760.0;
    pub const NEEDS_HEIGHT: f32 = 700.0;
    pub const VISION_HEIGHT: f32 = 740.0;
    pub const TEAM_HEIGHT: f32 = 980.0;

    pub const MISSION_TOP: f32 = HERO_HEIGHT;
    pub const OBJECTIVES_TOP: f32 = MISSION_TOP + MISSION_HEIGHT;
    pub const NEEDS_TOP: f32 = OBJECTIVES_TOP + OBJECTIVES_HEIGHT;
    pub const VISION_TOP: f32 = NEEDS_TOP + NEEDS_HEIGHT;
    pub const TEAM_TOP: f32 = VISION_TOP + VISION_HEIGHT;
}

/// Office bearers and members, in protocol order. The home screen
/// previews the first six.
pub const TEAM: [(&str, &str); 10] = [
    ("Mrs. Rathi Shrinivasan", "President"),
    ("Mrs. Renu Mudholkar", "Vice President"),
    ("Mrs. Jyothi Hiremath", "Secretary"),
    ("Mrs. Bharathi Upadhya", "Joint Secretary"),
    ("Mrs. Rajeshwari Navale", "Treasurer"),
    ("Mrs. Kamala Deshpande", "EC Member"),
    ("Mrs. Rekha Porwale", "EC Member"),
    ("Mrs. Roopa Rashinkar", "Co-ordinator"),
    ("Mrs. Uma Ugalat", "Co-ordinator"),
    ("Mrs. Raksha Hubballi", "Co-ordinator"),
];

const OBJECTIVES: [&str; 6] = [
    "Promote entrepreneurship among women",
    "Improve socio-economic conditions",
    "Support development of marketable products",
    "Encourage technology adoption and innovation",
    "Provide job-oriented and computer training",
    "Strengthen supply chain and marketing networks",
];

const NEEDS: [&str; 6] = [
    "Affiliation with Ministry of Skill Development & Entrepreneurship",
    "Financial assistance to establish a Common Facility Centre (CFC)",
    "Permanent exhibition and marketing hubs",
    "Support for exhibitions across Karnataka",
    "Scholarship grants for skill training seekers",
    "Empanelment with government agencies",
];

const VISION: [&str; 7] = [
    "Establish a unified platform for women entrepreneurs",
    "Launch myweda.com, an e-commerce platform for web and mobile",
    "Connect women with micro-finance institutions",
    "Build strong demand and supply chains for Indian and global buyers",
    "Empower 1,000 women every year",
    "Organize exhibitions at district and taluka levels",
    "Involve SHGs at village level",
];

#[derive(Debug)]
pub struct AboutState {
    hero: Option<iced_image::Handle>,
    mission_latch: VisibilityLatch,
    objectives_latch: VisibilityLatch,
    needs_latch: VisibilityLatch,
}

impl AboutState {
    pub fn mount() -> Self {
        let mut state = AboutState {
            hero: None,
            mission_latch: VisibilityLatch::new(),
            objectives_latch: VisibilityLatch::new(),
            needs_latch: VisibilityLatch::new(),
        };
        state.observe(&ScrollSnapshot::at_mount());
        state
    }

    pub fn hero_loaded(&mut self, handle: iced_image::Handle) {
        self.hero = Some(handle);
    }

    pub fn observe(&mut self, snap: &ScrollSnapshot) {
        self.mission_latch
            .observe(SectionRect::new(layout::MISSION_TOP, layout::MISSION_HEIGHT), snap);
        self.objectives_latch
            .observe(SectionRect::new(layout::OBJECTIVES_TOP, layout::OBJECTIVES_HEIGHT), snap);
        self.needs_latch
            .observe(SectionRect::new(layout::NEEDS_TOP, layout::NEEDS_HEIGHT), snap);
    }

    pub fn view<'a>(&'a self, _assets: &Assets) -> Element<'a, Message> {
        column![
            self.hero_section(),
            self.mission_section(),
            self.objectives_section(),
            self.needs_section(),
            vision_section(),
            team_section(),
        ]
        .width(Length::Fill)
        .into()
    }

    fn hero_section(&self) -> Element<'_, Message> {
        let copy = column![
            text("About WEDA").size(52).color(Color::WHITE),
            text("Empowering Women Entrepreneurs of North Karnataka Since 2009")
                .size(20)
                .color(Color { a: 0.9, ..Color::WHITE }),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        super::home::hero(self.hero.as_ref(), layout::HERO_HEIGHT, copy.into())
    }

    fn mission_section(&self) -> Element<'_, Message> {
        let cards = row![
            pillar("Our Mission", "To empower women entrepreneurs through skill development, technology support, financial linkages, and access to national and global markets."),
            pillar("Our Vision", "To emerge as a strong platform for women entrepreneurs with shared objectives, enabling sustainable growth and economic independence."),
            pillar("Established 2009", "For over a decade, we've been supporting women entrepreneurs with training, product development, and market exposure at national and international levels."),
        ]
        .spacing(24);

        let content = container(
            column![
                ui::heading("Our Mission & Vision"),
                ui::lede("WEDA is a charitable organization established in 2009 and registered under Charitable Acts of 1960/17, Government of Karnataka. It functions as a common platform for women to develop entrepreneurial capabilities, access training, adopt improved technologies, and gain exposure to markets."),
                cards,
            ]
            .spacing(28)
            .align_x(Alignment::Center)
            .padding([48.0, 64.0]),
        )
        .center_x(Length::Fill);

        section(
            layout::MISSION_HEIGHT,
            ui::PAPER,
            ui::reveal(self.mission_latch.is_visible(), content.into()),
        )
    }

    fn objectives_section(&self) -> Element<'_, Message> {
        let content = checklist_section("Objectives of WEDA", &OBJECTIVES);
        section(
            layout::OBJECTIVES_HEIGHT,
            Color::WHITE,
            ui::reveal(self.objectives_latch.is_visible(), content),
        )
    }

    fn needs_section(&self) -> Element<'_, Message> {
        let content = checklist_section("What WEDA Needs (Support & Collaboration)", &NEEDS);
        section(
            layout::NEEDS_HEIGHT,
            ui::PAPER,
            ui::reveal(self.needs_latch.is_visible(), content),
        )
    }
}

fn vision_section<'a>() -> Element<'a, Message> {
    section(
        layout::VISION_HEIGHT,
        Color::WHITE,
        checklist_section("Future Vision of WEDA", &VISION),
    )
}

fn team_section<'a>() -> Element<'a, Message> {
    let mut grid = iced_aw::Wrap::new().spacing(16.0).line_spacing(16.0);
    for (name, role) in TEAM {
        grid = grid.push(
            container(
                column![
                    text(name).size(17).color(ui::INK),
                    text(role).size(14).color(ui::BRAND_BLUE),
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
        ]
        .spacing(24)
        .align_x(Alignment::Center)
        .padding([48.0, 64.0]),
    )
    .center_x(Length::Fill);

    section(layout::TEAM_HEIGHT, ui::PAPER, content.into())
}

/// One mission/vision pillar card.
fn pillar<'a>(title: &'static str, copy: &'static str) -> Element<'a, Message> {
    container(
        column![
            text(title).size(19).color(ui::INK),
            text(copy).size(14).color(ui::MUTED),
        ]
        .spacing(12),
    )
    .padding(28)
    .width(Length::FillPortion(1))
    .style(ui::card)
    .into()
}

/// A heading over a bulleted list, the shape shared by the
/// objectives, needs and vision sections.
fn checklist_section<'a>(title: &'static str, items: &'static [&'static str]) -> Element<'a, Message> {
    let mut list = column![].spacing(12).max_width(760.0);
    for item in items {
        list = list.push(
            row![
                text("•").size(16).color(ui::ACCENT_RED),
                text(*item).size(15).color(ui::MUTED),
            ]
            .spacing(10),
        );
    }

    container(
        column![ui::heading(title), list]
            .spacing(28)
            .align_x(Alignment::Center)
            .padding([48.0, 64.0]),
    )
    .center_x(Length::Fill)
    .into()
}

/// A fixed-height band; heights must match the layout constants.
fn section(height: f32, background: Color, content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(ui::band(background))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latches_start_unset_below_the_fold() {
        let state = AboutState::mount();
        assert!(!state.mission_latch.is_visible());
        assert!(!state.objectives_latch.is_visible());
        assert!(!state.needs_latch.is_visible());
    }

    #[test]
    fn test_each_section_latches_when_reached() {
        let mut state = AboutState::mount();

        state.observe(&ScrollSnapshot { offset_y: layout::MISSION_TOP, viewport_height: 720.0 });
        assert!(state.mission_latch.is_visible());
        assert!(!state.needs_latch.is_visible());

        state.observe(&ScrollSnapshot { offset_y: layout::NEEDS_TOP, viewport_height: 720.0 });
        assert!(state.needs_latch.is_visible());

        state.observe(&ScrollSnapshot::at_mount());
        assert!(state.mission_latch.is_visible());
        assert!(state.needs_latch.is_visible());
    }
}
