//! The gallery screen: the shuffled catalog, six photographs per page.
//!
//! The order is fixed for the lifetime of one visit. Paging through
//! the grid never reshuffles; only leaving the screen and coming back
//! deals a new order.

use iced::widget::{button, column, container, image as iced_image, row, text};
use iced::{Alignment, Color, ContentFit, Element, Length};

use crate::assets::Assets;
use crate::gallery::catalog::{catalog, ImageDescriptor};
use crate::gallery::paginator::{self, PAGE_SIZE};
use crate::gallery::shuffle;
use crate::ui;
use crate::Message;

#[derive(Debug)]
pub struct GalleryState {
    /// The shuffled order, dealt once at mount.
    shuffled: Vec<ImageDescriptor>,
    /// Current page, 1-based.
    page: usize,
}

impl GalleryState {
    pub fn mount() -> Self {
        GalleryState {
            shuffled: shuffle::shuffled(catalog()),
            page: 1,
        }
    }

    pub fn total_pages(&self) -> usize {
        paginator::total_pages(self.shuffled.len(), PAGE_SIZE)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Step back one page. The control is disabled on page one, so a
    /// stray message there is simply ignored.
    pub fn previous_page(&mut self) {
        if paginator::has_prev(self.page) {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if paginator::has_next(self.page, self.total_pages()) {
            self.page += 1;
        }
    }

    pub fn view(&self, assets: &Assets) -> Element<'_, Message> {
        let intro = column![
            text("Events & Achievements").size(40).color(ui::INK),
            ui::lede("Explore our journey through memorable events and prestigious awards that celebrate the achievements of women entrepreneurs"),
        ]
        .spacing(12)
        .align_x(Alignment::Center);

        let mut grid = iced_aw::Wrap::new().spacing(16.0).line_spacing(16.0);
        for descriptor in paginator::page_slice(&self.shuffled, PAGE_SIZE, self.page) {
            grid = grid.push(photo_card(descriptor, assets));
        }

        let total = self.total_pages();
        let pager = row![
            button(text("Previous").size(15))
                .padding([10.0, 20.0])
                .on_press_maybe(paginator::has_prev(self.page).then_some(Message::PreviousPage)),
            text(format!("Page {} of {}", self.page, total)).size(15).color(ui::MUTED),
            button(text("Next").size(15))
                .padding([10.0, 20.0])
                .on_press_maybe(paginator::has_next(self.page, total).then_some(Message::NextPage)),
        ]
        .spacing(20)
        .align_y(Alignment::Center);

        container(
            column![intro, grid, pager]
                .spacing(36)
                .align_x(Alignment::Center)
                .padding([96.0, 48.0]),
        )
        .width(Length::Fill)
        .center_x(Length::Fill)
        .style(ui::band(ui::PAPER))
        .into()
    }
}

/// One photograph card with its caption and category badge.
fn photo_card<'a>(descriptor: &ImageDescriptor, assets: &Assets) -> Element<'a, Message> {
    container(
        column![
            iced_image(iced_image::Handle::from_path(assets.path(descriptor.path)))
                .width(Length::Fixed(340.0))
                .height(Length::Fixed(260.0))
                .content_fit(ContentFit::Cover),
            row![
                text(descriptor.label).size(15).color(ui::INK),
                iced::widget::Space::new(Length::Fill, Length::Shrink),
                container(
                    text(descriptor.category.label()).size(12).color(Color::WHITE),
                )
                .padding([3.0, 10.0])
                .style(ui::band(ui::BRAND_BLUE)),
            ]
            .align_y(Alignment::Center),
        ]
        .spacing(10),
    )
    .padding(10)
    .style(ui::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_deals_a_permutation() {
        let state = GalleryState::mount();
        assert_eq!(state.shuffled.len(), catalog().len());

        let mut ids: Vec<u32> = state.shuffled.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        let mut expected: Vec<u32> = catalog().iter().map(|d| d.id).collect();
        expected.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_page_changes_never_reshuffle() {
        let mut state = GalleryState::mount();
        let order_before = state.shuffled.clone();

        state.next_page();
        assert_eq!(state.page, 2);
        assert_eq!(state.shuffled, order_before);

        state.previous_page();
        assert_eq!(state.page, 1);
        assert_eq!(state.shuffled, order_before);
    }

    #[test]
    fn test_paging_is_clamped_at_the_edges() {
        let mut state = GalleryState::mount();

        state.previous_page();
        assert_eq!(state.page, 1, "no page before the first");

        let total = state.total_pages();
        for _ in 0..total * 2 {
            state.next_page();
        }
        assert_eq!(state.page, total, "no page past the last");
    }

    #[test]
    fn test_pages_cover_the_whole_catalog() {
        let mut state = GalleryState::mount();
        let mut seen: Vec<u32> = Vec::new();
        loop {
            seen.extend(
                paginator::page_slice(&state.shuffled, PAGE_SIZE, state.page)
                    .iter()
                    .map(|d| d.id),
            );
            if !paginator::has_next(state.page, state.total_pages()) {
                break;
            }
            state.next_page();
        }

        assert_eq!(seen.len(), catalog().len());
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), catalog().len(), "no duplicates across pages");
    }
}
