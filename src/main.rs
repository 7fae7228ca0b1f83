use std::time::{Duration, Instant};

use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::{column, image as iced_image, scrollable as scroll_widget};
use iced::{Element, Length, Subscription, Task, Theme};

mod assets;
mod config;
mod gallery;
mod relay;
mod router;
mod state;
mod ui;

use assets::Assets;
use config::SiteConfig;
use relay::{ExternalRelay, FormPayload, FormRelay};
use router::{Location, Route};
use state::popup::PopupController;
use state::scroll::ScrollSnapshot;
use state::session::MemorySession;
use state::toast::ToastController;
use ui::about::AboutState;
use ui::contact::{BusinessType, ContactState};
use ui::gallery::GalleryState;
use ui::home::HomeState;

/// The mounted screen. Exactly one exists at a time; navigating away
/// drops the old state together with its latches and trackers, and
/// mounting builds a fresh one.
enum Screen {
    Home(HomeState),
    About(AboutState),
    Contact(ContactState),
    Gallery(GalleryState),
}

impl Screen {
    fn route(&self) -> Route {
        match self {
            Screen::Home(_) => Route::Home,
            Screen::About(_) => Route::About,
            Screen::Contact(_) => Route::Contact,
            Screen::Gallery(_) => Route::Gallery,
        }
    }
}

/// Main application state
struct Weda {
    config: SiteConfig,
    assets: Assets,
    /// Session-scoped storage; dies with the process.
    session: MemorySession,
    relay: Box<dyn FormRelay>,
    screen: Screen,
    popup: PopupController,
    toast: ToastController,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User picked a navigation target.
    Navigate(Route),
    /// The page scrollable moved.
    Scrolled(scrollable::Viewport),
    /// Shared clock for the popup and toast controllers.
    Tick(Instant),
    /// A hero preload finished; the route tags which screen asked.
    HeroLoaded(Route, Result<iced_image::Handle, String>),
    /// "View Brochure" was pressed.
    BrochureRequested,
    /// The brochure save dialog finished.
    BrochureSaved(Result<Option<std::path::PathBuf>, String>),
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    CityChanged(String),
    BusinessSelected(BusinessType),
    SubmitRegistration,
    PreviousPage,
    NextPage,
    /// Popup call-to-action: close it and go to the contact screen.
    PopupRegister,
    PopupDismissed,
    ToastDismissed,
    /// Swallowed event, e.g. a click on the popup card body.
    Noop,
}

impl Weda {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = SiteConfig::load();
        let assets = Assets::resolve(config.asset_dir.as_deref());
        assets.verify();

        let session = MemorySession::new();
        let popup = PopupController::mount(&session, Instant::now());

        // A location may be handed in on the command line, e.g. the
        // relay's redirect when the app is registered as its handler.
        let start = std::env::args()
            .nth(1)
            .map(|loc| router::parse(&loc))
            .unwrap_or_else(Location::home);

        let mut app = Weda {
            config,
            assets,
            session,
            relay: Box::new(ExternalRelay),
            screen: Screen::Home(HomeState::mount()),
            popup,
            toast: ToastController::hidden(),
        };
        let task = app.open(start);
        (app, task)
    }

    /// Mount the screen for a route, together with any background work
    /// it needs.
    fn mount(route: Route, assets: &Assets) -> (Screen, Task<Message>) {
        match route {
            Route::Home => (
                Screen::Home(HomeState::mount()),
                preload_hero(assets, ui::home::HERO_IMAGE, Route::Home),
            ),
            Route::About => (
                Screen::About(AboutState::mount()),
                preload_hero(assets, ui::about::HERO_IMAGE, Route::About),
            ),
            Route::Contact => (Screen::Contact(ContactState::mount()), Task::none()),
            Route::Gallery => (Screen::Gallery(GalleryState::mount()), Task::none()),
        }
    }

    /// Navigate to a parsed location. Consumes the success flag (the
    /// stored route never carries it) and snaps the page back to the
    /// top, like a fresh page load.
    fn open(&mut self, location: Location) -> Task<Message> {
        let (screen, task) = Self::mount(location.route, &self.assets);
        self.screen = screen;

        if location.success {
            self.toast.trigger(Instant::now());
        }

        Task::batch([
            task,
            scrollable::scroll_to(ui::layout::page_scroll_id(), AbsoluteOffset::default()),
        ])
    }

    fn navigate(&mut self, route: Route) -> Task<Message> {
        self.open(Location { route, success: false })
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => self.navigate(route),

            Message::Scrolled(viewport) => {
                let snap = ScrollSnapshot::from_viewport(&viewport);
                match &mut self.screen {
                    Screen::Home(home) => home.observe(&snap),
                    Screen::About(about) => about.observe(&snap),
                    // No tracked sections on the other screens.
                    Screen::Contact(_) | Screen::Gallery(_) => {}
                }
                Task::none()
            }

            Message::Tick(now) => {
                self.popup.tick(&mut self.session, now);
                self.toast.tick(now);
                Task::none()
            }

            Message::HeroLoaded(route, result) => {
                match result {
                    Ok(handle) => match (&mut self.screen, route) {
                        (Screen::Home(home), Route::Home) => home.hero_loaded(handle),
                        (Screen::About(about), Route::About) => about.hero_loaded(handle),
                        // Navigated away before the load finished.
                        _ => {}
                    },
                    Err(e) => log::warn!("hero image unavailable, keeping the gradient: {e}"),
                }
                Task::none()
            }

            Message::BrochureRequested => Task::perform(
                assets::export_brochure(self.assets.path(assets::BROCHURE)),
                Message::BrochureSaved,
            ),
            Message::BrochureSaved(Ok(Some(path))) => {
                log::info!("brochure saved to {}", path.display());
                Task::none()
            }
            Message::BrochureSaved(Ok(None)) => Task::none(),
            Message::BrochureSaved(Err(e)) => {
                log::warn!("{e}");
                Task::none()
            }

            Message::NameChanged(value) => self.edit_form(|form| form.name = value),
            Message::EmailChanged(value) => self.edit_form(|form| form.email = value),
            Message::PhoneChanged(value) => self.edit_form(|form| form.phone = value),
            Message::CityChanged(value) => self.edit_form(|form| form.city = value),
            Message::BusinessSelected(kind) => self.edit_form(|form| form.business = Some(kind)),

            Message::SubmitRegistration => {
                let Screen::Contact(contact) = &self.screen else {
                    return Task::none();
                };
                let fields = contact.fields();
                if !fields.is_complete() {
                    return Task::none();
                }

                // The relay forwards the post and redirects the
                // visitor; following that redirect is what raises the
                // success toast.
                let payload = FormPayload::new(&self.config, &fields, Route::Contact);
                let redirect = self.relay.deliver(&payload);
                let location = router::parse(&redirect);
                self.open(location)
            }

            Message::PreviousPage => {
                if let Screen::Gallery(gallery) = &mut self.screen {
                    gallery.previous_page();
                }
                Task::none()
            }
            Message::NextPage => {
                if let Screen::Gallery(gallery) = &mut self.screen {
                    gallery.next_page();
                }
                Task::none()
            }

            Message::PopupRegister => {
                self.popup.dismiss();
                self.navigate(Route::Contact)
            }
            Message::PopupDismissed => {
                self.popup.dismiss();
                Task::none()
            }
            Message::ToastDismissed => {
                self.toast.dismiss();
                Task::none()
            }
            Message::Noop => Task::none(),
        }
    }

    fn edit_form(&mut self, edit: impl FnOnce(&mut ContactState)) -> Task<Message> {
        if let Screen::Contact(contact) = &mut self.screen {
            edit(contact);
        }
        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let route = self.screen.route();

        let content: Element<'_, Message> = match &self.screen {
            Screen::Home(home) => home.view(&self.config, &self.assets),
            Screen::About(about) => about.view(&self.assets),
            Screen::Contact(contact) => contact.view(&self.config),
            Screen::Gallery(gallery) => gallery.view(&self.assets),
        };

        let page = scroll_widget(column![content, ui::layout::footer(&self.config)])
            .id(ui::layout::page_scroll_id())
            .on_scroll(Message::Scrolled)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers: Vec<Element<'_, Message>> = vec![
            page.into(),
            ui::layout::header(route, &self.config),
        ];

        if self.popup.is_shown() {
            layers.push(ui::layout::join_popup(&self.config));
        }
        if self.toast.is_visible() {
            layers.push(ui::layout::success_toast(
                self.toast.fraction_remaining(Instant::now()),
            ));
        }

        iced::widget::stack(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// The clock only runs while someone is listening: an armed popup
    /// or a visible toast. Everywhere else the subscription is dropped,
    /// which cancels the timer before it can fire against gone state.
    fn subscription(&self) -> Subscription<Message> {
        if self.popup.is_armed() || self.toast.is_visible() {
            iced::time::every(Duration::from_millis(100)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    env_logger::init();

    iced::application("WEDA", Weda::update, Weda::view)
        .subscription(Weda::subscription)
        .theme(Weda::theme)
        .window_size((1280.0, 720.0))
        .centered()
        .run_with(Weda::new)
}

/// Kick off a hero-background preload for a screen. The result comes
/// back tagged with the route so a load that outlives its screen is
/// dropped instead of applied to the wrong one.
fn preload_hero(assets: &Assets, file: &str, route: Route) -> Task<Message> {
    let path = assets.path(file);
    Task::perform(assets::preload(path), move |result| {
        Message::HeroLoaded(route, result.map_err(|e| e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::popup::{ARM_DELAY, SUPPRESS_KEY};
    use crate::state::session::SessionStore;

    /// Relay fake: redirects like the real service, no delivery.
    struct RecordingRelay;

    impl FormRelay for RecordingRelay {
        fn deliver(&self, payload: &FormPayload) -> String {
            payload.redirect().to_string()
        }
    }

    fn test_app() -> Weda {
        let config = SiteConfig::default();
        let assets = Assets::resolve(None);
        let session = MemorySession::new();
        let popup = PopupController::mount(&session, Instant::now());
        Weda {
            config,
            assets,
            session,
            relay: Box::new(RecordingRelay),
            screen: Screen::Home(HomeState::mount()),
            popup,
            toast: ToastController::hidden(),
        }
    }

    #[test]
    fn test_success_location_raises_toast_and_strips_parameter() {
        let mut app = test_app();
        let _ = app.open(router::parse("/contact?success=true"));

        assert!(app.toast.is_visible());
        assert_eq!(app.screen.route(), Route::Contact);

        // The stored route carries no query, so re-opening it cannot
        // re-trigger the toast.
        app.toast.dismiss();
        let _ = app.navigate(app.screen.route());
        assert!(!app.toast.is_visible());
    }

    #[test]
    fn test_plain_contact_never_shows_toast() {
        let mut app = test_app();
        let _ = app.open(router::parse("/contact"));
        assert!(!app.toast.is_visible());
    }

    #[test]
    fn test_submission_round_trip() {
        let mut app = test_app();
        let _ = app.navigate(Route::Contact);

        let _ = app.update(Message::NameChanged("Asha Kulkarni".to_string()));
        let _ = app.update(Message::EmailChanged("asha@example.com".to_string()));
        let _ = app.update(Message::PhoneChanged("+91 98765 43210".to_string()));
        let _ = app.update(Message::BusinessSelected(BusinessType::Handicrafts));
        let _ = app.update(Message::CityChanged("Hubballi".to_string()));

        let _ = app.update(Message::SubmitRegistration);

        assert_eq!(app.screen.route(), Route::Contact);
        assert!(app.toast.is_visible());
    }

    #[test]
    fn test_incomplete_submission_is_ignored() {
        let mut app = test_app();
        let _ = app.navigate(Route::Contact);
        let _ = app.update(Message::NameChanged("Asha".to_string()));
        let _ = app.update(Message::SubmitRegistration);
        assert!(!app.toast.is_visible());
    }

    #[test]
    fn test_popup_suppressed_across_route_changes() {
        let mut app = test_app();
        assert!(app.popup.is_armed());

        let fire_at = Instant::now() + ARM_DELAY;
        let _ = app.update(Message::Tick(fire_at));
        assert!(app.popup.is_shown());
        assert_eq!(app.session.get(SUPPRESS_KEY).as_deref(), Some("1"));

        let _ = app.update(Message::PopupDismissed);

        // Route changes keep the same session; a remount of the
        // controller must stay quiet.
        let _ = app.navigate(Route::Gallery);
        let remounted = PopupController::mount(&app.session, Instant::now());
        assert!(!remounted.is_armed());
    }

    #[test]
    fn test_popup_register_closes_and_navigates() {
        let mut app = test_app();
        let _ = app.update(Message::Tick(Instant::now() + ARM_DELAY));
        assert!(app.popup.is_shown());

        let _ = app.update(Message::PopupRegister);
        assert!(!app.popup.is_shown());
        assert_eq!(app.screen.route(), Route::Contact);
    }

    #[test]
    fn test_clock_stops_when_nothing_listens() {
        let mut app = test_app();
        assert!(app.popup.is_armed());

        let _ = app.update(Message::Tick(Instant::now() + ARM_DELAY));
        let _ = app.update(Message::PopupDismissed);

        // Nothing armed, nothing visible: the subscription goes away
        // and with it the timer.
        assert!(!app.popup.is_armed());
        assert!(!app.toast.is_visible());
    }

    #[test]
    fn test_gallery_is_remounted_per_visit() {
        let mut app = test_app();
        let _ = app.navigate(Route::Gallery);
        let Screen::Gallery(gallery) = &app.screen else {
            panic!("expected the gallery screen");
        };
        assert_eq!(gallery.total_pages(), 2);

        // Page forward, leave, come back: a fresh visit starts over.
        let _ = app.update(Message::NextPage);
        let _ = app.navigate(Route::Home);
        let _ = app.navigate(Route::Gallery);
        let Screen::Gallery(gallery) = &app.screen else {
            panic!("expected the gallery screen");
        };
        assert_eq!(gallery.page(), 1);
    }
}
