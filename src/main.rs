use iced::event::{self, Event};
use iced::keyboard::{self, key::Named, Key};
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{button, column, container, row, scrollable, stack, text, Space};
use iced::{touch, window, Alignment, Element, Length, Size, Subscription, Task, Theme};

mod config;
mod links;
mod logging;
mod state;
mod ui;

use config::Settings;
use links::{Launcher, SystemBrowser};
use state::carousel::{self, Carousel, ScrollMetrics, FRAME_INTERVAL, RECHECK_DELAY};
use state::catalog::{self, CatalogSource, Feed};
use state::events::{self as event_board, EventBoard, HostFormTarget};
use state::gallery::{Gallery, Lightbox, Step};
use state::overlay::OverlayManager;
use state::toast::{Toast, TOAST_TTL};
use ui::assets::{self, Artwork};

/// Initial window size
const WINDOW_SIZE: Size = Size::new(1280.0, 860.0);

/// The screens of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Events,
    Gallery,
}

impl Screen {
    const ALL: [Screen; 3] = [Screen::Home, Screen::Events, Screen::Gallery];

    fn label(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Events => "Events",
            Screen::Gallery => "Gallery",
        }
    }
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Header tab or in-page link
    ShowScreen(Screen),
    /// One-shot catalog read finished
    FeedLoaded(Feed, CatalogSource),
    /// Remote event artwork downloaded (or not)
    ArtworkLoaded(String, Option<iced::widget::image::Handle>),
    WindowResized(Size),

    /// A carousel strip reported its geometry
    CarouselScrolled(Feed, ScrollMetrics),
    /// Arrow control pressed; carries the signed step
    CarouselArrow(Feed, f32),
    /// Deferred re-measure after cards were laid out
    CarouselRecheck(Feed),
    /// Smooth scroll frame
    AnimationFrame,

    FilterSelected(String),
    /// Keyboard focus moved across the grid
    GridFocus(Step),
    /// Keyboard confirm on the focused grid item
    OpenFocused,
    OpenLightbox(usize),
    CloseLightbox,
    LightboxStep(Step),
    SwipeStarted(f32),
    SwipeEnded(f32),
    DownloadCurrent,

    OpenEvent(&'static str),
    CloseEvent,
    /// "Host an Event" (None) or "Host Similar Event" with the event title
    HostForm(Option<&'static str>),
    AddToCalendar,
    OpenDirections,

    DismissToast,
    ToastExpired(u64),
}

/// Main application state
struct Lounge {
    settings: Settings,
    screen: Screen,
    /// Owner of the page scroll lock
    overlays: OverlayManager,
    decoration: Carousel,
    atmosphere: Carousel,
    gallery: Gallery,
    gallery_requested: bool,
    events: EventBoard,
    artwork: Artwork,
    toast: Toast,
    launcher: Box<dyn Launcher>,
}

impl Lounge {
    /// Create a new instance of the application
    fn new(settings: Settings) -> (Self, Task<Message>) {
        let mut lounge = Self::with_launcher(settings, Box::new(SystemBrowser));
        lounge.on_resize(WINDOW_SIZE);

        let task = Task::batch([
            lounge.load(Feed::Decoration),
            lounge.load(Feed::Atmosphere),
        ]);

        tracing::info!(public_dir = %lounge.settings.public_dir.display(), "🎨 Carolina lounge initialized");
        (lounge, task)
    }

    fn with_launcher(settings: Settings, launcher: Box<dyn Launcher>) -> Self {
        let step = |feed| settings.carousel_step.unwrap_or_else(|| carousel::default_step(feed));
        let decoration = Carousel::new(Feed::Decoration, step(Feed::Decoration));
        let atmosphere = Carousel::new(Feed::Atmosphere, step(Feed::Atmosphere));

        Self {
            settings,
            screen: Screen::Home,
            overlays: OverlayManager::new(),
            decoration,
            atmosphere,
            gallery: Gallery::new(),
            gallery_requested: false,
            events: EventBoard::new(),
            artwork: Artwork::default(),
            toast: Toast::new(),
            launcher,
        }
    }

    /// Read a feed's catalog in the background
    fn load(&self, feed: Feed) -> Task<Message> {
        let public_dir = self.settings.public_dir.clone();
        Task::perform(catalog::load_feed(public_dir, feed), move |source| {
            Message::FeedLoaded(feed, source)
        })
    }

    fn carousel_mut(&mut self, feed: Feed) -> Option<&mut Carousel> {
        match feed {
            Feed::Decoration => Some(&mut self.decoration),
            Feed::Atmosphere => Some(&mut self.atmosphere),
            Feed::Gallery => None,
        }
    }

    fn on_resize(&mut self, size: Size) {
        let visible_width = size.width - 2.0 * ui::PAGE_PADDING;
        self.decoration.on_resize(visible_width);
        self.atmosphere.on_resize(visible_width);
    }

    /// Show a toast and schedule its expiry
    fn show_toast(&mut self, message: impl Into<String>) -> Task<Message> {
        let generation = self.toast.show(message);
        Task::perform(
            async move {
                tokio::time::sleep(TOAST_TTL).await;
                generation
            },
            Message::ToastExpired,
        )
    }

    /// Hand a URL to the launcher, with a toast on failure
    fn launch(&mut self, url: &str, what: &str) -> Result<(), Task<Message>> {
        self.launcher.open(url).map_err(|err| {
            tracing::warn!("⚠️  Could not open {what} ({url}): {err}");
            self.show_toast(format!("Could not open {what}"))
        })
    }

    fn open_host_form(&mut self, event_title: Option<&str>) -> Task<Message> {
        let prefill: Vec<(&str, &str)> = event_title
            .map(|title| vec![(event_board::EVENT_PARAM, title)])
            .unwrap_or_default();

        match event_board::host_form_target(&self.settings.host_form_url, &prefill) {
            HostFormTarget::NotConfigured => {
                tracing::warn!("host form requested but host_form_url is not set");
                self.show_toast(event_board::HOST_FORM_UNSET)
            }
            HostFormTarget::Open(url) => match self.launch(&url, "the host form") {
                Ok(()) => self.show_toast(event_board::OPENING_FORM),
                Err(task) => task,
            },
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowScreen(screen) => {
                // Overlays are modal
                if self.overlays.is_locked() {
                    return Task::none();
                }
                self.screen = screen;

                let mut tasks = vec![scrollable::scroll_to(
                    page_id(),
                    AbsoluteOffset { x: 0.0, y: 0.0 },
                )];
                match screen {
                    Screen::Gallery if !self.gallery_requested => {
                        self.gallery_requested = true;
                        tasks.push(self.load(Feed::Gallery));
                    }
                    Screen::Events => {
                        let urls = self.artwork.take_requests(
                            self.events.events().iter().filter_map(|event| event.image),
                        );
                        tasks.extend(urls.into_iter().map(|url| {
                            let key = url.clone();
                            Task::perform(assets::fetch_handle(url), move |handle| {
                                Message::ArtworkLoaded(key.clone(), handle)
                            })
                        }));
                    }
                    _ => {}
                }
                Task::batch(tasks)
            }
            Message::FeedLoaded(feed, source) => {
                if source.is_default() {
                    tracing::debug!(?feed, "showing static default");
                }
                match self.carousel_mut(feed) {
                    Some(carousel) => {
                        carousel.set_items(source.into_items());
                        Task::perform(
                            async move {
                                tokio::time::sleep(RECHECK_DELAY).await;
                                feed
                            },
                            Message::CarouselRecheck,
                        )
                    }
                    None => {
                        self.gallery.set_items(source.into_items(), &mut self.overlays);
                        Task::none()
                    }
                }
            }
            Message::ArtworkLoaded(url, handle) => {
                if let Some(handle) = handle {
                    self.artwork.insert(url, handle);
                }
                Task::none()
            }
            Message::WindowResized(size) => {
                self.on_resize(size);
                Task::none()
            }
            Message::CarouselScrolled(feed, metrics) => {
                if let Some(carousel) = self.carousel_mut(feed) {
                    carousel.on_scroll(metrics);
                }
                Task::none()
            }
            Message::CarouselArrow(feed, amount) => {
                if let Some(carousel) = self.carousel_mut(feed) {
                    carousel.scroll_by(amount);
                }
                Task::none()
            }
            Message::CarouselRecheck(feed) => {
                if let Some(carousel) = self.carousel_mut(feed) {
                    carousel.recheck();
                }
                // A zero scroll makes the strip report its laid-out geometry
                scrollable::scroll_by(ui::carousel::strip_id(feed), AbsoluteOffset { x: 0.0, y: 0.0 })
            }
            Message::AnimationFrame => {
                let mut tasks = Vec::new();
                for carousel in [&mut self.decoration, &mut self.atmosphere] {
                    if let Some(delta) = carousel.tick() {
                        tasks.push(scrollable::scroll_by(
                            ui::carousel::strip_id(carousel.feed()),
                            AbsoluteOffset { x: delta, y: 0.0 },
                        ));
                    }
                }
                Task::batch(tasks)
            }
            Message::FilterSelected(filter) => {
                self.gallery.set_filter(&filter, &mut self.overlays);
                Task::none()
            }
            Message::GridFocus(step) => {
                self.gallery.move_focus(step);
                Task::none()
            }
            Message::OpenFocused => {
                self.gallery.open_focused(&mut self.overlays);
                Task::none()
            }
            Message::OpenLightbox(index) => {
                self.gallery.open(index, &mut self.overlays);
                Task::none()
            }
            Message::CloseLightbox => {
                self.gallery.close(&mut self.overlays);
                Task::none()
            }
            Message::LightboxStep(step) => {
                self.gallery.navigate(step);
                Task::none()
            }
            Message::SwipeStarted(x) => {
                self.gallery.begin_swipe(x);
                Task::none()
            }
            Message::SwipeEnded(x) => {
                self.gallery.end_swipe(x);
                Task::none()
            }
            Message::DownloadCurrent => {
                let Some(item) = self.gallery.current() else {
                    return Task::none();
                };
                let target = assets::download_target(&self.settings.public_dir, &item.url);
                self.launch(&target, "the image").err().unwrap_or_else(Task::none)
            }
            Message::OpenEvent(id) => {
                self.events.open(id, &mut self.overlays);
                Task::none()
            }
            Message::CloseEvent => {
                self.events.close(&mut self.overlays);
                Task::none()
            }
            Message::HostForm(event_title) => self.open_host_form(event_title),
            Message::AddToCalendar => self.show_toast(event_board::CALENDAR_HINT),
            Message::OpenDirections => {
                let map_link = self.settings.map_link.clone();
                self.launch(&map_link, "the map").err().unwrap_or_else(Task::none)
            }
            Message::DismissToast => {
                self.toast.dismiss();
                Task::none()
            }
            Message::ToastExpired(generation) => {
                self.toast.expire(generation);
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let public_dir = self.settings.public_dir.as_path();

        let page = match self.screen {
            Screen::Home => ui::home::view(&self.decoration, &self.atmosphere, public_dir, &self.artwork),
            Screen::Events => ui::events::view(&self.events, public_dir, &self.artwork),
            Screen::Gallery => ui::gallery::view(&self.gallery, public_dir, &self.artwork),
        };

        let body = column![
            header(self.screen, self.overlays.is_locked()),
            scrollable(container(page).padding(ui::PAGE_PADDING))
                .id(page_id())
                .height(Length::Fill),
        ];

        let mut layers: Element<Message> = body.into();

        if let Some(lightbox) = ui::gallery::lightbox(&self.gallery, public_dir, &self.artwork) {
            layers = ui::modal(layers, lightbox, Message::CloseLightbox);
        }
        if let Some(details) = ui::events::details(&self.events, public_dir, &self.artwork) {
            layers = ui::modal(layers, details, Message::CloseEvent);
        }
        if let Some(message) = self.toast.message() {
            layers = stack![layers, ui::toast::view(message)].into();
        }

        layers
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions =
            vec![window::resize_events().map(|(_id, size)| Message::WindowResized(size))];

        // Lightbox input exists only while it is open
        if matches!(self.gallery.lightbox(), Lightbox::Viewing(_)) {
            subscriptions.push(keyboard::on_key_press(lightbox_keys));
            subscriptions.push(event::listen_with(swipe_events));
        } else if self.screen == Screen::Gallery && !self.overlays.is_locked() {
            subscriptions.push(keyboard::on_key_press(grid_keys));
        }

        if self.decoration.is_animating() || self.atmosphere.is_animating() {
            subscriptions.push(iced::time::every(FRAME_INTERVAL).map(|_| Message::AnimationFrame));
        }

        Subscription::batch(subscriptions)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn page_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

/// Venue name and screen tabs. Tabs are inert while an overlay is open.
fn header<'a>(current: Screen, locked: bool) -> Element<'a, Message> {
    let tabs = row(Screen::ALL.into_iter().map(|screen| -> Element<'a, Message> {
        button(text(screen.label()).size(14))
            .on_press_maybe((!locked && screen != current).then_some(Message::ShowScreen(screen)))
            .style(if screen == current { button::primary } else { button::text })
            .into()
    }))
    .spacing(8);

    container(
        row![
            text("CAROLINA · THE LUMINARY LOUNGE").size(12).color(ui::NEON_TEAL),
            Space::with_width(Length::Fill),
            tabs,
        ]
        .align_y(Alignment::Center),
    )
    .padding([12, 40])
    .into()
}

fn lightbox_keys(key: Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Escape) => Some(Message::CloseLightbox),
        Key::Named(Named::ArrowLeft) => Some(Message::LightboxStep(Step::Previous)),
        Key::Named(Named::ArrowRight) => Some(Message::LightboxStep(Step::Next)),
        _ => None,
    }
}

fn grid_keys(key: Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Named(Named::Tab) if modifiers.shift() => Some(Message::GridFocus(Step::Previous)),
        Key::Named(Named::Tab | Named::ArrowRight | Named::ArrowDown) => {
            Some(Message::GridFocus(Step::Next))
        }
        Key::Named(Named::ArrowLeft | Named::ArrowUp) => Some(Message::GridFocus(Step::Previous)),
        Key::Named(Named::Enter | Named::Space) => Some(Message::OpenFocused),
        _ => None,
    }
}

fn swipe_events(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::SwipeStarted(position.x))
        }
        Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::SwipeEnded(position.x))
        }
        _ => None,
    }
}

fn main() -> iced::Result {
    let (settings, warning) = Settings::load();
    logging::init(&settings.log_level);
    if let Some(err) = warning {
        tracing::warn!("⚠️  {err}; using default settings");
    }

    iced::application("Carolina · The Luminary Lounge", Lounge::update, Lounge::view)
        .subscription(Lounge::subscription)
        .theme(Lounge::theme)
        .window_size(WINDOW_SIZE)
        .centered()
        .run_with(move || Lounge::new(settings))
}
