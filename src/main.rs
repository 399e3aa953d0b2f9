use iced::widget::Space;
use iced::{event, keyboard, window, Element, Event, Length, Subscription, Task, Theme};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info, warn};

mod config;
mod error;
mod media;
mod state;
mod ui;

use config::Config;
use state::gallery::Gallery;
use state::viewer::Viewer;
use ui::style::{self, Styling};

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked the thumbnail at this gallery index
    ThumbnailClicked(usize),
    /// A window finished opening
    WindowOpened(window::Id),
    /// "Previous" in the given viewer window
    Previous(window::Id),
    /// "Next" in the given viewer window
    Next(window::Id),
    /// "Back" in the given viewer window
    Back(window::Id),
    /// A window was closed by the user or by "Back"
    WindowClosed(window::Id),
}

/// One open full-image viewer window
#[derive(Debug)]
struct ViewerWindow {
    viewer: Viewer,
    styling: Styling,
}

/// Main application state
struct ImageGallery {
    config: Config,
    /// Directory the stylesheet, icon and images are resolved against
    resources: PathBuf,
    /// The loaded images, immutable after startup
    gallery: Gallery,
    icon: Option<window::Icon>,
    /// The thumbnail grid window
    main_window: window::Id,
    main_styling: Styling,
    /// Every open viewer window and its navigation state
    viewers: BTreeMap<window::Id, ViewerWindow>,
}

impl ImageGallery {
    /// Create a new instance of the application.
    ///
    /// Images are scanned and decoded here, before the first window opens.
    fn new() -> (Self, Task<Message>) {
        let resources = config::resource_dir();
        let config = Config::load(&resources);

        let report = media::loader::load_gallery(&resources.join(&config.image_dir), &config);
        for failure in &report.failures {
            warn!("Skipped {}: {}", failure.path.display(), failure.error);
        }
        let gallery = report.into_gallery();
        let icon = media::icon::load_icon(&resources.join(&config.icon));

        Self::with_gallery(config, resources, gallery, icon)
    }

    fn with_gallery(
        config: Config,
        resources: PathBuf,
        gallery: Gallery,
        icon: Option<window::Icon>,
    ) -> (Self, Task<Message>) {
        let main_styling = style::apply(&resources.join(&config.stylesheet), "gallery window");
        let (main_window, open) = window::open(config.gallery_window.settings(icon.clone()));

        info!(
            "Image gallery initialized with {} images ({})",
            gallery.len(),
            if main_styling.is_styled() { "styled" } else { "default theme" }
        );

        (
            ImageGallery {
                config,
                resources,
                gallery,
                icon,
                main_window,
                main_styling,
                viewers: BTreeMap::new(),
            },
            open.map(Message::WindowOpened),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailClicked(index) => {
                let mut viewer = Viewer::new(self.gallery.len());
                if let Err(e) = viewer.open(index) {
                    warn!("Ignoring thumbnail click: {}", e);
                    return Task::none();
                }

                let styling = style::apply(
                    &self.resources.join(&self.config.stylesheet),
                    "viewer window",
                );
                let (id, open) =
                    window::open(self.config.viewer_window.settings(self.icon.clone()));

                if let Some(image) = self.gallery.get(index) {
                    debug!("Opening viewer {:?} at {}", id, image.path.display());
                }
                self.viewers.insert(id, ViewerWindow { viewer, styling });

                open.map(Message::WindowOpened)
            }
            Message::WindowOpened(id) => {
                let maximized = if id == self.main_window {
                    self.config.gallery_window.maximized
                } else {
                    self.config.viewer_window.maximized
                };

                if maximized {
                    window::maximize(id, true)
                } else {
                    Task::none()
                }
            }
            Message::Previous(id) => {
                if let Some(open) = self.viewers.get_mut(&id) {
                    open.viewer.previous();
                }
                Task::none()
            }
            Message::Next(id) => {
                if let Some(open) = self.viewers.get_mut(&id) {
                    open.viewer.next();
                }
                Task::none()
            }
            Message::Back(id) => match self.viewers.get_mut(&id) {
                Some(open) => {
                    open.viewer.close();
                    debug!("Viewer {:?} is now {:?}", id, open.viewer.state());
                    window::close(id)
                }
                None => Task::none(),
            },
            Message::WindowClosed(id) => {
                if id == self.main_window {
                    info!("Gallery window closed, exiting");
                    return iced::exit();
                }

                if self.viewers.remove(&id).is_some() {
                    debug!("Viewer {:?} released", id);
                }
                Task::none()
            }
        }
    }

    /// Build the user interface for one window
    fn view(&self, id: window::Id) -> Element<'_, Message> {
        if id == self.main_window {
            return ui::grid::view(&self.gallery, &self.config, &self.main_styling);
        }

        match self.viewers.get(&id) {
            Some(open) => ui::viewer::view(
                id,
                &open.viewer,
                &self.gallery,
                &self.config,
                &open.styling,
            ),
            None => Space::new(Length::Fill, Length::Fill).into(),
        }
    }

    fn title(&self, id: window::Id) -> String {
        if id == self.main_window {
            self.config.gallery_window.title.clone()
        } else {
            self.config.viewer_window.title.clone()
        }
    }

    fn theme(&self, id: window::Id) -> Theme {
        match self.viewers.get(&id) {
            Some(open) => open.styling.theme(),
            None => self.main_styling.theme(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::close_events().map(Message::WindowClosed),
            event::listen_with(viewer_shortcut),
        ])
    }
}

/// Keyboard navigation for viewer windows: arrows step, Escape goes back.
///
/// Keys pressed in the gallery window map to messages that no viewer owns,
/// which `update` ignores.
fn viewer_shortcut(event: Event, status: event::Status, id: window::Id) -> Option<Message> {
    if matches!(status, event::Status::Captured) {
        return None;
    }

    match event {
        Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(named),
            ..
        }) => shortcut_for(named, id),
        _ => None,
    }
}

fn shortcut_for(key: keyboard::key::Named, id: window::Id) -> Option<Message> {
    match key {
        keyboard::key::Named::ArrowLeft => Some(Message::Previous(id)),
        keyboard::key::Named::ArrowRight => Some(Message::Next(id)),
        keyboard::key::Named::Escape => Some(Message::Back(id)),
        _ => None,
    }
}

fn setup_logging() {
    use tracing_subscriber::prelude::*;

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,image_gallery=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .init();
}

fn main() -> iced::Result {
    setup_logging();

    iced::daemon(ImageGallery::title, ImageGallery::update, ImageGallery::view)
        .theme(ImageGallery::theme)
        .subscription(ImageGallery::subscription)
        .run_with(ImageGallery::new)
}
