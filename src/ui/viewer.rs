use iced::widget::{button, column, container, row, text, Image, Space};
use iced::{window, Alignment, ContentFit, Element, Length};

use crate::config::Config;
use crate::state::gallery::Gallery;
use crate::state::viewer::Viewer;
use crate::ui::style::Styling;
use crate::Message;

/// Width reserved for each arrow, whether or not it is shown
const NAV_WIDTH: f32 = 56.0;

/// Full-image viewer layout: arrows on the sides, image in the middle,
/// caption and "Back" underneath.
///
/// A hidden arrow leaves an empty slot of the same width so the image does
/// not shift while navigating.
pub fn view<'a>(
    id: window::Id,
    viewer: &Viewer,
    gallery: &'a Gallery,
    config: &Config,
    styling: &Styling,
) -> Element<'a, Message> {
    let Some((index, image)) = viewer
        .current()
        .and_then(|index| gallery.get(index).map(|image| (index, image)))
    else {
        return Space::new(Length::Fill, Length::Fill).into();
    };

    let previous: Element<'a, Message> = if viewer.shows_previous() {
        button(container(text("◄").size(24)).center_x(Length::Fill))
            .width(Length::Fixed(NAV_WIDTH))
            .style(styling.nav_button())
            .on_press(Message::Previous(id))
            .into()
    } else {
        Space::with_width(Length::Fixed(NAV_WIDTH)).into()
    };

    let next: Element<'a, Message> = if viewer.shows_next() {
        button(container(text("►").size(24)).center_x(Length::Fill))
            .width(Length::Fixed(NAV_WIDTH))
            .style(styling.nav_button())
            .on_press(Message::Next(id))
            .into()
    } else {
        Space::with_width(Length::Fixed(NAV_WIDTH)).into()
    };

    let picture = Image::new(image.full.clone())
        .height(Length::Fixed(config.full_image_height))
        .content_fit(ContentFit::Contain);

    let body = row![previous, container(picture).center(Length::Fill), next]
        .align_y(Alignment::Center)
        .padding(12);

    let caption = text(format!(
        "{}  {}\u{d7}{}  ({} / {})",
        image.filename,
        image.width,
        image.height,
        index + 1,
        gallery.len()
    ))
    .size(14);

    let back = button(text("Back"))
        .padding([8, 24])
        .style(styling.back_button())
        .on_press(Message::Back(id));

    let footer = column![caption, back]
        .spacing(8)
        .align_x(Alignment::Center);

    column![body, container(footer).center_x(Length::Fill).padding(12)].into()
}
