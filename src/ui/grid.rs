/// Thumbnail grid for the gallery window
use iced::widget::{button, container, scrollable, text, Column, Image, Row};
use iced::{ContentFit, Element, Length};

use crate::config::Config;
use crate::state::gallery::Gallery;
use crate::ui::style::Styling;
use crate::Message;

/// Position of a thumbnail in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
}

/// Cell for the image at `index` in a grid with `columns` columns
pub fn cell_for(index: usize, columns: usize) -> GridCell {
    GridCell {
        row: index / columns,
        column: index % columns,
    }
}

/// Image indices grouped by grid row, in column order
pub fn rows(len: usize, columns: usize) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    for index in 0..len {
        let cell = cell_for(index, columns);
        if cell.row == rows.len() {
            rows.push(Vec::with_capacity(columns.min(len)));
        }
        rows[cell.row].push(index);
    }
    rows
}

/// Build the scrollable grid of clickable thumbnails
pub fn view<'a>(gallery: &'a Gallery, config: &Config, styling: &Styling) -> Element<'a, Message> {
    if gallery.is_empty() {
        return container(text("No images found").size(18))
            .center(Length::Fill)
            .into();
    }

    let width = Length::Fixed(config.thumbnail.width as f32);
    let height = Length::Fixed(config.thumbnail.height as f32);

    let grid = rows(gallery.len(), config.columns)
        .into_iter()
        .fold(Column::new().spacing(4), |grid, indices| {
            let cells = indices
                .into_iter()
                .filter_map(|index| gallery.get(index).map(|image| (index, image)))
                .fold(Row::new().spacing(4), |row, (index, image)| {
                    let thumbnail = Image::new(image.thumbnail.clone())
                        .width(width)
                        .height(height)
                        .content_fit(ContentFit::Fill);

                    row.push(
                        button(thumbnail)
                            .padding(4)
                            .style(styling.thumbnail_button())
                            .on_press(Message::ThumbnailClicked(index)),
                    )
                });
            grid.push(cells)
        });

    scrollable(container(grid).center_x(Length::Fill).padding(20))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
