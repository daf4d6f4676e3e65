// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{Message, Screen};
use crate::lightbox::{PanOffset, Snapshot};
use crate::portfolio::{Portfolio, Project};
use iced::widget::{button, column, container, image, row, scrollable, text, Row, Space};
use iced::{ContentFit, Element, Length, Padding};
use std::path::PathBuf;

const THUMBNAIL_WIDTH: f32 = 72.0;
const THUMBNAIL_HEIGHT: f32 = 54.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub screen: Screen,
    pub portfolio: Option<&'a Portfolio>,
    pub status: Option<&'a str>,
    pub snapshot: Snapshot<'a, PathBuf>,
    pub current: Option<&'a image::Handle>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.screen {
        Screen::Projects => view_projects(ctx.portfolio, ctx.status),
        Screen::Lightbox { project } => {
            let images = ctx
                .portfolio
                .and_then(|p| p.project(project))
                .map_or(&[][..], |p| p.images.as_slice());
            view_lightbox(&ctx.snapshot, ctx.current, images)
        }
    }
}

fn view_projects<'a>(
    portfolio: Option<&'a Portfolio>,
    status: Option<&'a str>,
) -> Element<'a, Message> {
    let mut list = column![text("Projects").size(24)].spacing(8).padding(16);

    if let Some(status) = status {
        list = list.push(text(status));
    }

    if let Some(portfolio) = portfolio {
        for (index, project) in portfolio.projects().iter().enumerate() {
            list = list.push(project_button(index, project));
        }
    }

    scrollable(list).width(Length::Fill).height(Length::Fill).into()
}

fn project_button(index: usize, project: &Project) -> Element<'_, Message> {
    let label = match project.images.len() {
        1 => format!("{} (1 image)", project.name),
        n => format!("{} ({n} images)", project.name),
    };
    button(text(label))
        .width(Length::Fill)
        .on_press(Message::ProjectSelected(index))
        .into()
}

fn view_lightbox<'a>(
    snapshot: &Snapshot<'a, PathBuf>,
    current: Option<&'a image::Handle>,
    images: &'a [PathBuf],
) -> Element<'a, Message> {
    column![
        toolbar(snapshot),
        image_layer(snapshot, current),
        thumbnail_strip(snapshot.index, images),
    ]
    .into()
}

fn toolbar<'a>(snapshot: &Snapshot<'a, PathBuf>) -> Element<'a, Message> {
    let file_name = snapshot
        .image
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let position = if snapshot.len == 0 {
        String::new()
    } else {
        format!("{}/{}", snapshot.index + 1, snapshot.len)
    };
    let zoom_label = if snapshot.is_zoomed { "Fit" } else { "Zoom" };
    let fullscreen_label = if snapshot.is_fullscreen {
        "Window"
    } else {
        "Fullscreen"
    };

    row![
        button("Close").on_press(Message::CloseGallery),
        button("Prev").on_press_maybe(snapshot.has_prev.then_some(Message::Previous)),
        button("Next").on_press_maybe(snapshot.has_next.then_some(Message::Next)),
        button(zoom_label).on_press_maybe(snapshot.image.map(|_| Message::ToggleZoom)),
        button(fullscreen_label).on_press(Message::ToggleFullscreen),
        Space::new().width(Length::Fill),
        text(file_name).size(14),
        text(position).size(14),
    ]
    .spacing(10)
    .padding(10)
    .into()
}

fn image_layer<'a>(
    snapshot: &Snapshot<'a, PathBuf>,
    current: Option<&'a image::Handle>,
) -> Element<'a, Message> {
    let Some(handle) = current else {
        return container(Space::new()).center(Length::Fill).into();
    };

    if snapshot.is_zoomed {
        let zoomed = image(handle.clone())
            .content_fit(ContentFit::None)
            .width(Length::Fill)
            .height(Length::Fill);
        container(zoomed)
            .padding(pan_padding(snapshot.pan_offset))
            .center(Length::Fill)
            .into()
    } else {
        let fitted = image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill);
        container(fitted).center(Length::Fill).into()
    }
}

/// Padding that moves a centered child by `pan`.
fn pan_padding(pan: PanOffset) -> Padding {
    Padding {
        top: (2.0 * pan.y).max(0.0),
        right: (-2.0 * pan.x).max(0.0),
        bottom: (-2.0 * pan.y).max(0.0),
        left: (2.0 * pan.x).max(0.0),
    }
}

fn thumbnail_strip<'a>(current: usize, images: &'a [PathBuf]) -> Element<'a, Message> {
    let thumbnails = images.iter().enumerate().map(|(index, path)| -> Element<'a, Message> {
        let thumbnail = image(image::Handle::from_path(path))
            .content_fit(ContentFit::Cover)
            .width(THUMBNAIL_WIDTH)
            .height(THUMBNAIL_HEIGHT);
        let style = if index == current {
            button::primary
        } else {
            button::secondary
        };
        button(thumbnail)
            .padding(2)
            .style(style)
            .on_press(Message::GoTo(index))
            .into()
    });

    scrollable(Row::with_children(thumbnails).spacing(6).padding(8))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default(),
        ))
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_padding_is_zero_at_origin() {
        assert_eq!(pan_padding(PanOffset::ORIGIN), Padding::ZERO);
    }

    #[test]
    fn pan_padding_shifts_towards_the_pan() {
        let padding = pan_padding(PanOffset::new(10.0, -5.0));
        assert_eq!(padding.left, 20.0);
        assert_eq!(padding.right, 0.0);
        assert_eq!(padding.top, 0.0);
        assert_eq!(padding.bottom, 10.0);
    }
}
