use super::super::messages::Message;
use super::super::state::{BAR_HEIGHT_PX, BAR_PX_PER_POINT};
use crate::theme::{Palette, faded, story_color};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Row, Space, container, text};
use iced::{Background, Border, Color, Element, Length};
use scrolly_core::lerp;
use scrolly_core::story::{GROWTH_BAR_BASE_PX, GrowthBar, SpendingRow, SpendingSeries};

/// Solid rounded block of the given size.
pub(super) fn block<'a>(width: f32, height: f32, color: Color) -> Element<'a, Message> {
    container(Space::new(
        Length::Fixed(width.max(0.0)),
        Length::Fixed(height.max(0.0)),
    ))
    .style(move |_theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    })
    .into()
}

/// Horizontal bar for `share` percent, grown to `grow` of its length.
pub(super) fn share_bar<'a>(
    label: &'a str,
    share: u8,
    color: Color,
    grow: f32,
    palette: Palette,
    opacity: f32,
) -> Element<'a, Message> {
    let width = f32::from(share) * BAR_PX_PER_POINT * grow.clamp(0.0, 1.0);
    Row::new()
        .spacing(10)
        .align_y(Vertical::Center)
        .push(
            text(label)
                .size(13.0)
                .width(Length::Fixed(40.0))
                .color(faded(palette.muted, opacity)),
        )
        .push(block(width, BAR_HEIGHT_PX, faded(color, opacity)))
        .push(
            text(format!("{share}%"))
                .size(13.0)
                .color(faded(palette.text, opacity * grow)),
        )
        .into()
}

/// One year of the spending series as a stacked horizontal bar.
pub(super) fn spending_row<'a>(
    row: &SpendingRow,
    grow: f32,
    palette: Palette,
    opacity: f32,
) -> Element<'a, Message> {
    let grow = grow.clamp(0.0, 1.0);
    let mut segments = Row::new().spacing(2);
    for series in SpendingSeries::ALL {
        if series == SpendingSeries::Total {
            continue;
        }
        let width = f32::from(row.value(series)) * BAR_PX_PER_POINT * grow;
        segments = segments.push(block(
            width,
            BAR_HEIGHT_PX + 6.0,
            faded(story_color(series.color()), opacity),
        ));
    }

    Row::new()
        .spacing(12)
        .align_y(Vertical::Center)
        .push(
            text(row.year.to_string())
                .size(15.0)
                .width(Length::Fixed(48.0))
                .color(faded(palette.text, opacity)),
        )
        .push(segments)
        .push(
            text(format!("food {}%", row.total))
                .size(13.0)
                .color(faded(palette.muted, opacity * grow)),
        )
        .into()
}

pub(super) fn legend<'a>(palette: Palette, opacity: f32) -> Element<'a, Message> {
    let mut legend = Row::new().spacing(18).align_y(Vertical::Center);
    for series in SpendingSeries::ALL {
        if series == SpendingSeries::Total {
            continue;
        }
        legend = legend.push(
            Row::new()
                .spacing(6)
                .align_y(Vertical::Center)
                .push(block(12.0, 12.0, faded(story_color(series.color()), opacity)))
                .push(
                    text(series.label())
                        .size(13.0)
                        .color(faded(palette.muted, opacity)),
                ),
        );
    }
    legend.into()
}

/// Vertical bar growing from the base height to its full height.
pub(super) fn growth_bar<'a>(
    bar: &GrowthBar,
    grow: f32,
    palette: Palette,
    opacity: f32,
) -> Element<'a, Message> {
    let height = lerp(GROWTH_BAR_BASE_PX, bar.height_px, grow.clamp(0.0, 1.0));
    Column::new()
        .spacing(8)
        .align_x(Horizontal::Center)
        .width(Length::Fixed(96.0))
        .push(Space::with_height(Length::Fill))
        .push(
            text(format!("{}%", bar.share))
                .size(16.0)
                .color(faded(palette.text, opacity * grow)),
        )
        .push(block(64.0, height, faded(story_color(bar.color), opacity)))
        .push(
            text(bar.year.to_string())
                .size(14.0)
                .color(faded(palette.muted, opacity)),
        )
        .height(Length::Fill)
        .into()
}

