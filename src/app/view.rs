mod charts;
mod sections;

use super::messages::Message;
use super::state::{
    App, CONTENT_MAX_WIDTH_PX, ENTRANCE_OFFSET_PX, FOOTER_HEIGHT_PX, HERO_BADGE, HERO_BUTTON,
    HERO_HEIGHT_PX, HERO_SUBTITLE, HERO_TITLE, NAV_DOT_SIZE_PX, NAV_DOT_SPACING_PX,
    PROGRESS_BAR_HEIGHT_PX, STORY_SCROLL_ID, SpendingBlock,
};
use crate::theme::{Palette, Theme, faded};
use iced::alignment::{Horizontal, Vertical};
use iced::font::Weight;
use iced::widget::{
    Column, Row, Space, Stack, button, column, container, progress_bar, scrollable, text,
};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Shadow};
use scrolly_core::Transition;
use scrolly_core::story::{HERO, SOURCES};
use std::time::Duration;

pub(super) const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let snapshot = self.scroll.snapshot();

        let mut story: Column<'_, Message> = column![self.hero(palette)].width(Length::Fill);
        for idx in 0..self.layout.sections().len() {
            story = story.push(self.section_view(idx, palette));
        }
        story = story.push(self.footer(palette));

        let background = palette.background;
        let story_view = container(
            scrollable(story)
                .on_scroll(|viewport| Message::Scrolled {
                    offset_y: viewport.absolute_offset().y,
                    viewport_height: viewport.bounds().height,
                    content_height: viewport.content_bounds().height,
                })
                .id(STORY_SCROLL_ID.clone())
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            ..container::Style::default()
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let track = palette.track;
        let accent = palette.accent;
        let progress = progress_bar(0.0..=1.0, snapshot.state.progress)
            .height(Length::Fixed(PROGRESS_BAR_HEIGHT_PX))
            .style(move |_theme| progress_bar::Style {
                background: Background::Color(track),
                bar: Background::Color(accent),
                border: Border::default(),
            });

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(story_view)
            .push(column![progress].width(Length::Fill));

        if self.config.show_nav_dots {
            layers = layers.push(self.nav_dots(snapshot.state.active_section, palette));
        }

        layers.into()
    }
}

impl App {
    pub(super) fn palette(&self) -> Palette {
        Palette::for_theme(Theme::from(self.config.theme))
    }

    /// Intro fade applied on top of every element.
    pub(super) fn page_opacity(&self) -> f32 {
        self.intro.opacity(self.now)
    }

    pub(super) fn reveal_progress(&self, idx: usize, transition: Transition) -> f32 {
        self.reveals
            .borrow()
            .get(idx)
            .map(|reveal| reveal.progress(self.now, transition))
            .unwrap_or(0.0)
    }

    /// Entrance progress of section `idx` for `transition`, scaled by the
    /// intro fade.
    pub(super) fn entrance(&self, idx: usize, transition: Transition) -> f32 {
        self.reveal_progress(idx, transition) * self.page_opacity()
    }

    pub(super) fn block_progress(&self, block: SpendingBlock, transition: Transition) -> f32 {
        self.blocks
            .borrow()
            .get(block.index())
            .map(|reveal| reveal.progress(self.now, transition))
            .unwrap_or(0.0)
    }

    pub(super) fn block_entrance(&self, block: SpendingBlock, transition: Transition) -> f32 {
        self.block_progress(block, transition) * self.page_opacity()
    }

    fn hero_entrance(&self, transition: Transition) -> f32 {
        self.intro
            .since_loaded(self.now)
            .map(|elapsed| transition.progress(elapsed))
            .unwrap_or(0.0)
    }

    fn hero(&self, palette: Palette) -> Element<'_, Message> {
        let title = self.hero_entrance(HERO_TITLE);
        let subtitle = self.hero_entrance(HERO_SUBTITLE);
        let cta = self.hero_entrance(HERO_BUTTON);

        let mut badges: Row<'_, Message> = Row::new().spacing(16);
        for (idx, badge) in HERO.badges.into_iter().enumerate() {
            let shown = self.hero_entrance(HERO_BADGE.staggered(idx, Duration::from_millis(200)));
            badges = badges.push(pill(badge, palette, shown));
        }

        let accent = palette.accent;
        let call_to_action = button(
            text(HERO.call_to_action)
                .size(18.0)
                .color(faded(Color::WHITE, cta)),
        )
        .padding([12, 28])
        .style(move |_theme, status| button::Style {
            background: Some(Background::Color(faded(
                match status {
                    button::Status::Hovered | button::Status::Pressed => Color {
                        a: 0.85,
                        ..accent
                    },
                    _ => accent,
                },
                cta,
            ))),
            text_color: faded(Color::WHITE, cta),
            border: Border {
                radius: 24.0.into(),
                ..Border::default()
            },
            shadow: Shadow::default(),
        })
        .on_press_maybe((cta > 0.0).then_some(Message::StartStory));

        let content = column![
            rise(
                column![
                    text(HERO.title_lead)
                        .size(64.0)
                        .font(BOLD)
                        .color(faded(palette.text, title)),
                    text(HERO.title_tail)
                        .size(64.0)
                        .font(BOLD)
                        .color(faded(palette.accent, title)),
                ]
                .align_x(Horizontal::Center)
                .into(),
                title,
            ),
            rise(
                text(HERO.subtitle)
                    .size(20.0)
                    .align_x(Horizontal::Center)
                    .color(faded(palette.muted, subtitle))
                    .into(),
                subtitle,
            ),
            rise(call_to_action.into(), cta),
            badges,
        ]
        .spacing(32)
        .align_x(Horizontal::Center)
        .max_width(CONTENT_MAX_WIDTH_PX);

        container(content)
            .center_x(Length::Fill)
            .align_y(Vertical::Center)
            .height(Length::Fixed(HERO_HEIGHT_PX))
            .padding(Padding::from([0, 24]))
            .into()
    }

    fn footer(&self, palette: Palette) -> Element<'_, Message> {
        let opacity = self.page_opacity();
        let surface = palette.surface;
        container(
            column![
                text(SOURCES)
                    .size(14.0)
                    .align_x(Horizontal::Center)
                    .color(faded(palette.muted, opacity)),
                text(copyright_notice(self.copyright_year))
                    .size(13.0)
                    .color(faded(palette.muted, opacity)),
            ]
            .spacing(8)
            .align_x(Horizontal::Center)
            .max_width(CONTENT_MAX_WIDTH_PX),
        )
        .center_x(Length::Fill)
        .align_y(Vertical::Center)
        .height(Length::Fixed(FOOTER_HEIGHT_PX))
        .style(move |_theme| container::Style {
            background: Some(Background::Color(surface)),
            ..container::Style::default()
        })
        .into()
    }

    fn nav_dots(&self, active: Option<usize>, palette: Palette) -> Element<'_, Message> {
        let mut dots: Column<'_, Message> = Column::new()
            .spacing(NAV_DOT_SPACING_PX)
            .align_x(Horizontal::Right);

        for (idx, section) in self.scroll.tracker.sections().iter().enumerate() {
            let is_active = active == Some(idx);
            let fill = if is_active {
                palette.accent
            } else {
                palette.track
            };
            let dot = button(Space::new(
                Length::Fixed(NAV_DOT_SIZE_PX),
                Length::Fixed(NAV_DOT_SIZE_PX),
            ))
            .padding(0)
            .on_press(Message::JumpToSection(idx))
            .style(move |_theme, status| button::Style {
                background: Some(Background::Color(match status {
                    button::Status::Hovered | button::Status::Pressed if !is_active => Color {
                        a: 0.7,
                        ..fill
                    },
                    _ => fill,
                })),
                text_color: Color::TRANSPARENT,
                border: Border {
                    radius: (NAV_DOT_SIZE_PX / 2.0).into(),
                    ..Border::default()
                },
                shadow: Shadow::default(),
            });

            let mut entry: Row<'_, Message> = Row::new().spacing(8).align_y(Vertical::Center);
            if is_active {
                entry = entry.push(text(section.title.as_str()).size(13.0).color(palette.muted));
            }
            dots = dots.push(entry.push(dot));
        }

        container(dots)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center)
            .padding(Padding::from([0, 24]))
            .into()
    }
}

pub(super) fn copyright_notice(year: i32) -> String {
    format!("© {year} From Dal-Roti to Cola-Chips. All rights reserved.")
}

/// Slide `content` up into place as `progress` goes from 0 to 1, keeping
/// its outer height constant.
pub(super) fn rise(content: Element<'_, Message>, progress: f32) -> Element<'_, Message> {
    let offset = scrolly_core::lerp(ENTRANCE_OFFSET_PX, 0.0, progress.clamp(0.0, 1.0));
    container(content)
        .padding(Padding {
            top: offset,
            bottom: ENTRANCE_OFFSET_PX - offset,
            left: 0.0,
            right: 0.0,
        })
        .into()
}

/// Rounded label with a soft accent background.
pub(super) fn pill<'a>(label: &'a str, palette: Palette, opacity: f32) -> Element<'a, Message> {
    let background = faded(palette.accent_soft, opacity);
    container(text(label).size(15.0).color(faded(palette.accent, opacity)))
        .padding([6, 14])
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: 14.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// White/dark card used for items, insights and timeline entries.
pub(super) fn card<'a>(
    content: impl Into<Element<'a, Message>>,
    palette: Palette,
    opacity: f32,
) -> Element<'a, Message> {
    let surface = faded(palette.surface, opacity);
    let edge = faded(palette.track, opacity);
    container(content)
        .padding(20)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(surface)),
            border: Border {
                color: edge,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_font_keeps_default_family() {
        assert_eq!(BOLD.family, Font::DEFAULT.family);
        assert_eq!(BOLD.weight, Weight::Bold);
    }

    #[test]
    fn copyright_notice_carries_year_and_rights() {
        assert_eq!(
            copyright_notice(2031),
            "© 2031 From Dal-Roti to Cola-Chips. All rights reserved."
        );
    }
}
