use super::super::messages::Message;
use super::super::state::{
    App, BAR_GROWTH, BAR_GROWTH_LATE, CHILD_ENTRANCE, CHILD_STAGGER, CONTENT_MAX_WIDTH_PX,
    SECTION_BODY_GAP_PX, SECTION_ENTRANCE, SECTION_HEADING_HEIGHT_PX, SECTION_PADDING_PX,
    SPENDING_BLOCK_GAP_PX, SPENDING_LEDE_HEIGHT_PX, SpendingBlock,
};
use super::charts::{block, growth_bar, legend, share_bar, spending_row};
use super::{BOLD, card, rise};
use crate::theme::{Palette, faded, story_color};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Row, Space, column, container, row, text};
use iced::{Element, Length, Padding};
use scrolly_core::Transition;
use scrolly_core::story::{
    CART_DESCRIPTION, CART_ITEMS, CART_TAKEAWAY, CART_TITLE, CONCLUSION_CARDS, CONCLUSION_LEDE,
    DID_YOU_KNOW, GROWTH_BARS, INSIGHTS, INSIGHTS_LEDE, INSIGHTS_TITLE, INTRO_LEDE, ItemShift,
    PROCESSED_ITEMS, PROCESSED_LEDE, PROCESSED_TITLE, SHARE_CARDS, SHARE_CARDS_CAPTION,
    SOURCES, SPENDING_CAPTION, SPENDING_LEDE, SPENDING_ROWS, SPENDING_SECTION_ID,
    SPENDING_TITLE, STAPLE_ITEMS, STAPLES_LEDE, STAPLES_TITLE, STORY_SECTIONS, TIMELINE,
};

impl App {
    pub(in crate::app) fn section_view(&self, idx: usize, palette: Palette) -> Element<'_, Message> {
        let height = self
            .layout
            .section(idx)
            .map(|bounds| bounds.height)
            .unwrap_or(0.0);
        let Some(meta) = STORY_SECTIONS.get(idx) else {
            return Space::new(Length::Fill, Length::Fixed(height)).into();
        };

        let shown = self.entrance(idx, SECTION_ENTRANCE);
        let heading_color = if self.scroll.active_section() == Some(idx) {
            palette.accent
        } else {
            palette.text
        };
        let heading = text(meta.heading)
            .size(40.0)
            .font(BOLD)
            .align_x(Horizontal::Center)
            .width(Length::Fill)
            .color(faded(heading_color, shown));

        let body = match meta.id {
            "intro" => self.intro_body(idx, palette),
            "cart-comparison" => self.cart_body(idx, palette),
            SPENDING_SECTION_ID => self.spending_body(idx, palette),
            "staples-decline" => self.staples_decline_body(idx, palette),
            "processed-rise" => self.processed_rise_body(idx, palette),
            "timeline" => self.timeline_body(idx, palette),
            "conclusion" => self.conclusion_body(idx, palette),
            _ => Space::with_height(Length::Shrink).into(),
        };

        container(
            column![
                container(rise(heading.into(), shown))
                    .height(Length::Fixed(SECTION_HEADING_HEIGHT_PX)),
                body
            ]
            .spacing(SECTION_BODY_GAP_PX)
            .width(Length::Fill)
            .max_width(CONTENT_MAX_WIDTH_PX),
        )
        .center_x(Length::Fill)
        .height(Length::Fixed(height))
        .padding(Padding::from([SECTION_PADDING_PX, 24.0]))
        .clip(true)
        .into()
    }

    /// Entrance of the `child`-th element inside section `idx`.
    fn child(&self, idx: usize, child: usize) -> f32 {
        self.entrance(idx, CHILD_ENTRANCE.staggered(child, CHILD_STAGGER))
    }

    fn grow(&self, idx: usize, transition: Transition, child: usize) -> f32 {
        self.reveal_progress(idx, transition.staggered(child, CHILD_STAGGER))
    }

    fn intro_body(&self, idx: usize, palette: Palette) -> Element<'_, Message> {
        let shown = self.child(idx, 0);
        rise(
            text(INTRO_LEDE)
                .size(22.0)
                .align_x(Horizontal::Center)
                .width(Length::Fill)
                .color(faded(palette.muted, shown))
                .into(),
            shown,
        )
    }

    fn cart_body(&self, idx: usize, palette: Palette) -> Element<'_, Message> {
        let header = self.child(idx, 0);
        let mut items: Column<'_, Message> = Column::new().spacing(14);
        for (n, item) in CART_ITEMS.iter().enumerate() {
            let shown = self.child(idx, n + 1);
            let color = story_color(item.color);
            items = items.push(rise(
                row![
                    text(item.name)
                        .size(15.0)
                        .width(Length::Fixed(160.0))
                        .color(faded(palette.text, shown)),
                    column![
                        share_bar(
                            "2004",
                            item.share_2004,
                            color,
                            self.grow(idx, BAR_GROWTH, n),
                            palette,
                            shown,
                        ),
                        share_bar(
                            "2023",
                            item.share_2023,
                            color,
                            self.grow(idx, BAR_GROWTH_LATE, n),
                            palette,
                            shown,
                        ),
                    ]
                    .spacing(4),
                ]
                .spacing(16)
                .align_y(Vertical::Center)
                .into(),
                shown,
            ));
        }

        let takeaway = self.child(idx, CART_ITEMS.len() + 1);
        column![
            text(CART_TITLE)
                .size(24.0)
                .font(BOLD)
                .color(faded(palette.text, header)),
            text(CART_DESCRIPTION)
                .size(16.0)
                .color(faded(palette.muted, header)),
            card(items, palette, header),
            text(CART_TAKEAWAY)
                .size(15.0)
                .color(faded(palette.muted, takeaway)),
        ]
        .spacing(16)
        .into()
    }

    /// Entrance of the `child`-th element inside a spending block.
    fn block_child(&self, block: SpendingBlock, child: usize) -> f32 {
        self.block_entrance(block, CHILD_ENTRANCE.staggered(child, CHILD_STAGGER))
    }

    fn block_grow(&self, block: SpendingBlock, transition: Transition, child: usize) -> f32 {
        self.block_progress(block, transition.staggered(child, CHILD_STAGGER))
    }

    /// Lede followed by the chart, staples, processed and insights blocks,
    /// each at its fixed height and driven by its own reveal.
    fn spending_body(&self, idx: usize, palette: Palette) -> Element<'_, Message> {
        let lede = self.child(idx, 0);

        let chart_shown = self.block_child(SpendingBlock::Chart, 0);
        let mut chart: Column<'_, Message> = Column::new()
            .spacing(12)
            .push(
                text(SPENDING_TITLE)
                    .size(24.0)
                    .font(BOLD)
                    .color(faded(palette.text, chart_shown)),
            )
            .push(legend(palette, chart_shown));
        for (n, year) in SPENDING_ROWS.iter().enumerate() {
            chart = chart.push(spending_row(
                year,
                self.block_grow(SpendingBlock::Chart, BAR_GROWTH, n),
                palette,
                self.block_child(SpendingBlock::Chart, n + 1),
            ));
        }
        chart = chart.push(
            text(SPENDING_CAPTION)
                .size(13.0)
                .color(faded(palette.muted, chart_shown)),
        );

        let insights_shown = self.block_child(SpendingBlock::Insights, 0);
        let mut cards: Row<'_, Message> = Row::new().spacing(16);
        for (n, insight) in INSIGHTS.iter().enumerate() {
            let shown = self.block_child(SpendingBlock::Insights, n + 1);
            cards = cards.push(card(
                column![
                    text(insight.title)
                        .size(18.0)
                        .font(BOLD)
                        .color(faded(palette.accent, shown)),
                    text(insight.body)
                        .size(14.0)
                        .color(faded(palette.text, shown)),
                    text(insight.left)
                        .size(13.0)
                        .color(faded(palette.muted, shown)),
                    text(insight.right)
                        .size(13.0)
                        .color(faded(palette.muted, shown)),
                ]
                .spacing(8),
                palette,
                shown,
            ));
        }
        let insights = column![
            text(INSIGHTS_TITLE)
                .size(24.0)
                .font(BOLD)
                .color(faded(palette.text, insights_shown)),
            text(INSIGHTS_LEDE)
                .size(15.0)
                .color(faded(palette.muted, insights_shown)),
            cards,
        ]
        .spacing(12);

        column![
            container(
                text(SPENDING_LEDE)
                    .size(18.0)
                    .align_x(Horizontal::Center)
                    .width(Length::Fill)
                    .color(faded(palette.muted, lede)),
            )
            .height(Length::Fixed(SPENDING_LEDE_HEIGHT_PX)),
            spending_block(
                SpendingBlock::Chart,
                rise(card(chart, palette, chart_shown), chart_shown),
            ),
            spending_block(
                SpendingBlock::Staples,
                self.item_group(
                    STAPLES_TITLE,
                    STAPLES_LEDE,
                    &STAPLE_ITEMS,
                    palette,
                    self.block_child(SpendingBlock::Staples, 0),
                ),
            ),
            spending_block(
                SpendingBlock::Processed,
                self.item_group(
                    PROCESSED_TITLE,
                    PROCESSED_LEDE,
                    &PROCESSED_ITEMS,
                    palette,
                    self.block_child(SpendingBlock::Processed, 0),
                ),
            ),
            spending_block(
                SpendingBlock::Insights,
                rise(insights.into(), insights_shown),
            ),
        ]
        .spacing(SPENDING_BLOCK_GAP_PX)
        .into()
    }

    /// Four item cards comparing 1983 with 2023.
    fn item_group(
        &self,
        title: &'static str,
        lede: &'static str,
        items: &'static [ItemShift],
        palette: Palette,
        shown: f32,
    ) -> Element<'_, Message> {
        let mut cards: Row<'_, Message> = Row::new().spacing(12);
        for item in items {
            let change_color = if item.change() < 0 {
                palette.decline
            } else {
                palette.rise
            };
            cards = cards.push(card(
                column![
                    row![
                        block(12.0, 12.0, faded(story_color(item.color), shown)),
                        text(item.name)
                            .size(15.0)
                            .font(BOLD)
                            .color(faded(palette.text, shown)),
                    ]
                    .spacing(8)
                    .align_y(Vertical::Center),
                    text(format!("{}% → {}%", item.share_1983, item.share_2023))
                        .size(20.0)
                        .color(faded(palette.text, shown)),
                    text(item.change_label())
                        .size(13.0)
                        .color(faded(change_color, shown)),
                ]
                .spacing(6),
                palette,
                shown,
            ));
        }

        rise(
            column![
                text(title)
                    .size(22.0)
                    .font(BOLD)
                    .color(faded(palette.text, shown)),
                text(lede).size(15.0).color(faded(palette.muted, shown)),
                cards,
            ]
            .spacing(10)
            .into(),
            shown,
        )
    }

    fn staples_decline_body(&self, idx: usize, palette: Palette) -> Element<'_, Message> {
        let mut cards: Row<'_, Message> = Row::new().spacing(16);
        for (n, share) in SHARE_CARDS.iter().enumerate() {
            let shown = self.child(idx, n);
            let shrink = self.grow(idx, BAR_GROWTH, n);
            let current = scrolly_core::lerp(f32::from(share.from), f32::from(share.to), shrink);
            cards = cards.push(card(
                column![
                    text(share.name)
                        .size(18.0)
                        .font(BOLD)
                        .color(faded(palette.text, shown)),
                    text(format!("{:.0}%", current))
                        .size(36.0)
                        .font(BOLD)
                        .color(faded(palette.decline, shown)),
                    block(
                        current * 4.0,
                        8.0,
                        faded(palette.accent, shown)
                    ),
                    text(format!("{}% → {}%", share.from, share.to))
                        .size(13.0)
                        .color(faded(palette.muted, shown)),
                ]
                .spacing(8),
                palette,
                shown,
            ));
        }

        let caption = self.child(idx, SHARE_CARDS.len());
        column![
            rise(cards.into(), self.child(idx, 0)),
            text(SHARE_CARDS_CAPTION)
                .size(14.0)
                .align_x(Horizontal::Center)
                .width(Length::Fill)
                .color(faded(palette.muted, caption)),
        ]
        .spacing(16)
        .into()
    }

    fn processed_rise_body(&self, idx: usize, palette: Palette) -> Element<'_, Message> {
        let mut bars: Row<'_, Message> = Row::new()
            .spacing(24)
            .align_y(Vertical::Bottom)
            .height(Length::Fixed(360.0));
        for (n, bar) in GROWTH_BARS.iter().enumerate() {
            bars = bars.push(growth_bar(
                bar,
                self.grow(idx, BAR_GROWTH, n),
                palette,
                self.child(idx, n),
            ));
        }

        let fact = self.child(idx, GROWTH_BARS.len());
        let mut facts: Column<'_, Message> = Column::new().spacing(8).push(
            text("Did you know?")
                .size(18.0)
                .font(BOLD)
                .color(faded(palette.accent, fact)),
        );
        for line in DID_YOU_KNOW {
            facts = facts.push(text(line).size(15.0).color(faded(palette.text, fact)));
        }

        column![
            container(bars).center_x(Length::Fill),
            rise(card(facts, palette, fact), fact),
        ]
        .spacing(24)
        .into()
    }

    fn timeline_body(&self, idx: usize, palette: Palette) -> Element<'_, Message> {
        let mut entries: Column<'_, Message> = Column::new().spacing(18);
        for (n, entry) in TIMELINE.iter().enumerate() {
            let shown = self.child(idx, n);
            entries = entries.push(rise(
                row![
                    text(entry.year.to_string())
                        .size(28.0)
                        .font(BOLD)
                        .width(Length::Fixed(96.0))
                        .color(faded(palette.accent, shown)),
                    card(
                        column![
                            text(entry.title)
                                .size(18.0)
                                .font(BOLD)
                                .color(faded(palette.text, shown)),
                            text(entry.body)
                                .size(15.0)
                                .color(faded(palette.muted, shown)),
                        ]
                        .spacing(6),
                        palette,
                        shown,
                    ),
                ]
                .spacing(20)
                .align_y(Vertical::Center)
                .into(),
                shown,
            ));
        }
        entries.into()
    }

    fn conclusion_body(&self, idx: usize, palette: Palette) -> Element<'_, Message> {
        let lede = self.child(idx, 0);
        let mut cards: Row<'_, Message> = Row::new().spacing(16);
        for (n, (title, body)) in CONCLUSION_CARDS.into_iter().enumerate() {
            let shown = self.child(idx, n + 1);
            cards = cards.push(card(
                column![
                    text(title)
                        .size(20.0)
                        .font(BOLD)
                        .color(faded(palette.accent, shown)),
                    text(body).size(15.0).color(faded(palette.text, shown)),
                ]
                .spacing(8),
                palette,
                shown,
            ));
        }
        let sources = self.child(idx, CONCLUSION_CARDS.len() + 1);

        column![
            rise(
                text(CONCLUSION_LEDE)
                    .size(18.0)
                    .align_x(Horizontal::Center)
                    .width(Length::Fill)
                    .color(faded(palette.muted, lede))
                    .into(),
                lede,
            ),
            cards,
            text(SOURCES)
                .size(13.0)
                .align_x(Horizontal::Center)
                .width(Length::Fill)
                .color(faded(palette.muted, sources)),
        ]
        .spacing(24)
        .into()
    }
}

/// Clip `content` to the block's fixed height so the laid-out geometry
/// matches the bounds its reveal is evaluated against.
fn spending_block<'a>(
    block: SpendingBlock,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(block.height()))
        .clip(true)
        .into()
}
