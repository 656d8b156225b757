use super::constants::{
    FOOTER_HEIGHT_PX, HERO_HEIGHT_PX, SECTION_BODY_GAP_PX, SECTION_HEADING_HEIGHT_PX,
    SECTION_HEIGHTS_PX, SECTION_PADDING_PX, SPENDING_BLOCK_GAP_PX, SPENDING_BLOCK_HEIGHTS_PX,
    SPENDING_LEDE_HEIGHT_PX,
};
use scrolly_core::story::{SPENDING_SECTION_ID, STORY_SECTIONS};
use scrolly_core::{ContainerLayout, SectionBounds};

/// Blocks of the spending section that reveal independently, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpendingBlock {
    Chart,
    Staples,
    Processed,
    Insights,
}

impl SpendingBlock {
    pub(crate) const ALL: [SpendingBlock; 4] = [
        SpendingBlock::Chart,
        SpendingBlock::Staples,
        SpendingBlock::Processed,
        SpendingBlock::Insights,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub(crate) fn height(self) -> f32 {
        SPENDING_BLOCK_HEIGHTS_PX[self.index()]
    }
}

/// Document geometry of the rendered page: hero, the tracked story
/// container, then the footer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StoryLayout {
    container: ContainerLayout,
    blocks: Vec<SectionBounds>,
}

impl StoryLayout {
    /// Section `i` gets `SECTION_HEIGHTS_PX[i]` but never less than
    /// `min_section_height`.
    pub(crate) fn new(section_count: usize, min_section_height: f32) -> Self {
        let heights: Vec<f32> = (0..section_count)
            .map(|idx| {
                SECTION_HEIGHTS_PX
                    .get(idx)
                    .copied()
                    .unwrap_or(min_section_height)
                    .max(min_section_height)
            })
            .collect();
        let container = ContainerLayout::stacked(HERO_HEIGHT_PX, &heights);
        let blocks = STORY_SECTIONS
            .iter()
            .position(|section| section.id == SPENDING_SECTION_ID)
            .and_then(|idx| container.sections.get(idx).copied())
            .map(spending_blocks)
            .unwrap_or_default();
        StoryLayout { container, blocks }
    }

    pub(crate) fn container(&self) -> &ContainerLayout {
        &self.container
    }

    pub(crate) fn sections(&self) -> &[SectionBounds] {
        &self.container.sections
    }

    /// Bounds of the spending blocks, in [`SpendingBlock::ALL`] order. Empty
    /// when the spending section is not on the page.
    pub(crate) fn blocks(&self) -> &[SectionBounds] {
        &self.blocks
    }

    pub(crate) fn block(&self, block: SpendingBlock) -> Option<SectionBounds> {
        self.blocks.get(block.index()).copied()
    }

    pub(crate) fn section(&self, idx: usize) -> Option<SectionBounds> {
        self.container.sections.get(idx).copied()
    }

    pub(crate) fn content_height(&self) -> f32 {
        self.container.bottom() + FOOTER_HEIGHT_PX
    }

    /// Largest scroll offset the scrollable can reach for `viewport_height`.
    pub(crate) fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.content_height() - viewport_height).max(0.0)
    }

    /// Offset that brings section `idx` to the top of the viewport.
    pub(crate) fn scroll_target(&self, idx: usize, viewport_height: f32) -> Option<f32> {
        self.section(idx)
            .map(|bounds| bounds.top.min(self.max_scroll(viewport_height)))
    }
}

/// Blocks sit below the heading and lede, separated by the body spacing.
fn spending_blocks(section: SectionBounds) -> Vec<SectionBounds> {
    let mut cursor = section.top
        + SECTION_PADDING_PX
        + SECTION_HEADING_HEIGHT_PX
        + SECTION_BODY_GAP_PX
        + SPENDING_LEDE_HEIGHT_PX
        + SPENDING_BLOCK_GAP_PX;
    SpendingBlock::ALL
        .into_iter()
        .map(|block| {
            let bounds = SectionBounds::new(cursor, block.height());
            cursor = bounds.bottom() + SPENDING_BLOCK_GAP_PX;
            bounds
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_stack_below_hero() {
        let layout = StoryLayout::new(3, 0.0);
        assert_eq!(layout.container().top, HERO_HEIGHT_PX);
        assert_eq!(layout.sections()[1].top, HERO_HEIGHT_PX + SECTION_HEIGHTS_PX[0]);
        assert_eq!(
            layout.content_height(),
            HERO_HEIGHT_PX + SECTION_HEIGHTS_PX[..3].iter().sum::<f32>() + FOOTER_HEIGHT_PX
        );
    }

    #[test]
    fn min_height_raises_short_sections() {
        let layout = StoryLayout::new(2, 5000.0);
        assert!(layout.sections().iter().all(|s| s.height == 5000.0));
    }

    #[test]
    fn extra_sections_use_min_height() {
        let layout = StoryLayout::new(SECTION_HEIGHTS_PX.len() + 1, 640.0);
        assert_eq!(layout.sections().last().map(|s| s.height), Some(640.0));
    }

    #[test]
    fn spending_blocks_fit_inside_their_section() {
        let layout = StoryLayout::new(STORY_SECTIONS.len(), 0.0);
        let idx = STORY_SECTIONS
            .iter()
            .position(|section| section.id == SPENDING_SECTION_ID)
            .expect("spending section exists");
        let section = layout.section(idx).expect("spending section bounds");

        assert_eq!(layout.blocks().len(), SpendingBlock::ALL.len());
        for pair in layout.blocks().windows(2) {
            assert!(pair[0].bottom() < pair[1].top);
        }
        let last = layout
            .block(SpendingBlock::Insights)
            .expect("insights block");
        assert!(layout.blocks()[0].top > section.top);
        assert!(last.bottom() + SECTION_PADDING_PX <= section.bottom());
    }

    #[test]
    fn short_page_has_no_spending_blocks() {
        assert!(StoryLayout::new(2, 0.0).blocks().is_empty());
    }

    #[test]
    fn scroll_target_is_clamped_to_reachable_range() {
        let layout = StoryLayout::new(7, 0.0);
        let last = layout.section(6).map(|s| s.top);
        let target = layout.scroll_target(6, 4000.0);
        assert!(target < last);
        assert_eq!(target, Some(layout.max_scroll(4000.0)));
        assert_eq!(layout.scroll_target(9, 800.0), None);
    }
}
