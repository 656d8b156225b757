use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use scrolly_core::Transition;
use std::time::Duration;

/// Fixed geometry of the story page. Every block is rendered at exactly
/// these heights so the tracker can be fed computed bounds.
pub(crate) const HERO_HEIGHT_PX: f32 = 760.0;
pub(crate) const FOOTER_HEIGHT_PX: f32 = 180.0;
pub(crate) const SECTION_HEIGHTS_PX: [f32; 7] = [720.0, 980.0, 1900.0, 820.0, 900.0, 1180.0, 900.0];
pub(crate) const SECTION_PADDING_PX: f32 = 48.0;
pub(crate) const SECTION_HEADING_HEIGHT_PX: f32 = 80.0;
pub(crate) const SECTION_BODY_GAP_PX: f32 = 32.0;

/// The spending section is tall enough to hold four blocks that reveal on
/// their own: chart, staples, processed foods, insights.
pub(crate) const SPENDING_LEDE_HEIGHT_PX: f32 = 60.0;
pub(crate) const SPENDING_BLOCK_GAP_PX: f32 = 20.0;
pub(crate) const SPENDING_BLOCK_HEIGHTS_PX: [f32; 4] = [560.0, 300.0, 300.0, 380.0];
pub(crate) const CONTENT_MAX_WIDTH_PX: f32 = 960.0;

pub(crate) const PROGRESS_BAR_HEIGHT_PX: f32 = 4.0;
pub(crate) const NAV_DOT_SIZE_PX: f32 = 12.0;
pub(crate) const NAV_DOT_SPACING_PX: f32 = 10.0;

/// Pixels of bar per percentage point in the horizontal bar charts.
pub(crate) const BAR_PX_PER_POINT: f32 = 12.0;
pub(crate) const BAR_HEIGHT_PX: f32 = 18.0;
pub(crate) const ENTRANCE_OFFSET_PX: f32 = 24.0;

pub(crate) const SECTION_ENTRANCE: Transition = Transition::from_millis(800, 0);
pub(crate) const CHILD_ENTRANCE: Transition = Transition::from_millis(500, 300);
pub(crate) const CHILD_STAGGER: Duration = Duration::from_millis(200);
pub(crate) const BAR_GROWTH: Transition = Transition::from_millis(1000, 500);
pub(crate) const BAR_GROWTH_LATE: Transition = Transition::from_millis(1000, 800);
/// Upper bound on any in-section animation, used to decide when ticking can stop.
pub(crate) const REVEAL_SETTLE: Transition = Transition::from_millis(1000, 2400);

pub(crate) const HERO_TITLE: Transition = Transition::from_millis(800, 0);
pub(crate) const HERO_SUBTITLE: Transition = Transition::from_millis(800, 300);
pub(crate) const HERO_BUTTON: Transition = Transition::from_millis(800, 600);
pub(crate) const HERO_BADGE: Transition = Transition::from_millis(500, 800);
pub(crate) const HERO_SETTLE: Transition = Transition::from_millis(500, 1400);

pub(crate) static STORY_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("story-scroll"));
