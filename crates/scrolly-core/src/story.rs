//! Literal content of the "From Dal-Roti to Cola-Chips" page.
//!
//! Shares are percentages of the household food budget unless noted.

use crate::section::{Section, SectionError, SectionList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn hex(value: u32) -> Self {
        Rgb {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StorySection {
    pub id: &'static str,
    pub title: &'static str,
    pub heading: &'static str,
}

/// Id of the section holding the spending chart and its companion blocks.
pub const SPENDING_SECTION_ID: &str = "data-visualization";

pub static STORY_SECTIONS: [StorySection; 7] = [
    StorySection {
        id: "intro",
        title: "Introduction",
        heading: "The Evolution of Indian Food Spending",
    },
    StorySection {
        id: "cart-comparison",
        title: "Shopping Cart Comparison",
        heading: "From Dal-Roti to Cola-Chips: What's in Your Cart?",
    },
    StorySection {
        id: SPENDING_SECTION_ID,
        title: "Food Budget Evolution",
        heading: "Four Decades of Changing Food Budgets",
    },
    StorySection {
        id: "staples-decline",
        title: "Declining Staples",
        heading: "The Declining Share of Staples",
    },
    StorySection {
        id: "processed-rise",
        title: "Rise of Processed Foods",
        heading: "The Rise of Processed Foods",
    },
    StorySection {
        id: "timeline",
        title: "Historical Timeline",
        heading: "Four Decades of Transformation",
    },
    StorySection {
        id: "conclusion",
        title: "Reflection",
        heading: "What's in Your Cart Today?",
    },
];

pub fn story_sections() -> Result<SectionList, SectionError> {
    SectionList::new(
        STORY_SECTIONS
            .iter()
            .map(|s| Section::new(s.id, s.title))
            .collect(),
    )
}

pub struct Hero {
    pub title_lead: &'static str,
    pub title_tail: &'static str,
    pub subtitle: &'static str,
    pub call_to_action: &'static str,
    pub badges: [&'static str; 4],
}

pub static HERO: Hero = Hero {
    title_lead: "From Dal-Roti",
    title_tail: "to Cola-Chips",
    subtitle: "Explore how Indian household food spending has transformed over four decades, \
               from traditional staples to processed convenience foods.",
    call_to_action: "Scroll to explore",
    badges: ["Rice", "Dal", "Cola", "Chips"],
};

pub const INTRO_LEDE: &str = "Scroll down to explore how Indian household food budgets have \
     transformed over four decades, from traditional staples to modern processed foods.";

#[derive(Debug, Clone, Copy)]
pub struct CartItem {
    pub name: &'static str,
    pub share_2004: u8,
    pub share_2023: u8,
    pub color: Rgb,
}

pub const CART_TITLE: &str = "The Changing Indian Shopping Cart";
pub const CART_DESCRIPTION: &str =
    "See how food budget allocation has dramatically shifted between 2004 and 2023";
pub const CART_TAKEAWAY: &str = "Notice how staple foods like rice, wheat, and pulses have \
     decreased significantly, while processed foods and beverages have increased dramatically \
     in the Indian household budget.";

pub static CART_ITEMS: [CartItem; 8] = [
    CartItem {
        name: "Rice & Wheat",
        share_2004: 32,
        share_2023: 18,
        color: Rgb::hex(0xE6C288),
    },
    CartItem {
        name: "Pulses & Dal",
        share_2004: 15,
        share_2023: 8,
        color: Rgb::hex(0xF2B05E),
    },
    CartItem {
        name: "Vegetables",
        share_2004: 18,
        share_2023: 12,
        color: Rgb::hex(0x8BC34A),
    },
    CartItem {
        name: "Milk & Dairy",
        share_2004: 14,
        share_2023: 16,
        color: Rgb::hex(0xF5F5F5),
    },
    CartItem {
        name: "Oils & Fats",
        share_2004: 10,
        share_2023: 7,
        color: Rgb::hex(0xFFD54F),
    },
    CartItem {
        name: "Processed Foods",
        share_2004: 6,
        share_2023: 24,
        color: Rgb::hex(0xFF5252),
    },
    CartItem {
        name: "Beverages",
        share_2004: 3,
        share_2023: 12,
        color: Rgb::hex(0x42A5F5),
    },
    CartItem {
        name: "Spices & Others",
        share_2004: 2,
        share_2023: 3,
        color: Rgb::hex(0xFF7043),
    },
];

/// Share of the household budget per category; `total` is food's share of
/// all spending.
#[derive(Debug, Clone, Copy)]
pub struct SpendingRow {
    pub year: u16,
    pub staples: u8,
    pub processed: u8,
    pub vegetables: u8,
    pub dairy: u8,
    pub total: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpendingSeries {
    Staples,
    Processed,
    Vegetables,
    Dairy,
    Total,
}

impl SpendingSeries {
    pub const ALL: [SpendingSeries; 5] = [
        SpendingSeries::Staples,
        SpendingSeries::Processed,
        SpendingSeries::Vegetables,
        SpendingSeries::Dairy,
        SpendingSeries::Total,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SpendingSeries::Staples => "Staples",
            SpendingSeries::Processed => "Processed Foods",
            SpendingSeries::Vegetables => "Vegetables",
            SpendingSeries::Dairy => "Dairy",
            SpendingSeries::Total => "Total Food Share",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            SpendingSeries::Staples => Rgb::hex(0xD4B483),
            SpendingSeries::Processed => Rgb::hex(0xE76F51),
            SpendingSeries::Vegetables => Rgb::hex(0x2A9D8F),
            SpendingSeries::Dairy => Rgb::hex(0x457B9D),
            SpendingSeries::Total => Rgb::hex(0x6C757D),
        }
    }
}

impl SpendingRow {
    pub fn value(&self, series: SpendingSeries) -> u8 {
        match series {
            SpendingSeries::Staples => self.staples,
            SpendingSeries::Processed => self.processed,
            SpendingSeries::Vegetables => self.vegetables,
            SpendingSeries::Dairy => self.dairy,
            SpendingSeries::Total => self.total,
        }
    }
}

pub const SPENDING_TITLE: &str = "The Shifting Food Budget";
pub const SPENDING_LEDE: &str = "Watch how Indian household food spending has evolved over four \
     decades, with staples declining and processed foods rising dramatically.";
pub const SPENDING_CAPTION: &str =
    "Percentage of household budget spent on different food categories (1983-2023)";

pub static SPENDING_ROWS: [SpendingRow; 6] = [
    SpendingRow {
        year: 1983,
        staples: 42,
        processed: 8,
        vegetables: 15,
        dairy: 12,
        total: 77,
    },
    SpendingRow {
        year: 1999,
        staples: 36,
        processed: 12,
        vegetables: 14,
        dairy: 13,
        total: 75,
    },
    SpendingRow {
        year: 2004,
        staples: 32,
        processed: 15,
        vegetables: 13,
        dairy: 14,
        total: 74,
    },
    SpendingRow {
        year: 2011,
        staples: 28,
        processed: 18,
        vegetables: 12,
        dairy: 15,
        total: 73,
    },
    SpendingRow {
        year: 2022,
        staples: 24,
        processed: 22,
        vegetables: 11,
        dairy: 15,
        total: 72,
    },
    SpendingRow {
        year: 2023,
        staples: 22,
        processed: 25,
        vegetables: 11,
        dairy: 15,
        total: 73,
    },
];

/// One item's share in 1983 and 2023.
#[derive(Debug, Clone, Copy)]
pub struct ItemShift {
    pub name: &'static str,
    pub color: Rgb,
    pub share_1983: u8,
    pub share_2023: u8,
}

impl ItemShift {
    /// Signed change in percentage points.
    pub fn change(&self) -> i16 {
        i16::from(self.share_2023) - i16::from(self.share_1983)
    }

    pub fn change_label(&self) -> String {
        let change = self.change();
        if change < 0 {
            format!("{}% decline", change.abs())
        } else {
            format!("{change}% increase")
        }
    }
}

pub const STAPLES_TITLE: &str = "The Shrinking Staples";
pub const STAPLES_LEDE: &str = "Traditional staples that once dominated the Indian food basket \
     have seen a dramatic decline in their share of the household budget.";

pub static STAPLE_ITEMS: [ItemShift; 4] = [
    ItemShift {
        name: "Rice",
        color: Rgb::hex(0xE6D2AA),
        share_1983: 18,
        share_2023: 9,
    },
    ItemShift {
        name: "Wheat",
        color: Rgb::hex(0xD4B483),
        share_1983: 12,
        share_2023: 6,
    },
    ItemShift {
        name: "Pulses",
        color: Rgb::hex(0xC19875),
        share_1983: 8,
        share_2023: 4,
    },
    ItemShift {
        name: "Oils",
        color: Rgb::hex(0xF2CC8F),
        share_1983: 4,
        share_2023: 3,
    },
];

pub const PROCESSED_TITLE: &str = "The Processed Food Takeover";
pub const PROCESSED_LEDE: &str = "As traditional staples declined, processed foods have surged to \
     become a major part of the Indian food budget.";

pub static PROCESSED_ITEMS: [ItemShift; 4] = [
    ItemShift {
        name: "Packaged Snacks",
        color: Rgb::hex(0xE76F51),
        share_1983: 2,
        share_2023: 8,
    },
    ItemShift {
        name: "Soft Drinks",
        color: Rgb::hex(0xF94144),
        share_1983: 1,
        share_2023: 7,
    },
    ItemShift {
        name: "Ready-to-eat",
        color: Rgb::hex(0xF3722C),
        share_1983: 3,
        share_2023: 6,
    },
    ItemShift {
        name: "Processed Dairy",
        color: Rgb::hex(0xF8961E),
        share_1983: 2,
        share_2023: 4,
    },
];

pub struct Insight {
    pub title: &'static str,
    pub body: &'static str,
    pub left: &'static str,
    pub right: &'static str,
}

pub const INSIGHTS_TITLE: &str = "Aha Moments";
pub const INSIGHTS_LEDE: &str = "Surprising insights from four decades of changing food habits.";

pub static INSIGHTS: [Insight; 3] = [
    Insight {
        title: "Cola Beats Dal",
        body: "In 2023, Indian households spent more on soft drinks than on pulses (dal), \
               a dietary staple for centuries.",
        left: "Soft Drinks: 7%",
        right: "Pulses: 4%",
    },
    Insight {
        title: "Cereal Crash",
        body: "Rice and wheat combined fell from 30% of the food budget in 1983 to just 15% \
               in 2023, a 50% decline in their share.",
        left: "1983: 30%",
        right: "2023: 15%",
    },
    Insight {
        title: "2023 Uptick",
        body: "After decades of decline, the share of household budget spent on food \
               increased slightly in 2023-24, reversing a long-term trend.",
        left: "2022: 72%",
        right: "2023: 73%",
    },
];

/// Headline staple shares shown as cards, 1983 to 2023.
#[derive(Debug, Clone, Copy)]
pub struct ShareCard {
    pub name: &'static str,
    pub from: u8,
    pub to: u8,
}

pub const SHARE_CARDS_CAPTION: &str = "Share of food budget (1983 → 2023)";

pub static SHARE_CARDS: [ShareCard; 4] = [
    ShareCard {
        name: "Rice",
        from: 38,
        to: 22,
    },
    ShareCard {
        name: "Pulses",
        from: 12,
        to: 7,
    },
    ShareCard {
        name: "Oil",
        from: 9,
        to: 5,
    },
    ShareCard {
        name: "Sugar",
        from: 8,
        to: 3,
    },
];

/// Processed-food share bar; `height_px` is the bar's fully grown height.
#[derive(Debug, Clone, Copy)]
pub struct GrowthBar {
    pub year: u16,
    pub share: u8,
    pub height_px: f32,
    pub color: Rgb,
}

/// Height every growth bar starts from before it is revealed.
pub const GROWTH_BAR_BASE_PX: f32 = 12.0;

pub static GROWTH_BARS: [GrowthBar; 4] = [
    GrowthBar {
        year: 1983,
        share: 3,
        height_px: 80.0,
        color: Rgb::hex(0xF87171),
    },
    GrowthBar {
        year: 1999,
        share: 8,
        height_px: 120.0,
        color: Rgb::hex(0xEF4444),
    },
    GrowthBar {
        year: 2011,
        share: 14,
        height_px: 180.0,
        color: Rgb::hex(0xDC2626),
    },
    GrowthBar {
        year: 2023,
        share: 26,
        height_px: 280.0,
        color: Rgb::hex(0xB91C1C),
    },
];

pub static DID_YOU_KNOW: [&str; 2] = [
    "In 2023, the average Indian household spends more on cola drinks than on dal (pulses).",
    "Processed foods now account for over a quarter of the total food budget, becoming the \
     largest single category.",
];

#[derive(Debug, Clone, Copy)]
pub struct TimelineEntry {
    pub year: u16,
    pub title: &'static str,
    pub body: &'static str,
}

pub static TIMELINE: [TimelineEntry; 6] = [
    TimelineEntry {
        year: 1983,
        title: "Traditional Diet",
        body: "Cereals and pulses dominated food spending, accounting for over 50% of the \
               food budget.",
    },
    TimelineEntry {
        year: 1999,
        title: "Early Shifts",
        body: "Liberalization brings new food products. Processed food begins to appear in \
               household budgets.",
    },
    TimelineEntry {
        year: 2004,
        title: "Rising Incomes",
        body: "As incomes rise, the share of food in total household expenditure begins to \
               decline, following Engel's Law.",
    },
    TimelineEntry {
        year: 2011,
        title: "Changing Tastes",
        body: "Processed food spending doubles from 1999 levels. Eating out becomes more \
               common in urban areas.",
    },
    TimelineEntry {
        year: 2022,
        title: "Modern Diet",
        body: "Processed foods become the largest category. Traditional staples now account \
               for less than 30% of food spending.",
    },
    TimelineEntry {
        year: 2023,
        title: "Post-Pandemic Shift",
        body: "Food spending as a share of total budget increases slightly, reversing a \
               decades-long trend.",
    },
];

pub const CONCLUSION_LEDE: &str = "The Indian food landscape has undergone a remarkable \
     transformation over four decades. As incomes have risen and markets have opened up, \
     traditional staples have given way to processed foods, convenience items, and eating out.";

pub static CONCLUSION_CARDS: [(&str, &str); 2] = [
    (
        "Economic Forces",
        "As incomes rise, the share of budget spent on food typically falls (Engel's Law), \
         but within food budgets, processed and convenience foods gain prominence.",
    ),
    (
        "Cultural Shifts",
        "Urbanization, working women, smaller families, and global influences have all \
         contributed to changing food preferences and consumption patterns.",
    ),
];

pub const SOURCES: &str = "Data sources: National Sample Survey Office (NSSO) and Household \
     Consumption Expenditure Survey (HCES)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn story_sections_are_valid_and_ordered() {
        let sections = story_sections().expect("story sections are unique");
        assert_eq!(sections.len(), 7);
        assert_eq!(sections.position("cart-comparison"), Some(1));
        assert_eq!(sections.position("conclusion"), Some(6));
    }

    #[test]
    fn item_change_is_signed() {
        assert_eq!(STAPLE_ITEMS[0].change(), -9);
        assert_eq!(STAPLE_ITEMS[0].change_label(), "9% decline");
        assert_eq!(PROCESSED_ITEMS[1].change(), 6);
        assert_eq!(PROCESSED_ITEMS[1].change_label(), "6% increase");
    }

    #[test]
    fn hex_colors_split_channels() {
        assert_eq!(
            Rgb::hex(0xE6C288),
            Rgb {
                r: 0xE6,
                g: 0xC2,
                b: 0x88
            }
        );
    }

    #[test]
    fn spending_series_reads_matching_column() {
        let first = SPENDING_ROWS[0];
        assert_eq!(first.value(SpendingSeries::Staples), 42);
        assert_eq!(first.value(SpendingSeries::Total), 77);
    }
}
