//! Ordered, immutable section definitions and their measured geometry.

use std::collections::HashSet;
use thiserror::Error;

/// One named narrative beat of the page. Its rank is its position in the
/// owning [`SectionList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub title: String,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Section {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SectionError {
    #[error("section at position {index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate section id `{id}` at position {index}")]
    DuplicateId { id: String, index: usize },
}

/// Validated ordered sequence of sections; ids are unique and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionList {
    sections: Vec<Section>,
}

impl SectionList {
    pub fn new(sections: Vec<Section>) -> Result<Self, SectionError> {
        let mut seen = HashSet::with_capacity(sections.len());
        for (index, section) in sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(SectionError::EmptyId { index });
            }
            if !seen.insert(section.id.as_str()) {
                return Err(SectionError::DuplicateId {
                    id: section.id.clone(),
                    index,
                });
            }
        }
        Ok(SectionList { sections })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }
}

/// Document-relative vertical extent of one element. The covered range is
/// half-open: `[top, bottom)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SectionBounds {
    pub top: f32,
    pub height: f32,
}

impl SectionBounds {
    pub fn new(top: f32, height: f32) -> Self {
        SectionBounds { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Measured geometry of the tracked container and its child sections, in
/// section order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContainerLayout {
    pub top: f32,
    pub height: f32,
    pub sections: Vec<SectionBounds>,
}

impl ContainerLayout {
    /// Stack sections of the given heights directly below `top`.
    pub fn stacked(top: f32, heights: &[f32]) -> Self {
        let mut cursor = top;
        let sections = heights
            .iter()
            .map(|height| {
                let bounds = SectionBounds::new(cursor, height.max(0.0));
                cursor = bounds.bottom();
                bounds
            })
            .collect();
        ContainerLayout {
            top,
            height: cursor - top,
            sections,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_ids() {
        let err = SectionList::new(vec![
            Section::new("intro", "Introduction"),
            Section::new("timeline", "Timeline"),
            Section::new("intro", "Again"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SectionError::DuplicateId {
                id: "intro".to_string(),
                index: 2
            }
        );
    }

    #[test]
    fn rejects_blank_ids() {
        let err = SectionList::new(vec![Section::new("  ", "Blank")]).unwrap_err();
        assert_eq!(err, SectionError::EmptyId { index: 0 });
    }

    #[test]
    fn bounds_are_half_open() {
        let bounds = SectionBounds::new(800.0, 800.0);
        assert!(bounds.contains(800.0));
        assert!(bounds.contains(1599.9));
        assert!(!bounds.contains(1600.0));
    }

    #[test]
    fn stacked_layout_accumulates_heights() {
        let layout = ContainerLayout::stacked(100.0, &[800.0, 600.0, 400.0]);
        assert_eq!(layout.height, 1800.0);
        assert_eq!(layout.sections[1], SectionBounds::new(900.0, 600.0));
        assert_eq!(layout.sections[2].bottom(), layout.bottom());
    }
}
