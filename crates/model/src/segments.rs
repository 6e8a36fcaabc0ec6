use crate::error::ModelError;
use revpdf_locale::{LabelKey, Labels};
use revpdf_types::Segment;
use std::ops::{Deref, DerefMut};

/// An ordered list of segments with contiguous, 0-based indices.
///
/// Every mutation leaves `segments[i].index == i`, so display numbers
/// (`index + 1`) always run 1..=len without gaps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentModel {
    segments: Vec<Segment>,
}

impl SegmentModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty segment and returns its display number.
    pub fn add(&mut self) -> usize {
        let index = self.segments.len();
        self.segments.push(Segment::new(index));
        log::debug!("Added segment {}", index + 1);
        self.segments.len()
    }

    /// Removes the segment at `index` and renumbers everything after it.
    pub fn remove(&mut self, index: usize) -> Result<Segment, ModelError> {
        self.check(index)?;
        let removed = self.segments.remove(index);
        for segment in &mut self.segments[index..] {
            segment.index -= 1;
        }
        log::debug!(
            "Removed segment {}; {} remaining",
            removed.display_number(),
            self.segments.len()
        );
        Ok(removed)
    }

    pub fn list(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// In-place edit access to one segment's fields.
    ///
    /// The segment's position is owned by the model: any change to `index`
    /// made through the returned guard is undone when the guard is dropped.
    pub fn get_mut(&mut self, index: usize) -> Result<SegmentMut<'_>, ModelError> {
        self.check(index)?;
        Ok(SegmentMut {
            segment: &mut self.segments[index],
            position: index,
        })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Captions such as "Segment 1", "Segment 2", in display order.
    pub fn display_labels(&self, labels: &Labels) -> Vec<String> {
        let caption = labels.get(LabelKey::SegmentTitle);
        self.segments
            .iter()
            .map(|segment| format!("{} {}", caption, segment.display_number()))
            .collect()
    }

    fn check(&self, index: usize) -> Result<(), ModelError> {
        if index < self.segments.len() {
            Ok(())
        } else {
            Err(ModelError::OutOfRange {
                index,
                len: self.segments.len(),
            })
        }
    }
}

/// Mutable access to a segment that keeps its position fixed.
#[derive(Debug)]
pub struct SegmentMut<'a> {
    segment: &'a mut Segment,
    position: usize,
}

impl Deref for SegmentMut<'_> {
    type Target = Segment;

    fn deref(&self) -> &Segment {
        self.segment
    }
}

impl DerefMut for SegmentMut<'_> {
    fn deref_mut(&mut self) -> &mut Segment {
        self.segment
    }
}

impl Drop for SegmentMut<'_> {
    fn drop(&mut self) {
        if self.segment.index != self.position {
            log::warn!(
                "Ignoring index change of segment {} to {}",
                self.position + 1,
                self.segment.index + 1
            );
            self.segment.index = self.position;
        }
    }
}
