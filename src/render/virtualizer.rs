//! Fixed-height row windowing.
//!
//! Given a row count, a row height and a viewport, work out which rows
//! intersect the viewport. Offsets and extents share the row height's unit.

use std::ops::Range;

/// The scrolled window onto the row list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Distance from the top of the first row to the top of the viewport
    pub offset: u64,
    /// Height of the viewport
    pub extent: u64,
}

impl Viewport {
    pub fn new(offset: u64, extent: u64) -> Self {
        Self { offset, extent }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Virtualizer {
    row_height: u64,
    overscan: usize,
}

impl Virtualizer {
    /// A zero row height is treated as 1.
    pub fn new(row_height: u32, overscan: usize) -> Self {
        Self {
            row_height: u64::from(row_height.max(1)),
            overscan,
        }
    }

    pub fn row_height(&self) -> u64 {
        self.row_height
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    /// Height of all rows stacked.
    pub fn total_extent(&self, rows: usize) -> u64 {
        (rows as u64).saturating_mul(self.row_height)
    }

    /// Top of row `index`.
    pub fn row_offset(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.row_height)
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self, rows: usize, extent: u64) -> u64 {
        self.total_extent(rows).saturating_sub(extent)
    }

    pub fn clamp_offset(&self, rows: usize, viewport: Viewport) -> u64 {
        viewport.offset.min(self.max_offset(rows, viewport.extent))
    }

    /// Rows intersecting the viewport, widened by the overscan on both sides.
    pub fn visible_range(&self, rows: usize, viewport: Viewport) -> Range<usize> {
        if rows == 0 || viewport.extent == 0 {
            return 0..0;
        }

        let offset = self.clamp_offset(rows, viewport);
        let first = offset / self.row_height;
        let last = (offset + viewport.extent).div_ceil(self.row_height);

        let start = usize::try_from(first).unwrap_or(usize::MAX).min(rows);
        let end = usize::try_from(last).unwrap_or(usize::MAX).min(rows);

        start.saturating_sub(self.overscan)..end.saturating_add(self.overscan).min(rows)
    }

    /// Offset that brings row `index` fully into view, moving as little as possible.
    pub fn scroll_into_view(&self, index: usize, rows: usize, viewport: Viewport) -> u64 {
        let top = self.row_offset(index);
        let bottom = top + self.row_height;
        let offset = self.clamp_offset(rows, viewport);

        let offset = if top < offset {
            top
        } else if bottom > offset + viewport.extent {
            bottom.saturating_sub(viewport.extent)
        } else {
            offset
        };

        offset.min(self.max_offset(rows, viewport.extent))
    }
}
