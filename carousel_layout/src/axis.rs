// Copyright 2026 the Carousel Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis model: strip positions, centered offsets, and the visible window.

use crate::Scalar;

/// Result of a visible-window query, half-open over item indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleWindow {
    /// First laid-out index (inclusive).
    pub start: usize,
    /// One past the last laid-out index (exclusive).
    pub end: usize,
}

impl VisibleWindow {
    /// An empty window.
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Returns `true` if no items are laid out.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of laid-out items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Positions of a uniform strip of carousel items along the scroll axis.
///
/// Items sit at multiples of the *interval* (item extent plus spacing); the
/// scroll offset slides the viewport center along the strip. All queries are
/// pure functions of the current fields, so a layout pass observes one
/// consistent geometry.
#[derive(Debug, Clone, Copy)]
pub struct AxisModel<S: Scalar> {
    len: usize,
    item_extent: S,
    item_space: S,
    reverse: bool,
}

impl<S: Scalar> AxisModel<S> {
    /// Creates a model for `len` items of uniform `item_extent` separated by
    /// `item_space`, both clamped to be non-negative.
    #[must_use]
    pub fn new(len: usize, item_extent: S, item_space: S, reverse: bool) -> Self {
        Self {
            len,
            item_extent: sanitize(item_extent),
            item_space: sanitize(item_space),
            reverse,
        }
    }

    /// Number of items on the strip.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the strip has no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Item extent along the scroll axis, including the item's decorations.
    #[must_use]
    pub const fn item_extent(&self) -> S {
        self.item_extent
    }

    /// Sets the number of items on the strip.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
    }

    /// Feeds in the measured item extent. Hosts call this once their
    /// measurement pass has run.
    pub fn set_item_extent(&mut self, item_extent: S) {
        self.item_extent = sanitize(item_extent);
    }

    /// Sets the extra spacing between consecutive items.
    pub fn set_item_space(&mut self, item_space: S) {
        self.item_space = sanitize(item_space);
    }

    /// Sets whether offsets are negated for reverse layout.
    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
    }

    /// Center-to-center pitch between consecutive items.
    #[must_use]
    pub fn interval(&self) -> S {
        self.item_extent + self.item_space
    }

    /// Base position of an item's center on the strip.
    #[must_use]
    pub fn offset_of(&self, index: usize) -> S {
        S::from_usize(index) * self.interval()
    }

    /// Largest meaningful scroll offset: the last item's strip position.
    #[must_use]
    pub fn max_offset(&self) -> S {
        if self.len == 0 {
            S::zero()
        } else {
            self.offset_of(self.len - 1)
        }
    }

    /// Signed distance from the item's center to the viewport center.
    ///
    /// Zero means perfectly centered; the sign flips under reverse layout.
    #[must_use]
    pub fn centered_offset(&self, index: usize, scroll_offset: S) -> S {
        let offset = self.offset_of(index) - scroll_offset;
        if self.reverse { -offset } else { offset }
    }

    /// Index whose center is closest to the viewport center, clamped into
    /// bounds. Returns 0 for an empty or degenerate strip.
    #[must_use]
    pub fn nearest_index(&self, scroll_offset: S) -> usize {
        let interval = self.interval();
        if self.len == 0 || interval <= S::zero() {
            return 0;
        }
        let idx = (scroll_offset / interval).round_to_isize();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "item counts fit in isize"
        )]
        let max = self.len as isize - 1;
        idx.clamp(0, max) as usize
    }

    /// Computes which items should be laid out for the given scroll offset.
    ///
    /// An item is included while its centered offset lies within a half-width
    /// limit around the viewport center: `interval * max_visible / 2` when a
    /// cap is given, otherwise half the viewport extent plus one extra
    /// interval of slack per side so fast scrolls do not pop items in late.
    /// Reverse layout flips signs only, so the window is unaffected by it.
    ///
    /// Zero items, or an interval of zero (nothing measured yet), yield an
    /// empty window rather than an error.
    #[must_use]
    pub fn visible_window(
        &self,
        scroll_offset: S,
        viewport_extent: S,
        max_visible: Option<usize>,
    ) -> VisibleWindow {
        let interval = self.interval();
        if self.len == 0 || interval <= S::zero() {
            return VisibleWindow::EMPTY;
        }

        let two = S::one() + S::one();
        let limit = match max_visible {
            Some(count) => interval * S::from_usize(count) / two,
            None => viewport_extent.max(S::zero()) / two + interval,
        };

        let lo = scroll_offset - limit;
        let hi = scroll_offset + limit;

        // Rough start from the lower bound, then walk like the strip were a
        // prefix sum: forward past items below the window, then forward again
        // through items inside it.
        let mut start = usize::try_from((lo / interval).floor_to_isize().max(0)).unwrap_or(0);
        start = start.min(self.len);
        while start < self.len && self.offset_of(start) < lo {
            start += 1;
        }

        let mut end = start;
        while end < self.len && self.offset_of(end) <= hi {
            end += 1;
        }

        VisibleWindow { start, end }
    }
}

/// Clamps finite negative measurements to zero; non-finite input is a host
/// bug and debug-asserts.
fn sanitize<S: Scalar>(value: S) -> S {
    debug_assert!(
        value.is_finite(),
        "axis measurements must be finite; got {value:?}"
    );
    if value.is_sign_negative() { S::zero() } else { value }
}
