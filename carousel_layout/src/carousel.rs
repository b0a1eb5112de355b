// Copyright 2026 the Carousel Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns the configuration, axis model, and scroll
//! state of one carousel.

use smallvec::SmallVec;

use crate::{AxisModel, CarouselConfig, Invalidation, Scalar, transform};

/// Coarse scroll state. The carousel is either at rest with one item
/// centered, or moving under a drag or a settle animation driven by the
/// host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    /// Scroll offset stable; the nearest item sits at the center.
    #[default]
    Idle,
    /// Offset changing, due to a drag or a fling-driven smooth scroll.
    Scrolling,
}

/// Laid-out output for one visible item, recomputed every pass and never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout<S: Scalar> {
    /// Item index on the strip.
    pub index: usize,
    /// Signed distance from the item's center to the viewport center. The
    /// host derives the on-screen position from this along the configured
    /// orientation.
    pub centered_offset: S,
    /// Uniform scale to apply to the item's rendering.
    pub scale: S,
    /// Opacity to apply to the item's rendering.
    pub alpha: S,
}

/// Inline capacity for one layout pass; carousels rarely show more items.
const PASS_INLINE: usize = 8;

/// Controller for a center-scaling carousel.
///
/// This type:
/// - stores the [`CarouselConfig`], an [`AxisModel`], viewport extent, and
///   scroll offset,
/// - caches the most recent layout pass,
/// - exposes snap and fling-settle targets for the host's gesture handler.
///
/// It does *not* know about widgets or own timers; the host framework drives
/// scroll offsets per frame and applies the returned [`ItemLayout`]s. A pass
/// borrows the controller, so reconfiguring mid-pass is rejected by the
/// borrow checker rather than by a runtime layout guard.
#[derive(Debug)]
pub struct Carousel<S: Scalar> {
    config: CarouselConfig<S>,
    axis: AxisModel<S>,
    viewport_extent: S,
    scroll_offset: S,
    phase: ScrollPhase,

    dirty: bool,
    last_pass: SmallVec<[ItemLayout<S>; PASS_INLINE]>,
}

impl<S: Scalar> Carousel<S> {
    /// Creates a controller for `item_count` items. The item extent starts
    /// at zero (nothing is laid out) until the host feeds in a measurement
    /// via [`Self::set_item_extent`].
    #[must_use]
    pub fn new(config: CarouselConfig<S>, item_count: usize, viewport_extent: S) -> Self {
        let axis = AxisModel::new(item_count, S::zero(), config.item_space(), config.reverse());
        Self {
            config,
            axis,
            viewport_extent: viewport_extent.max(S::zero()),
            scroll_offset: S::zero(),
            phase: ScrollPhase::Idle,
            dirty: true,
            last_pass: SmallVec::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &CarouselConfig<S> {
        &self.config
    }

    /// The underlying axis model.
    #[must_use]
    pub const fn axis(&self) -> &AxisModel<S> {
        &self.axis
    }

    /// Applies a new configuration and reports how much of the current
    /// output it invalidates.
    ///
    /// [`Invalidation::Layout`] discards the cached pass outright,
    /// [`Invalidation::Transforms`] recomputes it on the next
    /// [`Self::layout_pass`], and [`Invalidation::None`] leaves everything
    /// in place.
    pub fn reconfigure(&mut self, next: CarouselConfig<S>) -> Invalidation {
        let tier = self.config.diff(&next);
        self.config = next;
        match tier {
            Invalidation::Layout => {
                self.axis.set_item_space(self.config.item_space());
                self.axis.set_reverse(self.config.reverse());
                self.scroll_offset = self.clamp_offset(self.scroll_offset);
                self.last_pass.clear();
                self.dirty = true;
            }
            Invalidation::Transforms => self.dirty = true,
            Invalidation::None => {}
        }
        tier
    }

    /// Sets the number of items on the strip.
    pub fn set_item_count(&mut self, count: usize) {
        if count != self.axis.len() {
            self.axis.set_len(count);
            self.scroll_offset = self.clamp_offset(self.scroll_offset);
            self.dirty = true;
        }
    }

    /// Feeds in the measured item extent along the scroll axis, including
    /// decorations. Hosts call this after their measurement pass.
    pub fn set_item_extent(&mut self, item_extent: S) {
        if item_extent != self.axis.item_extent() {
            self.axis.set_item_extent(item_extent);
            self.scroll_offset = self.clamp_offset(self.scroll_offset);
            self.dirty = true;
        }
    }

    /// Sets the viewport extent along the scroll axis.
    pub fn set_viewport_extent(&mut self, extent: S) {
        let extent = extent.max(S::zero());
        if extent != self.viewport_extent {
            self.viewport_extent = extent;
            self.dirty = true;
        }
    }

    /// Viewport extent along the scroll axis.
    #[must_use]
    pub const fn viewport_extent(&self) -> S {
        self.viewport_extent
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> S {
        self.scroll_offset
    }

    /// Sets the scroll offset, clamped to the strip. A single-item carousel
    /// with swiping disabled stays pinned at that item's position.
    pub fn set_scroll_offset(&mut self, offset: S) {
        let offset = self.clamp_offset(offset);
        if offset != self.scroll_offset {
            self.scroll_offset = offset;
            self.dirty = true;
        }
    }

    /// Adjusts the scroll offset by `delta`.
    pub fn scroll_by(&mut self, delta: S) {
        self.set_scroll_offset(self.scroll_offset + delta);
    }

    /// Whether the host should accept swipe gestures at all.
    #[must_use]
    pub fn can_swipe(&self) -> bool {
        self.axis.len() > 1 || self.config.swipe_when_single()
    }

    /// Center-to-center pitch between consecutive items.
    #[must_use]
    pub fn interval(&self) -> S {
        self.axis.interval()
    }

    /// Multiplier the host's fling handler uses to turn velocity into extra
    /// scroll distance. See [`crate::distance_ratio`].
    #[must_use]
    pub fn distance_ratio(&self) -> S {
        transform::distance_ratio(&self.config)
    }

    /// Fixed cross-axis offset for items, if configured.
    #[must_use]
    pub const fn perpendicular_offset(&self) -> Option<S> {
        self.config.perpendicular_offset()
    }

    /// Index of the item currently nearest the viewport center.
    #[must_use]
    pub fn nearest_index(&self) -> usize {
        self.axis.nearest_index(self.scroll_offset)
    }

    /// Scroll offset that centers the given item, clamped into bounds.
    #[must_use]
    pub fn offset_for(&self, index: usize) -> S {
        let index = index.min(self.axis.len().saturating_sub(1));
        self.clamp_offset(self.axis.offset_of(index))
    }

    /// Scroll offset of the nearest interval boundary: the settle target
    /// after a plain drag release.
    #[must_use]
    pub fn snap_offset(&self) -> S {
        self.snap_to(self.scroll_offset)
    }

    /// Settle target after a fling: current offset plus the velocity scaled
    /// down by the distance ratio, snapped to the nearest interval boundary.
    ///
    /// With an infinite ratio (move speed zero) the velocity contributes no
    /// travel and the carousel snaps in place.
    #[must_use]
    pub fn settle_target(&self, fling_velocity: S) -> S {
        let ratio = self.distance_ratio();
        let travel = if ratio.is_finite() {
            fling_velocity / ratio
        } else {
            S::zero()
        };
        self.snap_to(self.scroll_offset + travel)
    }

    /// Marks the start of a drag or programmatic smooth scroll.
    pub fn begin_scroll(&mut self) {
        self.phase = ScrollPhase::Scrolling;
    }

    /// Marks the end of scrolling: snaps the offset to the nearest interval
    /// boundary, returns it, and goes idle.
    pub fn finish_scroll(&mut self) -> S {
        let target = self.snap_offset();
        self.set_scroll_offset(target);
        self.phase = ScrollPhase::Idle;
        self.scroll_offset
    }

    /// Current coarse scroll state.
    #[must_use]
    pub const fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Returns `true` when the carousel is idle with an item exactly
    /// centered.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase == ScrollPhase::Idle && self.scroll_offset == self.snap_offset()
    }

    /// Computes (or returns the cached) layout pass: every item in the
    /// visible window with its centered offset, scale, and alpha.
    pub fn layout_pass(&mut self) -> &[ItemLayout<S>] {
        if self.dirty {
            self.last_pass.clear();
            let window = self.axis.visible_window(
                self.scroll_offset,
                self.viewport_extent,
                self.config.max_visible_items(),
            );
            let item_extent = self.axis.item_extent();
            let interval = self.axis.interval();
            for index in window.start..window.end {
                let centered_offset = self.axis.centered_offset(index, self.scroll_offset);
                let state =
                    transform::visual_state(&self.config, item_extent, interval, centered_offset);
                self.last_pass.push(ItemLayout {
                    index,
                    centered_offset,
                    scale: state.scale,
                    alpha: state.alpha,
                });
            }
            self.dirty = false;
        }
        &self.last_pass
    }

    fn clamp_offset(&self, offset: S) -> S {
        if self.axis.len() == 1 && !self.config.swipe_when_single() {
            // Pinned: the single item stays centered.
            return self.axis.offset_of(0);
        }
        offset.max(S::zero()).min(self.axis.max_offset())
    }

    fn snap_to(&self, offset: S) -> S {
        let interval = self.axis.interval();
        if self.axis.len() == 0 || interval <= S::zero() {
            return self.clamp_offset(offset);
        }
        let index = (offset / interval).round_to_isize().max(0);
        let index = usize::try_from(index).unwrap_or(0).min(self.axis.len() - 1);
        self.clamp_offset(self.axis.offset_of(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{Carousel, ScrollPhase};
    use crate::{CarouselConfig, Invalidation};

    fn banner_carousel() -> Carousel<f32> {
        let config = CarouselConfig::builder(20.0)
            .item_scale(0.8)
            .side_alpha(0.5)
            .build();
        let mut carousel = Carousel::new(config, 5, 400.0);
        carousel.set_item_extent(100.0);
        carousel
    }

    #[test]
    fn pass_centers_the_item_under_the_scroll_offset() {
        let mut carousel = banner_carousel();
        carousel.set_scroll_offset(240.0);

        let pass = carousel.layout_pass();
        let centered = pass
            .iter()
            .find(|item| item.centered_offset == 0.0)
            .expect("one item should be exactly centered");
        assert_eq!(centered.index, 2);
        assert_eq!(centered.scale, 1.0);
        assert_eq!(centered.alpha, 1.0);

        // Neighbors sit one interval out: fully faded, fully shrunk.
        let left = pass.iter().find(|item| item.index == 1).unwrap();
        assert_eq!(left.centered_offset, -120.0);
        assert_eq!(left.scale, 0.8);
        assert_eq!(left.alpha, 0.5);
    }

    #[test]
    fn pass_is_cached_until_something_changes() {
        let mut carousel = banner_carousel();
        let first_len = carousel.layout_pass().len();
        assert!(first_len > 0);

        // Unchanged inputs are no-ops; the cached pass is reused.
        carousel.set_scroll_offset(0.0);
        carousel.set_item_extent(100.0);
        assert_eq!(carousel.layout_pass().len(), first_len);

        carousel.set_scroll_offset(120.0);
        let pass = carousel.layout_pass();
        assert!(pass.iter().any(|item| item.index == 1 && item.centered_offset == 0.0));
    }

    #[test]
    fn empty_carousel_lays_out_nothing() {
        let config = CarouselConfig::builder(20.0).build();
        let mut carousel = Carousel::new(config, 0, 400.0);
        carousel.set_item_extent(100.0);
        assert!(carousel.layout_pass().is_empty());
        assert_eq!(carousel.snap_offset(), 0.0);
    }

    #[test]
    fn unmeasured_carousel_lays_out_nothing() {
        let config = CarouselConfig::builder(0.0).build();
        let mut carousel = Carousel::new(config, 5, 400.0);
        assert!(carousel.layout_pass().is_empty());
    }

    #[test]
    fn scroll_offset_clamps_to_the_strip() {
        let mut carousel = banner_carousel();
        carousel.set_scroll_offset(-50.0);
        assert_eq!(carousel.scroll_offset(), 0.0);
        carousel.set_scroll_offset(10_000.0);
        // Last item's position: 4 * 120.
        assert_eq!(carousel.scroll_offset(), 480.0);
    }

    #[test]
    fn single_item_is_pinned_unless_swiping_is_allowed() {
        let config = CarouselConfig::builder(20.0).build();
        let mut pinned = Carousel::new(config, 1, 400.0);
        pinned.set_item_extent(100.0);
        assert!(!pinned.can_swipe());
        pinned.set_scroll_offset(60.0);
        assert_eq!(pinned.scroll_offset(), 0.0);

        let config = CarouselConfig::builder(20.0).swipe_when_single(true).build();
        let mut free = Carousel::new(config, 1, 400.0);
        free.set_item_extent(100.0);
        assert!(free.can_swipe());
        // Normal clamping still applies; with one item the strip ends at 0.
        free.set_scroll_offset(60.0);
        assert_eq!(free.scroll_offset(), 0.0);
    }

    #[test]
    fn snap_picks_the_nearest_interval_boundary() {
        let mut carousel = banner_carousel();
        carousel.set_scroll_offset(150.0);
        assert_eq!(carousel.nearest_index(), 1);
        assert_eq!(carousel.snap_offset(), 120.0);

        carousel.set_scroll_offset(190.0);
        assert_eq!(carousel.snap_offset(), 240.0);
    }

    #[test]
    fn settle_target_scales_velocity_by_the_distance_ratio() {
        let mut carousel = banner_carousel();
        carousel.set_scroll_offset(240.0);

        // Default move speed 1.0: ratio 1, a 130-unit fling reaches the next
        // boundary.
        assert_eq!(carousel.settle_target(130.0), 360.0);
        assert_eq!(carousel.settle_target(-130.0), 120.0);
        // A weak fling falls back to the current boundary.
        assert_eq!(carousel.settle_target(30.0), 240.0);
        // Flings cannot overshoot the strip.
        assert_eq!(carousel.settle_target(100_000.0), 480.0);
    }

    #[test]
    fn zero_move_speed_snaps_in_place() {
        let config = CarouselConfig::builder(20.0).move_speed(0.0).build();
        let mut carousel = Carousel::new(config, 5, 400.0);
        carousel.set_item_extent(100.0);
        carousel.set_scroll_offset(250.0);

        assert_eq!(carousel.distance_ratio(), f32::INFINITY);
        // Velocity contributes nothing; only the nearest boundary matters.
        assert_eq!(carousel.settle_target(5_000.0), 240.0);
    }

    #[test]
    fn damped_move_speed_shortens_fling_travel() {
        let config = CarouselConfig::builder(20.0).move_speed(0.5).build();
        let mut carousel = Carousel::new(config, 5, 400.0);
        carousel.set_item_extent(100.0);
        carousel.set_scroll_offset(240.0);

        // Ratio 2.0: a 100-unit fling travels only 50 units and rounds back
        // to the current boundary, where move speed 1.0 would have reached
        // the next one.
        assert_eq!(carousel.distance_ratio(), 2.0);
        assert_eq!(carousel.settle_target(100.0), 240.0);
    }

    #[test]
    fn phase_transitions_and_settling() {
        let mut carousel = banner_carousel();
        assert_eq!(carousel.phase(), ScrollPhase::Idle);
        assert!(carousel.is_settled());

        carousel.begin_scroll();
        carousel.scroll_by(150.0);
        assert_eq!(carousel.phase(), ScrollPhase::Scrolling);
        assert!(!carousel.is_settled());

        let rest = carousel.finish_scroll();
        assert_eq!(rest, 120.0);
        assert_eq!(carousel.phase(), ScrollPhase::Idle);
        assert!(carousel.is_settled());
    }

    #[test]
    fn reconfigure_reports_and_applies_the_invalidation_tier() {
        let mut carousel = banner_carousel();
        carousel.set_scroll_offset(240.0);
        let before = carousel.layout_pass().to_vec();

        // Same config again: nothing happens.
        let same = *carousel.config();
        assert_eq!(carousel.reconfigure(same), Invalidation::None);

        // Alpha change: positions identical, transforms recomputed.
        let faded = CarouselConfig::builder(20.0)
            .item_scale(0.8)
            .side_alpha(0.2)
            .build();
        assert_eq!(carousel.reconfigure(faded), Invalidation::Transforms);
        let after = carousel.layout_pass().to_vec();
        assert_eq!(before.len(), after.len());
        for (a, b) in before.iter().zip(&after) {
            assert_eq!(a.centered_offset, b.centered_offset);
            assert_eq!(a.scale, b.scale);
        }
        let side = after.iter().find(|item| item.centered_offset == -120.0).unwrap();
        assert_eq!(side.alpha, 0.2);

        // Spacing change: the whole strip moves.
        let respaced = CarouselConfig::builder(40.0)
            .item_scale(0.8)
            .side_alpha(0.2)
            .build();
        assert_eq!(carousel.reconfigure(respaced), Invalidation::Layout);
        assert_eq!(carousel.interval(), 140.0);
        let rebuilt = carousel.layout_pass();
        assert!(rebuilt.iter().any(|item| item.index == 2));
    }

    #[test]
    fn move_speed_reconfigure_touches_only_future_flings() {
        let mut carousel = banner_carousel();
        carousel.set_scroll_offset(240.0);
        let _ = carousel.layout_pass();

        let damped = CarouselConfig::builder(20.0)
            .item_scale(0.8)
            .side_alpha(0.5)
            .move_speed(2.0)
            .build();
        assert_eq!(carousel.reconfigure(damped), Invalidation::None);
        assert_eq!(carousel.distance_ratio(), 0.5);
    }

    #[test]
    fn offset_for_centers_an_index() {
        let carousel = banner_carousel();
        assert_eq!(carousel.offset_for(3), 360.0);
        assert_eq!(carousel.offset_for(99), 480.0);
    }

    #[test]
    fn reverse_layout_flips_pass_offsets() {
        let config = CarouselConfig::builder(20.0).reverse(true).build();
        let mut carousel = Carousel::new(config, 5, 400.0);
        carousel.set_item_extent(100.0);
        carousel.set_scroll_offset(240.0);

        let pass = carousel.layout_pass();
        let next = pass.iter().find(|item| item.index == 3).unwrap();
        // Forward layout would report +120 here.
        assert_eq!(next.centered_offset, -120.0);
    }
}
