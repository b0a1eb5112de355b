// Copyright 2026 the Carousel Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration, its builder, and explicit invalidation tiers.

use crate::Scalar;

/// Scroll axis of the carousel.
///
/// The core math is one-dimensional; this tells the host which viewport
/// dimension is "forward" (feeds the viewport extent and receives item
/// positions) and which is the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Items advance along the horizontal axis.
    #[default]
    Horizontal,
    /// Items advance along the vertical axis.
    Vertical,
}

/// Cost of applying a configuration change, from cheapest to most expensive.
///
/// Returned by [`CarouselConfig::diff`] so the side effect of a mutation is
/// an explicit, testable value rather than an implicit host-framework call.
/// Tiers combine by taking the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Invalidation {
    /// Nothing on screen changes; only future fling/gesture decisions do.
    None,
    /// Per-item scale/alpha must be re-applied; positions are unaffected.
    Transforms,
    /// Every item's position changes; the visible window must be rebuilt.
    Layout,
}

impl Invalidation {
    /// Combines two tiers, keeping the more expensive one.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Ord::max(self, other)
    }
}

/// Immutable configuration of a center-scaling carousel.
///
/// Constructed via [`CarouselConfig::builder`]. Out-of-range alpha inputs are
/// silently clamped into `[0.0, 1.0]`, never rejected; negative spacing and
/// move speed are clamped to zero. A `move_speed` of zero is a valid
/// sentinel meaning "infinite distance ratio" (flings add no travel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig<S: Scalar> {
    orientation: Orientation,
    reverse: bool,
    item_space: S,
    item_scale: S,
    center_alpha: S,
    side_alpha: S,
    move_speed: S,
    max_visible_items: Option<usize>,
    perpendicular_offset: Option<S>,
    swipe_when_single: bool,
}

impl<S: Scalar> CarouselConfig<S> {
    /// Starts building a configuration with the given extra spacing between
    /// items along the scroll axis.
    #[must_use]
    pub fn builder(item_space: S) -> CarouselConfigBuilder<S> {
        CarouselConfigBuilder {
            config: Self {
                orientation: Orientation::default(),
                reverse: false,
                item_space: item_space.max(S::zero()),
                item_scale: S::one(),
                center_alpha: S::one(),
                side_alpha: S::one(),
                move_speed: S::one(),
                max_visible_items: None,
                perpendicular_offset: None,
                swipe_when_single: false,
            },
        }
    }

    /// Scroll axis.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether items are laid out in reverse order along the axis.
    #[must_use]
    pub const fn reverse(&self) -> bool {
        self.reverse
    }

    /// Extra spacing between consecutive items along the scroll axis.
    #[must_use]
    pub const fn item_space(&self) -> S {
        self.item_space
    }

    /// Scale an item reaches once it is a full item extent away from center.
    #[must_use]
    pub const fn item_scale(&self) -> S {
        self.item_scale
    }

    /// Opacity of the item at the viewport center.
    #[must_use]
    pub const fn center_alpha(&self) -> S {
        self.center_alpha
    }

    /// Opacity an item reaches once it is a full interval away from center.
    #[must_use]
    pub const fn side_alpha(&self) -> S {
        self.side_alpha
    }

    /// Fling-speed multiplier. Zero means "infinite distance ratio".
    #[must_use]
    pub const fn move_speed(&self) -> S {
        self.move_speed
    }

    /// Cap on simultaneously laid-out items; `None` derives the window from
    /// the viewport extent.
    #[must_use]
    pub const fn max_visible_items(&self) -> Option<usize> {
        self.max_visible_items
    }

    /// Fixed cross-axis offset for items; `None` centers on the cross axis.
    #[must_use]
    pub const fn perpendicular_offset(&self) -> Option<S> {
        self.perpendicular_offset
    }

    /// Whether a single-item carousel still responds to swipes.
    #[must_use]
    pub const fn swipe_when_single(&self) -> bool {
        self.swipe_when_single
    }

    /// Classifies the change from `self` to `next`.
    ///
    /// Identical configurations yield [`Invalidation::None`], so applying the
    /// same value twice is a detectable no-op. `move_speed` and
    /// `swipe_when_single` never invalidate what is already on screen.
    #[must_use]
    pub fn diff(&self, next: &Self) -> Invalidation {
        let mut tier = Invalidation::None;
        if self.orientation != next.orientation
            || self.reverse != next.reverse
            || self.item_space != next.item_space
            || self.item_scale != next.item_scale
            || self.max_visible_items != next.max_visible_items
            || self.perpendicular_offset != next.perpendicular_offset
        {
            tier = tier.combine(Invalidation::Layout);
        }
        if self.center_alpha != next.center_alpha || self.side_alpha != next.side_alpha {
            tier = tier.combine(Invalidation::Transforms);
        }
        tier
    }
}

/// Builder for [`CarouselConfig`]. All setters clamp rather than fail;
/// `build` is infallible.
#[derive(Debug, Clone, Copy)]
pub struct CarouselConfigBuilder<S: Scalar> {
    config: CarouselConfig<S>,
}

impl<S: Scalar> CarouselConfigBuilder<S> {
    /// Sets the scroll axis. Defaults to [`Orientation::Horizontal`].
    #[must_use]
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.config.orientation = orientation;
        self
    }

    /// Lays items out in reverse order along the axis. Defaults to `false`.
    #[must_use]
    pub fn reverse(mut self, reverse: bool) -> Self {
        self.config.reverse = reverse;
        self
    }

    /// Sets the scale reached at maximum distance. Defaults to `1.0`
    /// (no shrink).
    #[must_use]
    pub fn item_scale(mut self, item_scale: S) -> Self {
        self.config.item_scale = item_scale;
        self
    }

    /// Sets the opacity at the viewport center, clamped into `[0.0, 1.0]`.
    /// Defaults to `1.0`.
    #[must_use]
    pub fn center_alpha(mut self, center_alpha: S) -> Self {
        self.config.center_alpha = center_alpha.max(S::zero()).min(S::one());
        self
    }

    /// Sets the opacity at a full interval of displacement, clamped into
    /// `[0.0, 1.0]`. Defaults to `1.0` (no fade).
    #[must_use]
    pub fn side_alpha(mut self, side_alpha: S) -> Self {
        self.config.side_alpha = side_alpha.max(S::zero()).min(S::one());
        self
    }

    /// Sets the fling-speed multiplier, negative values clamped to the zero
    /// sentinel. Defaults to `1.0`.
    #[must_use]
    pub fn move_speed(mut self, move_speed: S) -> Self {
        self.config.move_speed = move_speed.max(S::zero());
        self
    }

    /// Caps how many items are laid out at once. Defaults to `None`
    /// (derive from the viewport).
    #[must_use]
    pub fn max_visible_items(mut self, count: Option<usize>) -> Self {
        self.config.max_visible_items = count;
        self
    }

    /// Fixes the cross-axis offset of every item. Defaults to `None`
    /// (centered on the cross axis).
    #[must_use]
    pub fn perpendicular_offset(mut self, offset: Option<S>) -> Self {
        self.config.perpendicular_offset = offset;
        self
    }

    /// Keeps swiping enabled when there is only one item. Defaults to
    /// `false`.
    #[must_use]
    pub fn swipe_when_single(mut self, swipe: bool) -> Self {
        self.config.swipe_when_single = swipe;
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> CarouselConfig<S> {
        self.config
    }
}
