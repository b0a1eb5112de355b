// Copyright 2026 the Carousel Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transform engine: distance-driven scale, alpha, and the fling
//! distance ratio.

use crate::{CarouselConfig, Scalar};

/// Visual transform applied to one item: uniform scale plus opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState<S: Scalar> {
    /// Uniform scale factor, `1.0` at the viewport center.
    pub scale: S,
    /// Opacity, `center_alpha` at the viewport center.
    pub alpha: S,
}

/// Scale at a given centered offset.
///
/// Linear from `1.0` at the center down to the configured item scale at one
/// full *item extent* of displacement, then saturated: the shrink never
/// continues past one item's width of travel. An unmeasured item
/// (`item_extent <= 0`) keeps scale `1.0`.
#[must_use]
pub fn scale_at<S: Scalar>(config: &CarouselConfig<S>, item_extent: S, centered_offset: S) -> S {
    if item_extent <= S::zero() {
        return S::one();
    }
    let delta = centered_offset.abs().min(item_extent);
    S::one() - delta / item_extent * (S::one() - config.item_scale())
}

/// Alpha at a given centered offset.
///
/// Linear from `center_alpha` at the center to `side_alpha` at one full
/// *interval* of displacement, pinned exactly to `side_alpha` beyond that.
/// The saturation distance is deliberately the interval (item plus spacing),
/// not the bare item extent as for scale: spacing is part of how quickly
/// side items finish fading.
#[must_use]
pub fn alpha_at<S: Scalar>(config: &CarouselConfig<S>, interval: S, centered_offset: S) -> S {
    let offset = centered_offset.abs();
    if interval <= S::zero() || offset >= interval {
        return config.side_alpha();
    }
    (config.side_alpha() - config.center_alpha()) / interval * offset + config.center_alpha()
}

/// Both transforms for one item.
#[must_use]
pub fn visual_state<S: Scalar>(
    config: &CarouselConfig<S>,
    item_extent: S,
    interval: S,
    centered_offset: S,
) -> VisualState<S> {
    VisualState {
        scale: scale_at(config, item_extent, centered_offset),
        alpha: alpha_at(config, interval, centered_offset),
    }
}

/// Multiplier converting fling velocity into extra scroll distance before
/// snapping.
///
/// The inverse of the configured move speed, so a larger speed damps flings
/// into shorter travel. A move speed of zero yields positive infinity: the
/// "disable distance scaling, snap immediately" sentinel.
#[must_use]
pub fn distance_ratio<S: Scalar>(config: &CarouselConfig<S>) -> S {
    if config.move_speed() == S::zero() {
        S::infinity()
    } else {
        S::one() / config.move_speed()
    }
}
