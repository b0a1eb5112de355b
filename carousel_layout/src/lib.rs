// Copyright 2026 the Carousel Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=carousel_layout --heading-base-level=0

//! Carousel Layout: renderer-agnostic center-scaling carousel primitives.
//!
//! This crate provides the geometry and animation-curve core behind a
//! "banner" carousel: a strip of uniform items scrolling along one axis that
//! always comes to rest with one item centered, scaling and fading items by
//! their distance from the viewport center. It is intended to be shared
//! across UI stacks; hosts own gesture recognition, view recycling, and the
//! settle animation itself.
//!
//! The core concepts are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` used for extents,
//!   offsets, and scroll positions.
//! - [`AxisModel`]: pure strip math — item pitch (the *interval*), signed
//!   *centered offsets* relative to the viewport center, and the
//!   [`VisibleWindow`] of indices worth laying out.
//! - [`scale_at`] / [`alpha_at`] / [`distance_ratio`]: the transform engine
//!   mapping a centered offset to a [`VisualState`] and converting fling
//!   velocity into settle distance.
//! - [`CarouselConfig`]: an immutable configuration value built via
//!   [`CarouselConfig::builder`]; [`CarouselConfig::diff`] reports the
//!   [`Invalidation`] tier of any change instead of implicitly rebuilding.
//! - [`Carousel`]: a small controller owning configuration, axis model, and
//!   scroll state, caching the most recent layout pass and exposing snap and
//!   fling-settle targets.
//!
//! Host frameworks are responsible for:
//!
//! - Feeding in the measured item extent and viewport extent.
//! - Driving [`Carousel::set_scroll_offset`] per frame or gesture event.
//! - Applying each returned [`ItemLayout`]'s position, scale, and alpha to
//!   the item's on-screen representation.
//! - Animating toward [`Carousel::settle_target`] on gesture release.
//!
//! ## Minimal example
//!
//! ```rust
//! use carousel_layout::{Carousel, CarouselConfig};
//!
//! // 20 px between items, shrink to 0.8 and fade to 0.5 at the sides.
//! let config = CarouselConfig::builder(20.0_f32)
//!     .item_scale(0.8)
//!     .side_alpha(0.5)
//!     .build();
//! let mut carousel = Carousel::new(config, 5, 400.0);
//!
//! // The host's measurement pass found each banner to be 100 px wide.
//! carousel.set_item_extent(100.0);
//!
//! // Scroll so item 2 is centered.
//! carousel.set_scroll_offset(2.0 * carousel.interval());
//!
//! for item in carousel.layout_pass() {
//!     // Hosts position each item at viewport center + centered_offset and
//!     // apply scale/alpha to its rendering.
//!     assert!(item.scale <= 1.0 && item.alpha <= 1.0);
//! }
//! ```
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod carousel;
mod config;
mod scalar;
mod transform;

pub use axis::{AxisModel, VisibleWindow};
pub use carousel::{Carousel, ItemLayout, ScrollPhase};
pub use config::{CarouselConfig, CarouselConfigBuilder, Invalidation, Orientation};
pub use scalar::Scalar;
pub use transform::{VisualState, alpha_at, distance_ratio, scale_at, visual_state};
