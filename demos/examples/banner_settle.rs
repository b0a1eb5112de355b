// Copyright 2026 the Carousel Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag, fling, and tween-driven settle over a simulated banner strip.
//!
//! This example plays the host framework's role:
//! - `carousel_layout` computes per-item positions, scales, and alphas,
//! - the host (here: a 60 fps loop) owns the clock and the settle tween.
//!
//! Run:
//! - `cargo run -p carousel_demos --example banner_settle`

use carousel_layout::{Carousel, CarouselConfig, ScrollPhase};

/// Minimal ease-in-out tween the host would normally get from its animation
/// framework.
#[derive(Clone, Copy, Debug)]
struct Tween {
    from: f32,
    to: f32,
    start_ms: u64,
    duration_ms: u64,
}

impl Tween {
    fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
        }
    }

    fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let eased = t * t * (3.0 - 2.0 * t);
        self.from + (self.to - self.from) * eased
    }
}

fn print_pass(carousel: &mut Carousel<f32>) {
    let offset = carousel.scroll_offset();
    let pass: Vec<String> = carousel
        .layout_pass()
        .iter()
        .map(|item| {
            format!(
                "#{} off={:+.0} scale={:.2} alpha={:.2}",
                item.index, item.centered_offset, item.scale, item.alpha
            )
        })
        .collect();
    println!("offset={offset:7.1}  [{}]", pass.join(" | "));
}

fn main() {
    // Five banners, 100 px wide with 20 px spacing, shrinking to 0.8 and
    // fading to 0.5 at the sides. Move speed 0.8 damps flings slightly.
    let config = CarouselConfig::builder(20.0_f32)
        .item_scale(0.8)
        .side_alpha(0.5)
        .move_speed(0.8)
        .build();
    let mut carousel = Carousel::new(config, 5, 360.0);
    carousel.set_item_extent(100.0);

    println!("== at rest, item 0 centered ==");
    print_pass(&mut carousel);

    // A drag moves the offset directly, frame by frame.
    println!("\n== dragging 90 px over 6 frames ==");
    carousel.begin_scroll();
    for _ in 0..6 {
        carousel.scroll_by(15.0);
        print_pass(&mut carousel);
    }

    // On release the drag carries a fling; ask the carousel where to settle
    // and let the tween take the offset there.
    let velocity = 55.0;
    let target = carousel.settle_target(velocity);
    println!(
        "\n== released with velocity {velocity} (distance ratio {:.2}) -> settle at {target} ==",
        carousel.distance_ratio()
    );

    let mut tween = Tween::new(carousel.scroll_offset(), target, 0, 240);
    let mut now_ms = 0_u64;
    while !tween.is_done(now_ms) {
        now_ms += 16;
        carousel.set_scroll_offset(tween.sample(now_ms));
        print_pass(&mut carousel);
    }

    let rest = carousel.finish_scroll();
    assert_eq!(carousel.phase(), ScrollPhase::Idle);
    println!("\n== settled at {rest}, item {} centered ==", carousel.nearest_index());
    print_pass(&mut carousel);
}
