//! Benchmark utilities for barra.

use barra_types::Tick;
use chrono::{TimeDelta, TimeZone, Utc};

/// Generates `count` ticks spaced one second apart following a deterministic
/// pseudo-random price walk.
pub fn synthetic_ticks(count: usize) -> Vec<Tick> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut price = 100.0;
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    (0..count)
        .map(|i| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            let step = ((state >> 33) as f64 / f64::from(u32::MAX)) - 0.5;
            price += step * 0.01;
            Tick::new(start + TimeDelta::seconds(i as i64), price)
        })
        .collect()
}
