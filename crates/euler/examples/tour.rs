//! Walks through the vector API and logs the results.
//!
//! Run with `RUST_LOG=tour=trace` to also see the per-component breakdown.

use euler::*;
use log::LevelFilter;

fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .parse_default_env()
        .try_init()
        .ok();
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let mut a = vec3(1.0f32, 3.0, -5.0);
    let mut b = Vec3f::new(6.0, 2.0, -1.0);
    a *= 2.0;
    b /= 0.1;
    log::info!("a = {a}, b = {b}");
    log::info!("a + b = {}, b - a = {}, -b = {}", a + b, b - a, -b);
    log::info!("2 * b = {}", 2.0f32 * b);

    let v = vec4(0.0f32, 0.0, 4.0, 3.0);
    let n = normalize(v);
    log::info!(
        "normalize{v} = {n} (length² {}, max {}, min {})",
        length_square(n),
        max(n),
        min(n)
    );
    for i in 0..4 {
        log::trace!("n[{i}] = {:?}", n[i]);
    }

    // Slices from external sources have to be length-checked.
    let raw = [3, -4, 12];
    let w = Vec3i::try_from(&raw[..])?;
    log::info!("abs{w} = {}, dot(w, w) = {}", abs(w), dot(w, w));

    let bad = Vec4i::try_from(&raw[..]);
    if let Err(e) = &bad {
        log::warn!("rejected input {raw:?}: {e}");
    }

    let mut u = Vec2u::splat(7);
    u.set_x(21).set_const::<1>(14);
    log::debug!("u = {u:?}, u / 7 = {:?}", u / 7);

    Ok(())
}
