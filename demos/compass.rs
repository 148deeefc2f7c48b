// MIT/Apache2 License

//! Steers a compass needle towards a series of headings, always turning the short way around.
//!
//! Run with `RUST_LOG=trace` to see when a turn wraps past north.

use chalkboard_angle::{from_degrees, Angle};

fn main() {
    env_logger::init();

    let mut needle: Angle<f64> = Angle::zero();
    let headings = [45.0, 350.0, -90.0, 180.0, 725.0, 10.0];

    for &heading in &headings {
        let target = from_degrees(heading).normalize();
        let turn = needle.distance(target);

        log::info!(
            "heading {:>6.1} deg: normalized to {:>5.1} deg, turning {:>+6.1} deg",
            heading,
            target.degrees(),
            turn.degrees()
        );

        needle = (needle + turn).normalize();
    }

    log::info!("needle ends at {:.1} deg ({:.4})", needle.degrees(), needle);
}
