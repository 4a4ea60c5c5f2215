//! Where new medals appear
//!
//! The initial pile is scattered around a spawn point on the playfield; every
//! later medal drops into the slot above the pusher at a random x.

use crate::core::random::{random_number, RandomSource};
use crate::core::vec3::Vec3;
use crate::domain::medal::{MedalId, Placement};
use crate::domain::settings::{PusherConfig, Span};

#[inline]
fn sample<R: RandomSource + ?Sized>(rng: &mut R, span: Span) -> f32 {
    random_number(rng, span.min, span.max)
}

/// Placement for one medal of the initial pile. Axes are drawn independently.
pub fn initial_placement<R: RandomSource + ?Sized>(
    config: &PusherConfig,
    rng: &mut R,
    id: MedalId,
) -> Placement {
    let offset = Vec3::new(
        sample(rng, config.initial_jitter_x),
        sample(rng, config.initial_jitter_y),
        sample(rng, config.initial_jitter_z),
    );
    Placement {
        id,
        position: config.initial_spawn_point + offset,
        tilt_x: 0.0,
    }
}

/// Placement for a medal dropped by the spawn timer
pub fn drop_placement<R: RandomSource + ?Sized>(
    config: &PusherConfig,
    rng: &mut R,
    id: MedalId,
) -> Placement {
    Placement {
        id,
        position: Vec3::new(sample(rng, config.drop_span_x), config.drop_height, config.drop_depth),
        tilt_x: config.drop_tilt_x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::Xorshift32;

    #[test]
    fn initial_pile_stays_inside_jitter_box() {
        let config = PusherConfig::default();
        let mut rng = Xorshift32::new(11);
        let origin = config.initial_spawn_point;
        for i in 0..500 {
            let p = initial_placement(&config, &mut rng, MedalId(i));
            let d = p.position - origin;
            assert!(d.x >= -0.03 - 1e-6 && d.x <= 0.03 + 1e-6);
            assert!(d.y >= -0.008 - 1e-6 && d.y <= 0.012 + 1e-6);
            assert!(d.z >= -0.03 - 1e-6 && d.z <= 0.03 + 1e-6);
            assert_eq!(p.tilt_x, 0.0);
        }
    }

    #[test]
    fn drops_share_height_and_depth() {
        let config = PusherConfig::default();
        let mut rng = Xorshift32::new(12);
        for i in 0..100 {
            let p = drop_placement(&config, &mut rng, MedalId(i));
            assert_eq!(p.position.y, 0.22);
            assert_eq!(p.position.z, 0.05);
            assert!(p.position.x >= -0.03 && p.position.x <= 0.03);
            assert_eq!(p.tilt_x, std::f32::consts::FRAC_PI_2);
        }
    }

    #[test]
    fn fixed_spans_give_exact_positions() {
        let config = PusherConfig {
            initial_jitter_x: Span::fixed(0.0),
            initial_jitter_y: Span::fixed(0.0),
            initial_jitter_z: Span::fixed(0.0),
            ..PusherConfig::default()
        };
        let mut rng = Xorshift32::new(13);
        let p = initial_placement(&config, &mut rng, MedalId(0));
        assert_eq!(p.position, config.initial_spawn_point);
    }
}
