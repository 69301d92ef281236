//! Property tests for the particle field.

use proptest::prelude::*;

use folio::particles::{wrap, FieldParams, ParticleField};

fn params(count: usize, strength: f64) -> FieldParams {
    FieldParams {
        count,
        radius: 150.0,
        strength,
        smoothing: 0.1,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Particles never leave the field, whatever the pointer does.
    #[test]
    fn property_particles_stay_in_bounds(
        width in 1.0f64..2000.0,
        height in 1.0f64..1200.0,
        strength in -0.2f64..0.2,
        seed in any::<u64>(),
        moves in proptest::collection::vec((-500.0f64..2500.0, -500.0f64..1700.0, 0.0f64..0.2), 1..30),
    ) {
        let mut field = ParticleField::new(params(50, strength), width, height, Some(seed));
        for (x, y, dt) in moves {
            field.set_pointer(x, y);
            field.step(dt);
            for p in field.particles() {
                prop_assert!(p.x >= 0.0 && p.x < width, "x {} outside 0..{}", p.x, width);
                prop_assert!(p.y >= 0.0 && p.y < height, "y {} outside 0..{}", p.y, height);
            }
        }
    }

    /// PROPERTY: A seeded field is reproducible step for step.
    #[test]
    fn property_seeded_field_is_deterministic(
        seed in any::<u64>(),
        steps in proptest::collection::vec(0.0f64..0.1, 0..20),
    ) {
        let mut a = ParticleField::new(params(30, 0.05), 800.0, 600.0, Some(seed));
        let mut b = ParticleField::new(params(30, 0.05), 800.0, 600.0, Some(seed));
        a.set_pointer(100.0, 100.0);
        b.set_pointer(100.0, 100.0);
        for dt in steps {
            a.step(dt);
            b.step(dt);
        }
        prop_assert_eq!(a.particles(), b.particles());
    }

    /// PROPERTY: wrap lands in 0..len for any finite input.
    #[test]
    fn property_wrap_in_range(v in -1.0e6f64..1.0e6, len in 0.5f64..5000.0) {
        let w = wrap(v, len);
        prop_assert!((0.0..len).contains(&w));
    }
}
