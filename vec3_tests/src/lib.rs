//! Shared helpers for the integration tests.

use std::sync::Once;

use vec3::Vec3;

/// Vectors with a mix of signs, magnitudes and exactly representable parts.
pub const SAMPLES: [Vec3<f64>; 6] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 2.0, 3.0),
    Vec3::new(-1.5, 0.25, 8.0),
    Vec3::new(1e-3, -4e5, 0.1),
    Vec3::new(-7.0, -7.0, -7.0),
    Vec3::new(123.456, 1e-12, -9.75),
];

/// Installs a test-friendly tracing subscriber once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// Asserts `a` and `b` agree to a relative tolerance of `rel`.
#[track_caller]
pub fn assert_close(a: f64, b: f64, rel: f64) {
    let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
    assert!(
        (a - b).abs() / scale <= rel,
        "{} and {} differ by more than {} (relative)",
        a,
        b,
        rel
    );
}

/// Component-wise [`assert_close`].
#[track_caller]
pub fn assert_vec_close(a: Vec3<f64>, b: Vec3<f64>, rel: f64) {
    assert_close(a.x(), b.x(), rel);
    assert_close(a.y(), b.y(), rel);
    assert_close(a.z(), b.z(), rel);
}
