pub type Mat2 = nalgebra::Matrix2<f32>;
pub type Vec2 = nalgebra::Vector2<f32>;

/// The imaginary part of the swirl matrix's eigenvalues, sqrt(3)/2.
pub const SWIRL_FREQUENCY: f32 = 0.866_025_4;

/// Below this frequency sin(w t)/w is replaced by its limit, t.
const FREQUENCY_EPSILON: f32 = 1e-8;

/// The generator of the swirl, A = [[-1, -1], [1, 0]].
///
/// Both eigenvalues are -1/2 ± i·sqrt(3)/2, so solutions of dv/dt = A·v
/// rotate while their magnitude decays like e^{-t/2}.
pub fn swirl_generator() -> Mat2 {
    Mat2::new(
        -1.0, -1.0, //
        1.0, 0.0,
    )
}

/// Compute sin(w t) / w, falling back to t when w is too small to divide
/// by.
pub fn scaled_sine(w: f32, t: f32) -> f32 {
    if w.abs() < FREQUENCY_EPSILON {
        t
    } else {
        (w * t).sin() / w
    }
}

/// The closed form matrix exponential exp(A·t) for the swirl generator.
///
/// A has trace -1 and determinant 1, so
///
///   exp(A·t) = e^{-t/2} · [cos(w t)·I + (sin(w t)/w)·(A + I/2)]
///
/// with w = sqrt(3)/2. No numerical integration is involved and nothing is
/// allocated, so this is safe to call for every particle on every frame.
pub fn swirl_exp(t: f32) -> Mat2 {
    let decay = (-0.5 * t).exp();
    let c = (SWIRL_FREQUENCY * t).cos();
    let k = scaled_sine(SWIRL_FREQUENCY, t);

    // B = A + I/2 = [[-1/2, -1], [1, 1/2]]
    let (b00, b01, b10, b11) = (-0.5, -1.0, 1.0, 0.5);

    Mat2::new(
        decay * (c + k * b00),
        decay * (k * b01),
        decay * (k * b10),
        decay * (c + k * b11),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn determinant_matches_exp_of_trace() {
        let trace = swirl_generator().trace();
        for &t in &[0.0, 0.1, 0.5, 1.0, 2.5, 4.0, 7.5, 12.0] {
            let m = swirl_exp(t);
            assert_close(m.determinant(), (trace * t).exp());
            assert_close(m.determinant(), (-t).exp());
        }
    }

    #[test]
    fn exp_at_zero_is_identity() {
        let m = swirl_exp(0.0);
        assert_close(m[(0, 0)], 1.0);
        assert_close(m[(0, 1)], 0.0);
        assert_close(m[(1, 0)], 0.0);
        assert_close(m[(1, 1)], 1.0);

        let offset = Vec2::new(3.5, -7.25);
        let moved = m * offset;
        assert_close(moved.x, offset.x);
        assert_close(moved.y, offset.y);
    }

    #[test]
    fn exp_solves_the_swirl_ode() {
        // d/dt exp(A t) = A exp(A t), checked with a central difference.
        let h = 1e-3;
        for &t in &[0.25, 1.0, 3.0] {
            let derivative = (swirl_exp(t + h) - swirl_exp(t - h)) / (2.0 * h);
            let expected = swirl_generator() * swirl_exp(t);
            for (d, e) in derivative.iter().zip(expected.iter()) {
                assert!((d - e).abs() < 1e-2, "{} != {}", d, e);
            }
        }
    }

    #[test]
    fn swirl_decays_toward_the_origin() {
        let offset = Vec2::new(10.0, 4.0);
        let start = offset.norm();
        let samples: Vec<f32> = [5.0, 10.0, 20.0, 40.0]
            .iter()
            .map(|&t| (swirl_exp(t) * offset).norm())
            .collect();

        for magnitude in &samples {
            assert!(*magnitude < start);
        }
        for pair in samples.windows(2) {
            assert!(pair[1] < pair[0], "{:?}", samples);
        }
        assert!(samples[3] < 1e-6);
    }

    #[test]
    fn scaled_sine_handles_zero_frequency() {
        assert_eq!(scaled_sine(0.0, 2.0), 2.0);
        assert_eq!(scaled_sine(1e-10, 3.0), 3.0);
        assert_close(scaled_sine(1.0, 0.5), 0.5_f32.sin());
        assert_close(scaled_sine(SWIRL_FREQUENCY, 0.0), 0.0);
    }
}
