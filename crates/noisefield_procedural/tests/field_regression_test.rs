//! # Field Regression Tests
//!
//! Pins literal output values for both noise kinds and every composition
//! mode, so table or formula drift shows up as a failing number.

use noisefield_procedural::tables::{gradient, permutation, GRADIENT_COUNT};
use noisefield_procedural::{
    compose, CompositionMode, FieldDimensions, LatticeNoise, Noise3D, NoiseKind, ProceduralError,
    ScalarField, SimplexNoise,
};

const TOLERANCE: f32 = 1e-5;

fn assert_close(actual: f32, expected: f32, context: &str) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "{context}: expected {expected}, got {actual}"
    );
}

/// Test: raw noise values at fixed points.
#[test]
fn test_pinned_noise_values() {
    assert_close(LatticeNoise.sample(0.25, 0.5, 0.75), 0.023_200_035, "lattice(0.25, 0.5, 0.75)");
    assert_close(LatticeNoise.sample(1.3, 2.7, 0.4), 0.104_411_27, "lattice(1.3, 2.7, 0.4)");
    assert_close(LatticeNoise.sample(-0.5, 0.25, 0.75), -0.259_884_36, "lattice(-0.5, 0.25, 0.75)");
    assert_close(SimplexNoise.sample(1.3, 2.7, 0.4), 0.223_457_13, "simplex(1.3, 2.7, 0.4)");
    assert_close(SimplexNoise.sample(0.1, 0.2, 0.3), -0.256_390_7, "simplex(0.1, 0.2, 0.3)");
}

/// Test: the weighted octave sum at pixel (0, 0), z = 0 is exactly 0.5.
///
/// Every octave degenerates to `noise(0, 0, 0)`, which is 0 for both kinds.
#[test]
fn test_octave_sum_origin_value() {
    for kind in NoiseKind::ALL {
        let field = ScalarField::evaluate(
            FieldDimensions::DEFAULT,
            kind,
            CompositionMode::OctaveSum,
            0.0,
        );
        assert_eq!(field.get(0, 0), Some(0.5), "{kind} octave sum at origin");
    }
}

/// Test: every mode at three pixels, z = 0.7, 256x256.
#[test]
fn test_pinned_mode_values() {
    let pixels = [(37, 91), (200, 13), (128, 255)];
    let lattice: [[f32; 3]; 11] = [
        [0.655_521_8, 0.316_856_98, 0.626_174_7],
        [0.711_309_2, 0.582_251, 0.539_499_04],
        [0.235_056_76, 0.416_169_2, 0.505_249_26],
        [0.427_653_85, 0.538_827_3, 0.343_166_44],
        [0.610_415_34, 0.373_092_38, 0.572_999_24],
        [0.561_641_8, 0.462_155_1, 0.506_946_27],
        [0.491_213_92, 0.534_933_57, 0.446_18],
        [0.458_951_95, 0.606_553_2, 0.459_364_06],
        [0.972_282_4, 0.284_449_1, 0.002_717_524_8],
        [0.177_017_93, 0.430_172_3, 0.466_032_6],
        [0.508_438_2, 0.174_984_07, 0.999_966_6],
    ];
    let simplex: [[f32; 3]; 11] = [
        [0.512_039_24, 0.546_045_3, 0.091_496_14],
        [0.598_164_26, 0.549_730_5, 0.708_529_2],
        [0.630_798_2, 0.688_598_9, 0.134_966_76],
        [0.250_989_35, 0.365_959_82, 0.587_169_6],
        [0.502_141_5, 0.584_165_1, 0.396_644_9],
        [0.564_545_16, 0.512_987_1, 0.155_682_09],
        [0.407_307_3, 0.454_074_2, 0.914_764_7],
        [0.515_287_5, 0.409_591_65, 0.989_640_8],
        [0.957_921_86, 0.250_901_04, 0.072_075_13],
        [0.230_791_78, 0.449_415_33, 0.441_890_36],
        [0.571_989_5, 0.221_412_69, 0.971_247_4],
    ];

    for (kind, table) in [(NoiseKind::Lattice, &lattice), (NoiseKind::Simplex, &simplex)] {
        for mode in CompositionMode::ALL {
            let expected = &table[usize::from(mode.index())];
            for (&(px, py), &want) in pixels.iter().zip(expected.iter()) {
                let got = compose(mode, &kind, px, py, 0.7, FieldDimensions::DEFAULT);
                assert_close(got, want, &format!("{kind} {mode} at ({px}, {py})"));
            }
        }
    }
}

/// Test: lattice octave-sum field statistics at z = 0.
#[test]
fn test_octave_sum_field_statistics() {
    let field = ScalarField::evaluate(
        FieldDimensions::DEFAULT,
        NoiseKind::Lattice,
        CompositionMode::OctaveSum,
        0.0,
    );
    assert_close(field.min(), 0.274_776_8, "field min");
    assert_close(field.max(), 0.651_625, "field max");
    assert_close(field.mean(), 0.458_907_4, "field mean");
}

/// Test: mode changes never touch the constant tables.
#[test]
fn test_tables_independent_of_mode() {
    let perm_before: Vec<u8> = (0..512).map(permutation).collect();
    let grads_before: Vec<[i8; 3]> = (0..GRADIENT_COUNT).map(gradient).collect();

    for mode in CompositionMode::ALL {
        let _ = ScalarField::evaluate(
            FieldDimensions::new(8, 8).expect("valid dims"),
            NoiseKind::Simplex,
            mode,
            1.0,
        );
    }

    let perm_after: Vec<u8> = (0..512).map(permutation).collect();
    let grads_after: Vec<[i8; 3]> = (0..GRADIENT_COUNT).map(gradient).collect();
    assert_eq!(perm_before, perm_after);
    assert_eq!(grads_before, grads_after);
}

/// Test: selector misuse is reported, not defaulted.
#[test]
fn test_invalid_selectors() {
    assert_eq!(
        CompositionMode::try_from(CompositionMode::COUNT),
        Err(ProceduralError::InvalidMode(11))
    );
    assert!(matches!(
        "fbm".parse::<NoiseKind>(),
        Err(ProceduralError::InvalidNoiseKind(name)) if name == "fbm"
    ));
}

/// Test: evaluation order does not matter.
#[test]
fn test_pixels_independent_of_evaluation_order() {
    let dims = FieldDimensions::new(64, 48).expect("valid dims");
    let field = ScalarField::evaluate(dims, NoiseKind::Simplex, CompositionMode::Ripples, 2.5);

    for y in (0..48).rev() {
        for x in (0..64).rev() {
            let v = compose(CompositionMode::Ripples, &SimplexNoise, x, y, 2.5, dims);
            assert_eq!(field.get(x, y), Some(v));
        }
    }
}
