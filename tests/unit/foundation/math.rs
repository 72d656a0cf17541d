use super::*;

#[test]
fn rng_is_deterministic_per_seed() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..16 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
    let mut c = Rng64::new(43);
    assert_ne!(Rng64::new(42).next_u64(), c.next_u64());
}

#[test]
fn range_stays_in_half_open_bounds() {
    let mut rng = Rng64::new(1);
    for _ in 0..1000 {
        let v = rng.range_i64(-3, 3);
        assert!((-3..3).contains(&v));
    }
    assert_eq!(rng.range_i64(5, 5), 5);
}

#[test]
fn gaussian_mean_is_close_to_zero() {
    let mut rng = Rng64::new(9);
    let field = rng.gaussian_field(100, 100, 1.0);
    let mean: f32 = field.iter().sum::<f32>() / field.len() as f32;
    assert!(mean.abs() < 0.05, "mean {mean}");
}

#[test]
fn truncation_clamps_like_integer_pixels() {
    assert_eq!(trunc_u8(-4.0), 0);
    assert_eq!(trunc_u8(12.9), 12);
    assert_eq!(trunc_u8(300.0), 255);
}

#[test]
fn upsample_constant_field_stays_constant() {
    let src = vec![0.5f32; 4 * 3];
    let out = upsample_bilinear(&src, 4, 3, 16, 9);
    assert_eq!(out.len(), 16 * 9);
    assert!(out.iter().all(|v| (v - 0.5).abs() < 1e-6));
}
