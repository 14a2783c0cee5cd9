use approx::assert_abs_diff_eq;
use rstest::*;
use rstest_reuse::{self, *};
use rtc_conv::{ConvType, Plf, conv_at_x};

use all_conv_types::all_conv_types;

use curves::*;

fn scalar(a: &Plf, b: &Plf, delta: f64, conv_type: ConvType) -> f64 {
    conv_at_x(a, b, delta, conv_type).result.unwrap().y
}

#[rstest]
#[case(0.0, 2.0)]
#[case(0.5, 2.0)]
#[case(1.0, 2.0)]
#[case(1.5, 2.25)]
#[case(2.0, 2.5)]
#[case(2.5, 2.75)]
#[case(3.0, 3.0)]
fn min_plus_conv_ramp(ramp: Plf, stairs: Plf, #[case] delta: f64, #[case] expected: f64) {
    assert_eq!(
        scalar(&ramp, &stairs, delta, ConvType::MinPlusConv),
        expected
    );
}

#[rstest]
#[case(0.0, 2.0)]
#[case(0.5, 2.25)]
#[case(1.0, 2.5)]
#[case(1.5, 2.75)]
#[case(2.0, 3.0)]
#[case(2.5, 3.25)]
#[case(3.0, 3.5)]
fn max_plus_conv_ramp(ramp: Plf, stairs: Plf, #[case] delta: f64, #[case] expected: f64) {
    assert_eq!(
        scalar(&ramp, &stairs, delta, ConvType::MaxPlusConv),
        expected
    );
}

// Convex functions through the origin: the result chains their segments in
// order of increasing slope.
#[rstest]
#[case::first_b(0.0, 0.0)]
#[case::first_b(1.0, 0.25)]
#[case::first_b(2.0, 0.5)]
#[case::first_b(4.0, 1.0)]
#[case::first_a(5.0, 1.4)]
#[case::first_a(6.0, 1.8)]
#[case::first_a(6.5, 2.0)]
#[case::second_b(7.5, 2.0 + 9.0 / 7.0)]
#[case::second_b(8.5, 2.0 + 2.0 * (9.0 / 7.0))]
#[case::second_b(10.0, 2.0 + 3.5 * (9.0 / 7.0))]
#[case::second_a(11.0, 2.0 + 3.5 * (9.0 / 7.0) + 9.0 / 5.0)]
#[case::second_a(12.0, 2.0 + 3.5 * (9.0 / 7.0) + 2.0 * (9.0 / 5.0))]
#[case::second_a(12.5, 2.0 + 3.5 * (9.0 / 7.0) + 2.5 * (9.0 / 5.0))]
fn min_plus_conv_convex(convex_pair: (Plf, Plf), #[case] delta: f64, #[case] expected: f64) {
    let (a, b) = convex_pair;
    assert_abs_diff_eq!(
        scalar(&a, &b, delta, ConvType::MinPlusConv),
        expected,
        epsilon = 1e-12
    );
}

#[rstest]
#[case(0.0, 2.0)]
#[case(0.125, 2.125)]
#[case(0.25, 2.25)]
#[case(0.5, 2.0)]
#[case(1.0, 1.5)]
#[case(1.25, 1.5)]
#[case(1.5, 1.5)]
#[case(1.75, 1.25)]
#[case(2.0, 1.0)]
fn min_plus_conv_with_jump(
    jump_start: Plf,
    zigzag: Plf,
    #[case] delta: f64,
    #[case] expected: f64,
) {
    assert_eq!(
        scalar(&jump_start, &zigzag, delta, ConvType::MinPlusConv),
        expected
    );
}

#[rstest]
#[case(0.0, 2.25)]
#[case(1.0, 2.5)]
#[case(2.0, 2.75)]
#[case(3.0, 3.0)]
fn min_plus_deconv_ramp(long_ramp: Plf, stairs: Plf, #[case] delta: f64, #[case] expected: f64) {
    assert_eq!(
        scalar(&long_ramp, &stairs, delta, ConvType::MinPlusDeconv),
        expected
    );
}

#[rstest]
#[case(0.0, 1.0)]
#[case(1.0, 1.25)]
#[case(2.0, 1.5)]
#[case(3.0, 1.75)]
fn max_plus_deconv_ramp(long_ramp: Plf, stairs: Plf, #[case] delta: f64, #[case] expected: f64) {
    assert_eq!(
        scalar(&long_ramp, &stairs, delta, ConvType::MaxPlusDeconv),
        expected
    );
}

#[rstest]
#[case(0.0, 0.0)]
#[case(3.9, 3.9)]
#[case(4.0, 4.0)]
#[case(4.1, 4.0)]
#[case(15.0, 4.0)]
fn max_plus_deconv_sawtooth(sawtooth: Plf, #[case] delta: f64, #[case] expected: f64) {
    let zero = plf(&[(0.0, 0.0), (15.0, 0.0)]);
    assert_eq!(
        scalar(&sawtooth, &zero, delta, ConvType::MaxPlusDeconv),
        expected
    );
}

#[rstest]
fn convolution_intermediates(ramp: Plf, stairs: Plf) {
    let at = conv_at_x(&ramp, &stairs, 1.5, ConvType::MinPlusConv);
    assert_eq!(at.transformed_a, plf(&[(-3.5, 4.5), (1.5, 2.0)]));
    assert_eq!((at.sum.x_start(), at.sum.x_end()), (0.0, 1.5));
    assert_eq!(at.result, at.sum.min());
}

#[rstest]
fn deconvolution_intermediates(long_ramp: Plf, stairs: Plf) {
    let at = conv_at_x(&long_ramp, &stairs, 2.0, ConvType::MinPlusDeconv);
    assert_eq!(at.transformed_a, plf(&[(-2.0, 2.0), (10.0, 5.0)]));
    // only bounded by the common domain, not by the offset
    assert_eq!((at.sum.x_start(), at.sum.x_end()), (0.0, 5.0));
    assert_eq!(at.result, at.sum.max());
}

#[apply(all_conv_types)]
#[rstest]
fn result_is_extremum_of_sum(ramp: Plf, stairs: Plf, conv_type: ConvType) {
    for delta in [0.0, 0.75, 1.5, 2.25, 3.0] {
        let at = conv_at_x(&ramp, &stairs, delta, conv_type);
        let extremum = if conv_type.computes_min() {
            at.sum.min()
        } else {
            at.sum.max()
        };
        assert_eq!(at.result, extremum);
        assert!(at.sum.x_start() >= 0.0);
    }
}

#[apply(all_conv_types)]
#[rstest]
fn empty_operand_has_no_result(ramp: Plf, conv_type: ConvType) {
    for (a, b) in [(Plf::empty(), ramp.clone()), (ramp.clone(), Plf::empty())] {
        let at = conv_at_x(&a, &b, 1.0, conv_type);
        assert!(at.sum.is_empty());
        assert_eq!(at.result, None);
    }
}

#[apply(all_conv_types)]
#[rstest]
fn independent_calls(ramp: Plf, stairs: Plf, conv_type: ConvType) {
    let first = conv_at_x(&ramp, &stairs, 1.25, conv_type);
    conv_at_x(&stairs, &ramp, 4.0, conv_type);
    assert_eq!(conv_at_x(&ramp, &stairs, 1.25, conv_type), first);
}
