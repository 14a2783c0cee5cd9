use rstest::*;
use rtc_conv::{
    Plf, RtcError, lower_events_out, lower_service_out, upper_events_out, upper_service_out,
};

use curves::*;

/// A service curve serving at rate 1 over the horizon [0, 10]
#[fixture]
fn full_rate() -> Plf {
    plf(&[(0.0, 0.0), (10.0, 10.0)])
}

#[rstest]
#[case(
    &[(0.0, 0.0), (13.0, 13.0), (15.0, 13.0)],
    &[
        (0.0, 0.0),
        (8.0, 0.0),
        (8.0, 1.0),
        (11.0, 1.0),
        (11.0, 3.0),
        (12.0, 3.0),
        (12.0, 4.0),
        (13.0, 4.0),
        (13.0, 6.0),
        (15.0, 6.0),
        (15.0, 9.0),
    ],
    &[(0.0, 0.0), (4.0, 4.0), (15.0, 4.0)],
)]
fn upper_service(
    #[case] upper_service_in: &[(f64, f64)],
    #[case] lower_events_in: &[(f64, f64)],
    #[case] expected: &[(f64, f64)],
) {
    let result = upper_service_out(&plf(upper_service_in), &plf(lower_events_in)).unwrap();
    assert_plf_eq(&result, &plf(expected));
}

#[rstest]
fn lower_service() {
    // latency 2 then rate 1, against a burst of 1 with rate 0.2
    let lower_service_in = plf(&[(0.0, 0.0), (2.0, 0.0), (10.0, 8.0)]);
    let upper_events_in = plf(&[(0.0, 0.0), (0.0, 1.0), (10.0, 3.0)]);
    let result = lower_service_out(&lower_service_in, &upper_events_in).unwrap();
    assert_plf_eq(
        &result,
        &plf(&[(0.0, 0.0), (2.0, 0.0), (3.75, 0.0), (10.0, 5.0)]),
    );
}

#[rstest]
fn upper_events(full_rate: Plf) {
    // a burst of 2 followed by rate 0.2
    let upper_events_in = plf(&[(0.0, 0.0), (0.0, 2.0), (10.0, 4.0)]);
    let result = upper_events_out(&upper_events_in, &full_rate, &full_rate).unwrap();
    assert_plf_eq(
        &result,
        &plf(&[
            (0.0, 1.0),
            (1.0, 1.0),
            (1.0, 2.0),
            (2.0, 2.0),
            (2.0, 3.0),
            (5.0, 3.0),
            (5.0, 4.0),
            (10.0, 4.0),
        ]),
    );
}

#[rstest]
fn lower_events(full_rate: Plf) {
    let lower_events_in = plf(&[(0.0, 0.0), (10.0, 2.0)]);
    let result = lower_events_out(&lower_events_in, &full_rate, &full_rate).unwrap();
    assert_plf_eq(
        &result,
        &plf(&[(0.0, 0.0), (5.0, 0.0), (5.0, 1.0), (10.0, 1.0)]),
    );
}

#[rstest]
fn rejects_offset_start(full_rate: Plf) {
    let shifted = plf(&[(1.0, 0.0), (10.0, 2.0)]);
    assert_eq!(
        upper_service_out(&full_rate, &shifted),
        Err(RtcError::NotAtOrigin(1.0))
    );
    assert_eq!(
        lower_events_out(&shifted, &full_rate, &full_rate),
        Err(RtcError::NotAtOrigin(1.0))
    );
}

#[rstest]
fn rejects_different_horizons(full_rate: Plf) {
    let longer = plf(&[(0.0, 0.0), (12.0, 2.0)]);
    let expected = Err(RtcError::DomainMismatch {
        expected: 10.0,
        found: 12.0,
    });
    assert_eq!(lower_service_out(&full_rate, &longer), expected);
    assert_eq!(upper_events_out(&full_rate, &full_rate, &longer), expected);
}

#[rstest]
fn rejects_empty(full_rate: Plf) {
    assert_eq!(
        upper_service_out(&Plf::empty(), &full_rate),
        Err(RtcError::Empty)
    );
}
