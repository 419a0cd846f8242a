use crate::sim::SimTime;

#[test]
fn sim_time_unit_conversions() {
    assert_eq!(SimTime::from_micros(1), SimTime(1_000));
    assert_eq!(SimTime::from_millis(1), SimTime(1_000_000));
    assert_eq!(SimTime::from_secs(1), SimTime(1_000_000_000));
}

#[test]
fn sim_time_unit_conversions_saturate_on_overflow() {
    assert_eq!(SimTime::from_micros(u64::MAX), SimTime(u64::MAX));
    assert_eq!(SimTime::from_millis(u64::MAX), SimTime(u64::MAX));
    assert_eq!(SimTime::from_secs(u64::MAX), SimTime(u64::MAX));
}

#[test]
fn sim_time_from_secs_f64() {
    assert_eq!(SimTime::from_secs_f64(1.0), SimTime(1_000_000_000));
    assert_eq!(SimTime::from_secs_f64(0.01), SimTime(10_000_000));
    assert_eq!(SimTime::from_secs_f64(0.0), SimTime::ZERO);
    assert_eq!(SimTime::from_secs_f64(-3.5), SimTime::ZERO);
    assert_eq!(SimTime::from_secs_f64(f64::NAN), SimTime::ZERO);
}

#[test]
fn sim_time_as_secs_f64_round_trips_whole_seconds() {
    assert_eq!(SimTime::from_secs(40).as_secs_f64(), 40.0);
    assert_eq!(SimTime::ZERO.as_secs_f64(), 0.0);
}
