use std::time::Duration;
use std::time::Instant;

use super::SessionClock;

#[test]
fn it_flushes_whole_seconds_and_moves_the_marker() {
    let start = Instant::now();
    let mut clock = SessionClock::new(start);

    assert_eq!(clock.flush(start + Duration::from_millis(125_000)), 125);
    // The marker moved, so a second flush at the same instant yields nothing.
    assert_eq!(clock.flush(start + Duration::from_millis(125_000)), 0);
}

#[test]
fn it_floors_sub_second_ticks_to_zero() {
    let start = Instant::now();
    let mut clock = SessionClock::new(start);

    assert_eq!(clock.flush(start + Duration::from_millis(999)), 0);
    // The marker still moved, the next flush counts from the sub-second tick.
    assert_eq!(clock.flush(start + Duration::from_millis(2_999)), 2);
}
