use lazy_viewport::core::{Throttle, Timestamp};

fn at(millis: u64) -> Timestamp {
    Timestamp::from_millis(millis)
}

/// Feeds calls in time order, firing due trailing calls at their deadline
/// first, and returns `(run_time, args)` for every execution.
fn drive(window_ms: u64, calls: &[(u64, u32)]) -> Vec<(u64, u32)> {
    let mut throttle = Throttle::new(window_ms);
    let mut runs = Vec::new();
    for &(time, args) in calls {
        while let Some(due) = throttle.next_deadline() {
            if due > at(time) {
                break;
            }
            if let Some(fired) = throttle.poll(due) {
                runs.push((due.as_millis(), fired));
            }
        }
        if let Some(immediate) = throttle.call(at(time), args) {
            runs.push((time, immediate));
        }
    }
    if let Some(due) = throttle.next_deadline() {
        if let Some(fired) = throttle.poll(due) {
            runs.push((due.as_millis(), fired));
        }
    }
    runs
}

#[test]
fn isolated_calls_each_run_immediately() {
    let runs = drive(30, &[(0, 1), (40, 2), (100, 3)]);
    assert_eq!(runs, vec![(0, 1), (40, 2), (100, 3)]);
}

#[test]
fn burst_runs_leading_and_trailing_with_latest_args() {
    let runs = drive(30, &[(0, 1), (5, 2), (10, 3), (25, 4)]);
    assert_eq!(runs, vec![(0, 1), (35, 4)]);
}

#[test]
fn continuous_stream_runs_about_once_per_window() {
    let calls: Vec<(u64, u32)> = (0..=20).map(|step| (step * 10, step as u32)).collect();
    let runs = drive(60, &calls);

    assert_eq!(runs.first(), Some(&(0, 0)));
    assert_eq!(runs.last().map(|run| run.1), Some(20));
    assert!(runs.windows(2).all(|pair| pair[1].0 - pair[0].0 >= 60));
    assert!(runs.len() <= 200_usize.div_ceil(60) + 1);
}

#[test]
fn sweep_and_geometry_windows_are_independent() {
    let mut sweep = Throttle::new(30);
    let mut geometry = Throttle::new(60);

    assert!(sweep.call(at(0), ()).is_some());
    assert!(geometry.call(at(0), ()).is_some());

    assert!(sweep.call(at(35), ()).is_some());
    assert!(geometry.call(at(35), ()).is_none());
    assert_eq!(geometry.next_deadline(), Some(at(95)));
}

#[test]
fn clock_going_backwards_runs_immediately() {
    let mut throttle = Throttle::new(30);
    assert!(throttle.call(at(100), ()).is_some());
    assert!(throttle.call(at(50), ()).is_some());
    assert_eq!(throttle.last_run(), Some(at(50)));
}
