use super::{DialController, DialSurface, FrameFlag, FrameScheduler};

#[derive(Default)]
struct RecordingScheduler {
    schedules: usize,
    cancels: usize,
}

impl FrameScheduler for RecordingScheduler {
    fn schedule_once(&mut self) {
        self.schedules += 1;
    }

    fn cancel(&mut self) {
        self.cancels += 1;
    }
}

#[derive(Default)]
struct CountingDial {
    writes: usize,
    angle: f64,
}

impl DialSurface for CountingDial {
    fn set_rotation(&mut self, degrees: f64) {
        self.writes += 1;
        self.angle = degrees;
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_burst_coalesces_to_one_mutation() {
    let mut controller = DialController::new(360.0);
    let mut scheduler = RecordingScheduler::default();
    let mut dial = CountingDial::default();

    // Fifty scroll events inside one frame.
    for i in 0..50 {
        controller.on_progress(f64::from(i) / 49.0, &mut scheduler);
    }
    assert_eq!(scheduler.schedules, 1, "only one frame may be queued");

    controller.on_frame(&mut dial);
    assert_eq!(dial.writes, 1, "exactly one mutation per frame");
    assert!(approx(dial.angle, 360.0), "the last value wins");
}

#[test]
fn test_angle_is_pure_function_of_progress() {
    let mut controller = DialController::new(360.0);
    let mut scheduler = RecordingScheduler::default();
    let mut dial = CountingDial::default();

    controller.on_progress(0.25, &mut scheduler);
    controller.on_frame(&mut dial);
    assert!(approx(dial.angle, 90.0));
}

#[test]
fn test_overscroll_is_clamped() {
    let mut controller = DialController::new(360.0);
    let mut scheduler = RecordingScheduler::default();
    let mut dial = CountingDial::default();

    controller.on_progress(1.5, &mut scheduler);
    controller.on_frame(&mut dial);
    assert!(approx(dial.angle, 360.0));

    controller.on_progress(-0.2, &mut scheduler);
    controller.on_frame(&mut dial);
    assert!(approx(dial.angle, 0.0));
}

#[test]
fn test_frame_without_pending_does_nothing() {
    let mut controller = DialController::new(360.0);
    let mut dial = CountingDial::default();
    controller.on_frame(&mut dial);
    assert_eq!(dial.writes, 0);
}

#[test]
fn test_new_progress_after_frame_schedules_again() {
    let mut controller = DialController::new(360.0);
    let mut scheduler = RecordingScheduler::default();
    let mut dial = CountingDial::default();

    controller.on_progress(0.1, &mut scheduler);
    controller.on_frame(&mut dial);
    controller.on_progress(0.2, &mut scheduler);
    assert_eq!(scheduler.schedules, 2);
}

#[test]
fn test_dispose_cancels_and_is_idempotent() {
    let mut controller = DialController::new(360.0);
    let mut scheduler = RecordingScheduler::default();
    let mut dial = CountingDial::default();

    controller.on_progress(0.5, &mut scheduler);
    controller.dispose(&mut scheduler);
    controller.dispose(&mut scheduler);
    assert_eq!(scheduler.cancels, 1, "second dispose must not cancel again");

    controller.on_frame(&mut dial);
    assert_eq!(dial.writes, 0, "disposed controller must not mutate");

    controller.on_progress(0.9, &mut scheduler);
    assert_eq!(scheduler.schedules, 1, "disposed controller must not schedule");
}

#[test]
fn test_frame_flag_consumed_by_tick() {
    let mut flag = FrameFlag::default();
    flag.schedule_once();
    assert!(flag.requested);
    flag.cancel();
    assert!(!flag.requested);
}
