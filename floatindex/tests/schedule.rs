use floatindex::Coalescer;

#[test]
fn test_schedule_reports_newly_scheduled() {
    let mut c = Coalescer::new();
    assert!(!c.is_pending());
    assert!(c.schedule(), "first schedule is new");
    assert!(!c.schedule(), "repeat schedules coalesce");
    assert!(c.is_pending());
}

#[test]
fn test_take_drains_the_pending_run() {
    let mut c = Coalescer::new();
    c.schedule();
    c.schedule();
    assert!(c.take(), "one run was due");
    assert!(!c.take(), "burst collapsed to a single run");
    assert!(!c.is_pending());
}

#[test]
fn test_reschedule_after_take() {
    let mut c = Coalescer::new();
    c.schedule();
    assert!(c.take());
    assert!(c.schedule(), "fresh schedule after a drain is new again");
    assert!(c.take());
}
