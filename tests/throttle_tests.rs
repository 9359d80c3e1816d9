// Frame coalescing for scroll/resize bursts.

use folio_core::FrameGate;

#[test]
fn first_request_schedules_the_rest_are_absorbed() {
    let mut gate = FrameGate::new();
    assert!(gate.request());
    for _ in 0..9 {
        assert!(!gate.request());
    }
    assert!(gate.is_pending());
    assert_eq!(gate.begin_frame(), 9);
    assert!(!gate.is_pending());
}

#[test]
fn one_delivery_per_frame_across_bursts() {
    let mut gate = FrameGate::new();
    let mut scheduled = 0;
    let mut delivered = 0;
    for frame in 0..20 {
        // a burst of notifications between frames
        for _ in 0..(frame % 5) {
            if gate.request() {
                scheduled += 1;
            }
        }
        if gate.is_pending() {
            gate.begin_frame();
            delivered += 1;
        }
    }
    assert_eq!(scheduled, delivered);
    assert_eq!(delivered, 16);
}

#[test]
fn notification_after_a_frame_schedules_again() {
    let mut gate = FrameGate::new();
    assert!(gate.request());
    assert_eq!(gate.begin_frame(), 0);
    assert!(gate.request());
}

#[test]
fn cancel_forgets_the_pending_frame() {
    let mut gate = FrameGate::new();
    gate.request();
    gate.request();
    gate.cancel();
    assert!(!gate.is_pending());
    assert!(gate.request());
    assert_eq!(gate.begin_frame(), 0);
}
