use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use jarvis::{Event, EventBus, EventKind};

#[test]
fn delivery_follows_registration_order() {
    let bus = EventBus::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    for i in 0..3 {
        let log = Arc::clone(&log);
        bus.subscribe(EventKind::UserPresent, move |_| {
            log.lock().unwrap().push(i);
            Ok(())
        });
    }

    bus.publish(&Event::UserPresent);
    assert_eq!(*log.lock().unwrap(), vec![0, 1, 2]);
}

#[test]
fn subscribers_only_see_their_kind() {
    let bus = EventBus::new();
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&hits);
    bus.subscribe(EventKind::UserLeft, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    bus.publish(&Event::UserPresent);
    bus.publish(&Event::command("hello"));
    assert_eq!(hits.load(Ordering::SeqCst), 0, "wrong-kind events must not be delivered");

    bus.publish(&Event::UserLeft);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn failing_subscriber_does_not_block_the_rest() {
    let bus = EventBus::new();
    let hits = Arc::new(AtomicUsize::new(0));

    bus.subscribe(EventKind::UserCommand, |_| Err(anyhow::anyhow!("sensor wiring fault")));

    let counter = Arc::clone(&hits);
    bus.subscribe(EventKind::UserCommand, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    // The publish itself must not surface the error either.
    bus.publish(&Event::command("status"));
    assert_eq!(hits.load(Ordering::SeqCst), 1, "later subscribers must still run");
}

#[test]
fn subscription_during_publish_only_affects_later_publishes() {
    let bus = Arc::new(EventBus::new());
    let late_hits = Arc::new(AtomicUsize::new(0));
    let registered = Arc::new(AtomicBool::new(false));

    let bus_handle = Arc::clone(&bus);
    let hits_handle = Arc::clone(&late_hits);
    bus.subscribe(EventKind::UserLeft, move |_| {
        if !registered.swap(true, Ordering::SeqCst) {
            let hits = Arc::clone(&hits_handle);
            bus_handle.subscribe(EventKind::UserLeft, move |_| {
                hits.fetch_add(1, Ordering::SeqCst);
                Ok(())
            });
        }
        Ok(())
    });

    bus.publish(&Event::UserLeft);
    assert_eq!(
        late_hits.load(Ordering::SeqCst),
        0,
        "a subscriber added mid-publish must not see the triggering event"
    );

    bus.publish(&Event::UserLeft);
    assert_eq!(late_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn subscriber_count_tracks_per_kind() {
    let bus = EventBus::new();
    assert_eq!(bus.subscriber_count(EventKind::AppSwitched), 0);

    bus.subscribe(EventKind::AppSwitched, |_| Ok(()));
    bus.subscribe(EventKind::AppSwitched, |_| Ok(()));
    bus.subscribe(EventKind::UserPresent, |_| Ok(()));

    assert_eq!(bus.subscriber_count(EventKind::AppSwitched), 2);
    assert_eq!(bus.subscriber_count(EventKind::UserPresent), 1);
    assert_eq!(bus.subscriber_count(EventKind::JarvisSpeaking), 0);
}
