//! Property tests: random operation sequences keep triggers and listeners
//! consistent, and deletion order never changes the outcome.

use std::collections::BTreeSet;

use proptest::prelude::*;
use trigger_hub::{EventName, EventTable, Hub, HubConfig, ListenerId, SlotLookup, TriggerId};

type TestHub = Hub<u32, u32>;

const NAMES: [&str; 4] = ["yerf", "murr", "erm.", "fuh!"];
const TRIGGERS: usize = 3;
const LISTENERS: usize = 4;

#[derive(Clone, Debug)]
enum Op {
    Listen(usize, usize, usize),
    Unlisten(usize, usize, usize),
    Fire(usize, usize),
    DeleteTrigger(usize),
    DeleteListener(usize),
    AutoDelete(usize, bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..TRIGGERS, 0..NAMES.len(), 0..LISTENERS).prop_map(|(t, n, l)| Op::Listen(t, n, l)),
        2 => (0..TRIGGERS, 0..NAMES.len(), 0..LISTENERS).prop_map(|(t, n, l)| Op::Unlisten(t, n, l)),
        2 => (0..TRIGGERS, 0..NAMES.len()).prop_map(|(t, n)| Op::Fire(t, n)),
        1 => (0..TRIGGERS).prop_map(Op::DeleteTrigger),
        1 => (0..LISTENERS).prop_map(Op::DeleteListener),
        1 => (0..LISTENERS, any::<bool>()).prop_map(|(l, free)| Op::AutoDelete(l, free)),
    ]
}

/// A listener whose callback checks it is only ever called while alive.
fn checked_listener(hub: &mut TestHub) -> ListenerId {
    hub.new_listener_with(|hub, event| {
        if !event.is_deletion() {
            assert!(
                hub.listener_exists(event.listener),
                "event {} delivered to deleted {}",
                event.name,
                event.listener
            );
        }
    })
}

fn assert_consistent(hub: &TestHub, triggers: &[TriggerId], listeners: &[ListenerId]) {
    for &t in triggers.iter().filter(|&&t| hub.trigger_exists(t)) {
        let watchers = hub.listeners_of(t, EventName::TRIGGER_DELETED);
        for &l in &watchers {
            assert!(hub.listener_exists(l));
            assert!(hub.triggers_of(l).contains(&t));
        }
        for name in hub.event_names(t) {
            let registered = hub.listeners_of(t, name);
            let unique: BTreeSet<_> = registered.iter().collect();
            assert_eq!(unique.len(), registered.len(), "duplicate listener under {name}");
            assert!(registered.iter().all(|l| watchers.contains(l)));
        }
    }
    for &l in listeners.iter().filter(|&&l| hub.listener_exists(l)) {
        for t in hub.triggers_of(l) {
            assert!(hub.trigger_exists(t));
            assert!(hub.is_listening(t, EventName::TRIGGER_DELETED, l));
        }
    }
}

fn run(ops: &[Op]) -> (TestHub, Vec<TriggerId>, Vec<ListenerId>) {
    let mut hub = TestHub::new();
    let triggers: Vec<_> = (0..TRIGGERS).map(|_| hub.new_trigger()).collect();
    let listeners: Vec<_> = (0..LISTENERS).map(|_| checked_listener(&mut hub)).collect();

    for op in ops {
        match *op {
            Op::Listen(t, n, l) => {
                let _ = hub.listen(triggers[t], NAMES[n], listeners[l]);
            }
            Op::Unlisten(t, n, l) => {
                hub.unlisten(triggers[t], NAMES[n], listeners[l]);
            }
            Op::Fire(t, n) => {
                let _ = hub.fire(triggers[t], NAMES[n], Some(&0));
            }
            Op::DeleteTrigger(t) => {
                let _ = hub.delete_trigger(triggers[t]);
            }
            Op::DeleteListener(l) => {
                let _ = hub.delete_listener(listeners[l]);
            }
            Op::AutoDelete(l, free) => {
                let _ = hub.allow_auto_delete(listeners[l], free);
            }
        }
        assert_consistent(&hub, &triggers, &listeners);
    }
    (hub, triggers, listeners)
}

fn survivors(hub: &TestHub, listeners: &[ListenerId]) -> BTreeSet<ListenerId> {
    listeners
        .iter()
        .copied()
        .filter(|&l| hub.listener_exists(l))
        .collect()
}

proptest! {
    #[test]
    fn prop_random_ops_stay_consistent(ops in prop::collection::vec(op(), 0..60)) {
        run(&ops);
    }

    #[test]
    fn prop_trigger_deletion_order_irrelevant(
        ops in prop::collection::vec(op(), 0..40),
        order in Just((0..TRIGGERS).collect::<Vec<_>>()).prop_shuffle(),
    ) {
        let (mut forward, triggers, listeners) = run(&ops);
        let (mut shuffled, _, _) = run(&ops);

        for &t in &triggers {
            let _ = forward.delete_trigger(t);
        }
        for &i in &order {
            let _ = shuffled.delete_trigger(triggers[i]);
        }

        assert_consistent(&forward, &triggers, &listeners);
        assert_consistent(&shuffled, &triggers, &listeners);
        prop_assert_eq!(survivors(&forward, &listeners), survivors(&shuffled, &listeners));
        for &l in &listeners {
            prop_assert!(forward.triggers_of(l).is_empty());
        }
    }

    #[test]
    fn prop_full_teardown_leaves_nothing(
        ops in prop::collection::vec(op(), 0..40),
        listeners_first in any::<bool>(),
    ) {
        let (mut hub, triggers, listeners) = run(&ops);

        let delete_listeners = |hub: &mut TestHub| {
            for &l in &listeners {
                if hub.listener_exists(l) {
                    hub.delete_listener(l).unwrap();
                }
            }
        };
        if listeners_first {
            delete_listeners(&mut hub);
        }
        for &t in &triggers {
            let _ = hub.delete_trigger(t);
        }
        delete_listeners(&mut hub);

        prop_assert_eq!(hub.trigger_count(), 0);
        prop_assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn prop_table_finds_every_inserted_name(
        names in prop::collection::vec(any::<[u8; 4]>(), 0..40),
        capacity in 1usize..16,
    ) {
        let mut table = EventTable::new(capacity);
        let listener = ListenerId::new(0, 0);
        let mut stored = BTreeSet::new();

        for bytes in names {
            let name = EventName::from_bytes(bytes);
            match table.find_slot(name) {
                SlotLookup::Full => prop_assert!(stored.len() == capacity && !stored.contains(&name)),
                SlotLookup::Found(_) => prop_assert!(stored.contains(&name)),
                SlotLookup::VacantAt(_) => prop_assert!(!stored.contains(&name)),
            }
            table.insert(name, listener);
            if stored.len() < capacity {
                stored.insert(name);
            }
        }

        prop_assert_eq!(table.len(), stored.len());
        for name in &stored {
            prop_assert!(table.contains(*name, listener));
        }
    }

    #[test]
    fn prop_small_table_never_breaks_consistency(ops in prop::collection::vec(op(), 0..60)) {
        let mut hub = TestHub::with_config(HubConfig::default().with_table_size(3)).unwrap();
        let triggers: Vec<_> = (0..TRIGGERS).map(|_| hub.new_trigger()).collect();
        let listeners: Vec<_> = (0..LISTENERS).map(|_| checked_listener(&mut hub)).collect();

        for op in &ops {
            match *op {
                Op::Listen(t, n, l) => {
                    let _ = hub.listen(triggers[t], NAMES[n], listeners[l]);
                }
                Op::Unlisten(t, n, l) => {
                    hub.unlisten(triggers[t], NAMES[n], listeners[l]);
                }
                _ => {}
            }
            assert_consistent(&hub, &triggers, &listeners);
        }
        for &t in &triggers {
            prop_assert!(hub.event_names(t).len() <= 2);
        }
    }
}
