// Property tests for navigation and routing over arbitrary event sequences

use procure_flow::navigation::{Navigation, NavigationSnapshot};
use procure_flow::{route, step_at, steps, ScreenKind};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Event {
    Start,
    Advance,
    Restart,
}

fn event() -> impl Strategy<Value = Event> {
    prop_oneof![
        1 => Just(Event::Start),
        6 => Just(Event::Advance),
        1 => Just(Event::Restart),
    ]
}

proptest! {
    #[test]
    fn index_never_exceeds_step_count(events in prop::collection::vec(event(), 0..64)) {
        let mut nav = Navigation::new(steps().len());
        for event in events {
            let before = nav.snapshot();
            let after = match event {
                Event::Start => nav.start(),
                Event::Advance => nav.advance(),
                Event::Restart => nav.restart(),
            };
            prop_assert!(after.current_step_index <= steps().len());
            match event {
                Event::Restart => prop_assert_eq!(after, NavigationSnapshot::INITIAL),
                Event::Advance => prop_assert!(
                    after.current_step_index >= before.current_step_index
                        && after.current_step_index <= before.current_step_index + 1
                ),
                Event::Start => {}
            }
            if !after.started {
                prop_assert_eq!(after.current_step_index, 0);
            }
        }
    }

    #[test]
    fn routing_is_deterministic(index in 0usize..16) {
        let first = route(step_at(index));
        prop_assert_eq!(first, route(step_at(index)));
        if index >= steps().len() {
            prop_assert_eq!(first, ScreenKind::Summary);
        } else {
            prop_assert_ne!(first, ScreenKind::Summary);
        }
    }
}
