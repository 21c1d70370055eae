use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hrm_showcase::clock::ManualClock;
use hrm_showcase::rotation::{HoverRelease, RotationController, RotationTiming};

const INTERVAL: Duration = Duration::from_millis(5000);
const COOLDOWN: Duration = Duration::from_millis(8000);

fn controller(len: usize, policy: HoverRelease) -> (RotationController<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let timing = RotationTiming::new(INTERVAL, COOLDOWN, policy);
    (RotationController::new(len, clock.clone(), timing), clock)
}

fn random_policy(rng: &mut StdRng) -> HoverRelease {
    if rng.random_bool(0.5) { HoverRelease::HonorCooldown } else { HoverRelease::Immediate }
}

#[test]
fn index_stays_in_range_under_random_actions() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let policy = random_policy(&mut rng);
        let (mut c, clock) = controller(rng.random_range(0..7), policy);

        for _ in 0..100 {
            match rng.random_range(0..8) {
                0 => clock.advance(Duration::from_millis(rng.random_range(0..12_000))),
                1 => {
                    c.tick();
                }
                2 => c.next(),
                3 => c.previous(),
                4 => {
                    let target = rng.random_range(0..c.len() + 2);
                    assert_eq!(c.go_to(target), target < c.len());
                }
                5 => c.set_hover(rng.random_bool(0.5)),
                6 => c.set_len(rng.random_range(0..7)),
                _ => {
                    c.update();
                }
            }

            if c.is_empty() {
                assert_eq!(c.index(), 0);
            } else {
                assert!(c.index() < c.len(), "index {} out of {}", c.index(), c.len());
            }
        }
    }
}

#[test]
fn paused_controller_never_ticks() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let (mut c, clock) = controller(rng.random_range(1..8), random_policy(&mut rng));
        clock.advance(Duration::from_millis(rng.random_range(0..20_000)));

        match rng.random_range(0..3) {
            0 => c.next(),
            1 => c.previous(),
            _ => c.set_hover(true),
        }
        assert!(c.is_paused());

        let held = c.index();
        for _ in 0..5 {
            assert!(!c.tick());
            assert_eq!(c.index(), held);
        }
    }
}

#[test]
fn hovered_controller_never_advances_on_its_own() {
    for policy in [HoverRelease::HonorCooldown, HoverRelease::Immediate] {
        let (mut c, clock) = controller(4, policy);
        c.set_hover(true);
        c.next();
        let held = c.index();

        for _ in 0..10 {
            clock.advance(INTERVAL);
            c.update();
            assert_eq!(c.index(), held);
            assert!(c.is_paused());
        }
    }
}

#[test]
fn automation_resumes_exactly_when_the_cooldown_expires() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let (mut c, clock) = controller(5, HoverRelease::default());
        clock.advance(Duration::from_millis(rng.random_range(0..30_000)));
        c.update();

        c.next();
        let held = c.index();

        clock.advance(COOLDOWN - Duration::from_millis(1));
        c.update();
        assert!(c.is_paused());

        clock.advance(Duration::from_millis(1));
        c.update();
        assert!(!c.is_paused());
        assert_eq!(c.index(), held);
        assert_eq!(c.next_tick_in(), Some(INTERVAL));
    }
}

#[test]
fn ticks_visit_every_item_from_any_start() {
    for len in 1..=6 {
        for start in 0..len {
            let (mut c, clock) = controller(len, HoverRelease::default());
            assert!(c.go_to(start));
            clock.advance(COOLDOWN);
            c.update();
            assert!(!c.is_paused());

            let mut seen = HashSet::new();
            seen.insert(c.index());
            for _ in 0..len {
                clock.advance(INTERVAL);
                c.update();
                seen.insert(c.index());
            }
            assert_eq!(seen.len(), len, "len {len} start {start}");
            assert_eq!(c.index(), start);
        }
    }
}

#[test]
fn next_then_previous_returns_home() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..100 {
        let len = rng.random_range(1..10);
        let (mut c, _) = controller(len, HoverRelease::default());
        let start = rng.random_range(0..len);
        assert!(c.go_to(start));

        c.next();
        c.previous();
        assert_eq!(c.index(), start);

        c.previous();
        c.next();
        assert_eq!(c.index(), start);
    }
}
