use std::time::Duration;

use hrm_showcase::clock::ManualClock;
use hrm_showcase::config::{self, Config};
use hrm_showcase::contact::{ContactSubmission, Field, SubmissionSettings, SubmissionStatus, SubmitError};
use hrm_showcase::content;
use hrm_showcase::gallery::{CategoryFilter, Gallery, LightboxKey, ViewMode};
use hrm_showcase::rotation::{HoverRelease, RotationController};
use tempfile::tempdir;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn browsing_events_in_the_lightbox() {
    let mut gallery = Gallery::new(content::gallery_items(None));
    assert_eq!(gallery.filtered().len(), 8);

    gallery.set_filter(CategoryFilter::parse("Events"));
    let events: Vec<_> = gallery.filtered().iter().map(|item| item.id).collect();
    assert_eq!(events.len(), 2);

    assert!(gallery.open(events[events.len() - 1]));
    gallery.handle_key(LightboxKey::ArrowRight);
    assert_eq!(gallery.position(), Some((0, events.len())));
    gallery.handle_key(LightboxKey::ArrowLeft);
    assert_eq!(gallery.position(), Some((events.len() - 1, events.len())));

    // Workshops hides the open item, so the lightbox closes
    gallery.set_filter(CategoryFilter::parse("workshops"));
    assert!(!gallery.is_open());
    assert!(!gallery.open(events[0]));

    gallery.set_filter(CategoryFilter::parse("all"));
    assert!(gallery.open(events[0]));
    gallery.handle_key(LightboxKey::Escape);
    assert!(!gallery.is_open());
}

#[test]
fn likes_and_view_mode_survive_filtering() {
    let mut gallery = Gallery::new(content::gallery_items(None));
    gallery.toggle_like(3);
    gallery.toggle_like(7);
    gallery.set_view_mode(ViewMode::Masonry);

    gallery.set_filter(CategoryFilter::parse("Community"));
    assert_eq!(gallery.filtered().len(), 1);
    assert!(gallery.is_liked(3));
    assert_eq!(gallery.liked_count(), 2);
    assert_eq!(gallery.view_mode(), ViewMode::Masonry);

    let stats = gallery.stats();
    assert_eq!(stats.moments, 8);
    assert_eq!(stats.featured, 4);
}

#[test]
fn contact_message_goes_out_then_the_form_resets() {
    let clock = ManualClock::new();
    let mut submission = ContactSubmission::new(clock.clone(), SubmissionSettings::default());

    *submission.form_mut().field_mut(Field::Name) = "Ayesha Perera".into();
    *submission.form_mut().field_mut(Field::Email) = "not-an-email".into();
    assert!(matches!(submission.submit(), Err(SubmitError::Invalid(_))));
    assert_eq!(submission.status(), SubmissionStatus::Idle);

    *submission.form_mut().field_mut(Field::Email) = "ayesha@example.lk".into();
    *submission.form_mut().field_mut(Field::Subject) = "Volunteering".into();
    *submission.form_mut().field_mut(Field::Message) = "I would like to help.".into();
    submission.submit().unwrap();
    assert!(matches!(submission.submit(), Err(SubmitError::Busy)));

    clock.advance(ms(1499));
    assert_eq!(submission.update(), None);
    assert_eq!(submission.status(), SubmissionStatus::Sending);

    clock.advance(ms(1));
    let uri = submission.update().unwrap();
    assert!(uri.starts_with("mailto:hrm@lawcollege.lk?subject=Volunteering&body="));
    assert!(uri.contains("Name%3A%20Ayesha%20Perera"));
    assert_eq!(submission.status(), SubmissionStatus::Sent);
    assert_eq!(submission.update(), None);

    clock.advance(ms(3000));
    assert_eq!(submission.update(), None);
    assert_eq!(submission.status(), SubmissionStatus::Idle);
    assert!(submission.form().field(Field::Name).is_empty());
}

#[test]
fn settings_file_drives_the_controllers() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[rotation]\ninterval_ms = 1000\ncooldown_ms = 2000\nhover_release = \"immediate\"\n",
    )
    .unwrap();

    let config = config::load_or_default(Some(&path)).unwrap();
    assert_eq!(config.contact, Config::default().contact);

    let timing = config.rotation_timing();
    assert_eq!(timing.hover_release, HoverRelease::Immediate);

    let clock = ManualClock::new();
    let mut carousel = RotationController::new(3, clock.clone(), timing);
    clock.advance(ms(1000));
    assert!(carousel.update());
    assert_eq!(carousel.index(), 1);

    carousel.next();
    clock.advance(ms(1999));
    carousel.update();
    assert!(carousel.is_paused());
    clock.advance(ms(1));
    carousel.update();
    assert!(!carousel.is_paused());
}

#[test]
fn missing_explicit_settings_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(config::load_or_default(Some(&dir.path().join("absent.toml"))).is_err());
}
