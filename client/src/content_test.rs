use super::*;
use sheher::feedback::vocabulary;

#[test]
fn tab_labels_are_distinct() {
    let labels: Vec<_> = Tab::ALL.iter().map(|t| tab_label(*t)).collect();
    assert_eq!(labels, ["Rasta", "Khabar", "Jagah"]);
}

#[test]
fn narration_differs_per_route() {
    assert_ne!(route_narration(RouteChoice::Calm), route_narration(RouteChoice::Fast));
    assert_ne!(route_label(RouteChoice::Calm), route_label(RouteChoice::Fast));
}

#[test]
fn feedback_captions_unique_within_each_panel() {
    for tab in Tab::ALL {
        let captions: Vec<_> = vocabulary(tab).iter().map(|k| feedback_label(*k).1).collect();
        for (i, a) in captions.iter().enumerate() {
            for b in &captions[i + 1..] {
                assert_ne!(a, b, "duplicate caption on {tab:?}");
            }
        }
    }
}

#[test]
fn updates_are_ordered_through_the_day() {
    let periods: Vec<_> = CITY_UPDATES.iter().map(|u| u.period).collect();
    assert_eq!(periods, ["🌅 Subah", "🌞 Dopahar", "🌆 Shaam"]);
}

#[test]
fn every_place_has_timings() {
    assert_eq!(HERITAGE_PLACES.len(), 3);
    assert!(HERITAGE_PLACES.iter().all(|p| !p.timings.is_empty() && !p.name.is_empty()));
}
