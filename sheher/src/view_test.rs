use super::*;

// =============================================================
// ViewState
// =============================================================

#[test]
fn view_state_default_is_routes_with_menu_closed() {
    let view = ViewState::default();
    assert_eq!(view.active_tab(), Tab::Routes);
    assert!(!view.profile_menu_open());
}

#[test]
fn select_tab_moves_between_any_pair() {
    for from in Tab::ALL {
        for to in Tab::ALL {
            let mut view = ViewState::default();
            view.select_tab(from);
            view.select_tab(to);
            assert_eq!(view.active_tab(), to);
        }
    }
}

#[test]
fn select_tab_never_touches_menu() {
    for menu_open in [false, true] {
        for x in Tab::ALL {
            for y in Tab::ALL {
                let mut view = ViewState::default();
                if menu_open {
                    view.toggle_profile_menu();
                }
                view.select_tab(x);
                view.select_tab(y);
                assert_eq!(view.profile_menu_open(), menu_open);
            }
        }
    }
}

#[test]
fn toggle_flips_and_close_forces_closed() {
    let mut view = ViewState::default();
    view.toggle_profile_menu();
    assert!(view.profile_menu_open());
    view.toggle_profile_menu();
    assert!(!view.profile_menu_open());

    view.toggle_profile_menu();
    view.close_profile_menu();
    assert!(!view.profile_menu_open());
    view.close_profile_menu();
    assert!(!view.profile_menu_open());
}

#[test]
fn menu_does_not_change_active_tab() {
    let mut view = ViewState::default();
    view.select_tab(Tab::Places);
    view.toggle_profile_menu();
    view.close_profile_menu();
    assert_eq!(view.active_tab(), Tab::Places);
}

// =============================================================
// Wire names
// =============================================================

#[test]
fn tab_wire_names() {
    let names: Vec<_> = Tab::ALL.iter().map(|t| t.as_str()).collect();
    assert_eq!(names, ["routes", "updates", "places"]);
}

#[test]
fn route_choice_defaults_to_calm() {
    assert_eq!(RouteChoice::default(), RouteChoice::Calm);
    assert_eq!(RouteChoice::Calm.as_str(), "calm");
    assert_eq!(RouteChoice::Fast.as_str(), "fast");
}
