use std::sync::Once;

use pokedex_core::{
    update, AppState, BaseStat, CreatureDetail, DexEntry, Effect, Msg, Resource,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pokedex_logging::initialize_for_tests);
}

fn pikachu_entry() -> DexEntry {
    DexEntry {
        number: 25,
        name: "pikachu".to_string(),
        image_url: "https://sprites.example/25.png".to_string(),
    }
}

fn pikachu_detail() -> CreatureDetail {
    CreatureDetail {
        id: 25,
        name: "pikachu".to_string(),
        types: vec!["electric".to_string()],
        stats: vec![
            BaseStat {
                name: "hp".to_string(),
                value: 35,
            },
            BaseStat {
                name: "speed".to_string(),
                value: 90,
            },
        ],
        image_url: "https://sprites.example/25.png".to_string(),
    }
}

#[test]
fn selecting_entry_opens_loading_detail_and_fetches() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(
        state,
        Msg::EntrySelected {
            entry: pikachu_entry(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::FetchDetail {
            name: "pikachu".to_string()
        }]
    );
    let view = state.view();
    let detail = view.detail().unwrap();
    assert_eq!(detail.entry.name, "pikachu");
    assert!(detail.detail.is_loading());
}

#[test]
fn detail_success_resolves_resource() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::EntrySelected {
            entry: pikachu_entry(),
        },
    );

    let (state, effects) = update(
        state,
        Msg::DetailLoaded {
            name: "pikachu".to_string(),
            result: Ok(pikachu_detail()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(
        view.detail().unwrap().detail,
        Resource::Success(pikachu_detail())
    );
}

#[test]
fn detail_failure_surfaces_message() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::EntrySelected {
            entry: pikachu_entry(),
        },
    );

    let (state, _effects) = update(
        state,
        Msg::DetailLoaded {
            name: "pikachu".to_string(),
            result: Err("http status 404".to_string()),
        },
    );

    let view = state.view();
    assert_eq!(
        view.detail().unwrap().detail.error_message(),
        Some("http status 404")
    );
}

#[test]
fn reply_for_other_creature_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::EntrySelected {
            entry: pikachu_entry(),
        },
    );

    let (state, _effects) = update(
        state,
        Msg::DetailLoaded {
            name: "raichu".to_string(),
            result: Err("http status 404".to_string()),
        },
    );

    assert!(state.view().detail().unwrap().detail.is_loading());
}

#[test]
fn back_returns_to_list_and_drops_detail() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::EntrySelected {
            entry: pikachu_entry(),
        },
    );
    let (state, _effects) = update(
        state,
        Msg::DetailLoaded {
            name: "pikachu".to_string(),
            result: Ok(pikachu_detail()),
        },
    );

    let (state, effects) = update(state, Msg::BackClicked);
    assert!(effects.is_empty());
    assert!(state.view().list().is_some());

    // A late reply after leaving the screen has nowhere to land.
    let (state, _effects) = update(
        state,
        Msg::DetailLoaded {
            name: "pikachu".to_string(),
            result: Ok(pikachu_detail()),
        },
    );
    assert!(state.view().list().is_some());

    // Revisiting starts a fresh fetch; nothing was cached.
    let (state, effects) = update(
        state,
        Msg::EntrySelected {
            entry: pikachu_entry(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::FetchDetail {
            name: "pikachu".to_string()
        }]
    );
    assert!(state.view().detail().unwrap().detail.is_loading());
}

#[test]
fn retry_on_detail_screen_refetches() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(
        state,
        Msg::EntrySelected {
            entry: pikachu_entry(),
        },
    );
    let (state, _effects) = update(
        state,
        Msg::DetailLoaded {
            name: "pikachu".to_string(),
            result: Err("timeout".to_string()),
        },
    );

    let (state, effects) = update(state, Msg::RetryClicked);

    assert_eq!(
        effects,
        vec![Effect::FetchDetail {
            name: "pikachu".to_string()
        }]
    );
    assert!(state.view().detail().unwrap().detail.is_loading());
}
