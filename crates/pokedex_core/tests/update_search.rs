use std::sync::Once;

use pokedex_core::{update, AppState, DexEntry, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pokedex_logging::initialize_for_tests);
}

fn entry(number: u32, name: &str) -> DexEntry {
    DexEntry {
        number,
        name: name.to_string(),
        image_url: format!("https://sprites.example/{number}.png"),
    }
}

/// First seven entries of the catalog, loaded as one page.
fn loaded_state() -> AppState {
    let page = vec![
        entry(1, "bulbasaur"),
        entry(2, "ivysaur"),
        entry(3, "venusaur"),
        entry(4, "charmander"),
        entry(5, "charmeleon"),
        entry(6, "charizard"),
        entry(7, "squirtle"),
    ];
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::LoadNextPage);
    let (state, _effects) = update(
        state,
        Msg::PageLoaded {
            offset: 0,
            total: 7,
            entries: page,
        },
    );
    state
}

fn visible_names(state: &AppState) -> Vec<String> {
    state
        .view()
        .list()
        .unwrap()
        .entries
        .iter()
        .map(|entry| entry.name.clone())
        .collect()
}

#[test]
fn name_substring_filters_case_insensitively() {
    init_logging();
    let state = loaded_state();

    let (state, effects) = update(state, Msg::SearchChanged("Char".to_string()));

    assert!(effects.is_empty());
    assert_eq!(
        visible_names(&state),
        vec!["charmander", "charmeleon", "charizard"]
    );
    assert!(state.view().list().unwrap().is_searching);
}

#[test]
fn numeric_query_matches_catalog_number() {
    init_logging();
    let state = loaded_state();

    let (state, _effects) = update(state, Msg::SearchChanged("4".to_string()));

    assert_eq!(visible_names(&state), vec!["charmander"]);
}

#[test]
fn empty_query_restores_full_set() {
    init_logging();
    let state = loaded_state();
    let (state, _effects) = update(state, Msg::SearchChanged("saur".to_string()));
    assert_eq!(visible_names(&state).len(), 3);

    let (state, _effects) = update(state, Msg::SearchChanged(String::new()));

    assert_eq!(visible_names(&state).len(), 7);
    assert!(!state.view().list().unwrap().is_searching);
}

#[test]
fn query_is_trimmed_before_matching() {
    init_logging();
    let state = loaded_state();

    let (state, _effects) = update(state, Msg::SearchChanged("  saur ".to_string()));

    assert_eq!(
        visible_names(&state),
        vec!["bulbasaur", "ivysaur", "venusaur"]
    );
}

#[test]
fn unmatched_query_yields_empty_list_but_keeps_loaded_set() {
    init_logging();
    let state = loaded_state();

    let (state, _effects) = update(state, Msg::SearchChanged("mewtwo".to_string()));

    let view = state.view();
    let list = view.list().unwrap();
    assert!(list.entries.is_empty());
    assert_eq!(list.loaded_count, 7);
}
