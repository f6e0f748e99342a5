use crate::state::Screen;
use crate::{AppState, Effect, Msg, PAGE_SIZE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadNextPage => request_next_page(&mut state),
        Msg::PageLoaded {
            offset,
            total,
            entries,
        } => {
            state.apply_page(offset, total, entries);
            Vec::new()
        }
        Msg::PageFailed { offset, message } => {
            state.apply_page_failure(offset, message);
            Vec::new()
        }
        Msg::SearchChanged(query) => {
            state.set_query(&query);
            Vec::new()
        }
        Msg::RetryClicked => {
            if matches!(state.screen(), Screen::List) {
                request_next_page(&mut state)
            } else {
                match state.reload_detail() {
                    Some(name) => vec![Effect::FetchDetail { name }],
                    None => Vec::new(),
                }
            }
        }
        Msg::EntrySelected { entry } => {
            let name = entry.name.clone();
            state.open_detail(entry);
            vec![Effect::FetchDetail { name }]
        }
        Msg::DetailLoaded { name, result } => {
            state.apply_detail(&name, result);
            Vec::new()
        }
        Msg::BackClicked => {
            state.close_detail();
            Vec::new()
        }
    };

    (state, effects)
}

fn request_next_page(state: &mut AppState) -> Vec<Effect> {
    if !state.begin_page_load() {
        return Vec::new();
    }
    vec![Effect::FetchPage {
        offset: state.next_offset(),
        limit: PAGE_SIZE,
    }]
}
