use crate::{CreatureDetail, DexEntry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User scrolled near the bottom of the list (or the app requested the
    /// initial page).
    LoadNextPage,
    /// A page fetch completed. `offset` is the offset the fetch was issued
    /// for, which lets stale replies be dropped.
    PageLoaded {
        offset: u32,
        total: u32,
        entries: Vec<DexEntry>,
    },
    /// A page fetch failed with a displayable message.
    PageFailed { offset: u32, message: String },
    /// User edited the search box (raw text, trimmed by the state machine).
    SearchChanged(String),
    /// User clicked Retry on the active screen's error surface.
    RetryClicked,
    /// User picked an entry from the list.
    EntrySelected { entry: DexEntry },
    /// Detail fetch completed for the named creature.
    DetailLoaded {
        name: String,
        result: Result<CreatureDetail, String>,
    },
    /// User left the detail screen.
    BackClicked,
}
