use crate::{CreatureDetail, DexEntry, Resource};

/// Snapshot the UI renders from. Derived from [`crate::AppState`], never
/// mutated directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub screen: ScreenView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    List(ListView),
    Detail(DetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// Entries after the search filter has been applied.
    pub entries: Vec<DexEntry>,
    pub query: String,
    pub end_reached: bool,
    pub is_loading: bool,
    pub is_searching: bool,
    /// Message from the last failed page fetch. `None` while a search is
    /// active, since pagination (and thus retry) is unavailable then.
    pub load_error: Option<String>,
    /// Size of the unfiltered loaded set.
    pub loaded_count: usize,
    /// Total the service reported, once the first page has arrived.
    pub total: Option<u32>,
}

impl AppViewModel {
    /// Convenience for tests and callers that know the list is showing.
    pub fn list(&self) -> Option<&ListView> {
        match &self.screen {
            ScreenView::List(list) => Some(list),
            ScreenView::Detail(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&DetailView> {
        match &self.screen {
            ScreenView::Detail(detail) => Some(detail),
            ScreenView::List(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// The list entry the user selected, kept for the header and theming.
    pub entry: DexEntry,
    pub detail: Resource<CreatureDetail>,
}
