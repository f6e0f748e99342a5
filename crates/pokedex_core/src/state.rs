use crate::view_model::{AppViewModel, DetailView, ListView, ScreenView};
use crate::{CreatureDetail, DexEntry, Resource};

/// Which screen is active. The list survives underneath the detail screen;
/// the detail record does not survive leaving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Screen {
    List,
    Detail {
        entry: DexEntry,
        detail: Resource<CreatureDetail>,
    },
}

/// List pagination/search state holder plus navigation.
///
/// All mutation happens through [`crate::update`]; the UI only ever sees the
/// derived [`AppViewModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    loaded: Vec<DexEntry>,
    next_offset: u32,
    total: Option<u32>,
    end_reached: bool,
    is_loading: bool,
    load_error: Option<String>,
    query: String,
    screen: Screen,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            loaded: Vec::new(),
            next_offset: 0,
            total: None,
            end_reached: false,
            is_loading: false,
            load_error: None,
            query: String::new(),
            screen: Screen::List,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let screen = match &self.screen {
            Screen::List => ScreenView::List(ListView {
                entries: self.visible_entries(),
                query: self.query.clone(),
                end_reached: self.end_reached,
                is_loading: self.is_loading,
                is_searching: self.is_searching(),
                // Pagination is blocked while a search is active, so a retry
                // banner would be dead UI. Hide the error until the query clears.
                load_error: if self.is_searching() {
                    None
                } else {
                    self.load_error.clone()
                },
                loaded_count: self.loaded.len(),
                total: self.total,
            }),
            Screen::Detail { entry, detail } => ScreenView::Detail(DetailView {
                entry: entry.clone(),
                detail: detail.clone(),
            }),
        };
        AppViewModel { screen }
    }

    pub(crate) fn next_offset(&self) -> u32 {
        self.next_offset
    }

    pub(crate) fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    pub(crate) fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Transition into an in-flight page fetch. Returns false when a fetch
    /// must not start: one is already running, the catalog is exhausted, or a
    /// search is active.
    pub(crate) fn begin_page_load(&mut self) -> bool {
        if self.is_loading || self.end_reached || self.is_searching() {
            return false;
        }
        self.is_loading = true;
        self.load_error = None;
        true
    }

    /// Append a successfully fetched page. Replies for any offset other than
    /// the expected one are stale and ignored.
    pub(crate) fn apply_page(&mut self, offset: u32, total: u32, entries: Vec<DexEntry>) {
        if offset != self.next_offset {
            return;
        }
        self.next_offset += entries.len() as u32;
        self.total = Some(total);
        self.end_reached = self.next_offset >= total || entries.is_empty();
        self.loaded.extend(entries);
        self.is_loading = false;
        self.load_error = None;
    }

    /// Record a failed page fetch. Loaded entries are kept; pagination stops
    /// until the user retries.
    pub(crate) fn apply_page_failure(&mut self, offset: u32, message: String) {
        if offset != self.next_offset {
            return;
        }
        self.is_loading = false;
        self.load_error = Some(message);
    }

    pub(crate) fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
    }

    pub(crate) fn open_detail(&mut self, entry: DexEntry) {
        self.screen = Screen::Detail {
            entry,
            detail: Resource::Loading,
        };
    }

    /// Resolve the in-flight detail fetch. Ignored when the user already
    /// navigated away or on to a different creature.
    pub(crate) fn apply_detail(&mut self, name: &str, result: Result<CreatureDetail, String>) {
        if let Screen::Detail { entry, detail } = &mut self.screen {
            if entry.name == name {
                *detail = Resource::from(result);
            }
        }
    }

    /// Put the detail screen back into its loading state before a retry.
    pub(crate) fn reload_detail(&mut self) -> Option<String> {
        if let Screen::Detail { entry, detail } = &mut self.screen {
            *detail = Resource::Loading;
            return Some(entry.name.clone());
        }
        None
    }

    pub(crate) fn close_detail(&mut self) {
        self.screen = Screen::List;
    }

    /// The loaded entries filtered by the current query: case-insensitive
    /// substring match on the name, or an exact catalog-number match when the
    /// query parses as an integer. An empty query yields the full loaded set.
    fn visible_entries(&self) -> Vec<DexEntry> {
        if self.query.is_empty() {
            return self.loaded.clone();
        }
        self.loaded
            .iter()
            .filter(|entry| entry_matches(entry, &self.query))
            .cloned()
            .collect()
    }
}

fn entry_matches(entry: &DexEntry, query: &str) -> bool {
    if entry
        .name
        .to_lowercase()
        .contains(&query.to_lowercase())
    {
        return true;
    }
    query
        .parse::<u32>()
        .is_ok_and(|number| number == entry.number)
}
