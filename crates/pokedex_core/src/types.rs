/// Number of entries requested per catalog page.
pub const PAGE_SIZE: u32 = 20;

/// Lightweight list entry, one row in the Pokédex list.
///
/// Built from one result of the catalog's list endpoint and immutable
/// afterwards. `number` is the catalog index and is unique in the loaded set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DexEntry {
    pub number: u32,
    pub name: String,
    pub image_url: String,
}

/// A single named base statistic, e.g. `hp` or `special-attack`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseStat {
    pub name: String,
    pub value: u32,
}

/// Full record shown on the detail screen.
///
/// Fetched once per screen visit and dropped on leaving; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureDetail {
    pub id: u32,
    pub name: String,
    /// Elemental type names in slot order.
    pub types: Vec<String>,
    /// Base statistics in the order the service reports them.
    pub stats: Vec<BaseStat>,
    pub image_url: String,
}

/// One page of list results together with the service-reported total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPage {
    pub total: u32,
    pub entries: Vec<DexEntry>,
}
