#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page of list entries from the catalog.
    FetchPage { offset: u32, limit: u32 },
    /// Fetch the full record for one creature by name.
    FetchDetail { name: String },
}
