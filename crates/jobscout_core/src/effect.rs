#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch `page` (and probe `page + 1`) for `query`, tagged with the
    /// generation that owns the results.
    LoadPage {
        generation: crate::Generation,
        query: crate::SearchQuery,
        page: u32,
    },
}
