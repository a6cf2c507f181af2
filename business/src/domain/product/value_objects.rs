use serde::{Deserialize, Serialize};

/// Field the catalog is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Price,
    /// Keep catalog order.
    #[default]
    Unsorted,
}

impl SortKey {
    /// Unknown keys leave the order untouched rather than failing.
    pub fn parse(text: &str) -> Self {
        match text {
            "name" => SortKey::Name,
            "price" => SortKey::Price,
            _ => SortKey::Unsorted,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => write!(f, "name"),
            SortKey::Price => write!(f, "price"),
            SortKey::Unsorted => write!(f, "unsorted"),
        }
    }
}

impl From<&str> for SortKey {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

/// 1-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageNumber(u64);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Returns `None` for page 0.
    pub fn new(page: u64) -> Option<Self> {
        (page >= 1).then_some(Self(page))
    }

    /// Anything that is not a positive integer falls back to the first page.
    pub fn parse(text: &str) -> Self {
        text.parse::<i64>()
            .ok()
            .and_then(|page| u64::try_from(page).ok())
            .and_then(Self::new)
            .unwrap_or(Self::FIRST)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Index of the first item on this page.
    pub fn offset(&self, page_size: usize) -> usize {
        usize::try_from(self.0.saturating_sub(1))
            .unwrap_or(usize::MAX)
            .saturating_mul(page_size)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl std::fmt::Display for PageNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
