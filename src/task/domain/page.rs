//! Pagination and sorting vocabulary for task listings.

use super::{ParseSortError, Task};
use serde::{Deserialize, Serialize};

/// Sortable task columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Order by storage-assigned identifier.
    Id,
    /// Order by task name.
    Name,
    /// Order by completion flag.
    Completed,
}

impl SortField {
    /// Returns the canonical column name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Completed => "completed",
        }
    }
}

impl TryFrom<&str> for SortField {
    type Error = ParseSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseSortError(value.to_owned())),
        }
    }
}

/// Sort direction for a task listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    /// Returns the canonical direction name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl TryFrom<&str> for SortDirection {
    type Error = ParseSortError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(ParseSortError(value.to_owned())),
        }
    }
}

/// Requested ordering for a task listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    /// Column to order by.
    pub field: SortField,
    /// Order direction.
    pub direction: SortDirection,
}

impl TryFrom<&str> for Sort {
    type Error = ParseSortError;

    /// Parses the boundary form `field` or `field,direction`.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut segments = value.splitn(2, ',');
        let field = SortField::try_from(segments.next().unwrap_or_default())?;
        let direction = segments
            .next()
            .map_or(Ok(SortDirection::Ascending), SortDirection::try_from)?;
        Ok(Self { field, direction })
    }
}

/// Zero-based page request with an optional sort override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Option<Sort>,
}

impl PageRequest {
    /// Page size used when the caller does not supply one.
    pub const DEFAULT_SIZE: u32 = 20;

    /// Creates a page request; `size` is clamped to at least 1 so page
    /// arithmetic stays well defined.
    #[must_use]
    pub const fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: if size == 0 { 1 } else { size },
            sort: None,
        }
    }

    /// Sets the sort override.
    #[must_use]
    pub const fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Returns the zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Returns the sort override, if any.
    #[must_use]
    pub const fn sort(&self) -> Option<Sort> {
        self.sort
    }

    /// Returns the number of records preceding this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// A bounded slice of the task collection plus total-count metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPage {
    /// Records on this page.
    pub content: Vec<Task>,
    /// Total number of records across all pages.
    pub total_elements: u64,
    /// Total number of pages at the requested page size.
    pub total_pages: u64,
    /// Zero-based index of this page.
    pub number: u32,
    /// Requested page size.
    pub size: u32,
}

impl TaskPage {
    /// Assembles a page from loaded content and the collection total.
    #[must_use]
    pub fn new(content: Vec<Task>, total_elements: u64, request: PageRequest) -> Self {
        Self {
            content,
            total_elements,
            total_pages: total_elements.div_ceil(u64::from(request.size())),
            number: request.page(),
            size: request.size(),
        }
    }
}
