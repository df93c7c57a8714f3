/// One indexed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub date: String,
    pub link: String,
}

/// Entries sharing the same year prefix, in descending date order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearGroup {
    pub year: String,
    pub entries: Vec<Entry>,
}
