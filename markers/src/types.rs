use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;

use chrono::Local;

/// Physical print size of a marker. Declaration order is the fixed order in
/// which categories are selected, recorded and archived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Large,
    Medium,
    Small,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Large, Category::Medium, Category::Small];

    /// Stable key used in console output, record headers and archive folders.
    pub fn key(self) -> &'static str {
        match self {
            Category::Large => "size_270mm",
            Category::Medium => "size_144mm",
            Category::Small => "size_90mm",
        }
    }

    /// Name of the source sub-directory holding this size's PDFs.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Large => "270mm",
            Category::Medium => "144mm",
            Category::Small => "90mm",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Requested number of markers per category. Zero skips the category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub large: u32,
    pub medium: u32,
    pub small: u32,
}

impl Counts {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Large => self.large,
            Category::Medium => self.medium,
            Category::Small => self.small,
        }
    }
}

/// Filenames consumed by earlier runs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsedSet {
    names: HashSet<String>,
}

impl UsedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<S: Into<String>> Extend<S> for UsedSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

impl<S: Into<String>> FromIterator<S> for UsedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

/// A category whose pool held fewer unused markers than requested.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortfall {
    pub category: Category,
    pub requested: u32,
    pub found: usize,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "requested {} markers for {}, found {}",
            self.requested, self.category, self.found
        )
    }
}

/// Markers chosen for one run. Every category is present, possibly empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    picks: BTreeMap<Category, Vec<String>>,
    pub shortfalls: Vec<Shortfall>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            picks: Category::ALL.iter().map(|c| (*c, Vec::new())).collect(),
            shortfalls: Vec::new(),
        }
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, category: Category, names: Vec<String>) {
        self.picks.insert(category, names);
    }

    pub fn get(&self, category: Category) -> &[String] {
        self.picks.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Categories in fixed order with their picks.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.picks.iter().map(|(c, names)| (*c, names.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.picks.values().map(Vec::len).sum()
    }
}

/// Second-precision run timestamp shared by the record file and the archive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunStamp(String);

impl RunStamp {
    pub const FORMAT: &'static str = "%Y_%m_%d_%H_%M_%S";

    pub fn now() -> Self {
        Self(Local::now().format(Self::FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RunStamp {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RunStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_keep_fixed_order() {
        let keys: Vec<_> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, ["size_270mm", "size_144mm", "size_90mm"]);

        let selection = Selection::new();
        let order: Vec<_> = selection.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL);
    }

    #[test]
    fn shortfall_message_names_request_and_supply() {
        let s = Shortfall {
            category: Category::Small,
            requested: 5,
            found: 2,
        };
        assert_eq!(s.to_string(), "requested 5 markers for size_90mm, found 2");
    }

    #[test]
    fn run_stamp_is_second_precision() {
        let stamp = RunStamp::now();
        // YYYY_MM_DD_HH_MM_SS
        assert_eq!(stamp.as_str().len(), 19);
        assert_eq!(stamp.as_str().matches('_').count(), 5);
    }
}
