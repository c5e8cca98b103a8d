//! Path → PascalCase name allocation, unique per generation run.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

/// Array-index markers (`[0]`, `[12]`, …) never contribute to a name.
static INDEX_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\d+\]").unwrap());

const FALLBACK_NAME: &str = "GeneratedInterface";

/// Run-scoped allocator. The used-name set spans the whole run, including the
/// reserved root type name, so extracted shapes can never collide with it.
#[derive(Debug, Default)]
pub struct NameAllocator {
    used: IndexSet<String>,
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a caller-chosen name (the root type) ahead of allocation.
    pub fn reserve(&mut self, name: &str) {
        self.used.insert(name.to_string());
    }

    /// Derive a unique name from a logical path like `rooms.variantsItem`.
    ///
    /// Base name: strip a leading separator, drop index markers, capitalize
    /// each `.`-segment, concatenate. Collisions get an incrementing numeric
    /// suffix; the chosen name is registered before returning.
    pub fn allocate(&mut self, path: &str) -> String {
        let cleaned = INDEX_MARKER.replace_all(path.trim_start_matches('.'), "");
        let base: String = cleaned
            .split('.')
            .filter(|part| !part.is_empty())
            .map(capitalize)
            .collect();
        let base = if base.is_empty() { FALLBACK_NAME.to_string() } else { base };

        let mut unique = base.clone();
        let mut counter = 1usize;
        while self.used.contains(&unique) {
            unique = format!("{base}{counter}");
            counter += 1;
        }
        self.used.insert(unique.clone());
        unique
    }

    /// Every name handed out or reserved, in order.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.used.iter().map(String::as_str)
    }

    pub fn count(&self) -> usize {
        self.used.len()
    }
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segments_become_pascal_case() {
        let mut names = NameAllocator::new();
        assert_eq!(names.allocate("rooms.variantsItem"), "RoomsVariantsItem");
        assert_eq!(names.allocate(".media"), "Media");
    }

    #[test]
    fn empty_path_falls_back() {
        let mut names = NameAllocator::new();
        assert_eq!(names.allocate(""), "GeneratedInterface");
        // second fallback still gets a unique name
        assert_eq!(names.allocate("."), "GeneratedInterface1");
    }

    #[test]
    fn collisions_get_numeric_suffixes() {
        let mut names = NameAllocator::new();
        assert_eq!(names.allocate("rooms"), "Rooms");
        // distinct paths, same stripped base
        assert_eq!(names.allocate(".rooms"), "Rooms1");
        assert_eq!(names.allocate("rooms[3]"), "Rooms2");
    }

    #[test]
    fn reserved_root_name_is_never_reallocated() {
        let mut names = NameAllocator::new();
        names.reserve("RoomData");
        assert_eq!(names.allocate("roomData"), "RoomData1");
        assert_eq!(names.count(), 2);
    }

    #[test]
    fn index_markers_are_stripped() {
        let mut names = NameAllocator::new();
        assert_eq!(names.allocate("rooms[0].media[12]"), "RoomsMedia");
    }
}
