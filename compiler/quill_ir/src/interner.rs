//! String interner for identifiers.
//!
//! The lexer interns every identifier once; the parser and evaluator pass
//! around the resulting [`Name`] handles and only resolve them back to text
//! when producing a message.

// Arc lets the driver hand the same interner to several runs (the console
// keeps one global environment alive across submissions).
#![expect(
    clippy::disallowed_types,
    reason = "Arc required for SharedInterner"
)]

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

struct InternTable {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

/// Identifier interner with O(1) interning and lookup.
///
/// Interned strings are leaked so lookups can hand out `&'static str`
/// without holding the lock. The set of distinct identifiers in a program
/// is small, so the leak is bounded by the program text.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

/// Interner shared between the driver, parser, and evaluator.
pub type SharedInterner = Arc<StringInterner>;

impl StringInterner {
    pub fn new() -> Self {
        let mut map = FxHashMap::default();
        map.insert("", Name::EMPTY);
        StringInterner {
            table: RwLock::new(InternTable {
                map,
                strings: vec![""],
            }),
        }
    }

    /// Create a new interner already wrapped for sharing.
    pub fn shared() -> SharedInterner {
        Arc::new(Self::new())
    }

    /// Intern `text`, returning its handle.
    pub fn intern(&self, text: &str) -> Name {
        if let Some(&name) = self.table.read().map.get(text) {
            return name;
        }

        let mut table = self.table.write();
        // Another writer may have interned it between the two locks.
        if let Some(&name) = table.map.get(text) {
            return name;
        }
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        let raw = u32::try_from(table.strings.len()).unwrap_or(u32::MAX);
        let name = Name::from_raw(raw);
        table.strings.push(leaked);
        table.map.insert(leaked, name);
        name
    }

    /// Resolve a handle back to its text.
    ///
    /// Handles from another interner resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table
            .read()
            .strings
            .get(name.raw() as usize)
            .copied()
            .unwrap_or("")
    }

    /// Number of distinct strings interned, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
