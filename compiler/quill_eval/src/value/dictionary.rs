//! Insertion-ordered dictionary keyed by structural equality.

use super::{Comparing, Value};

/// Dictionary entries in insertion order.
///
/// Keys may be any value, so lookup is a linear scan using `Value`
/// equality (with NaN matching NaN). Replacing an existing key keeps its
/// original position.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    entries: Vec<(Value, Value)>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `key` among the entries.
    pub fn position(&self, key: &Value) -> Option<usize> {
        self.position_inner(key, &mut Vec::new())
    }

    fn position_inner(&self, key: &Value, comparing: &mut Comparing) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k.same_key(key, comparing))
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.position(key).map(|i| self.entries[i].1.clone())
    }

    /// Overwrite the value at `index`, a position returned by [`Self::position`].
    pub fn set_at(&mut self, index: usize, value: Value) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.1 = value;
        }
    }

    /// Append a new entry. The caller has checked the key is absent.
    pub fn push(&mut self, key: Value, value: Value) {
        self.entries.push((key, value));
    }

    /// Insert or overwrite.
    ///
    /// Compares keys while `self` is borrowed; when the key may alias the
    /// dictionary's own container, use `position` and `set_at`/`push` in
    /// separate borrows instead.
    pub fn insert(&mut self, key: Value, value: Value) {
        match self.position(&key) {
            Some(index) => self.set_at(index, value),
            None => self.push(key, value),
        }
    }

    /// Remove the entry at `index`, returning its value.
    pub fn remove_at(&mut self, index: usize) -> Option<Value> {
        (index < self.entries.len()).then(|| self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Value, Value)> {
        self.entries.iter()
    }
}

impl Dictionary {
    /// Same keys mapped to equal values, in any order.
    pub(super) fn eq_inner(&self, other: &Dictionary, comparing: &mut Comparing) -> bool {
        self.len() == other.len()
            && self.entries.iter().all(|(key, value)| {
                other
                    .position_inner(key, comparing)
                    .is_some_and(|i| other.entries[i].1.eq_inner(value, comparing))
            })
    }
}

impl PartialEq for Dictionary {
    fn eq(&self, other: &Self) -> bool {
        self.eq_inner(other, &mut Vec::new())
    }
}

impl FromIterator<(Value, Value)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut dict = Dictionary::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}
