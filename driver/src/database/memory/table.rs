use std::collections::HashMap;
use std::hash::Hash;

/// Append-only map that remembers insertion order.
#[derive(Debug, Clone)]
pub(in crate::database) struct Table<K, V>
where
    K: Eq + Hash + Clone,
{
    rows: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Table<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> Table<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let position = *self.index.get(key)?;
        self.rows.get(position).map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let position = *self.index.get(key)?;
        self.rows.get_mut(position).map(|(_, value)| value)
    }

    /// Returns `false` and keeps the existing row when the key is taken.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key.clone(), self.rows.len());
        self.rows.push((key, value));
        true
    }

    /// Moves the row stored under `from` to `to` without changing its position.
    /// Fails when `from` is missing or `to` belongs to another row.
    pub fn rekey(&mut self, from: &K, to: K) -> bool {
        if from == &to {
            return self.index.contains_key(from);
        }
        if self.index.contains_key(&to) {
            return false;
        }
        let Some(position) = self.index.remove(from) else {
            return false;
        };
        if let Some(row) = self.rows.get_mut(position) {
            row.0 = to.clone();
        }
        self.index.insert(to, position);
        true
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.rows.iter().map(|(_, value)| value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.rows.iter_mut().map(|(_, value)| value)
    }
}

impl<K, V> PartialEq for Table<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .rows
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}
