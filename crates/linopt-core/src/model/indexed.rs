//! Indexed variable collections.

use linopt_expr::expr::Expr;
use linopt_expr::ids::VariableId;
use std::collections::BTreeMap;

/// A mapping from index keys to model variables.
///
/// Built by [`crate::Model::add_variable_map`]: filtering happens at
/// construction time, so only keys that passed the predicate have an
/// entry. Lookup is by full key regardless of creation order.
#[derive(Debug, Clone, Default)]
pub struct VariableMap<K> {
    entries: BTreeMap<K, VariableId>,
}

impl<K: Ord + Clone> VariableMap<K> {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: K, id: VariableId) {
        self.entries.insert(key, id);
    }

    /// Variable for a key, if the key passed the construction predicate.
    pub fn get(&self, key: &K) -> Option<VariableId> {
        self.entries.get(key).copied()
    }

    /// Unit-coefficient expression for a key's variable.
    pub fn var(&self, key: &K) -> Option<Expr> {
        self.get(key).map(Expr::var)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate (key, variable) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, VariableId)> + '_ {
        self.entries.iter().map(|(k, &v)| (k, v))
    }

    /// Iterate keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.keys()
    }
}
