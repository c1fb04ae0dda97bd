//! Metadata methods for variable and constraint naming.
//!
//! Names and metadata live in lazily allocated side tables, so models that
//! never use them pay nothing. Naming does not change what the model
//! optimizes, so it does not bump the revision counter.

use std::collections::BTreeMap;

use linopt_expr::ids::{ConstraintId, VariableId};

use crate::model::error::ModelError;
use crate::model::Model;

fn store<K: Ord, V>(table: &mut Option<BTreeMap<K, V>>, key: K, value: V) {
    table.get_or_insert_with(BTreeMap::new).insert(key, value);
}

fn fetch<'a, K: Ord, V>(table: &'a Option<BTreeMap<K, V>>, key: &K) -> Option<&'a V> {
    table.as_ref().and_then(|map| map.get(key))
}

fn find_by_name<K: Ord + Copy>(table: &Option<BTreeMap<K, String>>, name: &str) -> Option<K> {
    table.as_ref().and_then(|names| {
        names
            .iter()
            .find_map(|(id, value)| (value == name).then_some(*id))
    })
}

impl Model {
    /// Set name for a variable.
    pub fn set_variable_name(&mut self, id: VariableId, name: String) -> Result<(), ModelError> {
        self.ensure_variable_exists(id)?;
        store(&mut self.variable_names, id, name);
        Ok(())
    }

    /// Get name for a variable.
    pub fn get_variable_name(&self, id: VariableId) -> Option<&str> {
        fetch(&self.variable_names, &id).map(String::as_str)
    }

    /// Lookup a variable by name.
    pub fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        find_by_name(&self.variable_names, name)
    }

    /// Set name for a constraint.
    pub fn set_constraint_name(
        &mut self,
        id: ConstraintId,
        name: String,
    ) -> Result<(), ModelError> {
        self.ensure_constraint_exists(id)?;
        store(&mut self.constraint_names, id, name);
        Ok(())
    }

    /// Get name for a constraint.
    pub fn get_constraint_name(&self, id: ConstraintId) -> Option<&str> {
        fetch(&self.constraint_names, &id).map(String::as_str)
    }

    /// Lookup a constraint by name.
    pub fn get_constraint_by_name(&self, name: &str) -> Option<ConstraintId> {
        find_by_name(&self.constraint_names, name)
    }

    /// Set objective name.
    pub fn set_objective_name(&mut self, name: Option<String>) -> Result<(), ModelError> {
        self.objective_name = name;
        Ok(())
    }

    /// Get objective name.
    pub fn get_objective_name(&self) -> Option<&str> {
        self.objective_name.as_deref()
    }

    /// Set metadata for a variable.
    pub fn set_variable_metadata(
        &mut self,
        id: VariableId,
        metadata: serde_json::Value,
    ) -> Result<(), ModelError> {
        self.ensure_variable_exists(id)?;
        store(&mut self.variable_metadata, id, metadata);
        Ok(())
    }

    /// Get metadata for a variable.
    pub fn get_variable_metadata(&self, id: VariableId) -> Option<&serde_json::Value> {
        fetch(&self.variable_metadata, &id)
    }

    /// Set metadata for a constraint.
    pub fn set_constraint_metadata(
        &mut self,
        id: ConstraintId,
        metadata: serde_json::Value,
    ) -> Result<(), ModelError> {
        self.ensure_constraint_exists(id)?;
        store(&mut self.constraint_metadata, id, metadata);
        Ok(())
    }

    /// Get metadata for a constraint.
    pub fn get_constraint_metadata(&self, id: ConstraintId) -> Option<&serde_json::Value> {
        fetch(&self.constraint_metadata, &id)
    }
}
