use serde::{Deserialize, Serialize};

use crate::modules::franchise::domain::entities::Branch;
use crate::modules::franchise::domain::value_objects::EntityName;
use crate::shared::errors::{AppError, AppResult};

pub const MAX_BRANCHES: usize = 500;

/// Aggregate root: a franchise plus its owned branches and products, treated
/// as one consistency and persistence unit.
///
/// `version` backs the store's conditional write: it starts at 0 on creation
/// and the write path bumps it once per successful structural mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Franchise {
    id: String,
    name: EntityName,
    branches: Vec<Branch>,
    version: u64,
}

impl Franchise {
    pub fn new(id: String, name: &str) -> AppResult<Self> {
        Ok(Self {
            id,
            name: EntityName::new(name)?,
            branches: Vec::new(),
            version: 0,
        })
    }

    /// Rehydration constructor used when loading from storage.
    pub fn from_parts(
        id: String,
        name: &str,
        branches: Vec<Branch>,
        version: u64,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            name: EntityName::new(name)?,
            branches,
            version,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &EntityName {
        &self.name
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    pub fn has_branches(&self) -> bool {
        !self.branches.is_empty()
    }

    pub fn total_product_count(&self) -> usize {
        self.branches.iter().map(|b| b.product_count()).sum()
    }

    pub fn has_branch(&self, branch_id: &str) -> bool {
        self.branches.iter().any(|b| b.id() == branch_id)
    }

    pub fn has_branch_named(&self, name: &str) -> bool {
        self.branches
            .iter()
            .any(|b| b.name().matches_ignore_case(name))
    }

    pub fn update_name(&mut self, new_name: &str) -> AppResult<()> {
        self.name = EntityName::new(new_name)?;
        Ok(())
    }

    pub fn add_branch(&mut self, branch: Branch) -> AppResult<()> {
        if self.branches.len() >= MAX_BRANCHES {
            return Err(AppError::ValidationError(format!(
                "Franchise cannot have more than {} branches",
                MAX_BRANCHES
            )));
        }
        if self.has_branch(branch.id()) {
            return Err(AppError::DuplicateEntity(format!(
                "Branch with id {} already exists in this franchise",
                branch.id()
            )));
        }
        if self.has_branch_named(branch.name().as_str()) {
            return Err(AppError::DuplicateEntity(format!(
                "Branch with name '{}' already exists in this franchise",
                branch.name()
            )));
        }
        self.branches.push(branch);
        Ok(())
    }

    pub fn remove_branch(&mut self, branch_id: &str) -> AppResult<()> {
        if branch_id.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Branch ID cannot be empty".to_string(),
            ));
        }
        let before = self.branches.len();
        self.branches.retain(|b| b.id() != branch_id);
        if self.branches.len() == before {
            return Err(AppError::BranchNotFound(branch_id.to_string()));
        }
        Ok(())
    }

    pub fn find_branch(&self, branch_id: &str) -> AppResult<&Branch> {
        self.branches
            .iter()
            .find(|b| b.id() == branch_id)
            .ok_or_else(|| AppError::BranchNotFound(branch_id.to_string()))
    }

    pub fn find_branch_mut(&mut self, branch_id: &str) -> AppResult<&mut Branch> {
        self.branches
            .iter_mut()
            .find(|b| b.id() == branch_id)
            .ok_or_else(|| AppError::BranchNotFound(branch_id.to_string()))
    }

    /// Renames a branch, keeping the case-insensitive name uniqueness
    /// invariant among its siblings.
    pub fn rename_branch(&mut self, branch_id: &str, new_name: &str) -> AppResult<()> {
        if !self.has_branch(branch_id) {
            return Err(AppError::BranchNotFound(branch_id.to_string()));
        }
        let taken = self
            .branches
            .iter()
            .any(|b| b.id() != branch_id && b.name().matches_ignore_case(new_name));
        if taken {
            return Err(AppError::DuplicateEntity(format!(
                "Branch with name '{}' already exists in this franchise",
                new_name.trim()
            )));
        }
        self.find_branch_mut(branch_id)?.update_name(new_name)
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }

    /// Used only by the persistence layer when rebasing onto the latest
    /// stored state after a write conflict.
    pub fn set_version(&mut self, version: u64) {
        self.version = version;
    }

    /// Used only by the persistence layer's conflict retry: replaces the
    /// branch collection wholesale with a freshly reloaded one.
    pub fn replace_branches(&mut self, branches: Vec<Branch>) {
        self.branches = branches;
    }

    /// Derived read view: for every branch that holds products, keep only
    /// the single product with the highest stock (first maximum on ties).
    /// Branches without products are dropped.
    pub fn max_stock_per_branch(&self) -> Franchise {
        let filtered = self
            .branches
            .iter()
            .filter_map(|branch| branch.max_stock_view())
            .collect();

        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            branches: filtered,
            version: self.version,
        }
    }
}
