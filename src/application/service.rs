//! Generic resource service — application-layer orchestration
//!
//! The validate → generate → store → project pipeline is the same for
//! every resource type, so it is implemented exactly once here.
//! `ResourceFlow` is the seam each resource fills in; HTTP handlers are
//! thin wrappers that delegate to the service.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{DomainResult, Resource};
use crate::infrastructure::InMemoryStore;

/// Per-resource behavior plugged into [`ResourceService`].
pub trait ResourceFlow {
    type Entity: Resource;
    type CreateRequest;
    type View;

    /// Check the raw request, failing fast with the first violation.
    fn validate(request: &Self::CreateRequest) -> DomainResult<()>;

    /// Build the entity: generate identifiers, stamp timestamps,
    /// derive fields. Only called after validation passed.
    fn assemble(request: Self::CreateRequest) -> Self::Entity;

    /// The formatted projection returned to callers.
    fn project(entity: &Self::Entity) -> Self::View;
}

/// Orchestrates one resource type over its in-memory store.
///
/// Holds no entity state between calls; the store exclusively owns all
/// entity instances.
pub struct ResourceService<F: ResourceFlow> {
    store: Arc<InMemoryStore<F::Entity>>,
}

impl<F: ResourceFlow> ResourceService<F> {
    pub fn new(store: Arc<InMemoryStore<F::Entity>>) -> Self {
        Self { store }
    }

    /// Validate, assemble, append, project. No partial entity is ever
    /// stored on a validation failure.
    pub fn create(&self, request: F::CreateRequest) -> DomainResult<F::View> {
        F::validate(&request)?;

        let entity = F::assemble(request);
        let view = F::project(&entity);
        let id = entity.id().to_owned();
        self.store.append(entity)?;

        info!(kind = <F::Entity as Resource>::KIND, %id, "Resource created");
        Ok(view)
    }

    /// Every stored entity, individually projected, in insertion order.
    pub fn list_all(&self) -> Vec<F::View> {
        let records = self.store.all();
        debug!(
            kind = <F::Entity as Resource>::KIND,
            count = records.len(),
            "Listing resources"
        );
        records.iter().map(F::project).collect()
    }

    /// The projection of the matching entity; `None` when absent.
    pub fn get_by_id(&self, id: &str) -> Option<F::View> {
        self.store.find_by_id(id).map(|entity| F::project(&entity))
    }
}
