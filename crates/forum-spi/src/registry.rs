//! Service registry for resolving collaborators by type and name.

use std::any::{type_name, Any, TypeId};
use std::sync::Arc;

use dashmap::DashMap;

use crate::error::{SpiError, SpiResult};

/// Registry key: the service type plus an optional name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ServiceKey {
    type_id: TypeId,
    name: Option<String>,
}

impl ServiceKey {
    fn unnamed<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: None,
        }
    }

    fn named<T: ?Sized + 'static>(name: &str) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: Some(name.to_string()),
        }
    }
}

/// A service that must be registered, checked by
/// [`ServiceRegistry::validate_required`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRequirement {
    key: ServiceKey,
    type_name: &'static str,
}

impl ServiceRequirement {
    /// Requires the unnamed default instance of `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            key: ServiceKey::unnamed::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Requires the instance of `T` registered under `name`.
    #[must_use]
    pub fn named<T: ?Sized + 'static>(name: &str) -> Self {
        Self {
            key: ServiceKey::named::<T>(name),
            type_name: type_name::<T>(),
        }
    }
}

#[derive(Debug)]
struct ServiceEntry {
    type_name: &'static str,
    /// Always holds an `Arc<T>` for the `T` in the key.
    instance: Arc<dyn Any + Send + Sync>,
}

/// Registry of shared services.
///
/// Services are stored as `Arc<T>`, where `T` is usually a trait object
/// (`dyn MailStore`). Each type has at most one unnamed default and any
/// number of named instances. Named and unnamed lookups never fall back to
/// each other.
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    services: DashMap<ServiceKey, ServiceEntry>,
}

impl ServiceRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the unnamed default instance of `T`, replacing any previous one.
    pub fn register<T>(&self, service: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.insert(ServiceKey::unnamed::<T>(), service);
    }

    /// Registers a named instance of `T`.
    ///
    /// ## Errors
    ///
    /// Returns [`SpiError::EmptyName`] if `name` is empty.
    pub fn register_named<T>(&self, name: &str, service: Arc<T>) -> SpiResult<()>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        if name.is_empty() {
            return Err(SpiError::EmptyName);
        }
        self.insert(ServiceKey::named::<T>(name), service);
        Ok(())
    }

    fn insert<T>(&self, key: ServiceKey, service: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        tracing::debug!(service = type_name::<T>(), name = ?key.name, "service registered");
        self.services.insert(
            key,
            ServiceEntry {
                type_name: type_name::<T>(),
                instance: Arc::new(service),
            },
        );
    }

    fn lookup<T>(&self, key: &ServiceKey) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.services
            .get(key)
            .and_then(|entry| entry.instance.downcast_ref::<Arc<T>>().cloned())
    }

    /// Resolves the unnamed default instance of `T`.
    ///
    /// ## Errors
    ///
    /// Returns [`SpiError::ServiceNotFound`] if nothing is registered.
    pub fn resolve<T>(&self) -> SpiResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.lookup(&ServiceKey::unnamed::<T>())
            .ok_or_else(|| SpiError::ServiceNotFound(type_name::<T>().to_string()))
    }

    /// Resolves the instance of `T` registered under `name`.
    ///
    /// ## Errors
    ///
    /// Returns [`SpiError::EmptyName`] for an empty name and
    /// [`SpiError::NamedServiceNotFound`] if nothing is registered under it.
    pub fn resolve_named<T>(&self, name: &str) -> SpiResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        if name.is_empty() {
            return Err(SpiError::EmptyName);
        }
        self.lookup(&ServiceKey::named::<T>(name))
            .ok_or_else(|| SpiError::NamedServiceNotFound {
                service: type_name::<T>().to_string(),
                name: name.to_string(),
            })
    }

    /// Resolves the unnamed default instance of `T`, if registered.
    #[must_use]
    pub fn try_resolve<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.lookup(&ServiceKey::unnamed::<T>())
    }

    /// Resolves the instance of `T` registered under `name`, if any.
    ///
    /// Only the named registration is consulted; the unnamed default is
    /// never returned in its place.
    #[must_use]
    pub fn try_resolve_named<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        if name.is_empty() {
            return None;
        }
        self.lookup(&ServiceKey::named::<T>(name))
    }

    /// Checks whether a service is registered, optionally under a name.
    #[must_use]
    pub fn contains<T>(&self, name: Option<&str>) -> bool
    where
        T: ?Sized + 'static,
    {
        let key = name.map_or_else(ServiceKey::unnamed::<T>, ServiceKey::named::<T>);
        self.services.contains_key(&key)
    }

    /// Checks that every requirement is registered.
    ///
    /// ## Errors
    ///
    /// Returns the error for the first missing service.
    pub fn validate_required(&self, requirements: &[ServiceRequirement]) -> SpiResult<()> {
        for requirement in requirements {
            if self.services.contains_key(&requirement.key) {
                continue;
            }
            return Err(match &requirement.key.name {
                Some(name) => SpiError::NamedServiceNotFound {
                    service: requirement.type_name.to_string(),
                    name: name.clone(),
                },
                None => SpiError::ServiceNotFound(requirement.type_name.to_string()),
            });
        }
        Ok(())
    }

    /// Returns the type names of all registered services, sorted.
    #[must_use]
    pub fn registered_services(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .services
            .iter()
            .map(|entry| match &entry.key().name {
                Some(name) => format!("{} ({name})", entry.type_name),
                None => entry.type_name.to_string(),
            })
            .collect();
        names.sort();
        names
    }

    /// Returns the number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
