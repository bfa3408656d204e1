use papaya::HashMap as PapayaHashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use veterinary_core::{Rol, User, UserId};
use veterinary_storage::ServiceError;

/// In-memory user store using papaya lock-free HashMaps.
///
/// Users are keyed by their numeric id; ids are handed out from an atomic
/// counter starting at 1 and are never reused. Roles form a read-mostly
/// catalogue that user references are resolved against.
#[derive(Debug)]
pub struct InMemoryUserService {
    pub(crate) users: PapayaHashMap<UserId, User>,
    pub(crate) roles: PapayaHashMap<UserId, Rol>,
    id_counter: AtomicI64,
}

impl InMemoryUserService {
    /// Creates an empty store with no roles.
    pub fn new() -> Self {
        Self {
            users: PapayaHashMap::new(),
            roles: PapayaHashMap::new(),
            id_counter: AtomicI64::new(1),
        }
    }

    /// Creates an empty store with the given role catalogue.
    pub fn with_roles(roles: impl IntoIterator<Item = Rol>) -> Self {
        let service = Self::new();
        for rol in roles {
            service.register_role(rol);
        }
        service
    }

    /// Adds or replaces a role in the catalogue.
    pub fn register_role(&self, rol: Rol) {
        self.roles.pin().insert(rol.id, rol);
    }

    /// Number of stored users.
    pub fn len(&self) -> usize {
        self.users.pin().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generates the next user id.
    pub(crate) fn next_id(&self) -> UserId {
        self.id_counter.fetch_add(1, Ordering::SeqCst)
    }

    /// Replaces a role reference with the catalogue entry it points to.
    pub(crate) fn resolve_rol(&self, mut user: User) -> Result<User, ServiceError> {
        if let Some(rol) = user.rol.take() {
            let guard = self.roles.pin();
            let resolved = guard
                .get(&rol.id)
                .cloned()
                .ok_or_else(|| ServiceError::invalid_reference("Rol", rol.id))?;
            user.rol = Some(resolved);
        }
        Ok(user)
    }
}

impl Default for InMemoryUserService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let service = InMemoryUserService::new();
        assert_eq!(service.next_id(), 1);
        assert_eq!(service.next_id(), 2);
    }

    #[test]
    fn test_resolve_rol_hydrates_reference() {
        let service = InMemoryUserService::with_roles([Rol::new(3, "VET", "Veterinario")]);
        let user = User::default().with_rol(Rol::reference(3));

        let resolved = service.resolve_rol(user).unwrap();
        let rol = resolved.rol.unwrap();
        assert_eq!(rol.nombre.as_deref(), Some("VET"));
        assert_eq!(rol.descripcion.as_deref(), Some("Veterinario"));
    }

    #[test]
    fn test_resolve_rol_unknown_reference() {
        let service = InMemoryUserService::new();
        let user = User::default().with_rol(Rol::reference(99));

        let err = service.resolve_rol(user).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidReference { .. }));
    }

    #[test]
    fn test_resolve_rol_without_rol() {
        let service = InMemoryUserService::new();
        let resolved = service.resolve_rol(User::default()).unwrap();
        assert!(resolved.rol.is_none());
    }
}
