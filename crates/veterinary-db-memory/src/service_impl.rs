//! Implementation of the UserService trait for InMemoryUserService.

use async_trait::async_trait;
use tracing::{debug, trace};
use veterinary_core::{User, UserId};
use veterinary_storage::{ServiceError, UserService};

use crate::storage::InMemoryUserService;

#[async_trait]
impl UserService for InMemoryUserService {
    async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
        let guard = self.users.pin();
        let mut users: Vec<User> = guard.iter().map(|(_, user)| user.clone()).collect();
        users.sort_by_key(|user| user.id);
        trace!(count = users.len(), "Listed users");
        Ok(users)
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError> {
        Ok(self.users.pin().get(&id).cloned())
    }

    async fn save_user(&self, user: User) -> Result<User, ServiceError> {
        let mut user = self.resolve_rol(user)?;

        // Creation always assigns a fresh id, whatever the caller supplied.
        let id = self.next_id();
        user.id = Some(id);

        self.users.pin().insert(id, user.clone());
        debug!(id, "User saved");
        Ok(user)
    }

    async fn update_user(&self, user: User) -> Result<User, ServiceError> {
        let id = user
            .id
            .ok_or_else(|| ServiceError::invalid_user("Missing id field for update"))?;
        let user = self.resolve_rol(user)?;

        // Replaces only an existing entry; a concurrent delete wins.
        self.users
            .pin()
            .update(id, |_| user.clone())
            .ok_or_else(|| ServiceError::not_found("User", id))?;
        debug!(id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), ServiceError> {
        match self.users.pin().remove(&id) {
            Some(_) => {
                debug!(id, "User deleted");
                Ok(())
            }
            None => Err(ServiceError::not_found("User", id)),
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veterinary_core::Rol;

    fn service() -> InMemoryUserService {
        InMemoryUserService::with_roles([
            Rol::new(1, "ADMIN", "Administrador"),
            Rol::new(3, "VET", "Veterinario"),
        ])
    }

    fn named(nombre: &str) -> User {
        User {
            nombre: Some(nombre.to_string()),
            activo: Some(true),
            ..User::default()
        }
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_reads_back() {
        let service = service();
        let saved = service
            .save_user(named("Ana").with_rol(Rol::reference(3)))
            .await
            .unwrap();

        let id = saved.id.expect("id assigned");
        let found = service.find_user_by_id(id).await.unwrap().unwrap();
        assert_eq!(found, saved);
        assert_eq!(found.rol.unwrap().nombre.as_deref(), Some("VET"));
    }

    #[tokio::test]
    async fn test_save_ignores_supplied_id() {
        let service = service();
        let saved = service.save_user(named("Ana").with_id(500)).await.unwrap();
        assert_eq!(saved.id, Some(1));
    }

    #[tokio::test]
    async fn test_save_with_unknown_rol_fails() {
        let service = service();
        let err = service
            .save_user(named("Ana").with_rol(Rol::reference(42)))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidReference { .. }));
        assert!(service.is_empty());
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let service = service();
        for nombre in ["Ana", "Bruno", "Carla"] {
            service.save_user(named(nombre)).await.unwrap();
        }

        let users = service.find_all().await.unwrap();
        let ids: Vec<_> = users.iter().map(|u| u.id.unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(users[1].nombre.as_deref(), Some("Bruno"));
    }

    #[tokio::test]
    async fn test_find_missing_user_is_none() {
        let service = service();
        assert!(service.find_user_by_id(77).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_user() {
        let service = service();
        let saved = service.save_user(named("Ana")).await.unwrap();

        let mut changed = saved.clone();
        changed.email = Some("ana@vet.cl".to_string());
        let updated = service.update_user(changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        let found = service.find_user_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.email.as_deref(), Some("ana@vet.cl"));
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let service = service();
        let err = service.update_user(named("Ana").with_id(9)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_without_id() {
        let service = service();
        let err = service.update_user(named("Ana")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidUser { .. }));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let service = service();
        let saved = service.save_user(named("Ana")).await.unwrap();
        let id = saved.id.unwrap();

        service.delete_user(id).await.unwrap();
        assert!(service.find_user_by_id(id).await.unwrap().is_none());
        assert!(service.delete_user(id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_update_after_delete_does_not_restore_user() {
        let service = service();
        let saved = service.save_user(named("Ana")).await.unwrap();
        service.delete_user(saved.id.unwrap()).await.unwrap();

        let err = service.update_user(saved).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(service.is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_update_and_delete() {
        let service = std::sync::Arc::new(service());

        for _ in 0..200 {
            let saved = service.save_user(named("Ana")).await.unwrap();
            let id = saved.id.unwrap();

            let updater = {
                let service = service.clone();
                tokio::spawn(async move { service.update_user(saved).await })
            };
            let deleter = {
                let service = service.clone();
                tokio::spawn(async move { service.delete_user(id).await })
            };

            let _ = updater.await.unwrap();
            let deleted = deleter.await.unwrap();

            if deleted.is_ok() {
                assert!(service.find_user_by_id(id).await.unwrap().is_none());
            }
        }
    }

    #[test]
    fn test_backend_name() {
        assert_eq!(InMemoryUserService::new().backend_name(), "memory");
    }
}
