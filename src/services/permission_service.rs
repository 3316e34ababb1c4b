//! Permission resolution
//!
//! Answers whether a user may perform an action on a module. The permission
//! tables are consulted when available; the built-in role table is the
//! fallback whenever they cannot be.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    constants::roles,
    db::repositories::{PermissionRepository, UserRepository},
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    models::{role_allows, role_grants, BootstrapCounts, GrantedPermission, Module, UserPermission},
    state::AppState,
};

/// Storage the permission cascade reads from
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Create and seed the permission tables if they are missing
    async fn ensure_tables(&self) -> AppResult<()>;

    /// Effective role of a user, `None` for an unknown user
    async fn user_role(&self, user_id: Uuid) -> AppResult<Option<String>>;

    /// Whether a stored grant gives `user_id` the action on the module
    async fn user_has_grant(&self, user_id: Uuid, module: &str, action: &str) -> AppResult<bool>;

    /// Every stored grant of a user
    async fn granted(&self, user_id: Uuid) -> AppResult<Vec<GrantedPermission>>;
}

/// [`PermissionStore`] backed by PostgreSQL
pub struct PgPermissionStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PgPermissionStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PermissionStore for PgPermissionStore<'_> {
    async fn ensure_tables(&self) -> AppResult<()> {
        if PermissionRepository::ensure_tables(self.pool).await? {
            warn!("Permission tables were missing and have been bootstrapped");
        }
        Ok(())
    }

    async fn user_role(&self, user_id: Uuid) -> AppResult<Option<String>> {
        Ok(UserRepository::find_by_id(self.pool, &user_id)
            .await?
            .map(|user| user.role))
    }

    async fn user_has_grant(&self, user_id: Uuid, module: &str, action: &str) -> AppResult<bool> {
        PermissionRepository::user_has_permission(self.pool, &user_id, module, action).await
    }

    async fn granted(&self, user_id: Uuid) -> AppResult<Vec<GrantedPermission>> {
        PermissionRepository::granted_for_user(self.pool, &user_id).await
    }
}

/// Answer from the role table alone; an unknown user or failed lookup gets nothing
async fn role_fallback<S>(store: &S, user_id: Uuid, module: &str, action: &str) -> bool
where
    S: PermissionStore + ?Sized,
{
    match store.user_role(user_id).await {
        Ok(Some(role)) => role_allows(&role, module, action),
        Ok(None) => false,
        Err(e) => {
            warn!(%user_id, error = %e, "Role lookup failed, denying");
            false
        }
    }
}

/// Resolve whether `user_id` may perform `action` on `module`
pub async fn has_permission<S>(store: &S, user_id: Uuid, module: &str, action: &str) -> bool
where
    S: PermissionStore + ?Sized,
{
    if let Err(e) = store.ensure_tables().await {
        warn!(error = %e, "Permission tables unavailable, using role table");
        return role_fallback(store, user_id, module, action).await;
    }

    let role = match store.user_role(user_id).await {
        Ok(Some(role)) => role,
        Ok(None) => return false,
        Err(e) => {
            warn!(%user_id, error = %e, "Role lookup failed, denying");
            return false;
        }
    };

    if role == roles::ADMIN {
        return true;
    }

    match store.user_has_grant(user_id, module, action).await {
        Ok(granted) => granted,
        Err(e) => {
            warn!(%user_id, module, action, error = %e, "Permission query failed, using role table");
            role_allows(&role, module, action)
        }
    }
}

/// Every module/action pair granted to `user_id`, resolved like [`has_permission`]
pub async fn granted_permissions<S>(store: &S, user_id: Uuid) -> Vec<GrantedPermission>
where
    S: PermissionStore + ?Sized,
{
    let role = match store.user_role(user_id).await {
        Ok(Some(role)) => role,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(%user_id, error = %e, "Role lookup failed, no permissions");
            return Vec::new();
        }
    };

    if let Err(e) = store.ensure_tables().await {
        warn!(error = %e, "Permission tables unavailable, using role table");
        return role_grants(&role);
    }

    if role == roles::ADMIN {
        return role_grants(roles::ADMIN);
    }

    match store.granted(user_id).await {
        Ok(granted) => granted,
        Err(e) => {
            warn!(%user_id, error = %e, "Permission query failed, using role table");
            role_grants(&role)
        }
    }
}

/// A user with the permissions they hold
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserWithPermissions {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub permissions: Vec<GrantedPermission>,
}

/// Permission service for the HTTP layer
pub struct PermissionService;

impl PermissionService {
    /// Fail with 403 unless `user` may perform `action` on `module`
    pub async fn require(
        state: &AppState,
        user: &AuthenticatedUser,
        module: &str,
        action: &str,
    ) -> AppResult<()> {
        let store = PgPermissionStore::new(state.db());
        if has_permission(&store, user.id, module, action).await {
            debug!(user_id = %user.id, module, action, "Permission granted");
            Ok(())
        } else {
            debug!(user_id = %user.id, module, action, "Permission denied");
            Err(AppError::missing_permission(module, action))
        }
    }

    /// Whether `user_id` may perform `action` on `module`
    pub async fn check(pool: &PgPool, user_id: Uuid, module: &str, action: &str) -> bool {
        has_permission(&PgPermissionStore::new(pool), user_id, module, action).await
    }

    /// Granted pairs of a user
    pub async fn granted(pool: &PgPool, user_id: Uuid) -> Vec<GrantedPermission> {
        granted_permissions(&PgPermissionStore::new(pool), user_id).await
    }

    /// Modules ordered by name
    pub async fn list_modules(pool: &PgPool) -> AppResult<Vec<Module>> {
        PermissionRepository::ensure_tables(pool).await?;
        PermissionRepository::list_modules(pool).await
    }

    /// Every user with their stored grants
    pub async fn list_users_with_permissions(pool: &PgPool) -> AppResult<Vec<UserWithPermissions>> {
        PermissionRepository::ensure_tables(pool).await?;

        let users = UserRepository::list(pool).await?;
        let mut grants: BTreeMap<Uuid, Vec<GrantedPermission>> = BTreeMap::new();
        for (user_id, module, permission) in PermissionRepository::all_grants(pool).await? {
            grants
                .entry(user_id)
                .or_default()
                .push(GrantedPermission { module, permission });
        }

        Ok(users
            .into_iter()
            .map(|user| UserWithPermissions {
                permissions: grants.remove(&user.id).unwrap_or_default(),
                id: user.id,
                email: user.email,
                role: user.role,
            })
            .collect())
    }

    /// Every permission with whether `user_id` holds it
    pub async fn for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<UserPermission>> {
        UserRepository::find_by_id(pool, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        PermissionRepository::ensure_tables(pool).await?;
        PermissionRepository::for_user(pool, user_id).await
    }

    /// Grant a permission to a user
    pub async fn grant(
        pool: &PgPool,
        user_id: &Uuid,
        permission_id: &Uuid,
        granted_by: &Uuid,
    ) -> AppResult<()> {
        Self::ensure_grant_target(pool, user_id, permission_id).await?;
        PermissionRepository::grant(pool, user_id, permission_id, granted_by).await
    }

    /// Revoke a permission from a user
    pub async fn revoke(pool: &PgPool, user_id: &Uuid, permission_id: &Uuid) -> AppResult<()> {
        Self::ensure_grant_target(pool, user_id, permission_id).await?;
        PermissionRepository::revoke(pool, user_id, permission_id).await
    }

    /// Create and seed the permission tables and grant role defaults
    pub async fn bootstrap(pool: &PgPool) -> AppResult<BootstrapCounts> {
        PermissionRepository::bootstrap(pool).await
    }

    async fn ensure_grant_target(
        pool: &PgPool,
        user_id: &Uuid,
        permission_id: &Uuid,
    ) -> AppResult<()> {
        PermissionRepository::ensure_tables(pool).await?;

        if UserRepository::find_by_id(pool, user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }
        if !PermissionRepository::permission_exists(pool, permission_id).await? {
            return Err(AppError::NotFound("Permission not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{actions, modules};

    fn db_error() -> AppError {
        AppError::Database("connection refused".to_string())
    }

    #[tokio::test]
    async fn test_admin_short_circuits() {
        let mut store = MockPermissionStore::new();
        store.expect_ensure_tables().returning(|| Ok(()));
        store
            .expect_user_role()
            .returning(|_| Ok(Some(roles::ADMIN.to_string())));
        store.expect_user_has_grant().never();

        assert!(has_permission(&store, Uuid::new_v4(), modules::CLIENTS, actions::DELETE).await);
    }

    #[tokio::test]
    async fn test_stored_grant_decides() {
        let mut store = MockPermissionStore::new();
        store.expect_ensure_tables().returning(|| Ok(()));
        store
            .expect_user_role()
            .returning(|_| Ok(Some(roles::VIEWER.to_string())));
        store
            .expect_user_has_grant()
            .times(1)
            .returning(|_, module, _| Ok(module == modules::CLIENTS));

        // Stored grants win over the viewer defaults in both directions
        assert!(has_permission(&store, Uuid::new_v4(), modules::CLIENTS, actions::VIEW).await);

        let mut store = MockPermissionStore::new();
        store.expect_ensure_tables().returning(|| Ok(()));
        store
            .expect_user_role()
            .returning(|_| Ok(Some(roles::VIEWER.to_string())));
        store.expect_user_has_grant().returning(|_, _, _| Ok(false));

        assert!(!has_permission(&store, Uuid::new_v4(), modules::DASHBOARD, actions::VIEW).await);
    }

    #[tokio::test]
    async fn test_query_error_falls_back_to_role_table() {
        let mut store = MockPermissionStore::new();
        store.expect_ensure_tables().returning(|| Ok(()));
        store
            .expect_user_role()
            .returning(|_| Ok(Some(roles::DATA_ENTRY.to_string())));
        store
            .expect_user_has_grant()
            .returning(|_, _, _| Err(db_error()));

        let user_id = Uuid::new_v4();
        assert!(has_permission(&store, user_id, modules::SALES_UPLOAD, actions::EDIT).await);
        assert!(!has_permission(&store, user_id, modules::SALES_UPLOAD, actions::DELETE).await);
    }

    #[tokio::test]
    async fn test_missing_tables_fall_back_to_role_table() {
        let mut store = MockPermissionStore::new();
        store.expect_ensure_tables().returning(|| Err(db_error()));
        store
            .expect_user_role()
            .returning(|_| Ok(Some(roles::VIEWER.to_string())));
        store.expect_user_has_grant().never();

        let user_id = Uuid::new_v4();
        assert!(has_permission(&store, user_id, modules::COMMISSION_REPORT, actions::VIEW).await);
        assert!(!has_permission(&store, user_id, modules::CLIENTS, actions::VIEW).await);
    }

    #[tokio::test]
    async fn test_failed_role_lookup_denies() {
        let mut store = MockPermissionStore::new();
        store.expect_ensure_tables().returning(|| Err(db_error()));
        store.expect_user_role().returning(|_| Err(db_error()));

        assert!(!has_permission(&store, Uuid::new_v4(), modules::DASHBOARD, actions::VIEW).await);
    }

    #[tokio::test]
    async fn test_unknown_user_denied() {
        let mut store = MockPermissionStore::new();
        store.expect_ensure_tables().returning(|| Ok(()));
        store.expect_user_role().returning(|_| Ok(None));
        store.expect_user_has_grant().never();

        assert!(!has_permission(&store, Uuid::new_v4(), modules::DASHBOARD, actions::VIEW).await);
    }

    #[tokio::test]
    async fn test_granted_permissions_fallbacks() {
        let mut store = MockPermissionStore::new();
        store.expect_ensure_tables().returning(|| Ok(()));
        store
            .expect_user_role()
            .returning(|_| Ok(Some(roles::VIEWER.to_string())));
        store.expect_granted().returning(|_| Err(db_error()));

        let granted = granted_permissions(&store, Uuid::new_v4()).await;
        assert_eq!(granted, role_grants(roles::VIEWER));

        let mut store = MockPermissionStore::new();
        store.expect_ensure_tables().returning(|| Ok(()));
        store
            .expect_user_role()
            .returning(|_| Ok(Some("auditor".to_string())));
        store
            .expect_granted()
            .returning(|_| Ok(vec![GrantedPermission::new(modules::BROKERS, actions::VIEW)]));

        let granted = granted_permissions(&store, Uuid::new_v4()).await;
        assert_eq!(granted, vec![GrantedPermission::new(modules::BROKERS, actions::VIEW)]);
    }

    #[tokio::test]
    async fn test_admin_gets_every_pair() {
        let mut store = MockPermissionStore::new();
        store.expect_ensure_tables().returning(|| Ok(()));
        store
            .expect_user_role()
            .returning(|_| Ok(Some(roles::ADMIN.to_string())));
        store.expect_granted().never();

        assert_eq!(granted_permissions(&store, Uuid::new_v4()).await.len(), 27);
    }
}
