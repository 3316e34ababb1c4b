//! Permission repository
//!
//! The `modules`, `permissions` and `user_permissions` tables are not part of
//! the migrations; they are created and seeded on demand by [`PermissionRepository::bootstrap`].

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    constants::{actions, modules, roles},
    db::table_exists,
    error::AppResult,
    models::{BootstrapCounts, GrantedPermission, Module, UserPermission},
};

/// Repository for modules, permissions and per-user grants
pub struct PermissionRepository;

impl PermissionRepository {
    /// Whether the permission tables have been created
    pub async fn tables_exist(pool: &PgPool) -> AppResult<bool> {
        Ok(table_exists(pool, "modules").await?)
    }

    /// Bootstrap the permission tables when they are missing.
    ///
    /// Returns `true` if a bootstrap ran.
    pub async fn ensure_tables(pool: &PgPool) -> AppResult<bool> {
        if Self::tables_exist(pool).await? {
            return Ok(false);
        }

        Self::bootstrap(pool).await?;
        Ok(true)
    }

    /// Create the tables if missing, seed modules with their three actions and
    /// grant the built-in role defaults to existing users. Idempotent.
    pub async fn bootstrap(pool: &PgPool) -> AppResult<BootstrapCounts> {
        let mut tx = pool.begin().await?;

        Self::create_tables(&mut tx).await?;
        Self::seed_modules(&mut tx).await?;
        Self::grant_role_defaults(&mut tx).await?;

        tx.commit().await?;

        Self::counts(pool).await
    }

    async fn create_tables(tx: &mut Transaction<'_, Postgres>) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS modules (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                name VARCHAR(255) NOT NULL UNIQUE,
                description TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&mut **tx)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS permissions (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                module_id UUID NOT NULL REFERENCES modules(id) ON DELETE CASCADE,
                name VARCHAR(255) NOT NULL,
                description TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                UNIQUE (module_id, name)
            )
            "#,
        )
        .execute(&mut **tx)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_permissions (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                permission_id UUID NOT NULL REFERENCES permissions(id) ON DELETE CASCADE,
                granted_by UUID REFERENCES users(id) ON DELETE SET NULL,
                granted_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                UNIQUE (user_id, permission_id)
            )
            "#,
        )
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    async fn seed_modules(tx: &mut Transaction<'_, Postgres>) -> AppResult<()> {
        for (name, description) in modules::SEED {
            sqlx::query(
                r#"
                INSERT INTO modules (name, description)
                VALUES ($1, $2)
                ON CONFLICT (name) DO NOTHING
                "#,
            )
            .bind(name)
            .bind(description)
            .execute(&mut **tx)
            .await?;

            for action in actions::ALL {
                let description = if *action == actions::DELETE {
                    format!("Permission to delete items in {}", name)
                } else {
                    format!("Permission to {} {}", action, name)
                };

                sqlx::query(
                    r#"
                    INSERT INTO permissions (module_id, name, description)
                    SELECT m.id, $2, $3 FROM modules m WHERE m.name = $1
                    ON CONFLICT (module_id, name) DO NOTHING
                    "#,
                )
                .bind(name)
                .bind(action)
                .bind(description)
                .execute(&mut **tx)
                .await?;
            }
        }

        Ok(())
    }

    async fn grant_role_defaults(tx: &mut Transaction<'_, Postgres>) -> AppResult<()> {
        // admin: everything
        sqlx::query(
            r#"
            INSERT INTO user_permissions (user_id, permission_id)
            SELECT u.id, p.id
            FROM users u
            LEFT JOIN roles r ON r.id = u.role_id
            CROSS JOIN permissions p
            WHERE COALESCE(r.name, u.role) = $1
            ON CONFLICT (user_id, permission_id) DO NOTHING
            "#,
        )
        .bind(roles::ADMIN)
        .execute(&mut **tx)
        .await?;

        let defaults: [(&str, &[&str], &[&str]); 2] = [
            (
                roles::VIEWER,
                &[modules::DASHBOARD, modules::COMMISSION_REPORT],
                &[actions::VIEW],
            ),
            (
                roles::DATA_ENTRY,
                &[modules::SALES_UPLOAD],
                &[actions::VIEW, actions::EDIT],
            ),
        ];

        for (role, module_names, action_names) in defaults {
            sqlx::query(
                r#"
                INSERT INTO user_permissions (user_id, permission_id)
                SELECT u.id, p.id
                FROM users u
                LEFT JOIN roles r ON r.id = u.role_id
                CROSS JOIN permissions p
                JOIN modules m ON m.id = p.module_id
                WHERE COALESCE(r.name, u.role) = $1
                  AND m.name = ANY($2)
                  AND p.name = ANY($3)
                ON CONFLICT (user_id, permission_id) DO NOTHING
                "#,
            )
            .bind(role)
            .bind(module_names)
            .bind(action_names)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    /// Row counts of the three permission tables
    pub async fn counts(pool: &PgPool) -> AppResult<BootstrapCounts> {
        let (modules, permissions, user_permissions): (i64, i64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM modules),
                (SELECT COUNT(*) FROM permissions),
                (SELECT COUNT(*) FROM user_permissions)
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(BootstrapCounts {
            modules,
            permissions,
            user_permissions,
        })
    }

    /// Whether a grant joins `user_id` to `module`.`action`
    pub async fn user_has_permission(
        pool: &PgPool,
        user_id: &Uuid,
        module: &str,
        action: &str,
    ) -> AppResult<bool> {
        let granted: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM user_permissions up
                JOIN permissions p ON p.id = up.permission_id
                JOIN modules m ON m.id = p.module_id
                WHERE up.user_id = $1 AND m.name = $2 AND p.name = $3
            )
            "#,
        )
        .bind(user_id)
        .bind(module)
        .bind(action)
        .fetch_one(pool)
        .await?;

        Ok(granted)
    }

    /// Module/action pairs granted to a user
    pub async fn granted_for_user(
        pool: &PgPool,
        user_id: &Uuid,
    ) -> AppResult<Vec<GrantedPermission>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT m.name, p.name
            FROM user_permissions up
            JOIN permissions p ON p.id = up.permission_id
            JOIN modules m ON m.id = p.module_id
            WHERE up.user_id = $1
            ORDER BY m.name, p.name
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(module, permission)| GrantedPermission { module, permission })
            .collect())
    }

    /// Every grant as `(user_id, module, action)`
    pub async fn all_grants(pool: &PgPool) -> AppResult<Vec<(Uuid, String, String)>> {
        let rows = sqlx::query_as::<_, (Uuid, String, String)>(
            r#"
            SELECT up.user_id, m.name, p.name
            FROM user_permissions up
            JOIN permissions p ON p.id = up.permission_id
            JOIN modules m ON m.id = p.module_id
            ORDER BY up.user_id, m.name, p.name
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    /// Every permission with whether it is granted to `user_id`
    pub async fn for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<UserPermission>> {
        let permissions = sqlx::query_as::<_, UserPermission>(
            r#"
            SELECT p.id, p.module_id, m.name AS module_name, p.name, p.description,
                   (up.id IS NOT NULL) AS granted
            FROM permissions p
            JOIN modules m ON m.id = p.module_id
            LEFT JOIN user_permissions up
                ON up.permission_id = p.id AND up.user_id = $1
            ORDER BY m.name, p.name
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(permissions)
    }

    /// Modules ordered by name
    pub async fn list_modules(pool: &PgPool) -> AppResult<Vec<Module>> {
        let modules = sqlx::query_as::<_, Module>(
            r#"SELECT id, name, description FROM modules ORDER BY name ASC"#,
        )
        .fetch_all(pool)
        .await?;

        Ok(modules)
    }

    /// Whether a permission row exists
    pub async fn permission_exists(pool: &PgPool, permission_id: &Uuid) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar(r#"SELECT EXISTS (SELECT 1 FROM permissions WHERE id = $1)"#)
                .bind(permission_id)
                .fetch_one(pool)
                .await?;

        Ok(exists)
    }

    /// Grant a permission; granting twice is a no-op
    pub async fn grant(
        pool: &PgPool,
        user_id: &Uuid,
        permission_id: &Uuid,
        granted_by: &Uuid,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO user_permissions (user_id, permission_id, granted_by)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, permission_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(permission_id)
        .bind(granted_by)
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Revoke a permission; revoking a missing grant is a no-op
    pub async fn revoke(pool: &PgPool, user_id: &Uuid, permission_id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM user_permissions WHERE user_id = $1 AND permission_id = $2"#)
            .bind(user_id)
            .bind(permission_id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
