//! Permission models and the built-in role table

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::{actions, modules, roles};

/// Functional area that permissions are granted on
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Module {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

/// A permission as seen for one user, with whether it is granted
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserPermission {
    pub id: Uuid,
    pub module_id: Uuid,
    pub module_name: String,
    pub name: String,
    pub description: Option<String>,
    pub granted: bool,
}

/// Granted module/action pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrantedPermission {
    pub module: String,
    pub permission: String,
}

impl GrantedPermission {
    pub fn new(module: &str, permission: &str) -> Self {
        Self {
            module: module.to_string(),
            permission: permission.to_string(),
        }
    }
}

/// Row counts after a permission bootstrap
#[derive(Debug, Clone, Default, Serialize)]
pub struct BootstrapCounts {
    pub modules: i64,
    pub permissions: i64,
    pub user_permissions: i64,
}

/// Static grants of the built-in roles, used when the permission tables
/// cannot be consulted.
///
/// admin: every action on every module; viewer: view on dashboard and
/// commission_report; dataentry: view and edit on sales_upload.
pub fn role_allows(role: &str, module: &str, action: &str) -> bool {
    match role {
        roles::ADMIN => true,
        roles::VIEWER => {
            action == actions::VIEW
                && (module == modules::DASHBOARD || module == modules::COMMISSION_REPORT)
        }
        roles::DATA_ENTRY => {
            (action == actions::VIEW || action == actions::EDIT) && module == modules::SALES_UPLOAD
        }
        _ => false,
    }
}

/// Every module/action pair the built-in role table grants to `role`
pub fn role_grants(role: &str) -> Vec<GrantedPermission> {
    modules::ALL
        .iter()
        .flat_map(|module| actions::ALL.iter().map(move |action| (*module, *action)))
        .filter(|(module, action)| role_allows(role, module, action))
        .map(|(module, action)| GrantedPermission::new(module, action))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_allows_everything() {
        for module in modules::ALL {
            for action in actions::ALL {
                assert!(role_allows(roles::ADMIN, module, action));
            }
        }
        assert_eq!(role_grants(roles::ADMIN).len(), 27);
    }

    #[test]
    fn test_viewer_grants() {
        assert!(role_allows(roles::VIEWER, modules::DASHBOARD, actions::VIEW));
        assert!(role_allows(roles::VIEWER, modules::COMMISSION_REPORT, actions::VIEW));
        assert!(!role_allows(roles::VIEWER, modules::DASHBOARD, actions::EDIT));
        assert!(!role_allows(roles::VIEWER, modules::CLIENTS, actions::VIEW));

        assert_eq!(
            role_grants(roles::VIEWER),
            vec![
                GrantedPermission::new(modules::DASHBOARD, actions::VIEW),
                GrantedPermission::new(modules::COMMISSION_REPORT, actions::VIEW),
            ]
        );
    }

    #[test]
    fn test_data_entry_grants() {
        assert!(role_allows(roles::DATA_ENTRY, modules::SALES_UPLOAD, actions::VIEW));
        assert!(role_allows(roles::DATA_ENTRY, modules::SALES_UPLOAD, actions::EDIT));
        assert!(!role_allows(roles::DATA_ENTRY, modules::SALES_UPLOAD, actions::DELETE));
        assert!(!role_allows(roles::DATA_ENTRY, modules::DASHBOARD, actions::VIEW));
        assert_eq!(role_grants(roles::DATA_ENTRY).len(), 2);
    }

    #[test]
    fn test_unknown_role_gets_nothing() {
        assert!(role_grants("auditor").is_empty());
        assert!(!role_allows("", modules::DASHBOARD, actions::VIEW));
    }
}
