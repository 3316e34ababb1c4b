//! Permission request DTOs

use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Query of `GET /permissions/check`
///
/// `user_id` is kept as text so a malformed id is reported as an API error.
#[derive(Debug, Default, Deserialize)]
pub struct CheckPermissionQuery {
    pub user_id: Option<String>,
    pub module: Option<String>,
    /// Action to check, `view` when absent
    pub permission: Option<String>,
}

impl CheckPermissionQuery {
    /// Parsed `user_id`; blank counts as absent
    pub fn user_id(&self) -> AppResult<Option<Uuid>> {
        self.user_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| {
                Uuid::parse_str(v)
                    .map_err(|_| AppError::InvalidInput("Invalid user_id".to_string()))
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use tokio_test::{assert_err, assert_ok};

    use super::*;

    fn query(user_id: Option<&str>) -> CheckPermissionQuery {
        CheckPermissionQuery {
            user_id: user_id.map(str::to_string),
            module: Some("sales".to_string()),
            permission: None,
        }
    }

    #[test]
    fn test_user_id_parsed() {
        let id = Uuid::new_v4();
        let text = id.to_string();

        assert_eq!(assert_ok!(query(Some(&text)).user_id()), Some(id));
        assert_eq!(assert_ok!(query(None).user_id()), None);
        assert_eq!(assert_ok!(query(Some("  ")).user_id()), None);
    }

    #[test]
    fn test_malformed_user_id_rejected() {
        let err = assert_err!(query(Some("not-a-uuid")).user_id());
        assert!(matches!(err, AppError::InvalidInput(ref msg) if msg == "Invalid user_id"));
    }
}
