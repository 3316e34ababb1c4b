//! Report handler implementations

use axum::{
    extract::{Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
    Json,
};

use crate::{
    constants::{actions, modules},
    error::AppResult,
    middleware::auth::AuthenticatedUser,
    models::{ClientCommission, DashboardSummary, MonthlyTrends, ReportFilter},
    services::{PermissionService, ReportService},
    state::AppState,
    utils::today,
};

use super::request::ReportQuery;

/// Headline totals
pub async fn dashboard(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<DashboardSummary>> {
    PermissionService::require(&state, &auth_user, modules::DASHBOARD, actions::VIEW).await?;

    let filter = resolve(&state, query)?;
    let default_rate = state.config().reporting.default_exchange_rate;
    Ok(Json(
        ReportService::dashboard(state.db(), &filter, default_rate).await?,
    ))
}

/// Monthly chart series
pub async fn trends(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<MonthlyTrends>> {
    PermissionService::require(&state, &auth_user, modules::DASHBOARD, actions::VIEW).await?;

    let filter = resolve(&state, query)?;
    Ok(Json(ReportService::monthly_trends(state.db(), &filter).await?))
}

/// Commission report grouped by client
pub async fn commission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<Vec<ClientCommission>>> {
    PermissionService::require(&state, &auth_user, modules::COMMISSION_REPORT, actions::VIEW)
        .await?;

    let filter = resolve(&state, query)?;
    Ok(Json(
        ReportService::commission_report(state.db(), &filter).await?,
    ))
}

/// Commission report as a CSV download
pub async fn commission_csv(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Query(query): Query<ReportQuery>,
) -> AppResult<impl IntoResponse> {
    PermissionService::require(&state, &auth_user, modules::COMMISSION_REPORT, actions::VIEW)
        .await?;

    let filter = resolve(&state, query)?;
    let body = ReportService::commission_csv(state.db(), &filter).await?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (CONTENT_DISPOSITION, attachment_header(&today().to_string())),
        ],
        body,
    ))
}

fn resolve(state: &AppState, query: ReportQuery) -> AppResult<ReportFilter> {
    query.into_filter(today(), state.config().reporting.default_range_days)
}

fn attachment_header(date: &str) -> String {
    format!("attachment; filename=\"commission-report-{}.csv\"", date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_header() {
        assert_eq!(
            attachment_header("2024-06-30"),
            "attachment; filename=\"commission-report-2024-06-30.csv\""
        );
    }
}
