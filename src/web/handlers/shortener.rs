//! Creation view: the multi-row shortening form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
};

use crate::application::services::link_service::BATCH_SUCCESS_MESSAGE;
use crate::application::services::{CreationOutcome, CreationRequest, MAX_BATCH_SIZE};
use crate::domain::activity_log::LogEntry;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::short_link::short_url;

use super::LOG_PANEL_LIMIT;

/// One editable row of the form, holding exactly what the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRow {
    pub url: String,
    pub validity: String,
    pub code: String,
}

impl From<FormRow> for CreationRequest {
    fn from(row: FormRow) -> Self {
        CreationRequest {
            original_url: row.url,
            validity_minutes: Some(row.validity).filter(|v| !v.trim().is_empty()),
            custom_code: Some(row.code).filter(|c| !c.trim().is_empty()),
        }
    }
}

/// Button pressed to submit the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Add,
    Remove(usize),
    Shorten,
}

impl FormAction {
    fn parse(value: &str) -> Self {
        match value {
            "add" => Self::Add,
            other => other
                .strip_prefix("remove:")
                .and_then(|index| index.parse().ok())
                .map_or(Self::Shorten, Self::Remove),
        }
    }
}

/// A short link shown under the form after a shorten.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub short_url: String,
    pub original_url: String,
    pub expires_at: String,
}

impl CreatedLink {
    fn new(origin: &str, outcome: &CreationOutcome) -> Self {
        Self {
            short_url: short_url(origin, &outcome.code),
            original_url: outcome.original_url.clone(),
            expires_at: outcome.expires_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "shortener.html")]
pub struct ShortenerTemplate {
    pub rows: Vec<FormRow>,
    pub max_rows: usize,
    pub alert: String,
    /// `success` or `error`; styles the alert box.
    pub alert_kind: &'static str,
    pub created: Vec<CreatedLink>,
    pub logs: Vec<LogEntry>,
}

impl ShortenerTemplate {
    /// The form with one empty row and no message.
    pub fn blank(logs: Vec<LogEntry>) -> Self {
        Self::with_rows(vec![FormRow::default()], logs)
    }

    fn with_rows(rows: Vec<FormRow>, logs: Vec<LogEntry>) -> Self {
        Self {
            rows,
            max_rows: MAX_BATCH_SIZE,
            alert: String::new(),
            alert_kind: "success",
            created: Vec::new(),
            logs,
        }
    }

    /// The blank form carrying an error, as shown after a failed redirect.
    pub fn with_error(error: &AppError, logs: Vec<LogEntry>) -> Self {
        let mut page = Self::blank(logs);
        page.alert = error.to_string();
        page.alert_kind = "error";
        page
    }
}

/// Renders the creation view.
///
/// # Endpoint
///
/// `GET /`
pub async fn shortener_page_handler(State(state): State<AppState>) -> impl IntoResponse {
    ShortenerTemplate::blank(state.activity_log.recent(LOG_PANEL_LIMIT))
}

/// Handles the creation form.
///
/// # Endpoint
///
/// `POST /`
///
/// # Form Fields
///
/// Repeated `url`, `validity` and `code` fields, one of each per row in order, and
/// an `action`:
///
/// - `add` - append an empty row, unless the form already has the maximum
/// - `remove:<index>` - drop a row; the last remaining row is kept
/// - `shorten` - submit every row
///
/// After a successful shorten the form resets to a single empty row. After a
/// failure the rows are kept and the last error is shown with its HTTP status.
pub async fn shortener_submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response {
    let (mut rows, action) = parse_form(fields);

    match action {
        FormAction::Add => {
            if rows.len() < MAX_BATCH_SIZE {
                rows.push(FormRow::default());
            }
            let logs = state.activity_log.recent(LOG_PANEL_LIMIT);
            ShortenerTemplate::with_rows(rows, logs).into_response()
        }
        FormAction::Remove(index) => {
            if rows.len() > 1 && index < rows.len() {
                rows.remove(index);
            }
            let logs = state.activity_log.recent(LOG_PANEL_LIMIT);
            ShortenerTemplate::with_rows(rows, logs).into_response()
        }
        FormAction::Shorten => shorten_rows(&state, &headers, rows).await,
    }
}

async fn shorten_rows(state: &AppState, headers: &HeaderMap, rows: Vec<FormRow>) -> Response {
    let origin = state.origin(headers);
    let requests = rows.iter().cloned().map(CreationRequest::from).collect();

    match state.link_service.submit(requests).await {
        Ok(created) => {
            let logs = state.activity_log.recent(LOG_PANEL_LIMIT);
            let mut page = ShortenerTemplate::blank(logs);
            page.alert = BATCH_SUCCESS_MESSAGE.to_string();
            page.created = created
                .iter()
                .map(|outcome| CreatedLink::new(&origin, outcome))
                .collect();

            page.into_response()
        }
        Err(failure) => {
            let logs = state.activity_log.recent(LOG_PANEL_LIMIT);
            let mut page = ShortenerTemplate::with_rows(rows, logs);
            page.alert = failure.error.to_string();
            page.alert_kind = "error";
            page.created = failure
                .committed()
                .map(|outcome| CreatedLink::new(&origin, outcome))
                .collect();

            (failure.error.status_code(), page).into_response()
        }
    }
}

/// Rebuilds the rows from repeated fields and extracts the pressed button.
///
/// The n-th `url`, `validity` and `code` values form row n. Missing values are
/// empty strings and an empty form yields a single empty row.
fn parse_form(fields: Vec<(String, String)>) -> (Vec<FormRow>, FormAction) {
    let mut urls = Vec::new();
    let mut validities = Vec::new();
    let mut codes = Vec::new();
    let mut action = FormAction::Shorten;

    for (name, value) in fields {
        match name.as_str() {
            "url" => urls.push(value),
            "validity" => validities.push(value),
            "code" => codes.push(value),
            "action" => action = FormAction::parse(&value),
            _ => {}
        }
    }

    let count = urls.len().max(validities.len()).max(codes.len()).max(1);
    let mut urls = urls.into_iter();
    let mut validities = validities.into_iter();
    let mut codes = codes.into_iter();

    let rows = (0..count)
        .map(|_| FormRow {
            url: urls.next().unwrap_or_default(),
            validity: validities.next().unwrap_or_default(),
            code: codes.next().unwrap_or_default(),
        })
        .collect();

    (rows, action)
}
