use crate::domain::view::{PreviewMode, ViewState};
use crate::domain::ListingRecord;
use crate::errors::{ResultResp, ServerError, ServiceError};
use crate::responses::{html_response, html_response_with_status, json_response, text_response};
use crate::service::ListingService;
use crate::share;
use crate::templates::pages::{form_page, property_page};
use astra::Request;
use serde_json::json;
use std::io::Read;
use url::{form_urlencoded, Url};

/// Largest form body accepted.
pub(crate) const MAX_FORM_BYTES: u64 = 256 * 1024;

/// Everything a request handler needs.
pub struct App {
    pub service: ListingService,
    /// Public location of the page; share links are built from it.
    pub public_url: Url,
}

impl App {
    pub fn new(service: ListingService, public_url: Url) -> Self {
        Self {
            service,
            public_url,
        }
    }

    /// The location the current request stands for, as the browser sees it.
    fn current_page(&self, req: &Request) -> Url {
        let mut page = self.public_url.clone();
        page.set_query(req.uri().query());
        page
    }
}

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    tracing::debug!(%method, %path, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => show_page(&req, app),
        ("POST", "/listings") => save_listing(req, app),
        ("POST", "/edit") => edit_listing(req),
        ("GET", "/api/listing") => api_listing(&req, app),
        ("GET", "/health") => text_response(200, "ok"),
        _ => Err(ServerError::NotFound),
    }
}

/// `GET /`: the empty form, or the shared preview when `?p=` is present.
fn show_page(req: &Request, app: &App) -> ResultResp {
    let page = app.current_page(req);

    let Some(raw_id) = share::identifier_param(&page) else {
        let state = ViewState::initial(false);
        return render_form(state, &ListingRecord::default(), 200);
    };

    let outcome = app.service.resolve(&raw_id, &page);
    let state = ViewState::initial(true).on_resolved(&outcome);

    match outcome {
        Ok(resolved) => render_preview(state, &resolved.record, &resolved.share_url),
        Err(err) => render_form(state, &ListingRecord::default(), status_for(&err)),
    }
}

/// `POST /listings`: save the submitted form and show the creator preview.
fn save_listing(req: Request, app: &App) -> ResultResp {
    let body = read_body(req)?;
    let record = ListingRecord::from_form(form_urlencoded::parse(&body));

    let outcome = app.service.save_and_share(&record, &app.public_url);
    let state = ViewState::initial(false).on_saved(&outcome);

    match outcome {
        Ok(reference) => render_preview(state, &record, &reference.url),
        Err(err) => render_form(state, &record, status_for(&err)),
    }
}

/// `POST /edit`: back from the creator preview to a pre-filled form.
fn edit_listing(req: Request) -> ResultResp {
    let body = read_body(req)?;
    let payload = form_urlencoded::parse(&body)
        .find(|(key, _)| key == "record")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| ServerError::BadRequest("missing record".into()))?;

    let record: ListingRecord = serde_json::from_str(&payload)
        .map_err(|e| ServerError::BadRequest(format!("invalid record: {e}")))?;

    let state = ViewState::Preview {
        mode: PreviewMode::Creator,
    }
    .request_edit();
    render_form(state, &record, 200)
}

/// `GET /api/listing?p=ID`: the resolved listing as JSON.
fn api_listing(req: &Request, app: &App) -> ResultResp {
    let page = app.current_page(req);
    let Some(raw_id) = share::identifier_param(&page) else {
        return json_response(400, &json!({ "error": "missing identifier" }));
    };

    match app.service.resolve(&raw_id, &page) {
        Ok(resolved) => json_response(200, &resolved),
        Err(err) => json_response(status_for(&err), &json!({ "error": err.to_string() })),
    }
}

fn render_form(state: ViewState, record: &ListingRecord, status: u16) -> ResultResp {
    match state {
        ViewState::Form { notice } => {
            html_response_with_status(status, form_page(record, notice.as_ref()))
        }
        other => {
            tracing::error!(state = ?other, "expected form state");
            Err(ServerError::InternalError)
        }
    }
}

fn render_preview(state: ViewState, record: &ListingRecord, share_url: &Url) -> ResultResp {
    match state {
        ViewState::Preview { mode } => html_response(property_page(record, mode, share_url)),
        other => {
            tracing::error!(state = ?other, "expected preview state");
            Err(ServerError::InternalError)
        }
    }
}

fn status_for(err: &ServiceError) -> u16 {
    match err {
        ServiceError::Invalid(_) => 422,
        ServiceError::NotFound => 404,
        ServiceError::SaveFailed(_) | ServiceError::LoadFailed(_) => 502,
    }
}

/// Reads the whole form body. Bodies over `MAX_FORM_BYTES` are rejected
/// rather than cut short.
fn read_body(req: Request) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("reading body failed: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        tracing::warn!(limit = MAX_FORM_BYTES, "form body too large");
        return Err(ServerError::BadRequest(format!(
            "form body exceeds {MAX_FORM_BYTES} bytes"
        )));
    }
    Ok(body)
}
