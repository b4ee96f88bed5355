use crate::config::{Config, QueryParams};
use crate::domain::availability::collect_plans;
use crate::domain::calendar::{format_ymd, parse_ymd};
use crate::errors::ServerError;
use crate::loader::Loader;
use crate::responses::{css_response, html_response, json_error_response, json_response, ResultResp};
use crate::state::{Action, AppState};
use crate::templates::{self, Links};
use astra::Request;
use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::{debug, error, warn};

const STYLESHEET: &str = include_str!("../static/calendar.css");

/// Where "today" comes from.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

/// Shared, read-only handles every request works from.
pub struct AppContext {
    pub config: Config,
    pub loader: Loader,
    pub clock: Clock,
}

pub fn handle(req: Request, ctx: &AppContext) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let params = parse_query(&req);

    match (method, path) {
        ("GET", "/") => dashboard(&params, ctx),
        ("GET", "/plans") => plans_fragment(&params, ctx),
        ("GET", "/api/plans") => api_plans(&params, ctx).or_else(|e| Ok(json_error_response(e))),
        ("GET", "/api/hotels") => api_hotels(&params, ctx).or_else(|e| Ok(json_error_response(e))),
        ("GET", "/static/calendar.css") => css_response(STYLESHEET),
        _ => Err(ServerError::NotFound),
    }
}

/// Runs one load and builds the state, with the selection moved by
/// the `date` (a day or `today`) and `step` parameters when they land
/// inside the range.
fn load_state(params: &QueryParams, ctx: &AppContext) -> Result<AppState, ServerError> {
    let urls = ctx.config.source_urls(params);

    let docs = ctx.loader.load(&urls).map_err(|e| {
        error!("❌ Data load failed: {e}");
        ServerError::Load(e)
    })?;

    let mut state = AppState::new(docs, ctx.clock.today(), ctx.config.months_ahead);

    debug!(
        "{} hotels from registry ({:?}), {} in vacancy table",
        state.hotels.len(),
        state.shape,
        state.vacancy.hotel_count()
    );

    match params.get("date").map(String::as_str) {
        None => {}
        Some("today") => {
            state.apply(Action::Today);
        }
        Some(raw) => match parse_ymd(raw) {
            Some(date) if state.apply(Action::Select(date)) => {}
            _ => warn!("Ignoring date={raw:?}, keeping {}", format_ymd(state.selected())),
        },
    }

    if let Some(delta) = params.get("step").and_then(|s| s.parse::<i64>().ok()) {
        state.apply(Action::Step(delta));
    }

    Ok(state)
}

fn dashboard(params: &QueryParams, ctx: &AppContext) -> ResultResp {
    let links = Links::new(ctx.config.source_overrides(params));

    let state = match load_state(params, ctx) {
        Ok(state) => state,
        Err(ServerError::Load(_)) => return Ok(templates::load_failed_response(&links)),
        Err(e) => return Err(e),
    };

    html_response(templates::pages::dashboard_page(&state.view(), &links))
}

fn plans_fragment(params: &QueryParams, ctx: &AppContext) -> ResultResp {
    let state = load_state(params, ctx)?;
    let selected = format_ymd(state.selected());

    html_response(templates::plans_list(&selected, &state.plans_for_selected()))
}

fn api_plans(params: &QueryParams, ctx: &AppContext) -> ResultResp {
    let date = match params.get("date") {
        Some(raw) => parse_ymd(raw)
            .ok_or_else(|| ServerError::BadRequest(format!("invalid date {raw:?}, expected YYYY-MM-DD")))?,
        None => ctx.clock.today(),
    };

    let state = load_state(&without_date(params), ctx)?;
    let ymd = format_ymd(date);
    let hotels = collect_plans(&state.hotels, &state.vacancy, &ymd);

    json_response(&json!({ "date": ymd, "hotels": hotels }))
}

fn api_hotels(params: &QueryParams, ctx: &AppContext) -> ResultResp {
    let state = load_state(params, ctx)?;
    json_response(&json!({ "shape": state.shape, "hotels": state.hotels }))
}

fn without_date(params: &QueryParams) -> QueryParams {
    params
        .iter()
        .filter(|(k, _)| k.as_str() != "date" && k.as_str() != "step")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

fn parse_query(req: &Request) -> QueryParams {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
