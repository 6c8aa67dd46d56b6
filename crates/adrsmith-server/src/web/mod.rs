// ABOUTME: Web UI route handlers serving HTML via Askama templates and HTMX.
// ABOUTME: Provides the generate form, the ADR registry view, and per-file download.

use axum::extract::{Form, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use chrono::{Months, NaiveDate, Utc};
use serde::Deserialize;

use adrsmith_agent::{AdrDrafter, LlmDrafter, OpenAIRuntime, TemplateDrafter};
use adrsmith_core::{
    AdrId, AdrInputs, ApplicationContext, DatabaseContext, InfrastructureContext,
    TradeoffDimension,
};

use crate::app_state::SharedState;

use askama::Template;
use askama_derive_axum::IntoResponse as AskamaIntoResponse;

/// A dropdown entry for one of the three context selects.
pub struct SelectOption {
    pub label: String,
    pub selected: bool,
}

/// A checkbox entry for one trade-off dimension.
pub struct DimOption {
    pub field: String,
    pub label: String,
    pub checked: bool,
}

/// Index page: the input form plus result and registry containers.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub default_availability: String,
    pub default_latency: String,
    pub default_cost_cap: String,
    pub default_review_date: String,
    pub app_options: Vec<SelectOption>,
    pub db_options: Vec<SelectOption>,
    pub infra_options: Vec<SelectOption>,
    pub dims: Vec<DimOption>,
}

/// GET / - Render the main page with form defaults.
pub async fn index() -> IndexTemplate {
    let default_review_date = (Utc::now().date_naive() + Months::new(12))
        .format("%Y-%m-%d")
        .to_string();

    IndexTemplate {
        default_availability: "99.9%".to_string(),
        default_latency: "P95 ≤ 250 ms".to_string(),
        default_cost_cap: "$9k/month".to_string(),
        default_review_date,
        app_options: select_options(ApplicationContext::ALL.iter().map(|c| c.label())),
        db_options: select_options(DatabaseContext::ALL.iter().map(|c| c.label())),
        infra_options: select_options(InfrastructureContext::ALL.iter().map(|c| c.label())),
        dims: TradeoffDimension::ALL
            .iter()
            .map(|d| DimOption {
                field: dim_field(*d).to_string(),
                label: d.label().to_string(),
                checked: matches!(
                    d,
                    TradeoffDimension::Cost
                        | TradeoffDimension::Reliability
                        | TradeoffDimension::Operability
                ),
            })
            .collect(),
    }
}

/// Build dropdown options with the first entry preselected.
fn select_options<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<SelectOption> {
    labels
        .enumerate()
        .map(|(i, label)| SelectOption {
            label: label.to_string(),
            selected: i == 0,
        })
        .collect()
}

/// Form field name for one dimension checkbox.
fn dim_field(dim: TradeoffDimension) -> &'static str {
    match dim {
        TradeoffDimension::Cost => "dim_cost",
        TradeoffDimension::Complexity => "dim_complexity",
        TradeoffDimension::Speed => "dim_speed",
        TradeoffDimension::Reliability => "dim_reliability",
        TradeoffDimension::Security => "dim_security",
        TradeoffDimension::Operability => "dim_operability",
        TradeoffDimension::SkillFit => "dim_skill_fit",
        TradeoffDimension::VendorRisk => "dim_vendor_risk",
    }
}

/// Form data for one generate action. Checkbox fields are present only when
/// ticked, so each dimension is its own optional field.
#[derive(Deserialize)]
pub struct GenerateForm {
    pub availability: String,
    pub latency_target: String,
    pub cost_cap: String,
    pub review_date: String,
    pub application_context: String,
    pub database_context: String,
    pub infrastructure_context: String,
    pub mode: String,
    pub api_key: Option<String>,
    pub dim_cost: Option<String>,
    pub dim_complexity: Option<String>,
    pub dim_speed: Option<String>,
    pub dim_reliability: Option<String>,
    pub dim_security: Option<String>,
    pub dim_operability: Option<String>,
    pub dim_skill_fit: Option<String>,
    pub dim_vendor_risk: Option<String>,
}

impl GenerateForm {
    /// Collect the ticked dimension checkboxes in presentation order.
    fn selected_dimensions(&self) -> Vec<TradeoffDimension> {
        let flags = [
            (self.dim_cost.is_some(), TradeoffDimension::Cost),
            (self.dim_complexity.is_some(), TradeoffDimension::Complexity),
            (self.dim_speed.is_some(), TradeoffDimension::Speed),
            (self.dim_reliability.is_some(), TradeoffDimension::Reliability),
            (self.dim_security.is_some(), TradeoffDimension::Security),
            (self.dim_operability.is_some(), TradeoffDimension::Operability),
            (self.dim_skill_fit.is_some(), TradeoffDimension::SkillFit),
            (self.dim_vendor_risk.is_some(), TradeoffDimension::VendorRisk),
        ];

        flags
            .iter()
            .filter(|(ticked, _)| *ticked)
            .map(|(_, dim)| *dim)
            .collect()
    }
}

/// Helper to build a 400 response carrying a short, fixed message. Raw field
/// values are logged, never echoed into the page.
fn bad_request(msg: &str) -> Box<Response> {
    Box::new(
        (
            StatusCode::BAD_REQUEST,
            Html(format!("<p class=\"error-msg\">{}</p>", msg)),
        )
            .into_response(),
    )
}

/// Parse the submitted form into a validated input set.
fn parse_inputs(form: &GenerateForm) -> Result<AdrInputs, Box<Response>> {
    let review_date =
        NaiveDate::parse_from_str(&form.review_date, "%Y-%m-%d").map_err(|e| {
            tracing::warn!("rejected review date: {}", e);
            bad_request("Invalid review date.")
        })?;

    let application_context = form.application_context.parse().map_err(|e| {
        tracing::warn!("rejected generate input: {}", e);
        bad_request("Unknown application transformation option.")
    })?;

    let database_context = form.database_context.parse().map_err(|e| {
        tracing::warn!("rejected generate input: {}", e);
        bad_request("Unknown database transformation option.")
    })?;

    let infrastructure_context = form.infrastructure_context.parse().map_err(|e| {
        tracing::warn!("rejected generate input: {}", e);
        bad_request("Unknown infrastructure transformation option.")
    })?;

    Ok(AdrInputs {
        availability: form.availability.clone(),
        latency_target: form.latency_target.clone(),
        cost_cap: form.cost_cap.clone(),
        review_date,
        application_context,
        database_context,
        infrastructure_context,
        tradeoff_dimensions: form.selected_dimensions(),
    })
}

/// Rendered ADR partial: shown in the result container after a generate.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "partials/adr_result.html")]
pub struct AdrResultTemplate {
    pub adr_id: String,
    pub file_name: String,
    pub mode_label: String,
    pub html: String,
}

/// POST /web/adrs - Generate an ADR from form data, persist it, return the
/// result partial.
pub async fn generate(
    State(state): State<SharedState>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let inputs = match parse_inputs(&form) {
        Ok(inputs) => inputs,
        Err(resp) => return *resp,
    };

    let adr_id = AdrId::timestamped(Utc::now());

    let drafter: Box<dyn AdrDrafter> = if form.mode == "real" {
        match state.config.resolve_api_key(form.api_key.as_deref()) {
            Some(key) => Box::new(LlmDrafter::new(Box::new(OpenAIRuntime::with_api_key(key)))),
            None => {
                tracing::warn!("real mode requested without a usable credential");
                return Html(
                    "<p class=\"warning-msg\">Provide an API key or use mock mode. Nothing was generated.</p>"
                        .to_string(),
                )
                .into_response();
            }
        }
    } else {
        Box::new(TemplateDrafter)
    };

    let body = match drafter.draft(&inputs, &adr_id).await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!("drafting ADR {} failed: {}", adr_id, e);
            return (
                StatusCode::BAD_GATEWAY,
                Html(format!("<p class=\"error-msg\">Drafting failed: {}</p>", e)),
            )
                .into_response();
        }
    };

    if let Err(e) = state.store.save(&adr_id, &body) {
        tracing::error!("failed to persist ADR {}: {}", adr_id, e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<p class=\"error-msg\">Failed to save the generated ADR.</p>".to_string()),
        )
            .into_response();
    }

    let mode_label = if drafter.mode_name() == "real" {
        "Real LLM Output"
    } else {
        "Mock"
    };

    AdrResultTemplate {
        adr_id: adr_id.to_string(),
        file_name: adr_id.file_name(),
        mode_label: mode_label.to_string(),
        html: markdown_to_html(&body),
    }
    .into_response()
}

/// One registry entry for template rendering.
pub struct AdrView {
    pub adr_id: String,
    pub file_name: String,
    pub html: String,
}

/// Registry partial: all stored ADRs, newest first.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "partials/adr_list.html")]
pub struct AdrListTemplate {
    pub adrs: Vec<AdrView>,
}

/// GET /web/adrs - Return the registry listing as an HTML partial.
pub async fn adr_list(State(state): State<SharedState>) -> impl IntoResponse {
    match state.store.list() {
        Ok(stored) => AdrListTemplate {
            adrs: stored
                .into_iter()
                .map(|a| AdrView {
                    adr_id: a.adr_id.to_string(),
                    file_name: a.file_name,
                    html: markdown_to_html(&a.content),
                })
                .collect(),
        }
        .into_response(),
        Err(e) => {
            tracing::error!("failed to list ADRs: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<p class=\"error-msg\">Failed to read the ADR registry.</p>".to_string()),
            )
                .into_response()
        }
    }
}

/// GET /adrs/{file} - Download one stored ADR as Markdown.
pub async fn download(State(state): State<SharedState>, Path(file): Path<String>) -> Response {
    if AdrId::from_file_name(&file).is_none() {
        return (
            StatusCode::BAD_REQUEST,
            Html("<p class=\"error-msg\">Invalid ADR file name.</p>".to_string()),
        )
            .into_response();
    }

    match state.store.read(&file) {
        Ok(Some(adr)) => (
            [
                (
                    header::CONTENT_TYPE,
                    "text/markdown; charset=utf-8".to_string(),
                ),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", adr.file_name),
                ),
            ],
            adr.content,
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Html("<p class=\"error-msg\">ADR not found.</p>".to_string()),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("failed to read ADR {}: {}", file, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<p class=\"error-msg\">Failed to read the ADR.</p>".to_string()),
            )
                .into_response()
        }
    }
}

/// Provider status partial template.
#[derive(Template, AskamaIntoResponse)]
#[template(path = "partials/provider_status.html")]
pub struct ProviderStatusTemplate {
    pub provider: String,
    pub model: String,
    pub real_available: bool,
}

/// GET /web/provider-status - Provider status partial.
pub async fn provider_status(State(state): State<SharedState>) -> ProviderStatusTemplate {
    let ps = &state.provider_status;
    let (provider, model) = ps
        .providers
        .first()
        .map(|p| (p.name.clone(), p.model.clone()))
        .unwrap_or_else(|| ("openai".to_string(), "gpt-4.1-mini".to_string()));

    ProviderStatusTemplate {
        provider,
        model,
        real_available: ps.any_available,
    }
}

/// Convert stored Markdown to HTML for the browser views.
fn markdown_to_html(markdown: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);

    let parser = pulldown_cmark::Parser::new_ext(markdown, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}
