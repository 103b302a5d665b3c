use crate::cli::config::{BackendKind, FormArgs, FormDefaults, OutputFormat};
use crate::form::form_model::FieldName;
use crate::form::form_state::FormState;
use crate::output::clipboard::Osc52Clipboard;
use crate::output::console::{format_console_output, format_json_output};
use crate::service::backend::{GenerationBackend, HttpBackend};
use crate::service::mock::MockGenerator;
use crate::service::service_model::ServiceConfig;
use crate::submission::controller::SubmissionController;
use crate::submission::submission_model::SubmissionStatus;
use crate::trace::logger::TraceLogger;

// ============================================================================
// Form building
// ============================================================================

/// Fill a form from flags, starting from the configured defaults.
/// Flags override defaults; `--steps-file` is read verbatim.
pub fn build_form_state(args: &FormArgs, defaults: &FormDefaults) -> std::io::Result<FormState> {
    let mut form = FormState::with_defaults(
        args.language.or(defaults.language),
        args.tool.or(defaults.tool),
    );

    let test_steps = match &args.steps_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => args.test_steps.clone(),
    };

    form.update(FieldName::Url.as_str(), args.url.as_str());
    form.update(FieldName::Html.as_str(), args.html.as_str());
    form.update(FieldName::TestCase.as_str(), args.test_case.as_str());
    form.update(FieldName::TestData.as_str(), args.test_data.as_str());
    form.update(FieldName::TestSteps.as_str(), test_steps);

    Ok(form)
}

// ============================================================================
// generate subcommand
// ============================================================================

/// Submit once and print the outcome. Returns whether generation succeeded.
pub async fn cmd_generate(
    form: &FormState,
    backend: BackendKind,
    service: &ServiceConfig,
    format: OutputFormat,
    copy: bool,
    tracer: TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    match backend {
        BackendKind::Mock => run_generation(MockGenerator, form, format, copy, tracer).await,
        BackendKind::Http => {
            tracing::info!("using generation service at {}", service.base_url);
            run_generation(HttpBackend::new(service), form, format, copy, tracer).await
        }
    }
}

async fn run_generation<B: GenerationBackend>(
    backend: B,
    form: &FormState,
    format: OutputFormat,
    copy: bool,
    tracer: TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    let mut controller = SubmissionController::new(backend).with_tracer(tracer);
    let status = controller.submit_and_wait(form).await;
    let view = controller.view();

    match format {
        OutputFormat::Json => println!("{}", format_json_output(&view)?),
        OutputFormat::Console => print!("{}", format_console_output(&view)),
    }

    let succeeded = matches!(status, SubmissionStatus::Success);
    if copy && succeeded {
        controller.copy_code(&mut Osc52Clipboard::stdout());
        eprintln!("Copied {} bytes of generated code to the clipboard", view.code.len());
    }

    Ok(succeeded)
}

// ============================================================================
// health subcommand
// ============================================================================

/// Ask the service for its health. Returns whether it reported itself healthy.
pub async fn cmd_health(service: &ServiceConfig) -> Result<bool, Box<dyn std::error::Error>> {
    let backend = HttpBackend::new(service);
    let health = backend.health().await?;

    println!(
        "{}: {} (generation workflow {})",
        backend.base_url(),
        health.status,
        if health.lang_app_available {
            "loaded"
        } else {
            "unavailable, using fallback generator"
        }
    );

    Ok(health.is_ok())
}
