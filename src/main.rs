use clap::Parser;
use test_automation_generator::cli::commands::{build_form_state, cmd_generate, cmd_health};
use test_automation_generator::cli::config::{Cli, Commands, load_config, service_config_from};
use test_automation_generator::logging;
use test_automation_generator::trace::logger::TraceLogger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(cli.config.as_deref());

    // Resolved once; CLI > config > env > default
    let service = service_config_from(&cli, &config);

    let ok = match &cli.command {
        Commands::Generate {
            form,
            backend,
            format,
            copy,
        } => {
            let form = build_form_state(form, &config.defaults)?;
            let tracer = match config.trace.path.as_deref() {
                Some(path) => TraceLogger::new(path),
                None => TraceLogger::disabled(),
            };
            cmd_generate(&form, *backend, &service, *format, *copy, tracer).await?
        }
        Commands::Health => cmd_health(&service).await?,
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}
