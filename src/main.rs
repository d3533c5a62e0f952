use errata_sync::adapters::outbound::console::{StdoutPresenter, TracingProgressReporter};
use errata_sync::adapters::outbound::filesystem::FileSystemReader;
use errata_sync::adapters::outbound::network::KatelloClient;
use errata_sync::adapters::outbound::publisher::{DryRunPublisher, PulpAdminPublisher};
use errata_sync::adapters::outbound::store::RedisAdvisoryStore;
use errata_sync::application::dto::{ImportRequest, IngestRequest, RepositorySelection};
use errata_sync::application::use_cases::{
    ImportAdvisoriesUseCase, IngestAdvisoriesUseCase, SyncAdvisoriesUseCase,
};
use errata_sync::cli::Args;
use errata_sync::config::{load_config_from_path, AppConfig, LogFormat};
use errata_sync::logging::init_tracing;
use errata_sync::ports::outbound::{ErratumPublisher, OutputPresenter};
use errata_sync::shared::error::ExitCode;
use errata_sync::shared::Result;
use std::process;

fn main() {
    // Parse command-line arguments (clap exits with status 2 on misuse)
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::Failure.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let config = load_config_from_path(&args.config)?;
    init_tracing(&config.logging)?;
    config.warn_unknown_fields();

    let presenter = StdoutPresenter::new();
    let store = RedisAdvisoryStore::connect(&config.redis)?;

    if !args.command.imports() {
        let response = ingest_use_case(&config, &store).execute(ingest_request(&config))?;
        presenter.present(&response.summary())?;
        return Ok(ExitCode::Success);
    }

    let failed = if args.command.dry_run() {
        import(&config, &store, DryRunPublisher::new(), &presenter, args.command.loads())?
    } else {
        let publisher =
            PulpAdminPublisher::new(&config.publisher.command, &config.publisher.work_dir);
        import(&config, &store, publisher, &presenter, args.command.loads())?
    };

    Ok(if failed {
        ExitCode::Failure
    } else {
        ExitCode::Success
    })
}

fn ingest_request(config: &AppConfig) -> IngestRequest {
    IngestRequest::new(
        config.data_files.errata_files.clone(),
        config.data_files.oval_files.clone(),
    )
}

fn ingest_use_case<'a>(
    config: &AppConfig,
    store: &'a RedisAdvisoryStore,
) -> IngestAdvisoriesUseCase<FileSystemReader, &'a RedisAdvisoryStore, TracingProgressReporter> {
    IngestAdvisoriesUseCase::new(FileSystemReader::new(), store, progress_reporter(config))
}

/// Runs the import pass, preceded by the load pass when `with_load` is set;
/// returns true when at least one publish failed
fn import<P: ErratumPublisher>(
    config: &AppConfig,
    store: &RedisAdvisoryStore,
    publisher: P,
    presenter: &StdoutPresenter,
    with_load: bool,
) -> Result<bool> {
    let catalog = KatelloClient::new(&config.katello)?;
    let use_case = ImportAdvisoriesUseCase::new(store, catalog, publisher, progress_reporter(config));

    let selections = config
        .repositories
        .iter()
        .map(|(label, repository)| {
            RepositorySelection::new(label.clone(), repository.os_release, repository.pulp_id.clone())
        })
        .collect();
    let request = ImportRequest::new(selections);

    let response = if with_load {
        let sync = SyncAdvisoriesUseCase::new(ingest_use_case(config, store), use_case);
        let response = sync.execute(ingest_request(config), request)?;
        presenter.present(&response.summary())?;
        response.import
    } else {
        let response = use_case.execute(request)?;
        presenter.present(&response.summary())?;
        response
    };

    for failure in &response.failures {
        tracing::error!(
            advisory = %failure.advisory_id,
            repository = %failure.repository_label,
            "{}",
            failure.reason
        );
    }
    Ok(response.has_failures())
}

fn progress_reporter(config: &AppConfig) -> TracingProgressReporter {
    match config.logging.format {
        LogFormat::Json => TracingProgressReporter::without_progress_bar(),
        LogFormat::Pretty => TracingProgressReporter::new(),
    }
}
