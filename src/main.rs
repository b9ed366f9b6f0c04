use clap::Parser;
use smart_nearby::adapters::geolocation::DEFAULT_GEOLOCATION_TIMEOUT;
use smart_nearby::adapters::{DeviceLocator, FixedPosition, IpGeolocation, Unavailable};
use smart_nearby::domain::ports::ConfigProvider;
use smart_nearby::utils::error::ErrorSeverity;
use smart_nearby::utils::{logger, validation::Validate};
use smart_nearby::view::theme;
use smart_nearby::{
    CliArgs, GooglePlacesClient, HeadlessMap, NearbyApp, NearbyError, OutputFormat, SearchOutcome,
    SearchSettings,
};

fn locator_for<C: ConfigProvider>(
    args: &CliArgs,
    config: &C,
) -> Result<DeviceLocator, NearbyError> {
    let locator = if let Some(position) = args.device_position() {
        DeviceLocator::Fixed(FixedPosition(position))
    } else if let Some(endpoint) = config.geolocation_endpoint() {
        let timeout = config
            .request_timeout()
            .unwrap_or(DEFAULT_GEOLOCATION_TIMEOUT);
        DeviceLocator::Ip(IpGeolocation::with_timeout(endpoint, timeout)?)
    } else {
        DeviceLocator::Unavailable(Unavailable)
    };
    Ok(locator)
}

async fn run(args: &CliArgs) -> Result<(), NearbyError> {
    let settings = args.load_settings()?;
    settings.validate()?;
    tracing::debug!(
        "Places endpoint: {}, radius: {}m, ordering: {:?}",
        settings.api_endpoint(),
        settings.search_radius(),
        settings.response_ordering()
    );

    let places = GooglePlacesClient::from_config(&settings)?;
    let map_options = theme::map_options(
        settings.default_location(),
        settings.zoom,
        &settings.container_id,
    );
    let app = NearbyApp::new(
        places,
        HeadlessMap::new(),
        locator_for(args, &settings)?,
        map_options,
        SearchSettings::from_config(&settings),
    );

    app.start().await;

    if let Some(mood) = args.mood {
        match app.select_mood(mood).await {
            SearchOutcome::Committed { count } => {
                tracing::info!("✅ {} places found for {}", count, mood)
            }
            SearchOutcome::Failed { status } => {
                tracing::info!("No results for {} (status {})", mood, status)
            }
            SearchOutcome::Unreachable { message } => {
                tracing::info!("No results for {} ({})", mood, message)
            }
            SearchOutcome::Superseded => {}
        }
    }

    let page = app.page().await;
    let rendered = match args.format {
        OutputFormat::Text => page.to_text(),
        OutputFormat::Html => page.to_html()?,
        OutputFormat::Json => serde_json::to_string_pretty(&page)?,
    };

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, rendered).await?;
            tracing::info!("📁 Page written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting smart-nearby");

    if let Err(e) = run(&args).await {
        tracing::error!(
            "❌ smart-nearby failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}
