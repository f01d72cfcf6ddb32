use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ErrorHandler, ReviewError, ReviewResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::api_client::ApiClient;
use crate::services::incident_dispatch::dispatch_incidents;
use crate::services::visibility_filter::VisibilityFilter;
use crate::structs::comparison_dataset::ComparisonDataset;
use crate::structs::config::config::Config;
use crate::structs::review_summary::ReviewSummary;
use crate::traits::explanation_prompter::ExplanationPrompter;
use crate::ui::board_manager::BoardManager;
use crate::ui::dashboard_server::DashboardServer;
use crate::ui::table_renderer::TableRenderer;
use crate::workers::review_runner::ReviewRunner;
use crate::workers::stdin_prompter::StdinPrompter;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> ReviewResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Validate => self.validate_command().await,
            Commands::Compare { url, query } => self.compare_command(url, query).await,
            Commands::Review { url, query } => self.review_command(url, query).await,
            Commands::Dashboard { url, port, no_browser } => self.dashboard_command(url, port, no_browser).await,
            Commands::Incidents { url } => self.incidents_command(url).await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        if let Err(e) = &result {
            ErrorHandler::handle_error(e);
        }

        result
    }

    async fn init_command(&self) -> ReviewResult<()> {
        log::info!("🚀 Initializing finops-review configuration...");

        let path = ConfigManager::create_sample_config()?;
        log::info!("📝 Edit {} to point at your cost API.", path.display());
        log::info!("🔧 Run 'finops-review validate' to check your configuration.");

        Ok(())
    }

    async fn validate_command(&self) -> ReviewResult<()> {
        log::info!("🔍 Validating finops-review configuration...");

        let config = ConfigManager::load()?;
        log::info!("✅ Configuration loaded");

        Self::ensure_valid(&config)?;

        log::info!("✅ Configuration is valid");
        log::info!("   🌐 API: {} (timeout {}s)", config.api.base_url, config.api.timeout_secs);
        log::info!(
            "   🖥️  Dashboard port: {} (open browser: {})",
            config.dashboard.port,
            if config.dashboard.open_browser { "✅" } else { "❌" }
        );
        log::info!("   🏷️  Incident prefix: {}", config.review.incident_prefix);

        Ok(())
    }

    async fn compare_command(&self, url: Option<String>, query: Option<String>) -> ReviewResult<()> {
        let config = Self::load_config(url, None)?;
        let client = ApiClient::new(&config.api)?;
        let dataset = Self::fetch_with_spinner(&client).await?;

        let filter = VisibilityFilter::new(query.unwrap_or_default());
        let renderer = TableRenderer::new();

        log::info!("{}", renderer.render_header(&dataset));
        log::info!("{}", renderer.render(&dataset, &filter, None));

        if dataset.has_increases() {
            log::info!("💡 Run 'finops-review review' to explain the cost increases.");
        }

        Ok(())
    }

    async fn review_command(&self, url: Option<String>, query: Option<String>) -> ReviewResult<()> {
        let config = Self::load_config(url, None)?;
        let client = ApiClient::new(&config.api)?;
        let dataset = Self::fetch_with_spinner(&client).await?;

        let filter = VisibilityFilter::new(query.unwrap_or_default());
        let renderer = TableRenderer::new();
        log::info!("{}", renderer.render_header(&dataset));
        log::info!("{}", renderer.render(&dataset, &filter, None));

        let summary = Self::run_review(&dataset, filter, &config.review.incident_prefix, StdinPrompter::new())?;

        // The CLI exits right after this, so wait for the background submission to log its outcome.
        if let Some(handle) = dispatch_incidents(Arc::new(client), summary.incidents) {
            let _ = handle.await;
        }

        Ok(())
    }

    async fn dashboard_command(&self, url: Option<String>, port: Option<u16>, no_browser: bool) -> ReviewResult<()> {
        log::info!("🌐 Starting finops-review dashboard...");

        let config = Self::load_config(url, port)?;
        let client = Arc::new(ApiClient::new(&config.api)?);
        let board_manager = Arc::new(BoardManager::new(
            client.clone(),
            client,
            &config.review.incident_prefix,
        ));

        let mut spinner = AnimatedLogger::new("📡 Fetching cost comparison");
        spinner.start();
        let board_id = match board_manager.load_board().await {
            Ok(board_id) => {
                spinner.stop("Comparison loaded").await;
                board_id
            }
            Err(e) => {
                spinner.error(&e.user_message()).await;
                return Err(e);
            }
        };

        let mut server = DashboardServer::new(Arc::clone(&board_manager));
        server.start(config.dashboard.port).await?;

        let dashboard_url = server
            .url(&board_id)
            .ok_or_else(|| ReviewError::system_error("dashboard", "Server did not report a port"))?;
        log::info!("🚀 Dashboard available at: {}", dashboard_url);

        if config.dashboard.open_browser && !no_browser {
            if let Err(e) = webbrowser::open(&dashboard_url) {
                log::warn!("⚠️ Could not open a browser: {}", e);
            }
        }

        log::info!("⏹️ Press Ctrl+C to stop the dashboard");
        tokio::signal::ctrl_c().await?;

        server.shutdown().await
    }

    async fn incidents_command(&self, url: Option<String>) -> ReviewResult<()> {
        let config = Self::load_config(url, None)?;
        let client = ApiClient::new(&config.api)?;

        let listing = client.list_incidents().await?;
        if listing.incidents.is_empty() {
            log::info!("📭 No incidents recorded yet.");
            return Ok(());
        }

        log::info!("📝 {} incident(s) on record:", listing.count.max(listing.incidents.len()));
        for incident in &listing.incidents {
            log::info!("  • {} - {} ({})", incident.id, incident.service, incident.timestamp);
            log::info!("    {}", incident.cost_line());
            log::info!("    \"{}\"", incident.explanation);
        }

        Ok(())
    }

    /// Runs even when nothing is visible, so the zero-review summary is still reported.
    fn run_review<P: ExplanationPrompter>(
        dataset: &ComparisonDataset,
        filter: VisibilityFilter,
        incident_prefix: &str,
        prompter: P,
    ) -> ReviewResult<ReviewSummary> {
        if !filter.has_reviewable_rows(dataset) {
            log::info!("🎉 No visible cost increases to review.");
        }

        let summary = ReviewRunner::new(dataset, filter, incident_prefix, prompter).run()?;
        summary.print_summary();
        Ok(summary)
    }

    fn load_config(url: Option<String>, port: Option<u16>) -> ReviewResult<Config> {
        let config = ConfigManager::load()?.with_overrides(url, port);
        Self::ensure_valid(&config)?;
        Ok(config)
    }

    fn ensure_valid(config: &Config) -> ReviewResult<()> {
        ConfigManager::validate_config(config).map_err(|errors| {
            for error in &errors {
                log::error!("   - {}", error);
            }
            ReviewError::config_error(
                &errors.join("; "),
                None,
                Some("Fix the values in your config file or pass --url"),
            )
        })
    }

    async fn fetch_with_spinner(client: &ApiClient) -> ReviewResult<ComparisonDataset> {
        let mut spinner = AnimatedLogger::new(format!("📡 Fetching cost comparison from {}", client.base_url()));
        spinner.start();

        match client.fetch_comparison().await {
            Ok(dataset) => {
                spinner.stop(&format!("Loaded {} services", dataset.len())).await;
                Ok(dataset)
            }
            Err(e) => {
                spinner.error(&e.user_message()).await;
                Err(e)
            }
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
