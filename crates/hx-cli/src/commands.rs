use anyhow::{Context, Result, anyhow, bail};
use comfy_table::Table;
use tokio::runtime::Runtime;
use tracing::{info, info_span};

use hx_cli::report::{apply_table_style, outline_listing, shown_summary, stats_table};
use hx_cli::settings::{ResolvedConfig, Settings};
use hx_client::HttpExtractionClient;
use hx_model::{DocumentFile, HeadingLevel};
use hx_outline::{ClipboardSink, DirectorySink};
use hx_session::{SessionController, SessionStatus};

use crate::cli::{ConfigArgs, ExtractArgs};

pub fn run_extract(args: &ExtractArgs, config: &ResolvedConfig) -> Result<()> {
    let span = info_span!("extract", pdf = %args.pdf.display());
    let _guard = span.enter();

    let file = DocumentFile::from_path(&args.pdf)
        .with_context(|| format!("read {}", args.pdf.display()))?;

    let mut controller = SessionController::new();
    controller.select_file(file)?;
    apply_view_options(&mut controller, args);

    let client = HttpExtractionClient::new(config.client.clone())?;
    let runtime = runtime()?;
    let status = runtime.block_on(controller.upload(&client))?;

    let session = controller.session();
    if status == SessionStatus::Error {
        let message = session.error_message().unwrap_or_default();
        bail!("{message}");
    }
    let result = session
        .result()
        .ok_or_else(|| anyhow!("upload finished without a result"))?;

    // =========================================================================
    // OUTPUT
    // =========================================================================

    let title = if result.title.is_empty() {
        &result.filename
    } else {
        &result.title
    };
    println!("{title}");
    println!("{} ({:.2}s)", result.filename, result.processing_time);
    println!();

    let visible = controller.filtered_outline();
    if !visible.is_empty() {
        println!("{}", outline_listing(&visible));
        println!();
    }
    println!("{}", shown_summary(visible.len(), result.outline.len()));

    if session.show_stats()
        && let Some(stats) = controller.stats()
    {
        println!("{}", stats_table(&stats));
    }

    // =========================================================================
    // EXPORTS
    // =========================================================================

    if let Some(dir) = &args.json_out {
        let mut sink = DirectorySink::new(dir);
        let name = controller.export_json(&mut sink).context("export JSON")?;
        println!("Saved {}", sink.dir().join(name).display());
    }
    if let Some(dir) = &args.text_out {
        let mut sink = DirectorySink::new(dir);
        let name = controller.export_text(&mut sink).context("export text")?;
        println!("Saved {}", sink.dir().join(name).display());
    }
    if args.copy {
        let mut sink = ClipboardSink::new();
        controller.copy_outline(&mut sink).context("copy outline")?;
        println!("Outline copied to clipboard");
    }

    Ok(())
}

fn apply_view_options(controller: &mut SessionController, args: &ExtractArgs) {
    if let Some(query) = &args.query {
        controller.set_search_query(query.as_str());
    }
    if !args.levels.is_empty() {
        for level in HeadingLevel::ALL {
            if !args.levels.contains(&level) {
                controller.toggle_level(level);
            }
        }
    }
    controller.set_show_stats(args.stats);
}

fn runtime() -> Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start async runtime")
}

pub fn run_health(config: &ResolvedConfig) -> Result<bool> {
    let client = HttpExtractionClient::new(config.client.clone())?;
    let runtime = runtime()?;

    let url = config.client.health_url();
    let healthy = runtime
        .block_on(client.health())
        .with_context(|| format!("reach {url}"))?;
    if healthy {
        println!("Service at {} is healthy", config.client.base_url);
    } else {
        println!("Service at {} is not healthy", config.client.base_url);
    }
    Ok(healthy)
}

pub fn run_config(args: &ConfigArgs, config: &ResolvedConfig) -> Result<()> {
    let path = Settings::config_path();

    if let Some(url) = &args.set_api_url {
        let mut settings = Settings::load_from(&path);
        settings.service.base_url = Some(url.clone());
        settings.save_to(&path)?;
        info!(path = %path.display(), "Settings saved");
        println!("Saved service URL to {}", path.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Setting", "Value", "Source"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "base_url".to_string(),
        config.client.base_url.clone(),
        config.source.to_string(),
    ]);
    table.add_row(vec![
        "extract endpoint".to_string(),
        config.client.extract_url(),
        String::new(),
    ]);
    table.add_row(vec![
        "health endpoint".to_string(),
        config.client.health_url(),
        String::new(),
    ]);
    table.add_row(vec![
        "settings file".to_string(),
        path.display().to_string(),
        String::new(),
    ]);
    println!("{table}");
    Ok(())
}
