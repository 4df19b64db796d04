//! Command execution handlers
//!
//! `run_graph` is the whole pipeline behind `depgraph graph`: fetch, join,
//! export, traverse, render. It is generic over the registry client so tests
//! drive it with [`MockRegistryClient`](crate::registry::MockRegistryClient).

use crate::application::{AppConfig, CliConfig, Commands, GraphArgs, OutputLayout};
use crate::catalogue::{ProjectFilter, build_catalogue, select_seeds, traverse};
use crate::display::Display;
use crate::export::{PlainTextWriter, sort_by_weighting, write_json};
use crate::logger::Logger;
use crate::networking::{NetworkingConfig, NetworkingManager};
use crate::primitives::ColorIntent;
use crate::registry::{LiveRegistryClient, RegistryClient};
use crate::render::{GraphRenderer, RenderOptions, RenderedGraph};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, warn};

/// What a `graph` run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Graph written to disk
    Rendered {
        rendered: RenderedGraph,
        nodes: usize,
        edges: usize,
        exports: Vec<PathBuf>,
    },
    /// The registry returned no projects to work with
    NoMatchingProjects,
    /// No project in the catalogue has the requested permalink
    NoSeedProjects { permalink: String },
}

/// Execute CLI commands
pub async fn execute_command(config: CliConfig) -> Result<()> {
    let app = config.app_config;

    let color = resolve_color(app.color);
    console::set_colors_enabled(color);
    console::set_colors_enabled_stderr(color);

    Logger::init(app.to_logger_config(color)).context("Failed to initialize logging")?;
    let display = Display::new(color);

    let command = match config.command {
        Some(cmd) => cmd,
        None => {
            display
                .status()
                .message("depgraph - project dependency graphs");
            display
                .status()
                .subtle("Run 'depgraph --help' for usage information");
            return Ok(());
        }
    };

    match command {
        Commands::Version => {
            display
                .status()
                .message(&format!("depgraph {}", env!("CARGO_PKG_VERSION")));
            Ok(())
        }
        Commands::Graph(args) => handle_graph(&app, &args, &display).await,
    }
}

fn resolve_color(intent: ColorIntent) -> bool {
    match intent {
        ColorIntent::Always => true,
        ColorIntent::Never => false,
        ColorIntent::Auto => console::colors_enabled(),
    }
}

async fn handle_graph(app: &AppConfig, args: &GraphArgs, display: &Display) -> Result<()> {
    // Configuration problems surface before any network traffic
    args.graph_mode()?;
    let api_key = app.require_api_key()?;

    let networking = NetworkingManager::new(NetworkingConfig {
        timeout_seconds: app.net_timeout,
        trace_requests: app.log_level >= 4,
    })
    .context("Failed to build HTTP client")?;

    let client = LiveRegistryClient::with_base_url(
        Arc::new(networking),
        app.registry_url.clone(),
        api_key.to_string(),
    );

    let outcome = run_graph(app, args, &client, display).await?;
    report_outcome(display, &outcome);
    Ok(())
}

/// Fetch, join, export, traverse and render one graph
pub async fn run_graph<C: RegistryClient>(
    app: &AppConfig,
    args: &GraphArgs,
    client: &C,
    display: &Display,
) -> Result<CommandOutcome> {
    let mode = args.graph_mode()?;
    let seed = args.seed();

    info!(
        product_filter = ?args.product_filter,
        category_filter = ?args.category_filter,
        project_filter = ?seed,
        graph_type = %mode,
        max_depth = args.max_depth,
        export_json = args.export_json,
        export_plain_english = args.export_plain_english,
        "Generating dependency graph"
    );

    let span = info_span!("fetch_registry");
    display
        .progress()
        .spinner(&span, "Fetching projects from registry");
    let snapshot = client
        .fetch_snapshot()
        .instrument(span)
        .await
        .context("Failed to fetch projects from the registry")?;

    if snapshot.is_empty() {
        warn!("Registry returned no projects");
        return Ok(CommandOutcome::NoMatchingProjects);
    }

    let filter = ProjectFilter::new(args.product_filter.clone(), args.category_filter.clone());
    let catalogue = build_catalogue(&snapshot.projects, &snapshot.project_dependencies, &filter);

    let layout = OutputLayout::new(&app.render_dir, &app.data_dir, seed);
    let mut exports = Vec::new();

    if args.export_json || args.export_plain_english {
        let mut ordered = catalogue.clone();
        if args.sort_by_weighting {
            sort_by_weighting(&mut ordered);
        }

        if args.export_json {
            let path = layout.json_path();
            write_json(&path, &ordered).context("Failed to write JSON export")?;
            exports.push(path);
        }

        if args.export_plain_english {
            let path = layout.plain_text_path();
            PlainTextWriter::new()
                .write(&path, &ordered)
                .context("Failed to write plain English export")?;
            exports.push(path);
        }
    }

    let seeds = select_seeds(&catalogue, seed);
    if seeds.is_empty() {
        let permalink = seed.unwrap_or_default().to_string();
        warn!(permalink = %permalink, "No project with this permalink after filtering");
        return Ok(CommandOutcome::NoSeedProjects { permalink });
    }

    let graph = traverse(&catalogue, seeds, mode, args.max_depth);
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "Traversal complete"
    );

    let renderer = GraphRenderer::new(RenderOptions { pdf: !args.no_pdf });
    let rendered = renderer
        .render(&graph, &layout.graph_base(mode))
        .context("Failed to render dependency graph")?;

    Ok(CommandOutcome::Rendered {
        rendered,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        exports,
    })
}

/// Print the outcome of a `graph` run
pub fn report_outcome(display: &Display, outcome: &CommandOutcome) {
    let status = display.status();
    match outcome {
        CommandOutcome::Rendered {
            rendered,
            nodes,
            edges,
            exports,
        } => {
            for path in exports {
                status.success("Exported", &path.display().to_string());
            }
            status.success("DOT written", &rendered.dot_path.display().to_string());
            match &rendered.pdf_path {
                Some(pdf) => status.success("PDF rendered", &pdf.display().to_string()),
                None => status.info("PDF skipped"),
            }
            status.subtle(&format!("{nodes} projects, {edges} dependencies"));
        }
        CommandOutcome::NoMatchingProjects => {
            status.warning("No projects found in the registry, nothing to render");
        }
        CommandOutcome::NoSeedProjects { permalink } => {
            status.warning(&format!(
                "No project with permalink '{permalink}' matched the filters, nothing to render"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
