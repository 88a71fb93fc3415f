use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use planset_job::{JobContext, JobParams, ReportType};
use planset_layout::{
    INDIVIDUAL_MAX_HEIGHT_FT, INDIVIDUAL_MAX_WIDTH_FT, LayoutItem, PaginationGrid, SheetPlan,
    compose_sheet_plan, paginate, plan_statistics,
};
use planset_render::{DEFAULT_TITLE_BLOCK, ReportMeta, lookup_title_block};

mod logger;

#[derive(Parser)]
#[command(name = "planset", about = "Building-model PDF asset reports", version)]
struct Cli {
    /// Show debug-level log output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose drawing views onto sheets and render the sheet set
    Sheets {
        /// Exported view table (JSON)
        #[arg(short, long)]
        views: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Title block template name
        #[arg(long, default_value = DEFAULT_TITLE_BLOCK)]
        title_block: String,

        /// Project name for the title strip
        #[arg(long, default_value = "")]
        project: String,

        /// Project number for the title strip
        #[arg(long, default_value = "")]
        project_number: String,

        /// Show the plan summary only, don't render
        #[arg(long)]
        stats_only: bool,
    },

    /// Download assets and render the paginated photo report
    Report {
        /// Job params file (JSON)
        #[arg(short, long)]
        params: PathBuf,

        /// Directory for downloaded images
        #[arg(long)]
        assets_dir: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Run a full job from a working directory (params.json, views.json, assets/)
    Run {
        /// Job working directory
        #[arg(short, long)]
        job_dir: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let run_logger = logger::RunLogger::new(level);
    run_logger
        .clone()
        .init()
        .context("failed to install logger")?;

    match cli.command {
        Commands::Sheets {
            views,
            output,
            title_block,
            project,
            project_number,
            stats_only,
        } => {
            let records = planset_job::load_views(&views).await?;
            let items: Vec<LayoutItem> = records.iter().map(|v| v.to_layout_item()).collect();

            let plan =
                compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)?;
            print_plan_summary(&plan);

            if stats_only {
                return Ok(());
            }

            let block = lookup_title_block(&title_block)?;
            let meta = ReportMeta {
                project_name: project,
                project_number,
            };
            let mut doc = planset_render::new_document(&meta.project_name);
            planset_render::append_sheet_pages(&mut doc, &plan, block, &meta);
            planset_render::export_pdf(doc, &output).await?;
            println!("Sheet set → {}", output.display());
        }

        Commands::Report {
            params,
            assets_dir,
            output,
        } => {
            let params = JobParams::load(&params).await?;
            params.validate()?;

            let block = lookup_title_block(DEFAULT_TITLE_BLOCK)?;
            let meta = report_meta(&params);
            let mut doc = planset_render::new_document(&meta.project_name);

            let pages = append_photo_report(&mut doc, &params, &assets_dir, block, &meta).await?;
            planset_render::export_pdf(doc, &output).await?;
            println!(
                "Asset report ({} pages) → {}",
                pages,
                output.display()
            );
        }

        Commands::Run { job_dir } => {
            run_job(&JobContext::new(job_dir)).await?;
        }
    }

    let warnings = run_logger.warning_count();
    if warnings > 0 {
        println!("Completed with {warnings} warning(s), see log above");
    }

    Ok(())
}

/// Full automation entry: everything the job's report type asks for,
/// combined into one PDF in the working directory.
async fn run_job(ctx: &JobContext) -> Result<()> {
    let params = JobParams::load(ctx.params_path())
        .await
        .with_context(|| format!("job dir {}", ctx.job_dir().display()))?;
    params.validate()?;
    log::debug!(
        "job '{}' ({}), environment '{}'",
        params.project_name,
        params.project_number,
        params.environment
    );

    let block = lookup_title_block(DEFAULT_TITLE_BLOCK)?;
    let meta = report_meta(&params);
    let mut doc = planset_render::new_document(&meta.project_name);

    if matches!(params.report_type, ReportType::SheetSet | ReportType::Full) {
        let records = planset_job::load_views(ctx.views_path()).await?;
        let records = planset_job::apply_view_filters(records, &params);
        let items: Vec<LayoutItem> = records.iter().map(|v| v.to_layout_item()).collect();

        let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)?;
        print_plan_summary(&plan);
        planset_render::append_sheet_pages(&mut doc, &plan, block, &meta);
    }

    if matches!(
        params.report_type,
        ReportType::AssetPhotos | ReportType::Full
    ) {
        let pages = append_photo_report(&mut doc, &params, ctx.assets_dir(), block, &meta).await?;
        println!("Asset report pages: {pages}");
    }

    let output = ctx.output_path(&params.output_file);
    planset_render::export_pdf(doc, &output).await?;
    println!("Job output → {}", output.display());
    Ok(())
}

/// Download the job's assets, paginate them, and append the report pages.
/// Returns the page count.
async fn append_photo_report(
    doc: &mut planset_render::PdfDocument,
    params: &JobParams,
    assets_dir: impl AsRef<Path>,
    block: &planset_render::TitleBlock,
    meta: &ReportMeta,
) -> Result<usize> {
    let downloaded =
        planset_job::download_assets(&params.assets, &params.credentials, &assets_dir).await?;

    let items: Vec<LayoutItem> = downloaded.iter().map(|a| a.to_layout_item()).collect();
    let grid = PaginationGrid::default();
    let pages = paginate(&items, &grid);

    let mut images: HashMap<String, Vec<u8>> = HashMap::new();
    for asset in &downloaded {
        let bytes = tokio::fs::read(&asset.path).await?;
        images.insert(asset.record.asset_id.clone(), bytes);
    }

    planset_render::append_report_pages(
        doc,
        &pages,
        &images,
        block,
        meta,
        grid.cell_width,
        grid.cell_height,
    );
    Ok(pages.len())
}

fn report_meta(params: &JobParams) -> ReportMeta {
    ReportMeta {
        project_name: params.project_name.clone(),
        project_number: params.project_number.clone(),
    }
}

fn print_plan_summary(plan: &SheetPlan) {
    let stats = plan_statistics(plan);
    println!("Sheet plan:");
    println!("  Individual sheets: {}", stats.individual_sheets);
    println!("  Combined sheets: {}", stats.combined_sheets);
    println!("  Placed items: {}", stats.placed_items);
    if stats.empty_slots > 0 {
        println!("  Empty panel slots: {}", stats.empty_slots);
    }
}
