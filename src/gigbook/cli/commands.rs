//! Command dispatch for the gigbook binary.
//!
//! - `run()`: parses arguments, installs logging, dispatches
//! - `init_context()`: resolves the data directory and builds the API
//! - `handle_*()`: one per subcommand; call the API and print rendered output

use super::render::{
    print_messages, render_artist, render_artists, render_categories, render_config,
    render_dashboard, render_directory, render_fee_ranges, render_locations,
};
use super::setup::{print_grouped_help, print_help_for_command, Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use gigbook::api::{ConfigAction, DashboardQuery, GigbookApi, MessageLevel, TableSort};
use gigbook::config::GigbookConfig;
use gigbook::directory::{FilterState, SearchMode, SortKey};
use gigbook::error::{GigbookError, Result};
use gigbook::source::MockDirectory;
use gigbook::store::fs::FileRepository;
use gigbook::validation::OnboardForm;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_ENV: &str = "GIGBOOK_LOG";

struct AppContext {
    api: GigbookApi<FileRepository, MockDirectory>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        match &cli.command {
            None => print_grouped_help(),
            Some(cmd) => print_help_for_command(cmd.name()),
        }
        return Ok(());
    }

    init_tracing(cli.verbose);

    if let Some(Commands::Help { command }) = &cli.command {
        return handle_help(command.clone());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Browse {
            search,
            category,
            location,
            price,
            sort,
            page,
            minimal_search,
        }) => {
            let filter = FilterState::new()
                .with_search(search.unwrap_or_default())
                .with_categories(category)
                .with_locations(location)
                .with_price_ranges(price);
            let mode = minimal_search.then_some(SearchMode::Minimal);
            handle_browse(&ctx, filter, sort, page, mode)
        }
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::Locations) => handle_locations(&ctx),
        Some(Commands::FeeRanges) => handle_fee_ranges(&ctx),
        Some(Commands::Show { id }) => handle_show(&ctx, &id),
        Some(Commands::Onboard {
            name,
            bio,
            category,
            language,
            fee,
            location,
            image,
        }) => {
            let form = OnboardForm {
                name,
                bio,
                category,
                languages: language,
                fee_range: fee,
                location,
                profile_image: image,
            };
            handle_onboard(&mut ctx, &form)
        }
        Some(Commands::Favorite { id }) => handle_favorite(&mut ctx, &id),
        Some(Commands::Favorites) => handle_favorites(&ctx),
        Some(Commands::Dashboard {
            search,
            category,
            sort,
            desc,
        }) => handle_dashboard(&ctx, search, category, sort, desc),
        Some(Commands::Approve { id }) => handle_approve(&mut ctx, &id),
        Some(Commands::Remove { id }) => handle_remove(&mut ctx, &id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Help { command }) => handle_help(command),
        None => handle_browse(&ctx, FilterState::new(), SortKey::Default, 1, None),
    }
}

/// Logs go to stderr; `GIGBOOK_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "gigbook=debug" } else { "gigbook=warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "gigbook", "gigbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| GigbookError::Api("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    let config = GigbookConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        GigbookConfig::default()
    });
    debug!(data_dir = %data_dir.display(), ?config, "context ready");

    let mut source = MockDirectory::new().with_delay(config.fetch_delay());
    if let Some(message) = &cli.simulate_fetch_error {
        source = source.failing(message.clone());
    }
    let repo = FileRepository::new(data_dir.clone());

    Ok(AppContext {
        api: GigbookApi::new(repo, source, config, data_dir),
    })
}

fn handle_browse(
    ctx: &AppContext,
    filter: FilterState,
    sort: SortKey,
    page: usize,
    mode: Option<SearchMode>,
) -> Result<()> {
    let result = ctx.api.browse(filter.clone(), sort, page, mode)?;
    let (warnings, hints): (Vec<_>, Vec<_>) = result
        .messages
        .into_iter()
        .partition(|m| m.level == MessageLevel::Warning);

    print_messages(&warnings);
    if let Some(dir) = &result.directory {
        print!("{}", render_directory(dir, &filter, &hints));
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.show_artist(id)?;
    print!("{}", render_artists(&result.listed_artists, "Artist not found"));
    Ok(())
}

fn handle_categories(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print!("{}", render_categories(&result.categories));
    Ok(())
}

fn handle_locations(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.locations()?;
    print!("{}", render_locations(&result.locations));
    Ok(())
}

fn handle_fee_ranges(ctx: &AppContext) -> Result<()> {
    print!("{}", render_fee_ranges(&ctx.api.fee_ranges()));
    Ok(())
}

fn handle_onboard(ctx: &mut AppContext, form: &OnboardForm) -> Result<()> {
    if !ctx.api.settings().submit_delay().is_zero() {
        eprintln!("Submitting...");
    }
    let result = ctx.api.onboard(form)?;
    print_messages(&result.messages);
    for artist in &result.affected_artists {
        print!("{}", render_artist(artist));
    }
    Ok(())
}

fn handle_favorite(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.toggle_favorite(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_favorites(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.favorites()?;
    if result.listed_artists.is_empty() {
        print_messages(&result.messages);
        return Ok(());
    }
    print!("{}", render_artists(&result.listed_artists, ""));
    Ok(())
}

fn handle_dashboard(
    ctx: &AppContext,
    search: String,
    category: String,
    sort: TableSort,
    descending: bool,
) -> Result<()> {
    let query = DashboardQuery {
        search,
        category: Some(category),
        sort,
        descending,
    };
    let result = ctx.api.dashboard(&query)?;
    let stats = result.stats.unwrap_or_default();
    print!("{}", render_dashboard(&stats, &result.listed_artists));
    Ok(())
}

fn handle_approve(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.approve(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.remove(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action.clone())?;
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print!("{}", render_config(config));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(&cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
