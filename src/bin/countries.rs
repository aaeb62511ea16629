use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use country_explorer::detail::{DetailView, ErrorKind, PageView};
use country_explorer::store::FilterStore;
use country_explorer::{Client, Explorer, LoaderState, RegionFilter, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "countries",
    version,
    about = "Browse countries from the REST Countries API: filter by region, search, show details"
)]
struct Cli {
    /// API base URL.
    #[arg(
        long,
        global = true,
        env = "COUNTRIES_API_URL",
        default_value = country_explorer::api::DEFAULT_BASE_URL
    )]
    base_url: String,
    /// Locale for number formatting (en, de, fr, es, it, pt, nl).
    #[arg(long, global = true, env = "COUNTRIES_LOCALE", default_value = "en")]
    locale: String,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List countries (optionally narrowed and saved).
    List(ListArgs),
    /// Show the detail page of one country by its alpha-3 code.
    Show(ShowArgs),
    /// Print the region filter options.
    Regions,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Region to keep (all, Africa, Americas, Antarctic, Asia, Europe, Oceania).
    #[arg(short, long, default_value = "all")]
    region: RegionFilter,
    /// Keep countries whose common name contains this text.
    #[arg(short, long)]
    search: Option<String>,
    /// Save the listed rows to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Country code, e.g. DEU or usa.
    code: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let explorer = Explorer::new(Client::with_base_url(&cli.base_url)).with_locale(cli.locale);
    match cli.cmd {
        Command::List(args) => cmd_list(explorer, args),
        Command::Show(args) => cmd_show(explorer, args),
        Command::Regions => {
            for option in FilterStore::options() {
                println!("{}", option);
            }
            Ok(())
        }
    }
}

fn cmd_list(mut app: Explorer<Client>, args: ListArgs) -> Result<()> {
    if let LoaderState::Failure(err) = app.load_all() {
        bail!("failed to load countries ({}): {}", err.code(), err);
    }
    app.select_region(args.region);
    if let Some(text) = args.search.as_deref() {
        app.search(text);
    }

    let rows = app.summaries();
    for r in &rows {
        println!(
            "{:<4} {:<40} {:>15}  {:<10} {}",
            r.code, r.name, r.population, r.region, r.capital
        );
    }
    eprintln!("{} • {} countries", app.filter().header_label(), rows.len());

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&rows, path)?,
            "json" => storage::save_json(&rows, path)?,
            other => bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", rows.len(), path.display());
    }
    Ok(())
}

fn cmd_show(mut app: Explorer<Client>, args: ShowArgs) -> Result<()> {
    app.open_country(&args.code);
    match app.page() {
        PageView::Detail(view) => {
            print_detail(&view);
            Ok(())
        }
        PageView::NotFound { subject } => bail!("{} not found: {}", subject, args.code),
        PageView::Error {
            kind: ErrorKind::Timeout,
            message,
        } => bail!("request timed out or failed: {}", message),
        PageView::Error {
            kind: ErrorKind::Generic,
            message,
        } => bail!("something went wrong: {}", message),
        PageView::Idle | PageView::Loading => bail!("no result for {}", args.code),
    }
}

fn print_detail(view: &DetailView) {
    println!("{} ({})", view.name, view.code);
    println!("flag: {}", view.flag_url);
    println!();
    for row in view.left.iter().chain(view.right.iter()) {
        println!("{:>18}: {}", row.label, row.rendered());
    }
    if let Some(borders) = &view.borders {
        let codes: Vec<&str> = borders.links.iter().map(|l| l.code.as_str()).collect();
        println!("{:>18}: {}", borders.label, codes.join(" "));
    }
}
