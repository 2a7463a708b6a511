use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use fancy_duration::FancyDuration;
use minuit_cli::{
    config::{Config, SourceType},
    country::DisplayEntry,
    process_cli,
    source::{file::FileSource, rest::RestSource, CountrySource},
    ui::consts::{EMPTY_GROUP, NEXT_TITLE, PAST_TITLE},
};
use ttygrid::{add_line, grid, header};

macro_rules! compose_grid {
    ($grid:expr, $($header:expr),*) => {{
        use crossterm::style::{Colors, Color};

        let mut grid = grid!($grid, $($header),*).unwrap();
        grid.set_header_color(Colors::new(Color::DarkCyan, Color::Reset));
        grid.set_delimiter_color(Colors::new(Color::Cyan, Color::Reset));
        grid.set_primary_color(Colors::new(Color::White, Color::Reset));
        grid.set_secondary_color(Colors::new(Color::Grey, Color::Reset));

        grid
    }}
}

#[derive(Parser, Debug)]
#[command(
    name = "minuit",
    version,
    about = "Watch the world for countries within an hour of local midnight"
)]
#[command(propagate_version = true)]
struct ArgParser {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    #[command(about = "Set the country source you wish to use (rest or file)")]
    Source { source_type: String },
    #[command(about = "Set the countries endpoint queried by the rest source; omit to reset")]
    SetEndpoint { url: Option<String> },
    #[command(about = "Set the JSON file read by the file source")]
    SetCountriesFile { filename: std::path::PathBuf },
    #[command(about = "Set the width of the midnight window, e.g. `1h` or `30m`")]
    SetWindow { set: String },
    #[command(about = "Set how often the terminal UI re-renders")]
    SetRefreshInterval { set: String },
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Manipulate Configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    #[command(
        alias = "l",
        about = "Also `l`. List countries on either side of local midnight"
    )]
    List {},
    #[command(alias = "p", about = "Also `p`. List countries just past local midnight")]
    Past {},
    #[command(alias = "n", about = "Also `n`. List countries approaching local midnight")]
    Next {},
    #[command(about = "Send a visual notification for countries at the edge of midnight")]
    Notify {
        #[arg(
            short = 't',
            long,
            default_value = "10s",
            help = "Notification timeout"
        )]
        timeout: Option<String>,
    },
}

fn print_group(title: &str, entries: Vec<DisplayEntry>) {
    println!("{}", title);

    if entries.is_empty() {
        println!("  {}", EMPTY_GROUP);
        println!();
        return;
    }

    let mut grid = compose_grid!(header!("FLAG", 1), header!("COUNTRY", 3), header!("TIME", 2));

    for entry in entries {
        add_line!(grid, entry.flag(), entry.country(), entry.time()).unwrap();
    }

    grid.write(std::io::stdout()).unwrap();
    println!();
}

async fn process_rest(cli: ArgParser, config: Config) -> Result<()> {
    let mut source = RestSource::new(&config);
    process_cli!(cli, config, source);
    Ok(())
}

async fn process_file(cli: ArgParser, config: Config) -> Result<()> {
    let mut source = FileSource::new(&config);
    process_cli!(cli, config, source);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = ArgParser::parse();

    let config = Config::load(None).unwrap_or_default();
    match config.source_type() {
        SourceType::Rest => process_rest(cli, config).await,
        SourceType::File => process_file(cli, config).await,
    }
}
