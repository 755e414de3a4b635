mod logger;

use anyhow::{Context, Result};
use booklet_impose::{BookletOptions, SchemeTable};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "booklet", about = "Booklet imposition calculator", version)]
struct Cli {
    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// JSON scheme table to use instead of the built-in one
    #[arg(long, global = true)]
    schemes: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Impose a booklet and print its sheets
    Impose {
        #[command(flatten)]
        booklet: BookletArgs,

        /// Output format
        #[arg(long, default_value = "text", value_enum)]
        format: FormatArg,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Save the effective options as a JSON config
        #[arg(long)]
        save_config: Option<PathBuf>,
    },

    /// Show sheet and signature counts without imposing
    Stats {
        #[command(flatten)]
        booklet: BookletArgs,
    },

    /// Choose a signature count for a binding style
    Plan {
        /// Page count (rounded up to whole sheets)
        #[arg(long)]
        pages: usize,

        /// Pages per sheet
        #[arg(long, default_value = "4")]
        pages_per_sheet: usize,

        /// Binding style
        #[arg(long, default_value = "saddle", value_enum)]
        style: StyleArg,

        /// Nest sheets inside one another before folding
        #[arg(long)]
        fold_together: bool,

        /// Most sheets the binder can bind into one signature
        #[arg(long, default_value = "32")]
        max_bindable_sheets: usize,

        /// Most paper layers that can be folded at once
        #[arg(long, default_value = "8")]
        max_foldable_layers: usize,

        /// Keep this many sheets per signature (mixed binding)
        #[arg(long)]
        sheets_per_signature: Option<usize>,

        /// Keep this many signatures (mixed binding)
        #[arg(long)]
        signatures: Option<usize>,

        /// Also impose and print the planned booklet
        #[arg(long)]
        impose: bool,
    },

    /// List the available imposition schemes
    Schemes {
        /// Print the table as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Booklet parameters; each flag overrides the config file
#[derive(Args)]
struct BookletArgs {
    /// JSON config file with booklet options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Total number of pages
    #[arg(long)]
    pages: Option<usize>,

    /// Pages per sheet (both faces)
    #[arg(long)]
    pages_per_sheet: Option<usize>,

    /// Number of signatures
    #[arg(long)]
    signatures: Option<usize>,

    /// Nest sheets inside one another before folding
    #[arg(long, overrides_with = "no_fold_together")]
    fold_together: bool,

    /// Fold each sheet separately, even if the config nests them
    #[arg(long, overrides_with = "fold_together")]
    no_fold_together: bool,

    /// Paper size (HTML output)
    #[arg(long, value_enum)]
    paper: Option<PaperArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Html,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum StyleArg {
    Perfect,
    Saddle,
    Mixed,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Tabloid,
}

impl From<StyleArg> for booklet_impose::BindingStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Perfect => Self::Perfect,
            StyleArg::Saddle => Self::Saddle,
            StyleArg::Mixed => Self::Mixed,
        }
    }
}

impl From<PaperArg> for booklet_impose::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
            PaperArg::Tabloid => Self::Tabloid,
        }
    }
}

impl BookletArgs {
    /// Config file (or defaults) with explicit flags applied on top
    async fn resolve(&self) -> Result<BookletOptions> {
        let options = match &self.config {
            Some(path) => BookletOptions::load(path)
                .await
                .with_context(|| format!("loading config {}", path.display()))?,
            None => BookletOptions::default(),
        };

        Ok(self.apply(options))
    }

    /// `Some` only when one of the fold flags was given
    fn fold_together(&self) -> Option<bool> {
        if self.fold_together {
            Some(true)
        } else if self.no_fold_together {
            Some(false)
        } else {
            None
        }
    }

    fn apply(&self, mut options: BookletOptions) -> BookletOptions {
        if let Some(pages) = self.pages {
            options.pages = pages;
        }
        if let Some(pages_per_sheet) = self.pages_per_sheet {
            options.pages_per_sheet = pages_per_sheet;
        }
        if let Some(signatures) = self.signatures {
            options.signatures = signatures;
        }
        if let Some(fold_together) = self.fold_together() {
            options.fold_together = fold_together;
        }
        if let Some(paper) = self.paper {
            options.paper_size = paper.into();
        }

        options
    }
}

async fn load_table(path: Option<&Path>) -> Result<SchemeTable> {
    match path {
        Some(path) => SchemeTable::load(path)
            .await
            .with_context(|| format!("loading scheme table {}", path.display())),
        None => Ok(SchemeTable::builtin()),
    }
}

fn render(
    booklet: &booklet_impose::Booklet,
    table: &SchemeTable,
    options: &BookletOptions,
    format: FormatArg,
) -> Result<String> {
    let rendered = match format {
        FormatArg::Text => booklet_impose::render_text(booklet, table)?,
        FormatArg::Html => booklet_impose::render_html(booklet, table, options.paper_size)?,
        FormatArg::Json => {
            let sheets = booklet_impose::project_booklet(booklet, table)?;
            serde_json::to_string_pretty(&serde_json::json!({
                "booklet": booklet,
                "projected": sheets,
            }))?
        }
    };
    Ok(rendered)
}

fn print_statistics(stats: &booklet_impose::ImpositionStatistics) {
    println!("Imposition Statistics:");
    println!("  Pages: {}", stats.pages);
    println!("  Pages per sheet: {}", stats.pages_per_sheet);
    println!("  Sheets: {}", stats.sheets);
    println!("  Printed faces: {}", stats.printed_faces);
    println!("  Signatures: {}", stats.signatures);
    for (i, (sheets, pages)) in stats
        .sheets_per_signature
        .iter()
        .zip(&stats.pages_per_signature)
        .enumerate()
    {
        println!("    Signature {}: {} sheets, {} pages", i + 1, sheets, pages);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logger::StderrLogger::new(logger::level_from_flags(cli.verbose, cli.quiet))
        .init()
        .context("installing logger")?;

    let table = load_table(cli.schemes.as_deref()).await?;

    match cli.command {
        Commands::Impose {
            booklet,
            format,
            output,
            save_config,
        } => {
            let options = booklet.resolve().await?;
            let request = options.to_request(&table)?;
            let imposed = booklet_impose::make_booklet(&request)?;
            let rendered = render(&imposed, &table, &options, format)?;

            match output {
                Some(path) => {
                    tokio::fs::write(&path, rendered)
                        .await
                        .with_context(|| format!("writing {}", path.display()))?;
                    log::info!("Imposed {} pages → {}", options.pages, path.display());
                }
                None => println!("{}", rendered),
            }

            if let Some(path) = save_config {
                options.save(&path).await?;
                log::info!("Saved config → {}", path.display());
            }
        }

        Commands::Stats { booklet } => {
            let options = booklet.resolve().await?;
            let request = options.to_request(&table)?;
            let stats = booklet_impose::calculate_statistics(&request)?;
            print_statistics(&stats);
        }

        Commands::Plan {
            pages,
            pages_per_sheet,
            style,
            fold_together,
            max_bindable_sheets,
            max_foldable_layers,
            sheets_per_signature,
            signatures,
            impose,
        } => {
            let request = booklet_impose::PlanRequest {
                pages,
                pages_per_sheet,
                fold_together,
                style: style.into(),
                limits: booklet_impose::BindingLimits {
                    max_bindable_sheets,
                    max_foldable_layers,
                },
                locked_sheets_per_signature: sheets_per_signature,
                locked_signatures: signatures,
            };
            let plan = booklet_impose::plan_binding(&request, &table)?;

            println!("Binding Plan:");
            println!("  Style: {:?}", plan.style);
            println!("  Pages: {}", plan.pages);
            println!("  Sheets: {}", plan.sheets);
            println!("  Signatures: {}", plan.signatures);
            println!("  Sheets per signature: {}", plan.sheets_per_signature);
            println!("  Max sheets per signature: {}", plan.max_sheets_per_signature);
            println!("  Fold together: {}", plan.fold_together);
            if plan.overfull {
                println!("  Warning: too few signatures for the binder's limits");
            }

            if impose {
                let imposed = booklet_impose::make_booklet(&plan.to_request(&table)?)?;
                println!();
                print!("{}", booklet_impose::render_text(&imposed, &table)?);
            }
        }

        Commands::Schemes { json } => {
            if json {
                println!("{}", table.to_json()?);
            } else {
                for (pages_per_sheet, scheme) in table.iter() {
                    let layout = scheme.layout();
                    println!(
                        "{:>3} pages/sheet  {}x{} ({:?})  order {:?}",
                        pages_per_sheet,
                        layout.rows,
                        layout.cols,
                        layout.orientation(),
                        scheme.order()
                    );
                }
            }
        }
    }

    Ok(())
}
