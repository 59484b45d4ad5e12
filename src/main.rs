use clap::{Parser, Subcommand};
use pageforge::compose::Composed;
use pageforge::content::ContentClient;
use pageforge::{build, compose, config, output, routes};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "pageforge")]
#[command(about = "Composes marketing-site pages from CMS-authored JSON")]
#[command(long_about = "\
Composes marketing-site pages from CMS-authored JSON

The CMS is the data source. Each page document names an ordered list of
typed sections; pageforge resolves a request path to a document, derives
SEO metadata with layered fallbacks, and renders every section through a
closed registry — a broken section degrades to an inline placeholder
instead of failing the page.

Path rules:

  /                              Home document (stored under the 'home' slug)
  /home                          Redirects to / (home is never dual-addressed)
  /<slug>                        Any published document, e.g. /about
  /eligibility/<sub>             Namespace-prefixed lookup
  /steps-to-test/<sub>           Allow-listed: unknown sub-slugs are 404,
                                 even if the origin has a document

Metadata resolution (first available wins):
  Title:       seo.title → slug
  OG image:    seo.openGraph.image → site default (1200x630)
  Twitter:     mirrors the resolved Open Graph values

Run 'pageforge gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site configuration file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Output directory for pre-rendered pages
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compose a single page and print the HTML
    Render {
        /// Request path, e.g. "/about" or "/steps-to-test/get-your-results"
        path: String,
        /// Write the document to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Pre-render every published page into the output directory
    Build,
    /// List the routes that would be pre-rendered
    Routes,
    /// Verify the content origin is reachable
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = config::SiteConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Render { path, out } => {
            let client = ContentClient::from_config(&config.origin);
            match compose::compose(&client, &config, &path) {
                Ok(Composed::Document(html)) => emit(out.as_deref(), &html)?,
                Ok(Composed::NotFound(html)) => {
                    eprintln!("{path}: not found (rendering the standard 404 document)");
                    emit(out.as_deref(), &html)?;
                }
                Ok(Composed::Redirect(to)) => println!("{path} redirects to {to}"),
                Err(err) => {
                    log::error!("failed to compose {path}: {err}");
                    return Err(err.into());
                }
            }
        }
        Command::Build => {
            let client = ContentClient::from_config(&config.origin);
            println!("==> Building site → {}", cli.output.display());
            let report = build::build_site(&client, &config, &cli.output)?;
            output::print_build_report(&report);
        }
        Command::Routes => {
            let client = ContentClient::from_config(&config.origin);
            let mut paths = vec!["/".to_string()];
            paths.extend(
                routes::static_paths(&client)
                    .into_iter()
                    .map(|slug| routes::public_path(&slug)),
            );
            output::print_routes(&paths);
        }
        Command::Check => {
            let client = ContentClient::from_config(&config.origin);
            match client.all_slugs() {
                Ok(slugs) => {
                    println!(
                        "==> Origin {} is reachable ({} published pages)",
                        config.origin.base_url,
                        slugs.len()
                    );
                }
                Err(err) => {
                    log::error!("origin check failed: {err}");
                    return Err(err.into());
                }
            }
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Write the document to a file, or stdout when no target is given.
fn emit(out: Option<&std::path::Path>, html: &str) -> std::io::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, html)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
        None => {
            println!("{html}");
            Ok(())
        }
    }
}
