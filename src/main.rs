use clap::{Parser, Subcommand};
use gen_nav::plugin::{HOOKS, HostConfig};
use gen_nav::{collect, config, output};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gen-nav")]
#[command(about = "Generate documentation navigation from the content tree")]
#[command(long_about = "\
Generate documentation navigation from the content tree

The content directory is the nav. Directories become sections, markdown files
become pages, and a two-digit prefix orders them.

Content structure:

  docs/
  ├── index.md                 # Landing page (not listed)
  ├── 01_getting-started/      # Section \"Getting Started\", listed first
  │   ├── 01_install.md        # \"Install\"
  │   └── 02_first-steps.md    # \"First Steps\"
  ├── 02_guide_/               # Single page \"Guide\" → 02_guide_/index.md
  │   ├── index.md             # Required when the name ends with '_'
  │   └── details.md           # Not listed
  ├── _snippets/               # Leading underscore = ignored
  └── faq.md                   # Unprefixed = sorted by name after prefixed ones

Published URLs drop the prefixes: 01_getting-started/01_install.md is served
as getting-started/install/.

Run 'gen-nav gen-config' to generate a documented gen-nav.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "gen-nav.toml", global = true)]
    config: PathBuf,

    /// Content directory, overriding docs_dir from the config file.
    ///
    /// Resolved against the current working directory, whereas docs_dir in
    /// the config file is resolved against the config file's directory.
    #[arg(long, global = true)]
    docs_dir: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the generated navigation as JSON
    Nav,
    /// Print the generated navigation as an indented tree
    Tree,
    /// List content files with the public URL they are published at
    Files,
    /// Validate the content directory without printing the navigation
    Check,
    /// Print a stock gen-nav.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Nav => {
            let (site, host) = load_site(&cli.config, cli.docs_dir)?;
            let nav = generate_nav(&site.gen_nav, host)?;
            println!("{}", serde_json::to_string_pretty(&nav)?);
        }
        Command::Tree => {
            let (site, host) = load_site(&cli.config, cli.docs_dir)?;
            let nav = generate_nav(&site.gen_nav, host)?;
            output::print_nav_tree(&nav);
        }
        Command::Files => {
            let (site, host) = load_site(&cli.config, cli.docs_dir)?;
            let site_dir = config_base(&cli.config).join(&site.site_dir);
            let files =
                collect::collect_files(&host.docs_dir, &site_dir, &site.gen_nav.nav_include)?;
            let renamed = (HOOKS.on_files_discovered)(&site.gen_nav, &files);
            output::print_files(&renamed);
        }
        Command::Check => {
            let (site, host) = load_site(&cli.config, cli.docs_dir)?;
            println!("==> Checking {}", host.docs_dir.display());
            let nav = generate_nav(&site.gen_nav, host)?;
            println!("==> Navigation is valid ({} top-level entries)", nav.len());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file and derive the host view, applying `--docs-dir`.
fn load_site(
    config_path: &Path,
    docs_dir: Option<PathBuf>,
) -> Result<(config::SiteConfig, HostConfig), config::ConfigError> {
    let site = config::load_config(config_path)?;
    let mut host = site.host_config(config_base(config_path));
    if let Some(docs_dir) = docs_dir {
        host.docs_dir = docs_dir;
    }
    Ok((site, host))
}

/// Run the config hook and take the resulting nav out of the host config.
fn generate_nav(
    settings: &config::GenNavConfig,
    mut host: HostConfig,
) -> Result<Vec<gen_nav::types::NavEntry>, Box<dyn std::error::Error>> {
    (HOOKS.on_config_ready)(settings, &mut host)?;
    Ok(host.nav.unwrap_or_default())
}

/// Directory that relative paths in the config file are resolved against.
fn config_base(config_path: &Path) -> &Path {
    config_path.parent().unwrap_or(Path::new(""))
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "gen_nav=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
