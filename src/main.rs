use autoddoc::{assets, config, exclude, generate, output, scan, template};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "autoddoc")]
#[command(about = "Documentation generator for D projects using DDoc")]
#[command(long_about = "\
Documentation generator for D projects using DDoc

AutoDDoc scans the project root for D and DDoc sources (.d, .dd or .ddoc)
and drives the DDoc renderer over every discovered module, producing a
cross-linked static documentation site with shared navigation, a stylesheet
and a landing page.

Module names are derived from file paths, so the package/module hierarchy
must match the directory hierarchy: module 'pkg.util' is expected in
'./pkg/util.d'.

Getting started:
  1. Move into your project directory.
  2. Generate a configuration file:       autoddoc --gen-config
  3. Edit autoddoc.toml: set the project name, version, output directory
     and other parameters.
  4. Generate the documentation:          autoddoc")]
#[command(version)]
struct Cli {
    /// Configuration file to use to generate documentation
    #[arg(default_value = "autoddoc.toml", value_name = "CONFIG_FILE")]
    config_file: PathBuf,

    /// Project root to scan for sources
    #[arg(long, default_value = ".", value_name = "DIR")]
    source: PathBuf,

    /// Write a default configuration file and exit
    #[arg(
        short = 'g',
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "autoddoc.toml"
    )]
    gen_config: Option<PathBuf>,

    /// Write the default stylesheet and exit
    #[arg(
        short = 's',
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "autoddoc_style.css"
    )]
    gen_style: Option<PathBuf>,

    /// Write the default landing page and exit
    #[arg(
        short = 'i',
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = "autoddoc_index.dd"
    )]
    gen_index: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Emit default artifacts when requested; any of these suppresses the
    // build itself.
    let mut emitted = false;
    if let Some(path) = &cli.gen_config {
        fs::write(path, config::stock_config_toml())?;
        println!("Wrote default configuration to {}", path.display());
        emitted = true;
    }
    if let Some(path) = &cli.gen_style {
        fs::write(path, assets::DEFAULT_STYLE)?;
        println!("Wrote default stylesheet to {}", path.display());
        emitted = true;
    }
    if let Some(path) = &cli.gen_index {
        fs::write(path, assets::DEFAULT_INDEX)?;
        println!("Wrote default landing page to {}", path.display());
        emitted = true;
    }
    if emitted {
        return Ok(());
    }

    // Configuration problems (bad keys, bad patterns, bad links, empty
    // renderer command) must surface before any filesystem work.
    let config = config::load_config(&cli.config_file)?;
    let excludes = exclude::ExcludeSet::compile(&config.output.ignore_patterns())?;
    let links = config.output.links()?;
    let renderer = generate::Renderer::from_command(&config.ddoc.command)?;

    println!("==> Scanning {}", cli.source.display());
    let sources = scan::scan(&cli.source, &excludes)?;
    output::print_scan_output(&sources);

    let out_dir = PathBuf::from(config.output.directory());
    fs::create_dir_all(&out_dir)?;

    println!("==> Writing template and assets to {}", out_dir.display());
    let doc = template::assemble(&config.project, &sources, &links);
    let template_path = out_dir.join(template::TEMPLATE_FILE);
    fs::write(&template_path, doc)?;
    assets::install(
        &config.project,
        &config.output.style,
        &config.output.index,
        &out_dir,
    )?;

    println!("==> Rendering {} pages", sources.len() + 1);
    let report = generate::run(&sources, &cli.source, &out_dir, &template_path, &renderer)?;
    output::print_build_report(&report);

    Ok(())
}
