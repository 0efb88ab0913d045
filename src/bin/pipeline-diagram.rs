use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use pipeline_diagram::{GraphvizCli, LayoutEngine, OutputFormat, RenderConfig};

#[derive(Parser, Debug)]
#[command(name = "pipeline-diagram", version)]
struct Cli {
    /// Log at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the pipeline diagram (requires Graphviz `dot`).
    Render(RenderArgs),
    /// Print the DOT source to stdout.
    Dot,
    /// Print the diagram as JSON to stdout.
    Json,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output path without extension. The DOT source is written here.
    #[arg(long, default_value = "/tmp/triangle_pipeline")]
    out: PathBuf,

    /// Image format.
    #[arg(long, value_enum, default_value_t = FormatChoice::Png)]
    format: FormatChoice,

    /// Graphviz layout program.
    #[arg(long, value_enum, default_value_t = LayoutChoice::Dot)]
    layout: LayoutChoice,

    /// Graphviz executable.
    #[arg(long, default_value = "dot")]
    engine_bin: PathBuf,

    /// Delete the DOT source after rendering.
    #[arg(long)]
    cleanup: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Svg,
    Pdf,
    Jpeg,
    Gif,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayoutChoice {
    Dot,
    Neato,
    Fdp,
    Sfdp,
    Circo,
    Twopi,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Dot => cmd_dot(),
        Command::Json => cmd_json(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let format = match args.format {
        FormatChoice::Png => OutputFormat::Png,
        FormatChoice::Svg => OutputFormat::Svg,
        FormatChoice::Pdf => OutputFormat::Pdf,
        FormatChoice::Jpeg => OutputFormat::Jpeg,
        FormatChoice::Gif => OutputFormat::Gif,
    };
    let layout = match args.layout {
        LayoutChoice::Dot => LayoutEngine::Dot,
        LayoutChoice::Neato => LayoutEngine::Neato,
        LayoutChoice::Fdp => LayoutEngine::Fdp,
        LayoutChoice::Sfdp => LayoutEngine::Sfdp,
        LayoutChoice::Circo => LayoutEngine::Circo,
        LayoutChoice::Twopi => LayoutEngine::Twopi,
    };

    let cfg = RenderConfig::new(args.out, format)
        .with_layout(layout)
        .with_cleanup(args.cleanup);
    let engine = GraphvizCli::with_executable(args.engine_bin);

    let diagram = pipeline_diagram::build();
    let out = pipeline_diagram::render_with(&diagram, &cfg, &engine)?;

    if let Some(src) = &out.source_path {
        eprintln!("kept {}", src.display());
    }
    eprintln!("wrote {}", out.image_path.display());
    Ok(())
}

fn cmd_dot() -> anyhow::Result<()> {
    let src = pipeline_diagram::to_dot(&pipeline_diagram::build());
    std::io::stdout()
        .lock()
        .write_all(src.as_bytes())
        .context("write dot source to stdout")?;
    Ok(())
}

fn cmd_json() -> anyhow::Result<()> {
    let diagram = pipeline_diagram::build();
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &diagram).context("serialize diagram JSON")?;
    writeln!(stdout).context("write newline to stdout")?;
    Ok(())
}
