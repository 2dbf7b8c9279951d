use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use wiresim::{
    init_logging, parse_program, spawn_run, thread_safe, Config, ExecMode, HighlightBuffer,
    PixmapSurface, Simulator, Viewport,
};

/// Wire-cutting EDM toolpath visualizer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// G-code program to visualize
    #[arg()]
    program: PathBuf,

    /// Execution speed in steps per second
    #[arg(short, long)]
    speed: Option<f64>,

    /// Unit-to-pixel scale factor
    #[arg(long)]
    scale: Option<f64>,

    /// Drawing surface width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Drawing surface height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Output image path
    #[arg(short, long, default_value = "toolpath.png")]
    output: PathBuf,

    /// Step through the program without the run timer
    #[arg(long)]
    single_step: bool,

    /// Presentation zoom applied to the output image
    #[arg(long)]
    zoom: Option<f64>,

    /// Presentation pan, in output pixels
    #[arg(long, default_value_t = 0.0)]
    pan_x: f64,

    /// Presentation pan, in output pixels
    #[arg(long, default_value_t = 0.0)]
    pan_y: f64,

    /// Print the parsed program as JSON and exit
    #[arg(long)]
    dump_commands: bool,

    /// Config file (.json or .toml) instead of ~/.wiresim/config.json
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();

    info!("WireSim {} ({})", wiresim::VERSION, wiresim::BUILD_DATE);

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::load_or_default(),
    };
    let speed = args.speed.unwrap_or(config.speed);
    let scale = args.scale.unwrap_or(config.scale);
    let width = args.width.unwrap_or(config.canvas_width);
    let height = args.height.unwrap_or(config.canvas_height);

    let text = std::fs::read_to_string(&args.program)
        .with_context(|| format!("reading {}", args.program.display()))?;

    if args.dump_commands {
        println!("{}", serde_json::to_string_pretty(&parse_program(&text))?);
        return Ok(());
    }

    let surface = PixmapSurface::new(width, height)?;
    let editor = HighlightBuffer::from(text.as_str());
    let simulator = Simulator::from_text(&text, speed, scale, surface, editor)?;
    info!(
        "loaded {}: {} commands",
        args.program.display(),
        simulator.session().command_count()
    );

    let simulator = if args.single_step {
        let mut simulator = simulator;
        while simulator.mode() != ExecMode::Finished {
            simulator.step();
        }
        simulator
    } else {
        let shared = thread_safe(simulator);
        spawn_run(shared.clone()).await?;
        Arc::try_unwrap(shared)
            .map_err(|_| anyhow::anyhow!("run task still holds the simulator"))?
            .into_inner()
    };

    info!(
        "executed {} commands, final position {}",
        simulator.cursor(),
        simulator.session().machine().position()
    );
    info!("toolpath bounds: {}", simulator.bounds());

    if args.zoom.is_some() || args.pan_x != 0.0 || args.pan_y != 0.0 {
        let mut viewport = Viewport::new();
        if let Some(zoom) = args.zoom {
            viewport.set_zoom(zoom);
        }
        viewport.set_pan(args.pan_x, args.pan_y);
        let image = viewport.apply(&simulator.surface().to_image());
        image
            .save(&args.output)
            .with_context(|| format!("writing {}", args.output.display()))?;
    } else {
        simulator.surface().save(&args.output)?;
    }
    info!("wrote {}", args.output.display());

    Ok(())
}
