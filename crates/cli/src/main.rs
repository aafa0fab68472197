use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail};
use clap::Parser;
use tracing::warn;

use softray::{
    canvas::{Canvas, Color},
    raster::{WireframeRender, grid_mesh},
    scene::test_scenes,
};
use softray_cpu::{RenderOptions, render};

#[derive(Debug, clap::Parser)]
struct CommandLineArguments {
    #[arg(long, help = "Render a builtin scene by name (see list-scenes)")]
    scene_name: Option<String>,

    #[arg(short, long, help = "Output filename")]
    output: Option<PathBuf>,
    #[arg(long, value_enum, help = "Force output format (otherwise inferred from extension)")]
    output_format: Option<OutputFormat>,

    #[arg(short = 't', long, help = "Worker threads (1 = sequential sweep)")]
    num_threads: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Ppm,
    Png,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    #[command(about = "List all builtin scenes")]
    ListScenes,
    #[command(about = "Draw the indexed wireframe grid demo instead of tracing")]
    Wireframe {
        #[arg(short, long, help = "Output filename")]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli_args = CommandLineArguments::parse();

    match cli_args.command {
        Some(Command::ListScenes) => {
            for descriptor in test_scenes::all_test_scenes() {
                println!("{}", descriptor.name);
            }
            return Ok(());
        }
        Some(Command::Wireframe { output }) => {
            let output = output.unwrap_or_else(|| PathBuf::from("wireframe.ppm"));
            let canvas = wireframe_demo();
            return save_canvas(&canvas, cli_args.output_format, &output);
        }
        None => {}
    }

    let Some(name) = cli_args.scene_name else {
        bail!("--scene-name is required (try the list-scenes subcommand)");
    };
    let descriptor = test_scenes::all_test_scenes()
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| anyhow!("no builtin scene named {name:?}"))?;

    let scene = (descriptor.scene_func)();

    let mut options = RenderOptions::default();
    if let Some(num_threads) = cli_args.num_threads {
        options.num_threads = num_threads;
    }

    let canvas = render(&scene, options);

    let output = cli_args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{name}.ppm")));
    save_canvas(&canvas, cli_args.output_format, &output)
}

// 320x240 canvas with a 10x10 quad grid, each quad split into two triangles
fn wireframe_demo() -> Canvas {
    let (width, height) = (320, 240);
    let mut canvas = Canvas::new(width, height);
    let (vertices, indices) = grid_mesh(width, height, 10, 10);

    let mut wireframe = WireframeRender::new(&mut canvas);
    wireframe.clear(Color { r: 0, g: 0, b: 0 });
    wireframe
        .draw_triangles(&vertices, &indices, Color { r: 0, g: 255, b: 0 })
        .expect("grid mesh indices are in range");

    canvas
}

fn save_canvas(
    canvas: &Canvas,
    forced_format: Option<OutputFormat>,
    output_path: &Path,
) -> anyhow::Result<()> {
    let output_format = forced_format.unwrap_or_else(|| sniff_format(output_path));

    match output_format {
        OutputFormat::Ppm => canvas.save_ppm(output_path)?,
        OutputFormat::Png => softray_cpu::utils::save_png(canvas, output_path)?,
    }
    Ok(())
}

fn sniff_format(path: &Path) -> OutputFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ppm") => OutputFormat::Ppm,
        Some("png") => OutputFormat::Png,
        Some(other) => {
            warn!("extension {other:?} not recognized, defaulting to ppm");
            OutputFormat::Ppm
        }
        None => {
            warn!("no extension on output path, defaulting to ppm");
            OutputFormat::Ppm
        }
    }
}
