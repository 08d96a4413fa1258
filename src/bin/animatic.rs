use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use animatic::{
    BLUE, CountingSink, DrawableObject, Ease, FrameSink, Fps, JsonLinesSink, LEFT, PlaybackBatch,
    RED, RIGHT, Scene, SceneConfig, UP, WHITE,
};

#[derive(Parser, Debug)]
#[command(name = "animatic", version)]
struct Cli {
    /// Log engine events (arming, batch flushes) to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a built-in scene and write one JSON snapshot per frame.
    Render(RenderArgs),
    /// Play a built-in scene and print the frame count and final object states.
    Summary(SceneArgs),
    /// List the available easing functions with a few sample values.
    Eases,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Scene to play.
    #[arg(long, value_enum, default_value_t = SceneChoice::Demo)]
    scene: SceneChoice,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Default easing for batches that do not name one (e.g. `smooth`, `in_out_cubic`).
    #[arg(long, default_value = "linear")]
    ease: Ease,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output path for JSON lines, or `-` for stdout.
    #[arg(long, default_value = "-")]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SceneChoice {
    /// Two shapes swap places, then scale, fade and rotate.
    Demo,
    /// One circle moving right.
    Simple,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Summary(args) => cmd_summary(args),
        Command::Eases => cmd_eases(),
    }
}

fn config(args: &SceneArgs) -> anyhow::Result<SceneConfig> {
    Ok(SceneConfig::default()
        .with_fps(Fps::new(args.fps, 1)?)
        .with_default_ease(args.ease))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let out: Box<dyn Write + Send> = if args.out.as_os_str() == "-" {
        Box::new(BufWriter::new(std::io::stdout()))
    } else {
        if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        let f = File::create(&args.out)
            .with_context(|| format!("create output '{}'", args.out.display()))?;
        Box::new(BufWriter::new(f))
    };

    let mut scene = Scene::new(config(&args.scene)?, JsonLinesSink::new(out))?;
    play(args.scene.scene, &mut scene)?;
    let sink = scene.finish()?;
    eprintln!("wrote {} frames", sink.frames());
    Ok(())
}

fn cmd_summary(args: SceneArgs) -> anyhow::Result<()> {
    let mut scene = Scene::new(config(&args)?, CountingSink::new())?;
    play(args.scene, &mut scene)?;

    println!("frames: {}", scene.frames_emitted());
    println!("seconds: {:.3}", scene.elapsed_secs());
    for obj in scene.objects() {
        let bbox = obj.bounding_box();
        println!(
            "{} {:?} pos=({:.3}, {:.3}) scale={:.3} rot={:.3} opacity={:.3} bbox=[{:.3}, {:.3}, {:.3}, {:.3}]",
            obj.id(),
            obj.kind(),
            obj.position().x,
            obj.position().y,
            obj.scale(),
            obj.rotation(),
            obj.opacity(),
            bbox.x0,
            bbox.y0,
            bbox.x1,
            bbox.y1,
        );
    }
    scene.finish()?;
    Ok(())
}

fn cmd_eases() -> anyhow::Result<()> {
    for ease in Ease::ALL {
        let samples: Vec<String> = [0.25, 0.5, 0.75]
            .into_iter()
            .map(|t| format!("{:.4}", ease.apply(t)))
            .collect();
        let marker = if ease.overshoots() { " (overshoots)" } else { "" };
        println!("{:<12} {}{marker}", ease.name(), samples.join(" "));
    }
    Ok(())
}

fn play<S: FrameSink>(choice: SceneChoice, scene: &mut Scene<S>) -> anyhow::Result<()> {
    match choice {
        SceneChoice::Demo => play_demo(scene),
        SceneChoice::Simple => play_simple(scene),
    }
}

fn play_demo<S: FrameSink>(scene: &mut Scene<S>) -> anyhow::Result<()> {
    let circle = scene.add(DrawableObject::circle(1.0)?.with_color(RED)?.at(LEFT * 3.0)?);
    let square = scene.add(
        DrawableObject::square(1.5)?
            .with_color(BLUE)?
            .at(RIGHT * 3.0)?,
    );
    let title = scene.add(
        DrawableObject::text("animatic", 0.5)?
            .with_color(WHITE)?
            .at(UP * 2.0)?,
    );

    scene.play(
        PlaybackBatch::new(2.0)?
            .ease(Ease::InOutCubic)
            .with(circle.animate().move_to(RIGHT * 3.0)?)?
            .with(square.animate().move_to(LEFT * 3.0)?)?,
    )?;
    scene.wait(0.5)?;
    scene.play(
        PlaybackBatch::new(1.5)?
            .with(circle.animate().scale(1.5)?)?
            .with(square.animate().scale(0.5)?)?
            .with(title.animate().fade_out())?,
    )?;
    scene.wait(0.5)?;
    scene.play(
        PlaybackBatch::new(1.0)?
            .ease(Ease::Smooth)
            .with(title.animate().fade_in())?
            .with(circle.animate().rotate(std::f64::consts::PI)?)?,
    )?;
    Ok(())
}

fn play_simple<S: FrameSink>(scene: &mut Scene<S>) -> anyhow::Result<()> {
    let circle = scene.add(DrawableObject::circle(1.0)?.with_color(RED)?);
    scene.play(PlaybackBatch::new(2.0)?.with(circle.animate().move_to(RIGHT * 2.0)?)?)?;
    Ok(())
}
