//! An arrow sweeps across a row of dots that recolor as a group, then a heading morphs into a
//! larger caption.
//!
//! Run with `cargo run --example demo_scene [out.jsonl]`. Without an argument the frames stay
//! in memory and only the final object states are printed.

use animatic::{
    AnimationGroup, CYAN, DOWN, DrawableObject, Ease, FrameSink, InMemorySink, JsonLinesSink,
    LEFT, ORANGE, PURPLE, PlaybackBatch, RIGHT, Scene, SceneConfig, Tween, UP, YELLOW,
};

fn build<S: FrameSink>(scene: &mut Scene<S>) -> anyhow::Result<()> {
    let dots = [-3.0, -1.0, 1.0, 3.0]
        .into_iter()
        .map(|x| -> anyhow::Result<_> {
            Ok(scene.add(
                DrawableObject::circle(0.4)?
                    .with_color(CYAN)?
                    .with_fill_opacity(0.8)?
                    .at(RIGHT * x)?,
            ))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    let pointer = scene.add(
        DrawableObject::arrow(LEFT * 0.5, RIGHT * 0.5)?
            .with_tip(0.3, 0.2)?
            .with_color(YELLOW)?
            .at(LEFT * 4.0 + DOWN * 1.5)?,
    );
    let rule = scene.add(DrawableObject::line(LEFT * 4.0, RIGHT * 4.0)?.at(DOWN * 2.0)?);
    let heading = scene.add(
        DrawableObject::text("dots", 0.4)?
            .with_font("Serif", false)?
            .at(UP * 2.0)?,
    );

    let mut recolor = AnimationGroup::new();
    for (i, dot) in dots.iter().enumerate() {
        let color = if i % 2 == 0 { ORANGE } else { PURPLE };
        recolor = recolor.with(Tween::color_change(*dot, color)?)?;
    }
    scene.play(
        PlaybackBatch::new(3.0)?
            .with(pointer.animate().shift(RIGHT * 8.0)?)?
            .with_eased(recolor, Ease::Smooth)?,
    )?;

    let caption = DrawableObject::text("dots, recolored", 0.6)?
        .with_font("Serif", true)?
        .with_color(ORANGE)?
        .at(UP * 2.5)?;
    scene.play(
        PlaybackBatch::new(1.5)?
            .ease(Ease::OutBack)
            .with(Tween::transform(heading, caption))?
            .with(rule.animate().set_opacity(0.25)?)?
            .with(pointer.animate().fade_out())?,
    )?;
    scene.wait(1.0)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let config = SceneConfig::default().with_fps(animatic::Fps::new(30, 1)?);
    match std::env::args().nth(1) {
        Some(path) => {
            let out = std::io::BufWriter::new(std::fs::File::create(&path)?);
            let mut scene = Scene::new(config, JsonLinesSink::new(out))?;
            build(&mut scene)?;
            let sink = scene.finish()?;
            println!("wrote {} frames to {path}", sink.frames());
        }
        None => {
            let mut scene = Scene::new(config, InMemorySink::new())?;
            build(&mut scene)?;
            for obj in scene.objects() {
                let c = obj.color();
                println!(
                    "{} {:?} at ({:.2}, {:.2}) color ({:.2}, {:.2}, {:.2}) opacity {:.2}",
                    obj.id(),
                    obj.kind(),
                    obj.position().x,
                    obj.position().y,
                    c.r,
                    c.g,
                    c.b,
                    obj.opacity()
                );
            }
            let sink = scene.finish()?;
            println!("{} frames in memory", sink.frames().len());
        }
    }
    Ok(())
}
