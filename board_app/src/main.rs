//! Board demo application
//!
//! Builds a few example scenes and writes each one as a standalone TikZ
//! document. An optional first argument names a `.toml` or `.ron` board
//! configuration; without it the defaults are used.

use thiserror::Error;
use tikz_engine::foundation::logging;
use tikz_engine::prelude::*;

#[derive(Error, Debug)]
enum AppError {
    #[error("Failed to load board configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Pulleys, a throw and a light ray
struct MechanicsScene;

impl Scene for MechanicsScene {
    fn name(&self) -> &str {
        "mechanics"
    }

    fn construct(&self, board: &mut Board) -> Result<(), GeometryError> {
        let ceiling = Figure::line(Vec3::new(-2.0, 0.0, 0.0), Vec3::new(2.0, 0.0, 0.0));
        let mut pulley = Figure::held_pulley(Vec3::new(0.0, -2.0, 0.0), 0.5)?;
        pulley.set_color(BLUE);

        let mut throw = Figure::throw(Vec3::new(2.0, 4.0, 0.0), DOWN * 9.8, 0.8);
        throw.set_tips(STEALTH).shift(Vec3::new(3.0, -4.0, 0.0));

        let mut ray = Figure::light_ray(Vec3::new(-4.0, -1.0, 0.0), Vec3::new(-2.0, -3.0, 0.0))?;
        ray.set_color(RED);
        let mut mirror = ray.clone();
        mirror.reflect(UP, Some(Vec3::new(-2.0, -3.0, 0.0)))?;

        let mut caption = Label::text("pulley");
        caption.next_to(&pulley, RIGHT)?;

        board.add(ceiling).add(pulley).add(throw).add(ray).add(mirror).add(caption);
        Ok(())
    }
}

/// A right triangle with angle marks and a parabola through its corners
struct TriangleScene;

impl Scene for TriangleScene {
    fn name(&self) -> &str {
        "triangle"
    }

    fn construct(&self, board: &mut Board) -> Result<(), GeometryError> {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(4.0, 0.0, 0.0);
        let c = Vec3::new(4.0, 3.0, 0.0);

        let mut triangle = Figure::polygon(vec![a, b, c]);
        triangle.set_fill(LIGHTBLUE);

        let alpha = Figure::angle(b, a, c, &AngleMarker::default().with_label("\\alpha", 0.7))?;
        let corner = Figure::right_angle(a, b, c)?;

        let mut hypotenuse = Figure::line(a, c);
        hypotenuse.mark_length("5", 0.4)?;
        let mut base = Figure::line(a, b);
        base.add_label("4", -0.3)?;

        let mut parabola = Figure::parabola_through(a, c, Vec3::new(6.0, 0.0, 0.0), Axis::Y)?;
        parabola.set_color(GRAY);

        let mut copy = Group::new([triangle.clone().into(), alpha.clone().into()]);
        copy.scale(0.5, None)?
            .rotate(PI / 2.0, OUT, None)?
            .shift(Vec3::new(-3.0, 1.0, 0.0));

        board
            .add(triangle)
            .add(alpha)
            .add(corner)
            .add(hypotenuse)
            .add(base)
            .add(parabola)
            .add(copy);
        Ok(())
    }
}

fn load_config() -> Result<BoardConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading board configuration from {}", path);
            BoardConfig::load_from_file(&path)
        }
        None => Ok(BoardConfig::default()),
    }
}

fn draw(scene: &impl Scene, config: &BoardConfig) -> Result<(), AppError> {
    let board = Board::from_scene(scene, config.clone())?;
    let path = board.write()?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), AppError> {
    logging::init(logging::LevelFilter::Info);

    log::info!("Starting board demo");
    let config = load_config()?;

    draw(&MechanicsScene, &config)?;
    draw(&TriangleScene, &config)?;

    log::info!("Board demo finished");
    Ok(())
}
