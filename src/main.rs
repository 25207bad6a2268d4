//! scnview: a scene-driven Wavefront OBJ viewer.
//!
//! Reads a scene file (dimension header plus one OBJ filename per line),
//! parses the listed models, and renders them with fixed Phong lighting in
//! a 512x512 window. A scene that yields no triangles falls back to a unit
//! cube. The camera comes from nine positional eye/at/up floats; `q`, `Q`,
//! or Escape quits.

mod app;
mod asset;
mod gfx;

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};

use app::ViewerApp;
use asset::{ObjModel, SceneFile};
use gfx::cube::unit_cube;
use gfx::{Camera, Mesh};

const DATA_DIR_ENV: &str = "SCNVIEW_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "./data";

struct Cli {
    scene: String,
    eye: [f32; 3],
    at: [f32; 3],
    up: [f32; 3],
}

impl Cli {
    /// Parses the 10 positional arguments. `None` means a usage error.
    fn parse(args: &[String]) -> Option<Cli> {
        if args.len() != 11 {
            return None;
        }

        let mut floats = [0.0f32; 9];
        for (slot, raw) in floats.iter_mut().zip(&args[2..11]) {
            *slot = raw.parse().ok()?;
        }

        Some(Cli {
            scene: args[1].clone(),
            eye: [floats[0], floats[1], floats[2]],
            at: [floats[3], floats[4], floats[5]],
            up: [floats[6], floats[7], floats[8]],
        })
    }
}

fn print_usage(program: &str, found: usize) {
    eprintln!("USAGE: expected 10 arguments but found {found}");
    eprintln!("{program} SCENE_FILENAME FROM_X FROM_Y FROM_Z AT_X AT_Y AT_Z UP_X UP_Y UP_Z");
    eprintln!(
        "SCENE_FILENAME: a scene file in the data directory \
         ({DEFAULT_DATA_DIR}, overridable with {DATA_DIR_ENV})"
    );
    eprintln!("FROM_X, FROM_Y, FROM_Z: eye position for the look-at transform");
    eprintln!("AT_X, AT_Y, AT_Z: point in the scene the eye looks at");
    eprintln!("UP_X, UP_Y, UP_Z: up direction for the eye");
}

/// Loads every model the scene lists and concatenates their triangles.
/// The first unloadable model aborts the run.
fn load_scene_geometry(data_dir: &Path, scene: &SceneFile) -> Result<Mesh> {
    let mut combined = Mesh::default();

    for name in &scene.model_files {
        if name.trim().is_empty() {
            warn!("scene lists an empty model filename, skipping");
            continue;
        }

        let path = data_dir.join(name);
        let model = ObjModel::load(&path)
            .with_context(|| format!("unable to load obj file '{}'", path.display()))?;
        info!(
            "loaded '{}': {} vertices, {} normals, {} triangles",
            model.filename,
            model.vertex_count(),
            model.normal_count(),
            model.triangle_count()
        );

        combined.append(Mesh::from_obj(&model)?);
    }

    Ok(combined)
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(cli) = Cli::parse(&args) else {
        let program = args.first().map(String::as_str).unwrap_or("scnview");
        print_usage(program, args.len().saturating_sub(1));
        std::process::exit(1);
    };

    let data_dir = PathBuf::from(
        env::var(DATA_DIR_ENV).unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string()),
    );

    info!("loading scene file '{}'", cli.scene);
    info!("eye position: {:?}", cli.eye);
    info!("at position: {:?}", cli.at);
    info!("up vector: {:?}", cli.up);

    let scene = SceneFile::load(data_dir.join(&cli.scene))
        .with_context(|| format!("unable to load scene file '{}'", cli.scene))?;

    let mut mesh = load_scene_geometry(&data_dir, &scene)?;
    if mesh.is_empty() {
        info!("scene supplied no renderable geometry, falling back to the unit cube");
        mesh = Mesh::from_cube(&unit_cube());
    }

    let camera = Camera::new(cli.eye, cli.at, cli.up);
    let app = ViewerApp::new(
        format!("scnview: {}", cli.scene),
        mesh.into_vertices(),
        camera,
    );
    app.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_ten_positional_arguments() {
        let cli = Cli::parse(&args(&[
            "scnview", "foo.scn", "1", "1", "2", "0", "0", "0", "0", "1", "0",
        ]))
        .unwrap();

        assert_eq!(cli.scene, "foo.scn");
        assert_eq!(cli.eye, [1.0, 1.0, 2.0]);
        assert_eq!(cli.at, [0.0, 0.0, 0.0]);
        assert_eq!(cli.up, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn wrong_argument_count_is_rejected() {
        assert!(Cli::parse(&args(&["scnview", "foo.scn", "1", "1", "2"])).is_none());
        assert!(Cli::parse(&args(&["scnview"])).is_none());
    }

    #[test]
    fn non_numeric_vector_component_is_rejected() {
        assert!(Cli::parse(&args(&[
            "scnview", "foo.scn", "1", "1", "2", "0", "zero", "0", "0", "1", "0",
        ]))
        .is_none());
    }

    fn scene_in(dir: &Path, contents: &str) -> SceneFile {
        let path = dir.join("scene.scn");
        std::fs::write(&path, contents).unwrap();
        SceneFile::load(&path).unwrap()
    }

    const TRIANGLE_OBJ: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

    #[test]
    fn geometry_from_listed_models_is_concatenated() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.obj"), TRIANGLE_OBJ).unwrap();
        std::fs::write(dir.path().join("b.obj"), TRIANGLE_OBJ).unwrap();
        let scene = scene_in(dir.path(), "2\na.obj\nb.obj\n");

        let mesh = load_scene_geometry(dir.path(), &scene).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
    }

    #[test]
    fn blank_model_filename_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.obj"), TRIANGLE_OBJ).unwrap();
        let scene = scene_in(dir.path(), "1\na.obj\n\n");
        assert_eq!(scene.model_files, vec!["a.obj", ""]);

        let mesh = load_scene_geometry(dir.path(), &scene).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
    }

    #[test]
    fn first_unloadable_model_aborts_loading() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.obj"), TRIANGLE_OBJ).unwrap();
        let scene = scene_in(dir.path(), "2\nmissing.obj\na.obj\n");

        assert!(load_scene_geometry(dir.path(), &scene).is_err());
    }

    #[test]
    fn faceless_scene_falls_back_to_unit_cube() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("points.obj"), "v 0 0 0\nv 1 0 0\n").unwrap();
        let scene = scene_in(dir.path(), "1\npoints.obj\n");

        let mesh = load_scene_geometry(dir.path(), &scene).unwrap();
        assert!(mesh.is_empty());

        let fallback = Mesh::from_cube(&unit_cube());
        assert_eq!(fallback.vertex_count(), 36);
    }
}
