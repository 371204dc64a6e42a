//! XML scene descriptions.
//!
//! ```xml
//! <world>
//!     <window width="512" height="512" />
//!     <camera>
//!         <position x="3" y="2" z="1" />
//!         <lookAt x="0" y="0" z="0" />
//!         <up x="0" y="1" z="0" />
//!         <projection fov="60" near="1" far="1000" />
//!     </camera>
//!     <group>
//!         <models>
//!             <model file="plane.3d" />
//!         </models>
//!     </group>
//! </world>
//! ```
//!
//! Structure is strict: a missing `<world>`, an unreadable model or an empty
//! model list fails the whole load. Attribute values are forgiving: anything
//! absent or unparsable keeps its default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use glam::Vec3;
use roxmltree::{Document, Node};
use thiserror::Error;

use super::{Scene, Viewport};
use crate::camera::Camera;
use crate::loaders::{read_mesh, MeshFileError};

#[derive(Error, Debug)]
pub enum SceneError {
    #[error("cannot read scene {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed scene XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("root element must be <world>, found <{0}>")]
    MissingWorld(String),
    #[error("failed to load model {path:?}: {source}")]
    Model {
        path: PathBuf,
        #[source]
        source: MeshFileError,
    },
    #[error("scene contains no models")]
    NoModels,
}

/// Loads a scene file. Model paths are resolved against the directory the
/// scene file lives in, not the working directory.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, SceneError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    let scene = parse_scene(&text, base_dir)?;
    log::info!(
        "loaded {:?}: {} models, {} triangles, {}x{} viewport",
        path,
        scene.models().len(),
        scene.triangle_count(),
        scene.viewport().width,
        scene.viewport().height
    );
    Ok(scene)
}

pub fn parse_scene(xml: &str, base_dir: &Path) -> Result<Scene, SceneError> {
    let doc = Document::parse(xml)?;
    let world = doc.root_element();
    if !world.has_tag_name("world") {
        return Err(SceneError::MissingWorld(
            world.tag_name().name().to_string(),
        ));
    }

    let viewport = child(world, "window")
        .map(read_window)
        .unwrap_or_default();
    let camera = child(world, "camera")
        .map(read_camera)
        .unwrap_or_default();

    let mut models = Vec::new();
    for group in children(world, "group") {
        let Some(list) = child(group, "models") else {
            continue;
        };
        for model in children(list, "model") {
            let Some(file) = model.attribute("file") else {
                log::warn!("<model> without a file attribute, skipping");
                continue;
            };

            let path = base_dir.join(file);
            let mesh = read_mesh(&path).map_err(|source| SceneError::Model {
                path: path.clone(),
                source,
            })?;
            log::debug!("model {:?}: {} triangles", path, mesh.triangle_count());
            models.push(mesh);
        }
    }

    if models.is_empty() {
        return Err(SceneError::NoModels);
    }

    Ok(Scene::new(viewport, camera, models))
}

fn child<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<Node<'a, 'i>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn children<'a, 'i: 'a>(
    node: Node<'a, 'i>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'i>> + 'a {
    node.children().filter(move |n| n.has_tag_name(name))
}

fn attr<T: FromStr>(node: Node, name: &str) -> Option<T> {
    let raw = node.attribute(name)?;
    let value = raw.trim().parse().ok();
    if value.is_none() {
        log::debug!("ignoring unparsable {}={:?} on <{}>", name, raw, node.tag_name().name());
    }
    value
}

fn read_window(node: Node) -> Viewport {
    let defaults = Viewport::default();
    let dim = |name: &str| attr::<u32>(node, name).filter(|&v| v > 0);
    Viewport {
        width: dim("width").unwrap_or(defaults.width),
        height: dim("height").unwrap_or(defaults.height),
    }
}

/// All three of x, y and z must parse for the vector to be used
fn read_vec3(node: Node) -> Option<Vec3> {
    Some(Vec3::new(
        attr(node, "x")?,
        attr(node, "y")?,
        attr(node, "z")?,
    ))
}

fn read_camera(node: Node) -> Camera {
    let mut camera = Camera::default();
    let vec = |name: &str| child(node, name).and_then(read_vec3);

    if let Some(v) = vec("position") {
        camera.position = v;
    }
    if let Some(v) = vec("lookAt") {
        camera.look_at = v;
    }
    if let Some(v) = vec("up") {
        camera.up = v;
    }

    if let Some(proj) = child(node, "projection") {
        camera.fov = attr(proj, "fov").unwrap_or(camera.fov);
        camera.near = attr(proj, "near").unwrap_or(camera.near);
        camera.far = attr(proj, "far").unwrap_or(camera.far);
    }

    camera
}
