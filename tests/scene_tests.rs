use cg_scene::camera::Camera;
use cg_scene::loaders::write_mesh;
use cg_scene::primitives::Primitive;
use cg_scene::scene::{load_scene, SceneError, Viewport};
use glam::Vec3;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_primitive(dir: &Path, name: &str, shape: Primitive) {
    let mesh = shape.tessellate().unwrap();
    write_mesh(dir.join(name), &mesh).unwrap();
}

#[cfg(test)]
mod scene_loading_tests {
    use super::*;

    #[test]
    fn test_full_scene() {
        let dir = tempdir().unwrap();
        write_primitive(dir.path(), "plane.3d", Primitive::Plane { length: 2.0, divisions: 3 });
        write_primitive(dir.path(), "box.3d", Primitive::Box { length: 2.0, grid: 1 });
        write_primitive(dir.path(), "cone.3d", Primitive::Cone { radius: 1.0, height: 2.0, slices: 4, stacks: 2 });

        let xml = r#"
            <world>
                <window width="512" height="256" />
                <camera>
                    <position x="3" y="2" z="1" />
                    <lookAt x="0" y="0.5" z="0" />
                    <up x="0" y="1" z="0" />
                    <projection fov="45" near="0.5" far="100" />
                </camera>
                <group>
                    <models>
                        <model file="plane.3d" />
                        <model file="box.3d" />
                    </models>
                </group>
                <group>
                    <models>
                        <model file="cone.3d" />
                    </models>
                </group>
            </world>"#;
        let scene_path = dir.path().join("scene.xml");
        fs::write(&scene_path, xml).unwrap();

        let scene = load_scene(&scene_path).unwrap();

        assert_eq!(scene.viewport(), Viewport { width: 512, height: 256 });
        let cam = scene.camera();
        assert_eq!(cam.position, Vec3::new(3.0, 2.0, 1.0));
        assert_eq!(cam.look_at, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!((cam.fov, cam.near, cam.far), (45.0, 0.5, 100.0));

        let counts: Vec<usize> = scene.models().iter().map(|m| m.vertex_count()).collect();
        assert_eq!(counts, vec![54, 36, 12 + 48]);
    }

    #[test]
    fn test_missing_camera_uses_defaults() {
        let dir = tempdir().unwrap();
        write_primitive(dir.path(), "sphere.3d", Primitive::Sphere { radius: 1.0, slices: 6, stacks: 3 });
        let scene_path = dir.path().join("scene.xml");
        fs::write(
            &scene_path,
            r#"<world><group><models><model file="sphere.3d"/></models></group></world>"#,
        )
        .unwrap();

        let scene = load_scene(&scene_path).unwrap();

        assert_eq!(*scene.camera(), Camera::default());
        assert_eq!(scene.camera().position, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(scene.camera().fov, 60.0);
        assert_eq!(scene.camera().near, 1.0);
        assert_eq!(scene.camera().far, 1000.0);
        assert_eq!(scene.viewport(), Viewport { width: 800, height: 800 });
    }

    #[test]
    fn test_nonexistent_model_fails_whole_load() {
        let dir = tempdir().unwrap();
        let scene_path = dir.path().join("scene.xml");
        fs::write(
            &scene_path,
            r#"<world><group><models><model file="ghost.3d"/></models></group></world>"#,
        )
        .unwrap();

        match load_scene(&scene_path) {
            Err(SceneError::Model { path, .. }) => assert_eq!(path, dir.path().join("ghost.3d")),
            other => panic!("expected model error, got {:?}", other),
        }
    }

    #[test]
    fn test_one_bad_model_among_good_ones_fails() {
        let dir = tempdir().unwrap();
        write_primitive(dir.path(), "plane.3d", Primitive::Plane { length: 1.0, divisions: 1 });
        fs::write(dir.path().join("broken.3d"), "9\n0 0 0\n").unwrap();
        let scene_path = dir.path().join("scene.xml");
        fs::write(
            &scene_path,
            r#"<world><group><models>
                <model file="plane.3d"/>
                <model file="broken.3d"/>
            </models></group></world>"#,
        )
        .unwrap();

        assert!(matches!(load_scene(&scene_path), Err(SceneError::Model { .. })));
    }

    #[test]
    fn test_group_without_models_contributes_nothing() {
        let dir = tempdir().unwrap();
        write_primitive(dir.path(), "plane.3d", Primitive::Plane { length: 1.0, divisions: 2 });
        let scene_path = dir.path().join("scene.xml");
        fs::write(
            &scene_path,
            r#"<world>
                <group/>
                <group><models><model file="plane.3d"/></models></group>
                <group><other/></group>
            </world>"#,
        )
        .unwrap();

        let scene = load_scene(&scene_path).unwrap();
        assert_eq!(scene.models().len(), 1);
    }

    #[test]
    fn test_paths_resolve_against_scene_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("scenes").join("level1");
        fs::create_dir_all(nested.join("meshes")).unwrap();
        write_primitive(&nested.join("meshes"), "plane.3d", Primitive::Plane { length: 1.0, divisions: 1 });
        write_primitive(dir.path(), "shared.3d", Primitive::Box { length: 1.0, grid: 1 });

        let scene_path = nested.join("scene.xml");
        fs::write(
            &scene_path,
            r#"<world><group><models>
                <model file="meshes/plane.3d"/>
                <model file="../../shared.3d"/>
            </models></group></world>"#,
        )
        .unwrap();

        let scene = load_scene(&scene_path).unwrap();
        assert_eq!(scene.models()[0].vertex_count(), 6);
        assert_eq!(scene.models()[1].vertex_count(), 36);
    }

    #[test]
    fn test_empty_world_is_rejected() {
        let dir = tempdir().unwrap();
        let scene_path = dir.path().join("scene.xml");
        fs::write(&scene_path, "<world><window width=\"100\" height=\"100\"/></world>").unwrap();

        assert!(matches!(load_scene(&scene_path), Err(SceneError::NoModels)));
    }

    #[test]
    fn test_missing_scene_file() {
        let dir = tempdir().unwrap();
        let err = load_scene(dir.path().join("absent.xml")).unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let dir = tempdir().unwrap();
        write_primitive(dir.path(), "a.3d", Primitive::Sphere { radius: 1.0, slices: 5, stacks: 3 });
        write_primitive(dir.path(), "b.3d", Primitive::Plane { length: 1.0, divisions: 2 });
        let scene_path = dir.path().join("scene.xml");
        fs::write(
            &scene_path,
            r#"<world>
                <camera><position x="1" y="1" z="1"/></camera>
                <group><models><model file="a.3d"/><model file="b.3d"/><model file="a.3d"/></models></group>
            </world>"#,
        )
        .unwrap();

        let first = load_scene(&scene_path).unwrap();
        let second = load_scene(&scene_path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.models()[0], first.models()[2]);
    }

    #[test]
    fn test_demo_scene_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("scene.xml");
        let scene = load_scene(path).unwrap();

        let generated = Primitive::Plane { length: 2.0, divisions: 1 }.tessellate().unwrap();
        assert_eq!(scene.models(), &[generated]);
        assert_eq!(scene.camera().position, Vec3::new(3.0, 2.0, 1.0));
    }
}
