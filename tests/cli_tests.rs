use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn generator() -> Command {
    Command::new(env!("CARGO_BIN_EXE_generator"))
}

fn engine() -> Command {
    Command::new(env!("CARGO_BIN_EXE_engine"))
}

#[cfg(test)]
mod generator_cli_tests {
    use super::*;

    #[test]
    fn test_plane_success() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.3d");
        let output = generator()
            .args(["plane", "10", "2"])
            .arg(&out)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("24 vertices"));
        assert!(fs::read_to_string(&out).unwrap().starts_with("24\n"));
    }

    #[test]
    fn test_failures_exit_with_one() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("x.3d");
        let out = out.to_str().unwrap();

        let cases: [&[&str]; 7] = [
            &["box", "1", out],
            &["plane", "inf", "1", out],
            &["plane", "1", "4294967295", out],
            &["sphere", "1", "2", "2", out],
            &["cone", "0", "1", "3", "1", out],
            &["torus", "1", "1", out],
            &[],
        ];
        for args in cases {
            let status = generator().args(args).status().unwrap();
            assert_eq!(status.code(), Some(1), "args {:?}", args);
        }
        assert!(!dir.path().join("x.3d").exists());
    }
}

#[cfg(test)]
mod engine_cli_tests {
    use super::*;

    #[test]
    fn test_missing_argument() {
        assert_eq!(engine().status().unwrap().code(), Some(1));
    }

    #[test]
    fn test_bad_scene() {
        let dir = tempdir().unwrap();
        let scene = dir.path().join("scene.xml");
        fs::write(&scene, "<world/>").unwrap();
        assert_eq!(engine().arg(&scene).status().unwrap().code(), Some(1));
    }

    #[test]
    fn test_json_summary() {
        let dir = tempdir().unwrap();
        let status = generator()
            .args(["sphere", "1", "8", "4"])
            .arg(dir.path().join("sphere.3d"))
            .status()
            .unwrap();
        assert!(status.success());

        let scene = dir.path().join("scene.xml");
        fs::write(
            &scene,
            r#"<world><group><models><model file="sphere.3d"/></models></group></world>"#,
        )
        .unwrap();

        let output = engine().arg(&scene).args(["--summary", "json"]).output().unwrap();
        assert!(output.status.success());

        let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(summary["total_triangles"], 64);
        assert_eq!(summary["viewport"]["height"], 800);
    }
}
