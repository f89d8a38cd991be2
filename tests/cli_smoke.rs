use std::path::PathBuf;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_yume")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) { "yume.exe" } else { "yume" });
            p
        })
}

#[test]
fn cli_collage_writes_image() {
    let dir = PathBuf::from("target").join("cli_smoke_collage");
    std::fs::create_dir_all(&dir).unwrap();

    let mut inputs = Vec::new();
    for (i, rgb) in [[200u8, 30, 30], [30, 200, 30], [30, 30, 200]].into_iter().enumerate() {
        let path = dir.join(format!("in_{i}.png"));
        image::RgbImage::from_pixel(16, 16, image::Rgb(rgb))
            .save(&path)
            .unwrap();
        inputs.push(path);
    }
    let out_path = dir.join("collage.png");
    let _ = std::fs::remove_file(&out_path);

    let status = std::process::Command::new(exe())
        .arg("collage")
        .arg("--out")
        .arg(&out_path)
        .args(&inputs)
        .status()
        .unwrap();

    assert!(status.success());
    let out = image::open(&out_path).unwrap();
    assert_eq!((out.width(), out.height()), (830, 830));
}

#[test]
fn cli_scenes_prints_summary() {
    let dir = PathBuf::from("target").join("cli_smoke_scenes");
    std::fs::create_dir_all(&dir).unwrap();

    let in_path = dir.join("scenes.json");
    let f = std::fs::File::create(&in_path).unwrap();
    serde_json::to_writer_pretty(
        f,
        &serde_json::json!([
            {"type": "INT", "location": "Hotel Lobby", "characters": ["Ram", "Mona"], "raw_text": "INT. HOTEL LOBBY"},
            {"raw_text": "EXT. STREET"}
        ]),
    )
    .unwrap();

    let output = std::process::Command::new(exe())
        .arg("scenes")
        .arg("--in")
        .arg(&in_path)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- Scene 1: INT Hotel Lobby (2 characters)"), "{stdout}");
    assert!(stdout.contains("- Scene 2: (0 characters)"), "{stdout}");
}

#[test]
fn cli_location_prints_prompt() {
    let dir = PathBuf::from("target").join("cli_smoke_location");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(dir.join("envs")).unwrap();

    std::fs::write(
        dir.join("world.json"),
        r#"{"default_style": "watercolor", "lighting": "golden hour"}"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("envs").join("temple.json"),
        r#"{"name": "Old Temple", "description": "mossy stone steps"}"#,
    )
    .unwrap();
    // relative to the config file, not the working directory
    std::fs::write(
        dir.join("yume.yaml"),
        "world: world.json\nenvironments: envs\n",
    )
    .unwrap();

    let output = std::process::Command::new(exe())
        .arg("location")
        .arg("--config")
        .arg(dir.join("yume.yaml"))
        .arg("OLD TEMPLE")
        .args(["--time", "dusk"])
        .output()
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "OLD TEMPLE, mossy stone steps, style: watercolor, lighting: golden hour, set during dusk\n"
    );
}
