use yume::{LocationPromptBuilder, WorldData, YumeConfig, io};

fn temp_dir(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "yume_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn write_world(root: &std::path::Path) {
    io::write_json(
        root.join("world.json"),
        &serde_json::json!({"default_style": "watercolor", "lighting": "golden hour", "era": "1920s"}),
    )
    .unwrap();
    io::write_json(
        root.join("environments").join("old_temple.json"),
        &serde_json::json!({"name": "Old Temple", "description": "mossy stone steps"}),
    )
    .unwrap();
    io::write_json(
        root.join("environments").join("harbor.json"),
        &serde_json::json!({"description": "fishing boats", "lighting": "fog"}),
    )
    .unwrap();
    io::write_text(root.join("environments").join("notes.txt"), "ignored").unwrap();
}

#[test]
fn loads_world_and_keys_environments() {
    let tmp = temp_dir("world_load");
    write_world(&tmp);

    let data = WorldData::load(tmp.join("world.json"), tmp.join("environments")).unwrap();
    assert_eq!(data.world.default_style.as_deref(), Some("watercolor"));
    let keys: Vec<&str> = data.environments.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["harbor", "old temple"]);

    let builder = LocationPromptBuilder::from_world_data(data);
    assert_eq!(
        builder.build("Old Temple", Some("dawn")),
        "Old Temple, mossy stone steps, style: watercolor, lighting: golden hour, set during dawn"
    );
    assert_eq!(
        builder.build("Harbor", None),
        "Harbor, fishing boats, style: watercolor, lighting: fog"
    );
    assert_eq!(builder.build("Moon Base", None), "Moon Base");

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn missing_environment_dir_is_empty() {
    let tmp = temp_dir("world_no_envs");
    io::write_json(tmp.join("world.json"), &serde_json::json!({})).unwrap();

    let data = WorldData::load(tmp.join("world.json"), tmp.join("nope")).unwrap();
    assert!(data.environments.is_empty());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn yaml_config_resolves_against_its_directory() {
    let tmp = temp_dir("world_config");
    write_world(&tmp);
    io::write_text(
        tmp.join("yume.yaml"),
        "world: world.json\nenvironments: environments\n",
    )
    .unwrap();

    let cfg = YumeConfig::from_path(tmp.join("yume.yaml"))
        .unwrap()
        .rebase(&tmp);
    assert_eq!(cfg.world, tmp.join("world.json"));

    let builder = cfg.location_builder().unwrap();
    assert!(builder.environment("HARBOR").is_some());

    std::fs::remove_dir_all(&tmp).ok();
}

#[test]
fn duplicate_environment_key_warns_and_later_file_wins() {
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt as _;

    struct Warnings(Arc<Mutex<usize>>);

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Warnings {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            if *event.metadata().level() == tracing::Level::WARN {
                *self.0.lock().unwrap() += 1;
            }
        }
    }

    let tmp = temp_dir("world_duplicate");
    io::write_json(tmp.join("world.json"), &serde_json::json!({})).unwrap();
    io::write_json(
        tmp.join("envs").join("a_lobby.json"),
        &serde_json::json!({"name": "Lobby", "description": "marble floor"}),
    )
    .unwrap();
    io::write_json(
        tmp.join("envs").join("lobby.json"),
        &serde_json::json!({"description": "faded carpet"}),
    )
    .unwrap();

    let warnings = Arc::new(Mutex::new(0));
    let subscriber = tracing_subscriber::registry().with(Warnings(warnings.clone()));
    let data = tracing::subscriber::with_default(subscriber, || {
        WorldData::load(tmp.join("world.json"), tmp.join("envs")).unwrap()
    });

    assert_eq!(*warnings.lock().unwrap(), 1);
    assert_eq!(data.environments.len(), 1);
    assert_eq!(
        data.environments["lobby"].description.as_deref(),
        Some("faded carpet")
    );

    std::fs::remove_dir_all(&tmp).ok();
}
