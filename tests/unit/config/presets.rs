use super::*;
use crate::config::BannerConfig;

#[test]
fn every_builtin_preset_deserializes() {
    for name in names() {
        let map = builtin(name).unwrap().unwrap();
        let cfg = BannerConfig::from_json_value(Value::Object(map)).unwrap();
        cfg.validate().unwrap();
    }
}

#[test]
fn unknown_builtin_is_none() {
    assert!(builtin("does_not_exist").unwrap().is_none());
}

#[test]
fn merge_overrides_win() {
    let mut base = builtin("modern_blue").unwrap().unwrap();
    let mut over = JsonMap::new();
    over.insert("pattern".into(), Value::from("stars"));
    merge_json(&mut base, over);
    assert_eq!(base["pattern"], "stars");
    assert_eq!(base["gradient_type"], "vertical");
}

#[test]
fn directory_presets_extend_and_override_builtins() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("preset_dir_test");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("modern_blue.json"), r#"{"pattern": "hearts"}"#).unwrap();
    std::fs::write(dir.join("custom.json"), r#"{"title": "X"}"#).unwrap();
    std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

    let lib = PresetLibrary::builtin().unwrap().with_dir(&dir).unwrap();
    assert_eq!(lib.get("modern_blue").unwrap()["pattern"], "hearts");
    assert_eq!(lib.get("custom").unwrap()["title"], "X");
    assert!(lib.names().any(|n| n == "sunset_glow"));
    assert!(lib.get("notes").is_none());
}

#[test]
fn non_object_preset_is_rejected() {
    assert!(parse_object("[1,2]", "bad").is_err());
}
