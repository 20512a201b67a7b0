use super::*;

fn config_file(name: &str, json: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("loopcppn-cli-unit");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, json).unwrap();
    path
}

fn parse(args: &[&str]) -> loopcppn::RenderConfig {
    let cli = Cli::try_parse_from(std::iter::once("loopcppn").chain(args.iter().copied())).unwrap();
    cli.into_config().unwrap().0
}

#[test]
fn bare_flags_turn_modes_on() {
    let cfg = parse(&["--pattern", "--gray"]);
    assert!(cfg.pattern && cfg.gray);
    let cfg = parse(&[]);
    assert!(!cfg.pattern && !cfg.gray);
}

#[test]
fn explicit_false_overrides_config_file() {
    let path = config_file("modes_on.json", r#"{ "pattern": true, "gray": true }"#);
    let path = path.to_str().unwrap();

    let cfg = parse(&["--config", path]);
    assert!(cfg.pattern && cfg.gray);

    let cfg = parse(&["--config", path, "--pattern", "false", "--gray=false"]);
    assert!(!cfg.pattern);
    assert!(!cfg.gray);
}

#[test]
fn value_flags_override_config_file() {
    let path = config_file("sized.json", r#"{ "name": "json", "width": 8, "seed": 5 }"#);
    let cfg = parse(&["--config", path.to_str().unwrap(), "--width", "16", "--name", "flag"]);
    assert_eq!(cfg.width, 16);
    assert_eq!(cfg.seed, 5);
    assert_eq!(cfg.name, "flag");
}
