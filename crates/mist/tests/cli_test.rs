use std::process::{Command, Output};

fn run_mist(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mist"))
        .args(args)
        .env_remove("MIST_LOG_DIR")
        .env("RUST_LOG", "info")
        .output()
        .expect("failed to run mist binary")
}

#[test]
fn test_defaults_are_emitted_as_json() -> anyhow::Result<()> {
    let output = run_mist(&[]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["exec_mode"], "all");
    assert_eq!(json["batch_size"], 2);
    assert_eq!(json["max_patch_size"], serde_json::json!([256, 256, 128]));
    assert_eq!(json["loss"], "dice_ce");
    Ok(())
}

#[test]
fn test_train_mode_record() -> anyhow::Result<()> {
    let output = run_mist(&["--exec-mode", "train", "--batch-size", "4", "--amp"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["exec_mode"], "train");
    assert_eq!(json["batch_size"], 4);
    assert_eq!(json["amp"], true);

    // Summary goes to stderr, not into the JSON stream
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MIST configuration"));
    Ok(())
}

#[test]
fn test_help_exits_zero_on_stdout() {
    let output = run_mist(&["--help"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--exec-mode"));
    assert!(stdout.contains("--use-native-spacing"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_range_error_exits_non_zero() {
    let output = run_mist(&["--batch-size", "-1"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("RangeError"));
    assert!(stderr.contains("--batch-size"));
    assert!(stderr.contains("-1"));
}

#[test]
fn test_choice_error_names_option() {
    let output = run_mist(&["--model", "resnet"]);
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ChoiceError"));
    assert!(stderr.contains("--model"));
    assert!(stderr.contains("resnet"));
}

#[test]
fn test_unknown_option_exits_non_zero() {
    let output = run_mist(&["--learning_rate", "0.1"]);
    assert_ne!(output.status.code(), Some(0));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("UnknownOptionError"));
}

#[test]
fn test_library_parse_matches_binary() -> anyhow::Result<()> {
    let tokens = ["--folds", "0", "2", "--sw-overlap", "0.5", "--blend-mode", "constant"];
    let args = mist::parse(tokens)?;

    let output = run_mist(&tokens);
    assert!(output.status.success());
    let from_binary: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let from_library: serde_json::Value = serde_json::from_str(&args.to_json()?)?;
    assert_eq!(from_binary, from_library);
    Ok(())
}
