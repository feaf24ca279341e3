use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["localesDir"], "src/locales");
    assert_eq!(parsed["sourceLocale"], "en");
    assert_eq!(parsed["targetLocale"], "zh");
    assert_eq!(parsed["strategy"], "pattern");
    assert_eq!(parsed["reportFile"], "i18n_extraction_report.txt");
    assert!(
        parsed.get("checkedAttributes").is_some(),
        "Config should have 'checkedAttributes' field"
    );

    assert!(
        content.contains("\n  \"localesDir\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run(test.command().arg("init"))?;

    assert_eq!(code, 0);
    assert_eq!(stdout, "\u{2713} Created .i18nseedrc.json\n");
    assert!(test.root().join(".i18nseedrc.json").exists());

    let content = test.read_file(".i18nseedrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".i18nseedrc.json", "{}")?;

    let (code, _, stderr) = run(test.command().arg("init"))?;

    assert_eq!(code, 1);
    assert_eq!(stderr, "Error: .i18nseedrc.json already exists\n");
    assert_eq!(test.read_file(".i18nseedrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_drives_extract() -> Result<()> {
    let test = CliTest::with_file("src/Hero.tsx", "<h1>Launch Faster Today</h1>")?;

    let (code, _, _) = run(test.command().arg("init"))?;
    assert_eq!(code, 0);

    let (code, stdout, _) = run(&mut test.extract_command())?;
    assert_eq!(code, 0);
    assert!(stdout.contains("src/Hero.tsx: 1 string\n"));

    Ok(())
}
