use anyhow::Result;

use crate::{CliTest, run};

const GREETING: &str = r#"export function Greeting() {
  return <h1>Welcome Home</h1>;
}
export function NameField() {
  return <input title="Enter your name" />;
}
"#;

const EN_EXPECTED: &str = r#"{
  "greeting": {
    "welcome_home": "Welcome Home",
    "enter_your_name": "Enter your name"
  }
}
"#;

const ZH_EXPECTED: &str = r#"{
  "greeting": {
    "welcome_home": "[需要翻译: Welcome Home]",
    "enter_your_name": "[需要翻译: Enter your name]"
  }
}
"#;

#[test]
fn test_extract_dry_run() -> Result<()> {
    let test = CliTest::with_file("src/pages/Greeting.tsx", GREETING)?;

    let (code, stdout, _) = run(&mut test.extract_command())?;

    assert_eq!(code, 0);
    assert!(stdout.contains("src/pages/Greeting.tsx: 2 strings\n"));
    assert!(stdout.contains("Would update src/locales/en.json (2 added, 0 updated)\n"));
    assert!(stdout.contains("Would update src/locales/zh.json (2 added, 0 updated)\n"));
    assert!(stdout.contains("Run with --apply to write the locale files\n"));
    assert!(test.root().join("i18n_extraction_report.txt").exists());
    assert!(!test.root().join("src/locales").exists());

    Ok(())
}

#[test]
fn test_extract_report_content() -> Result<()> {
    let test = CliTest::with_file("src/pages/Greeting.tsx", GREETING)?;

    let (code, _, _) = run(&mut test.extract_command())?;
    assert_eq!(code, 0);

    let rule = "=".repeat(60);
    let expected = format!(
        "i18n String Extraction Report\n{rule}\n\n\
         \n{rule}\nFile: src/pages/Greeting.tsx\n{rule}\n\n\
         1. Line 2: \"Welcome Home\"\n   Type: jsx-text\n   Suggested key: welcome_home\n\n\
         2. Line 5: \"Enter your name\"\n   Type: attribute-value\n   Suggested key: enter_your_name\n\n"
    );
    assert_eq!(test.read_file("i18n_extraction_report.txt")?, expected);

    Ok(())
}

#[test]
fn test_extract_apply_writes_locales() -> Result<()> {
    let test = CliTest::with_file("src/pages/Greeting.tsx", GREETING)?;

    let (code, stdout, _) = run(test.extract_command().arg("--apply"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("\u{2713} Updated src/locales/en.json (2 added, 0 updated)\n"));
    assert!(stdout.contains("\u{2713} Updated src/locales/zh.json (2 added, 0 updated)\n"));
    assert_eq!(test.read_file("src/locales/en.json")?, EN_EXPECTED);
    assert_eq!(test.read_file("src/locales/zh.json")?, ZH_EXPECTED);

    Ok(())
}

#[test]
fn test_extract_apply_twice_is_stable() -> Result<()> {
    let test = CliTest::with_file("src/pages/Greeting.tsx", GREETING)?;

    run(test.extract_command().arg("--apply"))?;
    let (code, stdout, _) = run(test.extract_command().arg("--apply"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("Updated src/locales/en.json (0 added, 2 updated)\n"));
    assert_eq!(test.read_file("src/locales/en.json")?, EN_EXPECTED);
    assert_eq!(test.read_file("src/locales/zh.json")?, ZH_EXPECTED);

    Ok(())
}

#[test]
fn test_extract_keeps_existing_entries() -> Result<()> {
    let test = CliTest::with_file("src/pages/Greeting.tsx", GREETING)?;
    test.write_file(
        "src/locales/zh.json",
        r#"{"nav": {"home": "首页"}, "greeting": {"welcome_home": "欢迎回家"}}"#,
    )?;

    let (code, _, _) = run(test.extract_command().arg("--apply"))?;
    assert_eq!(code, 0);

    let zh: serde_json::Value = serde_json::from_str(&test.read_file("src/locales/zh.json")?)?;
    assert_eq!(zh["nav"]["home"], "首页");
    assert_eq!(zh["greeting"]["welcome_home"], "[需要翻译: Welcome Home]");
    assert_eq!(zh["greeting"]["enter_your_name"], "[需要翻译: Enter your name]");

    Ok(())
}

#[test]
fn test_extract_missing_file_warns() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.tsx", GREETING)?;

    let (code, stdout, _) = run(test
        .extract_command()
        .arg("src/Missing.tsx")
        .arg("src/Greeting.tsx"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("warning: Skipping src/Missing.tsx: file not found\n"));
    assert!(stdout.contains("src/Greeting.tsx: 2 strings\n"));

    Ok(())
}

#[test]
fn test_extract_malformed_locale_fails() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.tsx", GREETING)?;
    test.write_file("src/locales/zh.json", "{ broken")?;

    let (code, _, stderr) = run(test.extract_command().arg("--apply"))?;

    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error: Failed to parse JSON:"));
    assert!(!test.root().join("src/locales/en.json").exists());
    assert_eq!(test.read_file("src/locales/zh.json")?, "{ broken");

    Ok(())
}

#[test]
fn test_extract_ast_strategy() -> Result<()> {
    let test = CliTest::with_file("src/Greeting.tsx", GREETING)?;
    test.write_file("src/Broken.tsx", "export const X = () => <div>Broken Markup")?;

    let (code, stdout, _) = run(test.extract_command().args(["--strategy", "ast", "-v"]))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("(strategy: Ast)"));
    assert!(stdout.contains("warning: Skipping src/Broken.tsx:"));
    assert!(stdout.contains("\"Welcome Home\" -> greeting.welcome_home\n"));
    assert!(stdout.contains("\"Enter your name\" -> greeting.enter_your_name\n"));

    Ok(())
}

#[test]
fn test_extract_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nseedrc.json",
        r#"{
  "localesDir": "public/locales",
  "targetLocale": "ja",
  "includes": ["app"],
  "ignoreTexts": ["Welcome Home"]
}"#,
    )?;
    test.write_file("app/Greeting.tsx", GREETING)?;
    test.write_file("app/Greeting.test.tsx", "<h1>Test Only Text</h1>")?;

    let (code, stdout, _) = run(test.extract_command().arg("--apply"))?;

    assert_eq!(code, 0);
    assert!(stdout.contains("app/Greeting.tsx: 1 string\n"));
    assert!(!stdout.contains("Greeting.test.tsx"));
    assert_eq!(
        test.read_file("public/locales/ja.json")?,
        "{\n  \"greeting\": {\n    \"enter_your_name\": \"[需要翻译: Enter your name]\"\n  }\n}\n"
    );

    Ok(())
}

#[test]
fn test_extract_root_from_env() -> Result<()> {
    let test = CliTest::with_file("web/src/Greeting.tsx", GREETING)?;

    let (code, _, _) = run(test
        .extract_command()
        .env("I18N_SEED_ROOT", test.root().join("web"))
        .arg("--apply"))?;

    assert_eq!(code, 0);
    assert_eq!(test.read_file("web/src/locales/en.json")?, EN_EXPECTED);
    assert!(test.root().join("web/i18n_extraction_report.txt").exists());

    Ok(())
}

#[test]
fn test_extract_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file(
        ".i18nseedrc.json",
        r#"{"sourceLocale": "en", "targetLocale": "en"}"#,
    )?;

    let (code, _, stderr) = run(&mut test.extract_command())?;

    assert_eq!(code, 2);
    assert!(stderr.contains("must differ"));
    assert!(!test.root().join("i18n_extraction_report.txt").exists());

    Ok(())
}
