//! Config store tests against a temporary home.

use std::fs;
use std::io::Cursor;
use stack::config::{Config, ConfigStore, Loaded};
use stack::error::StackError;
use stack::input::Prompter;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn ada() -> Config {
    Config {
        fname: "Ada".into(),
        lname: "Lovelace".into(),
        email: "ada@example.com".into(),
    }
}

#[test]
fn save_then_load_round_trips() -> TestResult {
    let tmp = TempDir::new()?;
    let store = ConfigStore::at(tmp.path().join("config"), false, false);

    store.save_config(&ada())?;
    let loaded = store.load()?;
    assert_eq!(loaded, ada());

    store.save_config(&loaded)?;
    assert_eq!(store.load()?, ada());
    Ok(())
}

#[test]
fn save_writes_compact_json() -> TestResult {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("config");
    ConfigStore::at(&path, false, false).save_config(&ada())?;
    assert_eq!(
        fs::read_to_string(&path)?,
        r#"{"fname":"Ada","lname":"Lovelace","email":"ada@example.com"}"#
    );
    Ok(())
}

#[test]
fn dry_run_save_leaves_file_untouched() -> TestResult {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("config");
    fs::write(&path, r#"{"fname":"Grace","lname":"Hopper","email":"grace@example.com"}"#)?;
    let before = fs::read(&path)?;

    ConfigStore::at(&path, true, false).save_config(&ada())?;
    assert_eq!(fs::read(&path)?, before);
    Ok(())
}

#[test]
fn missing_fields_load_as_empty() -> TestResult {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("config");
    fs::write(&path, r#"{"fname":"Ada"}"#)?;

    let cfg = ConfigStore::at(&path, false, false).load()?;
    assert_eq!(cfg.fname, "Ada");
    assert_eq!(cfg.lname, "");
    assert_eq!(cfg.email, "");
    Ok(())
}

#[test]
fn corrupt_file_is_an_error() -> TestResult {
    let tmp = TempDir::new()?;
    let path = tmp.path().join("config");
    fs::write(&path, "not json")?;

    let err = ConfigStore::at(&path, false, false).load().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StackError>(),
        Some(StackError::CorruptConfig { path: p, .. }) if *p == path
    ));
    Ok(())
}

#[test]
fn get_config_reads_existing_file() -> TestResult {
    let tmp = TempDir::new()?;
    let store = ConfigStore::at(tmp.path().join("config"), false, false);
    store.save_config(&ada())?;

    let mut p = prompter("");
    assert_eq!(store.get_config(&mut p)?, Loaded::Existing(ada()));
    assert!(p.into_output().is_empty());
    Ok(())
}

#[test]
fn get_config_declined_writes_nothing() -> TestResult {
    let tmp = TempDir::new()?;
    let dir = tmp.path().join(".stack");
    let store = ConfigStore::at(dir.join("config"), false, false);

    let err = store.get_config(&mut prompter("n\n")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StackError>(),
        Some(StackError::ConfigDeclined)
    ));
    assert!(!dir.exists());
    Ok(())
}

#[test]
fn get_config_creates_and_saves() -> TestResult {
    let tmp = TempDir::new()?;
    let path = tmp.path().join(".stack").join("config");
    let store = ConfigStore::at(&path, false, false);

    let mut p = prompter("y\nAda\nLovelace\nada@example.com\ny\n");
    assert_eq!(store.get_config(&mut p)?, Loaded::Created(ada()));
    assert_eq!(store.load()?, ada());

    let out = String::from_utf8(p.into_output())?;
    assert!(out.contains("Stack CONFIG NOT FOUND"));
    assert!(out.contains("Configuration File Saved"));
    Ok(())
}

#[test]
fn get_config_discarded_keeps_values_in_memory_only() -> TestResult {
    let tmp = TempDir::new()?;
    let path = tmp.path().join(".stack").join("config");
    let store = ConfigStore::at(&path, false, false);

    let mut p = prompter("\nAda\nLovelace\nada@example.com\nn\n");
    let loaded = store.get_config(&mut p)?;
    assert_eq!(loaded, Loaded::Unsaved(ada()));
    assert!(path.parent().is_some_and(|d| d.is_dir()));
    assert!(!path.exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn created_files_get_expected_modes() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new()?;
    let dir = tmp.path().join(".stack");
    let path = dir.join("config");
    let store = ConfigStore::at(&path, false, false);
    store.get_config(&mut prompter("y\nAda\nLovelace\nada@example.com\ny\n"))?;

    assert_eq!(fs::metadata(&dir)?.permissions().mode() & 0o777, 0o700);
    assert_eq!(fs::metadata(&path)?.permissions().mode() & 0o777, 0o644);
    Ok(())
}

#[test]
fn verbose_save_reports_success() -> TestResult {
    let tmp = TempDir::new()?;
    let store = ConfigStore::at(tmp.path().join("config"), false, true);
    let mut cfg = Config::default();
    let mut p = prompter("Ada\nLovelace\nada@example.com\ny\n");
    store.build_config(&mut p, &mut cfg)?;
    let out = String::from_utf8(p.into_output())?;
    assert!(out.contains("Configuration File Saved Successfully"));
    Ok(())
}

#[test]
fn list_config_prints_every_field() -> TestResult {
    let store = ConfigStore::at("unused", false, false);
    let mut out = Vec::new();
    store.list_config(&ada(), &mut out)?;
    let out = String::from_utf8(out)?;
    assert!(out.contains("First Name:📓  Ada"));
    assert!(out.contains(" Last Name:📓  Lovelace"));
    assert!(out.contains("     Email:📧  ada@example.com"));
    Ok(())
}
