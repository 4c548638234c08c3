use assert_fs::prelude::*;
use stack::template::Template;

#[test]
fn loads_template_fields() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = assert_fs::TempDir::new()?;
    let f = tmp.child("test.json");
    f.write_str(
        r#"{"AWSTemplateFormatVersion":"2010-09-09","Resources":{"A":{"Type":"AWS::SNS::Topic"},"B":{"Type":"AWS::SQS::Queue"}}}"#,
    )?;
    let t = Template::load(f.path())?;
    assert_eq!(t.format_version(), "2010-09-09");
    assert_eq!(t.resource_count(), 2);
    assert_eq!(t.path(), f.path());
    assert!(t.body().contains("AWS::SQS::Queue"));
    tmp.close()?;
    Ok(())
}

#[test]
fn missing_version_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = assert_fs::TempDir::new()?;
    let f = tmp.child("test.json");
    f.write_str("{}")?;
    let t = Template::load(f.path())?;
    assert_eq!(t.format_version(), "");
    assert_eq!(t.resource_count(), 0);
    Ok(())
}

#[test]
fn rejects_missing_file() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let err = Template::load(tmp.child("nope.json").path()).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("Error Reading Template File"), "got: {msg}");
}

#[test]
fn rejects_invalid_json() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let f = tmp.child("bad.json");
    f.write_str("{ nope").unwrap();
    let err = Template::load(f.path()).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("Error Parsing Template File"), "got: {msg}");
}

#[test]
fn rejects_non_object() {
    let tmp = assert_fs::TempDir::new().unwrap();
    let f = tmp.child("list.json");
    f.write_str("[1, 2]").unwrap();
    let err = Template::load(f.path()).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("JSON object"), "got: {msg}");
}
