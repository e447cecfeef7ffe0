use std::io::Write;

use qsettings_decoder::{SettingsError, SettingsFile, SettingsValue};

const SAMPLE: &str = r#"
; written by the toolkit
[General]
title=Main Window
names=alpha, "beta, gamma", delta
literal=@@home
missing=@Invalid()
geometry=@Rect(10 20 300 400)
windowState=@ByteArray(\0\0\0\xff\0\0\0\x1)
spaced%20key=yes
escaped=tab\there
commented=kept ; dropped
joined=first \
  second
dup=old
dup=new

[MainWindow]
toolbar\visible=true

[recent]
size=2
1\path=/tmp/a
2\path=/tmp/b
"#;

fn sample() -> SettingsFile {
    SettingsFile::parse(SAMPLE)
}

fn text(value: &str) -> SettingsValue {
    SettingsValue::Text(value.to_string())
}

#[test]
fn plain_and_escaped_text() {
    let settings = sample();
    assert_eq!(settings.lookup("title").unwrap(), text("Main Window"));
    assert_eq!(settings.lookup("escaped").unwrap(), text("tab\there"));
    assert_eq!(settings.lookup("commented").unwrap(), text("kept"));
    assert_eq!(settings.lookup("joined").unwrap(), text("first second"));
    assert_eq!(settings.lookup("dup").unwrap(), text("new"));
}

#[test]
fn unquoted_commas_make_a_list() {
    let settings = sample();
    assert_eq!(
        settings.lookup("names").unwrap(),
        SettingsValue::List(vec![
            "alpha".to_string(),
            "beta, gamma".to_string(),
            "delta".to_string(),
        ])
    );
    assert_eq!(settings.lookup("names[1]").unwrap(), text("beta, gamma"));
    assert!(matches!(
        settings.lookup("names[5]"),
        Err(SettingsError::NotFound(_))
    ));
}

#[test]
fn typed_values() {
    let settings = sample();
    assert_eq!(settings.lookup("literal").unwrap(), text("@home"));
    assert_eq!(settings.lookup("missing").unwrap(), SettingsValue::Invalid);
    assert_eq!(settings.lookup("geometry").unwrap(), text("10 20 300 400"));
    assert_eq!(
        settings.lookup("windowState").unwrap(),
        SettingsValue::Bytes(vec![0, 0, 0, 0xFF, 0, 0, 0, 1])
    );
}

#[test]
fn groups_and_array_indices() {
    let settings = sample();
    assert_eq!(
        settings.lookup("MainWindow/toolbar/visible").unwrap(),
        text("true")
    );
    assert_eq!(settings.lookup("recent[0]/path").unwrap(), text("/tmp/a"));
    assert_eq!(settings.lookup("recent[1]/path").unwrap(), text("/tmp/b"));
    assert_eq!(settings.lookup("recent/size").unwrap(), text("2"));
}

#[test]
fn percent_escaped_keys() {
    assert_eq!(sample().lookup("spaced key").unwrap(), text("yes"));
}

#[test]
fn lookup_errors() {
    let settings = sample();
    match settings.lookup("MainWindow/nope") {
        Err(SettingsError::NotFound(key)) => assert_eq!(key, "nope"),
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert!(matches!(
        settings.lookup("a[b[1]/x"),
        Err(SettingsError::BadPath(component)) if component == "a[b[1]"
    ));
    assert!(matches!(settings.lookup(""), Err(SettingsError::EmptyPath)));
    assert_eq!(
        SettingsError::NotFound("nope".to_string()).to_string(),
        "Key 'nope' not set"
    );
}

#[test]
fn values_print_like_the_cli() {
    let mut out = Vec::new();
    text("Main Window").write_to(&mut out).unwrap();
    SettingsValue::List(vec!["a".to_string(), "b".to_string()])
        .write_to(&mut out)
        .unwrap();
    SettingsValue::Invalid.write_to(&mut out).unwrap();
    SettingsValue::Bytes(vec![0xFF, 0x00]).write_to(&mut out).unwrap();

    assert_eq!(out, b"Main Window\na, b\n\n\xff\x00".to_vec());
}

#[test]
fn open_reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[Editor]\nfont=Mono\n").unwrap();
    file.flush().unwrap();

    let settings = SettingsFile::open(file.path()).unwrap();
    assert_eq!(settings.lookup("Editor/font").unwrap(), text("Mono"));
}

#[test]
fn open_rejects_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.conf");

    match SettingsFile::open(&path) {
        Err(SettingsError::MissingFile(reported)) => assert_eq!(reported, path),
        other => panic!("expected MissingFile, got {:?}", other),
    }
    assert!(matches!(
        SettingsFile::open(dir.path()),
        Err(SettingsError::MissingFile(_))
    ));
}

#[test]
fn leading_byte_order_mark_is_ignored() {
    let settings = SettingsFile::parse("\u{FEFF}[MainWindow]\ngeometry=abc\n");
    assert_eq!(settings.lookup("MainWindow/geometry").unwrap(), text("abc"));
    assert!(matches!(
        settings.lookup("geometry"),
        Err(SettingsError::NotFound(_))
    ));
}

#[test]
fn escaped_backslash_before_continuation() {
    let settings = SettingsFile::parse("path=C:\\\\\\\n  more\nplain=C:\\\\\nnext=1\n");
    assert_eq!(settings.lookup("path").unwrap(), text("C:\\more"));
    assert_eq!(settings.lookup("plain").unwrap(), text("C:\\"));
    assert_eq!(settings.lookup("next").unwrap(), text("1"));
}
