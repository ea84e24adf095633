use std::fs;

use sitekit::{RenameParams, rename_certificates};

fn names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn renames_matching_certificates() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    for name in ["20230416-88123.jpg", "20221106-7.png", "readme.txt", "20230101.jpg"] {
        fs::write(d.join(name), name).unwrap();
    }

    let report = rename_certificates(d, &RenameParams::default()).unwrap();

    assert_eq!(report.renamed, 2);
    assert_eq!(report.skipped, 2);
    assert_eq!(report.conflicts, 0);
    assert_eq!(
        names(d),
        vec!["20221106.png", "20230101.jpg", "20230416.jpg", "readme.txt"]
    );
    // Content follows the file
    assert_eq!(
        fs::read_to_string(d.join("20230416.jpg")).unwrap(),
        "20230416-88123.jpg"
    );
    assert_eq!(
        report.renames[0],
        ("20221106-7.png".to_string(), "20221106.png".to_string())
    );
}

#[test]
fn never_overwrites_existing_targets() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    fs::write(d.join("20230416.jpg"), "original").unwrap();
    fs::write(d.join("20230416-1.jpg"), "first").unwrap();
    fs::write(d.join("20230501-1.jpg"), "a").unwrap();
    fs::write(d.join("20230501-2.jpg"), "b").unwrap();

    let report = rename_certificates(d, &RenameParams::default()).unwrap();

    assert_eq!(report.renamed, 1);
    assert_eq!(report.conflicts, 2);
    assert_eq!(fs::read_to_string(d.join("20230416.jpg")).unwrap(), "original");
    assert_eq!(fs::read_to_string(d.join("20230501.jpg")).unwrap(), "a");
    assert!(d.join("20230416-1.jpg").exists());
    assert!(d.join("20230501-2.jpg").exists());
}

#[test]
fn invalid_dates_are_skipped_when_validating() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    fs::write(d.join("20231345-1.jpg"), "").unwrap();
    fs::write(d.join("20240229-2.jpg"), "").unwrap();

    let params = RenameParams {
        validate_dates: true,
        ..Default::default()
    };
    let report = rename_certificates(d, &params).unwrap();
    assert_eq!(report.renamed, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(names(d), vec!["20231345-1.jpg", "20240229.jpg"]);
}

#[test]
fn dry_run_plans_without_renaming() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    fs::write(d.join("20230501-1.jpg"), "").unwrap();
    fs::write(d.join("20230501-2.jpg"), "").unwrap();

    let params = RenameParams {
        dry_run: true,
        ..Default::default()
    };
    let report = rename_certificates(d, &params).unwrap();
    assert_eq!(report.renamed, 1);
    assert_eq!(report.conflicts, 1);
    assert_eq!(names(d), vec!["20230501-1.jpg", "20230501-2.jpg"]);
}

#[test]
fn subdirectories_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let d = dir.path();
    fs::create_dir(d.join("20230501-1.jpg")).unwrap();

    let report = rename_certificates(d, &RenameParams::default()).unwrap();
    assert_eq!(report.renamed, 0);
    assert_eq!(report.skipped, 0);
}
