use statik_common::{PACKAGE_NAME, SOURCE_FILE_NAME, shim::ShimVersion};
use statik_packer::{
    Error,
    generate::{GenerateOptions, generate},
    source::SourceOptions,
};
use statik_tests::{
    fixture_binary, fixture_file, fixture_tree, generated_archive_entries, source_literal,
    source_mod_time, unix,
};
use std::{collections::BTreeSet, fs};

#[test]
fn generates_file_with_visible_files_only() {
    let source = tempfile::tempdir().unwrap();
    fixture_tree(source.path()).unwrap();
    let destination = tempfile::tempdir().unwrap();

    let path = generate(
        source.path(),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap();

    assert_eq!(
        path,
        destination
            .path()
            .join(PACKAGE_NAME)
            .join(SOURCE_FILE_NAME)
    );

    let entries = generated_archive_entries(&path).unwrap();
    assert_eq!(
        entries.keys().map(String::as_str).collect::<BTreeSet<_>>(),
        BTreeSet::from(["a.txt", "sub/b.bin"])
    );
    assert_eq!(entries["a.txt"], b"hello\n");
    assert_eq!(entries["sub/b.bin"], fixture_binary());
}

#[test]
fn generated_source_has_expected_layout() {
    let source = tempfile::tempdir().unwrap();
    fixture_tree(source.path()).unwrap();
    let destination = tempfile::tempdir().unwrap();

    let path = generate(
        source.path(),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap();
    let generated = fs::read_to_string(path).unwrap();

    assert!(generated.starts_with(
        "// Code generated by statik. DO NOT EDIT.\n\
         \n\
         package statik\n\
         \n\
         import (\n\
         \t\"time\"\n\
         \n\
         \t\"github.com/rakyll/statik/fs\"\n\
         )\n\
         \n\
         func init() {\n"
    ));
    assert!(generated.ends_with("\tfs.Register(modTime, data)\n}\n"));
    // hidden file is newer, but must not count
    assert_eq!(source_mod_time(&generated).unwrap(), Some(1_100_000_000));
}

#[test]
fn legacy_shim_registers_data_only() {
    let source = tempfile::tempdir().unwrap();
    fixture_tree(source.path()).unwrap();
    let destination = tempfile::tempdir().unwrap();

    let path = generate(
        source.path(),
        destination.path(),
        &GenerateOptions {
            source: SourceOptions {
                shim_version: ShimVersion::Legacy,
            },
            ..GenerateOptions::default()
        },
    )
    .unwrap();
    let generated = fs::read_to_string(&path).unwrap();

    assert!(!generated.contains("\"time\""));
    assert_eq!(source_mod_time(&generated).unwrap(), None);
    assert!(generated.ends_with("\tfs.Register(data)\n}\n"));
    assert_eq!(generated_archive_entries(&path).unwrap().len(), 2);
}

#[test]
fn mod_time_is_latest_regardless_of_order() {
    let source = tempfile::tempdir().unwrap();
    // file name order is different than modification time order
    fixture_file(&source.path().join("a"), b"1", unix(1_700_000_002)).unwrap();
    fixture_file(&source.path().join("b"), b"2", unix(1_700_000_003)).unwrap();
    fixture_file(&source.path().join("c").join("d"), b"3", unix(1_700_000_001)).unwrap();
    let destination = tempfile::tempdir().unwrap();

    let path = generate(
        source.path(),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap();

    assert_eq!(
        source_mod_time(&fs::read_to_string(path).unwrap()).unwrap(),
        Some(1_700_000_003)
    );
}

#[test]
fn empty_source_generates_empty_archive() {
    let source = tempfile::tempdir().unwrap();
    let destination = tempfile::tempdir().unwrap();

    let path = generate(
        source.path(),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap();
    let generated = fs::read_to_string(&path).unwrap();

    assert!(generated_archive_entries(&path).unwrap().is_empty());
    assert_eq!(source_mod_time(&generated).unwrap(), Some(-62_135_596_800));
}

#[test]
fn generation_is_idempotent() {
    let source = tempfile::tempdir().unwrap();
    fixture_tree(source.path()).unwrap();
    let destination = tempfile::tempdir().unwrap();

    let path = generate(
        source.path(),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap();
    let first = fs::read(&path).unwrap();

    generate(
        source.path(),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    // only the generated file, no leftovers
    assert_eq!(
        fs::read_dir(destination.path().join(PACKAGE_NAME))
            .unwrap()
            .count(),
        1
    );
}

#[test]
fn nested_paths_use_forward_slashes() {
    let source = tempfile::tempdir().unwrap();
    fixture_file(
        &source.path().join("sub").join("dir").join("file.txt"),
        b"nested",
        unix(1_600_000_000),
    )
    .unwrap();
    let destination = tempfile::tempdir().unwrap();

    let path = generate(
        source.path(),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap();

    let entries = generated_archive_entries(&path).unwrap();
    assert_eq!(
        entries.keys().map(String::as_str).collect::<Vec<_>>(),
        ["sub/dir/file.txt"]
    );
    assert!(!source_literal(&fs::read_to_string(&path).unwrap())
        .unwrap()
        .contains("sub\\\\dir"));
}

#[test]
fn missing_source_leaves_destination_untouched() {
    let source = tempfile::tempdir().unwrap();
    let destination = tempfile::tempdir().unwrap();

    let error = generate(
        &source.path().join("does-not-exist"),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(error, Error::Traversal { .. }));
    assert_eq!(fs::read_dir(destination.path()).unwrap().count(), 0);
}

#[test]
fn missing_source_keeps_previous_version() {
    let source = tempfile::tempdir().unwrap();
    fixture_tree(source.path()).unwrap();
    let destination = tempfile::tempdir().unwrap();

    let path = generate(
        source.path(),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap();
    let previous = fs::read(&path).unwrap();

    let error = generate(
        &source.path().join("does-not-exist"),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(error, Error::Traversal { .. }));
    assert_eq!(fs::read(&path).unwrap(), previous);
}

#[test]
fn failed_rename_leaves_destination_in_previous_state() {
    let source = tempfile::tempdir().unwrap();
    fixture_tree(source.path()).unwrap();
    let destination = tempfile::tempdir().unwrap();

    // non empty directory occupying target path makes the final rename fail
    let package = destination.path().join(PACKAGE_NAME);
    let target = package.join(SOURCE_FILE_NAME);
    fs::create_dir_all(&target).unwrap();
    fs::write(target.join("previous"), "previous").unwrap();

    let error = generate(
        source.path(),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(error, Error::Destination { .. }));
    assert!(target.is_dir());
    assert_eq!(
        fs::read_to_string(target.join("previous")).unwrap(),
        "previous"
    );
    // temporary file was cleaned up
    assert_eq!(fs::read_dir(&package).unwrap().count(), 1);
}

#[test]
fn destination_blocked_by_file_is_destination_error() {
    let source = tempfile::tempdir().unwrap();
    fixture_tree(source.path()).unwrap();
    let destination = tempfile::tempdir().unwrap();
    // regular file where package directory should be
    fs::write(destination.path().join(PACKAGE_NAME), "not a directory").unwrap();

    let error = generate(
        source.path(),
        destination.path(),
        &GenerateOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(error, Error::Destination { .. }));
    assert_eq!(
        fs::read_to_string(destination.path().join(PACKAGE_NAME)).unwrap(),
        "not a directory"
    );
}
