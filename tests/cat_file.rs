use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;
use common::{
    fake_hash, init_repository_dir, repository_dir, run_minigit_command, write_object,
};

#[rstest]
fn read_blob_object_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
    let hash = fake_hash("3b18e5");
    write_object(
        &dir.path().join(".git"),
        &hash,
        &format!("blob {}", file_content.len()),
        file_content.as_bytes(),
    );

    run_minigit_command(dir.path(), &["cat-file", "-p", &hash])
        .assert()
        .success()
        .stdout(predicate::eq(file_content));

    Ok(())
}

#[rstest]
fn read_highly_compressible_blob(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let file_content = "all work and no play makes jack a dull boy\n".repeat(5_000);
    let hash = fake_hash("9e");
    write_object(
        &dir.path().join(".git"),
        &hash,
        &format!("blob {}", file_content.len()),
        file_content.as_bytes(),
    );

    run_minigit_command(dir.path(), &["cat-file", &hash])
        .assert()
        .success()
        .stdout(predicate::str::diff(file_content));
}

#[rstest]
fn read_several_objects_in_the_order_given(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let git_dir = dir.path().join(".git");
    write_object(&git_dir, &fake_hash("aa"), "blob 6", b"first\n");
    write_object(&git_dir, &fake_hash("bb"), "blob 7", b"second\n");

    run_minigit_command(dir.path(), &["c", &fake_hash("bb"), &fake_hash("aa")])
        .assert()
        .success()
        .stdout(predicate::str::diff("second\nfirst\n"));
}

#[rstest]
fn read_object_type_from_header(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let git_dir = dir.path().join(".git");
    write_object(&git_dir, &fake_hash("cc"), "tree 9", b"abc\0defgh");
    write_object(&git_dir, &fake_hash("dd"), "commit 4", b"tree");

    run_minigit_command(
        dir.path(),
        &["cat-file", "-t", &fake_hash("cc"), &fake_hash("dd")],
    )
    .assert()
    .success()
    .stdout(predicate::str::diff("tree\ncommit\n"));
}

#[rstest]
fn read_tree_body_with_embedded_nul_bytes(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_object(
        &dir.path().join(".git"),
        &fake_hash("ee"),
        "tree 9",
        b"abc\0defgh",
    );

    let assert = run_minigit_command(dir.path(), &["cat-file", &fake_hash("ee")])
        .assert()
        .success();

    assert_eq!(assert.get_output().stdout, b"abc\0defgh");
}

#[rstest]
#[case("")]
#[case("a")]
#[case("ab")]
fn reading_a_short_hash_fails(init_repository_dir: TempDir, #[case] hash: &str) {
    run_minigit_command(init_repository_dir.path(), &["cat-file", hash])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid hash"));
}

#[rstest]
fn reading_a_missing_object_fails_without_side_effects(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let hash = fake_hash("ab");

    run_minigit_command(dir.path(), &["cat-file", &hash])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("Error reading hash {}", hash)))
        .stderr(predicate::str::contains("unable to read object file"));

    assert!(!dir.path().join(".git").join("objects").join("ab").exists());
}

#[rstest]
fn reading_stops_at_the_first_failure(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    let git_dir = dir.path().join(".git");
    write_object(&git_dir, &fake_hash("aa"), "blob 3", b"one");
    write_object(&git_dir, &fake_hash("cc"), "blob 5", b"three");

    run_minigit_command(
        dir.path(),
        &["cat-file", &fake_hash("aa"), &fake_hash("bb"), &fake_hash("cc")],
    )
    .assert()
    .failure()
    .stdout(predicate::str::diff("one"));
}

#[rstest]
fn reading_a_corrupt_object_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let hash = fake_hash("ff");
    let shard = dir.path().join(".git").join("objects").join("ff");
    std::fs::create_dir_all(&shard)?;
    std::fs::write(shard.join(&hash[2..]), "not compressed")?;

    run_minigit_command(dir.path(), &["cat-file", &hash])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is corrupt"))
        .stderr(predicate::str::contains("not a valid zlib stream"));

    Ok(())
}

#[rstest]
fn reading_from_git_dir_flag(repository_dir: TempDir) {
    let git_dir = repository_dir.path().join("elsewhere");
    std::fs::create_dir_all(&git_dir).unwrap();
    write_object(&git_dir, &fake_hash("12"), "blob 5", b"hello");

    run_minigit_command(
        repository_dir.path(),
        &["--git-dir", "elsewhere", "cat-file", &fake_hash("12")],
    )
    .assert()
    .success()
    .stdout(predicate::str::diff("hello"));
}
