mod utils;

use infill::error::Error;
use infill::registry::{discover, find_template_files};
use tempfile::TempDir;
use test_log::test;
use utils::write_tree;

#[test]
fn discovers_templates_recursively() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(
        temp_dir.path(),
        &[
            ("b.TEMPLATE", "<USER>"),
            ("a/b.TEMPLATE", "<HOST>"),
            ("a/deeper/c.conf.TEMPLATE", "<GENERATE_RANDOM_8>"),
            ("a/readme.md", "<NOT_A_TEMPLATE>"),
            ("b.POPULATED", "old output"),
        ],
    );

    let templates = discover(temp_dir.path()).unwrap();
    let names: Vec<&str> = templates.iter().map(|t| t.command_name()).collect();
    assert_eq!(names, vec!["a__b_TEMPLATE", "deeper__c_conf_TEMPLATE", "b_TEMPLATE"]);
}

#[test]
fn same_file_name_in_different_directories_gets_distinct_commands() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("b.TEMPLATE", ""), ("a/b.TEMPLATE", "")]);

    let templates = discover(temp_dir.path()).unwrap();
    assert_eq!(templates.len(), 2);
    assert_ne!(templates[0].command_name(), templates[1].command_name());
}

#[test]
fn colliding_command_names_fail_discovery() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("x/a/b.TEMPLATE", ""), ("y/a/b.TEMPLATE", "")]);

    let err = discover(temp_dir.path()).unwrap_err();
    assert!(matches!(err, Error::DuplicateCommand { command, .. } if command == "a__b_TEMPLATE"));
}

#[test]
fn discovered_template_carries_content_and_schema() {
    let temp_dir = TempDir::new().unwrap();
    write_tree(temp_dir.path(), &[("app.env.TEMPLATE", "U=<USER>\nP=<GENERATE_RANDOM_12>\n")]);

    let templates = discover(temp_dir.path()).unwrap();
    let template = &templates[0];
    assert_eq!(template.content(), "U=<USER>\nP=<GENERATE_RANDOM_12>\n");
    assert_eq!(template.occurrences(), ["<USER>", "<GENERATE_RANDOM_12>"]);
    assert_eq!(template.schema().fields().collect::<Vec<_>>(), vec!["USER"]);
    assert_eq!(template.output_path(), temp_dir.path().join("app.env.POPULATED"));
}

#[test]
fn missing_root_is_a_discovery_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");
    assert!(matches!(find_template_files(&missing), Err(Error::DiscoveryError(_))));
}

#[test]
fn empty_root_yields_no_templates() {
    let temp_dir = TempDir::new().unwrap();
    assert!(discover(temp_dir.path()).unwrap().is_empty());
}
