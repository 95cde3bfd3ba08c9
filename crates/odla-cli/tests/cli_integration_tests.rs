/// Black-box CLI tests for odla
///
/// Each test runs the binary against its own temporary database.
use predicates::prelude::*;

mod helpers;
use helpers::{assertions, CliTestHarness};

#[test]
fn test_cli_help_and_version() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("Odla"))
        .stdout(predicate::str::contains("calendar"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("odla"));

    harness
        .run_failure(&["invalid-command"])
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_catalog_import_list_and_show() {
    let harness = CliTestHarness::with_catalog();

    harness
        .run_success(&["plants", "list"])
        .stdout(predicate::str::contains("Ros"))
        .stdout(predicate::str::contains("Äppelträd"))
        .stdout(predicate::str::contains("Basilika"))
        .stdout(predicate::str::contains("Page 1 of 1 (3 total)"));

    harness
        .run_success(&["plants", "list", "--search", "RO"])
        .stdout(predicate::str::contains("Ros"))
        .stdout(predicate::str::contains("Basilika").not());

    harness
        .run_success(&["plants", "list", "--category", "träd"])
        .stdout(predicate::str::contains("Äppelträd"))
        .stdout(predicate::str::contains("Ros").not());

    harness
        .run_success(&["plants", "list", "--type", "kaktus"])
        .stdout(predicate::str::contains("No plants found."));

    harness
        .run_success(&["plants", "show", "2"])
        .stdout(predicate::str::contains("Äppelträd"))
        .stdout(predicate::str::contains("Beskärning"))
        .stdout(predicate::str::contains("Februari, Mars"))
        .stdout(predicate::str::contains("Beskär innan savningen."));

    harness
        .run_failure(&["plants", "show", "99"])
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_catalog_import_rejects_bad_files() {
    let harness = CliTestHarness::new();
    let bad = harness.write_file("bad.json", r#"{"name": "not an array"}"#);

    harness
        .run_failure(&["plants", "import", bad.to_str().unwrap()])
        .stderr(predicate::str::contains("not a JSON array of plants"));

    harness
        .run_failure(&["plants", "import", "missing.json"])
        .stderr(predicate::str::contains("Could not read"));
}

#[test]
fn test_garden_membership() {
    let harness = CliTestHarness::with_catalog();

    harness
        .run_success(&["garden", "list"])
        .stdout(predicate::str::contains("Your garden is empty."));

    harness
        .run_success(&["garden", "add", "1"])
        .stdout(assertions::succeeded())
        .stdout(predicate::str::contains("Ros"));

    harness
        .run_success(&["garden", "add", "1"])
        .stdout(predicate::str::contains("already in"));

    harness
        .run_success(&["garden", "list"])
        .stdout(predicate::str::contains("TRÄDGÅRDEN"))
        .stdout(predicate::str::contains("Ros"));

    harness
        .run_failure(&["garden", "add", "99"])
        .stderr(predicate::str::contains("not found"));

    harness
        .run_success(&["garden", "remove", "1"])
        .stdout(predicate::str::contains("Removed 'Ros'"));

    harness
        .run_failure(&["garden", "remove", "1"])
        .stderr(assertions::has_error());
}

#[test]
fn test_wishlist_and_stats() {
    let harness = CliTestHarness::with_catalog();

    harness.run_success(&["wishlist", "add", "3"]);
    harness.run_success(&["garden", "add", "1"]);
    harness.run_success(&["garden", "add", "2"]);

    harness
        .run_success(&["wishlist", "list"])
        .stdout(predicate::str::contains("Basilika"));

    harness
        .run_success(&["stats"])
        .stdout(predicate::str::contains("Plants in garden"))
        .stdout(predicate::str::contains("Wishlist"));

    harness.run_success(&["wishlist", "remove", "3"]);
    harness
        .run_success(&["wishlist", "list"])
        .stdout(predicate::str::contains("Your wishlist is empty."));

    harness
        .run_failure(&["wishlist", "remove", "3"])
        .stderr(predicate::str::contains("not on your wishlist"));
}

#[test]
fn test_calendar_follows_garden_care_schedules() {
    let harness = CliTestHarness::with_catalog();

    harness
        .run_success(&["calendar"])
        .stdout(predicate::str::contains("No tasks in your calendar."));

    harness.run_success(&["garden", "add", "1"]);

    harness
        .run_success(&["calendar"])
        .stdout(assertions::has_task_table_headers())
        .stdout(predicate::str::contains("JUNI"))
        .stdout(predicate::str::contains("JULI"))
        .stdout(predicate::str::contains("Vattna Ros"))
        .stdout(predicate::str::contains("Vattna behövs för Ros."))
        .stdout(predicate::str::contains("auto-1-0-6"))
        .stdout(predicate::str::contains("Skötsel"))
        .stdout(predicate::str::contains("MARS").not());

    harness
        .run_success(&["calendar", "--month", "juni", "--by-plant"])
        .stdout(predicate::str::contains("ROS"))
        .stdout(predicate::str::contains("JULI").not());

    harness
        .run_success(&["calendar", "--month", "3"])
        .stdout(predicate::str::contains("Inga uppgifter denna månad."));

    harness
        .run_failure(&["calendar", "--month", "smarch"])
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_custom_task_lifecycle() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["task", "add", "Byt jord", "--month", "mars"])
        .stdout(assertions::succeeded())
        .stdout(predicate::str::contains("Byt jord"))
        .stdout(predicate::str::contains("Mars"));

    harness
        .run_success(&["calendar", "--month", "3", "--by-plant"])
        .stdout(predicate::str::contains("ANPASSAD UPPGIFT"))
        .stdout(predicate::str::contains("Ingen beskrivning angiven."))
        .stdout(predicate::str::contains("Anpassad"));

    harness
        .run_success(&["task", "done", "1"])
        .stdout(predicate::str::contains("Completed 'Byt jord'"));

    harness
        .run_success(&["calendar", "--month", "3"])
        .stdout(predicate::str::contains("✓"));

    harness
        .run_success(&["task", "toggle", "1"])
        .stdout(predicate::str::contains("not done"));

    harness
        .run_success(&["task", "edit", "1", "--title", "Byt jord i krukorna", "--month", "4"])
        .stdout(predicate::str::contains("Byt jord i krukorna"))
        .stdout(predicate::str::contains("April"));

    harness
        .run_failure(&["task", "edit", "1"])
        .stderr(predicate::str::contains("Nothing to change"));

    harness
        .run_success(&["task", "delete", "1"])
        .stdout(predicate::str::contains("Deletion cancelled."));

    harness
        .run_success(&["task", "delete", "1", "--force"])
        .stdout(predicate::str::contains("deleted"));

    harness
        .run_failure(&["task", "done", "1"])
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_task_validation_errors() {
    let harness = CliTestHarness::new();

    harness
        .run_failure(&["task", "add", "   ", "--month", "3"])
        .stderr(predicate::str::contains("Task title must not be empty."));

    harness
        .run_failure(&["task", "add", "Byt jord", "--month", "13"])
        .stderr(predicate::str::contains("between 1 and 12"));

    harness
        .run_failure(&["task", "add", "Byt jord", "--month", "smarch"])
        .stderr(predicate::str::contains("Invalid input"));

    harness
        .run_failure(&["task", "done", "not-an-id"])
        .stderr(predicate::str::contains("Invalid task id"));
}

#[test]
fn test_generated_tasks_are_local_only() {
    let harness = CliTestHarness::with_catalog();
    harness.run_success(&["garden", "add", "1"]);

    harness
        .run_success(&["task", "done", "auto-1-0-6"])
        .stdout(predicate::str::contains("Completed 'Vattna Ros'"))
        .stdout(predicate::str::contains("not saved"));

    harness
        .run_failure(&["task", "edit", "auto-1-0-6", "--title", "Nej"])
        .stderr(predicate::str::contains("cannot be edited"));

    harness
        .run_failure(&["task", "delete", "auto-1-0-6", "--force"])
        .stderr(predicate::str::contains("cannot be edited"));

    harness
        .run_failure(&["task", "done", "auto-9-9-9"])
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_now_shows_month_and_stats() {
    let harness = CliTestHarness::with_catalog();
    harness.run_success(&["garden", "add", "1"]);

    harness
        .run_success(&["now"])
        .stdout(predicate::str::contains("Plants in garden"));
}

#[test]
fn test_profile() {
    let harness = CliTestHarness::new();

    harness
        .run_success(&["profile", "show"])
        .stdout(predicate::str::contains("None"));

    harness
        .run_success(&["profile", "set-name", "Astrid"])
        .stdout(predicate::str::contains("Astrid"));

    harness
        .run_success(&["profile", "show"])
        .stdout(predicate::str::contains("Astrid"));

    harness
        .run_success(&["profile", "set-name"])
        .stdout(predicate::str::contains("cleared"));
}

#[test]
fn test_configured_user_is_created_on_demand() {
    let harness = CliTestHarness::new();
    let user_id = "0190a3b4-8f6e-7c3d-9a1b-2c3d4e5f6a7b";

    harness
        .command()
        .env("ODLA_USER_ID", user_id)
        .args(["profile", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains(user_id));
}

#[test]
fn test_invalid_configuration_is_reported() {
    let harness = CliTestHarness::new();

    harness
        .command()
        .env("ODLA_LIST_PAGE_SIZE", "0")
        .args(["stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}
