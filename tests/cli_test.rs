use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("storefront"));
    cmd.arg("run").arg("tests/fixtures/actions.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(
            "order_id,product,quantity,total,customer,email,paid",
        ))
        .stdout(predicate::str::is_match(
            r"[0-9a-f]{8},Laptop,2,2000,Ada Lovelace,ada@example.com,true",
        )?)
        .stdout(predicate::str::is_match(
            r"[0-9a-f]{8},Smartphone,3,1500,Alan Turing,alan@example.org,false",
        )?)
        .stderr(predicate::str::contains("Order placed for 2 Laptop(s) by Ada Lovelace."))
        .stderr(predicate::str::contains("Processing credit card payment..."))
        .stderr(predicate::str::contains(
            "Address: 12 St James's Square, London",
        ));

    Ok(())
}

#[test]
fn test_catalog_command_lists_demo_products() {
    let mut cmd = Command::new(cargo_bin!("storefront"));
    cmd.arg("catalog");

    cmd.assert().success().stdout(
        "id,name,description,price,stock\n\
         1,Laptop,High performance laptop,1000,50\n\
         2,Smartphone,Latest model smartphone,500,100\n",
    );
}

#[test]
fn test_custom_catalog() {
    let mut cmd = Command::new(cargo_bin!("storefront"));
    cmd.arg("catalog")
        .arg("--catalog")
        .arg("tests/fixtures/catalog.json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("10,Desk,Oak standing desk,249.99,3"))
        .stdout(predicate::str::contains("11,Chair,Swivel chair,80,12"))
        .stdout(predicate::str::contains("Laptop").not());
}

#[test]
fn test_missing_catalog_file_fails() {
    let mut cmd = Command::new(cargo_bin!("storefront"));
    cmd.arg("catalog").arg("--catalog").arg("tests/fixtures/nope.json");

    cmd.assert().failure();
}

#[test]
fn test_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("storefront"));
    cmd.arg("run").arg("tests/fixtures/does_not_exist.csv");

    cmd.assert().failure();
}
