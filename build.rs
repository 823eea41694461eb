use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/pathologies.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    let entries = catalog.as_object().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Root must be a JSON object keyed by pathology id\n\
             Got: {catalog}\n"
        );
    });

    let mut total_criteria = 0;
    for (id, entry) in entries {
        total_criteria += validate_entry(id, entry);
    }

    println!(
        "cargo:warning=Validated catalog: {} pathologies, {total_criteria} total criteria",
        entries.len()
    );
}

fn validate_entry(id: &str, entry: &serde_json::Value) -> usize {
    assert!(
        entry.is_object(),
        "\n\nCATALOG BUILD ERROR: Pathology '{id}' must be a JSON object\n"
    );
    assert!(
        entry.get("nom").and_then(serde_json::Value::as_str).is_some(),
        "\n\nCATALOG BUILD ERROR: Pathology '{id}' missing string 'nom' field\n"
    );
    assert!(
        entry.get("description").is_some(),
        "\n\nCATALOG BUILD ERROR: Pathology '{id}' missing 'description' field\n"
    );

    let criteria = entry
        .get("criteres")
        .and_then(serde_json::Value::as_object)
        .unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Pathology '{id}' missing 'criteres' object\n")
        });

    for (attribute, value) in criteria {
        validate_criterion(id, attribute, value);
    }

    criteria.len()
}

fn validate_criterion(id: &str, attribute: &str, value: &serde_json::Value) {
    match value {
        serde_json::Value::String(_) => {}
        serde_json::Value::Array(items) => {
            for item in items {
                assert!(
                    item.is_string(),
                    "\n\nCATALOG BUILD ERROR: Pathology '{id}' criterion '{attribute}'\n\
                     Array values must all be strings.\n"
                );
            }
        }
        other => panic!(
            "\n\nCATALOG BUILD ERROR: Pathology '{id}' criterion '{attribute}'\n\
             Expected a string or an array of strings, got: {other}\n"
        ),
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/pathologies.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
