use std::fs;

use nxml::{from_str_with_config, parse_file, Config, Element};

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

#[test]
fn test_valid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    for entry in fs::read_dir(format!("{FIXTURES}/valid"))? {
        let path = entry?.path();
        let content = fs::read_to_string(&path)?;
        if let Err(e) = from_str_with_config(&content, Config::strict()) {
            return Err(
                std::io::Error::other(format!("Failed to parse valid file {path:?}: {e}")).into(),
            );
        }
    }
    Ok(())
}

#[test]
fn test_invalid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    for entry in fs::read_dir(format!("{FIXTURES}/invalid"))? {
        let path = entry?.path();
        let content = fs::read_to_string(&path)?;
        if from_str_with_config(&content, Config::strict()).is_ok() {
            return Err(std::io::Error::other(format!(
                "Should fail to parse invalid file: {path:?}"
            ))
            .into());
        }
        // the permissive parser absorbs the same input
        nxml::from_str(&content)?;
    }
    Ok(())
}

#[test]
fn test_catalog_lookup() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(format!("{FIXTURES}/catalog.xml"))?;

    let catalog = doc.select("catalog");
    assert_eq!(catalog.get().map(|c| c.children().len()), Some(3));

    let book = catalog.child_with_attribute("book", "id", "bk103");
    assert_eq!(book.child("title").text(), Some("Maeve Ascendant"));
    assert_eq!(book.child("author").text(), Some("Corets, Eva"));

    let first = catalog.child("book");
    assert_eq!(first.attribute("id"), Some("bk101"));
    assert_eq!(first.child("title").text(), Some("XML Developer's Guide"));

    let fantasy = catalog
        .get()
        .map(|c| {
            c.children_named("book")
                .filter(|b| b.child("genre").and_then(Element::text) == Some("Fantasy"))
                .count()
        })
        .unwrap_or_default();
    assert_eq!(fantasy, 2);

    assert!(catalog.child_with_attribute("book", "id", "bk999").is_invalid());
    Ok(())
}

#[test]
fn test_catalog_round_trip_through_file() -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(format!("{FIXTURES}/catalog.xml"))?;
    let out = std::env::temp_dir().join(format!("nxml-catalog-{}.xml", std::process::id()));
    nxml::write_file(&out, &doc)?;

    let written = fs::read_to_string(&out)?;
    assert!(written.starts_with(r#"<?xml version="1.0"?><catalog><book id="bk101"><author>"#));
    assert!(!written.contains('\n'));

    let reparsed = parse_file(&out)?;
    assert_eq!(reparsed, doc);
    fs::remove_file(&out)?;
    Ok(())
}
