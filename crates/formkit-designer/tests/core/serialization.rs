use formkit_core::Rect;
use formkit_designer::{load_form, save_form, ControlRecord, ControlType, FormDocument, FormFile};

fn sample() -> FormDocument {
    let mut doc = FormDocument::new();
    let section = doc.create_section();
    doc.sections[section].background_image_ref = "field.png".into();
    for (i, t) in [ControlType::Label, ControlType::Select, ControlType::Timer]
        .into_iter()
        .enumerate()
    {
        doc.sections[section].items.push(ControlRecord::new(
            t,
            format!("tag_{}", i + 1),
            Rect::new(10.0 * i as f64, 20.0, 100.0, 40.0),
        ));
    }
    doc
}

#[test]
fn test_save_and_load_form() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scouting.form");
    let doc = sample();

    save_form(&path, "Scouting", &doc).expect("save");
    let loaded = load_form(&path).expect("load");
    assert_eq!(loaded, doc);

    let file = FormFile::load_from_file(&path).expect("load file");
    assert_eq!(file.metadata.name, "Scouting");
}

#[test]
fn test_load_rejects_garbage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.form");
    std::fs::write(&path, "{ not json").expect("write");

    let err = load_form(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse form file"));
}

#[test]
fn test_document_json_uses_kind_tags() {
    let json = sample().to_json().unwrap();
    assert!(json.contains("\"kind\":\"label\""));
    assert!(json.contains("\"kind\":\"select\""));
    assert!(json.contains("\"kind\":\"timer\""));
}
