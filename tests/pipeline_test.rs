//! End-to-end tests: sections in, rendered output out.

use std::fs;

use planmark::convert::{convert_markdown, convert_sections, ConvertOptions, OutputFormat};
use planmark::render::{to_markdown, RenderOptions};
use planmark::{build, read_sections, DocumentBlock, Error, Planmark, Sections};

fn report() -> Sections {
    [
        (
            "Résumé Exécutif",
            "Le nom de l'entreprise est Solaris Energie. Nous installons des panneaux.\n**Objectif**",
        ),
        (
            "Plan Financier",
            "| Poste | Montant |\n|---|---|\n| Capital | 50 000 |\n| Prêt | 120 000 |",
        ),
        ("Stratégie", "* Partenariats locaux\n2. *Salons professionnels"),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_sections_to_document() {
    let result = Planmark::new().parse_sections(&report());
    let doc = result.document();

    assert_eq!(
        doc.headings(),
        vec![
            (1, "Business Plan"),
            (2, "Entreprise: Solaris Energie"),
            (2, "Résumé Exécutif"),
            (2, "Plan Financier"),
            (2, "Stratégie"),
        ]
    );
    assert!(doc.blocks.contains(&DocumentBlock::bold("Objectif")));
    assert!(doc
        .blocks
        .contains(&DocumentBlock::bullet("Partenariats locaux")));
    assert!(doc
        .blocks
        .contains(&DocumentBlock::bullet("Salons professionnels")));

    let tables: Vec<_> = doc.blocks.iter().filter(|b| b.is_table()).collect();
    assert_eq!(tables.len(), 1);
}

#[test]
fn test_placeholder_heading_when_no_company() {
    let sections: Sections = [("Intro", "Texte sans nom.")].into_iter().collect();
    let doc = Planmark::new().parse_sections(&sections).document;
    assert_eq!(
        doc.blocks[1],
        DocumentBlock::heading(2, "Entreprise: Nom de l'entreprise non trouvé")
    );
}

#[test]
fn test_markdown_round_trip() {
    let original = Planmark::new().parse_sections(&report()).document;

    let rendered = to_markdown(&original, &RenderOptions::default()).unwrap();
    let rebuilt = build(&rendered);

    assert_eq!(rebuilt.blocks, original.blocks);
}

#[test]
fn test_convert_every_format() {
    for format in OutputFormat::ALL {
        let options = ConvertOptions::new().with_format(format);
        let result = convert_sections(&report(), &options);

        if !format.is_available() {
            assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
            continue;
        }

        let result = result.unwrap();
        assert!(result.content_len() > 0, "{:?} output is empty", format);
        assert_eq!(result.stats.heading_count, 5);
        assert_eq!(result.stats.table_count, 1);
        assert_eq!(result.as_text().is_none(), format.is_binary());
    }
}

#[test]
fn test_convert_markdown_text() {
    let options = ConvertOptions::new().with_format(OutputFormat::Text);
    let result = convert_markdown("## Marché\n- a\n| x | y |\n| 1 | 2 |", &options).unwrap();
    assert_eq!(
        result.as_text().unwrap(),
        "Marché\n------\n\n• a\n\nx\ty\n1\t2"
    );
}

#[test]
fn test_read_sections_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    fs::write(&path, serde_json::to_string(&report()).unwrap()).unwrap();

    let sections = read_sections(&path).unwrap();
    assert_eq!(sections, report());
}

#[test]
fn test_read_sections_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = read_sections(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_read_sections_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(read_sections(&path), Err(Error::Json(_))));
}
