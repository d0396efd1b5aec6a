//! Integration tests for section normalization.

use planmark::normalize::{CompanyNameExtractor, NormalizeOptions, Normalizer};
use planmark::{sections_from_json, DocumentBlock, Sections, COMPANY_NAME_PLACEHOLDER};

#[test]
fn test_sections_json_object_keeps_order() {
    let sections = sections_from_json(
        r#"{
            "Résumé Exécutif": "Le nom de l'entreprise est Verdure. Elle recycle.",
            "Analyse de Marché": "* Villes\n* Entreprises",
            "Annexes": ""
        }"#,
    )
    .unwrap();

    assert_eq!(
        sections.names(),
        vec!["Résumé Exécutif", "Analyse de Marché", "Annexes"]
    );
}

#[test]
fn test_sections_json_array() {
    let sections = sections_from_json(
        r#"[{"name": "B", "content": "x"}, {"name": "A", "content": "y"}]"#,
    )
    .unwrap();
    assert_eq!(sections.names(), vec!["B", "A"]);
    assert_eq!(sections.get("A"), Some("y"));
}

#[test]
fn test_sections_json_array_rejects_duplicates() {
    let result = sections_from_json(
        r#"[{"name": "A", "content": "x"}, {"name": "A", "content": "y"}]"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_sections_serialize_as_object() {
    let sections: Sections = [("Intro", "a"), ("Fin", "b")].into_iter().collect();
    let json = serde_json::to_string(&sections).unwrap();
    assert_eq!(json, r#"{"Intro":"a","Fin":"b"}"#);
}

#[test]
fn test_full_normalization() {
    let sections = sections_from_json(
        r#"{
            "Résumé Exécutif": "Le nom de l'entreprise est Verdure. Elle recycle.",
            "Analyse de Marché": "* Villes\n1. *Entreprises\n**Cible**",
            "Annexes": ""
        }"#,
    )
    .unwrap();

    let markdown = Normalizer::default().normalize_sections(&sections);
    assert_eq!(
        markdown,
        "# Business Plan\n\n\
         ## Entreprise: Verdure\n\n\
         ## Résumé Exécutif\n\n\
         Le nom de l'entreprise est Verdure. Elle recycle.\n\n\
         ## Analyse de Marché\n\n\
         - Villes\n- Entreprises\n**Cible**\n\n\
         ## Annexes\n\n\n\n"
    );
}

#[test]
fn test_numbered_bullet_fix_can_be_disabled() {
    let sections: Sections = [("Liste", "1. *Marketing")].into_iter().collect();
    let options = NormalizeOptions::new().with_numbered_bullet_fix(false);
    let markdown = Normalizer::new(options).normalize(&sections, "X");
    assert!(markdown.contains("\n1. *Marketing\n"));
}

#[test]
fn test_company_lead_ins() {
    let extractor = CompanyNameExtractor::new();

    assert_eq!(
        extractor.find("La vision de GreenTech est de décarboner."),
        Some("GreenTech est de décarboner".to_string())
    );
    assert_eq!(
        extractor.find("NOM DE L'ENTREPRISE EST Atlas"),
        Some("Atlas".to_string())
    );
    assert_eq!(
        extractor.find("Le nom de l’entreprise est Boréal, fondée en 2020"),
        Some("Boréal".to_string())
    );
    assert_eq!(extractor.find("Aucune mention."), None);
}

#[test]
fn test_company_name_on_its_own_line() {
    let sections: Sections = [
        (
            "Résumé",
            "Le nom de l'entreprise est Solaris\nNous installons des panneaux solaires.",
        ),
        ("Marché", "Local"),
    ]
    .into_iter()
    .collect();

    let report = Normalizer::default().normalize_report(&sections);
    assert_eq!(report.metadata.author.as_deref(), Some("Solaris"));

    let doc = planmark::build(&report.markdown);
    assert_eq!(
        doc.blocks[..3],
        [
            DocumentBlock::heading(1, "Business Plan"),
            DocumentBlock::heading(2, "Entreprise: Solaris"),
            DocumentBlock::heading(2, "Résumé"),
        ]
    );
}

#[test]
fn test_company_from_first_section_only() {
    let sections: Sections = [
        ("Intro", "Rien à signaler."),
        ("Suite", "Le nom de l'entreprise est Caché."),
    ]
    .into_iter()
    .collect();

    let normalizer = Normalizer::default();
    assert_eq!(normalizer.company_name(&sections), COMPANY_NAME_PLACEHOLDER);
    assert_eq!(normalizer.company_name(&Sections::new()), COMPANY_NAME_PLACEHOLDER);
}

#[test]
fn test_custom_placeholder() {
    let normalizer = Normalizer::new(NormalizeOptions::new().with_placeholder("Unknown"));
    let sections: Sections = [("Intro", "no lead-in")].into_iter().collect();
    assert!(normalizer
        .normalize_sections(&sections)
        .contains("## Entreprise: Unknown\n"));
}
