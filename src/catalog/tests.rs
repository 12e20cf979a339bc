use super::*;

fn record(name: &str, short: &str, departments: &[&str]) -> InstitutionRecord {
    InstitutionRecord::new(
        name,
        short,
        "test.example",
        "asset://logos/test.svg",
        "#000000",
        "1 Test Rd",
        departments,
    )
}

#[test]
fn test_empty_catalog_rejected() {
    assert_eq!(Catalog::new(Vec::new()).unwrap_err(), CatalogError::EmptyCatalog);
}

#[test]
fn test_duplicate_name_rejected() {
    let result = Catalog::new(vec![
        record("Alpha College", "Alpha", &["Art"]),
        record("Alpha College", "AC", &["Law"]),
    ]);
    assert_eq!(
        result.unwrap_err(),
        CatalogError::DuplicateInstitution("Alpha College".to_string())
    );
}

#[test]
fn test_entry_without_departments_rejected() {
    let result = Catalog::new(vec![record("Alpha College", "Alpha", &[])]);
    assert!(matches!(result, Err(CatalogError::EmptyDepartments(_))));
}

#[test]
fn test_embedded_catalog_is_stable() {
    let first: Vec<String> = Catalog::embedded().all().iter().map(|u| u.name.clone()).collect();
    let second: Vec<String> = Catalog::embedded().all().iter().map(|u| u.name.clone()).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 13);
    assert_eq!(first[0], "Northgate State University");
}

#[test]
fn test_embedded_catalog_uses_reserved_domains() {
    for u in Catalog::embedded().all() {
        assert!(u.domain.ends_with(".example"), "{} has a live domain", u.name);
        assert!(u.logo_ref.starts_with("asset://"));
    }
}

#[test]
fn test_by_name_matches_full_and_short_name() {
    let catalog = Catalog::embedded();
    assert_eq!(catalog.by_name("mit").unwrap().name, "Meridian Institute of Technology");
    assert_eq!(catalog.by_name("Dunmore College").unwrap().short_name, "Dunmore");
    assert_eq!(
        catalog.by_name("Nowhere U").unwrap_err(),
        CatalogError::NotFound("Nowhere U".to_string())
    );
}

#[test]
fn test_by_index_wraps() {
    let catalog = Catalog::embedded();
    assert_eq!(catalog.by_index(1), catalog.by_index(1 + catalog.len()));
}

#[test]
fn test_random_returns_catalog_member() {
    let catalog = Catalog::embedded();
    for _ in 0..20 {
        let picked = catalog.random();
        assert!(catalog.all().contains(picked));
    }
}

#[test]
fn test_name_hash_uses_utf16_code_units() {
    assert_eq!(name_hash("Alice"), 478);
    assert_eq!(name_hash("José"), 533);
    // Surrogate pair: 0xD83D + 0xDE00, not the four UTF-8 bytes.
    assert_eq!(name_hash("\u{1F600}"), 112_189);
}

#[test]
fn test_empty_key_uses_fallback() {
    assert_eq!(name_hash(""), name_hash(FALLBACK_KEY));
    assert_eq!(name_hash(""), 741);
    let catalog = Catalog::embedded();
    assert_eq!(select_institution(catalog, ""), &catalog.all()[0]);
}

#[test]
fn test_select_institution_is_deterministic() {
    let catalog = Catalog::embedded();
    for key in ["Alice", "Jane Doe", "", "日本", "Zoë Ng"] {
        assert_eq!(select_institution(catalog, key), select_institution(catalog, key));
    }
    assert_eq!(select_institution(catalog, "Alice").name, "Dunmore College");
    assert_eq!(select_institution(catalog, "Jane Doe").name, "Ashcombe University");
}

#[test]
fn test_selection_is_not_constant() {
    let catalog = Catalog::embedded();
    let picked: HashSet<&str> = (0..200)
        .map(|i| select_institution(catalog, &format!("Person {i}")).name.as_str())
        .collect();
    assert!(picked.len() > catalog.len() / 2);
}

#[test]
fn test_department_always_belongs_to_institution() {
    let catalog = Catalog::embedded();
    for i in 0..100 {
        let key = format!("Faculty Member {i}");
        for institution in catalog.all() {
            let department = select_department(&key, institution);
            assert!(institution.departments.iter().any(|d| d == department));
        }
    }
}

#[test]
fn test_department_shares_institution_hash() {
    let catalog = Catalog::embedded();
    let institution = select_institution(catalog, "Alice");
    assert_eq!(select_department("Alice", institution), "Sociology");
}

#[test]
fn test_preferred_short_name_wins_over_hash() {
    let catalog = Catalog::embedded();
    let selection = resolve_institution(catalog, Some("MIT"), "Alice");
    assert_eq!(selection.institution.short_name, "MIT");
    assert_eq!(selection.matched_by, MatchedBy::PreferredName);
    assert_eq!(selection.hash, 478);
}

#[test]
fn test_preferred_name_matches_in_either_direction() {
    let catalog = Catalog::embedded();
    // Preferred name contains the short name.
    let wider = resolve_institution(catalog, Some("Keswick University Hospital"), "Alice");
    assert_eq!(wider.institution.name, "Keswick University");
    // Full name contains the preferred name.
    let narrower = resolve_institution(catalog, Some("los verdes"), "Alice");
    assert_eq!(narrower.institution.short_name, "ULV");
}

#[test]
fn test_unmatched_or_blank_preferred_falls_back_to_hash() {
    let catalog = Catalog::embedded();
    for preferred in [Some("Acme Widgets"), Some("   "), Some("Your Company Name"), None] {
        let selection = resolve_institution(catalog, preferred, "Jane Doe");
        assert_eq!(selection.matched_by, MatchedBy::Hash);
        assert_eq!(selection.institution.name, "Ashcombe University");
        assert_eq!(selection.department, "Psychology");
    }
}
