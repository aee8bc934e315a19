use super::*;
use std::collections::HashSet;

#[test]
fn fixture_ids_are_unique() {
    let badge_ids: HashSet<_> = badges().iter().map(|b| b.id).collect();
    assert_eq!(badge_ids.len(), badges().len());
    let criterion_ids: HashSet<_> = criteria().iter().map(|c| c.id).collect();
    assert_eq!(criterion_ids.len(), criteria().len());
    let company_ids: HashSet<_> = companies().iter().map(|c| c.id).collect();
    assert_eq!(company_ids.len(), companies().len());
}

#[test]
fn criteria_weights_stay_in_range() {
    assert!(criteria().iter().all(|c| (1..=5).contains(&c.weight)));
}

#[test]
fn issued_badges_reference_fixture_companies() {
    let issued = issued_badges();
    assert_eq!(issued.len(), 2);
    assert_eq!(issued[0].company.trade_name, "Alfa Metais");
    assert_eq!(issued[1].company.trade_name, "Beta Alimentos");
    assert!(issued.iter().all(|i| i.badge.id == 1));
}

#[test]
fn find_account_requires_matching_password() {
    assert_eq!(find_account("admin@fiea.org.br", "Selo@2024").map(|a| a.role), Some(Role::Admin));
    assert_eq!(find_account("ADMIN@fiea.org.br", "Selo@2024").map(|a| a.role), Some(Role::Admin));
    assert!(find_account("admin@fiea.org.br", "selo@2024").is_none());
    assert!(find_account("nobody@fiea.org.br", "Selo@2024").is_none());
}
