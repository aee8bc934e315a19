use super::*;
use time::macros::date;

fn sample_badge() -> Badge {
    Badge {
        id: 7,
        name: "Selo Verde".to_owned(),
        description: "Gestão ambiental".to_owned(),
        icon: "https://example.com/verde.png".to_owned(),
        criteria: vec!["Resíduos".to_owned(), "Energia".to_owned()],
        validity_months: 24,
        issuance_start: date!(2024 - 01 - 01),
        issuance_end: date!(2024 - 12 - 31),
    }
}

// =============================================================
// Badge serde
// =============================================================

#[test]
fn badge_dates_serialize_as_iso_strings() {
    let json = serde_json::to_value(sample_badge()).unwrap();
    assert_eq!(json["issuance_start"], "2024-01-01");
    assert_eq!(json["issuance_end"], "2024-12-31");
}

#[test]
fn badge_deserializes_from_iso_dates() {
    let json = serde_json::json!({
        "id": 7,
        "name": "Selo Verde",
        "description": "Gestão ambiental",
        "icon": "https://example.com/verde.png",
        "criteria": ["Resíduos", "Energia"],
        "validity_months": 24,
        "issuance_start": "2024-01-01",
        "issuance_end": "2024-12-31"
    });
    let badge: Badge = serde_json::from_value(json).unwrap();
    assert_eq!(badge, sample_badge());
}

#[test]
fn badge_rejects_malformed_date() {
    let json = serde_json::json!({
        "id": 1,
        "name": "x",
        "description": "x",
        "icon": "x",
        "criteria": [],
        "validity_months": 1,
        "issuance_start": "01/01/2024",
        "issuance_end": "2024-12-31"
    });
    assert!(serde_json::from_value::<Badge>(json).is_err());
}

// =============================================================
// Enum labels
// =============================================================

#[test]
fn pillar_labels_round_trip() {
    for pillar in Pillar::ALL {
        assert_eq!(Pillar::from_label(pillar.label()), Some(pillar));
    }
    assert_eq!(Pillar::from_label("Marketing"), None);
}

#[test]
fn pillar_serializes_snake_case() {
    let json = serde_json::to_value(Pillar::TechnologicalInnovation).unwrap();
    assert_eq!(json, "technological_innovation");
}

#[test]
fn company_size_and_status_labels_round_trip() {
    for size in CompanySize::ALL {
        assert_eq!(CompanySize::from_label(size.label()), Some(size));
    }
    for status in CompanyStatus::ALL {
        assert_eq!(CompanyStatus::from_label(status.label()), Some(status));
    }
}

#[test]
fn role_home_paths() {
    assert_eq!(Role::Admin.home_path(), "/dashboard");
    assert_eq!(Role::Manager.home_path(), "/industry/dashboard");
}

#[test]
fn role_labels_are_distinct() {
    assert_eq!(Role::ALL.map(Role::label), ["Administradores", "Gestores da Indústria"]);
}

// =============================================================
// DigitalBadge derived values
// =============================================================

#[test]
fn digital_badge_expiry_uses_badge_validity() {
    let issued = DigitalBadge {
        id: "issued-009".to_owned(),
        badge: sample_badge(),
        company: crate::net::mock::companies().remove(0),
        issue_date: date!(2024 - 03 - 15),
    };
    assert_eq!(issued.expiry_date(), date!(2026 - 03 - 15));
    assert_eq!(issued.verification_url(), "https://selo.fiea.org.br/verificar/issued-009");
}
