use super::*;

#[test]
fn required_trims_value() {
    assert_eq!(required("  Selo Verde ", "Nome"), Ok("Selo Verde".to_owned()));
}

#[test]
fn required_rejects_blank() {
    assert_eq!(required(" \t ", "Nome"), Err(FormError::Required("Nome")));
    assert_eq!(FormError::Required("Nome").to_string(), "O campo \"Nome\" é obrigatório.");
}

#[test]
fn email_shape() {
    assert!(is_valid_email("contato@alfametais.com.br"));
    assert!(is_valid_email(" a@b "));
    assert!(!is_valid_email("contato"));
    assert!(!is_valid_email("@alfa.com"));
    assert!(!is_valid_email("contato@"));
    assert!(!is_valid_email("a@b@c"));
}

#[test]
fn cnpj_shape() {
    assert!(is_formatted_cnpj("00.000.000/0001-00"));
    assert!(is_formatted_cnpj(" 11.111.111/0001-11 "));
    assert!(!is_formatted_cnpj("00000000000100"));
    assert!(!is_formatted_cnpj("00.000.000/0001-0"));
    assert!(!is_formatted_cnpj("AA.000.000/0001-00"));
}
