//! Scénarios de bout en bout : suites de touches telles que le pavé les envoie.

use super::{Calculatrice, Operateur};

/// Rejoue des libellés séparés par des espaces et renvoie l’affichage final.
fn tape(c: &mut Calculatrice, touches: &str) -> String {
    c.rejoue(touches.split_whitespace())
        .unwrap_or_else(|e| panic!("touches={touches:?} err={e}"))
        .to_string()
}

fn resultat(touches: &str) -> String {
    tape(&mut Calculatrice::new(), touches)
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn addition_simple() {
    assert_eq!(resultat("1 2 + 8 ="), "20.00");
}

#[test]
fn division_par_zero() {
    let mut c = Calculatrice::new();
    assert_eq!(tape(&mut c, "7 / 0 ="), "Fehler: Division durch Null");

    let e = c.en_attente().expect("l’attente doit survivre");
    assert_eq!(e.premier, "7");
    assert_eq!(e.operateur, Operateur::Divise);
}

#[test]
fn second_point_ignore() {
    let mut c = Calculatrice::new();
    tape(&mut c, "5 . . 5");
    assert_eq!(c.entree(), "5.5");
}

#[test]
fn modulo() {
    assert_eq!(resultat("9 % 4 ="), "1.00");
}

#[test]
fn egal_sans_operateur() {
    let mut c = Calculatrice::new();
    assert_eq!(tape(&mut c, "="), "");
    assert!(c.en_attente().is_none());
    assert!(c.erreur().is_none());
}

/* ------------------------ Autres cas ------------------------ */

#[test]
fn quatre_operations() {
    assert_eq!(resultat("7 - 1 2 ="), "-5.00");
    assert_eq!(resultat("2 . 5 * 4 ="), "10.00");
    assert_eq!(resultat("1 / 3 ="), "0.33");
    assert_eq!(resultat("2 / 3 ="), "0.67");
    assert_eq!(resultat("1 . 5 % 1 ="), "0.50");
}

#[test]
fn double_zero() {
    assert_eq!(resultat("1 00 + 1 ="), "101.00");
}

#[test]
fn modulo_par_zero() {
    assert_eq!(resultat("9 % 0 . 0 ="), "Fehler: Division durch Null");
}

#[test]
fn operateur_puis_egal_sans_second() {
    let mut c = Calculatrice::new();
    assert_eq!(tape(&mut c, "5 + ="), "Fehler: Ungültige Zahl");
    // rien de perdu : on tape le second opérande et on recommence
    assert_eq!(tape(&mut c, "3 ="), "8.00");
}

#[test]
fn point_seul_invalide() {
    assert_eq!(resultat("5 + . ="), "Fehler: Ungültige Zahl");
    assert_eq!(resultat(". +"), "Fehler: Ungültige Zahl");
}

#[test]
fn operateur_ecrase_le_precedent() {
    // "3 +" puis "4 -" : l’attente devient (4, -)
    assert_eq!(resultat("3 + 4 - 1 ="), "3.00");
}

#[test]
fn enchainer_sur_le_resultat() {
    let mut c = Calculatrice::new();
    assert_eq!(tape(&mut c, "1 2 + 8 ="), "20.00");
    assert_eq!(tape(&mut c, "/ 8 ="), "2.50");
    assert!(c.en_attente().is_none());
}

#[test]
fn taper_apres_un_resultat_complete_le_texte() {
    let mut c = Calculatrice::new();
    tape(&mut c, "1 + 1 =");
    assert_eq!(tape(&mut c, "5"), "2.005");
}

#[test]
fn correction_apres_division_par_zero() {
    let mut c = Calculatrice::new();
    tape(&mut c, "7 / 0 =");
    assert_eq!(tape(&mut c, "BE"), "");
    assert_eq!(tape(&mut c, "2 ="), "3.50");
}

#[test]
fn ce_vide_l_entree_mais_pas_l_attente() {
    let mut c = Calculatrice::new();
    tape(&mut c, "6 * 7 CE");
    assert_eq!(c.entree(), "");
    assert!(c.en_attente().is_some());
    assert_eq!(tape(&mut c, "2 ="), "12.00");
}

#[test]
fn debordement_ieee() {
    let grand = "9 ".repeat(200);
    let mut c = Calculatrice::new();
    assert_eq!(tape(&mut c, &format!("{grand}* {grand}=")), "Infinity");
    // le résultat affiché redevient un opérande
    assert_eq!(tape(&mut c, "- 1 ="), "Infinity");
    assert_eq!(tape(&mut c, "* 0 ="), "NaN");
}
