//! Propriétés (proptest) : invariants de la saisie et de l’attente,
//! sur des suites de touches quelconques.

use proptest::prelude::*;

use super::evaluateur::lit_nombre;
use super::saisie::Saisie;
use super::{Calculatrice, Operateur, Touche};

fn touche_strategy() -> impl Strategy<Value = Touche> {
    prop_oneof![
        4 => (0u8..=9).prop_map(Touche::Chiffre),
        1 => Just(Touche::DoubleZero),
        2 => Just(Touche::Point),
        1 => Just(Touche::Retour),
        1 => Just(Touche::Effacer),
        2 => proptest::sample::select(Operateur::TOUS.to_vec()).prop_map(Touche::Operateur),
        2 => Just(Touche::Egal),
    ]
}

/// Chiffres et points seulement (édition pure).
fn edition_strategy() -> impl Strategy<Value = Vec<Option<u8>>> {
    prop::collection::vec(prop_oneof![4 => (0u8..=9).prop_map(Some), 1 => Just(None)], 0..40)
}

proptest! {
    #[test]
    fn saisie_egale_la_frappe_sans_points_repetes(frappe in edition_strategy()) {
        let mut s = Saisie::default();
        let mut attendu = String::new();
        for k in &frappe {
            match k {
                Some(d) => {
                    s.ajoute_chiffre(*d);
                    attendu.push(char::from(b'0' + d));
                }
                None => {
                    s.ajoute_point();
                    if !attendu.contains('.') {
                        attendu.push('.');
                    }
                }
            }
        }
        prop_assert_eq!(s.instantane(), attendu.as_str());
        prop_assert!(s.instantane().matches('.').count() <= 1);
    }

    #[test]
    fn retour_arriere_ne_deborde_jamais(chiffres in "[0-9]{0,10}", retours in 0usize..20) {
        let mut s = Saisie::default();
        for c in chiffres.bytes() {
            s.ajoute_chiffre(c - b'0');
        }
        for _ in 0..retours {
            s.retour_arriere();
        }
        let reste = chiffres.len().saturating_sub(retours);
        prop_assert_eq!(s.instantane(), &chiffres[..reste]);
    }

    #[test]
    fn attente_toujours_numerique(touches in prop::collection::vec(touche_strategy(), 0..60)) {
        let mut c = Calculatrice::new();
        for t in touches {
            c.appuie(t);

            if let Some(e) = c.en_attente() {
                prop_assert!(lit_nombre(&e.premier).is_ok(), "premier={:?}", e.premier);
            }
            if c.erreur().is_some() {
                prop_assert_eq!(c.entree(), "");
            } else {
                prop_assert_eq!(c.affichage(), c.entree());
            }
        }
    }

    #[test]
    fn egal_au_repos_ne_change_rien(chiffres in "[0-9]{0,8}") {
        let mut c = Calculatrice::new();
        for b in chiffres.bytes() {
            c.appuie(Touche::Chiffre(b - b'0'));
        }
        let avant = c.entree().to_string();
        c.appuie(Touche::Egal);
        prop_assert_eq!(c.entree(), avant.as_str());
        prop_assert!(c.en_attente().is_none());
        prop_assert!(c.erreur().is_none());
    }

    #[test]
    fn addition_entiere_exacte(a in 0u32..100_000, b in 0u32..100_000) {
        let mut c = Calculatrice::new();
        let touches = format!("{a} + {b} =");
        let libelles: Vec<String> = touches
            .split_whitespace()
            .flat_map(|mot| {
                if mot.chars().all(|ch| ch.is_ascii_digit()) {
                    mot.chars().map(String::from).collect::<Vec<_>>()
                } else {
                    vec![mot.to_string()]
                }
            })
            .collect();
        let affiche = c.rejoue(libelles.iter().map(String::as_str)).unwrap().to_string();
        prop_assert_eq!(affiche, format!("{}.00", u64::from(a) + u64::from(b)));
    }
}
