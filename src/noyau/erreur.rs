// src/noyau/erreur.rs

use thiserror::Error;

pub const MSG_DIVISION_PAR_ZERO: &str = "Fehler: Division durch Null";
pub const MSG_NOMBRE_INVALIDE: &str = "Fehler: Ungültige Zahl";

/// Erreurs du noyau.
///
/// Le texte `Display` est exactement ce que l’affichage montre à l’utilisateur
/// (les messages restent en allemand, comme l’interface).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// `/` ou `%` avec un second opérande nul.
    #[error("{}", MSG_DIVISION_PAR_ZERO)]
    DivisionParZero,

    /// Opérande qui n’est pas un nombre décimal valide (vide, "." seul, ...).
    #[error("{}", MSG_NOMBRE_INVALIDE)]
    NombreInvalide(String),

    /// Libellé de touche inconnu (ne vient que du shell de rejeu).
    #[error("unbekannte Taste: {0:?}")]
    ToucheInconnue(String),
}
