//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - touche.rs       : touches du pavé + opérateurs (libellés, arithmétique)
//! - saisie.rs       : tampon de l’entrée courante
//! - evaluateur.rs   : opération binaire en attente + "="
//! - format.rs       : affichage du résultat (2 décimales)
//! - erreur.rs       : erreurs (messages affichés)
//! - calculatrice.rs : dispatch d’une touche vers saisie / évaluateur

pub mod calculatrice;
pub mod erreur;
pub mod evaluateur;
pub mod format;
pub mod saisie;
pub mod touche;

#[cfg(test)]
mod tests_scenarios;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use calculatrice::Calculatrice;
pub use touche::{Operateur, Touche};
