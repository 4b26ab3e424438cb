//! src/app/etat.rs
//!
//! État UI : une seule `Calculatrice` (noyau) + les réglages d’affichage.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `Calculatrice::appuie`.
//! - L’état n’est modifié que depuis `update` (thread UI).

use crate::config::Config;
use crate::noyau::{Calculatrice, Touche};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calculatrice: Calculatrice,
    pub config: Config,
}

impl AppCalc {
    pub fn new(config: Config) -> Self {
        Self {
            calculatrice: Calculatrice::new(),
            config,
        }
    }

    /// Clic sur un bouton du pavé.
    pub fn clic(&mut self, touche: Touche) {
        self.calculatrice.appuie(touche);
    }

    /// Texte du champ d’affichage.
    pub fn affichage(&self) -> &str {
        self.calculatrice.affichage()
    }
}
