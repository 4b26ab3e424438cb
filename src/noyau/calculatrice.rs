//! Calculatrice : l’objet d’état unique tenu par le shell (UI ou rejeu).
//!
//! Un seul point d’entrée, `appuie(touche)`, puis le shell affiche
//! `affichage()`. Aucun état global.
//!
//! Après une erreur (division par zéro, nombre invalide) :
//! - l’entrée est vidée et le message d’erreur est affiché à sa place ;
//! - l’opération en attente est conservée ;
//! - chiffre / "00" / "." repartent d’une entrée neuve, "BE" et "CE" effacent
//!   le message, opérateurs et "=" agissent sur l’entrée (vide).

use super::erreur::{ErreurCalc, MSG_DIVISION_PAR_ZERO, MSG_NOMBRE_INVALIDE};
use super::evaluateur::{Evaluateur, ExpressionEnAttente};
use super::saisie::Saisie;
use super::touche::Touche;

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    saisie: Saisie,
    evaluateur: Evaluateur,
    erreur: Option<ErreurCalc>,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Traite une touche et renvoie le texte à afficher.
    pub fn appuie(&mut self, touche: Touche) -> &str {
        tracing::debug!(touche = %touche, "touche");

        // Toute touche referme un message d’erreur affiché.
        self.erreur = None;

        let issue = match touche {
            Touche::Chiffre(d) => {
                self.saisie.ajoute_chiffre(d);
                Ok(())
            }
            Touche::DoubleZero => {
                self.saisie.ajoute_double_zero();
                Ok(())
            }
            Touche::Point => {
                self.saisie.ajoute_point();
                Ok(())
            }
            Touche::Retour => {
                self.saisie.retour_arriere();
                Ok(())
            }
            Touche::Effacer => {
                self.saisie.vide();
                Ok(())
            }
            Touche::Operateur(op) => self.evaluateur.sur_operateur(&mut self.saisie, op),
            Touche::Egal => self.evaluateur.sur_egal(&mut self.saisie).map(|_| ()),
        };

        if let Err(e) = issue {
            tracing::warn!(touche = %touche, erreur = ?e, "calcul refusé");
            self.saisie.vide();
            self.erreur = Some(e);
        }

        self.affichage()
    }

    /// Traite une suite de libellés (shell de rejeu).
    ///
    /// S’arrête au premier libellé inconnu ; les touches précédentes restent appliquées.
    pub fn rejoue<'a, I>(&mut self, libelles: I) -> Result<&str, ErreurCalc>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for libelle in libelles {
            let touche: Touche = libelle.parse()?;
            self.appuie(touche);
        }
        Ok(self.affichage())
    }

    /// Texte affiché : message d’erreur s’il y en a un, sinon l’entrée.
    pub fn affichage(&self) -> &str {
        match &self.erreur {
            Some(ErreurCalc::DivisionParZero) => MSG_DIVISION_PAR_ZERO,
            Some(ErreurCalc::NombreInvalide(_)) => MSG_NOMBRE_INVALIDE,
            Some(ErreurCalc::ToucheInconnue(_)) | None => self.saisie.instantane(),
        }
    }

    pub fn entree(&self) -> &str {
        self.saisie.instantane()
    }

    pub fn en_attente(&self) -> Option<&ExpressionEnAttente> {
        self.evaluateur.en_attente()
    }

    pub fn erreur(&self) -> Option<&ErreurCalc> {
        self.erreur.as_ref()
    }
}
