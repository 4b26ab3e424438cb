//! Évaluateur : une seule opération binaire en attente.
//!
//! Deux états :
//! - Repos     : `en_attente == None`
//! - Opération : `en_attente == Some((premier, op))`
//!
//! Pas de chaînage ni de priorité : un nouvel opérateur écrase l’opération
//! en attente avec l’entrée courante.

use super::erreur::ErreurCalc;
use super::format::formate_resultat;
use super::saisie::Saisie;
use super::touche::Operateur;

/// Premier opérande (normalisé, toujours numériquement valide) + opérateur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpressionEnAttente {
    pub premier: String,
    pub operateur: Operateur,
}

#[derive(Clone, Debug, Default)]
pub struct Evaluateur {
    en_attente: Option<ExpressionEnAttente>,
}

impl Evaluateur {
    pub fn en_attente(&self) -> Option<&ExpressionEnAttente> {
        self.en_attente.as_ref()
    }

    /// Touche opérateur : capture l’entrée comme premier opérande puis la vide.
    ///
    /// Si l’entrée n’est pas un nombre valide, rien ne change (ni l’entrée,
    /// ni l’opération déjà en attente).
    pub fn sur_operateur(&mut self, saisie: &mut Saisie, op: Operateur) -> Result<(), ErreurCalc> {
        let premier = normalise(saisie.instantane());
        lit_nombre(&premier)?;

        saisie.vide();
        self.en_attente = Some(ExpressionEnAttente {
            premier,
            operateur: op,
        });
        Ok(())
    }

    /// Touche "=".
    ///
    /// - Repos : aucun effet, `Ok(false)`.
    /// - Succès : l’entrée reçoit le résultat formaté, retour au repos, `Ok(true)`.
    /// - Erreur : l’opération en attente est conservée, l’entrée n’est pas touchée.
    pub fn sur_egal(&mut self, saisie: &mut Saisie) -> Result<bool, ErreurCalc> {
        let Some(attente) = &self.en_attente else {
            return Ok(false);
        };

        let a = lit_nombre(&attente.premier)?;
        let b = lit_nombre(&normalise(saisie.instantane()))?;
        let resultat = attente.operateur.applique(a, b)?;

        tracing::debug!(
            premier = %attente.premier,
            operateur = %attente.operateur,
            second = %saisie.instantane(),
            resultat,
            "évaluation"
        );

        saisie.remplace(formate_resultat(resultat));
        self.en_attente = None;
        Ok(true)
    }
}

/// Séparateur décimal : `,` -> `.`.
pub fn normalise(texte: &str) -> String {
    texte.replace(',', ".")
}

/// Lit un opérande déjà normalisé.
///
/// Accepte ce que `f64::from_str` accepte (donc aussi "5.", ".5", "-3.00",
/// "Infinity", "NaN" : un résultat affiché peut redevenir un opérande).
/// Refuse la chaîne vide et "." seul.
pub fn lit_nombre(texte: &str) -> Result<f64, ErreurCalc> {
    texte
        .parse::<f64>()
        .map_err(|_| ErreurCalc::NombreInvalide(texte.to_string()))
}
