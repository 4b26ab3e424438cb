// src/noyau/touche.rs
//
// Touches du pavé : une seule énumération, un seul point de dispatch
// (voir calculatrice.rs). Les libellés sont ceux affichés sur les boutons.

use std::fmt;
use std::str::FromStr;

use super::erreur::ErreurCalc;

/// Opérateur binaire (une seule opération en attente à la fois).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Modulo,
}

impl Operateur {
    pub const TOUS: [Operateur; 5] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
        Operateur::Modulo,
    ];

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "*",
            Operateur::Divise => "/",
            Operateur::Modulo => "%",
        }
    }

    /// Applique l’opérateur en arithmétique IEEE-754.
    ///
    /// `/` et `%` refusent un diviseur nul (y compris `-0.0`).
    /// `%` est le reste tronqué : le signe suit le dividende.
    pub fn applique(self, a: f64, b: f64) -> Result<f64, ErreurCalc> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Divise | Operateur::Modulo if b == 0.0 => Err(ErreurCalc::DivisionParZero),
            Operateur::Divise => Ok(a / b),
            Operateur::Modulo => Ok(a % b),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

/// Une touche du pavé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    /// Chiffre 0..=9.
    Chiffre(u8),
    /// "00"
    DoubleZero,
    /// "."
    Point,
    /// "BE" : efface le dernier caractère.
    Retour,
    /// "CE" : vide l’entrée.
    Effacer,
    Operateur(Operateur),
    /// "="
    Egal,
}

impl Touche {
    /// Libellé du bouton (inverse de `from_str`).
    pub fn libelle(self) -> &'static str {
        const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Touche::Chiffre(d) => CHIFFRES.get(usize::from(d)).copied().unwrap_or("?"),
            Touche::DoubleZero => "00",
            Touche::Point => ".",
            Touche::Retour => "BE",
            Touche::Effacer => "CE",
            Touche::Operateur(op) => op.symbole(),
            Touche::Egal => "=",
        }
    }
}

impl FromStr for Touche {
    type Err = ErreurCalc;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match s {
            "00" => Touche::DoubleZero,
            "." => Touche::Point,
            "BE" => Touche::Retour,
            "CE" => Touche::Effacer,
            "=" => Touche::Egal,
            _ => {
                if let Some(op) = Operateur::TOUS.into_iter().find(|op| op.symbole() == s) {
                    return Ok(Touche::Operateur(op));
                }
                let mut it = s.chars();
                match (it.next(), it.next()) {
                    (Some(c @ '0'..='9'), None) => Touche::Chiffre(c as u8 - b'0'),
                    _ => return Err(ErreurCalc::ToucheInconnue(s.to_string())),
                }
            }
        };
        Ok(t)
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}
