// src/noyau/saisie.rs

/// Tampon de saisie : l’opérande en cours de frappe.
///
/// Invariant : au plus un `.` (tant que seules les méthodes d’édition sont
/// utilisées ; `remplace` dépose un résultat déjà formaté).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Saisie {
    texte: String,
}

impl Saisie {
    /// Ajoute un chiffre (0..=9). Un chiffre hors bornes est ignoré.
    pub fn ajoute_chiffre(&mut self, d: u8) {
        if let Some(c) = char::from_digit(u32::from(d), 10) {
            self.texte.push(c);
        }
    }

    /// Touche "00".
    pub fn ajoute_double_zero(&mut self) {
        self.texte.push_str("00");
    }

    /// Ajoute `.` seulement s’il n’y en a pas déjà un.
    pub fn ajoute_point(&mut self) {
        if !self.texte.contains('.') {
            self.texte.push('.');
        }
    }

    pub fn retour_arriere(&mut self) {
        self.texte.pop();
    }

    pub fn vide(&mut self) {
        self.texte.clear();
    }

    pub fn instantane(&self) -> &str {
        &self.texte
    }

    /// Remplace tout le contenu (résultat de "=").
    pub fn remplace(&mut self, texte: impl Into<String>) {
        self.texte = texte.into();
    }
}
