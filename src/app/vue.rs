// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Un champ d’affichage (lecture seule, aligné à droite, gras)
// - Pavé 4×5 dans l’ordre de la fenêtre d’origine
// - Chaque bouton envoie sa `Touche` ; aucun calcul ici

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{Operateur, Touche};

/// Taille d’un bouton (fenêtre d’origine : 65×57, pas de 66×59).
const TAILLE_BOUTON: [f32; 2] = [65.0, 57.0];
const ESPACE: f32 = 2.0;

/// Disposition du pavé, ligne par ligne.
const PAVE: [[Touche; 4]; 5] = [
    [
        Touche::Retour,
        Touche::Effacer,
        Touche::DoubleZero,
        Touche::Operateur(Operateur::Plus),
    ],
    [
        Touche::Chiffre(7),
        Touche::Chiffre(8),
        Touche::Chiffre(9),
        Touche::Operateur(Operateur::Moins),
    ],
    [
        Touche::Chiffre(4),
        Touche::Chiffre(5),
        Touche::Chiffre(6),
        Touche::Operateur(Operateur::Fois),
    ],
    [
        Touche::Chiffre(1),
        Touche::Chiffre(2),
        Touche::Chiffre(3),
        Touche::Operateur(Operateur::Divise),
    ],
    [
        Touche::Operateur(Operateur::Modulo),
        Touche::Chiffre(0),
        Touche::Point,
        Touche::Egal,
    ],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ESPACE, ESPACE);

        self.ui_affichage(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        let largeur = 4.0 * TAILLE_BOUTON[0] + 3.0 * ESPACE;
        let hauteur = TAILLE_BOUTON[1];

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(largeur, hauteur));
                ui.set_max_width(largeur);
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // Rappel discret de l’opération en attente ("12 +")
                    let rappel = self
                        .calculatrice
                        .en_attente()
                        .map(|e| format!("{} {}", e.premier, e.operateur))
                        .unwrap_or_default();
                    ui.small(rappel);

                    let mut texte = egui::RichText::new(self.affichage())
                        .size(self.config.taille_police_affichage)
                        .strong();
                    if self.calculatrice.erreur().is_some() {
                        texte = texte.color(ui.visuals().error_fg_color);
                    }
                    ui.add(egui::Label::new(texte).truncate());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // Un clic par frame au plus : on le collecte puis on l’applique.
        let mut clic: Option<Touche> = None;

        egui::Grid::new("pave_taschenrechner")
            .num_columns(4)
            .spacing([ESPACE, ESPACE])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for touche in ligne {
                        let texte = egui::RichText::new(touche.libelle())
                            .size(self.config.taille_police_touches)
                            .strong();
                        if ui.add_sized(TAILLE_BOUTON, egui::Button::new(texte)).clicked() {
                            clic = Some(touche);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(touche) = clic {
            self.clic(touche);
        }
    }
}
