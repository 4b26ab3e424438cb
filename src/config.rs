//! Configuration (fenêtre + polices), fichier TOML facultatif.
//!
//! Emplacement par défaut : `<config_dir>/taschenrechner/config.toml`
//! (`~/.config/taschenrechner/config.toml` sous Linux). Tous les champs sont
//! facultatifs ; ce qui manque prend la valeur de la fenêtre d’origine.
//!
//! ```toml
//! [fenetre]
//! largeur = 304
//! hauteur = 422
//!
//! [affichage]
//! taille_police_affichage = 17
//! taille_police_touches = 18
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const LARGEUR_DEFAUT: f32 = 304.0;
const HAUTEUR_DEFAUT: f32 = 422.0;
const POLICE_AFFICHAGE_DEFAUT: f32 = 17.0;
const POLICE_TOUCHES_DEFAUT: f32 = 18.0;

/// Garde-fous : une valeur hors bornes est ramenée dans l’intervalle.
const LARGEUR_BORNES: (f32, f32) = (200.0, 2000.0);
const HAUTEUR_BORNES: (f32, f32) = (280.0, 2000.0);
const POLICE_BORNES: (f32, f32) = (8.0, 72.0);

#[derive(Debug, Error)]
pub enum ErreurConfig {
    #[error("lecture de {chemin} impossible: {source}")]
    Io {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML invalide dans {chemin}: {source}")]
    Toml {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/* ------------------------ Fichier (champs Option, TOML clairsemé) ------------------------ */

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FichierConfig {
    #[serde(default)]
    pub fenetre: SectionFenetre,
    #[serde(default)]
    pub affichage: SectionAffichage,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionFenetre {
    pub largeur: Option<f32>,
    pub hauteur: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionAffichage {
    pub taille_police_affichage: Option<f32>,
    pub taille_police_touches: Option<f32>,
}

/* ------------------------ Valeurs résolues ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    pub largeur: f32,
    pub hauteur: f32,
    pub taille_police_affichage: f32,
    pub taille_police_touches: f32,
}

impl Default for Config {
    fn default() -> Self {
        FichierConfig::default().resout()
    }
}

impl FichierConfig {
    pub fn resout(&self) -> Config {
        Config {
            largeur: borne(self.fenetre.largeur, LARGEUR_DEFAUT, LARGEUR_BORNES),
            hauteur: borne(self.fenetre.hauteur, HAUTEUR_DEFAUT, HAUTEUR_BORNES),
            taille_police_affichage: borne(
                self.affichage.taille_police_affichage,
                POLICE_AFFICHAGE_DEFAUT,
                POLICE_BORNES,
            ),
            taille_police_touches: borne(
                self.affichage.taille_police_touches,
                POLICE_TOUCHES_DEFAUT,
                POLICE_BORNES,
            ),
        }
    }
}

fn borne(v: Option<f32>, defaut: f32, (min, max): (f32, f32)) -> f32 {
    match v {
        Some(x) if x.is_finite() => x.clamp(min, max),
        _ => defaut,
    }
}

/* ------------------------ Chargement ------------------------ */

/// `<config_dir>/taschenrechner/config.toml`, si le dossier de config est connu.
pub fn chemin_defaut() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("taschenrechner").join("config.toml"))
}

pub fn lit_fichier(chemin: &Path) -> Result<Config, ErreurConfig> {
    let texte = fs::read_to_string(chemin).map_err(|source| ErreurConfig::Io {
        chemin: chemin.to_path_buf(),
        source,
    })?;
    depuis_toml(&texte).map_err(|source| ErreurConfig::Toml {
        chemin: chemin.to_path_buf(),
        source,
    })
}

pub fn depuis_toml(texte: &str) -> Result<Config, toml::de::Error> {
    let fichier: FichierConfig = toml::from_str(texte)?;
    Ok(fichier.resout())
}

/// Charge la configuration.
///
/// - chemin explicite (`--config`) : toute erreur est remontée ;
/// - chemin par défaut : absent => défauts, invalide => avertissement + défauts.
pub fn charge(explicite: Option<&Path>) -> Result<Config, ErreurConfig> {
    if let Some(chemin) = explicite {
        let config = lit_fichier(chemin)?;
        tracing::info!(chemin = %chemin.display(), "configuration chargée");
        return Ok(config);
    }

    let Some(chemin) = chemin_defaut() else {
        tracing::debug!("dossier de configuration inconnu, valeurs par défaut");
        return Ok(Config::default());
    };
    if !chemin.exists() {
        tracing::debug!(chemin = %chemin.display(), "pas de fichier de configuration");
        return Ok(Config::default());
    }

    match lit_fichier(&chemin) {
        Ok(config) => {
            tracing::info!(chemin = %chemin.display(), "configuration chargée");
            Ok(config)
        }
        Err(e) => {
            tracing::warn!(erreur = %e, "configuration ignorée, valeurs par défaut");
            Ok(Config::default())
        }
    }
}
