// src/main.rs
//
// Taschenrechner — point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------
// - NATIF (Linux/Windows/macOS) : eframe::run_native, ou rejeu sans fenêtre (--touches)
// - WEB  (wasm32)              : eframe::WebRunner + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod config;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Taschenrechner";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use super::{config, egui, noyau, AppCalc, TITRE_APP};

    #[derive(Parser, Debug)]
    #[command(name = "taschenrechner", version, about = "Einfacher Taschenrechner")]
    pub struct Args {
        /// Fichier de configuration (TOML) à la place de l’emplacement par défaut
        #[arg(long, value_name = "CHEMIN")]
        pub config: Option<PathBuf>,

        /// Niveau / filtre de journalisation (ex: "debug", "taschenrechner=trace")
        #[arg(long, value_name = "FILTRE")]
        pub journal: Option<String>,

        /// Rejoue des touches sans ouvrir de fenêtre, ex: --touches "1 2 + 8 ="
        #[arg(long, value_name = "TOUCHES")]
        pub touches: Option<String>,
    }

    /// `--journal` > `RUST_LOG` > "info" ; sortie sur stderr.
    fn init_journal(filtre: Option<&str>) {
        let filtre = match filtre {
            Some(f) => EnvFilter::new(f),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        };
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    pub fn main() -> anyhow::Result<()> {
        let args = Args::parse();
        init_journal(args.journal.as_deref());

        if let Some(touches) = &args.touches {
            return rejoue(touches);
        }

        let config = config::charge(args.config.as_deref())
            .context("configuration illisible")?;
        tracing::info!(?config, "démarrage de {TITRE_APP}");

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([config.largeur, config.hauteur])
                .with_resizable(false),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(AppCalc::new(config)))),
        )
        .map_err(|e| anyhow::anyhow!("fenêtre: {e}"))
    }

    /// Shell de rejeu : applique les libellés et imprime l’affichage final.
    fn rejoue(touches: &str) -> anyhow::Result<()> {
        let mut calc = noyau::Calculatrice::new();
        let affichage = calc
            .rejoue(touches.split_whitespace())
            .with_context(|| format!("touches invalides: {touches:?}"))?
            .to_string();
        tracing::debug!(entree = calc.entree(), attente = ?calc.en_attente(), "état final");
        println!("{affichage}");
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{config::Config, AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée au chargement de la page (pas de fichier de config côté web).
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let document = window()
            .and_then(|w| w.document())
            .ok_or_else(|| js_err("document indisponible"))?;
        document.set_title(TITRE_APP);

        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable"))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(AppCalc::new(Config::default())))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
