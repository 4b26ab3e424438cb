// src/noyau/format.rs
//
// Affichage du résultat : exactement 2 décimales, séparateur ".".
//
// Arrondi : demi vers le haut, appliqué à l’écriture décimale la plus courte
// du double (celle de `Display`), pas à sa valeur binaire exacte.
// Donc 1.005 -> "1.01" et 0.125 -> "0.13".

use num_bigint::BigInt;
use num_rational::BigRational;

/// Nombre de décimales affichées.
pub const DECIMALES: usize = 2;

/// Formate un résultat pour l’affichage.
///
/// - fini      : `[-]entier.dd` (le signe d’un négatif arrondi à zéro est gardé : "-0.00")
/// - ±infini   : "Infinity" / "-Infinity"
/// - NaN       : "NaN"
pub fn formate_resultat(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let Some(centiemes) = arrondi_echelle(x.abs()) else {
        return format!("{x:.DECIMALES$}");
    };

    let mut chiffres = centiemes.to_string();
    while chiffres.len() <= DECIMALES {
        chiffres.insert(0, '0');
    }
    let coupure = chiffres.len() - DECIMALES;
    let signe = if x.is_sign_negative() { "-" } else { "" };

    format!("{signe}{}.{}", &chiffres[..coupure], &chiffres[coupure..])
}

/// |x| * 10^DECIMALES arrondi (demi vers le haut), en entier exact.
fn arrondi_echelle(x_abs: f64) -> Option<BigInt> {
    let r = decimal_court(x_abs)?;
    let echelle = BigRational::from_integer(num_traits::pow(BigInt::from(10u32), DECIMALES));
    // Ratio::round : demi => loin de zéro (== vers le haut, x_abs >= 0)
    Some((r * echelle).round().to_integer())
}

/// Valeur rationnelle exacte de l’écriture décimale la plus courte de `x` (fini, >= 0).
///
/// `Display` pour f64 n’utilise jamais la notation exponentielle.
fn decimal_court(x: f64) -> Option<BigRational> {
    let texte = x.to_string();
    let (entier, frac) = texte.split_once('.').unwrap_or((texte.as_str(), ""));

    let numer: BigInt = format!("{entier}{frac}").parse().ok()?;
    let denom = num_traits::pow(BigInt::from(10u32), frac.len());

    Some(BigRational::new(numer, denom))
}
