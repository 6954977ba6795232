//! Name normalization shared by catalog loading and query resolution.

/// Fold a display name or user query into its lookup form: transliterated to
/// ASCII, lowercased, with all whitespace removed. The gender signs fold to
/// a single letter.
///
/// `"Mr. Mime"` becomes `"mr.mime"`, `"Météno"` becomes `"meteno"` and
/// `"Nidoran♀"` becomes `"nidoranf"`.
pub fn normalize(input: &str) -> String {
  let input = input.replace('♀', "f").replace('♂', "m");
  deunicode::deunicode(&input)
    .chars()
    .filter(|c| !c.is_whitespace())
    .map(|c| c.to_ascii_lowercase())
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_case_spaces_and_diacritics() {
    assert_eq!(normalize("Mr. Mime"), "mr.mime");
    assert_eq!(normalize("Météno"), "meteno");
    assert_eq!(normalize("  Plumeline-Buyō "), "plumeline-buyo");
  }

  #[test]
  fn gender_signs_fold_to_letters() {
    assert_eq!(normalize("Nidoran♀"), "nidoranf");
    assert_eq!(normalize("Nidoran ♂"), "nidoranm");
    assert_ne!(normalize("Nidoran♀"), normalize("Nidoran♂"));
  }

  #[test]
  fn is_idempotent() {
    for s in ["Bulbizarre", "Évoli", "Porygon-Z", "mr.mime", "Nidoran♂"] {
      let once = normalize(s);
      assert_eq!(normalize(&once), once);
    }
  }
}
