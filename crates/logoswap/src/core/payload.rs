//! Replacement payload
//!
//! The new logo markup spliced into every matched logo container.

/// Inline SVG for the HarmonJa "Szkoła Psychoterapii" logo
///
/// Substituted verbatim for the old `<svg>...</svg>` block. The markup is
/// itself a single `<svg>` element, so a page that already carries it still
/// matches the anchor and is rewritten to identical text.
pub const LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1200 600" preserveAspectRatio="xMidYMid meet" role="img" aria-labelledby="logo-title-new">
  <title id="logo-title-new">Logo HarmonJa Szkoła Psychoterapii</title>
  
  <!-- Szkoła Psychoterapii (odręczny styl na górze) -->
  <text x="250" y="180" font-family="'Brush Script MT', 'Lucida Handwriting', cursive" font-size="90" font-style="italic" fill="#09395f" opacity="0.9">
    Szkoła Psychoterapii
  </text>
  
  <!-- HarmonJa główny tekst -->
  <text x="180" y="420" font-family="'Segoe UI', Arial, sans-serif" font-size="220" font-weight="700" fill="#09395f" letter-spacing="-5">
    Harmon
  </text>
  
  <!-- "Ja" w niebieskim kwadracie -->
  <rect x="910" y="190" width="280" height="280" fill="#22c7d6" rx="0"/>
  <text x="1050" y="420" font-family="'Segoe UI', Arial, sans-serif" font-size="220" font-weight="700" fill="#ffffff" text-anchor="middle">
    Ja
  </text>
</svg>"##;
