//! Romanized glyph name tables for the Haab' and Tzolk'in cycles.

/// Haab' month names, in cycle order.
///
/// Indices 0..=17 are the twenty-day months; index 18 is Wayeb', the
/// five-day closing period of the 365-day year.
pub const HAAB_MONTHS: [&str; 19] = [
    "Pop", "Wo", "Sip", "Sotz'", "Sek", "Xul", "Yaxk'in", "Mol", "Ch'en", "Yax", "Sak", "Kej",
    "Mak", "K'ank'in", "Muwan", "Pax", "K'ayab'", "K'umk'u", "Wayeb'",
];

/// Tzolk'in day names, in cycle order (Imix = 0, Ajaw = 19).
pub const TZOLKIN_DAYS: [&str; 20] = [
    "Imix", "Ik'", "Ak'b'al", "K'an", "Chikchan", "Kimi", "Manik'", "Lamat", "Muluk", "Ok",
    "Chuwen", "Eb'", "B'en", "Ix", "Men", "K'ib'", "Kab'an", "Etz'nab'", "Kawak", "Ajaw",
];
