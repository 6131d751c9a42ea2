//! Static catalog of Kenyan counties and the aliases that point at them.
//!
//! The catalog is closed: classification can only ever produce one of the
//! 47 [`County`] variants. Aliases cover spelling variants, "X county"
//! phrasings and towns/neighbourhoods whose county is unambiguous.

// ── County ───────────────────────────────────────────────────────────

/// One of the 47 counties of Kenya.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum County {
    Baringo,
    Bomet,
    Bungoma,
    Busia,
    ElgeyoMarakwet,
    Embu,
    Garissa,
    HomaBay,
    Isiolo,
    Kajiado,
    Kakamega,
    Kericho,
    Kiambu,
    Kilifi,
    Kirinyaga,
    Kisii,
    Kisumu,
    Kitui,
    Kwale,
    Laikipia,
    Lamu,
    Machakos,
    Makueni,
    Mandera,
    Marsabit,
    Meru,
    Migori,
    Mombasa,
    Muranga,
    Nairobi,
    Nakuru,
    Nandi,
    Narok,
    Nyamira,
    Nyandarua,
    Nyeri,
    Samburu,
    Siaya,
    TaitaTaveta,
    TanaRiver,
    TharakaNithi,
    TransNzoia,
    Turkana,
    UasinGishu,
    Vihiga,
    Wajir,
    WestPokot,
}

impl County {
    /// Every county, in alphabetical order of its canonical name.
    pub const ALL: [County; 47] = [
        Self::Baringo,
        Self::Bomet,
        Self::Bungoma,
        Self::Busia,
        Self::ElgeyoMarakwet,
        Self::Embu,
        Self::Garissa,
        Self::HomaBay,
        Self::Isiolo,
        Self::Kajiado,
        Self::Kakamega,
        Self::Kericho,
        Self::Kiambu,
        Self::Kilifi,
        Self::Kirinyaga,
        Self::Kisii,
        Self::Kisumu,
        Self::Kitui,
        Self::Kwale,
        Self::Laikipia,
        Self::Lamu,
        Self::Machakos,
        Self::Makueni,
        Self::Mandera,
        Self::Marsabit,
        Self::Meru,
        Self::Migori,
        Self::Mombasa,
        Self::Muranga,
        Self::Nairobi,
        Self::Nakuru,
        Self::Nandi,
        Self::Narok,
        Self::Nyamira,
        Self::Nyandarua,
        Self::Nyeri,
        Self::Samburu,
        Self::Siaya,
        Self::TaitaTaveta,
        Self::TanaRiver,
        Self::TharakaNithi,
        Self::TransNzoia,
        Self::Turkana,
        Self::UasinGishu,
        Self::Vihiga,
        Self::Wajir,
        Self::WestPokot,
    ];

    /// Canonical display name, as written into the `County` output field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Baringo => "Baringo",
            Self::Bomet => "Bomet",
            Self::Bungoma => "Bungoma",
            Self::Busia => "Busia",
            Self::ElgeyoMarakwet => "Elgeyo Marakwet",
            Self::Embu => "Embu",
            Self::Garissa => "Garissa",
            Self::HomaBay => "Homa Bay",
            Self::Isiolo => "Isiolo",
            Self::Kajiado => "Kajiado",
            Self::Kakamega => "Kakamega",
            Self::Kericho => "Kericho",
            Self::Kiambu => "Kiambu",
            Self::Kilifi => "Kilifi",
            Self::Kirinyaga => "Kirinyaga",
            Self::Kisii => "Kisii",
            Self::Kisumu => "Kisumu",
            Self::Kitui => "Kitui",
            Self::Kwale => "Kwale",
            Self::Laikipia => "Laikipia",
            Self::Lamu => "Lamu",
            Self::Machakos => "Machakos",
            Self::Makueni => "Makueni",
            Self::Mandera => "Mandera",
            Self::Marsabit => "Marsabit",
            Self::Meru => "Meru",
            Self::Migori => "Migori",
            Self::Mombasa => "Mombasa",
            Self::Muranga => "Murang'a",
            Self::Nairobi => "Nairobi",
            Self::Nakuru => "Nakuru",
            Self::Nandi => "Nandi",
            Self::Narok => "Narok",
            Self::Nyamira => "Nyamira",
            Self::Nyandarua => "Nyandarua",
            Self::Nyeri => "Nyeri",
            Self::Samburu => "Samburu",
            Self::Siaya => "Siaya",
            Self::TaitaTaveta => "Taita-Taveta",
            Self::TanaRiver => "Tana River",
            Self::TharakaNithi => "Tharaka-Nithi",
            Self::TransNzoia => "Trans Nzoia",
            Self::Turkana => "Turkana",
            Self::UasinGishu => "Uasin Gishu",
            Self::Vihiga => "Vihiga",
            Self::Wajir => "Wajir",
            Self::WestPokot => "West Pokot",
        }
    }
}

impl std::fmt::Display for County {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Aliases ──────────────────────────────────────────────────────────

/// Lowercase alias → county.
///
/// Order matters: the classifier returns the county of the first alias that
/// occurs in the text, so earlier rows win over later ones.
pub static ALIASES: &[(&str, County)] = &[
    // Spelling variants
    ("homa bay", County::HomaBay),
    ("homa-bay", County::HomaBay),
    ("homabay", County::HomaBay),
    ("elgeyo marakwet", County::ElgeyoMarakwet),
    ("taita taveta", County::TaitaTaveta),
    ("taita-taveta", County::TaitaTaveta),
    ("tharaka nithi", County::TharakaNithi),
    ("tharaka-nithi", County::TharakaNithi),
    // "X county" phrasings
    ("nairobi county", County::Nairobi),
    ("mombasa county", County::Mombasa),
    ("kisumu county", County::Kisumu),
    ("nakuru county", County::Nakuru),
    ("meru county", County::Meru),
    ("kajiado county", County::Kajiado),
    ("lamu county", County::Lamu),
    ("narok county", County::Narok),
    ("kisii county", County::Kisii),
    ("kakamega county", County::Kakamega),
    // Towns and neighbourhoods
    ("eldoret", County::UasinGishu),
    ("rongai", County::Kajiado),
    ("ongata rongai", County::Kajiado),
    ("mathare", County::Nairobi),
    ("eastleigh", County::Nairobi),
    ("kawangware", County::Nairobi),
    ("cbd", County::Nairobi),
    ("gigiri", County::Nairobi),
    ("mwiki", County::Nairobi),
    // Bare county names and their short forms
    ("kisii", County::Kisii),
    ("kisumu", County::Kisumu),
    ("nakuru", County::Nakuru),
    ("elgeyo", County::ElgeyoMarakwet),
    ("baringo", County::Baringo),
    ("bomet", County::Bomet),
    ("busia", County::Busia),
    ("embu", County::Embu),
    ("garissa", County::Garissa),
    ("isiolo", County::Isiolo),
    ("kilifi", County::Kilifi),
    ("kirinyaga", County::Kirinyaga),
    ("kitui", County::Kitui),
    ("kwale", County::Kwale),
    ("laikipia", County::Laikipia),
    ("machakos", County::Machakos),
    ("makueni", County::Makueni),
    ("mandera", County::Mandera),
    ("marsabit", County::Marsabit),
    ("migori", County::Migori),
    ("murang'a", County::Muranga),
    ("nyamira", County::Nyamira),
    ("nyandarua", County::Nyandarua),
    ("nyeri", County::Nyeri),
    ("samburu", County::Samburu),
    ("siaya", County::Siaya),
    ("tana river", County::TanaRiver),
    ("tharaka", County::TharakaNithi),
    ("trans nzoia", County::TransNzoia),
    ("turkana", County::Turkana),
    ("nandi", County::Nandi),
    ("vihiga", County::Vihiga),
    ("wajir", County::Wajir),
    ("west pokot", County::WestPokot),
    ("ukwala", County::Siaya),
];

/// All aliases that resolve to `county`, in table order.
pub fn aliases_of(county: County) -> Vec<&'static str> {
    ALIASES
        .iter()
        .filter(|(_, c)| *c == county)
        .map(|(alias, _)| *alias)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_47_distinct_names() {
        let names: HashSet<&str> = County::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), 47);
    }

    #[test]
    fn test_all_is_alphabetical() {
        let names: Vec<&str> = County::ALL.iter().map(|c| c.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_aliases_are_lowercase_and_unique() {
        let mut seen = HashSet::new();
        for (alias, _) in ALIASES {
            assert_eq!(*alias, alias.to_lowercase(), "alias not lowercase: {alias}");
            assert!(seen.insert(*alias), "duplicate alias: {alias}");
        }
    }

    #[test]
    fn test_aliases_of() {
        assert_eq!(aliases_of(County::Kajiado), vec!["kajiado county", "rongai", "ongata rongai"]);
        assert_eq!(aliases_of(County::Siaya), vec!["siaya", "ukwala"]);
        assert!(aliases_of(County::Kiambu).is_empty());
    }
}
