use crate::util::*;
use std::fmt;
use serde::Serializer;
use super::cardvector::card_parser;

plain_enum_mod!(modefarbe, EFarbe {
    Eichel,
    Gras,
    Herz,
    Schelln,
});

impl fmt::Display for EFarbe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Self::Eichel => "Eichel",
            Self::Gras => "Gras",
            Self::Herz => "Herz",
            Self::Schelln => "Schelln",
        } )
    }
}

impl std::str::FromStr for EFarbe {
    type Err = VParseCardError;
    fn from_str(str_farbe: &str) -> Result<Self, Self::Err> {
        EFarbe::values()
            .find(|efarbe| efarbe.to_string().eq_ignore_ascii_case(str_farbe.trim()))
            .ok_or_else(|| VParseCardError::UnknownFarbe(str_farbe.to_string()))
    }
}

// Declaration order is strength order for non-trumpf cards (strongest first).
// Trumpf ranking and plain ranking are both derived by enumerating this order.
plain_enum_mod!(modeschlag, ESchlag {
    Ass,
    Koenig,
    Ober,
    Unter,
    Zehn,
    S9,
    S8,
    S7,
});

impl fmt::Display for ESchlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

plain_enum_mod!(modekurzlang, EKurzLang {
    Kurz,
    Lang,
});

impl EKurzLang {
    pub const fn cards_per_player(self) -> usize {
        8
    }

    pub const fn max_cards_per_player() -> usize {
        8
    }

    pub const fn cards_per_deck(self) -> usize {
        match self {
            Self::Kurz => 24,
            Self::Lang => 32,
        }
    }

    /// Kurz: three players share 24 cards; Lang: four players share 32 cards.
    pub const fn num_players(self) -> usize {
        self.cards_per_deck() / self.cards_per_player()
    }

    pub fn from_num_players(n_players: usize) -> Option<EKurzLang> {
        EKurzLang::values().find(|ekurzlang| ekurzlang.num_players()==n_players)
    }

    pub fn supports_card(self, card: ECard) -> bool {
        match self {
            Self::Lang => true,
            Self::Kurz => card.schlag()!=ESchlag::S7 && card.schlag()!=ESchlag::S8,
        }
    }
}

impl fmt::Display for EKurzLang {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} players)", match self {
            Self::Kurz => "kurz",
            Self::Lang => "lang",
        }, self.num_players())
    }
}

#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum ECard {
    EA, EK, EO, EU, EZ, E9, E8, E7,
    GA, GK, GO, GU, GZ, G9, G8, G7,
    HA, HK, HO, HU, HZ, H9, H8, H7,
    SA, SK, SO, SU, SZ, S9, S8, S7,
}

const ACARD_ALL : [ECard; ECard::SIZE] = {
    use self::ECard::*;
    [
        EA, EK, EO, EU, EZ, E9, E8, E7,
        GA, GK, GO, GU, GZ, G9, G8, G7,
        HA, HK, HO, HU, HZ, H9, H8, H7,
        SA, SK, SO, SU, SZ, S9, S8, S7,
    ]
};

impl ECard {
    pub const SIZE : usize = 32;

    pub fn new(efarbe: EFarbe, eschlag: ESchlag) -> ECard {
        ACARD_ALL[efarbe.to_usize() * ESchlag::SIZE + eschlag.to_usize()]
    }
    pub fn farbe(self) -> EFarbe {
        EFarbe::wrapped_from_usize(self.to_usize() / ESchlag::SIZE)
    }
    pub fn schlag(self) -> ESchlag {
        ESchlag::wrapped_from_usize(self.to_usize() % ESchlag::SIZE)
    }
    pub fn to_usize(self) -> usize {
        self as usize
    }
    /// All cards of the deck, grouped by farbe, each farbe ordered as `ESchlag`.
    pub fn values(ekurzlang: EKurzLang) -> impl Iterator<Item=ECard>+Clone {
        use itertools::iproduct;
        iproduct!(
            EFarbe::values(),
            ESchlag::values()
        )
        .map(|(efarbe, eschlag)| ECard::new(efarbe, eschlag))
        .filter(move |&card| ekurzlang.supports_card(card))
    }
}

impl fmt::Debug for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for ECard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}",
            match self.farbe() {
                EFarbe::Eichel => "E",
                EFarbe::Gras => "G",
                EFarbe::Herz => "H",
                EFarbe::Schelln => "S",
            },
            match self.schlag() {
                ESchlag::S7 => "7",
                ESchlag::S8 => "8",
                ESchlag::S9 => "9",
                ESchlag::Zehn => "Z",
                ESchlag::Unter => "U",
                ESchlag::Ober => "O",
                ESchlag::Koenig => "K",
                ESchlag::Ass => "A",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VParseCardError {
    UnknownFarbe(String),
    Malformed(String),
}

impl fmt::Display for VParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownFarbe(str_farbe) => write!(f, "unknown farbe \"{}\"", str_farbe),
            Self::Malformed(str_in) => write!(f, "could not parse cards from \"{}\"", str_in),
        }
    }
}
impl std::error::Error for VParseCardError {}

impl std::str::FromStr for ECard {
    type Err = VParseCardError;
    fn from_str(str_card: &str) -> Result<Self, Self::Err> {
        parse_trimmed(str_card, card_parser())
            .map_err(|_err| VParseCardError::Malformed(str_card.to_string()))
    }
}

impl serde::Serialize for ECard {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ECard {
    fn deserialize<D>(deserializer: D) -> Result<ECard, D::Error>
        where
            D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[test]
fn test_farbe_schlag_enumerators() {
    assert_eq!(EFarbe::values().count(), 4);
    assert_eq!(ESchlag::values().count(), 8);
    assert_eq!(ECard::values(EKurzLang::Lang).count(), 32);
    assert_eq!(ECard::values(EKurzLang::Kurz).count(), 24);
    for ekurzlang in EKurzLang::values() {
        assert_eq!(ECard::values(ekurzlang).count(), ekurzlang.cards_per_deck());
        assert_eq!(ekurzlang.num_players() * ekurzlang.cards_per_player(), ekurzlang.cards_per_deck());
        assert_eq!(EKurzLang::from_num_players(ekurzlang.num_players()), Some(ekurzlang));
    }
    assert_eq!(EKurzLang::from_num_players(5), None);
}

#[test]
fn test_card_ctor() {
    for efarbe in EFarbe::values() {
        for eschlag in ESchlag::values() {
            let card = ECard::new(efarbe, eschlag);
            assert_eq!(card.farbe(), efarbe);
            assert_eq!(card.schlag(), eschlag);
        }
    }
    assert_eq!(ECard::new(EFarbe::Eichel, ESchlag::Ass), ECard::EA);
    assert_eq!(ECard::new(EFarbe::Gras, ESchlag::Zehn), ECard::GZ);
    assert_eq!(ECard::new(EFarbe::Herz, ESchlag::Ober), ECard::HO);
    assert_eq!(ECard::new(EFarbe::Schelln, ESchlag::S7), ECard::S7);
    assert!(!EKurzLang::Kurz.supports_card(ECard::G8));
    assert!(EKurzLang::Kurz.supports_card(ECard::G9));
}

#[test]
fn test_card_parse() {
    for card in ECard::values(EKurzLang::Lang) {
        assert_eq!(card.to_string().parse::<ECard>(), Ok(card));
    }
    assert_eq!("hx".parse::<ECard>(), Ok(ECard::HZ));
    assert_eq!(" sU ".parse::<ECard>(), Ok(ECard::SU));
    assert_eq!("Q7".parse::<ECard>(), Err(VParseCardError::Malformed("Q7".to_string())));
    assert_eq!("EB".parse::<ECard>(), Err(VParseCardError::Malformed("EB".to_string())));
    assert_eq!("EAK".parse::<ECard>(), Err(VParseCardError::Malformed("EAK".to_string())));
    assert!("E".parse::<ECard>().is_err());
    assert_eq!("herz".parse::<EFarbe>(), Ok(EFarbe::Herz));
    assert!("Karo".parse::<EFarbe>().is_err());
}

#[test]
fn test_serialization() {
    macro_rules! test_card(($($card:ident)*) => {
        $(
            serde_test::assert_tokens(&ECard::$card, &[
                serde_test::Token::Str(stringify!($card)),
            ]);
        )*
    });
    test_card!(
        E7 E8 E9 EZ EU EO EK EA
        G7 G8 G9 GZ GU GO GK GA
        H7 H8 H9 HZ HU HO HK HA
        S7 S8 S9 SZ SU SO SK SA
    );
}

#[test]
fn test_json() {
    use crate::primitives::cardvector::parse_cards;
    let veccard : Vec<ECard> = verify!(parse_cards("EO HZ S7")).unwrap();
    let str_json = verify!(serde_json::to_string(&veccard)).unwrap();
    assert_eq!(str_json, r#"["EO","HZ","S7"]"#);
    assert_eq!(verify!(serde_json::from_str::<Vec<ECard>>(&str_json)).unwrap(), veccard);
    assert!(serde_json::from_str::<ECard>(r#""E1""#).is_err());
}
