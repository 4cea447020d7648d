use crate::primitives::card::*;
use combine::{char::*, *};

pub fn farbe_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = EFarbe>
    where I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    choice!(
        choice!(char('e'), char('E')).map(|_chr| EFarbe::Eichel),
        choice!(char('g'), char('G')).map(|_chr| EFarbe::Gras),
        choice!(char('h'), char('H')).map(|_chr| EFarbe::Herz),
        choice!(char('s'), char('S')).map(|_chr| EFarbe::Schelln)
    )
}

pub fn schlag_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ESchlag>
    where I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    choice!(
        choice!(char('a'), char('A')).map(|_chr| ESchlag::Ass),
        choice!(char('k'), char('K')).map(|_chr| ESchlag::Koenig),
        choice!(char('o'), char('O')).map(|_chr| ESchlag::Ober),
        choice!(char('u'), char('U')).map(|_chr| ESchlag::Unter),
        choice!(char('z'), char('Z'), char('x'), char('X')).map(|_chr| ESchlag::Zehn),
        char('9').map(|_chr| ESchlag::S9),
        char('8').map(|_chr| ESchlag::S8),
        char('7').map(|_chr| ESchlag::S7)
    )
}

pub fn card_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ECard>
    where I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    (farbe_parser(), schlag_parser()).map(|(efarbe, eschlag)| ECard::new(efarbe, eschlag))
}

/// Parses whitespace-separated card codes such as `"EO HU sa"`.
pub fn parse_cards<C: Extend<ECard>+Default>(str_cards: &str) -> Result<C, VParseCardError> {
    crate::util::parse_trimmed(str_cards, sep_by::<C,_,_>(card_parser(), spaces()))
        .map_err(|_err| VParseCardError::Malformed(str_cards.to_string()))
}

#[test]
fn test_cardvectorparser() {
    use crate::primitives::card::ECard::*;
    assert_eq!(parse_cards::<Vec<_>>("ek Gk hZ hu s7 gZ"), Ok(vec![EK, GK, HZ, HU, S7, GZ]));
    assert_eq!(parse_cards::<Vec<_>>("  EO HO   SA"), Ok(vec![EO, HO, SA]));
    assert_eq!(parse_cards::<Vec<_>>("hx"), Ok(vec![HZ]));
    assert_eq!(parse_cards::<Vec<_>>(""), Ok(vec![]));
    assert_eq!(
        parse_cards::<Vec<_>>("EO HP"),
        Err(VParseCardError::Malformed("EO HP".to_string())),
    );
    assert!(parse_cards::<Vec<_>>("EO,HO").is_err());
}

#[test]
fn test_card_parsers_single() {
    use crate::util::parse_trimmed;
    assert_eq!(parse_trimmed("g", farbe_parser()), Ok(EFarbe::Gras));
    assert_eq!(parse_trimmed("X", schlag_parser()), Ok(ESchlag::Zehn));
    assert_eq!(parse_trimmed("sk", card_parser()), Ok(ECard::SK));
    assert!(parse_trimmed("sk", farbe_parser()).is_err());
}
