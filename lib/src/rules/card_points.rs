use crate::primitives::*;
#[cfg(test)]
use crate::util::*;

pub fn points_card(card: ECard) -> isize {
    match card.schlag() {
        ESchlag::S7 | ESchlag::S8 | ESchlag::S9 => 0,
        ESchlag::Unter => 2,
        ESchlag::Ober => 3,
        ESchlag::Koenig => 4,
        ESchlag::Zehn => 10,
        ESchlag::Ass => 11,
    }
}

pub fn points_stich(itcard: impl IntoIterator<Item=ECard>) -> isize {
    itcard.into_iter()
        .map(points_card)
        .sum()
}

/// Points in the whole deck; every finished game distributes exactly this many.
pub fn points_total(ekurzlang: EKurzLang) -> isize {
    points_stich(ECard::values(ekurzlang))
}

#[test]
fn test_points_total() {
    assert_eq!(points_total(EKurzLang::Lang), 120);
    assert_eq!(points_total(EKurzLang::Kurz), 120);
    for efarbe in EFarbe::values() {
        assert_eq!(points_stich(ECard::values(EKurzLang::Lang).filter(|card| card.farbe()==efarbe)), 30);
    }
}
