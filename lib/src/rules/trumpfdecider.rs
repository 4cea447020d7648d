use crate::primitives::*;
use crate::rules::VTrumpfOrFarbe;
use crate::util::*;
use arrayvec::ArrayVec;
use itertools::Itertools;
use std::fmt;

/// Decides which cards are trumpf and how cards compare within a stich.
///
/// Trumpf consists of every card whose schlag is in `vecschlag_trumpf`
/// (strongest schlag first, within one schlag ordered as `EFarbe`),
/// followed by the remaining cards of `efarbe_trumpf` (ordered as `ESchlag`).
/// Rank 0 is the strongest card of the game.
#[derive(Clone, Debug)]
pub struct STrumpfDecider {
    efarbe_trumpf: EFarbe,
    vecschlag_trumpf: ArrayVec<ESchlag, {ESchlag::SIZE}>,
    veccard_trumpf_in_descending_order: ArrayVec<ECard, {ECard::SIZE}>,
    aon_rank_trumpf: [Option<usize>; ECard::SIZE],
    mapschlagon_rank_farbe: EnumMap<ESchlag, Option<usize>>,
}

impl STrumpfDecider {
    pub fn new(efarbe_trumpf: EFarbe, slcschlag_trumpf: &[ESchlag]) -> Self {
        assert!(!slcschlag_trumpf.is_empty());
        assert!(slcschlag_trumpf.iter().map(|eschlag| eschlag.to_usize()).all_unique());
        let is_schlag_trumpf = |eschlag: ESchlag| slcschlag_trumpf.contains(&eschlag);
        let veccard_trumpf_in_descending_order : ArrayVec<ECard, {ECard::SIZE}> = itertools::chain(
            slcschlag_trumpf.iter().copied()
                .flat_map(|eschlag|
                    EFarbe::values()
                        .map(move |efarbe| ECard::new(efarbe, eschlag))
                ),
            ESchlag::values()
                .filter(|&eschlag| !is_schlag_trumpf(eschlag))
                .map(|eschlag| ECard::new(efarbe_trumpf, eschlag))
        ).collect();
        let mut aon_rank_trumpf = [None; ECard::SIZE];
        for (i_rank, card) in veccard_trumpf_in_descending_order.iter().enumerate() {
            assert!(aon_rank_trumpf[card.to_usize()].is_none());
            aon_rank_trumpf[card.to_usize()] = Some(i_rank);
        }
        let mut mapschlagon_rank_farbe = ESchlag::map_from_fn(|_eschlag| None);
        for (i_rank, eschlag) in ESchlag::values().filter(|&eschlag| !is_schlag_trumpf(eschlag)).enumerate() {
            mapschlagon_rank_farbe[eschlag] = Some(i_rank);
        }
        Self {
            efarbe_trumpf,
            vecschlag_trumpf: slcschlag_trumpf.iter().copied().collect(),
            veccard_trumpf_in_descending_order,
            aon_rank_trumpf,
            mapschlagon_rank_farbe,
        }
    }

    /// Ober, Unter and Herz, as used by Sauspiel.
    pub fn new_ober_unter_herz() -> Self {
        Self::new(EFarbe::Herz, &[ESchlag::Ober, ESchlag::Unter])
    }

    pub fn trumpffarbe(&self) -> EFarbe {
        self.efarbe_trumpf
    }

    pub fn trumpfschlags(&self) -> &[ESchlag] {
        &self.vecschlag_trumpf
    }

    pub fn trumpforfarbe(&self, card: ECard) -> VTrumpfOrFarbe {
        if self.rank_of(card).is_some() {
            VTrumpfOrFarbe::Trumpf
        } else {
            VTrumpfOrFarbe::Farbe(card.farbe())
        }
    }

    pub fn is_trumpf(&self, card: ECard) -> bool {
        self.trumpforfarbe(card).is_trumpf()
    }

    pub fn rank_of(&self, card: ECard) -> Option<usize> {
        self.aon_rank_trumpf[card.to_usize()]
    }

    /// Rank among non-trumpf cards of the same farbe (0 strongest). `None` for trumpf schlags.
    pub fn plain_rank_of(&self, eschlag: ESchlag) -> Option<usize> {
        self.mapschlagon_rank_farbe[eschlag]
    }

    pub fn trumpfs_in_descending_order(&self) -> impl Iterator<Item=ECard> + '_ {
        self.veccard_trumpf_in_descending_order.iter().copied()
    }

    /// Position (in playing order) of the card taking the stich.
    pub fn winner_position(&self, slccard: &[ECard]) -> usize {
        assert!(!slccard.is_empty());
        let efarbe_first = slccard[0].farbe();
        let b_first_is_trumpf = self.is_trumpf(slccard[0]);
        // smaller key wins: trumpf before farbe
        let key = |card: ECard| -> Option<(bool, usize)> {
            match self.rank_of(card) {
                Some(n_rank) => Some((false, n_rank)),
                None => if !b_first_is_trumpf && card.farbe()==efarbe_first {
                    self.plain_rank_of(card.schlag()).map(|n_rank| (true, n_rank))
                } else {
                    None
                },
            }
        };
        debug_assert!(key(slccard[0]).is_some());
        slccard.iter()
            .enumerate()
            .filter_map(|(i_card, &card)| key(card).map(|tpl_key| (tpl_key, i_card)))
            .min()
            .map_or(0, |(_tpl_key, i_card)| i_card)
    }
}

impl fmt::Display for STrumpfDecider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}", self.vecschlag_trumpf.iter().join(", "), self.efarbe_trumpf)
    }
}

#[test]
fn test_trumpfs_in_descending_order() {
    use crate::primitives::ECard::*;
    let trumpfdecider = STrumpfDecider::new_ober_unter_herz();
    assert_eq!(
        trumpfdecider.trumpfs_in_descending_order().collect::<Vec<_>>(),
        vec![EO, GO, HO, SO, EU, GU, HU, SU, HA, HK, HZ, H9, H8, H7],
    );
    assert_eq!(trumpfdecider.rank_of(EO), Some(0));
    assert_eq!(trumpfdecider.rank_of(H7), Some(13));
    assert_eq!(trumpfdecider.rank_of(EA), None);
    assert_eq!(trumpfdecider.plain_rank_of(ESchlag::Ass), Some(0));
    assert_eq!(trumpfdecider.plain_rank_of(ESchlag::Koenig), Some(1));
    assert_eq!(trumpfdecider.plain_rank_of(ESchlag::Zehn), Some(2));
    assert_eq!(trumpfdecider.plain_rank_of(ESchlag::Ober), None);
    assert_eq!(trumpfdecider.plain_rank_of(ESchlag::Unter), None);
    assert_eq!(trumpfdecider.plain_rank_of(ESchlag::S9), Some(3));
    assert_eq!(trumpfdecider.plain_rank_of(ESchlag::S7), Some(5));
    assert_eq!(trumpfdecider.to_string(), "Ober, Unter, Herz");
}

#[test]
fn test_rank_injective_for_all_configurations() {
    // single schlags, ordered pairs of schlags, and all schlags at once; each with every trumpf farbe
    let vecvecschlag = ESchlag::values()
        .map(|eschlag| vec![eschlag])
        .chain(
            ESchlag::values().cartesian_product(ESchlag::values().collect::<Vec<_>>())
                .filter(|(eschlag_fst, eschlag_snd)| eschlag_fst!=eschlag_snd)
                .map(|(eschlag_fst, eschlag_snd)| vec![eschlag_fst, eschlag_snd])
        )
        .chain(std::iter::once(ESchlag::values().collect()));
    for vecschlag in vecvecschlag {
        for efarbe in EFarbe::values() {
            let trumpfdecider = STrumpfDecider::new(efarbe, &vecschlag);
            let n_trumpf = vecschlag.len() * EFarbe::SIZE + (ESchlag::SIZE - vecschlag.len());
            let vecn_rank = ECard::values(EKurzLang::Lang)
                .filter_map(|card| trumpfdecider.rank_of(card))
                .sorted()
                .collect::<Vec<_>>();
            assert_eq!(vecn_rank, (0..n_trumpf).collect::<Vec<_>>());
            for card in ECard::values(EKurzLang::Lang) {
                assert_eq!(
                    trumpfdecider.is_trumpf(card),
                    vecschlag.contains(&card.schlag()) || card.farbe()==efarbe,
                );
            }
            let vecn_rank_farbe = ESchlag::values()
                .filter(|eschlag| !vecschlag.contains(eschlag))
                .map(|eschlag| verify!(trumpfdecider.plain_rank_of(eschlag)).unwrap())
                .collect::<Vec<_>>();
            assert_eq!(vecn_rank_farbe, (0..ESchlag::SIZE-vecschlag.len()).collect::<Vec<_>>());
        }
    }
}

#[test]
#[should_panic]
fn test_duplicate_trumpfschlag_rejected() {
    STrumpfDecider::new(EFarbe::Herz, &[ESchlag::Ober, ESchlag::Unter, ESchlag::Ober]);
}

#[test]
fn test_winner_position() {
    use crate::primitives::ECard::*;
    let trumpfdecider = STrumpfDecider::new_ober_unter_herz();
    // farbe: highest card of first farbe wins
    assert_eq!(trumpfdecider.winner_position(&[EK, EZ, E7, EA]), 3);
    assert_eq!(trumpfdecider.winner_position(&[EK, E9, E7, E8]), 0);
    // koenig beats zehn
    assert_eq!(trumpfdecider.winner_position(&[EZ, EK, E7, E8]), 1);
    // other farbe never wins
    assert_eq!(trumpfdecider.winner_position(&[E7, GA, SA, E8]), 3);
    // any trumpf beats farbe
    assert_eq!(trumpfdecider.winner_position(&[EA, EZ, H7, EK]), 2);
    // herz is trumpf, not farbe
    assert_eq!(trumpfdecider.winner_position(&[GK, HA, GA, HU]), 3);
    // trumpf order: ober by farbe, then unter, then herz
    assert_eq!(trumpfdecider.winner_position(&[SO, HU, GO, HA]), 2);
    assert_eq!(trumpfdecider.winner_position(&[H7, H8, SU, HZ]), 2);
    assert_eq!(trumpfdecider.winner_position(&[HU, EO, GO, HA]), 1);
    assert_eq!(trumpfdecider.winner_position(&[HZ, HK, H7, H8]), 1);
    // three players
    assert_eq!(trumpfdecider.winner_position(&[GA, GK, GZ]), 0);
    assert_eq!(trumpfdecider.winner_position(&[GZ, SO, EU]), 1);
}
