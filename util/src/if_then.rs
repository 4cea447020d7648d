#[macro_export]
macro_rules! if_then_some {
    ($cond: expr, $val: expr) => {
        if $cond {
            Some($val)
        } else {
            None
        }
    };
}

#[test]
fn test_if_then_some() {
    let n_cards = 3;
    assert_eq!(if_then_some!(1<n_cards, n_cards-1), Some(2));
    assert_eq!(if_then_some!(n_cards<=1, n_cards), None);
}
