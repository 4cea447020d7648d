// Assertion helpers that return the checked value, so that a check can sit
// inside an expression (e.g. `hand.remove(verify!(hand.position(card)))`).

pub trait TVerifiable {
    fn holds(&self) -> bool;
}

impl TVerifiable for bool {
    fn holds(&self) -> bool {
        *self
    }
}

impl<T> TVerifiable for Option<T> {
    fn holds(&self) -> bool {
        self.is_some()
    }
}

impl<TOk, TErr> TVerifiable for Result<TOk, TErr> {
    fn holds(&self) -> bool {
        self.is_ok()
    }
}

impl<T: TVerifiable> TVerifiable for &T {
    fn holds(&self) -> bool {
        T::holds(self)
    }
}

pub fn verify_internal<T: TVerifiable+std::fmt::Debug>(t: T, str_expr: &str) -> T {
    assert!(t.holds(), "verify!({}) failed: {:?}", str_expr, t);
    t
}

#[macro_export]
macro_rules! verify {($e: expr) => {{
    $crate::verify_internal($e, stringify!($e))
}}}

#[macro_export]
macro_rules! debug_verify {($e: expr) => {
    $crate::if_dbg_else!({$crate::verify!($e)}{$e})
}}

#[macro_export]
macro_rules! verify_eq {($e: expr, $e_chk: expr) => {{
    let e = $e;
    assert_eq!(e, $e_chk);
    e
}}}

#[macro_export]
macro_rules! verify_ne {($e: expr, $e_chk: expr) => {{
    let e = $e;
    assert_ne!(e, $e_chk);
    e
}}}

#[macro_export]
macro_rules! debug_verify_eq {($e: expr, $e_chk: expr) => {
    $crate::if_dbg_else!({$crate::verify_eq!($e, $e_chk)}{$e})
}}

#[test]
fn test_verify() {
    assert_eq!(verify!(Some(4)), Some(4));
    assert_eq!(verify_eq!(2+2, 4), 4);
    assert_eq!(verify_ne!(8, 6), 8);
    let res: Result<usize, ()> = Ok(8);
    assert_eq!(debug_verify!(res), Ok(8));
}

#[test]
#[should_panic]
fn test_verify_fails() {
    let on: Option<usize> = None;
    verify!(on);
}
