// Selects one of two token trees depending on whether debug assertions are on.
#[cfg(debug_assertions)]
#[macro_export]
macro_rules! if_dbg_else {({$($tt_dbg: tt)*}{$($tt_else: tt)*}) => {
    $($tt_dbg)*
}}
#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! if_dbg_else {({$($tt_dbg: tt)*}{$($tt_else: tt)*}) => {
    $($tt_else)*
}}

#[test]
fn test_if_dbg_else() {
    let n_level = if_dbg_else!({2}{1});
    assert_eq!(n_level, if cfg!(debug_assertions) {2} else {1});
}
