pub trait TNegExt {
    fn neg_if(self, b: bool) -> Self;
}

impl<T: std::ops::Neg<Output=T>> TNegExt for T {
    fn neg_if(self, b: bool) -> Self {
        if b {
            self.neg()
        } else {
            self
        }
    }
}

#[test]
fn test_neg_if() {
    assert_eq!(20isize.neg_if(true), -20);
    assert_eq!(20isize.neg_if(false), 20);
}
