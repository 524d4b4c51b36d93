/// Budget of a partial or expanding reveal: how many positions may be revealed
/// on the leading (`head`) and trailing (`tail`) side.
///
/// A scalar converts into a symmetric margin, a pair into `(head, tail)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margin {
    pub head: u64,
    pub tail: u64,
}

impl Margin {
    pub const fn new(head: u64, tail: u64) -> Margin {
        Margin { head, tail }
    }

    pub const fn both(count: u64) -> Margin {
        Margin::new(count, count)
    }

    pub const fn head(count: u64) -> Margin {
        Margin::new(count, 0)
    }

    pub const fn tail(count: u64) -> Margin {
        Margin::new(0, count)
    }

    pub fn is_zero(&self) -> bool {
        self.head == 0 && self.tail == 0
    }
}

impl From<u64> for Margin {
    fn from(count: u64) -> Self {
        Margin::both(count)
    }
}

impl From<(u64, u64)> for Margin {
    fn from((head, tail): (u64, u64)) -> Self {
        Margin::new(head, tail)
    }
}
