use num_enum::IntoPrimitive;

/// Operator precedence of an emitted expression. Lower binds tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoPrimitive)]
#[repr(u8)]
pub enum Order {
    Atomic = 0, // 0 "" ...
    UnaryPostfix = 1, // expr++ expr-- () [] .
    UnaryPrefix = 2, // -expr !expr ~expr ++expr --expr
    Multiplicative = 3, // * / %
    Additive = 4, // + -
    Shift = 5, // << >>
    Relational = 6, // >= > <= <
    Equality = 7, // == !=
    BitwiseAnd = 8, // &
    BitwiseXor = 9, // ^
    BitwiseOr = 10, // |
    LogicalAnd = 11, // &&
    LogicalOr = 12, // ||
    Conditional = 13, // expr ? expr : expr
    Assignment = 14, // = *= /= %= += -= <<= >>= &= ^= |=
    None = 99, // (...)
}

impl Order {
    /// Whether an inner expression of order `inner` must be parenthesized
    /// when placed into a slot of order `self`.
    pub fn needs_parens(self, inner: Order) -> bool {
        if self > inner {
            return false;
        }
        // Equal Atomic/None never need wrapping
        !(self == inner && matches!(self, Order::Atomic | Order::None))
    }
}

#[test]
fn test() {
    assert!(Order::Multiplicative.needs_parens(Order::Additive));
    assert!(!Order::Additive.needs_parens(Order::Multiplicative));
    assert!(Order::Additive.needs_parens(Order::Additive));
    assert!(!Order::None.needs_parens(Order::None));
    assert!(!Order::Atomic.needs_parens(Order::Atomic));
    assert_eq!(u8::from(Order::None), 99);
}
