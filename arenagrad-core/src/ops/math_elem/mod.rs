// Element-wise math functions

pub mod exp;
pub mod ln;

pub use exp::exp_op;
pub use ln::ln_op;
