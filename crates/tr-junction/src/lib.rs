//! `tr-junction`: deciding whether a rail cell is a routed junction.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`sign`]     | `SignStack`, `StackDirection`, `SignHeader`                |
//! | [`rules`]    | `RuleLine` parsing                                         |
//! | [`junction`] | `Junction`, `JunctionModel::classify`, `collect_rules`     |
//!
//! # Shapes
//!
//! A routed junction is a rail cell whose four cardinal neighbours are all
//! connected rails (4-way) or all but one (3-way, the odd one out is the
//! *open side*), and which has exactly one rule sign stack attached.  An
//! untagged fork is not a junction; the host's own rail physics decides it.

pub mod junction;
pub mod rules;
pub mod sign;


pub use junction::{collect_rules, Junction, JunctionModel};
pub use rules::RuleLine;
pub use sign::{SignHeader, SignStack, StackDirection};
