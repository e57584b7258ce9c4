//! Access decisions for tip content.
//!
//! - **visibility**: per-tip `Gated | Locked | Visible` from the session state
//! - **sections**: free/VIP split, newest kickoff first
//!
//! Everything here is a pure function of its inputs. Rendering layers consume
//! the tags; they never re-derive the rules.

pub mod sections;
pub mod visibility;

pub use sections::{partition_tips, TipSections};
pub use visibility::{gate_tips, vip_section_locked, visibility, GatedTip, Visibility};
