//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::power::types::EffectKind;
