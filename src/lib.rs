pub mod edict2;
pub mod utility;
