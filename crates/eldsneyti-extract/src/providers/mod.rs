//! One extractor per vendor document shape

pub(crate) mod atlantsolia;
pub(crate) mod daelan;
pub(crate) mod gas_price;
pub(crate) mod n1;
pub(crate) mod orkan_x;
pub(crate) mod skeljungur;
