//! Product Catalog Domain
//!
//! Reference data the pricing and issuance logic depends on: DMS programs
//! with their base prices and attached promotional offers, and service
//! regions with their pricing coefficients. The catalog itself is maintained
//! elsewhere (routine CRUD); this crate models the data and the directory
//! ports the rest of the system reads it through.

pub mod program;
pub mod region;
pub mod promo;
pub mod ports;

pub use program::Program;
pub use region::Region;
pub use promo::{PromoOffer, DiscountType};
pub use ports::{ProgramDirectory, RegionDirectory};
